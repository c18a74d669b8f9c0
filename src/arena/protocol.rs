use super::*;
use crate::*;

/// Wire format between the arena and a presentation layer.
/// Events go out as JSON lines; commands come in as short text.
pub struct Protocol;

impl Protocol {
    /// Renders an event as one JSON line.
    pub fn encode(event: &Event) -> Option<String> {
        serde_json::to_string(event)
            .inspect_err(|e| log::warn!("[protocol] failed to encode {:?}: {}", event, e))
            .ok()
    }
    /// Parses a text command such as `pause` or `override fist`.
    pub fn decode(s: &str) -> Result<Command, InputError> {
        let mut words = s.split_whitespace();
        let command = match words.next().map(str::to_ascii_lowercase).as_deref() {
            Some("pause" | "p") => Command::Pause,
            Some("resume" | "r") => Command::Resume,
            Some("restart") => Command::Restart,
            Some("quit" | "q") => Command::Quit,
            Some("override") => Command::Override(words.next().map(String::from)),
            _ => return Err(InputError::UnknownCommand(s.trim().to_string())),
        };
        match words.next() {
            Some(_) => Err(InputError::UnknownCommand(s.trim().to_string())),
            None => Ok(command),
        }
    }
}

/// Rejected external input.
///
/// Callers at the perception and command boundaries map these to
/// [`crate::gesture::GestureLabel::None`] rather than propagating them.
#[derive(Debug, Clone, PartialEq)]
pub enum InputError {
    UnknownGesture(String),
    UnknownHandedness(String),
    UnknownCommand(String),
    Landmarks(usize),
}

impl std::fmt::Display for InputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownGesture(s) => write!(f, "unknown gesture: {}", s),
            Self::UnknownHandedness(s) => write!(f, "unknown handedness: {}", s),
            Self::UnknownCommand(s) => write!(f, "unknown command: {}", s),
            Self::Landmarks(n) => write!(f, "expected {} landmarks, got {}", crate::LANDMARKS, n),
        }
    }
}

impl std::error::Error for InputError {}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn display_names_the_input() {
        assert_eq!(
            InputError::UnknownGesture("thumbs_up".into()).to_string(),
            "unknown gesture: thumbs_up"
        );
        assert_eq!(
            InputError::Landmarks(20).to_string(),
            "expected 21 landmarks, got 20"
        );
    }
}

//! Arena Binary
//!
//! Plays one match against a random opponent, with a synthetic hand
//! standing in for the camera. Reads commands from stdin:
//! `pause`, `resume`, `restart`, `override <move>`, `quit`.
//!
//! Options: --seconds, --player, --enemy, --seed, --hold, --noise, --json, --muted

use clap::Parser;
use colored::Colorize;
use gestureclash::arena::*;
use gestureclash::battle::*;
use gestureclash::source::*;
use gestureclash::*;
use tokio::io::AsyncBufReadExt;

#[derive(Parser)]
#[command(author, version, about = "Rock-paper-scissors battles with hand gestures", long_about = None)]
struct Args {
    /// Match length in seconds
    #[arg(long, default_value_t = MATCH_SECONDS)]
    seconds: Seconds,
    /// Player fighter name
    #[arg(long, default_value = STARTERS[0])]
    player: String,
    /// Enemy fighter name, random starter when omitted
    #[arg(long)]
    enemy: Option<String>,
    /// Seed for the synthetic hand
    #[arg(long, default_value_t = 0)]
    seed: u64,
    /// Seconds the synthetic hand holds each gesture
    #[arg(long, default_value_t = 2.)]
    hold: f64,
    /// Fraction of frames that are dropped or misread
    #[arg(long, default_value_t = 0.1)]
    noise: f64,
    /// Print events as JSON lines
    #[arg(long)]
    json: bool,
    /// Disable commentary, exercising the fallback line
    #[arg(long)]
    muted: bool,
}

impl Args {
    fn config(&self) -> Config {
        Config {
            match_seconds: self.seconds,
            player: Fighter::from(self.player.as_str()),
            enemy: self
                .enemy
                .as_deref()
                .map(Fighter::from)
                .unwrap_or_else(Fighter::random_starter),
            ..Config::default()
        }
    }
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    if !args.json {
        log();
    }
    kys();
    let config = args.config();
    let mime = Mime::new(args.seed, args.hold).with_noise(args.noise);
    let frames = FrameLoop::spawn(mime, config.tracker(), config.frames);
    let gestures = frames.gestures();
    let mut arena = match args.muted {
        true => Arena::spawn(config, gestures, Fish, Muted),
        false => Arena::spawn(config, gestures, Fish, Announcer),
    }
    .with_frames(frames);
    let mut lines = tokio::io::BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            event = arena.next() => match event {
                Some(event) => {
                    show(&event, args.json);
                    if event.is_finished() {
                        break;
                    }
                }
                None => break,
            },
            Ok(Some(line)) = lines.next_line() => match Protocol::decode(&line) {
                Ok(Command::Quit) => break,
                Ok(command) => arena.send(command),
                Err(e) => log::warn!("{}", e),
            },
        }
    }
    arena.quit();
}

fn show(event: &Event, json: bool) {
    if json {
        if let Some(line) = Protocol::encode(event) {
            println!("{}", line);
        }
        return;
    }
    match event {
        Event::Clock { .. } => {}
        Event::Countdown { .. } => println!("{}", event.to_string().dimmed()),
        Event::Reveal { .. } => println!("{}", event.to_string().bold()),
        Event::Resolved { record, .. } => {
            let line = match record.outcome() {
                Outcome::Win if record.finisher() => event.to_string().bright_yellow(),
                Outcome::Win => event.to_string().green(),
                Outcome::Loss => event.to_string().red(),
                Outcome::Tie => event.to_string().normal(),
            };
            println!("{}", line);
            println!("  {}", record.message().italic());
        }
        Event::Finished(result) => {
            let line = match result.winner {
                Winner::Player => result.to_string().green().bold(),
                Winner::Enemy => result.to_string().red().bold(),
                Winner::Tie => result.to_string().bold(),
            };
            println!("{}", line);
        }
        _ => println!("{}", event.to_string().cyan()),
    }
}

//! Camera-driven gesture battles.
//!
//! A hand-landmark source feeds a per-frame classifier, whose raw labels are
//! debounced into a stable gesture, which a timed turn engine scores against
//! an opponent's move.
//!
//! ## Modules
//!
//! - [`gesture`] — Landmarks, finger geometry, classification, stabilization
//! - [`source`] — Landmark sources and the cancellable frame loop
//! - [`battle`] — Synchronous battle state machine and damage rules
//! - [`arena`] — Async shell driving the engine on wall-clock timers
mod error;

pub mod arena;
pub mod battle;
pub mod gesture;
pub mod source;

pub use error::*;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Hit points, always within `0..=MAX_HP`.
pub type Health = u8;
/// Damage dealt by a single strike, before clamping against remaining HP.
pub type Damage = u32;
/// Consecutive player wins.
pub type Streak = u32;
/// Whole seconds on the match and turn clocks.
pub type Seconds = u32;
/// Video frame time in seconds, as reported by the landmark source.
pub type Timestamp = f64;

// ============================================================================
// PERCEPTION PARAMETERS
// ============================================================================
/// Keypoints per detected hand.
pub const LANDMARKS: usize = 21;
/// Simultaneously tracked hands.
pub const MAX_HANDS: usize = 2;
/// Raw labels retained per hand for majority voting.
pub const HISTORY_WINDOW: usize = 5;
/// Votes required to adopt a new stabilized gesture (strictly above 60% of the window).
pub const HISTORY_THRESHOLD: usize = 3;
/// Poll interval of the frame loop (~60 Hz display refresh).
pub const FRAME_INTERVAL: std::time::Duration = std::time::Duration::from_millis(16);

// ============================================================================
// BATTLE RULES
// ============================================================================
/// Starting and maximum HP for both fighters.
pub const MAX_HP: Health = 100;
/// Damage of a winning strike with a streak of one.
pub const BASE_DAMAGE: Damage = 20;
/// Extra damage per win in the current streak beyond the first.
pub const STREAK_DAMAGE: Damage = 10;
/// Streak length at which a win becomes a finisher.
pub const FINISHER_STREAK: Streak = 3;
/// Flat bonus damage on a finisher.
pub const FINISHER_BONUS: Damage = 30;
/// Damage taken when the enemy's move beats the player's.
pub const LOSS_DAMAGE: Damage = 20;
/// Damage taken when the player shows no gesture at reveal.
pub const FORFEIT_DAMAGE: Damage = 10;

// ============================================================================
// PACING
// ============================================================================
/// Default match length.
pub const MATCH_SECONDS: Seconds = 60;
/// Countdown before each reveal.
pub const TURN_SECONDS: Seconds = 3;
/// Interval of the match and turn clocks.
pub const TICK: std::time::Duration = std::time::Duration::from_secs(1);
/// Both moves stay visible this long before scoring.
pub const REVEAL_DWELL: std::time::Duration = std::time::Duration::from_millis(1500);
/// Result display time after a normal turn.
pub const RESULT_DWELL: std::time::Duration = std::time::Duration::from_millis(2500);
/// Result display time after a finisher.
pub const FINISHER_DWELL: std::time::Duration = std::time::Duration::from_millis(4000);
/// Upper bound on waiting for a commentary line.
pub const COMMENTARY_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(3);
/// Commentary used when the provider fails or is too slow.
pub const FALLBACK_COMMENTARY: &str = "The battle rages on!";

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "cli")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}

/// Register Ctrl+C handler for immediate termination.
#[cfg(feature = "cli")]
pub fn kys() {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            println!();
            log::warn!("interrupt received, leaving the arena");
            std::process::exit(0);
        }
    });
}

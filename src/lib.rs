//! Starter kit for Rock-Paper-Scissors bots speaking a line protocol.
//!
//! The match harness talks to the bot over stdin/stdout:
//! - the first line(s) carry the agent id and the maximum round count
//! - every turn the bot prints its move (optional) and the [`SENTINEL`]
//! - the harness answers with two lines: the round result and the opponent's move
//!
//! ## Modules
//!
//! - [`io`] — byte-wise line reader and the hangup guard
//! - [`parse`] — positional field parsing of a single line
//! - [`agent`] — the initialize / update / end-turn lifecycle
//! - [`strategy`] — moves and the pluggable move selection
//! - [`session`] — the bot loop tying agent and strategy together
pub mod agent;
pub mod io;
pub mod parse;
pub mod session;
pub mod strategy;

#[cfg(feature = "cli")]
pub mod cli;

pub use agent::*;
pub use io::*;
pub use parse::*;
pub use session::*;
pub use strategy::*;

// ============================================================================
// PROTOCOL CONSTANTS
// ============================================================================
/// Field delimiter between values on one protocol line.
pub const DELIMITER: char = ',';
/// Token that tells the harness this agent has finished its turn.
pub const SENTINEL: &str = "D_FINISH";

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize logging.
/// Writes to `file` when given, otherwise to stderr. Stays silent at `Off`,
/// since stderr also carries the raw diagnostic echo of each update.
#[cfg(feature = "cli")]
pub fn log(level: log::LevelFilter, file: Option<&std::path::Path>) -> anyhow::Result<()> {
    use anyhow::Context;
    if level == log::LevelFilter::Off {
        return Ok(());
    }
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let init = match file {
        Some(path) => simplelog::WriteLogger::init(
            level,
            config,
            std::fs::File::create(path)
                .with_context(|| format!("create log file {}", path.display()))?,
        ),
        None => simplelog::TermLogger::init(
            level,
            config,
            simplelog::TerminalMode::Stderr,
            simplelog::ColorChoice::Never,
        ),
    };
    init.context("initialize logger")
}

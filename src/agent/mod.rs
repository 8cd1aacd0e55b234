//! The agent lifecycle: initialize, update, end turn.
#[allow(clippy::module_inception)]
mod agent;
mod framing;
mod round;

pub use agent::*;
pub use framing::*;
pub use round::*;

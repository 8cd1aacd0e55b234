//! Move selection.
//!
//! The kit itself never picks a throw. A [`Strategy`] plugs into the
//! [`Session`](crate::Session) loop and decides each turn.
//!
//! ## Implementations
//!
//! - [`Silent`] — ends turns without moving
//! - [`Constant`] — same throw every turn
//! - [`Random`] — uniform random throws, optionally seeded
mod constant;
mod moves;
mod random;
mod silent;
#[allow(clippy::module_inception)]
mod strategy;

pub use constant::*;
pub use moves::*;
pub use random::*;
pub use silent::*;
pub use strategy::*;

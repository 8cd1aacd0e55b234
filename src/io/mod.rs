//! Protocol stream plumbing.
mod hangup;
mod reader;

pub use hangup::*;
pub use reader::*;

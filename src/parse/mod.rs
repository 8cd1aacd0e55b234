//! Positional field parsing for protocol lines.
mod error;
mod fields;

pub use error::*;
pub use fields::*;

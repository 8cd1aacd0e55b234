use super::*;

/// Never throws anything; only ends turns. The bare kit behavior.
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl Strategy for Silent {
    fn decide(&mut self, _: &Turn) -> Option<Move> {
        None
    }
}

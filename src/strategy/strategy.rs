use super::*;
use crate::agent::Round;

/// What a strategy may know when asked for a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Turn {
    /// Agent id assigned by the harness.
    pub id: i64,
    /// Round limit announced by the harness. Nothing enforces it.
    pub max_rounds: i64,
    /// Zero-based count of turns already ended.
    pub number: usize,
}

/// Trait for whatever picks this bot's throws.
///
/// The kit reads and writes the protocol; move selection is entirely up to
/// implementations. Returning `None` ends the turn without a move.
pub trait Strategy {
    /// Pick a move for the coming turn.
    fn decide(&mut self, turn: &Turn) -> Option<Move>;

    /// Receive what the harness reported after a turn.
    /// Not required for deciding; useful for keeping history.
    fn observe(&mut self, _: &Round) {}
}

impl<S> Strategy for Box<S>
where
    S: Strategy + ?Sized,
{
    fn decide(&mut self, turn: &Turn) -> Option<Move> {
        (**self).decide(turn)
    }
    fn observe(&mut self, round: &Round) {
        (**self).observe(round)
    }
}

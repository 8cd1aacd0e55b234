use crate::strategy::Move;

/// What the harness reported after a turn, verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    /// Outcome of the round, in whatever form the harness sends it.
    pub result: String,
    /// The opponent's last throw.
    pub opponent: String,
}

impl Round {
    /// The opponent's throw, if it names one.
    pub fn opponent_move(&self) -> Option<Move> {
        Move::try_from(self.opponent.as_str()).ok()
    }
}

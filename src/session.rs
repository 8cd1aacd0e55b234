use crate::agent::*;
use crate::io::*;
use crate::strategy::*;
use std::io::Read;
use std::io::Write;

/// Runs one match: an [`Agent`] speaking the protocol and a [`Strategy`]
/// choosing its throws.
///
/// Each turn goes:
/// - ask the strategy for a move and submit it, if any
/// - end the turn
/// - wait for the harness to report the round
/// - show the report to the strategy
///
/// The loop has no exit of its own. The match ends when the harness hangs up.
pub struct Session<S, R, W, E> {
    agent: Agent<R, W, E>,
    strategy: S,
    turns: usize,
}

impl<S, R, W, E> Session<S, R, W, E>
where
    S: Strategy,
    R: Read,
    W: Write,
    E: Write,
{
    pub fn new(agent: Agent<R, W, E>, strategy: S) -> Self {
        Self {
            agent,
            strategy,
            turns: 0,
        }
    }

    pub fn agent(&self) -> &Agent<R, W, E> {
        &self.agent
    }
    pub fn strategy(&self) -> &S {
        &self.strategy
    }
    /// Turns ended so far.
    pub fn turns(&self) -> usize {
        self.turns
    }

    /// Play until the harness hangs up.
    /// Only malformed input surfaces as an error.
    pub fn play(&mut self) -> anyhow::Result<()> {
        let result = Hangup::absorb(self.run()).map(|_| ());
        log::info!("match over after {} turns", self.turns);
        result
    }

    fn run(&mut self) -> anyhow::Result<()> {
        self.agent.initialize()?;
        loop {
            self.turn()?;
        }
    }

    fn turn(&mut self) -> anyhow::Result<()> {
        let turn = Turn {
            id: self.agent.id(),
            max_rounds: self.agent.max_rounds(),
            number: self.turns,
        };
        if let Some(throw) = self.strategy.decide(&turn) {
            log::debug!("turn {}: throwing {}", turn.number, throw.name());
            self.agent.submit(&[throw])?;
        }
        self.agent.end_turn()?;
        self.turns += 1;
        let round = self.agent.update()?;
        self.strategy.observe(&round);
        Ok(())
    }
}

use super::*;
use crate::DELIMITER;
use crate::SENTINEL;
use crate::io::*;
use crate::parse::*;
use anyhow::Context;
use std::fmt::Display;
use std::io::Read;
use std::io::Write;

/// The bot's side of the match protocol.
///
/// Owns the input stream for its whole life and speaks over two outputs:
/// the primary one the harness parses, and a diagnostic side channel
/// (stderr in a real match) that the harness only records.
///
/// Call order is `initialize` once, then `end_turn` / `update` per round.
/// None of it is enforced.
#[derive(Debug)]
pub struct Agent<R, W, E> {
    id: i64,
    max_rounds: i64,
    reader: LineReader<R>,
    output: W,
    diagnostics: E,
    delimiter: char,
    framing: Framing,
}

type Stdio = Agent<
    std::io::StdinLock<'static>,
    std::io::StdoutLock<'static>,
    std::io::Stderr,
>;

impl Stdio {
    /// Agent on the process' standard streams.
    pub fn stdio() -> Self {
        Self::new(
            std::io::stdin().lock(),
            std::io::stdout().lock(),
            std::io::stderr(),
        )
    }
}

impl<R, W, E> Agent<R, W, E>
where
    R: Read,
    W: Write,
    E: Write,
{
    pub fn new(input: R, output: W, diagnostics: E) -> Self {
        Self {
            id: 0,
            max_rounds: 0,
            reader: LineReader::new(input),
            output,
            diagnostics,
            delimiter: DELIMITER,
            framing: Framing::default(),
        }
    }
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }
    pub fn with_framing(mut self, framing: Framing) -> Self {
        self.framing = framing;
        self
    }

    pub fn id(&self) -> i64 {
        self.id
    }
    pub fn max_rounds(&self) -> i64 {
        self.max_rounds
    }
    pub fn output(&self) -> &W {
        &self.output
    }
    pub fn diagnostics(&self) -> &E {
        &self.diagnostics
    }

    /// Read the next line from the harness, split into fields.
    pub fn line(&mut self) -> Result<Fields, Hangup> {
        self.reader
            .read_line()
            .map(|line| Fields::new(&line, self.delimiter))
    }
}

impl<R, W, E> Agent<R, W, E>
where
    R: Read,
    W: Write,
    E: Write,
{
    /// Read this agent's id and the round limit.
    pub fn initialize(&mut self) -> anyhow::Result<()> {
        let (id, max_rounds) = match self.framing {
            Framing::Inline => {
                let ref mut fields = self.line()?;
                let id = fields.next_int().context("agent id")?;
                let max = fields.next_int().context("max rounds")?;
                (id, max)
            }
            Framing::Stacked => {
                let id = self.line()?.next_int().context("agent id")?;
                let max = self.line()?.next_int().context("max rounds")?;
                (id, max)
            }
        };
        self.id = id;
        self.max_rounds = max_rounds;
        log::info!("agent {} initialized for {} rounds", id, max_rounds);
        Ok(())
    }

    /// Read the last round's result and the opponent's throw.
    /// Both are echoed raw to the diagnostic stream.
    pub fn update(&mut self) -> anyhow::Result<Round> {
        let result = self.line()?.next_str().context("round result")?;
        let opponent = self.line()?.next_str().context("opponent move")?;
        write!(self.diagnostics, "{}{}", result, opponent)
            .and_then(|_| self.diagnostics.flush())
            .inspect_err(|e| log::warn!("diagnostic echo failed: {}", e))
            .ok();
        log::debug!("round result {:?}, opponent {:?}", result, opponent);
        Ok(Round { result, opponent })
    }

    /// Send commands for this turn as one delimited line.
    /// Nothing is written for an empty slice.
    pub fn submit<T>(&mut self, commands: &[T]) -> Result<(), Hangup>
    where
        T: Display,
    {
        if commands.is_empty() {
            return Ok(());
        }
        let line = commands
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(self.delimiter.to_string().as_str());
        writeln!(self.output, "{}", line)?;
        self.output.flush()?;
        Ok(())
    }

    /// Tell the harness this turn is over.
    pub fn end_turn(&mut self) -> Result<(), Hangup> {
        writeln!(self.output, "{}", SENTINEL)?;
        self.output.flush()?;
        Ok(())
    }
}

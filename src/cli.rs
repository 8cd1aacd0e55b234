use crate::agent::*;
use crate::strategy::*;
use clap::Parser;
use clap::ValueEnum;
use std::path::PathBuf;

/// Which built-in strategy plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Pick {
    Silent,
    Rock,
    Paper,
    Scissors,
    Random,
}

/// Rock-Paper-Scissors bot speaking the line protocol over stdin/stdout.
#[derive(Debug, Parser)]
#[command(name = "rpskit", version, about)]
pub struct Args {
    /// Field delimiter on protocol lines.
    #[arg(long, default_value_t = crate::DELIMITER)]
    pub delimiter: char,
    /// Whether id and max rounds arrive on one line or two.
    #[arg(long, value_enum, default_value_t = Framing::Inline)]
    pub framing: Framing,
    /// Move selection.
    #[arg(long, value_enum, default_value_t = Pick::Silent, env = "RPSKIT_STRATEGY")]
    pub strategy: Pick,
    /// Seed for the random strategy.
    #[arg(long)]
    pub seed: Option<u64>,
    /// Log level (off, error, warn, info, debug, trace).
    #[arg(long, default_value = "off", env = "RPSKIT_LOG")]
    pub log_level: log::LevelFilter,
    /// Write logs here instead of stderr.
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Args {
    pub fn strategy(&self) -> Box<dyn Strategy> {
        match self.strategy {
            Pick::Silent => Box::new(Silent),
            Pick::Rock => Box::new(Constant(Move::R)),
            Pick::Paper => Box::new(Constant(Move::P)),
            Pick::Scissors => Box::new(Constant(Move::S)),
            Pick::Random => match self.seed {
                Some(seed) => Box::new(Random::seeded(seed)),
                None => Box::new(Random::default()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["rpskit"]).unwrap();
        assert_eq!(args.delimiter, ',');
        assert_eq!(args.framing, Framing::Inline);
        assert_eq!(args.log_level, log::LevelFilter::Off);
        assert!(args.log_file.is_none());
    }
    #[test]
    fn overrides() {
        let args = Args::try_parse_from([
            "rpskit",
            "--delimiter",
            " ",
            "--framing",
            "stacked",
            "--strategy",
            "rock",
            "--log-level",
            "debug",
        ])
        .unwrap();
        assert_eq!(args.delimiter, ' ');
        assert_eq!(args.framing, Framing::Stacked);
        assert_eq!(args.strategy, Pick::Rock);
        assert_eq!(args.log_level, log::LevelFilter::Debug);
    }
    #[test]
    fn picks_strategy() {
        let turn = Turn {
            id: 0,
            max_rounds: 1,
            number: 0,
        };
        let args = Args::try_parse_from(["rpskit", "--strategy", "scissors"]).unwrap();
        assert_eq!(args.strategy().decide(&turn), Some(Move::S));
        let args = Args::try_parse_from(["rpskit", "--strategy", "silent"]).unwrap();
        assert_eq!(args.strategy().decide(&turn), None);
        let args = Args::try_parse_from(["rpskit", "--strategy", "random", "--seed", "3"]).unwrap();
        assert!(args.strategy().decide(&turn).is_some());
    }
    #[test]
    fn rejects_unknown_strategy() {
        assert!(Args::try_parse_from(["rpskit", "--strategy", "lizard"]).is_err());
    }
}

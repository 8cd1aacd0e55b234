//! Bot Binary
//!
//! Plays one match over stdin/stdout with a built-in strategy.
//!
//! Options: --delimiter, --framing, --strategy, --seed, --log-level, --log-file

use clap::Parser;
use rpskit::cli::Args;
use rpskit::*;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    log(args.log_level, args.log_file.as_deref())?;
    let agent = Agent::stdio()
        .with_delimiter(args.delimiter)
        .with_framing(args.framing);
    Session::new(agent, args.strategy()).play()
}

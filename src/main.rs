//! Prints expanded fields of the cron expression, one line per field.
//!
//! Usage:
//!   cron-describe "*/15 0 1,15 * 1-5 /usr/bin/find"
//!
//! Log verbosity is controlled by `RUST_LOG` (default: `warn`), logs go to stderr.

use clap::Parser;
use cron_describe::CronExpression;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "cron-describe", version, about = "Expand cron expression fields into their values")]
struct Cli {
    /// Cron expression: five time fields and the command, quoted as a single argument.
    expression: String,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let expression = CronExpression::new(cli.expression)?;

    println!("{}", expression.describe());
    Ok(())
}

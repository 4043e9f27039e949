mod cli;
mod logging;

use std::io::{self, Write};
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use poisplot_report::try_report;

use crate::cli::Cli;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match run(&cli) {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(1);
        }
    }
}

/// Prints the report to stdout. Returns `Ok(false)` when the rate parameter
/// was rejected; the rejection text is still printed to stdout.
fn run(cli: &Cli) -> Result<bool> {
    let args = cli.lambda_args();
    let (lines, accepted) = match try_report(&args) {
        Ok(lines) => (lines, true),
        Err(e) => {
            info!(error = %e, "invalid rate parameter");
            (e.to_lines(), false)
        }
    };

    let mut out = io::stdout().lock();
    for line in &lines {
        out.write_all(line.as_bytes())
            .context("failed to write to stdout")?;
    }
    out.flush().context("failed to flush stdout")?;
    Ok(accepted)
}

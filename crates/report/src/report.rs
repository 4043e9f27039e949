//! Orchestration: validate, then generate, then render.

use poisplot_histogram::render;
use poisplot_pmf::{generate, validate_lambda};
use tracing::{debug, info_span};

use crate::error::ReportError;

/// Program name shown in the usage hint.
pub const PROGRAM_NAME: &str = "poisplot";

/// Usage hint appended to every error message.
pub const USAGE: &str = "Usage: poisplot <lambda>";

/// Runs the pipeline, returning the histogram lines or the rejection.
///
/// The generator and renderer are only reached once validation succeeds.
pub fn try_report(args: &[Option<&str>]) -> Result<Vec<String>, ReportError> {
    let _span = info_span!("report", n_args = args.len()).entered();

    let lambda = validate_lambda(args)?;
    let dist = generate(lambda);
    let lines = render(&dist);
    debug!(n_lines = lines.len(), "report complete");
    Ok(lines)
}

/// Runs the pipeline, folding a rejection into the returned lines.
///
/// On rejection the result is a single element holding the error message and
/// the usage hint. Each element carries its own trailing newline.
pub fn report(args: &[Option<&str>]) -> Vec<String> {
    try_report(args).unwrap_or_else(|e| e.to_lines())
}

//! Error types for the poisplot-report crate.

use poisplot_pmf::PmfError;

use crate::report::USAGE;

/// Error type for the result-typed report entry point.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ReportError {
    /// The rate parameter was rejected.
    #[error("Error: {0}")]
    InvalidParameter(#[from] PmfError),
}

impl ReportError {
    /// Renders the error as output lines: the message followed by the usage
    /// hint, as one element.
    pub fn to_lines(&self) -> Vec<String> {
        vec![format!("{self}\n{USAGE}\n")]
    }
}

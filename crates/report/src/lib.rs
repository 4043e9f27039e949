//! Single entry point: validate the rate parameter, compute the Poisson
//! series and render it as histogram lines.
//!
//! ```rust
//! use poisplot_report::report;
//!
//! let lines = report(&[Some("2")]);
//! assert_eq!(lines[0], "\nPoisson Distribution (lambda = 2.0):\n");
//!
//! let lines = report(&[Some("51")]);
//! assert_eq!(lines.len(), 1);
//! assert!(lines[0].starts_with("Error: "));
//! ```

pub mod error;
pub mod report;

pub use error::ReportError;
pub use report::{PROGRAM_NAME, USAGE, report, try_report};

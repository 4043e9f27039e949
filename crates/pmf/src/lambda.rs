//! The validated Poisson rate parameter.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::error::{PmfError, Rejection};

/// Smallest accepted rate parameter (inclusive).
pub const LAMBDA_MIN: f64 = 1.0;

/// Largest accepted rate parameter (inclusive).
pub const LAMBDA_MAX: f64 = 50.0;

/// A Poisson rate parameter known to lie in `[LAMBDA_MIN, LAMBDA_MAX]`.
///
/// `Display` always shows at least one decimal digit (`2.0`, not `2`).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Lambda(f64);

impl Lambda {
    /// Range-checks `value`. NaN and infinities are rejected.
    pub fn new(value: f64) -> Result<Self, PmfError> {
        if (LAMBDA_MIN..=LAMBDA_MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(Rejection::OutOfRange { value }.into())
        }
    }

    /// Returns the rate as a plain float.
    pub fn get(self) -> f64 {
        self.0
    }
}

impl FromStr for Lambda {
    type Err = PmfError;

    /// Parses after trimming surrounding whitespace, then range-checks.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: f64 = s.trim().parse().map_err(|_| Rejection::Unparseable {
            text: s.to_string(),
        })?;
        Self::new(value)
    }
}

impl fmt::Display for Lambda {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // `{:?}` keeps the trailing ".0" on integral values.
        write!(f, "{:?}", self.0)
    }
}

impl From<Lambda> for f64 {
    fn from(lambda: Lambda) -> Self {
        lambda.0
    }
}

/// Validates a positional argument list holding the rate parameter.
///
/// Exactly one element is accepted, and it must be present (`Some`), parse as
/// a float, and lie in `[LAMBDA_MIN, LAMBDA_MAX]`.
pub fn validate_lambda(args: &[Option<&str>]) -> Result<Lambda, PmfError> {
    let result: Result<Lambda, PmfError> = match args {
        [] => Err(Rejection::Missing.into()),
        [None] => Err(Rejection::Null.into()),
        [Some(text)] => text.parse::<Lambda>(),
        _ => Err(Rejection::TooMany { count: args.len() }.into()),
    };

    match &result {
        Ok(lambda) => debug!(%lambda, "rate parameter accepted"),
        Err(e) => debug!(cause = ?e.cause(), "rate parameter rejected"),
    }
    result
}

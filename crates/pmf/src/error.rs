//! Error types for the poisplot-pmf crate.

/// Which acceptance check a rejected rate parameter failed.
#[derive(Debug, Clone, PartialEq)]
pub enum Rejection {
    /// No argument was supplied.
    Missing,
    /// More than one argument was supplied.
    TooMany {
        /// Number of arguments received.
        count: usize,
    },
    /// The single argument was an absence marker.
    Null,
    /// The text does not parse as a floating-point number.
    Unparseable {
        /// The raw text as received.
        text: String,
    },
    /// The value parsed but lies outside `[LAMBDA_MIN, LAMBDA_MAX]`.
    OutOfRange {
        /// The parsed value.
        value: f64,
    },
}

/// Error type for all fallible operations in the poisplot-pmf crate.
///
/// There is one kind of failure. The display text is fixed so that every
/// rejection reads the same to the user; the [`Rejection`] is kept for logs.
#[derive(Debug, Clone, thiserror::Error)]
pub enum PmfError {
    /// Returned when the rate parameter fails validation.
    #[error("The lambda value must be a numeric value between 1 and 50.")]
    InvalidParameter {
        /// The check that failed.
        cause: Rejection,
    },
}

impl PmfError {
    /// Returns the check that failed.
    pub fn cause(&self) -> &Rejection {
        match self {
            PmfError::InvalidParameter { cause } => cause,
        }
    }
}

impl From<Rejection> for PmfError {
    fn from(cause: Rejection) -> Self {
        PmfError::InvalidParameter { cause }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_message_is_fixed() {
        let causes = [
            Rejection::Missing,
            Rejection::TooMany { count: 3 },
            Rejection::Null,
            Rejection::Unparseable {
                text: "abc".to_string(),
            },
            Rejection::OutOfRange { value: 51.0 },
        ];
        for cause in causes {
            let e = PmfError::from(cause);
            assert_eq!(
                e.to_string(),
                "The lambda value must be a numeric value between 1 and 50."
            );
        }
    }

    #[test]
    fn cause_is_preserved() {
        let e = PmfError::from(Rejection::TooMany { count: 2 });
        assert_eq!(e.cause(), &Rejection::TooMany { count: 2 });
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<PmfError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<PmfError>();
    }
}

//! Poisson rate parameter validation and probability mass evaluation.
//!
//! # Pipeline
//!
//! ```text
//!  ┌──────────────┐     ┌────────────────┐
//!  │  validate     │────▶│  distribution  │
//!  │  (Lambda)     │     │  (pmf series)  │
//!  └──────────────┘     └────────────────┘
//! ```
//!
//! # Quick start
//!
//! ```rust
//! use poisplot_pmf::{DOMAIN_SIZE, generate, validate_lambda};
//!
//! let lambda = validate_lambda(&[Some("2")]).unwrap();
//! let dist = generate(lambda);
//!
//! assert_eq!(dist.len(), DOMAIN_SIZE);
//! assert!((dist.total_mass() - 1.0).abs() < 1e-9);
//! ```

pub mod distribution;
pub mod error;
pub mod lambda;

pub use distribution::{DOMAIN_SIZE, Distribution, generate, poisson_pmf};
pub use error::{PmfError, Rejection};
pub use lambda::{LAMBDA_MAX, LAMBDA_MIN, Lambda, validate_lambda};

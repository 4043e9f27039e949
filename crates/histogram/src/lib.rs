//! ASCII histogram rendering for a Poisson [`Distribution`].
//!
//! One row per domain point whose probability reaches
//! [`MIN_DISPLAY_PROBABILITY`], one `*` per whole percentage point:
//!
//! ```text
//! Poisson Distribution (lambda = 2.0):
//! x= 0 | 0.1353 *************
//! x= 1 | 0.2707 ***************************
//! ...
//! x= 7 | 0.0034
//! ```
//!
//! Rows below the threshold are omitted entirely.
//!
//! [`Distribution`]: poisplot_pmf::Distribution

pub mod render;

pub use render::{
    BAR_CHAR, BARS_PER_UNIT, MIN_DISPLAY_PROBABILITY, bar, format_row, header, render,
    render_into,
};

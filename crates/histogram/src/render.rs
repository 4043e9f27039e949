//! Line formatting for the histogram.

use poisplot_pmf::{Distribution, Lambda};
use tracing::{debug, trace};

/// Probabilities strictly below this are not rendered.
pub const MIN_DISPLAY_PROBABILITY: f64 = 0.0001;

/// Bar glyph.
pub const BAR_CHAR: char = '*';

/// Bar glyphs per unit of probability (one per percentage point).
pub const BARS_PER_UNIT: f64 = 100.0;

/// Header line naming the rate parameter, with a leading blank line.
pub fn header(lambda: Lambda) -> String {
    format!("\nPoisson Distribution (lambda = {lambda}):\n")
}

/// Bar run for probability `p`: `floor(p * BARS_PER_UNIT)` glyphs, possibly none.
pub fn bar(p: f64) -> String {
    let n = (p * BARS_PER_UNIT).floor().max(0.0) as usize;
    std::iter::repeat_n(BAR_CHAR, n).collect()
}

/// Formats the row for count `k`, or `None` when `p` is below
/// [`MIN_DISPLAY_PROBABILITY`].
pub fn format_row(k: u64, p: f64) -> Option<String> {
    if p < MIN_DISPLAY_PROBABILITY {
        return None;
    }
    Some(format!("x={k:2} | {p:.4} {}\n", bar(p)))
}

/// Appends the header and every displayed row of `dist` to `out`.
pub fn render_into(dist: &Distribution, out: &mut Vec<String>) {
    out.push(header(dist.lambda()));

    let mut shown = 0usize;
    for (k, p) in dist.iter() {
        match format_row(k, p) {
            Some(row) => {
                out.push(row);
                shown += 1;
            }
            None => trace!(k, p, "row suppressed"),
        }
    }
    debug!(
        lambda = %dist.lambda(),
        shown,
        suppressed = dist.len() - shown,
        "rendered histogram"
    );
}

/// Renders `dist` into a fresh line list.
pub fn render(dist: &Distribution) -> Vec<String> {
    let mut out = Vec::with_capacity(dist.len() + 1);
    render_into(dist, &mut out);
    out
}

//! Poisson probability mass over the fixed display domain.

use statrs::function::factorial::ln_factorial;
use tracing::debug;

use crate::lambda::Lambda;

/// Number of domain points evaluated: counts `0..DOMAIN_SIZE`.
///
/// For λ ≤ 50 the mass beyond this is below four-decimal display precision.
pub const DOMAIN_SIZE: usize = 80;

/// Poisson probability of observing exactly `k` events at rate `lambda`.
///
/// Evaluated in log space as `exp(k ln λ - λ - ln k!)`, so neither `λ^k` nor
/// `k!` is formed directly.
pub fn poisson_pmf(lambda: f64, k: u64) -> f64 {
    (k as f64 * lambda.ln() - lambda - ln_factorial(k)).exp()
}

/// A Poisson probability series over the domain `0..DOMAIN_SIZE`.
///
/// `probabilities()[k]` holds the mass at count `k`.
#[derive(Debug, Clone, PartialEq)]
pub struct Distribution {
    lambda: Lambda,
    probabilities: Vec<f64>,
}

impl Distribution {
    /// Returns the rate parameter this series was computed for.
    pub fn lambda(&self) -> Lambda {
        self.lambda
    }

    /// Returns the probability series, index-aligned with [`Self::domain`].
    pub fn probabilities(&self) -> &[f64] {
        &self.probabilities
    }

    /// Returns the domain counts `0..DOMAIN_SIZE`.
    pub fn domain(&self) -> impl Iterator<Item = u64> + '_ {
        0..self.probabilities.len() as u64
    }

    /// Iterates `(k, probability)` pairs in increasing `k`.
    pub fn iter(&self) -> impl Iterator<Item = (u64, f64)> + '_ {
        self.domain().zip(self.probabilities.iter().copied())
    }

    /// Number of domain points.
    pub fn len(&self) -> usize {
        self.probabilities.len()
    }

    /// Always false; the domain is fixed and non-empty.
    pub fn is_empty(&self) -> bool {
        self.probabilities.is_empty()
    }

    /// Sum of the series. Slightly below 1 because of truncation.
    pub fn total_mass(&self) -> f64 {
        self.probabilities.iter().sum()
    }
}

/// Evaluates the Poisson mass at every count in `0..DOMAIN_SIZE`.
pub fn generate(lambda: Lambda) -> Distribution {
    let rate = lambda.get();
    let probabilities: Vec<f64> = (0..DOMAIN_SIZE as u64)
        .map(|k| poisson_pmf(rate, k))
        .collect();

    let dist = Distribution {
        lambda,
        probabilities,
    };
    debug!(
        %lambda,
        n_points = dist.len(),
        total_mass = dist.total_mass(),
        "computed poisson distribution"
    );
    dist
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn lambda(v: f64) -> Lambda {
        Lambda::new(v).unwrap()
    }

    #[test]
    fn pmf_at_zero_is_exp_neg_lambda() {
        assert_relative_eq!(poisson_pmf(2.0, 0), (-2.0f64).exp(), epsilon = 1e-12);
        assert_relative_eq!(poisson_pmf(50.0, 0), (-50.0f64).exp(), max_relative = 1e-9);
    }

    #[test]
    fn pmf_matches_direct_formula() {
        // 2^6 e^-2 / 720
        let direct = 64.0 * (-2.0f64).exp() / 720.0;
        assert_relative_eq!(poisson_pmf(2.0, 6), direct, max_relative = 1e-10);
    }

    #[test]
    fn pmf_no_overflow_at_domain_end() {
        let p = poisson_pmf(50.0, 79);
        assert!(p.is_finite());
        assert!(p > 0.0);
        assert!(p < 1e-3);
    }

    #[test]
    fn generate_has_fixed_domain() {
        let dist = generate(lambda(3.0));
        assert_eq!(dist.len(), DOMAIN_SIZE);
        assert!(!dist.is_empty());
        let domain: Vec<u64> = dist.domain().collect();
        assert_eq!(domain.first(), Some(&0));
        assert_eq!(domain.last(), Some(&79));
    }

    #[test]
    fn generate_keeps_lambda() {
        let dist = generate(lambda(12.5));
        assert_eq!(dist.lambda().get(), 12.5);
    }

    #[test]
    fn iter_is_index_aligned() {
        let dist = generate(lambda(4.0));
        for (k, p) in dist.iter() {
            assert_eq!(p, dist.probabilities()[k as usize]);
        }
    }

    #[test]
    fn mode_sits_at_floor_lambda() {
        let dist = generate(lambda(7.5));
        let (mode, _) = dist
            .iter()
            .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap())
            .unwrap();
        assert_eq!(mode, 7);
    }
}

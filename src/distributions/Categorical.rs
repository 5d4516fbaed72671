//! # Categorical distribution
//!
//! The [categorical distribution](https://en.wikipedia.org/wiki/Categorical_distribution)
//! is a discrete distribution over the indices `0, 1, ..., N - 1`, where the
//! index `k` has probability `probs[k]`.
//!
//! It is the only family that is not delegated to the numeric backend. All
//! operations work directly on the stored (normalized) probability vector:
//!
//!  - pmf: `probs[k]`
//!  - cdf: `probs[0] + ... + probs[k]`
//!  - quantile: linear scan from the left.
//!  - sample: [inverse transform sampling](https://en.wikipedia.org/wiki/Inverse_transform_sampling).
//!
//! Evaluating the pmf or the cdf outside of `0..N` is an error, not a `0.0`.
//!

use rand::Rng;
use tracing::warn;

use crate::distributions::convert_p;
use crate::domain::DiscreteDomain;
use crate::errors::DistributionError;
use crate::guard::normalize_weights;

/// Represents a categorical distribution.
#[derive(Debug, Clone, PartialEq)]
pub struct Categorical {
    /// Non-negative, adds up to 1.
    probs: Box<[f64]>,
}

impl Categorical {
    /// Creates a new [Categorical] distribution from a list of weights.
    ///
    ///  - Every weight must be finite and non-negative.
    ///  - The weights must add up to a positive number.
    ///
    /// The weights are normalized (unless they already add up to exactly `1.0`).
    /// Otherwise an [DistributionError::InvalidArgument] is returned.
    pub fn new(weights: &[f64]) -> Result<Categorical, DistributionError> {
        let probs: Box<[f64]> = normalize_weights(weights.to_vec())?;
        return Ok(Categorical { probs });
    }

    /// Wraps a probability vector that already passed [normalize_weights].
    pub(crate) fn from_normalized(probs: Box<[f64]>) -> Categorical {
        return Categorical { probs };
    }

    /// The normalized probabilities.
    #[must_use]
    pub fn probabilities(&self) -> &[f64] {
        return &self.probs;
    }

    /// The number of categories.
    #[must_use]
    pub fn len(&self) -> usize {
        return self.probs.len();
    }

    /// True if there are no categories.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        return self.probs.is_empty();
    }

    /// The support: `{0, 1, ..., N - 1}`.
    #[must_use]
    pub fn domain(&self) -> DiscreteDomain {
        return DiscreteDomain::Range(0, self.probs.len() as i64 - 1);
    }

    fn index(&self, k: f64) -> Result<usize, DistributionError> {
        // also rejects NaN and fractional values
        if 0.0 <= k && k.fract() == 0.0 && k < self.probs.len() as f64 {
            return Ok(k as usize);
        }
        return Err(DistributionError::OutOfRange {
            index: k,
            len: self.probs.len(),
        });
    }

    /// Probability of the category `k`, or its natural logarithm if `log`.
    ///
    /// Returns [DistributionError::OutOfRange] unless `0 <= k < N`.
    pub fn pdf(&self, k: f64, log: bool) -> Result<f64, DistributionError> {
        let p: f64 = self.probs[self.index(k)?];
        if log {
            return Ok(p.ln());
        }
        return Ok(p);
    }

    /// Probability of getting a category `<= k` (or `> k` if `complement`),
    /// optionally as a natural logarithm.
    ///
    /// Returns [DistributionError::OutOfRange] unless `0 <= k < N`.
    pub fn cdf(&self, k: f64, log: bool, complement: bool) -> Result<f64, DistributionError> {
        let i: usize = self.index(k)?;
        let p: f64 = self.probs[..=i].iter().sum();
        return Ok(convert_p(p, log, complement));
    }

    /// The category `k` where the cumulative probability reaches `p`.
    ///
    /// Scans the probabilities from the left, subtracting each one from `p`
    /// until the remainder is smaller than the current probability.
    ///
    ///  - `log` or `complement` are not supported and return
    ///     [DistributionError::UnsupportedCombination].
    ///  - If the scan goes past the last category ([DistributionError::ExhaustedSupport]).
    ///     This happens for `1.0 <= p` (or NaN), and also for `p` just below
    ///     `1.0` when the rounded probabilities leave a remainder at the end.
    pub fn inv_cdf(&self, p: f64, log: bool, complement: bool) -> Result<usize, DistributionError> {
        if log || complement {
            return Err(DistributionError::UnsupportedCombination {
                operation: "inv_cdf",
                log,
                complement,
            });
        }

        let mut remainder: f64 = p;
        for (i, &w) in self.probs.iter().enumerate() {
            if remainder < w {
                return Ok(i);
            }
            remainder = remainder - w;
        }

        warn!(p, len = self.probs.len(), "categorical inverse scan exhausted");
        return Err(DistributionError::ExhaustedSupport { p });
    }

    /// Draws `u` uniformly in `[0, 1)` from `rng` and returns `inv_cdf(u)`.
    ///
    /// Can return [DistributionError::ExhaustedSupport] for a `u` very close
    /// to `1.0` (see [Categorical::inv_cdf]).
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<usize, DistributionError> {
        let u: f64 = rng.random::<f64>();
        return self.inv_cdf(u, false, false);
    }

    /// Draws `n` categories from `rng`.
    pub fn sample_multiple<R: Rng + ?Sized>(
        &self,
        n: usize,
        rng: &mut R,
    ) -> Result<Vec<usize>, DistributionError> {
        return (0..n).map(|_| self.sample(rng)).collect();
    }
}

//! # Distribution interface
//!
//! The five public operations over any [Distribution]:
//!
//!  - [pdf]: density (or mass) at a point.
//!  - [cdf]: cumulative probability.
//!  - [inv_cdf]: inverse cumulative probability (quantile).
//!  - [sample]: one random draw.
//!  - [enumerate]: the enumeration descriptor.
//!
//! The optional flags (`log`, `complement`) default to `false` and are set
//! with the builder:
//!
//! ```
//! use UnifiedDistributions::distribution::Distribution;
//! use UnifiedDistributions::interface::{cdf, pdf};
//!
//! let d: Distribution = Distribution::categorical([0.25, 0.25, 0.5]).unwrap();
//!
//! let p: f64 = pdf(&d, 1.0).call().unwrap();
//! let log_tail: f64 = cdf(&d, 0.0).log(true).complement(true).call().unwrap();
//! assert_eq!(p, 0.25);
//! assert_eq!(log_tail, 0.75_f64.ln());
//! ```
//!
//! These functions use the default backend. To use another one, see the
//! `*_with` methods of [Distribution].
//!

use rand::RngCore;

use crate::configuration;
use crate::distribution::{Distribution, Enumeration, Sample};
use crate::errors::DistributionError;

/// Density of `distribution` at `x`.
///
/// ## Inputs:
///
/// 1. `distribution`
/// 2. `x`: the point. For the categorical family, an index in `0..N`.
/// 3. `log`: (optional) return the natural logarithm of the density.
///      - The default is `false`.
///
/// ## Results
///
/// For the categorical family, an index outside `0..N` returns
/// [DistributionError::OutOfRange]. For other families, the errors of the
/// backend are returned as [DistributionError::Backend].
#[bon::builder]
pub fn pdf(
    #[builder(start_fn)] distribution: &Distribution,
    #[builder(start_fn)] x: f64,
    #[builder(default)] log: bool,
) -> Result<f64, DistributionError> {
    return distribution.pdf(x, log);
}

/// Cumulative probability of `distribution` at `x`.
///
/// ## Inputs:
///
/// 1. `distribution`
/// 2. `x`: the point. For the categorical family, an index in `0..N`.
/// 3. `log`: (optional) return the natural logarithm of the probability.
/// 4. `complement`: (optional) return `P(X > x)` instead of `P(X <= x)`.
///      - The complement is applied before the logarithm.
#[bon::builder]
pub fn cdf(
    #[builder(start_fn)] distribution: &Distribution,
    #[builder(start_fn)] x: f64,
    #[builder(default)] log: bool,
    #[builder(default)] complement: bool,
) -> Result<f64, DistributionError> {
    return distribution.cdf(x, log, complement);
}

/// Inverse of [cdf]: the `x` such that `cdf(x) = p`, with the same meaning
/// for `log` (`p` is a log-probability) and `complement` (`p` is a tail
/// probability).
///
/// The categorical family returns [DistributionError::UnsupportedCombination]
/// if either flag is set.
#[bon::builder]
pub fn inv_cdf(
    #[builder(start_fn)] distribution: &Distribution,
    #[builder(start_fn)] p: f64,
    #[builder(default)] log: bool,
    #[builder(default)] complement: bool,
) -> Result<f64, DistributionError> {
    return distribution.inv_cdf(p, log, complement);
}

/// One random draw from `distribution`.
///
/// `rng` is optional. If it is not given, the process-wide generator
/// ([configuration::thread_rng]) is used. Give a seeded generator
/// ([configuration::seeded_rng]) for reproducible results.
#[bon::builder]
pub fn sample<'d, 'r>(
    #[builder(start_fn)] distribution: &'d Distribution,
    rng: Option<&'r mut dyn RngCore>,
) -> Result<Sample, DistributionError> {
    return match rng {
        Some(rng) => distribution.sample(rng),
        None => distribution.sample(&mut configuration::thread_rng()),
    };
}

/// The enumeration descriptor of `distribution`: a finite count, lazy
/// (infinite but listable) or not enumerable.
#[must_use]
pub fn enumerate(distribution: &Distribution) -> Enumeration {
    return distribution.enumeration();
}

//! # Logistic distribution
//!
//! The [logistic distribution](https://en.wikipedia.org/wiki/Logistic_distribution),
//! in closed form. `statrs` does not provide it, so it is written here against
//! the same traits ([Continuous], [ContinuousCDF]) so the backend can treat it
//! like any other real family.
//!
//! With `z = (x - mean) / scale`:
//!
//!  > pdf(x) = e^-z / (scale * (1 + e^-z)^2)
//!  > cdf(x) = 1 / (1 + e^-z)
//!  > quantile(p) = mean + scale * ln(p / (1 - p))
//!

use statrs::distribution::{Continuous, ContinuousCDF};
use statrs::statistics::{Max, Min};
use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogisticError {
    /// The mean is NaN or infinite.
    #[error("the mean must be finite")]
    MeanInvalid,
    /// The scale is NaN, infinite, zero or negative.
    #[error("the scale must be finite and stricly positive")]
    ScaleInvalid,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Logistic {
    mean: f64,
    scale: f64,
}

impl Logistic {
    /// Creates a new [Logistic] distribution.
    ///
    ///  - `mean` must be finite.
    ///  - `scale` must be finite and `0.0 < scale`.
    pub fn new(mean: f64, scale: f64) -> Result<Logistic, LogisticError> {
        if !mean.is_finite() {
            return Err(LogisticError::MeanInvalid);
        }
        if !(scale.is_finite() && 0.0 < scale) {
            return Err(LogisticError::ScaleInvalid);
        }
        return Ok(Logistic { mean, scale });
    }

    #[must_use]
    pub const fn get_mean(&self) -> f64 {
        return self.mean;
    }

    #[must_use]
    pub const fn get_scale(&self) -> f64 {
        return self.scale;
    }

    fn standarize(&self, x: f64) -> f64 {
        return (x - self.mean) / self.scale;
    }
}

impl Min<f64> for Logistic {
    fn min(&self) -> f64 {
        return f64::NEG_INFINITY;
    }
}

impl Max<f64> for Logistic {
    fn max(&self) -> f64 {
        return f64::INFINITY;
    }
}

impl Continuous<f64, f64> for Logistic {
    fn pdf(&self, x: f64) -> f64 {
        return self.ln_pdf(x).exp();
    }

    fn ln_pdf(&self, x: f64) -> f64 {
        // symmetric, so use |z| to keep e^-|z| <= 1
        let z: f64 = self.standarize(x).abs();
        return -z - self.scale.ln() - 2.0 * (-z).exp().ln_1p();
    }
}

impl ContinuousCDF<f64, f64> for Logistic {
    fn cdf(&self, x: f64) -> f64 {
        let z: f64 = self.standarize(x);
        return 1.0 / (1.0 + (-z).exp());
    }

    fn sf(&self, x: f64) -> f64 {
        let z: f64 = self.standarize(x);
        return 1.0 / (1.0 + z.exp());
    }

    fn inverse_cdf(&self, p: f64) -> f64 {
        // p = 0 and p = 1 give -inf and inf
        return self.mean + self.scale * (p / (1.0 - p)).ln();
    }
}

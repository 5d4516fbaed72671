//! # Numeric backend
//!
//! The collaborator that supplies the mathematics of every natural and real
//! family: density, cumulative probability, inverse cumulative probability
//! and draws. The categorical family is never sent here.
//!
//! Parameters are passed positionally, in the order declared in the
//! [registry](crate::registry::REGISTRY), already coerced to `f64`. The backend
//! is the one responsible for checking that they are legal (a probability in
//! `[0, 1]`, a positive scale...). Errors are reported as [BackendError] and
//! the rest of the library propagates them unchanged.
//!
//! [StatrsBackend] is the default implementation.
//!

use rand::{Rng, RngCore};
use thiserror::Error;

use crate::registry::Family;

pub mod logistic;
pub mod statrs_backend;

pub use statrs_backend::StatrsBackend;

/// The numeric backend rejected a request (invalid parameters, a probability
/// outside of `[0, 1]`, a NaN...).
#[derive(Error, Debug, Clone, PartialEq)]
#[error("The {family} backend rejected the request: {reason}. ")]
pub struct BackendError {
    pub family: Family,
    pub reason: String,
}

impl BackendError {
    #[must_use]
    pub fn new(family: Family, reason: impl Into<String>) -> BackendError {
        return BackendError {
            family,
            reason: reason.into(),
        };
    }
}

/// The four primitives every natural or real family needs.
///
/// The trait is object safe, so a backend can be passed around as
/// `&dyn NumericBackend`.
pub trait NumericBackend {
    /// Density (or mass) at `x`. The natural logarithm if `log`.
    fn density(
        &self,
        family: Family,
        parameters: &[f64],
        x: f64,
        log: bool,
    ) -> Result<f64, BackendError>;

    /// `P(X <= x)`, or `P(X > x)` if `complement`. The natural logarithm if `log`.
    fn cumulative(
        &self,
        family: Family,
        parameters: &[f64],
        x: f64,
        log: bool,
        complement: bool,
    ) -> Result<f64, BackendError>;

    /// The inverse of [NumericBackend::cumulative] with the same flags:
    /// `p` is a log-probability if `log` and a tail probability if `complement`.
    fn inverse_cumulative(
        &self,
        family: Family,
        parameters: &[f64],
        p: f64,
        log: bool,
        complement: bool,
    ) -> Result<f64, BackendError>;

    /// Draws `count` values from `rng`.
    ///
    /// The deafult method is [Inverse transform sampling](https://en.wikipedia.org/wiki/Inverse_transform_sampling):
    /// generate uniform numbers in `[0, 1)` and evaluate
    /// [NumericBackend::inverse_cumulative] at each one. Natural families
    /// return integer-valued floats.
    fn draw(
        &self,
        family: Family,
        parameters: &[f64],
        count: usize,
        rng: &mut dyn RngCore,
    ) -> Result<Vec<f64>, BackendError> {
        let rand_quantiles: Vec<f64> = (0..count).map(|_| rng.random::<f64>()).collect();

        return rand_quantiles
            .into_iter()
            .map(|u| self.inverse_cumulative(family, parameters, u, false, false))
            .collect();
    }
}

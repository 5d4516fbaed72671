//! The default [NumericBackend], built on [statrs].
//!
//! Each request builds the `statrs` distribution from the positional
//! parameters (wich also validates them) and evaluates it. The parameterization
//! of the registry is translated where `statrs` uses a different one:
//!
//!  - `binomial(n, p)`  -> `Binomial::new(p, n)`, `n` must be a non-negative integer.
//!  - `exponential(mean)` -> `Exp::new(1 / mean)`
//!  - `gamma(shape, scale)` -> `Gamma::new(shape, 1 / scale)`
//!  - `logistic(mean, scale)` -> [Logistic] (closed form, not in `statrs`)
//!
//! The geometric family counts the number of trials until the first success,
//! so its support starts at `1`.
//!

use core::fmt::Display;

use statrs::distribution::{
    Bernoulli, Beta, Binomial, Cauchy, Continuous, ContinuousCDF, Discrete, DiscreteCDF, Exp,
    Gamma, Geometric, Normal, Poisson, Uniform,
};

use super::logistic::Logistic;
use super::{BackendError, NumericBackend};
use crate::distributions::convert_p;
use crate::registry::Family;

/// [NumericBackend] on top of the `statrs` crate. Stateless.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatrsBackend;

trait NaturalModel: Discrete<u64, f64> + DiscreteCDF<u64, f64> {}
impl<D: Discrete<u64, f64> + DiscreteCDF<u64, f64>> NaturalModel for D {}

trait RealModel: Continuous<f64, f64> + ContinuousCDF<f64, f64> {}
impl<D: Continuous<f64, f64> + ContinuousCDF<f64, f64>> RealModel for D {}

enum Model {
    Natural(Box<dyn NaturalModel>),
    Real(Box<dyn RealModel>),
}

fn natural<D, E>(family: Family, built: Result<D, E>) -> Result<Model, BackendError>
where
    D: NaturalModel + 'static,
    E: Display,
{
    return built
        .map(|d| Model::Natural(Box::new(d)))
        .map_err(|e| BackendError::new(family, e.to_string()));
}

fn real<D, E>(family: Family, built: Result<D, E>) -> Result<Model, BackendError>
where
    D: RealModel + 'static,
    E: Display,
{
    return built
        .map(|d| Model::Real(Box::new(d)))
        .map_err(|e| BackendError::new(family, e.to_string()));
}

fn scalars<const N: usize>(family: Family, parameters: &[f64]) -> Result<[f64; N], BackendError> {
    return <[f64; N]>::try_from(parameters).map_err(|_| {
        BackendError::new(
            family,
            format!("expected {N} parameter(s), found {}", parameters.len()),
        )
    });
}

fn trial_count(family: Family, n: f64) -> Result<u64, BackendError> {
    if !(n.is_finite() && 0.0 <= n && n.fract() == 0.0) {
        return Err(BackendError::new(
            family,
            format!("the number of trials must be a non-negative integer, found {n}"),
        ));
    }
    return Ok(n as u64);
}

#[allow(clippy::nonminimal_bool)]
fn reciprocal(family: Family, name: &str, value: f64) -> Result<f64, BackendError> {
    if !(0.0 < value) {
        return Err(BackendError::new(
            family,
            format!("the {name} must be stricly positive, found {value}"),
        ));
    }
    return Ok(1.0 / value);
}

fn model(family: Family, parameters: &[f64]) -> Result<Model, BackendError> {
    return match family {
        Family::Bernoulli => {
            let [prob] = scalars::<1>(family, parameters)?;
            natural(family, Bernoulli::new(prob))
        }
        Family::Binomial => {
            let [n, p] = scalars::<2>(family, parameters)?;
            natural(family, Binomial::new(p, trial_count(family, n)?))
        }
        Family::Geometric => {
            let [p] = scalars::<1>(family, parameters)?;
            natural(family, Geometric::new(p))
        }
        Family::Poisson => {
            let [mean] = scalars::<1>(family, parameters)?;
            natural(family, Poisson::new(mean))
        }
        Family::Beta => {
            let [a, b] = scalars::<2>(family, parameters)?;
            real(family, Beta::new(a, b))
        }
        Family::Cauchy => {
            let [mode, scale] = scalars::<2>(family, parameters)?;
            real(family, Cauchy::new(mode, scale))
        }
        Family::Exponential => {
            let [mean] = scalars::<1>(family, parameters)?;
            real(family, Exp::new(reciprocal(family, "mean", mean)?))
        }
        Family::Gamma => {
            let [shape, scale] = scalars::<2>(family, parameters)?;
            real(family, Gamma::new(shape, reciprocal(family, "scale", scale)?))
        }
        Family::Logistic => {
            let [mean, scale] = scalars::<2>(family, parameters)?;
            real(family, Logistic::new(mean, scale))
        }
        Family::Normal => {
            let [mean, stddev] = scalars::<2>(family, parameters)?;
            real(family, Normal::new(mean, stddev))
        }
        Family::Uniform => {
            let [min, max] = scalars::<2>(family, parameters)?;
            real(family, Uniform::new(min, max))
        }
        Family::Categorical => Err(BackendError::new(
            family,
            "the categorical family is not served by the numeric backend",
        )),
    };
}

fn check_point(family: Family, x: f64) -> Result<(), BackendError> {
    if x.is_nan() {
        return Err(BackendError::new(family, "the point is NaN"));
    }
    return Ok(());
}

/// Undoes the `log` and `complement` flags of an inverse query and checks that
/// the result is a valid probability.
fn plain_probability(family: Family, p: f64, log: bool, complement: bool) -> Result<f64, BackendError> {
    let mut q: f64 = if log { p.exp() } else { p };
    if complement {
        q = 1.0 - q;
    }

    if !(0.0..=1.0).contains(&q) {
        // also NaN
        return Err(BackendError::new(
            family,
            format!("{p} is not a valid probability (log = {log}, complement = {complement})"),
        ));
    }
    return Ok(q);
}

impl NumericBackend for StatrsBackend {
    fn density(
        &self,
        family: Family,
        parameters: &[f64],
        x: f64,
        log: bool,
    ) -> Result<f64, BackendError> {
        check_point(family, x)?;

        let ret: f64 = match model(family, parameters)? {
            Model::Natural(d) => {
                if x < 0.0 || x.fract() != 0.0 {
                    // outside of the support
                    if log { f64::NEG_INFINITY } else { 0.0 }
                } else if log {
                    d.ln_pmf(x as u64)
                } else {
                    d.pmf(x as u64)
                }
            }
            Model::Real(d) => {
                if log {
                    d.ln_pdf(x)
                } else {
                    d.pdf(x)
                }
            }
        };

        return Ok(ret);
    }

    fn cumulative(
        &self,
        family: Family,
        parameters: &[f64],
        x: f64,
        log: bool,
        complement: bool,
    ) -> Result<f64, BackendError> {
        check_point(family, x)?;

        // the survival function is used directly for the complement, it is
        // more precise in the upper tail than `1 - cdf`
        let p: f64 = match model(family, parameters)? {
            Model::Natural(d) => {
                if x < 0.0 {
                    if complement { 1.0 } else { 0.0 }
                } else {
                    let k: u64 = x.floor() as u64;
                    if complement { d.sf(k) } else { d.cdf(k) }
                }
            }
            Model::Real(d) => {
                if complement {
                    d.sf(x)
                } else {
                    d.cdf(x)
                }
            }
        };

        return Ok(convert_p(p, log, false));
    }

    fn inverse_cumulative(
        &self,
        family: Family,
        parameters: &[f64],
        p: f64,
        log: bool,
        complement: bool,
    ) -> Result<f64, BackendError> {
        let built: Model = model(family, parameters)?;
        let q: f64 = plain_probability(family, p, log, complement)?;

        let ret: f64 = match built {
            Model::Natural(d) => {
                let k: u64 = d.inverse_cdf(q);
                // `u64::MAX` is the upper bound of an unbounded support
                if k == u64::MAX { f64::INFINITY } else { k as f64 }
            }
            Model::Real(d) => d.inverse_cdf(q),
        };
        return Ok(ret);
    }
}

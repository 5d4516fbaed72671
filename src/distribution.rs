//! # Distribution
//!
//! [Distribution] is the one value type of the library: an immutable
//! distribution tagged with its [Family].
//!
//! It is created by a constructor ([Distribution::normal],
//! [Distribution::categorical]... or the generic [Distribution::new]) that runs
//! the guard of the family. After that, every operation dispatches on the
//! family tag:
//!
//!  - Natural and real families go to a [NumericBackend], receiving the stored
//!     parameters positionally.
//!  - The categorical family goes to the
//!     [Categorical](crate::distributions::Categorical::Categorical) engine.
//!
//! The `*_with` methods receive the backend (and for sampling, the random
//! source) explicitly. The methods without the suffix use
//! [DEFAULT_BACKEND](crate::configuration::DEFAULT_BACKEND).
//!
//! ```
//! use UnifiedDistributions::distribution::{Distribution, Enumeration};
//!
//! let d: Distribution = Distribution::categorical([2.0, 2.0, 4.0]).unwrap();
//! assert_eq!(d.pdf(2.0, false).unwrap(), 0.5);
//! assert_eq!(d.enumeration(), Enumeration::Finite(3));
//! ```
//!

use rand::RngCore;
use tracing::{debug, trace};

use crate::backend::{BackendError, NumericBackend};
use crate::configuration::{self, DEFAULT_BACKEND};
use crate::distributions::Categorical::Categorical;
use crate::domain::{ContinuousDomain, DiscreteDomain, Support};
use crate::errors::DistributionError;
use crate::guard::{Argument, Parameters};
use crate::registry::{EnumerationRule, Family, FamilySpec, ParameterDomain};

/// An immutable distribution of one of the registered families.
#[derive(Debug, Clone, PartialEq)]
pub struct Distribution {
    family: Family,
    parameters: Parameters,
}

/// A single draw, in the native value type of the family.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Sample {
    /// Natural families and the categorical family.
    Integer(i64),
    /// Real families.
    Real(f64),
}

/// The enumeration descriptor of a distribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Enumeration {
    /// The support has exactly this many values.
    Finite(usize),
    /// The support is infinite but can be listed one value at a time.
    Lazy,
    /// The support cannot be listed.
    NotEnumerable,
}

impl Sample {
    /// The sample as a float, whatever the family.
    #[must_use]
    pub fn as_f64(self) -> f64 {
        return match self {
            Sample::Integer(i) => i as f64,
            Sample::Real(r) => r,
        };
    }

    /// The sample as an integer, if it is one.
    #[must_use]
    pub fn as_integer(self) -> Option<i64> {
        return match self {
            Sample::Integer(i) => Some(i),
            Sample::Real(_) => None,
        };
    }
}

impl Distribution {
    /// Creates a distribution of the given `family` from positional `arguments`.
    ///
    /// The arguments are checked against the parameter list of the family in
    /// the [registry](crate::registry::REGISTRY) and go trough its guard.
    /// Returns [DistributionError::InvalidArgument] if the guard rejects them.
    pub fn new(family: Family, arguments: Vec<Argument>) -> Result<Distribution, DistributionError> {
        let spec: &FamilySpec = family.spec();
        let parameters: Parameters = (spec.guard())(spec, arguments)?;

        debug!(%family, parameters = spec.parameters.len(), "distribution created");
        return Ok(Distribution { family, parameters });
    }

    /// [Bernoulli distribution](https://en.wikipedia.org/wiki/Bernoulli_distribution)
    /// with probability of success `prob`.
    pub fn bernoulli(prob: impl Into<Argument>) -> Result<Distribution, DistributionError> {
        return Distribution::new(Family::Bernoulli, vec![prob.into()]);
    }

    /// [Binomial distribution](https://en.wikipedia.org/wiki/Binomial_distribution)
    /// of `n` trials with probability of success `p`.
    pub fn binomial(
        n: impl Into<Argument>,
        p: impl Into<Argument>,
    ) -> Result<Distribution, DistributionError> {
        return Distribution::new(Family::Binomial, vec![n.into(), p.into()]);
    }

    /// [Geometric distribution](https://en.wikipedia.org/wiki/Geometric_distribution):
    /// number of trials until the first success, with probability of success `p`.
    pub fn geometric(p: impl Into<Argument>) -> Result<Distribution, DistributionError> {
        return Distribution::new(Family::Geometric, vec![p.into()]);
    }

    /// [Poisson distribution](https://en.wikipedia.org/wiki/Poisson_distribution)
    /// with the given `mean`.
    pub fn poisson(mean: impl Into<Argument>) -> Result<Distribution, DistributionError> {
        return Distribution::new(Family::Poisson, vec![mean.into()]);
    }

    /// [Beta distribution](https://en.wikipedia.org/wiki/Beta_distribution)
    /// with shapes `a` and `b`.
    pub fn beta(
        a: impl Into<Argument>,
        b: impl Into<Argument>,
    ) -> Result<Distribution, DistributionError> {
        return Distribution::new(Family::Beta, vec![a.into(), b.into()]);
    }

    /// [Cauchy distribution](https://en.wikipedia.org/wiki/Cauchy_distribution)
    /// centered at `mode`.
    pub fn cauchy(
        mode: impl Into<Argument>,
        scale: impl Into<Argument>,
    ) -> Result<Distribution, DistributionError> {
        return Distribution::new(Family::Cauchy, vec![mode.into(), scale.into()]);
    }

    /// [Exponential distribution](https://en.wikipedia.org/wiki/Exponential_distribution)
    /// with the given `mean` (the inverse of the rate).
    pub fn exponential(mean: impl Into<Argument>) -> Result<Distribution, DistributionError> {
        return Distribution::new(Family::Exponential, vec![mean.into()]);
    }

    /// [Gamma distribution](https://en.wikipedia.org/wiki/Gamma_distribution)
    /// in the shape / scale parameterization.
    pub fn gamma(
        shape: impl Into<Argument>,
        scale: impl Into<Argument>,
    ) -> Result<Distribution, DistributionError> {
        return Distribution::new(Family::Gamma, vec![shape.into(), scale.into()]);
    }

    /// [Logistic distribution](https://en.wikipedia.org/wiki/Logistic_distribution).
    pub fn logistic(
        mean: impl Into<Argument>,
        scale: impl Into<Argument>,
    ) -> Result<Distribution, DistributionError> {
        return Distribution::new(Family::Logistic, vec![mean.into(), scale.into()]);
    }

    /// [Normal distribution](https://en.wikipedia.org/wiki/Normal_distribution).
    pub fn normal(
        mean: impl Into<Argument>,
        stddev: impl Into<Argument>,
    ) -> Result<Distribution, DistributionError> {
        return Distribution::new(Family::Normal, vec![mean.into(), stddev.into()]);
    }

    /// [Continuous uniform distribution](https://en.wikipedia.org/wiki/Continuous_uniform_distribution)
    /// on `[min, max]`.
    pub fn uniform(
        min: impl Into<Argument>,
        max: impl Into<Argument>,
    ) -> Result<Distribution, DistributionError> {
        return Distribution::new(Family::Uniform, vec![min.into(), max.into()]);
    }

    /// [Categorical distribution](https://en.wikipedia.org/wiki/Categorical_distribution)
    /// over `0..weights.len()`.
    ///
    /// The weights must be finite, non-negative and add up to a positive
    /// number. They are stored normalized.
    pub fn categorical(weights: impl Into<Argument>) -> Result<Distribution, DistributionError> {
        return Distribution::new(Family::Categorical, vec![weights.into()]);
    }

    // Introspection

    #[must_use]
    pub const fn family(&self) -> Family {
        return self.family;
    }

    /// The coerced scalar parameters, in declaration order.
    /// [None] for the categorical family.
    #[must_use]
    pub fn parameters(&self) -> Option<&[f64]> {
        return match &self.parameters {
            Parameters::Scalars(values) => Some(values),
            Parameters::Categorical(_) => None,
        };
    }

    /// The normalized weights. [None] unless the family is categorical.
    #[must_use]
    pub fn weights(&self) -> Option<&[f64]> {
        return match &self.parameters {
            Parameters::Scalars(_) => None,
            Parameters::Categorical(categorical) => Some(categorical.probabilities()),
        };
    }

    /// The value of a scalar parameter by its declared name (`"mean"`, `"n"`...).
    #[must_use]
    pub fn parameter(&self, name: &str) -> Option<f64> {
        let index: usize = self.family.spec().parameter_index(name)?;
        return self.parameters()?.get(index).copied();
    }

    /// Returns the enumeration descriptor (see [Enumeration]).
    #[must_use]
    pub fn enumeration(&self) -> Enumeration {
        return match self.family.spec().enumeration {
            EnumerationRule::Count(n) => Enumeration::Finite(n),
            EnumerationRule::Derived(count) => Enumeration::Finite(count(&self.parameters)),
            EnumerationRule::Lazy => Enumeration::Lazy,
            EnumerationRule::NotEnumerable => Enumeration::NotEnumerable,
        };
    }

    /// Returns the support of the distribution.
    ///
    /// The parameters are not validated here: for a distribution the backend
    /// would reject (like `uniform(1, 0)`), the returned domain is meaningless.
    #[must_use]
    pub fn support(&self) -> Support {
        let scalar = |i: usize| -> f64 {
            return self.parameters().and_then(|p| p.get(i).copied()).unwrap_or(f64::NAN);
        };

        return match self.family {
            Family::Bernoulli => Support::Discrete(DiscreteDomain::Range(0, 1)),
            // saturates like the enumeration count
            Family::Binomial => Support::Discrete(DiscreteDomain::Range(0, scalar(0) as i64)),
            Family::Geometric => Support::Discrete(DiscreteDomain::From(1)),
            Family::Poisson => Support::Discrete(DiscreteDomain::From(0)),
            Family::Categorical => {
                let len: usize = self.weights().map_or(0, <[f64]>::len);
                Support::Discrete(DiscreteDomain::Range(0, len as i64 - 1))
            }
            Family::Beta => Support::Continuous(ContinuousDomain::Range(0.0, 1.0)),
            Family::Exponential | Family::Gamma => {
                Support::Continuous(ContinuousDomain::From(0.0))
            }
            Family::Uniform => Support::Continuous(ContinuousDomain::Range(scalar(0), scalar(1))),
            Family::Cauchy | Family::Logistic | Family::Normal => {
                Support::Continuous(ContinuousDomain::Reals)
            }
        };
    }

    // Dispatch

    /// Density (pmf for discrete families) at `x`. The natural logarithm if `log`.
    pub fn pdf_with(
        &self,
        backend: &dyn NumericBackend,
        x: f64,
        log: bool,
    ) -> Result<f64, DistributionError> {
        return match &self.parameters {
            Parameters::Scalars(parameters) => {
                trace!(family = %self.family, x, log, "pdf -> backend");
                Ok(backend.density(self.family, parameters, x, log)?)
            }
            Parameters::Categorical(categorical) => {
                trace!(x, log, "pdf -> categorical engine");
                categorical.pdf(x, log)
            }
        };
    }

    /// `P(X <= x)`, or `P(X > x)` if `complement`. The natural logarithm if `log`.
    pub fn cdf_with(
        &self,
        backend: &dyn NumericBackend,
        x: f64,
        log: bool,
        complement: bool,
    ) -> Result<f64, DistributionError> {
        return match &self.parameters {
            Parameters::Scalars(parameters) => {
                trace!(family = %self.family, x, log, complement, "cdf -> backend");
                Ok(backend.cumulative(self.family, parameters, x, log, complement)?)
            }
            Parameters::Categorical(categorical) => {
                trace!(x, log, complement, "cdf -> categorical engine");
                categorical.cdf(x, log, complement)
            }
        };
    }

    /// The `x` such that `cdf(x, log, complement) = p`.
    ///
    /// The categorical family does not support `log` or `complement`
    /// ([DistributionError::UnsupportedCombination]).
    pub fn inv_cdf_with(
        &self,
        backend: &dyn NumericBackend,
        p: f64,
        log: bool,
        complement: bool,
    ) -> Result<f64, DistributionError> {
        return match &self.parameters {
            Parameters::Scalars(parameters) => {
                trace!(family = %self.family, p, log, complement, "inv_cdf -> backend");
                Ok(backend.inverse_cumulative(self.family, parameters, p, log, complement)?)
            }
            Parameters::Categorical(categorical) => {
                trace!(p, log, complement, "inv_cdf -> categorical engine");
                Ok(categorical.inv_cdf(p, log, complement)? as f64)
            }
        };
    }

    /// One random draw from `rng`, as an integer for natural and categorical
    /// families and as a float for real families.
    pub fn sample_with(
        &self,
        backend: &dyn NumericBackend,
        rng: &mut dyn RngCore,
    ) -> Result<Sample, DistributionError> {
        return match &self.parameters {
            Parameters::Scalars(parameters) => {
                trace!(family = %self.family, "sample -> backend");
                let draws: Vec<f64> = backend.draw(self.family, parameters, 1, rng)?;
                let first: f64 = draws.first().copied().ok_or_else(|| {
                    DistributionError::Backend(BackendError::new(
                        self.family,
                        "the draw returned no values",
                    ))
                })?;
                Ok(self.native(first))
            }
            Parameters::Categorical(categorical) => {
                trace!("sample -> categorical engine");
                Ok(Sample::Integer(categorical.sample(rng)? as i64))
            }
        };
    }

    /// `n` random draws from `rng`. Same value types as [Distribution::sample_with].
    ///
    /// Returns [DistributionError::InvalidArgument] if `n` is greater than
    /// [MAX_BATCH](crate::configuration::sampling::MAX_BATCH).
    pub fn sample_multiple_with(
        &self,
        backend: &dyn NumericBackend,
        n: usize,
        rng: &mut dyn RngCore,
    ) -> Result<Vec<Sample>, DistributionError> {
        if configuration::sampling::MAX_BATCH < n {
            return Err(DistributionError::InvalidArgument {
                family: self.family,
                parameter: "count",
                reason: format!(
                    "{n} samples requested, the maximum is {}",
                    configuration::sampling::MAX_BATCH
                ),
            });
        }

        return match &self.parameters {
            Parameters::Scalars(parameters) => {
                trace!(family = %self.family, n, "sample_multiple -> backend");
                let draws: Vec<f64> = backend.draw(self.family, parameters, n, rng)?;
                Ok(draws.into_iter().map(|x| self.native(x)).collect())
            }
            Parameters::Categorical(categorical) => {
                trace!(n, "sample_multiple -> categorical engine");
                let draws: Vec<usize> = categorical.sample_multiple(n, rng)?;
                Ok(draws.into_iter().map(|k| Sample::Integer(k as i64)).collect())
            }
        };
    }

    /// Natural families truncate the drawn value to an integer.
    fn native(&self, drawn: f64) -> Sample {
        return match self.family.domain() {
            ParameterDomain::Natural | ParameterDomain::Unconstrained => {
                Sample::Integer(drawn as i64)
            }
            ParameterDomain::Real => Sample::Real(drawn),
        };
    }

    /// [Distribution::pdf_with] at every point of `points`.
    pub fn pdf_multiple_with(
        &self,
        backend: &dyn NumericBackend,
        points: &[f64],
        log: bool,
    ) -> Result<Vec<f64>, DistributionError> {
        return points
            .iter()
            .map(|&x| self.pdf_with(backend, x, log))
            .collect::<Result<Vec<f64>, DistributionError>>();
    }

    /// [Distribution::cdf_with] at every point of `points`.
    pub fn cdf_multiple_with(
        &self,
        backend: &dyn NumericBackend,
        points: &[f64],
        log: bool,
        complement: bool,
    ) -> Result<Vec<f64>, DistributionError> {
        return points
            .iter()
            .map(|&x| self.cdf_with(backend, x, log, complement))
            .collect::<Result<Vec<f64>, DistributionError>>();
    }

    // Same operations with the default backend

    pub fn pdf(&self, x: f64, log: bool) -> Result<f64, DistributionError> {
        return self.pdf_with(&DEFAULT_BACKEND, x, log);
    }

    pub fn cdf(&self, x: f64, log: bool, complement: bool) -> Result<f64, DistributionError> {
        return self.cdf_with(&DEFAULT_BACKEND, x, log, complement);
    }

    pub fn inv_cdf(&self, p: f64, log: bool, complement: bool) -> Result<f64, DistributionError> {
        return self.inv_cdf_with(&DEFAULT_BACKEND, p, log, complement);
    }

    /// One draw from `rng` with the default backend.
    pub fn sample(&self, rng: &mut dyn RngCore) -> Result<Sample, DistributionError> {
        return self.sample_with(&DEFAULT_BACKEND, rng);
    }

    pub fn sample_multiple(
        &self,
        n: usize,
        rng: &mut dyn RngCore,
    ) -> Result<Vec<Sample>, DistributionError> {
        return self.sample_multiple_with(&DEFAULT_BACKEND, n, rng);
    }

    pub fn pdf_multiple(&self, points: &[f64], log: bool) -> Result<Vec<f64>, DistributionError> {
        return self.pdf_multiple_with(&DEFAULT_BACKEND, points, log);
    }

    pub fn cdf_multiple(
        &self,
        points: &[f64],
        log: bool,
        complement: bool,
    ) -> Result<Vec<f64>, DistributionError> {
        return self.cdf_multiple_with(&DEFAULT_BACKEND, points, log, complement);
    }
}

impl From<Categorical> for Distribution {
    /// Wraps an already validated [Categorical].
    fn from(categorical: Categorical) -> Self {
        return Distribution {
            family: Family::Categorical,
            parameters: Parameters::Categorical(categorical),
        };
    }
}

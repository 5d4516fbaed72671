#![allow(
    non_snake_case,
    clippy::needless_return,
    clippy::assign_op_pattern,
    clippy::excessive_precision
)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
// ^Disable warning "crate `UnifiedDistributions` should have a snake case name convert the identifier to snake case: `unified_distributions`"
// The rest of the names will follow the snake_case convention.

//! # Unified Distributions
//!
//!
//! This library provides one interface over probability distributions of
//! several parametric families:
//!
//! - [x] [pdf](interface::pdf): density (or mass), optionally as a logarithm.
//! - [x] [cdf](interface::cdf): cumulative probability, optionally as a logarithm
//!     and / or for the upper tail (complement).
//! - [x] [inv_cdf](interface::inv_cdf): inverse cumulative probability.
//! - [x] [sample](interface::sample): random draws, with an injectable random source.
//! - [x] [enumerate](interface::enumerate): the enumeration descriptor of the support.
//! - [ ] Discrete distribution with arbitrary support (values paired with weights)
//! - [x] Updated to rust 2024 version
//!
//! ## Distributions
//!
//! Every distribution is a [Distribution](distribution::Distribution) value,
//! created with a constructor that validates the parameters once. Families are
//! declared in the [registry](registry::REGISTRY): parameter names, domain
//! classification, enumeration descriptor and guard.
//!
//! ### Natural-valued families:
//!
//!  - [x] Bernoulli `(prob)` ([Wiki](https://en.wikipedia.org/wiki/Bernoulli_distribution))
//!  - [x] Binomial `(n, p)` ([Wiki](https://en.wikipedia.org/wiki/Binomial_distribution))
//!  - [x] Geometric `(p)` ([Wiki](https://en.wikipedia.org/wiki/Geometric_distribution))
//!  - [x] Poisson `(mean)` ([Wiki](https://en.wikipedia.org/wiki/Poisson_distribution))
//!
//! ### Real-valued families:
//!
//!  - [x] Beta `(a, b)` ([Wiki](https://en.wikipedia.org/wiki/Beta_distribution))
//!  - [x] Cauchy `(mode, scale)` ([Wiki](https://en.wikipedia.org/wiki/Cauchy_distribution))
//!  - [x] Exponential `(mean)` ([Wiki](https://en.wikipedia.org/wiki/Exponential_distribution))
//!  - [x] Gamma `(shape, scale)` ([Wiki](https://en.wikipedia.org/wiki/Gamma_distribution))
//!  - [x] Logistic `(mean, scale)` ([Wiki](https://en.wikipedia.org/wiki/Logistic_distribution))
//!  - [x] Normal `(mean, stddev)` ([Wiki](https://en.wikipedia.org/wiki/Normal_distribution))
//!  - [x] Uniform `(min, max)` ([Wiki](https://en.wikipedia.org/wiki/Continuous_uniform_distribution))
//!
//! The mathematics of these families is delegated to a
//! [numeric backend](backend::NumericBackend). The default one is built on
//! [statrs](https://docs.rs/statrs).
//!
//! ### Unconstrained families:
//!
//!  - [x] [Categorical](distributions::Categorical) `(weights)` ([Wiki](https://en.wikipedia.org/wiki/Categorical_distribution))
//!
//! Implemented natively, over the normalized weight vector.
//!
//! ## Errors
//!
//! Every operation returns a `Result` with a [DistributionError](errors::DistributionError).
//! Errors of the backend are propagated unchanged.
//!
//! ## Logging
//!
//! The library emits [tracing] events (construction, dispatch, normalization).
//! It never installs a subscriber.
//!
//! ***
//!

pub mod backend;
pub mod configuration;
pub mod distribution;
pub mod distributions;
pub mod domain;
pub mod errors;
pub mod guard;
pub mod interface;
pub mod registry;

pub use distribution::{Distribution, Enumeration, Sample};
pub use errors::DistributionError;
pub use registry::Family;

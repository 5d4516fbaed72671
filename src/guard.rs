//! # Guards
//!
//! The validation and coercion step that runs exactly once, when a
//! [Distribution](crate::distribution::Distribution) is constructed.
//!
//! Constructors receive raw [Argument]s. The guard of the family (see
//! [FamilySpec::guard]) checks them against the declared parameter list and
//! turns them into the stored [Parameters]. Nothing is validated again on
//! later calls.
//!
//!  - [default_guard]: natural and real families. Converts every parameter to
//!     `f64` and nothing else. Range checks (a probability in `[0, 1]`, a
//!     positive scale...) belong to the numeric backend and surface as its errors.
//!  - [categorical_guard]: the weight vector must be finite, non-negative and
//!     add up to a positive number. It is stored normalized.
//!

use tracing::debug;

use crate::distributions::Categorical::Categorical;
use crate::errors::DistributionError;
use crate::registry::{Family, FamilySpec};

/// The signature of a guard.
pub type Guard = fn(&FamilySpec, Vec<Argument>) -> Result<Parameters, DistributionError>;

/// A raw constructor argument, before coercion.
#[derive(Debug, Clone, PartialEq)]
pub enum Argument {
    Integer(i64),
    Real(f64),
    Vector(Vec<f64>),
}

/// The validated parameters stored inside a distribution. Never mutated.
#[derive(Debug, Clone, PartialEq)]
pub enum Parameters {
    /// The scalar parameters of a natural or real family, in declaration order.
    Scalars(Box<[f64]>),
    /// The normalized weights of a categorical distribution.
    Categorical(Categorical),
}

impl Argument {
    /// The value as `f64` if the argument is a scalar.
    #[must_use]
    pub fn as_scalar(&self) -> Option<f64> {
        return match self {
            Argument::Integer(i) => Some(*i as f64),
            Argument::Real(r) => Some(*r),
            Argument::Vector(_) => None,
        };
    }
}

macro_rules! integer_argument {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Argument {
                fn from(value: $t) -> Self {
                    Argument::Integer(i64::from(value))
                }
            }
        )*
    };
}

integer_argument!(i8, i16, i32, i64, u8, u16, u32);

impl From<u64> for Argument {
    fn from(value: u64) -> Self {
        // exact up to 2^53, wich is the most an `f64` parameter can hold anyway
        Argument::Real(value as f64)
    }
}

impl From<usize> for Argument {
    fn from(value: usize) -> Self {
        Argument::Real(value as f64)
    }
}

impl From<f32> for Argument {
    fn from(value: f32) -> Self {
        Argument::Real(f64::from(value))
    }
}

impl From<f64> for Argument {
    fn from(value: f64) -> Self {
        Argument::Real(value)
    }
}

impl<T: Into<f64>> From<Vec<T>> for Argument {
    fn from(values: Vec<T>) -> Self {
        Argument::Vector(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<f64> + Copy> From<&[T]> for Argument {
    fn from(values: &[T]) -> Self {
        Argument::Vector(values.iter().map(|&w| w.into()).collect())
    }
}

impl<T: Into<f64>, const N: usize> From<[T; N]> for Argument {
    fn from(values: [T; N]) -> Self {
        Argument::Vector(values.into_iter().map(Into::into).collect())
    }
}

fn check_arity(spec: &FamilySpec, arguments: &[Argument]) -> Result<(), DistributionError> {
    if arguments.len() != spec.parameters.len() {
        return Err(DistributionError::InvalidArgument {
            family: spec.family,
            parameter: "arguments",
            reason: format!(
                "expected {} argument(s) ({}), found {}",
                spec.parameters.len(),
                spec.parameters.join(", "),
                arguments.len()
            ),
        });
    }
    return Ok(());
}

/// Default guard for natural and real families: every declared parameter is
/// converted to `f64`. No other check is done.
///
/// Fails only if the number of arguments does not match the declaration, or
/// if a vector is given for a scalar parameter.
pub fn default_guard(
    spec: &FamilySpec,
    arguments: Vec<Argument>,
) -> Result<Parameters, DistributionError> {
    check_arity(spec, &arguments)?;

    let mut values: Vec<f64> = Vec::with_capacity(arguments.len());
    for (argument, &parameter) in arguments.iter().zip(spec.parameters) {
        let value: f64 = argument
            .as_scalar()
            .ok_or_else(|| DistributionError::InvalidArgument {
                family: spec.family,
                parameter,
                reason: String::from("expected a number, found a vector"),
            })?;
        values.push(value);
    }

    return Ok(Parameters::Scalars(values.into_boxed_slice()));
}

/// Guard of the categorical family. The single argument must be a vector of
/// weights. See [normalize_weights].
pub fn categorical_guard(
    spec: &FamilySpec,
    arguments: Vec<Argument>,
) -> Result<Parameters, DistributionError> {
    check_arity(spec, &arguments)?;

    let parameter: &'static str = spec.parameters.first().copied().unwrap_or("weights");
    let weights: Vec<f64> = match <[Argument; 1]>::try_from(arguments) {
        Ok([Argument::Vector(weights)]) => weights,
        Ok([other]) => {
            return Err(DistributionError::InvalidArgument {
                family: spec.family,
                parameter,
                reason: format!("expected a vector of weights, found {other:?}"),
            });
        }
        Err(arguments) => {
            return Err(DistributionError::InvalidArgument {
                family: spec.family,
                parameter,
                reason: format!("expected a single vector, found {} arguments", arguments.len()),
            });
        }
    };

    let probabilities: Box<[f64]> = normalize_weights(weights)?;
    return Ok(Parameters::Categorical(Categorical::from_normalized(
        probabilities,
    )));
}

/// Validates a weight vector and rescales it to add up to `1.0`.
///
///  - Every weight must be finite and `0.0 <= w`.
///  - The sum must be stricly positive (and finite).
///  - If the sum is exactly `1.0` the weights are kept as given, otherwise
///     each one is divided by the sum.
pub fn normalize_weights(weights: Vec<f64>) -> Result<Box<[f64]>, DistributionError> {
    let invalid = |reason: String| DistributionError::InvalidArgument {
        family: Family::Categorical,
        parameter: "weights",
        reason,
    };

    for (i, &w) in weights.iter().enumerate() {
        if !w.is_finite() || w < 0.0 {
            return Err(invalid(format!(
                "the weight at index {i} is {w}, it must be a finite number >= 0"
            )));
        }
    }

    let sum: f64 = weights.iter().sum();
    if !(0.0 < sum && sum.is_finite()) {
        return Err(invalid(format!(
            "the weights add up to {sum}, it must be a positive finite number"
        )));
    }

    if sum == 1.0 {
        return Ok(weights.into_boxed_slice());
    }

    debug!(sum, len = weights.len(), "rescaling categorical weights");
    return Ok(weights
        .into_iter()
        .map(|w| w / sum)
        .collect::<Vec<f64>>()
        .into_boxed_slice());
}

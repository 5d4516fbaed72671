use thiserror::Error;

use crate::backend::BackendError;
use crate::registry::Family;

/// Everything that can go wrong when building or querying a
/// [Distribution](crate::distribution::Distribution).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DistributionError {
    /// The arguments given to a constructor did not pass the guard of the family.
    /// Maybe a weight was negative, infinite or NaN, the weights did not add up
    /// to a positive number, or the wrong number (or kind) of arguments was given.
    #[error("Invalid argument `{parameter}` for the {family} distribution: {reason}. ")]
    InvalidArgument {
        family: Family,
        parameter: &'static str,
        reason: String,
    },
    /// A categorical distribution was evaluated at an index outside `[0, len)`.
    #[error("The index {index} is out of range for a categorical distribution with {len} categories. ")]
    OutOfRange { index: f64, len: usize },
    /// The requested combination of flags is not implemented for the operation.
    #[error("`{operation}` is not implemented with log = {log} and complement = {complement}. ")]
    UnsupportedCombination {
        operation: &'static str,
        log: bool,
        complement: bool,
    },
    /// The inverse cumulative scan went past the last category without finding
    /// a result. Only happens for `1.0 <= p` (or NaN), or by rounding at the boundary.
    #[error("The support was exhausted while inverting the cumulative probability {p}. ")]
    ExhaustedSupport { p: f64 },
    /// The numeric backend rejected the request. Propagated unchanged.
    #[error(transparent)]
    Backend(#[from] BackendError),
}

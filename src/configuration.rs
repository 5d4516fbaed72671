//! This file contains the deafult values and other value choices used trough the library.
//!
//! The random source and the numeric backend are never hidden global state:
//! every operation that needs them has a variant that receives them
//! explicitly (see [crate::distribution::Distribution]). The values here are
//! only what the convenience operations use when nothing is given.
//!

use rand::SeedableRng;
use rand::rngs::{StdRng, ThreadRng};

use crate::backend::StatrsBackend;

/// The backend used when an operation does not receive one.
pub static DEFAULT_BACKEND: StatrsBackend = StatrsBackend;

/// The process-wide random source: the thread local generator of [rand].
///
/// Used by the sampling operations when no generator is given.
#[must_use]
pub fn thread_rng() -> ThreadRng {
    return rand::rng();
}

/// A deterministic random source. Two generators created with the same
/// `seed` produce the same samples.
#[must_use]
pub fn seeded_rng(seed: u64) -> StdRng {
    return StdRng::seed_from_u64(seed);
}

pub mod sampling {

    /// The maximum number of values a single `sample_multiple` call can return.
    /// `1 << 24 = 16 777 216`
    ///
    /// Bigger requests return an
    /// [InvalidArgument](crate::errors::DistributionError::InvalidArgument) error.
    pub static MAX_BATCH: usize = 1 << 24;
}

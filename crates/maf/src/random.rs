//! Uniform random integers and element picking.
//!
//! Plain functions draw from `rand::thread_rng()`. The `*_with` variants take
//! any `Rng` so callers can replay draws from a seeded `StdRng`.
//! Out-of-range arguments are caller bugs and come back as `RandomError`
//! instead of being clamped.

use rand::seq::SliceRandom;
use rand::Rng;
use std::fmt;

/// Error for malformed random-draw arguments.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RandomError {
    /// `max < min` for an inclusive range.
    InvertedRange { min: i64, max: i64 },
    /// Upper bound must be positive.
    NonPositiveBound { max: i64 },
    /// Cannot pick from an empty sequence.
    EmptySequence,
}

impl fmt::Display for RandomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvertedRange { min, max } => {
                write!(f, "invalid range: max ({max}) < min ({min})")
            }
            Self::NonPositiveBound { max } => write!(f, "bound must be > 0, got {max}"),
            Self::EmptySequence => write!(f, "cannot pick from an empty sequence"),
        }
    }
}

impl std::error::Error for RandomError {}

/// Uniform integer in `[min, max]`.
pub fn random_in_range_inclusive_with<R: Rng + ?Sized>(
    rng: &mut R,
    min: i64,
    max: i64,
) -> Result<i64, RandomError> {
    if max < min {
        return Err(RandomError::InvertedRange { min, max });
    }
    Ok(rng.gen_range(min..=max))
}

/// Uniform integer in `[0, max)`.
pub fn random_below_with<R: Rng + ?Sized>(rng: &mut R, max: i64) -> Result<i64, RandomError> {
    if max <= 0 {
        return Err(RandomError::NonPositiveBound { max });
    }
    Ok(rng.gen_range(0..max))
}

/// Uniform integer in `[1, max]`.
pub fn random_from_1_inclusive_with<R: Rng + ?Sized>(
    rng: &mut R,
    max: i64,
) -> Result<i64, RandomError> {
    if max <= 0 {
        return Err(RandomError::NonPositiveBound { max });
    }
    Ok(rng.gen_range(1..=max))
}

/// Uniformly chosen element of a non-empty slice.
pub fn pick_random_with<'a, T, R: Rng + ?Sized>(
    rng: &mut R,
    items: &'a [T],
) -> Result<&'a T, RandomError> {
    items.choose(rng).ok_or(RandomError::EmptySequence)
}

/// [`random_in_range_inclusive_with`] on the thread-local generator.
pub fn random_in_range_inclusive(min: i64, max: i64) -> Result<i64, RandomError> {
    random_in_range_inclusive_with(&mut rand::thread_rng(), min, max)
}

/// [`random_below_with`] on the thread-local generator.
pub fn random_below(max: i64) -> Result<i64, RandomError> {
    random_below_with(&mut rand::thread_rng(), max)
}

/// [`random_from_1_inclusive_with`] on the thread-local generator.
pub fn random_from_1_inclusive(max: i64) -> Result<i64, RandomError> {
    random_from_1_inclusive_with(&mut rand::thread_rng(), max)
}

/// [`pick_random_with`] on the thread-local generator.
pub fn pick_random<T>(items: &[T]) -> Result<&T, RandomError> {
    pick_random_with(&mut rand::thread_rng(), items)
}

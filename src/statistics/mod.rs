//! Statistical summaries for streaming data
//!
//! This module provides single-pass, O(1)-memory computation of mean,
//! variance, and standard deviation, both for native floats and for seeded
//! quantity types.
//!
//! The accumulator types ([`RunningMean`], [`RunningMoments`],
//! [`SeededMean`], [`SeededMoments`]) are the streaming interface; the free
//! functions below are one-shot conveniences that run a full pass over any
//! `IntoIterator`.
//!
//! # Example
//!
//! ```
//! use streamstat::statistics::{mean, std_dev, variance, Normalization};
//!
//! let samples = [2.0f64, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
//!
//! assert!((mean(samples).unwrap() - 5.0).abs() < 1e-9);
//! assert!((variance(samples, Normalization::Population).unwrap() - 4.0).abs() < 1e-9);
//! assert!((std_dev(samples, Normalization::Population).unwrap() - 2.0).abs() < 1e-9);
//! ```

mod moments;
mod seeded;

pub use moments::{RunningMean, RunningMoments};
pub use seeded::{SeededMean, SeededMoments};

use num_traits::{Float, FromPrimitive};

use crate::traits::{Quantity, SeededSqrt};

/// Divisor selection for variance
///
/// With `m2` the accumulated sum of squared deviations over `n` elements:
///
/// - [`Population`](Normalization::Population) divides by `n`
/// - [`Sample`](Normalization::Sample) divides by `n - 1`
///
/// Either way, variance (and therefore standard deviation) is only defined
/// here for `n >= 3`. Refusing two-element input goes beyond the usual
/// degrees-of-freedom argument: a variance over two points is considered
/// statistically meaningless by this crate, as a matter of policy rather
/// than necessity. Callers get `None` for any shorter stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Normalization {
    /// Divide by the element count `n`
    Population,
    /// Divide by `n - 1` (Bessel's correction)
    Sample,
}

/// Arithmetic mean of a stream of floats, in one pass.
///
/// Maintains a running mean with per-element correction
/// (`mean += (x - mean) / i`) instead of summing first and dividing last,
/// trading one division per element for immunity to the overflow and
/// precision loss of a large intermediate sum.
///
/// Returns `None` for an empty stream.
///
/// # Examples
///
/// ```
/// use streamstat::statistics::mean;
///
/// assert_eq!(mean([1.0, 2.0, 3.0, 4.0]), Some(2.5));
/// assert_eq!(mean(Vec::<f64>::new()), None);
/// ```
pub fn mean<T, I>(values: I) -> Option<T>
where
    T: Float + FromPrimitive,
    I: IntoIterator<Item = T>,
{
    let mut acc = RunningMean::new();
    for value in values {
        acc.add(value);
    }
    acc.mean()
}

/// Variance of a stream of floats, in one pass (Welford's method).
///
/// Returns `None` for streams of fewer than three elements; see
/// [`Normalization`] for the divisor and short-stream policy. When the
/// iterator reports an exact upper size bound below three, the pass is
/// skipped entirely; otherwise elements are counted during iteration, so
/// forward-only streams of unknown length work unchanged.
///
/// # Examples
///
/// ```
/// use streamstat::statistics::{variance, Normalization};
///
/// let v = variance((0..10).map(f64::from), Normalization::Sample).unwrap();
/// assert!((v - 9.1667).abs() < 1e-3);
///
/// assert_eq!(variance([1.0, 2.0], Normalization::Sample), None);
/// ```
pub fn variance<T, I>(values: I, norm: Normalization) -> Option<T>
where
    T: Float + FromPrimitive,
    I: IntoIterator<Item = T>,
{
    let iter = values.into_iter();
    if let (_, Some(upper)) = iter.size_hint() {
        if upper < 3 {
            return None;
        }
    }
    let mut acc = RunningMoments::new();
    for value in iter {
        acc.add(value);
    }
    acc.variance(norm)
}

/// Standard deviation of a stream of floats, in one pass.
///
/// `sqrt(variance)`, using the native float square root. The `None` from a
/// too-short stream propagates unchanged, never a square root of a
/// sentinel.
///
/// # Examples
///
/// ```
/// use streamstat::statistics::{std_dev, Normalization};
///
/// let samples = [2.0f64, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
/// let sd = std_dev(samples, Normalization::Population).unwrap();
/// assert!((sd - 2.0).abs() < 1e-9);
/// ```
pub fn std_dev<T, I>(values: I, norm: Normalization) -> Option<T>
where
    T: Float + FromPrimitive,
    I: IntoIterator<Item = T>,
{
    variance(values, norm).map(|v| v.sqrt())
}

/// Arithmetic mean of a stream of quantities, in one pass.
///
/// Unlike [`mean`], this sums everything starting from `seed` and divides
/// once by the final count: per-element division on integer-like types
/// would compound truncation error at every step. The count is taken while
/// summing, so no length query is needed.
///
/// Returns the seed itself (not a sentinel) for an empty stream.
///
/// # Examples
///
/// ```
/// use streamstat::statistics::seeded_mean;
///
/// assert_eq!(seeded_mean([2i64, 4, 4, 4, 5, 5, 7, 9], 0), 5);
/// assert_eq!(seeded_mean(Vec::<i64>::new(), 7), 7);
/// ```
pub fn seeded_mean<T, I>(values: I, seed: T) -> T
where
    T: Quantity,
    I: IntoIterator<Item = T>,
{
    let mut acc = SeededMean::new(seed);
    for value in values {
        acc.add(value);
    }
    acc.mean()
}

/// Variance of a stream of quantities, in one pass (Welford's method).
///
/// `seed` is the additive identity for `T`; the accumulation starts there
/// and all divisions happen in `T`'s own arithmetic (truncating, for
/// integer-like types). Streams of fewer than three elements yield `None`,
/// as for [`variance`].
///
/// # Examples
///
/// ```
/// use streamstat::statistics::{seeded_variance, Normalization};
///
/// let v = seeded_variance([2i64, 4, 4, 4, 5, 5, 7, 9], 0, Normalization::Population);
/// assert_eq!(v, Some(8));
/// ```
pub fn seeded_variance<T, I>(values: I, seed: T, norm: Normalization) -> Option<T>
where
    T: Quantity,
    I: IntoIterator<Item = T>,
{
    let iter = values.into_iter();
    if let (_, Some(upper)) = iter.size_hint() {
        if upper < 3 {
            return None;
        }
    }
    let mut acc = SeededMoments::new(seed);
    for value in iter {
        acc.add(value);
    }
    acc.variance(norm)
}

/// Standard deviation of a stream of quantities, in one pass.
///
/// Requires the [`SeededSqrt`] capability on `T`, since quantity types have
/// no native square root. A `None` variance propagates unchanged, and the
/// square root's own domain policy applies on top (for Newton-based types,
/// a zero variance also yields `None`).
///
/// # Examples
///
/// ```
/// use streamstat::statistics::{seeded_std_dev, Normalization};
///
/// let sd = seeded_std_dev([2i64, 4, 4, 4, 5, 5, 7, 9], 0, Normalization::Population);
/// assert_eq!(sd, Some(3));
/// ```
pub fn seeded_std_dev<T, I>(values: I, seed: T, norm: Normalization) -> Option<T>
where
    T: Quantity + SeededSqrt,
    I: IntoIterator<Item = T>,
{
    let sqrt_seed = seed.clone();
    seeded_variance(values, seed, norm).and_then(|v| v.seeded_sqrt(&sqrt_seed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_stream_skips_iteration() {
        // Exact size hints below the floor short-circuit before the pass.
        let data = [1.0f64, 2.0];
        let mut pulled = 0;
        let iter = data.iter().map(|&x| {
            pulled += 1;
            x
        });
        assert_eq!(variance(iter, Normalization::Sample), None);
        assert_eq!(pulled, 0);
    }

    #[test]
    fn test_unknown_length_stream_still_floors() {
        // A filter hides the exact length, forcing the in-pass count check.
        let iter = (0..10).map(f64::from).filter(|&x| x < 2.0);
        assert_eq!(variance(iter, Normalization::Sample), None);
    }

    #[test]
    fn test_free_functions_match_accumulators() {
        let data = [1.0f64, 10.0, 40.0, 15.0, 4.0, 5.0, 22.0];

        let mut acc = RunningMoments::new();
        for &x in &data {
            acc.add(x);
        }

        assert_eq!(mean(data), acc.mean());
        assert_eq!(
            variance(data, Normalization::Sample),
            acc.variance(Normalization::Sample)
        );
        assert_eq!(
            std_dev(data, Normalization::Population),
            acc.std_dev(Normalization::Population)
        );
    }

    #[test]
    fn test_seeded_mean_is_sum_then_divide() {
        // Per-element division would truncate each step; one final division
        // gives the exact quotient.
        assert_eq!(seeded_mean([1i64, 2, 2], 0), 1);
        assert_eq!(seeded_mean([1_000_001i64, 1_000_002, 1_000_003], 0), 1_000_002);
    }

    #[test]
    fn test_seeded_std_dev_propagates_none() {
        assert_eq!(
            seeded_std_dev([5i64, 6], 0, Normalization::Population),
            None
        );
    }
}

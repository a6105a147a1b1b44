//! Running mean and variance for seeded quantity types
//!
//! The caller supplies a seed value representing the additive identity,
//! which stands in for the zero a [`Quantity`] type may not be able to
//! default-construct. The seed is kept as an immutable template: it is
//! cloned into the running state and restored on [`clear`], never mutated.
//!
//! [`clear`]: crate::traits::Accumulator::clear

use num_traits::FromPrimitive;

use crate::statistics::Normalization;
use crate::traits::{Accumulator, Quantity, SeededSqrt};

fn count_as<T: FromPrimitive>(count: usize) -> T {
    T::from_usize(count).expect("count representable in accumulation type")
}

/// Seeded mean accumulator
///
/// Sums every value starting from the seed and divides once by the final
/// count, the opposite strategy from [`RunningMean`]: on integer-like
/// types a per-element division would truncate at every step and compound
/// the error, while a single final division truncates once. Counting
/// happens during the same pass, so streams without a cheap length query
/// work unchanged.
///
/// The mean of an empty stream is the seed itself, not a sentinel.
///
/// [`RunningMean`]: crate::statistics::RunningMean
///
/// # Example
///
/// ```
/// use streamstat::statistics::SeededMean;
///
/// let mut acc = SeededMean::new(0i64);
/// for value in [2, 4, 4, 4, 5, 5, 7, 9] {
///     acc.add(value);
/// }
/// assert_eq!(acc.mean(), 5);
///
/// assert_eq!(SeededMean::new(0i64).mean(), 0);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SeededMean<T> {
    seed: T,
    sum: T,
    count: usize,
}

impl<T: Quantity> SeededMean<T> {
    /// Create an empty accumulator with the given additive identity
    pub fn new(seed: T) -> Self {
        Self {
            sum: seed.clone(),
            seed,
            count: 0,
        }
    }

    /// Add a value
    pub fn add(&mut self, value: T) {
        self.sum = self.sum.clone() + value;
        self.count += 1;
    }

    /// Number of values seen
    pub fn len(&self) -> usize {
        self.count
    }

    /// Check if no values have been seen
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// The seed this accumulator was created with
    pub fn seed(&self) -> &T {
        &self.seed
    }

    /// The mean, or the seed if no values have been seen
    pub fn mean(&self) -> T {
        if self.count == 0 {
            self.seed.clone()
        } else {
            self.sum.clone() / count_as::<T>(self.count)
        }
    }
}

impl<T: Quantity> Accumulator for SeededMean<T> {
    type Item = T;

    fn update(&mut self, item: T) {
        self.add(item);
    }

    fn clear(&mut self) {
        self.sum = self.seed.clone();
        self.count = 0;
    }

    fn count(&self) -> u64 {
        self.count as u64
    }
}

impl<T: Quantity> Extend<T> for SeededMean<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}

/// Seeded mean and variance accumulator (Welford's algorithm)
///
/// The same single-pass update as [`RunningMoments`], carried out in the
/// quantity type's own arithmetic: for integer-like types every division
/// truncates, and the result is as exact as that arithmetic allows. The
/// mean here evolves incrementally (unlike [`SeededMean`]) because the
/// deviation products need the evolving mean at every step.
///
/// Variance is `None` until at least three values have been seen; standard
/// deviation goes through the [`SeededSqrt`] capability.
///
/// [`RunningMoments`]: crate::statistics::RunningMoments
///
/// # Example
///
/// ```
/// use streamstat::statistics::{Normalization, SeededMoments};
///
/// let mut acc = SeededMoments::new(0i64);
/// for value in [2, 4, 4, 4, 5, 5, 7, 9] {
///     acc.add(value);
/// }
///
/// assert_eq!(acc.variance(Normalization::Population), Some(8));
/// assert_eq!(acc.std_dev(Normalization::Population), Some(3));
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SeededMoments<T> {
    seed: T,
    count: usize,
    mean: T,
    m2: T,
}

impl<T: Quantity> SeededMoments<T> {
    /// Create an empty accumulator with the given additive identity
    pub fn new(seed: T) -> Self {
        Self {
            mean: seed.clone(),
            m2: seed.clone(),
            seed,
            count: 0,
        }
    }

    /// Add a value
    pub fn add(&mut self, value: T) {
        self.count += 1;
        let old_mean = self.mean.clone();
        let delta = value.clone() - old_mean.clone();
        self.mean = old_mean.clone() + delta / count_as::<T>(self.count);
        self.m2 = self.m2.clone() + (value.clone() - self.mean.clone()) * (value - old_mean);
    }

    /// Number of values seen
    pub fn len(&self) -> usize {
        self.count
    }

    /// Check if no values have been seen
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// The seed this accumulator was created with
    pub fn seed(&self) -> &T {
        &self.seed
    }

    /// The running mean, or the seed if no values have been seen
    pub fn mean(&self) -> T {
        self.mean.clone()
    }

    /// The variance under the given normalization
    ///
    /// `None` until at least three values have been seen.
    pub fn variance(&self, norm: Normalization) -> Option<T> {
        if self.count < 3 {
            return None;
        }
        let divisor = match norm {
            Normalization::Population => count_as::<T>(self.count),
            Normalization::Sample => count_as::<T>(self.count - 1),
        };
        Some(self.m2.clone() / divisor)
    }

    /// The standard deviation under the given normalization
    ///
    /// Applies [`SeededSqrt`] to the variance; `None` propagates unchanged,
    /// and a sqrt-unsupported type fails to compile rather than at runtime.
    pub fn std_dev(&self, norm: Normalization) -> Option<T>
    where
        T: SeededSqrt,
    {
        self.variance(norm)
            .and_then(|v| v.seeded_sqrt(&self.seed))
    }
}

impl<T: Quantity> Accumulator for SeededMoments<T> {
    type Item = T;

    fn update(&mut self, item: T) {
        self.add(item);
    }

    fn clear(&mut self) {
        self.mean = self.seed.clone();
        self.m2 = self.seed.clone();
        self.count = 0;
    }

    fn count(&self) -> u64 {
        self.count as u64
    }
}

impl<T: Quantity> Extend<T> for SeededMoments<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}

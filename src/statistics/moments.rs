//! Running mean and variance for native floats
//!
//! Single-pass accumulation using incremental mean correction and Welford's
//! online algorithm, generic over `num_traits::Float`.

use num_traits::{Float, FromPrimitive};

use crate::statistics::Normalization;
use crate::traits::Accumulator;

/// Running mean accumulator
///
/// Maintains the mean with a per-element correction,
/// `mean += (x - mean) / i`, rather than summing first and dividing last.
/// One division per element buys immunity to overflow and precision loss
/// from a large intermediate sum; this accumulator deliberately picks
/// accuracy over raw speed.
///
/// # Example
///
/// ```
/// use streamstat::statistics::RunningMean;
///
/// let mut acc = RunningMean::new();
/// for value in [1.0, 2.0, 3.0, 4.0] {
///     acc.add(value);
/// }
///
/// assert_eq!(acc.mean(), Some(2.5));
/// assert_eq!(RunningMean::<f64>::new().mean(), None);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunningMean<T> {
    /// Number of values seen
    count: u64,
    /// Running mean
    mean: T,
}

impl<T: Float + FromPrimitive> Default for RunningMean<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float + FromPrimitive> RunningMean<T> {
    /// Create an empty accumulator
    pub fn new() -> Self {
        Self {
            count: 0,
            mean: T::zero(),
        }
    }

    /// Add a value
    pub fn add(&mut self, value: T) {
        self.count += 1;
        let i = T::from_u64(self.count).expect("count representable in float type");
        self.mean = self.mean + (value - self.mean) / i;
    }

    /// Number of values seen
    pub fn len(&self) -> u64 {
        self.count
    }

    /// Check if no values have been seen
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// The mean, or `None` if no values have been seen
    pub fn mean(&self) -> Option<T> {
        if self.count == 0 {
            None
        } else {
            Some(self.mean)
        }
    }
}

impl<T: Float + FromPrimitive> Accumulator for RunningMean<T> {
    type Item = T;

    fn update(&mut self, item: T) {
        self.add(item);
    }

    fn clear(&mut self) {
        *self = Self::new();
    }

    fn count(&self) -> u64 {
        self.count
    }
}

impl<T: Float + FromPrimitive> Extend<T> for RunningMean<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}

impl<T: Float + FromPrimitive> FromIterator<T> for RunningMean<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut acc = Self::new();
        acc.extend(iter);
        acc
    }
}

/// Running mean and variance accumulator (Welford's algorithm)
///
/// Computes mean, variance, and standard deviation in a single pass with
/// O(1) memory. Welford's incremental update avoids the catastrophic
/// cancellation of the naive `E[X^2] - E[X]^2` formula; the mean evolves
/// exactly as in [`RunningMean`], with the sum of squared deviations
/// carried alongside it.
///
/// Variance and standard deviation are `None` until at least three values
/// have been seen; see [`Normalization`] for the policy.
///
/// # Example
///
/// ```
/// use streamstat::statistics::{Normalization, RunningMoments};
///
/// let mut acc = RunningMoments::<f64>::new();
/// for value in [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0] {
///     acc.add(value);
/// }
///
/// assert!((acc.mean().unwrap() - 5.0).abs() < 1e-9);
/// assert!((acc.variance(Normalization::Population).unwrap() - 4.0).abs() < 1e-9);
/// assert!((acc.std_dev(Normalization::Population).unwrap() - 2.0).abs() < 1e-9);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunningMoments<T> {
    /// Number of values seen
    count: u64,
    /// Running mean
    mean: T,
    /// Sum of squared deviations from the mean (M2 in Welford's algorithm)
    m2: T,
}

impl<T: Float + FromPrimitive> Default for RunningMoments<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float + FromPrimitive> RunningMoments<T> {
    /// Create an empty accumulator
    pub fn new() -> Self {
        Self {
            count: 0,
            mean: T::zero(),
            m2: T::zero(),
        }
    }

    /// Add a value
    pub fn add(&mut self, value: T) {
        self.count += 1;
        let i = T::from_u64(self.count).expect("count representable in float type");
        let old_mean = self.mean;
        self.mean = old_mean + (value - old_mean) / i;
        self.m2 = self.m2 + (value - self.mean) * (value - old_mean);
    }

    /// Number of values seen
    pub fn len(&self) -> u64 {
        self.count
    }

    /// Check if no values have been seen
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// The mean, or `None` if no values have been seen
    pub fn mean(&self) -> Option<T> {
        if self.count == 0 {
            None
        } else {
            Some(self.mean)
        }
    }

    /// The variance under the given normalization
    ///
    /// `None` until at least three values have been seen.
    pub fn variance(&self, norm: Normalization) -> Option<T> {
        if self.count < 3 {
            return None;
        }
        let n = T::from_u64(self.count).expect("count representable in float type");
        let divisor = match norm {
            Normalization::Population => n,
            Normalization::Sample => n - T::one(),
        };
        Some(self.m2 / divisor)
    }

    /// The standard deviation under the given normalization
    ///
    /// `sqrt` of [`variance`](Self::variance); `None` propagates unchanged.
    pub fn std_dev(&self, norm: Normalization) -> Option<T> {
        self.variance(norm).map(|v| v.sqrt())
    }
}

impl<T: Float + FromPrimitive> Accumulator for RunningMoments<T> {
    type Item = T;

    fn update(&mut self, item: T) {
        self.add(item);
    }

    fn clear(&mut self) {
        *self = Self::new();
    }

    fn count(&self) -> u64 {
        self.count
    }
}

impl<T: Float + FromPrimitive> Extend<T> for RunningMoments<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}

impl<T: Float + FromPrimitive> FromIterator<T> for RunningMoments<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut acc = Self::new();
        acc.extend(iter);
        acc
    }
}

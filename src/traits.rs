//! Core traits for streaming accumulators
//!
//! [`Accumulator`] is the base interface shared by every accumulator in the
//! crate. [`Quantity`] and [`SeededSqrt`] are the capability bounds used to
//! select implementations at compile time: a type that lacks the required
//! operations is rejected by the type system, never at runtime.

use core::ops::{Add, Div, Mul, Sub};

use num_traits::FromPrimitive;

/// Core trait for all single-pass accumulators
///
/// Accumulators hold O(1) state, consume their input one element at a time
/// in a single forward pass, and are exclusively owned by one call stack.
/// There is deliberately no merge operation: combining partial states is
/// out of scope for this crate.
pub trait Accumulator {
    /// The type of value this accumulator consumes
    type Item;

    /// Feed one value into the accumulator
    fn update(&mut self, item: Self::Item);

    /// Reset to the empty state (seeded accumulators reset to their seed)
    fn clear(&mut self);

    /// Number of values consumed so far
    fn count(&self) -> u64;

    /// Check if no values have been consumed
    fn is_empty(&self) -> bool {
        self.count() == 0
    }
}

/// Capability bound for seeded accumulation types
///
/// A quantity is any number-like type supporting the four arithmetic
/// operations, comparison, and conversion from a count (via
/// [`FromPrimitive`], so the accumulators can divide by the number of
/// elements seen). Native integers, `num-bigint` integers, and user-defined
/// numeric wrappers all qualify; the blanket impl picks them up
/// automatically.
///
/// Quantities need not be default-constructible to zero. The accumulators
/// instead take a caller-supplied seed value representing the additive
/// identity, which they copy but never mutate.
pub trait Quantity:
    Clone
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + FromPrimitive
{
}

impl<T> Quantity for T where
    T: Clone
        + PartialOrd
        + Add<Output = T>
        + Sub<Output = T>
        + Mul<Output = T>
        + Div<Output = T>
        + FromPrimitive
{
}

/// Capability to approximate a square root given the additive identity
///
/// Standard deviation over a seeded quantity type needs a square root even
/// when the type has no native one. Shift-capable integer types (including
/// the `num-bigint` types behind the `bigint` feature) get this through
/// [`binary_sqrt`](crate::roots::binary_sqrt); field-like types typically
/// forward to [`newton_sqrt`](crate::roots::newton_sqrt). A type that
/// implements neither cannot call the seeded standard-deviation entry
/// points at all.
///
/// Returns `None` when the input is outside the routine's domain; see the
/// two routines for their exact zero handling.
pub trait SeededSqrt: Sized {
    /// Approximate `sqrt(self)`, with `seed` as the type's zero
    fn seeded_sqrt(self, seed: &Self) -> Option<Self>;
}

//! Generic square-root routines for types without a native `sqrt`
//!
//! Two algorithms, selected by type capability:
//!
//! - [`binary_sqrt`]: binary digit-by-digit integer square root for
//!   shift-capable types. Pure integer arithmetic, so it works for
//!   arbitrary-precision integers with no float conversion.
//! - [`newton_sqrt`]: Newton-Raphson iteration for field-like types,
//!   needing only `+ - * /` and comparison.
//!
//! Both take the type's additive identity as an explicit `seed`, the same
//! convention the seeded accumulators use for types that cannot be
//! default-constructed to zero.

use core::cmp::Ordering;
use core::ops::{Add, Div, Mul, Shl, Shr, Sub};

use num_traits::{FromPrimitive, One};

use crate::traits::SeededSqrt;

/// Binary digit-by-digit integer square root.
///
/// Computes the square root of `x` exactly for perfect squares, and rounds
/// up by one otherwise, so the result `r` always satisfies
/// `(r - 1)^2 < x <= r^2`. Requires only shifts, addition, subtraction, and
/// comparison, which makes it usable on arbitrary-precision integers.
///
/// `seed` is the type's zero. An input equal to the seed is its own root
/// and is returned unchanged; an input below the seed has no root and
/// yields `None`.
///
/// # Algorithm
///
/// Classic non-restoring method: place a trial bit at the largest power of
/// four not exceeding `x` (grown by left shifts against `x >> 2`, which
/// cannot overflow fixed-width types), then repeatedly subtract the trial
/// term from the operand while halving the result and quartering the bit.
///
/// # Examples
///
/// ```
/// use streamstat::roots::binary_sqrt;
///
/// assert_eq!(binary_sqrt(16u64, &0), Some(4));
/// assert_eq!(binary_sqrt(10u64, &0), Some(4)); // rounds up
/// assert_eq!(binary_sqrt(0u64, &0), Some(0));
/// ```
pub fn binary_sqrt<T>(x: T, seed: &T) -> Option<T>
where
    T: Clone
        + PartialOrd
        + One
        + Add<Output = T>
        + Sub<Output = T>
        + Shl<usize, Output = T>
        + Shr<usize, Output = T>,
{
    if x == *seed {
        return Some(seed.clone());
    }
    if x < *seed {
        return None;
    }

    // Largest power of four not exceeding x.
    let quarter = x.clone() >> 2;
    let mut bit = T::one();
    while bit <= quarter {
        bit = bit << 2;
    }

    let mut op = x;
    let mut res = seed.clone();
    while bit > *seed {
        let trial = res.clone() + bit.clone();
        if op >= trial {
            op = op - trial;
            res = res + (bit.clone() << 1);
        }
        res = res >> 1;
        bit = bit >> 2;
    }

    // A leftover operand means x was not a perfect square; round up.
    if op > *seed {
        res = res + T::one();
    }
    Some(res)
}

/// Newton-Raphson square root for field-like types.
///
/// Starting from `seed + 1`, iterates `guess = (x / guess + guess) / 2`
/// until the relative error `|guess^2 / x - 1|` drops below `1e-5`.
/// The relative (rather than absolute) convergence test keeps the accuracy
/// scale-invariant across magnitudes. Converges quadratically and needs
/// only the four arithmetic operations plus comparison.
///
/// `seed` is the type's zero. Any input not strictly above the seed yields
/// `None`: negative values are outside the domain, a zero input (a zero
/// variance, in the standard-deviation composition) deliberately produces
/// the not-available sentinel rather than a computed zero, and unorderable
/// values such as NaN fail the guard the same way. Non-finite inputs that
/// pass the guard (infinity) are caught when the error term becomes
/// unorderable, so the iteration always terminates.
///
/// # Examples
///
/// ```
/// use streamstat::roots::newton_sqrt;
///
/// let r = newton_sqrt(30.25f64, &0.0).unwrap();
/// assert!((r - 5.5).abs() < 1e-4);
/// assert_eq!(newton_sqrt(0.0f64, &0.0), None);
/// assert_eq!(newton_sqrt(f64::NAN, &0.0), None);
/// ```
pub fn newton_sqrt<T>(x: T, seed: &T) -> Option<T>
where
    T: Clone
        + PartialOrd
        + One
        + FromPrimitive
        + Add<Output = T>
        + Sub<Output = T>
        + Mul<Output = T>
        + Div<Output = T>,
{
    // Negated comparison so NaN-like unorderable inputs fail the guard too.
    if !(x > *seed) {
        return None;
    }

    let one = T::one();
    let two = one.clone() + one.clone();
    let tolerance =
        one.clone() / T::from_u32(100_000).expect("tolerance denominator representable");

    let mut guess = seed.clone() + one.clone();
    loop {
        guess = (x.clone() / guess.clone() + guess) / two.clone();
        let ratio = guess.clone() * guess.clone() / x.clone();
        let err = if ratio >= one {
            ratio - one.clone()
        } else {
            one.clone() - ratio
        };
        match err.partial_cmp(&tolerance) {
            Some(Ordering::Less) => return Some(guess),
            // An unorderable error means the arithmetic degraded to a
            // NaN-like value (infinite input); no further iteration helps.
            None => return None,
            _ => {}
        }
    }
}

macro_rules! impl_seeded_sqrt_int {
    ($($t:ty),* $(,)?) => {$(
        impl SeededSqrt for $t {
            fn seeded_sqrt(self, seed: &Self) -> Option<Self> {
                binary_sqrt(self, seed)
            }
        }
    )*};
}

impl_seeded_sqrt_int!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

#[cfg(feature = "bigint")]
#[cfg_attr(docsrs, doc(cfg(feature = "bigint")))]
mod bigint {
    use num_bigint::{BigInt, BigUint};

    use super::binary_sqrt;
    use crate::traits::SeededSqrt;

    impl SeededSqrt for BigUint {
        fn seeded_sqrt(self, seed: &Self) -> Option<Self> {
            binary_sqrt(self, seed)
        }
    }

    impl SeededSqrt for BigInt {
        fn seeded_sqrt(self, seed: &Self) -> Option<Self> {
            binary_sqrt(self, seed)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perfect_squares_exact() {
        for r in 0u64..=1000 {
            assert_eq!(binary_sqrt(r * r, &0), Some(r), "sqrt({}) != {}", r * r, r);
        }
    }

    #[test]
    fn test_non_squares_round_up() {
        assert_eq!(binary_sqrt(2u64, &0), Some(2));
        assert_eq!(binary_sqrt(3u64, &0), Some(2));
        assert_eq!(binary_sqrt(5u64, &0), Some(3));
        assert_eq!(binary_sqrt(10u64, &0), Some(4));
        assert_eq!(binary_sqrt(99u64, &0), Some(10));
    }

    #[test]
    fn test_ceiling_bracket() {
        // (r - 1)^2 < x <= r^2 for every positive input
        for x in 1u64..=10_000 {
            let r = binary_sqrt(x, &0).unwrap();
            assert!((r - 1) * (r - 1) < x, "lower bracket failed for {}", x);
            assert!(x <= r * r, "upper bracket failed for {}", x);
        }
    }

    #[test]
    fn test_zero_is_its_own_root() {
        assert_eq!(binary_sqrt(0u64, &0), Some(0));
        assert_eq!(binary_sqrt(0i64, &0), Some(0));
    }

    #[test]
    fn test_negative_integer_has_no_root() {
        assert_eq!(binary_sqrt(-4i64, &0), None);
    }

    #[test]
    fn test_near_type_maximum() {
        // The trial-bit search must not overflow while growing.
        let x = u64::MAX;
        let r = binary_sqrt(x, &0).unwrap();
        assert_eq!(r, 1 << 32);
        assert_eq!(binary_sqrt(u64::MAX - 1, &0), Some(1 << 32));
    }

    #[test]
    fn test_newton_reference_values() {
        let r = newton_sqrt(9.0f64, &0.0).unwrap();
        assert!((r - 3.0).abs() < 1e-4, "sqrt(9) ~ {}", r);

        let r = newton_sqrt(30.25f64, &0.0).unwrap();
        assert!((r - 5.5).abs() < 1e-4, "sqrt(30.25) ~ {}", r);
    }

    #[test]
    fn test_newton_scale_invariance() {
        // Relative convergence keeps accuracy across magnitudes.
        for scale in [1e-9f64, 1e-3, 1.0, 1e6, 1e12] {
            let x = 2.0 * scale * scale;
            let r = newton_sqrt(x, &0.0).unwrap();
            let exact = x.sqrt();
            assert!(
                ((r - exact) / exact).abs() < 1e-4,
                "sqrt({}) ~ {} vs {}",
                x,
                r,
                exact
            );
        }
    }

    #[test]
    fn test_newton_zero_and_negative_are_none() {
        assert_eq!(newton_sqrt(0.0f64, &0.0), None);
        assert_eq!(newton_sqrt(-1.0f64, &0.0), None);
    }

    #[test]
    fn test_newton_non_finite_terminates_with_none() {
        // NaN fails the domain guard; infinity passes it but must be
        // caught once the error term becomes unorderable.
        assert_eq!(newton_sqrt(f64::NAN, &0.0), None);
        assert_eq!(newton_sqrt(f64::INFINITY, &0.0), None);
        assert_eq!(newton_sqrt(f64::NEG_INFINITY, &0.0), None);
        assert_eq!(newton_sqrt(1.0f64, &f64::NAN), None);
    }

    #[test]
    fn test_seeded_sqrt_trait_dispatch() {
        assert_eq!(16u32.seeded_sqrt(&0), Some(4));
        assert_eq!(17i128.seeded_sqrt(&0), Some(5));
    }

    #[cfg(feature = "bigint")]
    mod bigint {
        use num_bigint::BigUint;

        use super::*;

        #[test]
        fn test_exact_beyond_native_width() {
            // (10^20)^2 has 133 bits; no native integer or float detour.
            let base = num_traits::pow(BigUint::from(10u8), 20);
            let x = base.clone() * base.clone();
            let zero = BigUint::from(0u8);
            assert_eq!(binary_sqrt(x, &zero), Some(base));
        }

        #[test]
        fn test_round_up_beyond_native_width() {
            let base = num_traits::pow(BigUint::from(10u8), 20);
            let x = base.clone() * base.clone() + BigUint::from(1u8);
            let zero = BigUint::from(0u8);
            assert_eq!(binary_sqrt(x, &zero), Some(base + BigUint::from(1u8)));
        }

        #[test]
        fn test_trait_impl() {
            let zero = BigUint::from(0u8);
            assert_eq!(
                BigUint::from(144u8).seeded_sqrt(&zero),
                Some(BigUint::from(12u8))
            );
        }
    }
}

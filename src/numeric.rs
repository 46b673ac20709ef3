//! Numeric trait bounds and scalar helpers.
//!
//! [`Number`] is the shared constraint for every arithmetic operation in
//! the crate (sums, membership over numbers, numeric map merging).
//! [`Float`] narrows it to floating-point types for [`clamp01`].

use std::fmt::Debug;
use std::ops::{Add, AddAssign, Sub, SubAssign};

/// Primitive integer or floating-point type.
///
/// Implemented for every built-in integer width and for `f32`/`f64`.
pub trait Number:
    Copy
    + Debug
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + AddAssign
    + SubAssign
{
    /// The additive identity.
    fn zero() -> Self;

    /// Addition that wraps around at the type's bounds instead of
    /// overflowing. Plain `+` for floats.
    fn wrapping_add(self, rhs: Self) -> Self;

    /// Subtraction that wraps around at the type's bounds instead of
    /// overflowing. Plain `-` for floats.
    fn wrapping_sub(self, rhs: Self) -> Self;
}

/// Floating-point [`Number`].
pub trait Float: Number {
    /// The multiplicative identity.
    fn one() -> Self;
}

macro_rules! impl_number {
    (int: $($t:ty),+) => {
        $(
            impl Number for $t {
                #[inline]
                fn zero() -> Self {
                    0
                }

                #[inline]
                fn wrapping_add(self, rhs: Self) -> Self {
                    <$t>::wrapping_add(self, rhs)
                }

                #[inline]
                fn wrapping_sub(self, rhs: Self) -> Self {
                    <$t>::wrapping_sub(self, rhs)
                }
            }
        )+
    };
    (float: $($t:ty),+) => {
        $(
            impl Number for $t {
                #[inline]
                fn zero() -> Self {
                    0.0
                }

                #[inline]
                fn wrapping_add(self, rhs: Self) -> Self {
                    self + rhs
                }

                #[inline]
                fn wrapping_sub(self, rhs: Self) -> Self {
                    self - rhs
                }
            }
        )+
    };
}

impl_number!(int: i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_number!(float: f32, f64);

impl Float for f32 {
    #[inline]
    fn one() -> Self {
        1.0
    }
}

impl Float for f64 {
    #[inline]
    fn one() -> Self {
        1.0
    }
}

/// Restricts `v` to the closed interval `[lo, hi]`.
///
/// Unlike [`Ord::clamp`] this never panics: when `lo > hi` the result is
/// unspecified but still one of `v`, `lo` or `hi`.
///
/// # Examples
/// ```
/// use u_toolkit::numeric::clamp;
/// assert_eq!(clamp(50, 1, 100), 50);
/// assert_eq!(clamp(0, 1, 100), 1);
/// assert_eq!(clamp(101, 1, 100), 100);
/// ```
pub fn clamp<T: Number>(v: T, lo: T, hi: T) -> T {
    if v < lo {
        return lo;
    }
    if v > hi {
        return hi;
    }
    v
}

/// Restricts `v` to `[0, 1]`.
///
/// # Examples
/// ```
/// use u_toolkit::numeric::clamp01;
/// assert_eq!(clamp01(-1.0_f64), 0.0);
/// assert_eq!(clamp01(0.25_f32), 0.25);
/// ```
pub fn clamp01<T: Float>(v: T) -> T {
    clamp(v, T::zero(), T::one())
}

/// Larger of two values; `b` on ties.
pub fn max<T: Number>(a: T, b: T) -> T {
    if a > b {
        a
    } else {
        b
    }
}

/// Smaller of two values; `b` on ties.
pub fn min<T: Number>(a: T, b: T) -> T {
    if a < b {
        a
    } else {
        b
    }
}

/// Lazy conditional: calls exactly one of the two producers.
///
/// # Examples
/// ```
/// use u_toolkit::numeric::ternary;
/// let n = 3;
/// let label = ternary(n > 1, || "many", || unreachable!());
/// assert_eq!(label, "many");
/// ```
pub fn ternary<T, F, G>(cond: bool, then_fn: F, else_fn: G) -> T
where
    F: FnOnce() -> T,
    G: FnOnce() -> T,
{
    if cond {
        then_fn()
    } else {
        else_fn()
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        #[test]
        fn clamp_stays_in_range(
            v in -1000_i32..1000,
            lo in -100_i32..100,
            width in 0_i32..100,
        ) {
            let hi = lo + width;
            let c = clamp(v, lo, hi);
            prop_assert!(c >= lo && c <= hi);
        }

        #[test]
        fn clamp01_stays_in_unit_interval(v in -10.0_f64..10.0) {
            let c = clamp01(v);
            prop_assert!((0.0..=1.0).contains(&c));
        }

        #[test]
        fn min_max_partition_pair(a in any::<i64>(), b in any::<i64>()) {
            prop_assert!(min(a, b) <= max(a, b));
            prop_assert!(min(a, b) == a || min(a, b) == b);
        }
    }
}

use std::fmt::{Debug, Display};

use num_traits::{Num, NumCast, Zero};

/// Element types a `Vector` or `Matrix` can do arithmetic on.
///
/// Implemented for `f32`, `f64`, `i32` and `i64`. Decompositions always
/// promote to `f64` through [`Scalar::as_f64`].
///
/// The `checked_*` operations return `None` when the result does not fit
/// the type. Floats never fail: they follow IEEE 754.
pub trait Scalar: Num + NumCast + Copy + PartialOrd + Debug + Display {
    fn checked_add(self, rhs: Self) -> Option<Self>;

    fn checked_sub(self, rhs: Self) -> Option<Self>;

    fn checked_mul(self, rhs: Self) -> Option<Self>;

    /// `None` on integer overflow (`MIN / -1`) or an integer zero divisor.
    fn checked_div(self, rhs: Self) -> Option<Self>;

    fn checked_rem(self, rhs: Self) -> Option<Self>;

    fn checked_pow(self, exp: Self) -> Option<Self>;

    fn as_f64(self) -> f64;

    /// Whether the type is a floating-point type.
    fn is_float() -> bool;
}

macro_rules! impl_float_scalar {
    ($($t:ty),*) => {
        $(
            impl Scalar for $t {
                fn checked_add(self, rhs: Self) -> Option<Self> {
                    Some(self + rhs)
                }

                fn checked_sub(self, rhs: Self) -> Option<Self> {
                    Some(self - rhs)
                }

                fn checked_mul(self, rhs: Self) -> Option<Self> {
                    Some(self * rhs)
                }

                fn checked_div(self, rhs: Self) -> Option<Self> {
                    Some(self / rhs)
                }

                fn checked_rem(self, rhs: Self) -> Option<Self> {
                    Some(self % rhs)
                }

                fn checked_pow(self, exp: Self) -> Option<Self> {
                    Some(self.powf(exp))
                }

                fn as_f64(self) -> f64 {
                    self as f64
                }

                fn is_float() -> bool {
                    true
                }
            }
        )*
    };
}

macro_rules! impl_int_scalar {
    ($($t:ty),*) => {
        $(
            impl Scalar for $t {
                fn checked_add(self, rhs: Self) -> Option<Self> {
                    <$t>::checked_add(self, rhs)
                }

                fn checked_sub(self, rhs: Self) -> Option<Self> {
                    <$t>::checked_sub(self, rhs)
                }

                fn checked_mul(self, rhs: Self) -> Option<Self> {
                    <$t>::checked_mul(self, rhs)
                }

                fn checked_div(self, rhs: Self) -> Option<Self> {
                    <$t>::checked_div(self, rhs)
                }

                fn checked_rem(self, rhs: Self) -> Option<Self> {
                    <$t>::checked_rem(self, rhs)
                }

                // A negative exponent is an integer reciprocal: `2 ^ -1 == 0`,
                // `1 ^ -n == 1`, `(-1) ^ -n == +-1`, `0 ^ -n` is undefined.
                fn checked_pow(self, exp: Self) -> Option<Self> {
                    if exp >= Self::zero() {
                        let exp = usize::try_from(exp).ok()?;
                        return num_traits::checked_pow(self, exp);
                    }
                    match self {
                        0 => None,
                        1 => Some(1),
                        -1 => Some(if exp % 2 == 0 { 1 } else { -1 }),
                        _ => Some(0),
                    }
                }

                fn as_f64(self) -> f64 {
                    self as f64
                }

                fn is_float() -> bool {
                    false
                }
            }
        )*
    };
}

impl_float_scalar!(f32, f64);
impl_int_scalar!(i32, i64);

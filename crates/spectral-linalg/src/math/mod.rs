//! Dense numeric containers.
//!
//! Provides `Vector` (1D) and `Matrix` (2D, stored as a sequence of row
//! vectors) over any [`Scalar`] element type, plus the `Size` value type
//! and the `Selector` regions used by the selective map/replace helpers.
//!
//! Arithmetic comes in two flavours: fallible `try_*` methods that return
//! [`LinalgError`](crate::error::LinalgError) on mismatched shapes or integer
//! overflow, and the `std::ops` operators, which panic with the same message.

/// Implements `+ - * / %` and their `*Assign` forms on top of the
/// `try_*` methods of a container type.
macro_rules! impl_elementwise_ops {
    ($ty:ident) => {
        impl_elementwise_ops!(@op $ty, Add, add, AddAssign, add_assign, try_add, try_add_assign);
        impl_elementwise_ops!(@op $ty, Sub, sub, SubAssign, sub_assign, try_sub, try_sub_assign);
        impl_elementwise_ops!(@op $ty, Mul, mul, MulAssign, mul_assign, try_mul, try_mul_assign);
        impl_elementwise_ops!(@op $ty, Div, div, DivAssign, div_assign, try_div, try_div_assign);
        impl_elementwise_ops!(@op $ty, Rem, rem, RemAssign, rem_assign, try_rem, try_rem_assign);
    };
    (@op $ty:ident, $Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident, $try:ident, $try_assign:ident) => {
        impl<'a, 'b, T: Scalar> std::ops::$Op<&'b $ty<T>> for &'a $ty<T> {
            type Output = $ty<T>;

            fn $op(self, rhs: &'b $ty<T>) -> $ty<T> {
                match self.$try(rhs) {
                    Ok(out) => out,
                    Err(err) => panic!("{}", err),
                }
            }
        }

        impl<T: Scalar> std::ops::$Op for $ty<T> {
            type Output = $ty<T>;

            fn $op(self, rhs: $ty<T>) -> $ty<T> {
                std::ops::$Op::$op(&self, &rhs)
            }
        }

        impl<'b, T: Scalar> std::ops::$OpAssign<&'b $ty<T>> for $ty<T> {
            fn $op_assign(&mut self, rhs: &'b $ty<T>) {
                if let Err(err) = self.$try_assign(rhs) {
                    panic!("{}", err);
                }
            }
        }
    };
}

pub mod builder;
pub mod matrix;
pub mod scalar;
pub mod selector;
pub mod size;
pub mod vector;

pub use builder::MatrixBuilder;
pub use matrix::Matrix;
pub use scalar::Scalar;
pub use selector::Selector;
pub use size::Size;
pub use vector::Vector;

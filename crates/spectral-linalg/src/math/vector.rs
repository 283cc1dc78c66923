use std::fmt;
use std::iter::FromIterator;
use std::ops::{Index, IndexMut, Neg};
use std::slice::{Iter, IterMut};

use num_traits::{One, Zero};

use crate::error::{Axis, LinalgError, Result};
use crate::math::{Scalar, Size};

/// Fixed-length sequence of numeric elements.
///
/// The length never changes after construction; every elementwise binary
/// operation requires both operands to have the same length.
#[derive(Clone, Debug, PartialEq)]
pub struct Vector<T> {
    data: Vec<T>,
}

impl<T> Vector<T> {
    pub fn new(data: Vec<T>) -> Self {
        Self { data }
    }

    pub fn from_vec(data: Vec<T>) -> Self {
        Self::new(data)
    }

    pub fn from_fn<F>(len: usize, f: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        Vector::from_vec((0..len).map(f).collect())
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.data.iter()
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.data.iter_mut()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Size of the vector seen as a single row.
    pub fn size(&self) -> Size {
        Size::new(1, self.len())
    }

    pub fn get(&self, index: usize) -> Result<&T> {
        self.data.get(index).ok_or(LinalgError::IndexOutOfRange {
            axis: Axis::Element,
            index,
            bound: self.data.len(),
        })
    }

    pub fn set(&mut self, index: usize, value: T) -> Result<()> {
        let bound = self.data.len();
        match self.data.get_mut(index) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(LinalgError::IndexOutOfRange {
                axis: Axis::Element,
                index,
                bound,
            }),
        }
    }

    pub fn mapv<U, F>(&self, mut f: F) -> Vector<U>
    where
        F: FnMut(&T) -> U,
    {
        Vector::from_vec(self.data.iter().map(|v| f(v)).collect())
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.data.clone()
    }

    /// Removes and returns the element at `index`, shortening the vector.
    pub(crate) fn remove(&mut self, index: usize) -> T {
        self.data.remove(index)
    }
}

impl<T> Vector<T>
where
    T: Clone,
{
    pub fn from_elem(len: usize, value: T) -> Self {
        Vector::from_vec(vec![value; len])
    }
}

impl<T> Vector<T>
where
    T: Clone + Zero,
{
    pub fn zeros(len: usize) -> Self {
        Vector::from_vec(vec![T::zero(); len])
    }
}

impl<T> Vector<T>
where
    T: Clone + One,
{
    pub fn ones(len: usize) -> Self {
        Vector::from_vec(vec![T::one(); len])
    }
}

impl<T: Scalar> Vector<T> {
    fn check_len(&self, other: &Vector<T>, op: &'static str) -> Result<()> {
        if self.len() != other.len() {
            return Err(LinalgError::DimensionMismatch {
                op,
                left: self.size(),
                right: other.size(),
            });
        }
        Ok(())
    }

    fn zip_with<F>(&self, other: &Vector<T>, op: &'static str, mut f: F) -> Result<Vector<T>>
    where
        F: FnMut(T, T) -> Result<T>,
    {
        self.check_len(other, op)?;
        self.data
            .iter()
            .zip(other.data.iter())
            .map(|(&a, &b)| f(a, b))
            .collect::<Result<Vec<T>>>()
            .map(Vector::from_vec)
    }

    fn zip_assign<F>(&mut self, other: &Vector<T>, op: &'static str, mut f: F) -> Result<()>
    where
        F: FnMut(T, T) -> Result<T>,
    {
        self.check_len(other, op)?;
        for (a, &b) in self.data.iter_mut().zip(other.data.iter()) {
            *a = f(*a, b)?;
        }
        Ok(())
    }

    pub fn try_add(&self, other: &Vector<T>) -> Result<Vector<T>> {
        self.zip_with(other, "add", checked_add)
    }

    pub fn try_sub(&self, other: &Vector<T>) -> Result<Vector<T>> {
        self.zip_with(other, "sub", checked_sub)
    }

    pub fn try_mul(&self, other: &Vector<T>) -> Result<Vector<T>> {
        self.zip_with(other, "mul", checked_mul)
    }

    pub fn try_div(&self, other: &Vector<T>) -> Result<Vector<T>> {
        self.zip_with(other, "div", checked_div)
    }

    pub fn try_rem(&self, other: &Vector<T>) -> Result<Vector<T>> {
        self.zip_with(other, "rem", checked_rem)
    }

    pub fn try_pow(&self, other: &Vector<T>) -> Result<Vector<T>> {
        self.zip_with(other, "pow", checked_pow)
    }

    pub fn try_add_assign(&mut self, other: &Vector<T>) -> Result<()> {
        self.zip_assign(other, "add_assign", checked_add)
    }

    pub fn try_sub_assign(&mut self, other: &Vector<T>) -> Result<()> {
        self.zip_assign(other, "sub_assign", checked_sub)
    }

    pub fn try_mul_assign(&mut self, other: &Vector<T>) -> Result<()> {
        self.zip_assign(other, "mul_assign", checked_mul)
    }

    pub fn try_div_assign(&mut self, other: &Vector<T>) -> Result<()> {
        self.zip_assign(other, "div_assign", checked_div)
    }

    pub fn try_rem_assign(&mut self, other: &Vector<T>) -> Result<()> {
        self.zip_assign(other, "rem_assign", checked_rem)
    }

    pub fn try_pow_assign(&mut self, other: &Vector<T>) -> Result<()> {
        self.zip_assign(other, "pow_assign", checked_pow)
    }

    /// Panicking form of [`Vector::try_pow`].
    pub fn pow(&self, other: &Vector<T>) -> Vector<T> {
        match self.try_pow(other) {
            Ok(out) => out,
            Err(err) => panic!("{}", err),
        }
    }

    pub fn dot(&self, other: &Vector<T>) -> Result<T> {
        self.check_len(other, "dot")?;
        dot_scalar(self.as_slice(), other.as_slice())
    }

    /// Cross product; both operands must have exactly three elements.
    pub fn cross(&self, other: &Vector<T>) -> Result<Vector<T>> {
        if self.len() != 3 || other.len() != 3 {
            return Err(LinalgError::DimensionMismatch {
                op: "cross",
                left: self.size(),
                right: other.size(),
            });
        }
        let (a, b) = (&self.data, &other.data);
        let component = |i: usize, j: usize| -> Result<T> {
            checked_sub(checked_mul(a[i], b[j])?, checked_mul(a[j], b[i])?)
        };
        Ok(Vector::from_vec(vec![
            component(1, 2)?,
            component(2, 0)?,
            component(0, 1)?,
        ]))
    }

    pub fn sum(&self) -> T {
        self.data.iter().fold(T::zero(), |acc, &v| acc + v)
    }

    /// Euclidean norm, computed in `f64`.
    pub fn norm(&self) -> f64 {
        self.data
            .iter()
            .map(|v| {
                let x = v.as_f64();
                x * x
            })
            .sum::<f64>()
            .sqrt()
    }

    pub fn to_f64(&self) -> Vector<f64> {
        self.mapv(|v| v.as_f64())
    }
}

pub(crate) fn checked_add<T: Scalar>(a: T, b: T) -> Result<T> {
    a.checked_add(b).ok_or(LinalgError::Overflow { op: "add" })
}

pub(crate) fn checked_sub<T: Scalar>(a: T, b: T) -> Result<T> {
    a.checked_sub(b).ok_or(LinalgError::Overflow { op: "sub" })
}

pub(crate) fn checked_mul<T: Scalar>(a: T, b: T) -> Result<T> {
    a.checked_mul(b).ok_or(LinalgError::Overflow { op: "mul" })
}

fn checked_div<T: Scalar>(a: T, b: T) -> Result<T> {
    if !T::is_float() && b.is_zero() {
        return Err(LinalgError::DivisionByZero);
    }
    a.checked_div(b).ok_or(LinalgError::Overflow { op: "div" })
}

fn checked_rem<T: Scalar>(a: T, b: T) -> Result<T> {
    if !T::is_float() && b.is_zero() {
        return Err(LinalgError::DivisionByZero);
    }
    a.checked_rem(b).ok_or(LinalgError::Overflow { op: "rem" })
}

fn checked_pow<T: Scalar>(a: T, b: T) -> Result<T> {
    if !T::is_float() && a.is_zero() && b < T::zero() {
        return Err(LinalgError::DivisionByZero);
    }
    a.checked_pow(b).ok_or(LinalgError::Overflow { op: "pow" })
}

fn dot_scalar<T: Scalar>(lhs: &[T], rhs: &[T]) -> Result<T> {
    lhs.iter()
        .zip(rhs.iter())
        .try_fold(T::zero(), |acc, (&a, &b)| checked_add(acc, checked_mul(a, b)?))
}

impl_elementwise_ops!(Vector);

impl<T: Scalar + Neg<Output = T>> Neg for &Vector<T> {
    type Output = Vector<T>;

    fn neg(self) -> Vector<T> {
        self.mapv(|&v| -v)
    }
}

impl<T> From<Vec<T>> for Vector<T> {
    fn from(value: Vec<T>) -> Self {
        Vector::from_vec(value)
    }
}

impl<T> From<Vector<T>> for Vec<T> {
    fn from(value: Vector<T>) -> Self {
        value.data
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Vector::from_vec(iter.into_iter().collect())
    }
}

impl<'a, T> IntoIterator for &'a Vector<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<T> Index<usize> for Vector<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}

impl<T> IndexMut<usize> for Vector<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.data[index]
    }
}

impl<T: fmt::Display> fmt::Display for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (idx, value) in self.data.iter().enumerate() {
            write!(f, "{}", value)?;
            if idx + 1 != self.data.len() {
                write!(f, ", ")?;
            }
        }
        write!(f, "]")
    }
}

//! Fixed-size 4x4 matrix and 4-vector storage types
//!
//! The matrix stores its 16 elements in column-major order: element
//! (row r, column c) lives at index `c*4 + r`. This layout matches the
//! consuming vector library and is never reinterpreted row-major.

use num_traits::Num;

/// A 4x4 matrix with column-major element storage
///
/// The element at (row r, column c) is stored at index `c*4 + r` of
/// `values`. The layout is fixed and independent of the element values.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Matrix4<T> {
    /// Element storage in column-major order (size: 16)
    pub values: [T; 16],
}

impl<T> Matrix4<T>
where
    T: Copy + Num,
{
    /// Creates a matrix from 16 values given in column-major order
    pub fn new(values: [T; 16]) -> Self {
        Self { values }
    }

    /// Creates a matrix with all elements zero
    pub fn zeros() -> Self {
        Self {
            values: [T::zero(); 16],
        }
    }

    /// Creates the identity matrix (ones on the diagonal, zero elsewhere)
    pub fn identity() -> Self {
        let mut result = Self::zeros();
        for i in 0..4 {
            result.set(i, i, T::one());
        }
        result
    }

    /// Returns the element at (row r, column c)
    ///
    /// # Panics
    ///
    /// Panics if r or c is out of bounds (>= 4).
    pub fn get(&self, r: usize, c: usize) -> T {
        assert!(r < 4, "Row index {} out of bounds", r);
        assert!(c < 4, "Column index {} out of bounds", c);
        self.values[c * 4 + r]
    }

    /// Sets the element at (row r, column c)
    ///
    /// # Panics
    ///
    /// Panics if r or c is out of bounds (>= 4).
    pub fn set(&mut self, r: usize, c: usize, value: T) {
        assert!(r < 4, "Row index {} out of bounds", r);
        assert!(c < 4, "Column index {} out of bounds", c);
        self.values[c * 4 + r] = value;
    }

    /// Returns column c as a vector
    ///
    /// # Panics
    ///
    /// Panics if c is out of bounds (>= 4).
    pub fn column(&self, c: usize) -> Vector4<T> {
        assert!(c < 4, "Column index {} out of bounds", c);
        let mut values = [T::zero(); 4];
        values.copy_from_slice(&self.values[c * 4..c * 4 + 4]);
        Vector4::new(values)
    }
}

/// A 4-element vector
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vector4<T> {
    /// Element storage (size: 4)
    pub values: [T; 4],
}

impl<T> Vector4<T>
where
    T: Copy + Num,
{
    /// Creates a vector from 4 values
    pub fn new(values: [T; 4]) -> Self {
        Self { values }
    }

    /// Creates a vector with all elements zero
    pub fn zeros() -> Self {
        Self {
            values: [T::zero(); 4],
        }
    }

    /// Creates the i-th basis vector (one at index i, zero elsewhere)
    ///
    /// # Panics
    ///
    /// Panics if i is out of bounds (>= 4).
    pub fn basis(i: usize) -> Self {
        assert!(i < 4, "Basis index {} out of bounds", i);
        let mut result = Self::zeros();
        result.values[i] = T::one();
        result
    }
}

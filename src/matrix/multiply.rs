//! Reference 4x4 multiplication kernels
//!
//! These kernels define the expected values embedded in the emitted fixtures,
//! so their arithmetic is part of the output contract: terms are accumulated
//! in index order k = 0, 1, 2, 3, each as one rounded multiply followed by
//! one rounded add. Any conforming implementation fed the same inputs must
//! reproduce the results bit for bit.

use std::ops::AddAssign;

use num_traits::Num;

use crate::matrix::{Matrix4, Vector4};

/// Computes the 4x4 matrix product `result(r,c) = sum_k a(r,k) * b(k,c)`
///
/// Accumulation runs in index order k = 0..3. Non-finite inputs (NaN/inf)
/// propagate per IEEE semantics with no special-casing.
pub fn mat4_multiply<T>(a: &Matrix4<T>, b: &Matrix4<T>) -> Matrix4<T>
where
    T: Copy + Num + AddAssign,
{
    let mut result = Matrix4::zeros();

    for c in 0..4 {
        for r in 0..4 {
            let mut sum = T::zero();
            for k in 0..4 {
                sum += a.get(r, k) * b.get(k, c);
            }
            result.set(r, c, sum);
        }
    }

    result
}

/// Computes the matrix-vector product `result(r) = sum_k a(r,k) * b(k)`
///
/// Same layout and accumulation-order rules as [`mat4_multiply`].
pub fn mat4_vec4_multiply<T>(a: &Matrix4<T>, b: &Vector4<T>) -> Vector4<T>
where
    T: Copy + Num + AddAssign,
{
    let mut result = Vector4::zeros();

    for r in 0..4 {
        let mut sum = T::zero();
        for k in 0..4 {
            sum += a.get(r, k) * b.values[k];
        }
        result.values[r] = sum;
    }

    result
}

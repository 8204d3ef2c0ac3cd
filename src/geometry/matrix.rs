// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

use std::{
    array,
    ops::{Add, Index, IndexMut, Mul, Sub},
};

use crate::{geometry::vector::Vector, numeric::scalar::Scalar};

/// Generic row-major matrix R x C
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Matrix<T: Scalar, const R: usize, const C: usize>(pub [[T; C]; R]);

pub type Matrix2<T> = Matrix<T, 2, 2>;
pub type Matrix3<T> = Matrix<T, 3, 3>;
pub type Matrix4<T> = Matrix<T, 4, 4>;

pub type Matrix2d = Matrix2<f64>;
pub type Matrix3d = Matrix3<f64>;
pub type Matrix4d = Matrix4<f64>;
pub type Matrix2f = Matrix2<f32>;
pub type Matrix3f = Matrix3<f32>;
pub type Matrix4f = Matrix4<f32>;

// ---------- Basics ----------
impl<T: Scalar, const R: usize, const C: usize> Matrix<T, R, C> {
    #[inline]
    pub fn zero() -> Self {
        Self::splat(T::zero())
    }

    /// Matrix filled with a single value.
    #[inline]
    pub fn splat(val: T) -> Self {
        Matrix([[val; C]; R])
    }

    /// Build from rows.
    #[inline]
    pub fn from_rows(rows: [[T; C]; R]) -> Self {
        Matrix(rows)
    }

    /// Build from columns.
    #[inline]
    pub fn from_cols(cols: [Vector<T, R>; C]) -> Self {
        Matrix(array::from_fn(|i| array::from_fn(|j| cols[j][i])))
    }

    /// Transpose into C x R.
    #[inline]
    pub fn transpose(&self) -> Matrix<T, C, R> {
        Matrix(array::from_fn(|j| array::from_fn(|i| self[i][j])))
    }

    /// Scale all entries by `s`.
    #[inline]
    pub fn scale(&self, s: T) -> Self {
        Matrix(array::from_fn(|i| array::from_fn(|j| self[i][j] * s)))
    }

    /// Get a row as a Vector<T, C>.
    #[inline]
    pub fn row(&self, r: usize) -> Vector<T, C> {
        Vector::from_coords(self.0[r])
    }

    /// Get a column as a Vector<T, R>.
    #[inline]
    pub fn col(&self, c: usize) -> Vector<T, R> {
        Vector::from_coords(array::from_fn(|i| self[i][c]))
    }

    /// Outer product: a (R) * bᵀ (C) => R x C
    #[inline]
    pub fn outer(a: &Vector<T, R>, b: &Vector<T, C>) -> Self {
        Matrix(array::from_fn(|i| array::from_fn(|j| a[i] * b[j])))
    }

    /// Frobenius inner product `sum_ij A_ij * B_ij`.
    pub fn inner_product(&self, other: &Self) -> T {
        let mut acc = T::zero();
        for i in 0..R {
            for j in 0..C {
                acc += self[i][j] * other[i][j];
            }
        }
        acc
    }

    /// Convert to another precision. Narrowing to `f32` rounds.
    pub fn cast<U: Scalar>(&self) -> Matrix<U, R, C> {
        Matrix(array::from_fn(|i| {
            array::from_fn(|j| U::from_f64(self[i][j].as_f64()))
        }))
    }

    pub fn epsilon_equal(&self, other: &Self, eps: T) -> bool {
        (0..R).all(|i| (0..C).all(|j| (self[i][j] - other[i][j]).abs() <= eps))
    }
}

impl<T: Scalar, const N: usize> Matrix<T, N, N> {
    #[inline]
    pub fn identity() -> Self {
        Matrix(array::from_fn(|i| {
            array::from_fn(|j| if i == j { T::one() } else { T::zero() })
        }))
    }

    #[inline]
    pub fn diagonal(d: &Vector<T, N>) -> Self {
        Matrix(array::from_fn(|i| {
            array::from_fn(|j| if i == j { d[i] } else { T::zero() })
        }))
    }

    pub fn trace(&self) -> T {
        (0..N).fold(T::zero(), |acc, i| acc + self[i][i])
    }
}

impl<T: Scalar> Matrix<T, 2, 2> {
    pub fn determinant(&self) -> T {
        self[0][0] * self[1][1] - self[0][1] * self[1][0]
    }

    /// Inverse, or `None` when `|det| <= zero_tolerance`.
    pub fn inverse(&self) -> Option<Self> {
        let det = self.determinant();
        if det.abs() <= T::zero_tolerance() {
            return None;
        }
        let inv = T::one() / det;
        Some(Matrix([
            [self[1][1] * inv, -self[0][1] * inv],
            [-self[1][0] * inv, self[0][0] * inv],
        ]))
    }

    /// Rotation by `angle` radians, counter-clockwise.
    pub fn rotation(angle: T) -> Self {
        let (s, c) = angle.sin_cos();
        Matrix([[c, -s], [s, c]])
    }
}

impl<T: Scalar> Matrix<T, 3, 3> {
    pub fn determinant(&self) -> T {
        let m = &self.0;
        m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
            - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
            + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
    }

    /// Inverse via the adjugate, or `None` when `|det| <= zero_tolerance`.
    pub fn inverse(&self) -> Option<Self> {
        let m = &self.0;
        let c00 = m[1][1] * m[2][2] - m[1][2] * m[2][1];
        let c01 = m[1][2] * m[2][0] - m[1][0] * m[2][2];
        let c02 = m[1][0] * m[2][1] - m[1][1] * m[2][0];
        let det = m[0][0] * c00 + m[0][1] * c01 + m[0][2] * c02;
        if det.abs() <= T::zero_tolerance() {
            return None;
        }
        let inv = T::one() / det;
        Some(Matrix([
            [
                c00 * inv,
                (m[0][2] * m[2][1] - m[0][1] * m[2][2]) * inv,
                (m[0][1] * m[1][2] - m[0][2] * m[1][1]) * inv,
            ],
            [
                c01 * inv,
                (m[0][0] * m[2][2] - m[0][2] * m[2][0]) * inv,
                (m[0][2] * m[1][0] - m[0][0] * m[1][2]) * inv,
            ],
            [
                c02 * inv,
                (m[0][1] * m[2][0] - m[0][0] * m[2][1]) * inv,
                (m[0][0] * m[1][1] - m[0][1] * m[1][0]) * inv,
            ],
        ]))
    }

    /// Rotation of `angle_deg` degrees about the unit `axis`.
    pub fn axis_angle_deg(axis: &Vector<T, 3>, angle_deg: T) -> Self {
        let (s, c) = angle_deg.to_radians().sin_cos();
        let one_c = T::one() - c;
        let (x, y, z) = (axis[0], axis[1], axis[2]);
        Matrix([
            [c + x * x * one_c, x * y * one_c - z * s, x * z * one_c + y * s],
            [y * x * one_c + z * s, c + y * y * one_c, y * z * one_c - x * s],
            [z * x * one_c - y * s, z * y * one_c + x * s, c + z * z * one_c],
        ])
    }
}

impl<T: Scalar> Matrix<T, 4, 4> {
    /// Cofactor expansion along the first row.
    pub fn determinant(&self) -> T {
        let mut det = T::zero();
        let mut sign = T::one();
        for c in 0..4 {
            let minor: Matrix<T, 3, 3> = Matrix(array::from_fn(|i| {
                array::from_fn(|j| {
                    let col = if j < c { j } else { j + 1 };
                    self[i + 1][col]
                })
            }));
            det += sign * self[0][c] * minor.determinant();
            sign = -sign;
        }
        det
    }
}

// ---------- Indexing ----------
impl<T: Scalar, const R: usize, const C: usize> Index<usize> for Matrix<T, R, C> {
    type Output = [T; C];
    #[inline]
    fn index(&self, i: usize) -> &Self::Output {
        &self.0[i]
    }
}
impl<T: Scalar, const R: usize, const C: usize> IndexMut<usize> for Matrix<T, R, C> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut Self::Output {
        &mut self.0[i]
    }
}

// ---------- Add / Sub ----------
impl<T: Scalar, const R: usize, const C: usize> Add for Matrix<T, R, C> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Matrix(array::from_fn(|i| array::from_fn(|j| self[i][j] + rhs[i][j])))
    }
}

impl<T: Scalar, const R: usize, const C: usize> Sub for Matrix<T, R, C> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Matrix(array::from_fn(|i| array::from_fn(|j| self[i][j] - rhs[i][j])))
    }
}

// ---------- Products ----------
impl<T: Scalar, const R: usize, const K: usize, const C: usize> Mul<Matrix<T, K, C>>
    for Matrix<T, R, K>
{
    type Output = Matrix<T, R, C>;
    #[inline]
    fn mul(self, rhs: Matrix<T, K, C>) -> Matrix<T, R, C> {
        Matrix(array::from_fn(|i| {
            array::from_fn(|j| {
                let mut acc = T::zero();
                for k in 0..K {
                    acc += self[i][k] * rhs[k][j];
                }
                acc
            })
        }))
    }
}

impl<T: Scalar, const R: usize, const C: usize> Mul<Vector<T, C>> for Matrix<T, R, C> {
    type Output = Vector<T, R>;
    #[inline]
    fn mul(self, v: Vector<T, C>) -> Vector<T, R> {
        Vector::from_coords(array::from_fn(|i| {
            let mut acc = T::zero();
            for j in 0..C {
                acc += self[i][j] * v[j];
            }
            acc
        }))
    }
}

impl<T: Scalar, const R: usize, const C: usize> Mul<T> for Matrix<T, R, C> {
    type Output = Self;
    #[inline]
    fn mul(self, s: T) -> Self {
        self.scale(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::vector::Vector3d;

    #[test]
    fn inverse_3x3_round_trips() {
        let m = Matrix3d::from_rows([[2.0, 0.0, 1.0], [1.0, 3.0, 0.0], [0.0, 1.0, 4.0]]);
        let inv = m.inverse().expect("non-singular");
        assert!((m * inv).epsilon_equal(&Matrix3d::identity(), 1e-12));
    }

    #[test]
    fn singular_has_no_inverse() {
        let m = Matrix2d::from_rows([[1.0, 2.0], [2.0, 4.0]]);
        assert!(m.inverse().is_none());
        assert_eq!(m.determinant(), 0.0);
    }

    #[test]
    fn determinant_4x4_of_diagonal() {
        let m = Matrix4d::diagonal(&Vector::from_coords([1.0, 2.0, 3.0, 4.0]));
        assert_eq!(m.determinant(), 24.0);
    }

    #[test]
    fn axis_angle_rotates_x_to_y() {
        let r = Matrix3d::axis_angle_deg(&Vector3d::new(0.0, 0.0, 1.0), 90.0);
        let v = r * Vector3d::new(1.0, 0.0, 0.0);
        assert!(v.epsilon_equal(&Vector3d::new(0.0, 1.0, 0.0), 1e-12));
    }

    #[test]
    fn outer_and_inner_product() {
        let a = Vector3d::new(1.0, 2.0, 3.0);
        let o = Matrix3d::outer(&a, &a);
        assert_eq!(o.trace(), a.length_squared());
        assert_eq!(o.inner_product(&Matrix3d::identity()), 14.0);
    }
}

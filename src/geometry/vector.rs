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
    ops::{Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign},
};

use crate::numeric::scalar::Scalar;

/// Fixed-size vector of `N` scalar components.
///
/// No normalisation happens implicitly. A vector is unit length only after
/// `normalize` / `normalized`, and `is_normalized` is an approximate check.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vector<T: Scalar, const N: usize> {
    pub coords: [T; N],
}

pub type Vector2<T> = Vector<T, 2>;
pub type Vector3<T> = Vector<T, 3>;
pub type Vector4<T> = Vector<T, 4>;

pub type Vector2d = Vector2<f64>;
pub type Vector3d = Vector3<f64>;
pub type Vector4d = Vector4<f64>;
pub type Vector2f = Vector2<f32>;
pub type Vector3f = Vector3<f32>;
pub type Vector4f = Vector4<f32>;

impl<T: Scalar, const N: usize> Default for Vector<T, N> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: Scalar, const N: usize> Vector<T, N> {
    #[inline]
    pub const fn from_coords(coords: [T; N]) -> Self {
        Self { coords }
    }

    #[inline]
    pub fn zero() -> Self {
        Self::splat(T::zero())
    }

    #[inline]
    pub fn one() -> Self {
        Self::splat(T::one())
    }

    #[inline]
    pub fn splat(v: T) -> Self {
        Self {
            coords: [v; N],
        }
    }

    /// Unit basis vector along axis `i`.
    #[inline]
    pub fn unit(i: usize) -> Self {
        Self {
            coords: array::from_fn(|k| if k == i { T::one() } else { T::zero() }),
        }
    }

    pub fn unit_x() -> Self {
        Self::unit(0)
    }

    pub fn unit_y() -> Self {
        Self::unit(1)
    }

    #[inline(always)]
    pub fn x(&self) -> T {
        self.coords[0]
    }

    #[inline(always)]
    pub fn y(&self) -> T {
        self.coords[1]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.coords.iter()
    }

    #[inline]
    pub fn dot(&self, other: &Self) -> T {
        let mut acc = T::zero();
        for i in 0..N {
            acc += self.coords[i] * other.coords[i];
        }
        acc
    }

    #[inline]
    pub fn length_squared(&self) -> T {
        self.dot(self)
    }

    #[inline]
    pub fn length(&self) -> T {
        self.length_squared().sqrt()
    }

    #[inline]
    pub fn distance_squared(&self, other: &Self) -> T {
        (*self - *other).length_squared()
    }

    #[inline]
    pub fn distance(&self, other: &Self) -> T {
        self.distance_squared(other).sqrt()
    }

    /// Normalise in place and return the previous length.
    ///
    /// Lengths at or below `T::epsilon()` collapse the vector to zero and
    /// return zero.
    pub fn normalize(&mut self) -> T {
        let length = self.length();
        if length > T::epsilon() {
            let inv = T::one() / length;
            for c in self.coords.iter_mut() {
                *c *= inv;
            }
            length
        } else {
            *self = Self::zero();
            T::zero()
        }
    }

    #[inline]
    pub fn normalized(&self) -> Self {
        let mut v = *self;
        v.normalize();
        v
    }

    #[inline]
    pub fn is_normalized(&self) -> bool {
        (self.length_squared() - T::one()).abs() < T::zero_tolerance()
    }

    #[inline]
    pub fn abs(&self) -> Self {
        self.map(|c| c.abs())
    }

    #[inline]
    pub fn map(&self, f: impl Fn(T) -> T) -> Self {
        Self {
            coords: array::from_fn(|i| f(self.coords[i])),
        }
    }

    /// Componentwise product.
    #[inline]
    pub fn scale_by(&self, other: &Self) -> Self {
        Self {
            coords: array::from_fn(|i| self.coords[i] * other.coords[i]),
        }
    }

    #[inline]
    pub fn component_min(&self, other: &Self) -> Self {
        Self {
            coords: array::from_fn(|i| self.coords[i].min(other.coords[i])),
        }
    }

    #[inline]
    pub fn component_max(&self, other: &Self) -> Self {
        Self {
            coords: array::from_fn(|i| self.coords[i].max(other.coords[i])),
        }
    }

    pub fn max_component(&self) -> T {
        self.coords.iter().fold(T::neg_infinity(), |m, &c| m.max(c))
    }

    pub fn min_component(&self) -> T {
        self.coords.iter().fold(T::infinity(), |m, &c| m.min(c))
    }

    #[inline]
    pub fn lerp(&self, other: &Self, t: T) -> Self {
        let s = T::one() - t;
        Self {
            coords: array::from_fn(|i| s * self.coords[i] + t * other.coords[i]),
        }
    }

    pub fn epsilon_equal(&self, other: &Self, eps: T) -> bool {
        (0..N).all(|i| (self.coords[i] - other.coords[i]).abs() <= eps)
    }

    pub fn is_finite(&self) -> bool {
        self.coords.iter().all(|c| c.is_finite())
    }

    /// Convert to another precision. Narrowing to `f32` rounds.
    #[inline]
    pub fn cast<U: Scalar>(&self) -> Vector<U, N> {
        Vector {
            coords: array::from_fn(|i| U::from_f64(self.coords[i].as_f64())),
        }
    }
}

impl<const N: usize> Vector<f32, N> {
    /// Lossless widening to double precision.
    #[inline]
    pub fn to_f64(&self) -> Vector<f64, N> {
        Vector {
            coords: array::from_fn(|i| self.coords[i] as f64),
        }
    }
}

impl<const N: usize> Vector<f64, N> {
    /// Narrowing to single precision; rounds each component.
    #[inline]
    pub fn to_f32(&self) -> Vector<f32, N> {
        Vector {
            coords: array::from_fn(|i| self.coords[i] as f32),
        }
    }
}

impl<T: Scalar> Vector<T, 2> {
    #[inline]
    pub const fn new(x: T, y: T) -> Self {
        Self { coords: [x, y] }
    }

    /// Counter-clockwise perpendicular `(-y, x)`.
    #[inline]
    pub fn perp(&self) -> Self {
        Self::new(-self.coords[1], self.coords[0])
    }

    /// Two-dimensional cross product `x * o.y - y * o.x`.
    #[inline]
    pub fn dot_perp(&self, other: &Self) -> T {
        self.coords[0] * other.coords[1] - self.coords[1] * other.coords[0]
    }

    /// Angle of the vector in radians, in `(-pi, pi]`.
    #[inline]
    pub fn angle_r(&self) -> T {
        self.coords[1].atan2(self.coords[0])
    }
}

impl<T: Scalar> Vector<T, 3> {
    #[inline]
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self { coords: [x, y, z] }
    }

    #[inline(always)]
    pub fn unit_z() -> Self {
        Self::unit(2)
    }

    #[inline(always)]
    pub fn z(&self) -> T {
        self.coords[2]
    }

    #[inline]
    pub fn cross(&self, other: &Self) -> Self {
        let [ax, ay, az] = self.coords;
        let [bx, by, bz] = other.coords;
        Self::new(ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx)
    }

    #[inline]
    pub fn unit_cross(&self, other: &Self) -> Self {
        self.cross(other).normalized()
    }

    /// Angle in degrees between two unit vectors.
    pub fn angle_deg(&self, other: &Self) -> T {
        let d = self.dot(other).clamp_to(-T::one(), T::one());
        d.acos().to_degrees()
    }

    pub fn xy(&self) -> Vector<T, 2> {
        Vector::<T, 2>::new(self.coords[0], self.coords[1])
    }

    /// Build `(u, v)` so that `{u, v, w}` is a right-handed orthonormal basis.
    ///
    /// `w` must be unit length. The larger of `|w.x|`, `|w.y|` decides which
    /// component gets zeroed in `u`.
    pub fn generate_complement_basis(w: &Self) -> (Self, Self) {
        let [wx, wy, wz] = w.coords;
        if wx.abs() >= wy.abs() {
            let inv_length = T::one() / (wx * wx + wz * wz).sqrt();
            let u = Self::new(-wz * inv_length, T::zero(), wx * inv_length);
            let v = Self::new(wy * u[2], wz * u[0] - wx * u[2], -wy * u[0]);
            (u, v)
        } else {
            let inv_length = T::one() / (wy * wy + wz * wz).sqrt();
            let u = Self::new(T::zero(), wz * inv_length, -wy * inv_length);
            let v = Self::new(wy * u[2] - wz * u[1], -wx * u[2], wx * u[1]);
            (u, v)
        }
    }
}

impl<T: Scalar> Vector<T, 4> {
    #[inline]
    pub const fn new(x: T, y: T, z: T, w: T) -> Self {
        Self {
            coords: [x, y, z, w],
        }
    }

    #[inline(always)]
    pub fn z(&self) -> T {
        self.coords[2]
    }

    #[inline(always)]
    pub fn w(&self) -> T {
        self.coords[3]
    }

    pub fn xyz(&self) -> Vector<T, 3> {
        Vector::<T, 3>::new(self.coords[0], self.coords[1], self.coords[2])
    }
}

impl<T: Scalar, const N: usize> From<[T; N]> for Vector<T, N> {
    fn from(coords: [T; N]) -> Self {
        Self { coords }
    }
}

impl<T: Scalar, const N: usize> From<Vector<T, N>> for [T; N] {
    fn from(v: Vector<T, N>) -> Self {
        v.coords
    }
}

impl<T: Scalar, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;
    #[inline(always)]
    fn index(&self, i: usize) -> &T {
        &self.coords[i]
    }
}

impl<T: Scalar, const N: usize> IndexMut<usize> for Vector<T, N> {
    #[inline(always)]
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.coords[i]
    }
}

impl<T: Scalar, const N: usize> Add for Vector<T, N> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self {
            coords: array::from_fn(|i| self.coords[i] + rhs.coords[i]),
        }
    }
}

impl<T: Scalar, const N: usize> Sub for Vector<T, N> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self {
            coords: array::from_fn(|i| self.coords[i] - rhs.coords[i]),
        }
    }
}

impl<T: Scalar, const N: usize> Neg for Vector<T, N> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        self.map(|c| -c)
    }
}

impl<T: Scalar, const N: usize> Mul<T> for Vector<T, N> {
    type Output = Self;
    #[inline]
    fn mul(self, s: T) -> Self {
        self.map(|c| c * s)
    }
}

impl<T: Scalar, const N: usize> Div<T> for Vector<T, N> {
    type Output = Self;
    #[inline]
    fn div(self, s: T) -> Self {
        self.map(|c| c / s)
    }
}

impl<T: Scalar, const N: usize> AddAssign for Vector<T, N> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        for i in 0..N {
            self.coords[i] += rhs.coords[i];
        }
    }
}

impl<T: Scalar, const N: usize> SubAssign for Vector<T, N> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        for i in 0..N {
            self.coords[i] -= rhs.coords[i];
        }
    }
}

impl<T: Scalar, const N: usize> MulAssign<T> for Vector<T, N> {
    #[inline]
    fn mul_assign(&mut self, s: T) {
        for c in self.coords.iter_mut() {
            *c *= s;
        }
    }
}

impl<T: Scalar, const N: usize> DivAssign<T> for Vector<T, N> {
    #[inline]
    fn div_assign(&mut self, s: T) {
        for c in self.coords.iter_mut() {
            *c /= s;
        }
    }
}

macro_rules! impl_scalar_lhs_mul {
    ($($t:ty),*) => {
        $(
            impl<const N: usize> Mul<Vector<$t, N>> for $t {
                type Output = Vector<$t, N>;
                #[inline]
                fn mul(self, v: Vector<$t, N>) -> Vector<$t, N> {
                    v * self
                }
            }
        )*
    };
}

impl_scalar_lhs_mul!(f32, f64);

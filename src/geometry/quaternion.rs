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

use std::ops::Mul;

use crate::{
    geometry::{matrix::Matrix3, vector::Vector3},
    numeric::scalar::Scalar,
};

/// Rotation quaternion `w + xi + yj + zk`. Unit length is a precondition of
/// `rotate` and `to_matrix`, not an invariant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Quaternion<T: Scalar> {
    pub x: T,
    pub y: T,
    pub z: T,
    pub w: T,
}

pub type Quaterniond = Quaternion<f64>;
pub type Quaternionf = Quaternion<f32>;

impl<T: Scalar> Default for Quaternion<T> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<T: Scalar> Quaternion<T> {
    pub fn new(x: T, y: T, z: T, w: T) -> Self {
        Self { x, y, z, w }
    }

    pub fn identity() -> Self {
        Self::new(T::zero(), T::zero(), T::zero(), T::one())
    }

    /// Rotation of `angle_deg` degrees about the unit `axis`.
    pub fn from_axis_angle_deg(axis: &Vector3<T>, angle_deg: T) -> Self {
        let half = angle_deg.to_radians() * T::half();
        let (s, c) = half.sin_cos();
        Self::new(axis[0] * s, axis[1] * s, axis[2] * s, c)
    }

    /// Shortest rotation taking unit `from` onto unit `to`.
    pub fn from_to(from: &Vector3<T>, to: &Vector3<T>) -> Self {
        let bisector = (*from + *to).normalized();
        let cos_half = from.dot(&bisector);
        if cos_half.abs() > T::zero_tolerance() {
            let axis = from.cross(&bisector);
            Self::new(axis[0], axis[1], axis[2], cos_half)
        } else {
            // Opposite vectors: rotate pi about any perpendicular axis.
            let (u, _) = Vector3::generate_complement_basis(from);
            Self::new(u[0], u[1], u[2], T::zero())
        }
    }

    pub fn length_squared(&self) -> T {
        self.x * self.x + self.y * self.y + self.z * self.z + self.w * self.w
    }

    pub fn length(&self) -> T {
        self.length_squared().sqrt()
    }

    pub fn normalized(&self) -> Self {
        let len = self.length();
        if len > T::epsilon() {
            let inv = T::one() / len;
            Self::new(self.x * inv, self.y * inv, self.z * inv, self.w * inv)
        } else {
            Self::new(T::zero(), T::zero(), T::zero(), T::zero())
        }
    }

    pub fn conjugate(&self) -> Self {
        Self::new(-self.x, -self.y, -self.z, self.w)
    }

    /// Multiplicative inverse; zero quaternion when the length vanishes.
    pub fn inverse(&self) -> Self {
        let norm = self.length_squared();
        if norm > T::zero() {
            let inv = T::one() / norm;
            Self::new(-self.x * inv, -self.y * inv, -self.z * inv, self.w * inv)
        } else {
            Self::new(T::zero(), T::zero(), T::zero(), T::zero())
        }
    }

    pub fn dot(&self, other: &Self) -> T {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    /// Rotate `v` by this unit quaternion.
    pub fn rotate(&self, v: &Vector3<T>) -> Vector3<T> {
        let q = Vector3::new(self.x, self.y, self.z);
        let t = q.cross(v) * T::two();
        *v + t * self.w + q.cross(&t)
    }

    pub fn axis_x(&self) -> Vector3<T> {
        self.rotate(&Vector3::unit(0))
    }

    pub fn axis_y(&self) -> Vector3<T> {
        self.rotate(&Vector3::unit(1))
    }

    pub fn axis_z(&self) -> Vector3<T> {
        self.rotate(&Vector3::unit(2))
    }

    pub fn to_matrix(&self) -> Matrix3<T> {
        let two = T::two();
        let (x, y, z, w) = (self.x, self.y, self.z, self.w);
        let one = T::one();
        Matrix3::from_rows([
            [
                one - two * (y * y + z * z),
                two * (x * y - z * w),
                two * (x * z + y * w),
            ],
            [
                two * (x * y + z * w),
                one - two * (x * x + z * z),
                two * (y * z - x * w),
            ],
            [
                two * (x * z - y * w),
                two * (y * z + x * w),
                one - two * (x * x + y * y),
            ],
        ])
    }

    /// Spherical interpolation between unit quaternions.
    pub fn slerp(&self, other: &Self, t: T) -> Self {
        let mut cos = self.dot(other);
        let mut end = *other;
        if cos < T::zero() {
            cos = -cos;
            end = Self::new(-end.x, -end.y, -end.z, -end.w);
        }
        let (s0, s1) = if cos > T::one() - T::zero_tolerance() {
            (T::one() - t, t)
        } else {
            let angle = cos.acos();
            let inv_sin = T::one() / angle.sin();
            (
                ((T::one() - t) * angle).sin() * inv_sin,
                (t * angle).sin() * inv_sin,
            )
        };
        Self::new(
            s0 * self.x + s1 * end.x,
            s0 * self.y + s1 * end.y,
            s0 * self.z + s1 * end.z,
            s0 * self.w + s1 * end.w,
        )
        .normalized()
    }

    pub fn cast<U: Scalar>(&self) -> Quaternion<U> {
        Quaternion::new(
            U::from_f64(self.x.as_f64()),
            U::from_f64(self.y.as_f64()),
            U::from_f64(self.z.as_f64()),
            U::from_f64(self.w.as_f64()),
        )
    }
}

impl<T: Scalar> Mul for Quaternion<T> {
    type Output = Self;
    fn mul(self, q: Self) -> Self {
        Self::new(
            self.w * q.x + self.x * q.w + self.y * q.z - self.z * q.y,
            self.w * q.y + self.y * q.w + self.z * q.x - self.x * q.z,
            self.w * q.z + self.z * q.w + self.x * q.y - self.y * q.x,
            self.w * q.w - self.x * q.x - self.y * q.y - self.z * q.z,
        )
    }
}

impl<T: Scalar> Mul<Vector3<T>> for Quaternion<T> {
    type Output = Vector3<T>;
    fn mul(self, v: Vector3<T>) -> Vector3<T> {
        self.rotate(&v)
    }
}

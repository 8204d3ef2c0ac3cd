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

use crate::{geometry::vector::Vector3, numeric::scalar::Scalar};

/// Plane `normal . x = constant` with unit `normal`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Plane3<T: Scalar> {
    pub normal: Vector3<T>,
    pub constant: T,
}

pub type Plane3d = Plane3<f64>;
pub type Plane3f = Plane3<f32>;

impl<T: Scalar> Plane3<T> {
    pub fn new(normal: Vector3<T>, constant: T) -> Self {
        Plane3 { normal, constant }
    }

    pub fn from_point(normal: Vector3<T>, point: &Vector3<T>) -> Self {
        Plane3 {
            normal,
            constant: normal.dot(point),
        }
    }

    /// Plane through three points, normal following `p1, p2, p3` winding.
    pub fn from_points(p1: &Vector3<T>, p2: &Vector3<T>, p3: &Vector3<T>) -> Self {
        let normal = (*p2 - *p1).unit_cross(&(*p3 - *p1));
        Self::from_point(normal, p1)
    }

    /// Signed distance; positive on the side the normal points to.
    pub fn distance_to(&self, p: &Vector3<T>) -> T {
        self.normal.dot(p) - self.constant
    }

    /// `+1`, `-1`, or `0` when exactly on the plane.
    pub fn which_side(&self, p: &Vector3<T>) -> i32 {
        let d = self.distance_to(p);
        if d < T::zero() {
            -1
        } else if d > T::zero() {
            1
        } else {
            0
        }
    }

    pub fn project(&self, p: &Vector3<T>) -> Vector3<T> {
        *p - self.normal * self.distance_to(p)
    }

    /// Any point on the plane.
    pub fn origin(&self) -> Vector3<T> {
        self.normal * self.constant
    }

    /// Orthonormal in-plane axes `(u, v)` with `u x v = normal`.
    pub fn basis(&self) -> (Vector3<T>, Vector3<T>) {
        Vector3::generate_complement_basis(&self.normal)
    }
}

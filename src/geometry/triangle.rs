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

use std::ops::{Index, IndexMut};

use crate::{
    geometry::vector::Vector,
    numeric::{math_util, scalar::Scalar},
};

/// Triangle with vertices `v0, v1, v2`. Degenerate (collinear) triangles are
/// representable; barycentric solves on them divide by a near-zero
/// determinant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle<T: Scalar, const N: usize> {
    pub v0: Vector<T, N>,
    pub v1: Vector<T, N>,
    pub v2: Vector<T, N>,
}

pub type Triangle2<T> = Triangle<T, 2>;
pub type Triangle3<T> = Triangle<T, 3>;
pub type Triangle2d = Triangle2<f64>;
pub type Triangle3d = Triangle3<f64>;
pub type Triangle2f = Triangle2<f32>;
pub type Triangle3f = Triangle3<f32>;

impl<T: Scalar, const N: usize> Triangle<T, N> {
    pub fn new(v0: Vector<T, N>, v1: Vector<T, N>, v2: Vector<T, N>) -> Self {
        Self { v0, v1, v2 }
    }

    pub fn vertices(&self) -> [Vector<T, N>; 3] {
        [self.v0, self.v1, self.v2]
    }

    pub fn centroid(&self) -> Vector<T, N> {
        (self.v0 + self.v1 + self.v2) / T::from_f64(3.0)
    }

    /// Point with barycentric weights `(b[0], b[1], b[2])`.
    pub fn point_at(&self, bary: &Vector<T, 3>) -> Vector<T, N> {
        self.v0 * bary[0] + self.v1 * bary[1] + self.v2 * bary[2]
    }

    /// Unsigned area, computed from the Gram determinant so it works in any
    /// dimension.
    pub fn area(&self) -> T {
        let e0 = self.v1 - self.v0;
        let e1 = self.v2 - self.v0;
        let a00 = e0.dot(&e0);
        let a01 = e0.dot(&e1);
        let a11 = e1.dot(&e1);
        T::half() * (a00 * a11 - a01 * a01).max(T::zero()).sqrt()
    }

    /// Barycentric coordinates of `p` projected into the triangle's plane.
    pub fn barycentric_coords(&self, p: &Vector<T, N>) -> Vector<T, 3> {
        math_util::barycentric_coords(p, &self.v0, &self.v1, &self.v2)
    }

    pub fn aspect_ratio(&self) -> T {
        math_util::aspect_ratio(&self.v0, &self.v1, &self.v2)
    }

    /// Edge `i` as the vertex pair `(v[i], v[(i + 1) % 3])`.
    pub fn edge(&self, i: usize) -> (Vector<T, N>, Vector<T, N>) {
        (self[i], self[(i + 1) % 3])
    }

    pub fn cast<U: Scalar>(&self) -> Triangle<U, N> {
        Triangle::new(self.v0.cast(), self.v1.cast(), self.v2.cast())
    }
}

impl<T: Scalar> Triangle<T, 3> {
    /// Unit normal following the `v0, v1, v2` winding.
    pub fn normal(&self) -> Vector<T, 3> {
        math_util::normal(&self.v0, &self.v1, &self.v2)
    }
}

impl<T: Scalar> Triangle<T, 2> {
    /// Positive for counter-clockwise winding.
    pub fn signed_area(&self) -> T {
        T::half() * (self.v1 - self.v0).dot_perp(&(self.v2 - self.v0))
    }

    /// Inclusive containment test using edge orientations.
    pub fn contains(&self, p: &Vector<T, 2>) -> bool {
        let s0 = (self.v1 - self.v0).dot_perp(&(*p - self.v0));
        let s1 = (self.v2 - self.v1).dot_perp(&(*p - self.v1));
        let s2 = (self.v0 - self.v2).dot_perp(&(*p - self.v2));
        let zero = T::zero();
        (s0 >= zero && s1 >= zero && s2 >= zero) || (s0 <= zero && s1 <= zero && s2 <= zero)
    }
}

impl<T: Scalar, const N: usize> Index<usize> for Triangle<T, N> {
    type Output = Vector<T, N>;
    fn index(&self, i: usize) -> &Vector<T, N> {
        match i {
            0 => &self.v0,
            1 => &self.v1,
            2 => &self.v2,
            _ => panic!("triangle vertex index {i} out of range"),
        }
    }
}

impl<T: Scalar, const N: usize> IndexMut<usize> for Triangle<T, N> {
    fn index_mut(&mut self, i: usize) -> &mut Vector<T, N> {
        match i {
            0 => &mut self.v0,
            1 => &mut self.v1,
            2 => &mut self.v2,
            _ => panic!("triangle vertex index {i} out of range"),
        }
    }
}

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

use crate::{geometry::vector::Vector, numeric::scalar::Scalar};

/// Half-line `origin + t * direction` for `t >= 0`. `direction` is unit by
/// precondition.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray<T: Scalar, const N: usize> {
    pub origin: Vector<T, N>,
    pub direction: Vector<T, N>,
}

pub type Ray2<T> = Ray<T, 2>;
pub type Ray3<T> = Ray<T, 3>;
pub type Ray3d = Ray3<f64>;
pub type Ray3f = Ray3<f32>;

impl<T: Scalar, const N: usize> Ray<T, N> {
    pub fn new(origin: Vector<T, N>, direction: Vector<T, N>) -> Self {
        Self { origin, direction }
    }

    #[inline]
    pub fn point_at(&self, t: T) -> Vector<T, N> {
        self.origin + self.direction * t
    }

    /// Ray parameter of the closest point to `p`, clamped to the origin.
    pub fn project(&self, p: &Vector<T, N>) -> T {
        (*p - self.origin).dot(&self.direction).max(T::zero())
    }

    pub fn closest_point(&self, p: &Vector<T, N>) -> Vector<T, N> {
        self.point_at(self.project(p))
    }

    pub fn distance_squared(&self, p: &Vector<T, N>) -> T {
        self.closest_point(p).distance_squared(p)
    }
}

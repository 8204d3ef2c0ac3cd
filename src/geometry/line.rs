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

/// Infinite line `origin + t * direction`.
///
/// `direction` is expected to be unit length. Nothing checks this; every
/// distance routine silently assumes it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line<T: Scalar, const N: usize> {
    pub origin: Vector<T, N>,
    pub direction: Vector<T, N>,
}

pub type Line2<T> = Line<T, 2>;
pub type Line3<T> = Line<T, 3>;
pub type Line2d = Line2<f64>;
pub type Line3d = Line3<f64>;
pub type Line2f = Line2<f32>;
pub type Line3f = Line3<f32>;

impl<T: Scalar, const N: usize> Line<T, N> {
    pub fn new(origin: Vector<T, N>, direction: Vector<T, N>) -> Self {
        Self { origin, direction }
    }

    /// Line through `a` and `b`, directed from `a` towards `b`.
    pub fn from_points(a: &Vector<T, N>, b: &Vector<T, N>) -> Self {
        Self::new(*a, (*b - *a).normalized())
    }

    #[inline]
    pub fn point_at(&self, t: T) -> Vector<T, N> {
        self.origin + self.direction * t
    }

    /// Line parameter of the orthogonal projection of `p`.
    #[inline]
    pub fn project(&self, p: &Vector<T, N>) -> T {
        (*p - self.origin).dot(&self.direction)
    }

    pub fn closest_point(&self, p: &Vector<T, N>) -> Vector<T, N> {
        self.point_at(self.project(p))
    }

    pub fn distance_squared(&self, p: &Vector<T, N>) -> T {
        self.closest_point(p).distance_squared(p)
    }

    pub fn cast<U: Scalar>(&self) -> Line<U, N> {
        Line::new(self.origin.cast(), self.direction.cast())
    }
}

impl<T: Scalar> Line<T, 2> {
    /// `+1` left of the line, `-1` right, `0` within `tol` of it.
    pub fn which_side(&self, p: &Vector<T, 2>, tol: T) -> i32 {
        let side = self.direction.dot_perp(&(*p - self.origin));
        if side > tol {
            1
        } else if side < -tol {
            -1
        } else {
            0
        }
    }

    /// Intersection with `other`, or `None` when the lines are parallel
    /// within `zero_tolerance`.
    pub fn intersection_point(&self, other: &Self) -> Option<Vector<T, 2>> {
        let denom = self.direction.dot_perp(&other.direction);
        if denom.abs() < T::zero_tolerance() {
            return None;
        }
        let diff = other.origin - self.origin;
        let t = diff.dot_perp(&other.direction) / denom;
        Some(self.point_at(t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::vector::{Vector2d, Vector3d};

    #[test]
    fn projection_and_distance() {
        let l = Line3d::new(Vector3d::zero(), Vector3d::new(1.0, 0.0, 0.0));
        let p = Vector3d::new(2.0, 3.0, 4.0);
        assert_eq!(l.project(&p), 2.0);
        assert_eq!(l.distance_squared(&p), 25.0);
    }

    #[test]
    fn line2_sides_and_intersection() {
        let a = Line2d::new(Vector2d::zero(), Vector2d::new(1.0, 0.0));
        let b = Line2d::new(Vector2d::new(3.0, -1.0), Vector2d::new(0.0, 1.0));
        assert_eq!(a.which_side(&Vector2d::new(0.0, 1.0), 0.0), 1);
        assert_eq!(a.which_side(&Vector2d::new(5.0, -1.0), 0.0), -1);
        assert_eq!(a.intersection_point(&b), Some(Vector2d::new(3.0, 0.0)));
        assert!(a.intersection_point(&a).is_none());
    }
}

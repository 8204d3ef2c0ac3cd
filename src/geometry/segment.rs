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

/// Line segment in center-direction-extent form.
///
/// Endpoints are derived: `p0 = center - extent * direction`,
/// `p1 = center + extent * direction`. A zero extent is a valid segment and
/// behaves as a point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment<T: Scalar, const N: usize> {
    pub center: Vector<T, N>,
    pub direction: Vector<T, N>,
    pub extent: T,
}

pub type Segment2<T> = Segment<T, 2>;
pub type Segment3<T> = Segment<T, 3>;
pub type Segment2d = Segment2<f64>;
pub type Segment3d = Segment3<f64>;
pub type Segment2f = Segment2<f32>;
pub type Segment3f = Segment3<f32>;

impl<T: Scalar, const N: usize> Segment<T, N> {
    /// Segment from endpoint `p0` to endpoint `p1`.
    pub fn new(p0: &Vector<T, N>, p1: &Vector<T, N>) -> Self {
        let mut seg = Self {
            center: Vector::zero(),
            direction: Vector::zero(),
            extent: T::zero(),
        };
        seg.update_from_endpoints(p0, p1);
        seg
    }

    pub fn from_center(center: Vector<T, N>, direction: Vector<T, N>, extent: T) -> Self {
        Self {
            center,
            direction,
            extent,
        }
    }

    fn update_from_endpoints(&mut self, p0: &Vector<T, N>, p1: &Vector<T, N>) {
        self.center = (*p0 + *p1) * T::half();
        self.direction = *p1 - *p0;
        self.extent = T::half() * self.direction.normalize();
    }

    #[inline]
    pub fn p0(&self) -> Vector<T, N> {
        self.center - self.direction * self.extent
    }

    #[inline]
    pub fn p1(&self) -> Vector<T, N> {
        self.center + self.direction * self.extent
    }

    /// Move the first endpoint, keeping `p1` fixed.
    pub fn set_p0(&mut self, p0: Vector<T, N>) {
        let p1 = self.p1();
        self.update_from_endpoints(&p0, &p1);
    }

    /// Move the second endpoint, keeping `p0` fixed.
    pub fn set_p1(&mut self, p1: Vector<T, N>) {
        let p0 = self.p0();
        self.update_from_endpoints(&p0, &p1);
    }

    #[inline]
    pub fn length(&self) -> T {
        T::two() * self.extent
    }

    /// Endpoint `i` (0 or 1).
    pub fn endpoint(&self, i: usize) -> Vector<T, N> {
        if i == 0 { self.p0() } else { self.p1() }
    }

    /// Point at signed offset `t` from the center, `t` in `[-extent, extent]`.
    #[inline]
    pub fn point_at(&self, t: T) -> Vector<T, N> {
        self.center + self.direction * t
    }

    /// Point at unit parameter `t` in `[0, 1]` from `p0` to `p1`.
    pub fn point_between(&self, t: T) -> Vector<T, N> {
        self.center + self.direction * ((T::two() * t - T::one()) * self.extent)
    }

    /// Signed offset from the center of the closest point to `p`.
    pub fn project(&self, p: &Vector<T, N>) -> T {
        (*p - self.center)
            .dot(&self.direction)
            .clamp_to(-self.extent, self.extent)
    }

    pub fn nearest_point(&self, p: &Vector<T, N>) -> Vector<T, N> {
        self.point_at(self.project(p))
    }

    pub fn distance_squared(&self, p: &Vector<T, N>) -> T {
        self.nearest_point(p).distance_squared(p)
    }

    pub fn distance(&self, p: &Vector<T, N>) -> T {
        self.distance_squared(p).sqrt()
    }

    pub fn reversed(&self) -> Self {
        Self::from_center(self.center, -self.direction, self.extent)
    }

    pub fn cast<U: Scalar>(&self) -> Segment<U, N> {
        Segment::from_center(
            self.center.cast(),
            self.direction.cast(),
            U::from_f64(self.extent.as_f64()),
        )
    }
}

impl<T: Scalar> Segment<T, 2> {
    /// Side of `p` relative to the supporting line: `+1`, `-1` or `0`.
    pub fn which_side(&self, p: &Vector<T, 2>, tol: T) -> i32 {
        let side = self.direction.dot_perp(&(*p - self.center));
        if side > tol {
            1
        } else if side < -tol {
            -1
        } else {
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::vector::{Vector2d, Vector3d};

    #[test]
    fn endpoints_round_trip() {
        let s = Segment3d::new(&Vector3d::new(5.0, 0.0, -1.0), &Vector3d::new(5.0, 0.0, 1.0));
        assert_eq!(s.center, Vector3d::new(5.0, 0.0, 0.0));
        assert_eq!(s.direction, Vector3d::new(0.0, 0.0, 1.0));
        assert_eq!(s.extent, 1.0);
        assert_eq!(s.p0(), Vector3d::new(5.0, 0.0, -1.0));
        assert_eq!(s.p1(), Vector3d::new(5.0, 0.0, 1.0));
        assert_eq!(s.length(), 2.0);
    }

    #[test]
    fn set_endpoint_recomputes_frame() {
        let mut s = Segment2d::new(&Vector2d::new(0.0, 0.0), &Vector2d::new(2.0, 0.0));
        s.set_p1(Vector2d::new(0.0, 4.0));
        assert_eq!(s.center, Vector2d::new(0.0, 2.0));
        assert_eq!(s.direction, Vector2d::new(0.0, 1.0));
        assert_eq!(s.extent, 2.0);
    }

    #[test]
    fn degenerate_segment_is_a_point() {
        let p = Vector3d::new(1.0, 2.0, 3.0);
        let s = Segment3d::new(&p, &p);
        assert_eq!(s.extent, 0.0);
        assert_eq!(s.distance_squared(&Vector3d::new(1.0, 2.0, 5.0)), 4.0);
    }

    #[test]
    fn point_between_spans_endpoints() {
        let s = Segment2d::new(&Vector2d::new(-1.0, 0.0), &Vector2d::new(3.0, 0.0));
        assert_eq!(s.point_between(0.0), s.p0());
        assert_eq!(s.point_between(1.0), s.p1());
        assert_eq!(s.point_between(0.25), Vector2d::new(0.0, 0.0));
    }
}

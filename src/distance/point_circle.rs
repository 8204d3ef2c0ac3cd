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

use tracing::trace;

use crate::{
    distance::DistanceQuery,
    geometry::{
        circle::{Circle2, Circle3},
        vector::{Vector2, Vector3},
    },
    numeric::scalar::Scalar,
};

/// Closest point of a circle (the curve, not the disc) to a point in the
/// plane.
#[derive(Clone, Debug)]
pub struct DistPoint2Circle2<T: Scalar> {
    point: Vector2<T>,
    circle: Circle2<T>,
    distance_squared: Option<T>,

    pub circle_closest: Vector2<T>,
    /// Set when the point sits on the center; `circle_closest` is then the
    /// point at angle zero.
    pub all_circle_points_equidistant: bool,
}

impl<T: Scalar> DistPoint2Circle2<T> {
    pub fn new(point: Vector2<T>, circle: Circle2<T>) -> Self {
        Self {
            point,
            circle,
            distance_squared: None,
            circle_closest: Vector2::zero(),
            all_circle_points_equidistant: false,
        }
    }

    pub fn min_distance(point: Vector2<T>, circle: Circle2<T>) -> T {
        Self::new(point, circle).get()
    }

    pub fn point(&self) -> &Vector2<T> {
        &self.point
    }

    pub fn circle(&self) -> &Circle2<T> {
        &self.circle
    }

    pub fn set_point(&mut self, point: Vector2<T>) {
        self.point = point;
        self.invalidate();
    }

    pub fn set_circle(&mut self, circle: Circle2<T>) {
        self.circle = circle;
        self.invalidate();
    }
}

impl<T: Scalar> DistanceQuery<T> for DistPoint2Circle2<T> {
    fn evaluate(&mut self) -> T {
        let diff = self.point - self.circle.center;
        let length = diff.length();
        if length > T::epsilon() {
            self.circle_closest = self.circle.center + diff * (self.circle.radius / length);
            self.all_circle_points_equidistant = false;
        } else {
            trace!("point at circle center");
            self.circle_closest = self.circle.center + Vector2::unit(0) * self.circle.radius;
            self.all_circle_points_equidistant = true;
        }
        self.point.distance_squared(&self.circle_closest)
    }

    fn cached(&self) -> Option<T> {
        self.distance_squared
    }

    fn set_cached(&mut self, value: Option<T>) {
        self.distance_squared = value;
    }
}

/// Closest point of a circle in space to a point.
#[derive(Clone, Debug)]
pub struct DistPoint3Circle3<T: Scalar> {
    point: Vector3<T>,
    circle: Circle3<T>,
    distance_squared: Option<T>,

    pub circle_closest: Vector3<T>,
    /// Set when the point projects onto the center; `circle_closest` is then
    /// the point along `circle.plane_x()`.
    pub all_circle_points_equidistant: bool,
}

impl<T: Scalar> DistPoint3Circle3<T> {
    pub fn new(point: Vector3<T>, circle: Circle3<T>) -> Self {
        Self {
            point,
            circle,
            distance_squared: None,
            circle_closest: Vector3::zero(),
            all_circle_points_equidistant: false,
        }
    }

    pub fn min_distance(point: Vector3<T>, circle: Circle3<T>) -> T {
        Self::new(point, circle).get()
    }

    pub fn point(&self) -> &Vector3<T> {
        &self.point
    }

    pub fn circle(&self) -> &Circle3<T> {
        &self.circle
    }

    pub fn set_point(&mut self, point: Vector3<T>) {
        self.point = point;
        self.invalidate();
    }

    pub fn set_circle(&mut self, circle: Circle3<T>) {
        self.circle = circle;
        self.invalidate();
    }
}

impl<T: Scalar> DistanceQuery<T> for DistPoint3Circle3<T> {
    fn evaluate(&mut self) -> T {
        let circle = &self.circle;
        let diff = self.point - circle.center;
        let in_plane = diff - circle.normal * circle.normal.dot(&diff);
        let length = in_plane.length();

        let (closest, equidistant) = if length > T::epsilon() {
            (circle.center + in_plane * (circle.radius / length), false)
        } else {
            trace!("point projects onto circle center");
            (circle.center + circle.plane_x() * circle.radius, true)
        };

        self.circle_closest = closest;
        self.all_circle_points_equidistant = equidistant;
        self.point.distance_squared(&closest)
    }

    fn cached(&self) -> Option<T> {
        self.distance_squared
    }

    fn set_cached(&mut self, value: Option<T>) {
        self.distance_squared = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{
        circle::{Circle2d, Circle3d},
        vector::{Vector2d, Vector3d},
    };

    #[test]
    fn point_outside_circle2() {
        let c = Circle2d::new(Vector2d::zero(), 2.0);
        let mut q = DistPoint2Circle2::new(Vector2d::new(0.0, 5.0), c);
        assert_eq!(q.get(), 3.0);
        assert_eq!(q.circle_closest, Vector2d::new(0.0, 2.0));
        assert!(!q.all_circle_points_equidistant);
    }

    #[test]
    fn point_above_circle3() {
        let c = Circle3d::new(Vector3d::zero(), Vector3d::unit(2), 3.0);
        let mut q = DistPoint3Circle3::new(Vector3d::new(6.0, 0.0, 4.0), c);
        assert_eq!(q.get(), 5.0);
        assert_eq!(q.circle_closest, Vector3d::new(3.0, 0.0, 0.0));
    }
}

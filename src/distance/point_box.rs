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

use crate::{
    distance::DistanceQuery,
    geometry::{aabb::AxisAlignedBox, oriented_box::OrientedBox, vector::Vector},
    numeric::scalar::Scalar,
};

/// Closest point of an oriented box (solid) to a point.
#[derive(Clone, Debug)]
pub struct DistPointBox<T: Scalar, const N: usize> {
    point: Vector<T, N>,
    oriented_box: OrientedBox<T, N>,
    distance_squared: Option<T>,

    pub box_closest: Vector<T, N>,
}

pub type DistPoint2Box2<T> = DistPointBox<T, 2>;
pub type DistPoint3Box3<T> = DistPointBox<T, 3>;

impl<T: Scalar, const N: usize> DistPointBox<T, N> {
    pub fn new(point: Vector<T, N>, oriented_box: OrientedBox<T, N>) -> Self {
        Self {
            point,
            oriented_box,
            distance_squared: None,
            box_closest: Vector::zero(),
        }
    }

    pub fn min_distance(point: Vector<T, N>, oriented_box: OrientedBox<T, N>) -> T {
        Self::new(point, oriented_box).get()
    }

    pub fn point(&self) -> &Vector<T, N> {
        &self.point
    }

    pub fn oriented_box(&self) -> &OrientedBox<T, N> {
        &self.oriented_box
    }

    pub fn set_point(&mut self, point: Vector<T, N>) {
        self.point = point;
        self.invalidate();
    }

    pub fn set_box(&mut self, oriented_box: OrientedBox<T, N>) {
        self.oriented_box = oriented_box;
        self.invalidate();
    }
}

impl<T: Scalar, const N: usize> DistanceQuery<T> for DistPointBox<T, N> {
    fn evaluate(&mut self) -> T {
        let b = &self.oriented_box;
        let diff = self.point - b.center;

        let mut sqr_dist = T::zero();
        let mut closest = b.center;
        for i in 0..N {
            let mut coord = diff.dot(&b.axes[i]);
            let extent = b.extent[i];
            if coord < -extent {
                let delta = coord + extent;
                sqr_dist += delta * delta;
                coord = -extent;
            } else if coord > extent {
                let delta = coord - extent;
                sqr_dist += delta * delta;
                coord = extent;
            }
            closest += b.axes[i] * coord;
        }

        self.box_closest = closest;
        sqr_dist
    }

    fn cached(&self) -> Option<T> {
        self.distance_squared
    }

    fn set_cached(&mut self, value: Option<T>) {
        self.distance_squared = value;
    }
}

/// Closest point of an axis-aligned box (solid) to a point.
#[derive(Clone, Debug)]
pub struct DistPointAabb<T: Scalar, const N: usize> {
    point: Vector<T, N>,
    aabb: AxisAlignedBox<T, N>,
    distance_squared: Option<T>,

    pub box_closest: Vector<T, N>,
}

impl<T: Scalar, const N: usize> DistPointAabb<T, N> {
    pub fn new(point: Vector<T, N>, aabb: AxisAlignedBox<T, N>) -> Self {
        Self {
            point,
            aabb,
            distance_squared: None,
            box_closest: Vector::zero(),
        }
    }

    pub fn min_distance(point: Vector<T, N>, aabb: AxisAlignedBox<T, N>) -> T {
        Self::new(point, aabb).get()
    }

    pub fn point(&self) -> &Vector<T, N> {
        &self.point
    }

    pub fn aabb(&self) -> &AxisAlignedBox<T, N> {
        &self.aabb
    }

    pub fn set_point(&mut self, point: Vector<T, N>) {
        self.point = point;
        self.invalidate();
    }

    pub fn set_aabb(&mut self, aabb: AxisAlignedBox<T, N>) {
        self.aabb = aabb;
        self.invalidate();
    }
}

impl<T: Scalar, const N: usize> DistanceQuery<T> for DistPointAabb<T, N> {
    fn evaluate(&mut self) -> T {
        self.box_closest = self.aabb.nearest_point(&self.point);
        self.aabb.distance_squared(&self.point)
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
        aabb::AxisAlignedBox3d,
        oriented_box::{Box2d, Box3d},
        vector::{Vector2d, Vector3d},
    };

    #[test]
    fn rotated_box_corner() {
        let s = std::f64::consts::FRAC_1_SQRT_2;
        let b = Box2d::new(
            Vector2d::zero(),
            [Vector2d::new(s, s), Vector2d::new(-s, s)],
            Vector2d::new(1.0, 1.0),
        );
        let mut q = DistPoint2Box2::new(Vector2d::new(0.0, 3.0), b);
        let corner = Vector2d::new(0.0, 2.0 * s);
        assert!((q.get() - (3.0 - 2.0 * s)).abs() < 1e-12);
        assert!(q.box_closest.epsilon_equal(&corner, 1e-12));
    }

    #[test]
    fn aabb_and_box_agree() {
        let aabb =
            AxisAlignedBox3d::from_points(&Vector3d::new(-1.0, -2.0, 0.0), &Vector3d::new(1.0, 2.0, 3.0));
        let b = Box3d::from_aabb(&aabb);
        for p in [
            Vector3d::new(5.0, 0.0, 1.0),
            Vector3d::new(-3.0, 4.0, -2.0),
            Vector3d::new(0.5, 0.5, 0.5),
        ] {
            let mut q0 = DistPointAabb::new(p, aabb);
            let mut q1 = DistPoint3Box3::new(p, b);
            assert!((q0.get_squared() - q1.get_squared()).abs() < 1e-12);
            assert!(q0.box_closest.epsilon_equal(&q1.box_closest, 1e-12));
        }
    }
}

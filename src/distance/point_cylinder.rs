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
    geometry::{cylinder::Cylinder3, vector::Vector3},
    numeric::scalar::Scalar,
};

/// Signed distance from a point to a solid cylinder.
///
/// `signed_distance` is negative inside the solid. The squared distance is
/// the square of its magnitude, so it measures the distance to the surface
/// from either side. `solid_distance` treats the interior as distance zero.
#[derive(Clone, Debug)]
pub struct DistPoint3Cylinder3<T: Scalar> {
    point: Vector3<T>,
    cylinder: Cylinder3<T>,
    distance_squared: Option<T>,

    pub cylinder_closest: Vector3<T>,
    pub signed_distance: T,
}

impl<T: Scalar> DistPoint3Cylinder3<T> {
    pub fn new(point: Vector3<T>, cylinder: Cylinder3<T>) -> Self {
        Self {
            point,
            cylinder,
            distance_squared: None,
            cylinder_closest: Vector3::zero(),
            signed_distance: T::zero(),
        }
    }

    pub fn min_distance(point: Vector3<T>, cylinder: Cylinder3<T>) -> T {
        Self::new(point, cylinder).get()
    }

    pub fn point(&self) -> &Vector3<T> {
        &self.point
    }

    pub fn cylinder(&self) -> &Cylinder3<T> {
        &self.cylinder
    }

    pub fn set_point(&mut self, point: Vector3<T>) {
        self.point = point;
        self.invalidate();
    }

    pub fn set_cylinder(&mut self, cylinder: Cylinder3<T>) {
        self.cylinder = cylinder;
        self.invalidate();
    }

    /// Valid once the query has been evaluated.
    pub fn is_inside(&self) -> bool {
        self.signed_distance < T::zero()
    }

    /// Distance to the solid: zero inside, surface distance outside.
    pub fn solid_distance(&mut self) -> T {
        let d = self.get();
        if self.is_inside() { T::zero() } else { d }
    }

    /// Local frame `(u, v, n)` with `n` along the axis.
    fn local_frame(&self) -> (Vector3<T>, Vector3<T>, Vector3<T>) {
        let n = self.cylinder.axis.direction;
        let (u, v) = Vector3::generate_complement_basis(&n);
        (u, v, n)
    }

    fn to_world(&self, local: &Vector3<T>) -> Vector3<T> {
        let (u, v, n) = self.local_frame();
        self.cylinder.axis.origin + u * local[0] + v * local[1] + n * local[2]
    }

    fn to_local(&self) -> Vector3<T> {
        let (u, v, n) = self.local_frame();
        let delta = self.point - self.cylinder.axis.origin;
        Vector3::new(u.dot(&delta), v.dot(&delta), n.dot(&delta))
    }

    /// Lateral surface only; the caps are at infinity.
    fn get_squared_infinite(&mut self) -> T {
        let radius = self.cylinder.radius;
        let p = self.to_local();
        let distance = (p[0] * p[0] + p[1] * p[1]).sqrt();
        let local = wall_point(&p, radius, distance);

        self.cylinder_closest = self.to_world(&local);
        self.signed_distance = distance - radius;
        self.signed_distance * self.signed_distance
    }

    fn get_squared_finite(&mut self) -> T {
        let radius = self.cylinder.radius;
        let half_height = T::half() * self.cylinder.height;
        let p = self.to_local();
        let sqr_radial = p[0] * p[0] + p[1] * p[1];

        let (local, signed) = if sqr_radial >= radius * radius {
            // Outside the infinite cylinder, or on its wall.
            let radial = sqr_radial.sqrt();
            let wall = wall_point(&p, radius, radial);
            let (x, y) = (wall[0], wall[1]);
            if p[2] >= half_height {
                let c = Vector3::new(x, y, half_height);
                (c, c.distance(&p))
            } else if p[2] <= -half_height {
                let c = Vector3::new(x, y, -half_height);
                (c, c.distance(&p))
            } else {
                (Vector3::new(x, y, p[2]), radial - radius)
            }
        } else if p[2] >= half_height {
            // Above the top cap.
            (Vector3::new(p[0], p[1], half_height), p[2] - half_height)
        } else if p[2] <= -half_height {
            (Vector3::new(p[0], p[1], -half_height), -half_height - p[2])
        } else {
            // Inside the solid: nearest of the wall and the two caps.
            let radial = sqr_radial.sqrt();
            let to_wall = radius - radial;
            let to_top = half_height - p[2];
            let to_bottom = p[2] + half_height;
            if to_wall <= to_top && to_wall <= to_bottom {
                (wall_point(&p, radius, radial), -to_wall)
            } else if to_top <= to_bottom {
                (Vector3::new(p[0], p[1], half_height), -to_top)
            } else {
                (Vector3::new(p[0], p[1], -half_height), -to_bottom)
            }
        };

        self.cylinder_closest = self.to_world(&local);
        self.signed_distance = signed;
        signed * signed
    }
}

/// Radial projection of local point `p` onto the wall, keeping its height.
/// Points on the axis project along the local x axis.
fn wall_point<T: Scalar>(p: &Vector3<T>, radius: T, radial: T) -> Vector3<T> {
    if radial > T::epsilon() {
        let scale = radius / radial;
        Vector3::new(p[0] * scale, p[1] * scale, p[2])
    } else {
        Vector3::new(radius, T::zero(), p[2])
    }
}

impl<T: Scalar> DistanceQuery<T> for DistPoint3Cylinder3<T> {
    fn evaluate(&mut self) -> T {
        if self.cylinder.is_infinite() {
            self.get_squared_infinite()
        } else {
            self.get_squared_finite()
        }
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
    use crate::geometry::{cylinder::Cylinder3d, line::Line3d, vector::Vector3d};

    fn z_cylinder(radius: f64, height: f64) -> Cylinder3d {
        Cylinder3d::new(Line3d::new(Vector3d::zero(), Vector3d::unit(2)), radius, height)
    }

    #[test]
    fn outside_beside_wall() {
        let mut q = DistPoint3Cylinder3::new(Vector3d::new(3.0, 0.0, 0.5), z_cylinder(1.0, 4.0));
        assert!((q.get() - 2.0).abs() < 1e-12);
        assert!((q.signed_distance - 2.0).abs() < 1e-12);
        assert!(!q.is_inside());
        assert!(q.cylinder_closest.epsilon_equal(&Vector3d::new(1.0, 0.0, 0.5), 1e-12));
    }

    #[test]
    fn inside_near_top_cap() {
        let mut q = DistPoint3Cylinder3::new(Vector3d::new(0.2, 0.0, 1.5), z_cylinder(1.0, 4.0));
        assert!((q.get() - 0.5).abs() < 1e-12);
        assert!((q.signed_distance + 0.5).abs() < 1e-12);
        assert!(q.is_inside());
        assert_eq!(q.solid_distance(), 0.0);
    }

    #[test]
    fn beyond_rim_edge() {
        let mut q = DistPoint3Cylinder3::new(Vector3d::new(4.0, 0.0, 6.0), z_cylinder(1.0, 4.0));
        assert!((q.get() - 5.0).abs() < 1e-12);
        assert!(q.cylinder_closest.epsilon_equal(&Vector3d::new(1.0, 0.0, 2.0), 1e-12));
    }

    #[test]
    fn point_on_axis_picks_a_wall_point() {
        let mut q = DistPoint3Cylinder3::new(Vector3d::zero(), z_cylinder(1.0, 4.0));
        assert_eq!(q.get(), 1.0);
        assert_eq!(q.signed_distance, -1.0);
        assert!(q.cylinder_closest.is_finite());
        assert!((q.cylinder_closest.length() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn infinite_cylinder_ignores_caps() {
        let axis = Line3d::new(Vector3d::zero(), Vector3d::unit(2));
        let mut q = DistPoint3Cylinder3::new(Vector3d::new(0.0, 0.5, 1e6), Cylinder3d::infinite(axis, 2.0));
        assert!((q.get() - 1.5).abs() < 1e-9);
        assert!(q.is_inside());
    }
}

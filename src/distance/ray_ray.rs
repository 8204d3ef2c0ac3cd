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
    geometry::{ray::Ray3, vector::Vector3},
    numeric::scalar::Scalar,
};

/// Which quadrant of `(s0, s1)` the unconstrained minimum fell into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum RayRayRegion {
    /// Region 0: both parameters non-negative.
    #[default]
    Interior,
    /// Region 1: `s0 < 0`, `s1 >= 0`; ray0 clamped to its origin.
    Ray0Origin,
    /// Region 2: both negative; one origin or the other is closest.
    BothOrigins,
    /// Region 3: `s0 >= 0`, `s1 < 0`; ray1 clamped to its origin.
    Ray1Origin,
    Parallel,
}

impl RayRayRegion {
    pub fn number(self) -> Option<u8> {
        match self {
            Self::Interior => Some(0),
            Self::Ray0Origin => Some(1),
            Self::BothOrigins => Some(2),
            Self::Ray1Origin => Some(3),
            Self::Parallel => None,
        }
    }
}

#[derive(Clone, Debug)]
pub struct DistRay3Ray3<T: Scalar> {
    ray0: Ray3<T>,
    ray1: Ray3<T>,
    distance_squared: Option<T>,

    pub ray0_closest: Vector3<T>,
    pub ray1_closest: Vector3<T>,
    pub ray0_parameter: T,
    pub ray1_parameter: T,
    pub region: RayRayRegion,
}

impl<T: Scalar> DistRay3Ray3<T> {
    pub fn new(ray0: Ray3<T>, ray1: Ray3<T>) -> Self {
        Self {
            ray0,
            ray1,
            distance_squared: None,
            ray0_closest: Vector3::zero(),
            ray1_closest: Vector3::zero(),
            ray0_parameter: T::zero(),
            ray1_parameter: T::zero(),
            region: RayRayRegion::Interior,
        }
    }

    pub fn min_distance(ray0: Ray3<T>, ray1: Ray3<T>) -> T {
        Self::new(ray0, ray1).get()
    }

    pub fn ray0(&self) -> &Ray3<T> {
        &self.ray0
    }

    pub fn ray1(&self) -> &Ray3<T> {
        &self.ray1
    }

    pub fn set_ray0(&mut self, ray: Ray3<T>) {
        self.ray0 = ray;
        self.invalidate();
    }

    pub fn set_ray1(&mut self, ray: Ray3<T>) {
        self.ray1 = ray;
        self.invalidate();
    }
}

impl<T: Scalar> DistanceQuery<T> for DistRay3Ray3<T> {
    fn evaluate(&mut self) -> T {
        let two = T::two();
        let zero = T::zero();

        let diff = self.ray0.origin - self.ray1.origin;
        let a01 = -self.ray0.direction.dot(&self.ray1.direction);
        let b0 = diff.dot(&self.ray0.direction);
        let b1 = -diff.dot(&self.ray1.direction);
        let c = diff.length_squared();
        let det = (T::one() - a01 * a01).abs();

        // ray1 origin against ray0.
        let project_on_ray0 = || {
            if b0 >= zero {
                (zero, zero, c)
            } else {
                (-b0, zero, b0 * -b0 + c)
            }
        };
        // ray0 origin against ray1.
        let project_on_ray1 = || {
            if b1 >= zero {
                (zero, zero, c)
            } else {
                (zero, -b1, b1 * -b1 + c)
            }
        };

        let (s0, s1, sqr_dist, region) = if det >= T::zero_tolerance() {
            let s0 = a01 * b1 - b0;
            let s1 = a01 * b0 - b1;

            if s0 >= zero {
                if s1 >= zero {
                    let inv_det = T::one() / det;
                    let (s0, s1) = (s0 * inv_det, s1 * inv_det);
                    let sqr = s0 * (s0 + a01 * s1 + two * b0)
                        + s1 * (a01 * s0 + s1 + two * b1)
                        + c;
                    (s0, s1, sqr, RayRayRegion::Interior)
                } else {
                    let (s0, s1, sqr) = project_on_ray0();
                    (s0, s1, sqr, RayRayRegion::Ray1Origin)
                }
            } else if s1 >= zero {
                let (s0, s1, sqr) = project_on_ray1();
                (s0, s1, sqr, RayRayRegion::Ray0Origin)
            } else {
                let (s0, s1, sqr) = if b0 < zero {
                    project_on_ray0()
                } else {
                    project_on_ray1()
                };
                (s0, s1, sqr, RayRayRegion::BothOrigins)
            }
        } else {
            trace!(a01 = a01.as_f64(), "parallel rays");
            let (s0, s1, sqr) = if a01 > zero {
                // Opposite directions.
                project_on_ray0()
            } else if b0 >= zero {
                // Same direction, ray0 starts ahead.
                (zero, -b1, b1 * -b1 + c)
            } else {
                (-b0, zero, b0 * -b0 + c)
            };
            (s0, s1, sqr, RayRayRegion::Parallel)
        };

        self.ray0_closest = self.ray0.point_at(s0);
        self.ray1_closest = self.ray1.point_at(s1);
        self.ray0_parameter = s0;
        self.ray1_parameter = s1;
        self.region = region;
        sqr_dist
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
    use crate::geometry::{ray::Ray3d, vector::Vector3d};

    #[test]
    fn crossing_rays() {
        let r0 = Ray3d::new(Vector3d::new(-1.0, 0.0, 0.0), Vector3d::unit(0));
        let r1 = Ray3d::new(Vector3d::new(0.0, -2.0, 1.0), Vector3d::unit(1));
        let mut q = DistRay3Ray3::new(r0, r1);
        assert_eq!(q.get(), 1.0);
        assert_eq!(q.region, RayRayRegion::Interior);
        assert_eq!((q.ray0_parameter, q.ray1_parameter), (1.0, 2.0));
    }

    #[test]
    fn diverging_rays_meet_at_origins() {
        let r0 = Ray3d::new(Vector3d::new(1.0, 0.0, 0.0), Vector3d::unit(0));
        let r1 = Ray3d::new(Vector3d::new(0.0, 1.0, 0.0), Vector3d::unit(1));
        let mut q = DistRay3Ray3::new(r0, r1);
        assert_eq!(q.get_squared(), 2.0);
        assert_eq!(q.region, RayRayRegion::BothOrigins);
        assert_eq!(q.ray0_closest, r0.origin);
        assert_eq!(q.ray1_closest, r1.origin);
    }

    #[test]
    fn opposite_parallel_rays() {
        let r0 = Ray3d::new(Vector3d::zero(), Vector3d::unit(0));
        let r1 = Ray3d::new(Vector3d::new(5.0, 1.0, 0.0), -Vector3d::unit(0));
        let mut q = DistRay3Ray3::new(r0, r1);
        assert_eq!(q.get(), 1.0);
        assert_eq!(q.region, RayRayRegion::Parallel);
        assert_eq!(q.ray0_parameter, 5.0);
    }
}

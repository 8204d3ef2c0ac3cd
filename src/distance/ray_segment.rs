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
    geometry::{ray::Ray3, segment::Segment3, vector::Vector3},
    numeric::scalar::Scalar,
};

/// Which constraint set the ray-segment minimum landed on.
///
/// `s0` is the ray parameter (`>= 0`), `s1` the segment offset in
/// `[-e, e]`. Numbers follow the classic region layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum RaySegmentRegion {
    /// Region 0: both parameters unconstrained.
    #[default]
    Interior,
    /// Region 1: `s1 = +e`, `s0` free or clamped to the ray origin.
    SegmentMaxEnd,
    /// Region 2: critical point behind the ray origin and past `+e`.
    RayOriginNearMaxEnd,
    /// Region 3: `s0 = 0`, `s1` projected onto the segment.
    RayOrigin,
    /// Region 4: critical point behind the ray origin and before `-e`.
    RayOriginNearMinEnd,
    /// Region 5: `s1 = -e`, `s0` free or clamped to the ray origin.
    SegmentMinEnd,
    /// Ray and segment directions parallel.
    Parallel,
}

impl RaySegmentRegion {
    /// Classic region number; `None` for the parallel case.
    pub fn number(self) -> Option<u8> {
        match self {
            Self::Interior => Some(0),
            Self::SegmentMaxEnd => Some(1),
            Self::RayOriginNearMaxEnd => Some(2),
            Self::RayOrigin => Some(3),
            Self::RayOriginNearMinEnd => Some(4),
            Self::SegmentMinEnd => Some(5),
            Self::Parallel => None,
        }
    }
}

/// Closest points between a ray and a segment.
#[derive(Clone, Debug)]
pub struct DistRay3Segment3<T: Scalar> {
    ray: Ray3<T>,
    segment: Segment3<T>,
    distance_squared: Option<T>,

    pub ray_closest: Vector3<T>,
    pub segment_closest: Vector3<T>,
    pub ray_parameter: T,
    pub segment_parameter: T,
    pub region: RaySegmentRegion,
}

impl<T: Scalar> DistRay3Segment3<T> {
    pub fn new(ray: Ray3<T>, segment: Segment3<T>) -> Self {
        Self {
            ray,
            segment,
            distance_squared: None,
            ray_closest: Vector3::zero(),
            segment_closest: Vector3::zero(),
            ray_parameter: T::zero(),
            segment_parameter: T::zero(),
            region: RaySegmentRegion::Interior,
        }
    }

    pub fn min_distance(ray: Ray3<T>, segment: Segment3<T>) -> T {
        Self::new(ray, segment).get()
    }

    pub fn ray(&self) -> &Ray3<T> {
        &self.ray
    }

    pub fn segment(&self) -> &Segment3<T> {
        &self.segment
    }

    pub fn set_ray(&mut self, ray: Ray3<T>) {
        self.ray = ray;
        self.invalidate();
    }

    pub fn set_segment(&mut self, segment: Segment3<T>) {
        self.segment = segment;
        self.invalidate();
    }
}

impl<T: Scalar> DistanceQuery<T> for DistRay3Segment3<T> {
    fn evaluate(&mut self) -> T {
        let two = T::two();
        let zero = T::zero();
        let ext = self.segment.extent;

        let diff = self.ray.origin - self.segment.center;
        let a01 = -self.ray.direction.dot(&self.segment.direction);
        let b0 = diff.dot(&self.ray.direction);
        let b1 = -diff.dot(&self.segment.direction);
        let c = diff.length_squared();
        let det = (T::one() - a01 * a01).abs();

        // Ray origin fixed, segment parameter projected and clamped.
        let origin_to_segment = || {
            let s1 = (-b1).clamp_to(-ext, ext);
            (zero, s1, s1 * (s1 + two * b1) + c)
        };
        // Segment end fixed at `s1`, ray parameter free but non-negative.
        let segment_end = |s1: T| {
            let s0 = -(a01 * s1 + b0);
            if s0 > zero {
                (s0, s1, -s0 * s0 + s1 * (s1 + two * b1) + c)
            } else {
                (zero, s1, s1 * (s1 + two * b1) + c)
            }
        };

        let (s0, s1, sqr_dist, region) = if det >= T::zero_tolerance() {
            let s0 = a01 * b1 - b0;
            let s1 = a01 * b0 - b1;
            let ext_det = ext * det;

            if s0 >= zero {
                if s1 >= -ext_det {
                    if s1 <= ext_det {
                        let inv_det = T::one() / det;
                        let (s0, s1) = (s0 * inv_det, s1 * inv_det);
                        let sqr = s0 * (s0 + a01 * s1 + two * b0)
                            + s1 * (a01 * s0 + s1 + two * b1)
                            + c;
                        (s0, s1, sqr, RaySegmentRegion::Interior)
                    } else {
                        let (s0, s1, sqr) = segment_end(ext);
                        (s0, s1, sqr, RaySegmentRegion::SegmentMaxEnd)
                    }
                } else {
                    let (s0, s1, sqr) = segment_end(-ext);
                    (s0, s1, sqr, RaySegmentRegion::SegmentMinEnd)
                }
            } else if s1 <= -ext_det {
                let s0 = -(-a01 * ext + b0);
                let (s0, s1, sqr) = if s0 > zero {
                    let s1 = -ext;
                    (s0, s1, -s0 * s0 + s1 * (s1 + two * b1) + c)
                } else {
                    origin_to_segment()
                };
                (s0, s1, sqr, RaySegmentRegion::RayOriginNearMinEnd)
            } else if s1 <= ext_det {
                let (s0, s1, sqr) = origin_to_segment();
                (s0, s1, sqr, RaySegmentRegion::RayOrigin)
            } else {
                let s0 = -(a01 * ext + b0);
                let (s0, s1, sqr) = if s0 > zero {
                    let s1 = ext;
                    (s0, s1, -s0 * s0 + s1 * (s1 + two * b1) + c)
                } else {
                    origin_to_segment()
                };
                (s0, s1, sqr, RaySegmentRegion::RayOriginNearMaxEnd)
            }
        } else {
            trace!(a01 = a01.as_f64(), "ray parallel to segment");
            // Opposite directions favour the -e end, same directions +e.
            let s1 = if a01 > zero { -ext } else { ext };
            let (s0, s1, sqr) = segment_end(s1);
            (s0, s1, sqr, RaySegmentRegion::Parallel)
        };

        self.ray_closest = self.ray.point_at(s0);
        self.segment_closest = self.segment.point_at(s1);
        self.ray_parameter = s0;
        self.segment_parameter = s1;
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

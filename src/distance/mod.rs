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

//! Closest-point and minimum-distance queries between pairs of primitives.
//!
//! Every query owns copies of its two shapes, evaluates lazily and memoizes
//! the squared distance until one of the shapes is replaced through a
//! setter. Output fields are valid after `get_squared`, `get` or `compute`.

pub mod line_line;
pub mod line_segment;
pub mod line_triangle;
pub mod point_box;
pub mod point_circle;
pub mod point_cylinder;
pub mod point_triangle;
pub mod ray_ray;
pub mod ray_segment;
pub mod segment_segment;
pub mod segment_triangle;
pub mod triangle_triangle;

use crate::numeric::scalar::Scalar;

pub use line_line::{DistLine2Line2, DistLine3Line3, DistLineLine};
pub use line_segment::{DistLine2Segment2, DistLine3Segment3, DistLineSegment};
pub use line_triangle::DistLine3Triangle3;
pub use point_box::{DistPoint2Box2, DistPoint3Box3, DistPointAabb, DistPointBox};
pub use point_circle::{DistPoint2Circle2, DistPoint3Circle3};
pub use point_cylinder::DistPoint3Cylinder3;
pub use point_triangle::{DistPoint2Triangle2, DistPoint3Triangle3, DistPointTriangle, PointTriangleRegion};
pub use ray_ray::{DistRay3Ray3, RayRayRegion};
pub use ray_segment::{DistRay3Segment3, RaySegmentRegion};
pub use segment_segment::{
    DistSegment2Segment2, DistSegment3Segment3, DistSegmentSegment, SegmentSegmentRegion,
};
pub use segment_triangle::DistSegment3Triangle3;
pub use triangle_triangle::DistTriangle3Triangle3;

/// Memoized minimum-distance query.
///
/// Implementors provide the algorithm (`evaluate`) and the cache slot; the
/// provided methods handle memoization and round-off clamping.
pub trait DistanceQuery<T: Scalar> {
    /// Runs the closest-point algorithm, fills the output fields and returns
    /// the raw squared distance. Normally reached through `get_squared`.
    fn evaluate(&mut self) -> T;

    fn cached(&self) -> Option<T>;

    fn set_cached(&mut self, value: Option<T>);

    /// Squared distance, computed on first use and cached afterwards.
    /// Negative round-off is clamped to zero; NaN is passed through.
    fn get_squared(&mut self) -> T {
        if let Some(d) = self.cached() {
            return d;
        }
        let d = clamp_round_off(self.evaluate());
        self.set_cached(Some(d));
        d
    }

    fn get(&mut self) -> T {
        self.get_squared().sqrt()
    }

    /// Forces evaluation and returns the query for chained reads.
    fn compute(&mut self) -> &mut Self
    where
        Self: Sized,
    {
        self.get_squared();
        self
    }

    fn is_computed(&self) -> bool {
        self.cached().is_some()
    }

    fn invalidate(&mut self) {
        self.set_cached(None);
    }
}

#[inline]
pub(crate) fn clamp_round_off<T: Scalar>(sqr: T) -> T {
    if sqr < T::zero() { T::zero() } else { sqr }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Counting {
        evaluations: usize,
        value: f64,
        cache: Option<f64>,
    }

    impl DistanceQuery<f64> for Counting {
        fn evaluate(&mut self) -> f64 {
            self.evaluations += 1;
            self.value
        }

        fn cached(&self) -> Option<f64> {
            self.cache
        }

        fn set_cached(&mut self, value: Option<f64>) {
            self.cache = value;
        }
    }

    #[test]
    fn memoizes_until_invalidated() {
        let mut q = Counting {
            evaluations: 0,
            value: 4.0,
            cache: None,
        };
        assert!(!q.is_computed());
        assert_eq!(q.get_squared(), 4.0);
        assert_eq!(q.get(), 2.0);
        assert_eq!(q.evaluations, 1);

        q.value = 9.0;
        assert_eq!(q.get_squared(), 4.0);
        q.invalidate();
        assert_eq!(q.compute().get(), 3.0);
        assert_eq!(q.evaluations, 2);
    }

    #[test]
    fn negative_round_off_is_clamped() {
        let mut q = Counting {
            evaluations: 0,
            value: -1e-18,
            cache: None,
        };
        assert_eq!(q.get_squared(), 0.0);
        assert!(clamp_round_off(f64::NAN).is_nan());
    }
}

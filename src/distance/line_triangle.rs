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
    distance::{DistanceQuery, line_segment::DistLine3Segment3},
    geometry::{line::Line3, segment::Segment3, triangle::Triangle3, vector::Vector3},
    numeric::scalar::Scalar,
};

/// Closest points between an infinite line and a triangle.
#[derive(Clone, Debug)]
pub struct DistLine3Triangle3<T: Scalar> {
    line: Line3<T>,
    triangle: Triangle3<T>,
    distance_squared: Option<T>,

    pub line_closest: Vector3<T>,
    pub triangle_closest: Vector3<T>,
    pub line_parameter: T,
    pub triangle_bary_coords: Vector3<T>,
}

impl<T: Scalar> DistLine3Triangle3<T> {
    pub fn new(line: Line3<T>, triangle: Triangle3<T>) -> Self {
        Self {
            line,
            triangle,
            distance_squared: None,
            line_closest: Vector3::zero(),
            triangle_closest: Vector3::zero(),
            line_parameter: T::zero(),
            triangle_bary_coords: Vector3::zero(),
        }
    }

    pub fn min_distance(line: Line3<T>, triangle: Triangle3<T>) -> T {
        Self::new(line, triangle).get()
    }

    pub fn line(&self) -> &Line3<T> {
        &self.line
    }

    pub fn triangle(&self) -> &Triangle3<T> {
        &self.triangle
    }

    pub fn set_line(&mut self, line: Line3<T>) {
        self.line = line;
        self.invalidate();
    }

    pub fn set_triangle(&mut self, triangle: Triangle3<T>) {
        self.triangle = triangle;
        self.invalidate();
    }

    /// Solve for the line/plane crossing in barycentrics. Returns the
    /// barycentric weights and line parameter when the crossing lies inside
    /// the triangle.
    fn pierce(&self) -> Option<(Vector3<T>, T)> {
        let tri = &self.triangle;
        let dir = self.line.direction;
        let edge0 = tri.v1 - tri.v0;
        let edge1 = tri.v2 - tri.v0;
        let normal = edge0.unit_cross(&edge1);
        if normal.dot(&dir).abs() <= T::zero_tolerance() {
            return None;
        }

        let diff = self.line.origin - tri.v0;
        let (u, v) = Vector3::generate_complement_basis(&dir);
        let ud_e0 = u.dot(&edge0);
        let ud_e1 = u.dot(&edge1);
        let ud_diff = u.dot(&diff);
        let vd_e0 = v.dot(&edge0);
        let vd_e1 = v.dot(&edge1);
        let vd_diff = v.dot(&diff);
        let inv_det = T::one() / (ud_e0 * vd_e1 - ud_e1 * vd_e0);

        let b1 = (vd_e1 * ud_diff - ud_e1 * vd_diff) * inv_det;
        let b2 = (ud_e0 * vd_diff - vd_e0 * ud_diff) * inv_det;
        let b0 = T::one() - b1 - b2;
        if b0 < T::zero() || b1 < T::zero() || b2 < T::zero() {
            return None;
        }

        let line_parameter = b1 * dir.dot(&edge0) + b2 * dir.dot(&edge1) - dir.dot(&diff);
        Some((Vector3::new(b0, b1, b2), line_parameter))
    }
}

impl<T: Scalar> DistanceQuery<T> for DistLine3Triangle3<T> {
    fn evaluate(&mut self) -> T {
        if let Some((bary, line_parameter)) = self.pierce() {
            let tri = &self.triangle;
            self.triangle_closest =
                tri.v0 + (tri.v1 - tri.v0) * bary[1] + (tri.v2 - tri.v0) * bary[2];
            self.triangle_bary_coords = bary;
            self.line_parameter = line_parameter;
            self.line_closest = self.line.point_at(line_parameter);
            return T::zero();
        }

        // No crossing: the minimum is attained on one of the edges.
        trace!("line misses triangle, testing edges");
        let mut sqr_dist = T::max_value();
        let mut i0 = 2;
        for i1 in 0..3 {
            let edge = Segment3::new(&self.triangle[i0], &self.triangle[i1]);
            let mut query = DistLine3Segment3::new(self.line, edge);
            let sqr_dist_tmp = query.get_squared();
            if sqr_dist_tmp < sqr_dist {
                sqr_dist = sqr_dist_tmp;
                self.line_closest = query.line_closest;
                self.triangle_closest = query.segment_closest;
                self.line_parameter = query.line_parameter;

                let ratio = query.segment_parameter / edge.extent;
                let mut bary = Vector3::zero();
                bary[i0] = T::half() * (T::one() - ratio);
                bary[i1] = T::one() - bary[i0];
                bary[3 - i0 - i1] = T::zero();
                self.triangle_bary_coords = bary;
            }
            i0 = i1;
        }
        sqr_dist
    }

    fn cached(&self) -> Option<T> {
        self.distance_squared
    }

    fn set_cached(&mut self, value: Option<T>) {
        self.distance_squared = value;
    }
}

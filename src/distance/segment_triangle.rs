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
    distance::{
        DistanceQuery, line_triangle::DistLine3Triangle3, point_triangle::DistPoint3Triangle3,
    },
    geometry::{line::Line3, segment::Segment3, triangle::Triangle3, vector::Vector3},
    numeric::scalar::Scalar,
};

/// Closest points between a segment and a triangle.
///
/// Runs the line query on the supporting line and falls back to a
/// point query from the nearer endpoint when the line minimum lies
/// outside the segment.
#[derive(Clone, Debug)]
pub struct DistSegment3Triangle3<T: Scalar> {
    segment: Segment3<T>,
    triangle: Triangle3<T>,
    distance_squared: Option<T>,

    pub segment_closest: Vector3<T>,
    pub triangle_closest: Vector3<T>,
    pub segment_parameter: T,
    pub triangle_bary_coords: Vector3<T>,
}

impl<T: Scalar> DistSegment3Triangle3<T> {
    pub fn new(segment: Segment3<T>, triangle: Triangle3<T>) -> Self {
        Self {
            segment,
            triangle,
            distance_squared: None,
            segment_closest: Vector3::zero(),
            triangle_closest: Vector3::zero(),
            segment_parameter: T::zero(),
            triangle_bary_coords: Vector3::zero(),
        }
    }

    pub fn min_distance(segment: Segment3<T>, triangle: Triangle3<T>) -> T {
        Self::new(segment, triangle).get()
    }

    pub fn segment(&self) -> &Segment3<T> {
        &self.segment
    }

    pub fn triangle(&self) -> &Triangle3<T> {
        &self.triangle
    }

    pub fn set_segment(&mut self, segment: Segment3<T>) {
        self.segment = segment;
        self.invalidate();
    }

    pub fn set_triangle(&mut self, triangle: Triangle3<T>) {
        self.triangle = triangle;
        self.invalidate();
    }
}

impl<T: Scalar> DistanceQuery<T> for DistSegment3Triangle3<T> {
    fn evaluate(&mut self) -> T {
        let extent = self.segment.extent;
        let line = Line3::new(self.segment.center, self.segment.direction);
        let mut line_query = DistLine3Triangle3::new(line, self.triangle);
        let sqr_dist = line_query.get_squared();
        let param = line_query.line_parameter;

        if param >= -extent && param <= extent {
            self.segment_closest = line_query.line_closest;
            self.triangle_closest = line_query.triangle_closest;
            self.segment_parameter = param;
            self.triangle_bary_coords = line_query.triangle_bary_coords;
            return sqr_dist;
        }

        let (endpoint, param) = if param > extent {
            (self.segment.p1(), extent)
        } else {
            (self.segment.p0(), -extent)
        };
        let mut point_query = DistPoint3Triangle3::new(endpoint, self.triangle);
        let sqr_dist = point_query.get_squared();
        self.segment_closest = endpoint;
        self.triangle_closest = point_query.triangle_closest;
        self.segment_parameter = param;
        self.triangle_bary_coords = point_query.triangle_bary_coords;
        sqr_dist
    }

    fn cached(&self) -> Option<T> {
        self.distance_squared
    }

    fn set_cached(&mut self, value: Option<T>) {
        self.distance_squared = value;
    }
}

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
    geometry::{line::Line, segment::Segment, vector::Vector},
    numeric::scalar::Scalar,
};

/// Closest points between an infinite line and a segment.
///
/// `segment_parameter` is the signed offset from the segment center, in
/// `[-extent, extent]`.
#[derive(Clone, Debug)]
pub struct DistLineSegment<T: Scalar, const N: usize> {
    line: Line<T, N>,
    segment: Segment<T, N>,
    distance_squared: Option<T>,

    pub line_closest: Vector<T, N>,
    pub segment_closest: Vector<T, N>,
    pub line_parameter: T,
    pub segment_parameter: T,
}

pub type DistLine2Segment2<T> = DistLineSegment<T, 2>;
pub type DistLine3Segment3<T> = DistLineSegment<T, 3>;

impl<T: Scalar, const N: usize> DistLineSegment<T, N> {
    pub fn new(line: Line<T, N>, segment: Segment<T, N>) -> Self {
        Self {
            line,
            segment,
            distance_squared: None,
            line_closest: Vector::zero(),
            segment_closest: Vector::zero(),
            line_parameter: T::zero(),
            segment_parameter: T::zero(),
        }
    }

    pub fn min_distance(line: Line<T, N>, segment: Segment<T, N>) -> T {
        Self::new(line, segment).get()
    }

    pub fn line(&self) -> &Line<T, N> {
        &self.line
    }

    pub fn segment(&self) -> &Segment<T, N> {
        &self.segment
    }

    pub fn set_line(&mut self, line: Line<T, N>) {
        self.line = line;
        self.invalidate();
    }

    pub fn set_segment(&mut self, segment: Segment<T, N>) {
        self.segment = segment;
        self.invalidate();
    }
}

impl<T: Scalar, const N: usize> DistanceQuery<T> for DistLineSegment<T, N> {
    fn evaluate(&mut self) -> T {
        let line = &self.line;
        let seg = &self.segment;
        let two = T::two();

        let diff = line.origin - seg.center;
        let a01 = -line.direction.dot(&seg.direction);
        let b0 = diff.dot(&line.direction);
        let c = diff.length_squared();
        let det = (T::one() - a01 * a01).abs();

        let (mut s0, mut s1, sqr_dist);
        if det >= T::zero_tolerance() {
            let b1 = -diff.dot(&seg.direction);
            s1 = a01 * b0 - b1;
            let ext_det = seg.extent * det;

            if s1 >= -ext_det {
                if s1 <= ext_det {
                    // Both closest points interior.
                    let inv_det = T::one() / det;
                    s0 = (a01 * b1 - b0) * inv_det;
                    s1 *= inv_det;
                    sqr_dist =
                        s0 * (s0 + a01 * s1 + two * b0) + s1 * (a01 * s0 + s1 + two * b1) + c;
                } else {
                    s1 = seg.extent;
                    s0 = -(a01 * s1 + b0);
                    sqr_dist = -s0 * s0 + s1 * (s1 + two * b1) + c;
                }
            } else {
                s1 = -seg.extent;
                s0 = -(a01 * s1 + b0);
                sqr_dist = -s0 * s0 + s1 * (s1 + two * b1) + c;
            }
        } else {
            trace!("line parallel to segment, anchoring at segment center");
            s1 = T::zero();
            s0 = -b0;
            sqr_dist = b0 * s0 + c;
        }

        self.line_closest = self.line.point_at(s0);
        self.segment_closest = self.segment.point_at(s1);
        self.line_parameter = s0;
        self.segment_parameter = s1;
        sqr_dist
    }

    fn cached(&self) -> Option<T> {
        self.distance_squared
    }

    fn set_cached(&mut self, value: Option<T>) {
        self.distance_squared = value;
    }
}

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
    geometry::{segment::Segment, vector::Vector},
    numeric::scalar::Scalar,
};

/// Where the unconstrained minimum `(s0, s1)` sits relative to the square
/// `[-e0, e0] x [-e1, e1]`.
///
/// Sides and corners are numbered counter-clockwise starting from the
/// `s0 = +e0` side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum SegmentSegmentRegion {
    /// Region 0.
    #[default]
    Interior,
    /// Region 1: `s0 > e0`.
    Side0Max,
    /// Region 2.
    Corner0Max1Max,
    /// Region 3: `s1 > e1`.
    Side1Max,
    /// Region 4.
    Corner0Min1Max,
    /// Region 5: `s0 < -e0`.
    Side0Min,
    /// Region 6.
    Corner0Min1Min,
    /// Region 7: `s1 < -e1`.
    Side1Min,
    /// Region 8.
    Corner0Max1Min,
    Parallel,
}

impl SegmentSegmentRegion {
    pub fn number(self) -> Option<u8> {
        match self {
            Self::Interior => Some(0),
            Self::Side0Max => Some(1),
            Self::Corner0Max1Max => Some(2),
            Self::Side1Max => Some(3),
            Self::Corner0Min1Max => Some(4),
            Self::Side0Min => Some(5),
            Self::Corner0Min1Min => Some(6),
            Self::Side1Min => Some(7),
            Self::Corner0Max1Min => Some(8),
            Self::Parallel => None,
        }
    }
}

/// Closest points between two segments.
#[derive(Clone, Debug)]
pub struct DistSegmentSegment<T: Scalar, const N: usize> {
    segment0: Segment<T, N>,
    segment1: Segment<T, N>,
    distance_squared: Option<T>,

    pub segment0_closest: Vector<T, N>,
    pub segment1_closest: Vector<T, N>,
    pub segment0_parameter: T,
    pub segment1_parameter: T,
    pub region: SegmentSegmentRegion,
}

pub type DistSegment2Segment2<T> = DistSegmentSegment<T, 2>;
pub type DistSegment3Segment3<T> = DistSegmentSegment<T, 3>;

impl<T: Scalar, const N: usize> DistSegmentSegment<T, N> {
    pub fn new(segment0: Segment<T, N>, segment1: Segment<T, N>) -> Self {
        Self {
            segment0,
            segment1,
            distance_squared: None,
            segment0_closest: Vector::zero(),
            segment1_closest: Vector::zero(),
            segment0_parameter: T::zero(),
            segment1_parameter: T::zero(),
            region: SegmentSegmentRegion::Interior,
        }
    }

    pub fn min_distance(segment0: Segment<T, N>, segment1: Segment<T, N>) -> T {
        Self::new(segment0, segment1).get()
    }

    pub fn segment0(&self) -> &Segment<T, N> {
        &self.segment0
    }

    pub fn segment1(&self) -> &Segment<T, N> {
        &self.segment1
    }

    pub fn set_segment0(&mut self, segment: Segment<T, N>) {
        self.segment0 = segment;
        self.invalidate();
    }

    pub fn set_segment1(&mut self, segment: Segment<T, N>) {
        self.segment1 = segment;
        self.invalidate();
    }
}

impl<T: Scalar, const N: usize> DistanceQuery<T> for DistSegmentSegment<T, N> {
    fn evaluate(&mut self) -> T {
        use SegmentSegmentRegion as R;

        let two = T::two();
        let e0 = self.segment0.extent;
        let e1 = self.segment1.extent;

        let diff = self.segment0.center - self.segment1.center;
        let a01 = -self.segment0.direction.dot(&self.segment1.direction);
        let b0 = diff.dot(&self.segment0.direction);
        let b1 = -diff.dot(&self.segment1.direction);
        let c = diff.length_squared();
        let det = (T::one() - a01 * a01).abs();

        // s1 pinned, s0 minimised then clamped to [-e0, e0].
        let clamp_s0 = |s1: T| {
            let tmp = -(a01 * s1 + b0);
            let tail = s1 * (s1 + two * b1) + c;
            if tmp < -e0 {
                (-e0, s1, -e0 * (-e0 - two * tmp) + tail)
            } else if tmp <= e0 {
                (tmp, s1, -tmp * tmp + tail)
            } else {
                (e0, s1, e0 * (e0 - two * tmp) + tail)
            }
        };
        // s0 pinned, s1 minimised then clamped to [-e1, e1].
        let clamp_s1 = |s0: T| {
            let tmp = -(a01 * s0 + b1);
            let tail = s0 * (s0 + two * b0) + c;
            if tmp < -e1 {
                (s0, -e1, -e1 * (-e1 - two * tmp) + tail)
            } else if tmp <= e1 {
                (s0, tmp, -tmp * tmp + tail)
            } else {
                (s0, e1, e1 * (e1 - two * tmp) + tail)
            }
        };
        let tmp_s0 = |s1: T| -(a01 * s1 + b0);

        let (s0, s1, sqr_dist, region) = if det >= T::zero_tolerance() {
            let s0 = a01 * b1 - b0;
            let s1 = a01 * b0 - b1;
            let ext_det0 = e0 * det;
            let ext_det1 = e1 * det;

            let ((s0, s1, sqr), region) = if s0 >= -ext_det0 {
                if s0 <= ext_det0 {
                    if s1 >= -ext_det1 {
                        if s1 <= ext_det1 {
                            let inv_det = T::one() / det;
                            let (s0, s1) = (s0 * inv_det, s1 * inv_det);
                            let sqr = s0 * (s0 + a01 * s1 + two * b0)
                                + s1 * (a01 * s0 + s1 + two * b1)
                                + c;
                            ((s0, s1, sqr), R::Interior)
                        } else {
                            (clamp_s0(e1), R::Side1Max)
                        }
                    } else {
                        (clamp_s0(-e1), R::Side1Min)
                    }
                } else if s1 >= -ext_det1 {
                    if s1 <= ext_det1 {
                        (clamp_s1(e0), R::Side0Max)
                    } else if tmp_s0(e1) > e0 {
                        (clamp_s1(e0), R::Corner0Max1Max)
                    } else {
                        (clamp_s0(e1), R::Corner0Max1Max)
                    }
                } else if tmp_s0(-e1) > e0 {
                    (clamp_s1(e0), R::Corner0Max1Min)
                } else {
                    (clamp_s0(-e1), R::Corner0Max1Min)
                }
            } else if s1 >= -ext_det1 {
                if s1 <= ext_det1 {
                    (clamp_s1(-e0), R::Side0Min)
                } else if tmp_s0(e1) < -e0 {
                    (clamp_s1(-e0), R::Corner0Min1Max)
                } else {
                    (clamp_s0(e1), R::Corner0Min1Max)
                }
            } else if tmp_s0(-e1) < -e0 {
                (clamp_s1(-e0), R::Corner0Min1Min)
            } else {
                (clamp_s0(-e1), R::Corner0Min1Min)
            };
            (s0, s1, sqr, region)
        } else {
            trace!(a01 = a01.as_f64(), "parallel segments");
            // Average b0 with the mirrored b1 so the result does not depend
            // on the argument order.
            let e0_plus_e1 = e0 + e1;
            let sign = if a01 > T::zero() { -T::one() } else { T::one() };
            let b0_avr = T::half() * (b0 - sign * b1);
            let lambda = (-b0_avr).clamp_to(-e0_plus_e1, e0_plus_e1);

            let s1 = if e0_plus_e1 > T::zero() {
                -sign * lambda * e1 / e0_plus_e1
            } else {
                T::zero()
            };
            let s0 = lambda + sign * s1;
            let sqr = lambda * (lambda + two * b0_avr) + c;
            (s0, s1, sqr, R::Parallel)
        };

        self.segment0_closest = self.segment0.point_at(s0);
        self.segment1_closest = self.segment1.point_at(s1);
        self.segment0_parameter = s0;
        self.segment1_parameter = s1;
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

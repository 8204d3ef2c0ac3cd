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
    geometry::{
        triangle::Triangle,
        vector::{Vector, Vector3},
    },
    numeric::scalar::Scalar,
};

/// Voronoi region of the triangle's plane containing the projected point.
///
/// With `s`, `t` the weights of `v1`, `v2`: region 0 is the triangle
/// itself, odd regions face an edge, even regions (2, 4, 6) surround the
/// vertices `v2`, `v0`, `v1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum PointTriangleRegion {
    /// Region 0.
    #[default]
    Interior,
    /// Region 1: beyond edge `v1 v2`.
    EdgeV1V2,
    /// Region 2.
    VertexV2,
    /// Region 3: beyond edge `v0 v2`.
    EdgeV0V2,
    /// Region 4.
    VertexV0,
    /// Region 5: beyond edge `v0 v1`.
    EdgeV0V1,
    /// Region 6.
    VertexV1,
}

impl PointTriangleRegion {
    pub fn number(self) -> u8 {
        match self {
            Self::Interior => 0,
            Self::EdgeV1V2 => 1,
            Self::VertexV2 => 2,
            Self::EdgeV0V2 => 3,
            Self::VertexV0 => 4,
            Self::EdgeV0V1 => 5,
            Self::VertexV1 => 6,
        }
    }
}

/// Closest point of a triangle to a point.
///
/// `triangle_bary_coords` holds the weights of `v0, v1, v2`, all in
/// `[0, 1]` and summing to one.
#[derive(Clone, Debug)]
pub struct DistPointTriangle<T: Scalar, const N: usize> {
    point: Vector<T, N>,
    triangle: Triangle<T, N>,
    distance_squared: Option<T>,

    pub triangle_closest: Vector<T, N>,
    pub triangle_bary_coords: Vector3<T>,
    pub region: PointTriangleRegion,
}

pub type DistPoint2Triangle2<T> = DistPointTriangle<T, 2>;
pub type DistPoint3Triangle3<T> = DistPointTriangle<T, 3>;

impl<T: Scalar, const N: usize> DistPointTriangle<T, N> {
    pub fn new(point: Vector<T, N>, triangle: Triangle<T, N>) -> Self {
        Self {
            point,
            triangle,
            distance_squared: None,
            triangle_closest: Vector::zero(),
            triangle_bary_coords: Vector3::zero(),
            region: PointTriangleRegion::Interior,
        }
    }

    pub fn min_distance(point: Vector<T, N>, triangle: Triangle<T, N>) -> T {
        Self::new(point, triangle).get()
    }

    pub fn point(&self) -> &Vector<T, N> {
        &self.point
    }

    pub fn triangle(&self) -> &Triangle<T, N> {
        &self.triangle
    }

    pub fn set_point(&mut self, point: Vector<T, N>) {
        self.point = point;
        self.invalidate();
    }

    pub fn set_triangle(&mut self, triangle: Triangle<T, N>) {
        self.triangle = triangle;
        self.invalidate();
    }
}

impl<T: Scalar, const N: usize> DistanceQuery<T> for DistPointTriangle<T, N> {
    fn evaluate(&mut self) -> T {
        use PointTriangleRegion as R;

        let zero = T::zero();
        let one = T::one();
        let two = T::two();

        let diff = self.triangle.v0 - self.point;
        let edge0 = self.triangle.v1 - self.triangle.v0;
        let edge1 = self.triangle.v2 - self.triangle.v0;
        let a00 = edge0.length_squared();
        let a01 = edge0.dot(&edge1);
        let a11 = edge1.length_squared();
        let b0 = diff.dot(&edge0);
        let b1 = diff.dot(&edge1);
        let c = diff.length_squared();
        let det = (a00 * a11 - a01 * a01).abs();
        let s = a01 * b1 - a11 * b0;
        let t = a01 * b0 - a00 * b1;

        let quadratic = |s: T, t: T| {
            s * (a00 * s + a01 * t + two * b0) + t * (a01 * s + a11 * t + two * b1) + c
        };
        // Minimise along edge0 (t = 0), clamped to s in [0, 1].
        let on_edge0 = || {
            if b0 >= zero {
                (zero, c)
            } else if -b0 >= a00 {
                (one, a00 + two * b0 + c)
            } else {
                let s = -b0 / a00;
                (s, b0 * s + c)
            }
        };
        // Minimise along edge1 (s = 0), clamped to t in [0, 1].
        let on_edge1 = || {
            if b1 >= zero {
                (zero, c)
            } else if -b1 >= a11 {
                (one, a11 + two * b1 + c)
            } else {
                let t = -b1 / a11;
                (t, b1 * t + c)
            }
        };

        let (s, t, sqr_dist, region) = if s + t <= det {
            if s < zero {
                if t < zero {
                    if b0 < zero {
                        // -b0 > 0 here so the edge0 minimum is interior or at v1.
                        let (s, sqr) = on_edge0();
                        (s, zero, sqr, R::VertexV0)
                    } else {
                        let (t, sqr) = on_edge1();
                        (zero, t, sqr, R::VertexV0)
                    }
                } else {
                    let (t, sqr) = on_edge1();
                    (zero, t, sqr, R::EdgeV0V2)
                }
            } else if t < zero {
                let (s, sqr) = on_edge0();
                (s, zero, sqr, R::EdgeV0V1)
            } else {
                let inv_det = one / det;
                let (s, t) = (s * inv_det, t * inv_det);
                (s, t, quadratic(s, t), R::Interior)
            }
        } else if s < zero {
            let tmp0 = a01 + b0;
            let tmp1 = a11 + b1;
            if tmp1 > tmp0 {
                let numer = tmp1 - tmp0;
                let denom = a00 - two * a01 + a11;
                if numer >= denom {
                    (one, zero, a00 + two * b0 + c, R::VertexV2)
                } else {
                    let s = numer / denom;
                    let t = one - s;
                    (s, t, quadratic(s, t), R::VertexV2)
                }
            } else if tmp1 <= zero {
                (zero, one, a11 + two * b1 + c, R::VertexV2)
            } else if b1 >= zero {
                (zero, zero, c, R::VertexV2)
            } else {
                let t = -b1 / a11;
                (zero, t, b1 * t + c, R::VertexV2)
            }
        } else if t < zero {
            let tmp0 = a01 + b1;
            let tmp1 = a00 + b0;
            if tmp1 > tmp0 {
                let numer = tmp1 - tmp0;
                let denom = a00 - two * a01 + a11;
                if numer >= denom {
                    (zero, one, a11 + two * b1 + c, R::VertexV1)
                } else {
                    let t = numer / denom;
                    let s = one - t;
                    (s, t, quadratic(s, t), R::VertexV1)
                }
            } else if tmp1 <= zero {
                (one, zero, a00 + two * b0 + c, R::VertexV1)
            } else if b0 >= zero {
                (zero, zero, c, R::VertexV1)
            } else {
                let s = -b0 / a00;
                (s, zero, b0 * s + c, R::VertexV1)
            }
        } else {
            let numer = a11 + b1 - a01 - b0;
            if numer <= zero {
                (zero, one, a11 + two * b1 + c, R::EdgeV1V2)
            } else {
                let denom = a00 - two * a01 + a11;
                if numer >= denom {
                    (one, zero, a00 + two * b0 + c, R::EdgeV1V2)
                } else {
                    let s = numer / denom;
                    let t = one - s;
                    (s, t, quadratic(s, t), R::EdgeV1V2)
                }
            }
        };

        self.triangle_closest = self.triangle.v0 + edge0 * s + edge1 * t;
        self.triangle_bary_coords = Vector3::new(one - s - t, s, t);
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

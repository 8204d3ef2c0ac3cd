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
    distance::{DistanceQuery, segment_triangle::DistSegment3Triangle3},
    geometry::{segment::Segment3, triangle::Triangle3, vector::Vector3},
    numeric::scalar::Scalar,
};

/// Closest points between two triangles.
///
/// Tests each edge of either triangle against the other one and stops as
/// soon as an edge comes within `zero_tolerance` of the other triangle.
#[derive(Clone, Debug)]
pub struct DistTriangle3Triangle3<T: Scalar> {
    triangle0: Triangle3<T>,
    triangle1: Triangle3<T>,
    distance_squared: Option<T>,

    pub triangle0_closest: Vector3<T>,
    pub triangle1_closest: Vector3<T>,
    pub triangle0_bary_coords: Vector3<T>,
    pub triangle1_bary_coords: Vector3<T>,
}

impl<T: Scalar> DistTriangle3Triangle3<T> {
    pub fn new(triangle0: Triangle3<T>, triangle1: Triangle3<T>) -> Self {
        Self {
            triangle0,
            triangle1,
            distance_squared: None,
            triangle0_closest: Vector3::zero(),
            triangle1_closest: Vector3::zero(),
            triangle0_bary_coords: Vector3::zero(),
            triangle1_bary_coords: Vector3::zero(),
        }
    }

    pub fn min_distance(triangle0: Triangle3<T>, triangle1: Triangle3<T>) -> T {
        Self::new(triangle0, triangle1).get()
    }

    pub fn triangle0(&self) -> &Triangle3<T> {
        &self.triangle0
    }

    pub fn triangle1(&self) -> &Triangle3<T> {
        &self.triangle1
    }

    pub fn set_triangle0(&mut self, triangle: Triangle3<T>) {
        self.triangle0 = triangle;
        self.invalidate();
    }

    pub fn set_triangle1(&mut self, triangle: Triangle3<T>) {
        self.triangle1 = triangle;
        self.invalidate();
    }
}

/// Barycentrics of a point at signed offset `param` along edge `i0 -> i1`.
fn edge_bary<T: Scalar>(i0: usize, i1: usize, param: T, extent: T) -> Vector3<T> {
    let ratio = param / extent;
    let mut bary = Vector3::zero();
    bary[i0] = T::half() * (T::one() - ratio);
    bary[i1] = T::one() - bary[i0];
    bary[3 - i0 - i1] = T::zero();
    bary
}

impl<T: Scalar> DistanceQuery<T> for DistTriangle3Triangle3<T> {
    fn evaluate(&mut self) -> T {
        let mut sqr_dist = T::max_value();

        // Edges of triangle0 against triangle1.
        let mut i0 = 2;
        for i1 in 0..3 {
            let edge = Segment3::new(&self.triangle0[i0], &self.triangle0[i1]);
            let mut query = DistSegment3Triangle3::new(edge, self.triangle1);
            let sqr_dist_tmp = query.get_squared();
            if sqr_dist_tmp < sqr_dist {
                sqr_dist = sqr_dist_tmp;
                self.triangle0_closest = query.segment_closest;
                self.triangle1_closest = query.triangle_closest;
                self.triangle0_bary_coords =
                    edge_bary(i0, i1, query.segment_parameter, edge.extent);
                self.triangle1_bary_coords = query.triangle_bary_coords;
                if sqr_dist <= T::zero_tolerance() {
                    return T::zero();
                }
            }
            i0 = i1;
        }

        // Edges of triangle1 against triangle0.
        let mut i0 = 2;
        for i1 in 0..3 {
            let edge = Segment3::new(&self.triangle1[i0], &self.triangle1[i1]);
            let mut query = DistSegment3Triangle3::new(edge, self.triangle0);
            let sqr_dist_tmp = query.get_squared();
            if sqr_dist_tmp < sqr_dist {
                sqr_dist = sqr_dist_tmp;
                self.triangle0_closest = query.triangle_closest;
                self.triangle1_closest = query.segment_closest;
                self.triangle0_bary_coords = query.triangle_bary_coords;
                self.triangle1_bary_coords =
                    edge_bary(i0, i1, query.segment_parameter, edge.extent);
                if sqr_dist <= T::zero_tolerance() {
                    return T::zero();
                }
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

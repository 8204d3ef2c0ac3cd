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
    geometry::{line::Line, vector::Vector},
    numeric::scalar::Scalar,
};

/// Closest points between two infinite lines.
#[derive(Clone, Debug)]
pub struct DistLineLine<T: Scalar, const N: usize> {
    line0: Line<T, N>,
    line1: Line<T, N>,
    distance_squared: Option<T>,

    pub line0_closest: Vector<T, N>,
    pub line1_closest: Vector<T, N>,
    pub line0_parameter: T,
    pub line1_parameter: T,
}

pub type DistLine2Line2<T> = DistLineLine<T, 2>;
pub type DistLine3Line3<T> = DistLineLine<T, 3>;

impl<T: Scalar, const N: usize> DistLineLine<T, N> {
    pub fn new(line0: Line<T, N>, line1: Line<T, N>) -> Self {
        Self {
            line0,
            line1,
            distance_squared: None,
            line0_closest: Vector::zero(),
            line1_closest: Vector::zero(),
            line0_parameter: T::zero(),
            line1_parameter: T::zero(),
        }
    }

    pub fn min_distance(line0: Line<T, N>, line1: Line<T, N>) -> T {
        Self::new(line0, line1).get()
    }

    pub fn line0(&self) -> &Line<T, N> {
        &self.line0
    }

    pub fn line1(&self) -> &Line<T, N> {
        &self.line1
    }

    pub fn set_line0(&mut self, line: Line<T, N>) {
        self.line0 = line;
        self.invalidate();
    }

    pub fn set_line1(&mut self, line: Line<T, N>) {
        self.line1 = line;
        self.invalidate();
    }
}

impl<T: Scalar, const N: usize> DistanceQuery<T> for DistLineLine<T, N> {
    fn evaluate(&mut self) -> T {
        let diff = self.line0.origin - self.line1.origin;
        let a01 = -self.line0.direction.dot(&self.line1.direction);
        let b0 = diff.dot(&self.line0.direction);
        let c = diff.length_squared();
        let det = (T::one() - a01 * a01).abs();

        let (s0, s1, sqr_dist);
        if det >= T::zero_tolerance() {
            let b1 = -diff.dot(&self.line1.direction);
            let inv_det = T::one() / det;
            s0 = (a01 * b1 - b0) * inv_det;
            s1 = (a01 * b0 - b1) * inv_det;
            sqr_dist = s0 * (s0 + a01 * s1 + T::two() * b0)
                + s1 * (a01 * s0 + s1 + T::two() * b1)
                + c;
        } else {
            trace!("parallel lines, anchoring at line1 origin");
            s0 = -b0;
            s1 = T::zero();
            sqr_dist = b0 * s0 + c;
        }

        self.line0_closest = self.line0.point_at(s0);
        self.line1_closest = self.line1.point_at(s1);
        self.line0_parameter = s0;
        self.line1_parameter = s1;
        sqr_dist
    }

    fn cached(&self) -> Option<T> {
        self.distance_squared
    }

    fn set_cached(&mut self, value: Option<T>) {
        self.distance_squared = value;
    }
}

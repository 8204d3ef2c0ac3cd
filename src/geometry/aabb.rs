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

use std::array;

use crate::{geometry::vector::Vector, numeric::scalar::Scalar};

/// An axis-aligned box in N dimensions stored as `min` / `max` corners.
///
/// The empty box has `min` at `+max_value` and `max` at `-max_value` so that
/// the first `contain` snaps both corners onto the point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisAlignedBox<T: Scalar, const N: usize> {
    pub min: Vector<T, N>,
    pub max: Vector<T, N>,
}

pub type AxisAlignedBox2<T> = AxisAlignedBox<T, 2>;
pub type AxisAlignedBox3<T> = AxisAlignedBox<T, 3>;
pub type AxisAlignedBox2d = AxisAlignedBox2<f64>;
pub type AxisAlignedBox3d = AxisAlignedBox3<f64>;
pub type AxisAlignedBox2f = AxisAlignedBox2<f32>;
pub type AxisAlignedBox3f = AxisAlignedBox3<f32>;

impl<T: Scalar, const N: usize> Default for AxisAlignedBox<T, N> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: Scalar, const N: usize> AxisAlignedBox<T, N> {
    pub fn new(min: Vector<T, N>, max: Vector<T, N>) -> Self {
        AxisAlignedBox { min, max }
    }

    pub fn empty() -> Self {
        AxisAlignedBox {
            min: Vector::splat(T::max_value()),
            max: Vector::splat(-T::max_value()),
        }
    }

    pub fn infinite() -> Self {
        AxisAlignedBox {
            min: Vector::splat(-T::max_value()),
            max: Vector::splat(T::max_value()),
        }
    }

    /// Box of half-width `extent` around `center`.
    pub fn from_center(center: &Vector<T, N>, extent: T) -> Self {
        let e = Vector::splat(extent);
        AxisAlignedBox {
            min: *center - e,
            max: *center + e,
        }
    }

    /// Build the smallest box containing two points.
    pub fn from_points(a: &Vector<T, N>, b: &Vector<T, N>) -> Self {
        AxisAlignedBox {
            min: a.component_min(b),
            max: a.component_max(b),
        }
    }

    /// Smallest box containing every point; empty for no points.
    pub fn bounding<'a>(points: impl IntoIterator<Item = &'a Vector<T, N>>) -> Self {
        let mut b = Self::empty();
        for p in points {
            b.contain(p);
        }
        b
    }

    pub fn is_empty(&self) -> bool {
        (0..N).any(|i| self.min[i] > self.max[i])
    }

    pub fn center(&self) -> Vector<T, N> {
        (self.min + self.max) * T::half()
    }

    /// Half-widths per axis.
    pub fn extents(&self) -> Vector<T, N> {
        (self.max - self.min) * T::half()
    }

    pub fn diagonal(&self) -> Vector<T, N> {
        self.max - self.min
    }

    pub fn diagonal_length(&self) -> T {
        self.diagonal().length()
    }

    pub fn width(&self) -> T {
        (self.max[0] - self.min[0]).max(T::zero())
    }

    pub fn height(&self) -> T {
        (self.max[1] - self.min[1]).max(T::zero())
    }

    pub fn max_dim(&self) -> T {
        self.diagonal().max_component()
    }

    /// Grow to include `p`.
    pub fn contain(&mut self, p: &Vector<T, N>) {
        self.min = self.min.component_min(p);
        self.max = self.max.component_max(p);
    }

    pub fn contain_box(&mut self, other: &Self) {
        self.min = self.min.component_min(&other.min);
        self.max = self.max.component_max(&other.max);
    }

    /// Smallest box containing both.
    pub fn union(&self, other: &Self) -> Self {
        let mut u = *self;
        u.contain_box(other);
        u
    }

    /// Inclusive point containment.
    pub fn contains(&self, p: &Vector<T, N>) -> bool {
        (0..N).all(|i| p[i] >= self.min[i] && p[i] <= self.max[i])
    }

    pub fn contains_box(&self, other: &Self) -> bool {
        self.contains(&other.min) && self.contains(&other.max)
    }

    /// Returns true if the boxes overlap, touching included.
    pub fn intersects(&self, other: &Self) -> bool {
        (0..N).all(|i| self.min[i] <= other.max[i] && self.max[i] >= other.min[i])
    }

    /// Overlap region; empty when the boxes are disjoint.
    pub fn intersect(&self, other: &Self) -> Self {
        let b = AxisAlignedBox {
            min: self.min.component_max(&other.min),
            max: self.max.component_min(&other.max),
        };
        if b.is_empty() { Self::empty() } else { b }
    }

    pub fn expand(&mut self, r: T) {
        let e = Vector::splat(r);
        self.min -= e;
        self.max += e;
    }

    pub fn translate(&mut self, d: &Vector<T, N>) {
        self.min += *d;
        self.max += *d;
    }

    /// Corner `i`: bit `k` of `i` selects `max` on axis `k`.
    pub fn corner(&self, i: usize) -> Vector<T, N> {
        Vector::from_coords(array::from_fn(|k| {
            if (i >> k) & 1 == 1 {
                self.max[k]
            } else {
                self.min[k]
            }
        }))
    }

    /// Squared distance from `p` to the box; zero inside.
    pub fn distance_squared(&self, p: &Vector<T, N>) -> T {
        let mut sqr = T::zero();
        for i in 0..N {
            let d = if p[i] < self.min[i] {
                self.min[i] - p[i]
            } else if p[i] > self.max[i] {
                p[i] - self.max[i]
            } else {
                T::zero()
            };
            sqr += d * d;
        }
        sqr
    }

    pub fn distance(&self, p: &Vector<T, N>) -> T {
        self.distance_squared(p).sqrt()
    }

    /// Nearest point of the box to `p`.
    pub fn nearest_point(&self, p: &Vector<T, N>) -> Vector<T, N> {
        Vector::from_coords(array::from_fn(|i| p[i].clamp_to(self.min[i], self.max[i])))
    }

    pub fn cast<U: Scalar>(&self) -> AxisAlignedBox<U, N> {
        AxisAlignedBox {
            min: self.min.cast(),
            max: self.max.cast(),
        }
    }
}

impl<T: Scalar> AxisAlignedBox<T, 2> {
    pub fn area(&self) -> T {
        self.width() * self.height()
    }
}

impl<T: Scalar> AxisAlignedBox<T, 3> {
    pub fn depth(&self) -> T {
        (self.max[2] - self.min[2]).max(T::zero())
    }

    pub fn volume(&self) -> T {
        self.width() * self.height() * self.depth()
    }

    pub fn surface_area(&self) -> T {
        let (w, h, d) = (self.width(), self.height(), self.depth());
        T::two() * (w * h + w * d + h * d)
    }
}

/// Integer grid box, inclusive on both corners.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AxisAlignedBox3i {
    pub min: [i32; 3],
    pub max: [i32; 3],
}

impl Default for AxisAlignedBox3i {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl AxisAlignedBox3i {
    pub const EMPTY: AxisAlignedBox3i = AxisAlignedBox3i {
        min: [i32::MAX; 3],
        max: [-i32::MAX; 3],
    };
    pub const ZERO: AxisAlignedBox3i = AxisAlignedBox3i {
        min: [0; 3],
        max: [0; 3],
    };

    pub fn new(min: [i32; 3], max: [i32; 3]) -> Self {
        Self { min, max }
    }

    pub fn is_empty(&self) -> bool {
        (0..3).any(|i| self.min[i] > self.max[i])
    }

    pub fn contain(&mut self, p: [i32; 3]) {
        for i in 0..3 {
            self.min[i] = self.min[i].min(p[i]);
            self.max[i] = self.max[i].max(p[i]);
        }
    }

    pub fn contains(&self, p: [i32; 3]) -> bool {
        (0..3).all(|i| p[i] >= self.min[i] && p[i] <= self.max[i])
    }

    pub fn intersects(&self, other: &Self) -> bool {
        (0..3).all(|i| self.min[i] <= other.max[i] && self.max[i] >= other.min[i])
    }

    /// Cell counts per axis; zero for an empty box.
    pub fn dimensions(&self) -> [i64; 3] {
        array::from_fn(|i| (self.max[i] as i64 - self.min[i] as i64 + 1).max(0))
    }

    pub fn volume(&self) -> i64 {
        self.dimensions().iter().product()
    }

    /// Squared grid distance from `p`; zero inside.
    pub fn distance_squared(&self, p: [i32; 3]) -> i64 {
        let mut sqr = 0i64;
        for i in 0..3 {
            let d = if p[i] < self.min[i] {
                self.min[i] as i64 - p[i] as i64
            } else if p[i] > self.max[i] {
                p[i] as i64 - self.max[i] as i64
            } else {
                0
            };
            sqr += d * d;
        }
        sqr
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::vector::{Vector2d, Vector3d};

    #[test]
    fn empty_box_accumulates() {
        let mut b = AxisAlignedBox3d::empty();
        assert!(b.is_empty());
        b.contain(&Vector3d::new(1.0, 2.0, 3.0));
        assert_eq!(b.min, b.max);
        b.contain(&Vector3d::new(-1.0, 0.0, 5.0));
        assert_eq!(b.min, Vector3d::new(-1.0, 0.0, 3.0));
        assert_eq!(b.max, Vector3d::new(1.0, 2.0, 5.0));
        assert_eq!(b.volume(), 8.0);
    }

    #[test]
    fn corners_and_distance() {
        let b = AxisAlignedBox2d::from_points(&Vector2d::new(0.0, 0.0), &Vector2d::new(2.0, 1.0));
        assert_eq!(b.corner(0), Vector2d::new(0.0, 0.0));
        assert_eq!(b.corner(3), Vector2d::new(2.0, 1.0));
        assert_eq!(b.distance_squared(&Vector2d::new(5.0, 5.0)), 25.0);
        assert_eq!(b.distance_squared(&Vector2d::new(1.0, 0.5)), 0.0);
        assert_eq!(b.nearest_point(&Vector2d::new(-1.0, 0.5)), Vector2d::new(0.0, 0.5));
    }

    #[test]
    fn intersect_disjoint_is_empty() {
        let a = AxisAlignedBox2d::from_points(&Vector2d::new(0.0, 0.0), &Vector2d::new(1.0, 1.0));
        let c = AxisAlignedBox2d::from_points(&Vector2d::new(2.0, 2.0), &Vector2d::new(3.0, 3.0));
        assert!(!a.intersects(&c));
        assert!(a.intersect(&c).is_empty());
        assert_eq!(a.union(&c).area(), 9.0);
    }

    #[test]
    fn integer_box() {
        let mut b = AxisAlignedBox3i::EMPTY;
        b.contain([0, 0, 0]);
        b.contain([2, 1, 0]);
        assert_eq!(b.dimensions(), [3, 2, 1]);
        assert_eq!(b.volume(), 6);
        assert_eq!(b.distance_squared([4, 1, 0]), 4);
    }
}

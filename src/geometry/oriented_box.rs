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

use crate::{
    geometry::{aabb::AxisAlignedBox, frame::Frame3, vector::Vector},
    numeric::scalar::Scalar,
};

/// How `OrientedBox::scale` treats the box center.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScaleMode<T: Scalar, const N: usize> {
    /// Only the extents change; the center stays put.
    Extents,
    /// The center is scaled about the world origin as well.
    AboutOrigin,
    /// The center is scaled about the given pivot.
    AboutPoint(Vector<T, N>),
}

/// Box with mutually perpendicular unit `axes` and per-axis half-widths.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrientedBox<T: Scalar, const N: usize> {
    pub center: Vector<T, N>,
    pub axes: [Vector<T, N>; N],
    pub extent: Vector<T, N>,
}

pub type Box2<T> = OrientedBox<T, 2>;
pub type Box3<T> = OrientedBox<T, 3>;
pub type Box2d = Box2<f64>;
pub type Box3d = Box3<f64>;
pub type Box2f = Box2<f32>;
pub type Box3f = Box3<f32>;

impl<T: Scalar, const N: usize> OrientedBox<T, N> {
    pub fn new(center: Vector<T, N>, axes: [Vector<T, N>; N], extent: Vector<T, N>) -> Self {
        Self {
            center,
            axes,
            extent,
        }
    }

    /// World-aligned box with the same footprint as `aabb`.
    pub fn from_aabb(aabb: &AxisAlignedBox<T, N>) -> Self {
        Self {
            center: aabb.center(),
            axes: array::from_fn(Vector::unit),
            extent: aabb.extents(),
        }
    }

    pub fn axis(&self, i: usize) -> Vector<T, N> {
        self.axes[i]
    }

    /// Corner `i`: bit `k` of `i` selects `+extent` along axis `k`.
    pub fn corner(&self, i: usize) -> Vector<T, N> {
        let mut p = self.center;
        for k in 0..N {
            let e = if (i >> k) & 1 == 1 {
                self.extent[k]
            } else {
                -self.extent[k]
            };
            p += self.axes[k] * e;
        }
        p
    }

    pub fn corners(&self) -> Vec<Vector<T, N>> {
        (0..1usize << N).map(|i| self.corner(i)).collect()
    }

    /// Area in 2D, volume in 3D.
    pub fn volume(&self) -> T {
        self.extent
            .iter()
            .fold(T::one(), |acc, &e| acc * T::two() * e)
    }

    pub fn diagonal_length(&self) -> T {
        T::two() * self.extent.length()
    }

    /// Coordinates of `p` in the box's axis frame, relative to its center.
    pub fn to_local(&self, p: &Vector<T, N>) -> Vector<T, N> {
        let d = *p - self.center;
        Vector::from_coords(array::from_fn(|i| d.dot(&self.axes[i])))
    }

    pub fn from_local(&self, p: &Vector<T, N>) -> Vector<T, N> {
        let mut w = self.center;
        for i in 0..N {
            w += self.axes[i] * p[i];
        }
        w
    }

    /// Inclusive containment.
    pub fn contains(&self, p: &Vector<T, N>) -> bool {
        let local = self.to_local(p);
        (0..N).all(|i| local[i].abs() <= self.extent[i])
    }

    /// Grow the extents (keeping center and axes) until `p` is inside.
    pub fn contain(&mut self, p: &Vector<T, N>) {
        let local = self.to_local(p);
        for i in 0..N {
            self.extent[i] = self.extent[i].max(local[i].abs());
        }
    }

    pub fn expand(&mut self, r: T) {
        self.extent = self.extent.map(|e| e + r);
    }

    pub fn translate(&mut self, d: &Vector<T, N>) {
        self.center += *d;
    }

    /// Per-axis scale of the extents; `mode` decides what happens to
    /// the center.
    pub fn scale(&mut self, s: &Vector<T, N>, mode: ScaleMode<T, N>) {
        match mode {
            ScaleMode::Extents => {}
            ScaleMode::AboutOrigin => self.center = self.center.scale_by(s),
            ScaleMode::AboutPoint(pivot) => {
                self.center = pivot + (self.center - pivot).scale_by(s);
            }
        }
        self.extent = self.extent.scale_by(s);
    }

    /// Tightest world-aligned box around the oriented box.
    pub fn to_aabb(&self) -> AxisAlignedBox<T, N> {
        let half: Vector<T, N> = Vector::from_coords(array::from_fn(|k| {
            (0..N).fold(T::zero(), |acc, i| {
                acc + self.axes[i][k].abs() * self.extent[i]
            })
        }));
        AxisAlignedBox::new(self.center - half, self.center + half)
    }

    pub fn cast<U: Scalar>(&self) -> OrientedBox<U, N> {
        OrientedBox {
            center: self.center.cast(),
            axes: array::from_fn(|i| self.axes[i].cast()),
            extent: self.extent.cast(),
        }
    }
}

impl<T: Scalar> OrientedBox<T, 3> {
    /// Box centred on the frame origin, aligned with its axes.
    pub fn from_frame(frame: &Frame3<T>, extent: Vector<T, 3>) -> Self {
        Self {
            center: frame.origin,
            axes: [frame.x(), frame.y(), frame.z()],
            extent,
        }
    }
}

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
    geometry::{quaternion::Quaternion, vector::Vector3},
    numeric::scalar::Scalar,
};

/// Rigid coordinate frame: an origin and a rotation whose columns are the
/// frame's X/Y/Z axes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame3<T: Scalar> {
    pub origin: Vector3<T>,
    pub rotation: Quaternion<T>,
}

pub type Frame3d = Frame3<f64>;
pub type Frame3f = Frame3<f32>;

impl<T: Scalar> Default for Frame3<T> {
    fn default() -> Self {
        Self::new(Vector3::zero())
    }
}

impl<T: Scalar> Frame3<T> {
    pub fn new(origin: Vector3<T>) -> Self {
        Self {
            origin,
            rotation: Quaternion::identity(),
        }
    }

    pub fn with_rotation(origin: Vector3<T>, rotation: Quaternion<T>) -> Self {
        Self { origin, rotation }
    }

    /// Frame whose Z axis is `normal`.
    pub fn from_normal(origin: Vector3<T>, normal: &Vector3<T>) -> Self {
        let rotation = Quaternion::from_to(&Vector3::unit(2), normal);
        Self { origin, rotation }
    }

    pub fn x(&self) -> Vector3<T> {
        self.rotation.axis_x()
    }

    pub fn y(&self) -> Vector3<T> {
        self.rotation.axis_y()
    }

    pub fn z(&self) -> Vector3<T> {
        self.rotation.axis_z()
    }

    pub fn axis(&self, i: usize) -> Vector3<T> {
        self.rotation.rotate(&Vector3::unit(i))
    }

    /// World point into frame-local coordinates.
    pub fn to_frame_p(&self, p: &Vector3<T>) -> Vector3<T> {
        self.rotation.inverse().rotate(&(*p - self.origin))
    }

    /// Frame-local point into world coordinates.
    pub fn from_frame_p(&self, p: &Vector3<T>) -> Vector3<T> {
        self.rotation.rotate(p) + self.origin
    }

    pub fn to_frame_v(&self, v: &Vector3<T>) -> Vector3<T> {
        self.rotation.inverse().rotate(v)
    }

    pub fn from_frame_v(&self, v: &Vector3<T>) -> Vector3<T> {
        self.rotation.rotate(v)
    }

    pub fn translated(&self, delta: &Vector3<T>) -> Self {
        Self::with_rotation(self.origin + *delta, self.rotation)
    }

    /// Rotate the frame in place about its own origin.
    pub fn rotated(&self, q: &Quaternion<T>) -> Self {
        Self::with_rotation(self.origin, (*q * self.rotation).normalized())
    }
}

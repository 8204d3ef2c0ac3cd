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
    geometry::vector::{Vector2, Vector3},
    numeric::scalar::Scalar,
};

/// Circle in the plane.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle2<T: Scalar> {
    pub center: Vector2<T>,
    pub radius: T,
    /// Counter-clockwise parameterisation when true.
    pub is_reversed: bool,
}

pub type Circle2d = Circle2<f64>;
pub type Circle2f = Circle2<f32>;

impl<T: Scalar> Circle2<T> {
    pub fn new(center: Vector2<T>, radius: T) -> Self {
        Self {
            center,
            radius,
            is_reversed: false,
        }
    }

    /// Point at `angle` radians, measured from the +X axis.
    pub fn point_at_angle(&self, angle: T) -> Vector2<T> {
        let angle = if self.is_reversed { -angle } else { angle };
        self.center + Vector2::new(angle.cos(), angle.sin()) * self.radius
    }

    /// Point at unit parameter `t`; one full turn over `[0, 1]`.
    pub fn point_at(&self, t: T) -> Vector2<T> {
        self.point_at_angle(t * T::TAU())
    }

    pub fn circumference(&self) -> T {
        T::TAU() * self.radius
    }

    pub fn area(&self) -> T {
        T::PI() * self.radius * self.radius
    }

    pub fn contains(&self, p: &Vector2<T>) -> bool {
        self.center.distance_squared(p) <= self.radius * self.radius
    }

    /// Signed distance to the curve; negative inside the disc.
    pub fn signed_distance(&self, p: &Vector2<T>) -> T {
        self.center.distance(p) - self.radius
    }

    pub fn cast<U: Scalar>(&self) -> Circle2<U> {
        Circle2 {
            center: self.center.cast(),
            radius: U::from_f64(self.radius.as_f64()),
            is_reversed: self.is_reversed,
        }
    }
}

/// Circle lying in the plane through `center` with unit `normal`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle3<T: Scalar> {
    pub center: Vector3<T>,
    pub normal: Vector3<T>,
    pub radius: T,
}

pub type Circle3d = Circle3<f64>;
pub type Circle3f = Circle3<f32>;

impl<T: Scalar> Circle3<T> {
    pub fn new(center: Vector3<T>, normal: Vector3<T>, radius: T) -> Self {
        Self {
            center,
            normal,
            radius,
        }
    }

    /// First in-plane axis of the complement basis of `normal`.
    pub fn plane_x(&self) -> Vector3<T> {
        Vector3::generate_complement_basis(&self.normal).0
    }

    pub fn plane_y(&self) -> Vector3<T> {
        Vector3::generate_complement_basis(&self.normal).1
    }

    pub fn point_at_angle(&self, angle: T) -> Vector3<T> {
        let (u, v) = Vector3::generate_complement_basis(&self.normal);
        self.center + (u * angle.cos() + v * angle.sin()) * self.radius
    }

    pub fn circumference(&self) -> T {
        T::TAU() * self.radius
    }

    pub fn area(&self) -> T {
        T::PI() * self.radius * self.radius
    }

    pub fn cast<U: Scalar>(&self) -> Circle3<U> {
        Circle3 {
            center: self.center.cast(),
            normal: self.normal.cast(),
            radius: U::from_f64(self.radius.as_f64()),
        }
    }
}

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
    geometry::{frame::Frame3, line::Line3},
    numeric::scalar::Scalar,
};

/// Solid cylinder around `axis`, centred on `axis.origin`, spanning
/// `[-height / 2, height / 2]` along the axis direction.
///
/// A height at or above `T::max_value()` marks the cylinder as infinite.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cylinder3<T: Scalar> {
    pub axis: Line3<T>,
    pub radius: T,
    pub height: T,
}

pub type Cylinder3d = Cylinder3<f64>;
pub type Cylinder3f = Cylinder3<f32>;

impl<T: Scalar> Cylinder3<T> {
    pub fn new(axis: Line3<T>, radius: T, height: T) -> Self {
        Self {
            axis,
            radius,
            height,
        }
    }

    pub fn infinite(axis: Line3<T>, radius: T) -> Self {
        Self::new(axis, radius, T::max_value())
    }

    /// Cylinder along the frame's Z axis.
    pub fn from_frame(frame: &Frame3<T>, radius: T, height: T) -> Self {
        Self::new(Line3::new(frame.origin, frame.z()), radius, height)
    }

    pub fn is_infinite(&self) -> bool {
        self.height >= T::max_value()
    }

    /// Infinite for infinite cylinders.
    pub fn volume(&self) -> T {
        if self.is_infinite() {
            return T::infinity();
        }
        T::PI() * self.radius * self.radius * self.height
    }

    pub fn lateral_area(&self) -> T {
        if self.is_infinite() {
            return T::infinity();
        }
        T::TAU() * self.radius * self.height
    }

    pub fn cast<U: Scalar>(&self) -> Cylinder3<U> {
        let height = if self.is_infinite() {
            U::max_value()
        } else {
            U::from_f64(self.height.as_f64())
        };
        Cylinder3 {
            axis: self.axis.cast(),
            radius: U::from_f64(self.radius.as_f64()),
            height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{frame::Frame3d, line::Line3d, vector::Vector3d};

    #[test]
    fn infinite_sentinel_survives_narrowing() {
        let c = Cylinder3d::infinite(Line3d::new(Vector3d::zero(), Vector3d::unit(2)), 1.0);
        assert!(c.is_infinite());
        assert!(c.cast::<f32>().is_infinite());
        assert_eq!(c.volume(), f64::INFINITY);
    }

    #[test]
    fn finite_measures() {
        let c = Cylinder3d::from_frame(&Frame3d::default(), 2.0, 3.0);
        assert_eq!(c.axis.direction, Vector3d::unit(2));
        assert!((c.volume() - 12.0 * std::f64::consts::PI).abs() < 1e-12);
        assert!((c.lateral_area() - 12.0 * std::f64::consts::PI).abs() < 1e-12);
    }
}

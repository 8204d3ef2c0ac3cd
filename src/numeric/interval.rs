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

use std::ops::{Add, Mul, Sub};

use crate::numeric::scalar::Scalar;

/// Closed interval `[a, b]` over a floating-point scalar.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Interval1<T: Scalar> {
    pub a: T,
    pub b: T,
}

pub type Interval1d = Interval1<f64>;
pub type Interval1f = Interval1<f32>;

impl<T: Scalar> Interval1<T> {
    pub fn new(a: T, b: T) -> Self {
        Self { a, b }
    }

    /// Interval spanning both values regardless of their order.
    pub fn spanning(x: T, y: T) -> Self {
        if x <= y { Self::new(x, y) } else { Self::new(y, x) }
    }

    pub fn zero() -> Self {
        Self::new(T::zero(), T::zero())
    }

    /// Inverted sentinel: accumulating with `contain` starts from here.
    pub fn empty() -> Self {
        Self::new(T::max_value(), -T::max_value())
    }

    pub fn infinite() -> Self {
        Self::new(-T::max_value(), T::max_value())
    }

    pub fn is_empty(&self) -> bool {
        self.a > self.b
    }

    pub fn length(&self) -> T {
        self.b - self.a
    }

    pub fn center(&self) -> T {
        (self.a + self.b) * T::half()
    }

    pub fn contain(&mut self, d: T) {
        if d < self.a {
            self.a = d;
        }
        if d > self.b {
            self.b = d;
        }
    }

    pub fn contains(&self, d: T) -> bool {
        d >= self.a && d <= self.b
    }

    pub fn contains_interval(&self, o: &Self) -> bool {
        self.contains(o.a) && self.contains(o.b)
    }

    pub fn overlaps(&self, o: &Self) -> bool {
        !(o.a > self.b || o.b < self.a)
    }

    /// Squared gap between the intervals; zero when they overlap.
    pub fn squared_dist(&self, o: &Self) -> T {
        let d = self.dist(o);
        d * d
    }

    pub fn dist(&self, o: &Self) -> T {
        if self.b < o.a {
            o.a - self.b
        } else if self.a > o.b {
            self.a - o.b
        } else {
            T::zero()
        }
    }

    /// Overlapping part, or `None` when the intervals are disjoint.
    pub fn intersection(&self, o: &Self) -> Option<Self> {
        if !self.overlaps(o) {
            return None;
        }
        Some(Self::new(self.a.max(o.a), self.b.min(o.b)))
    }

    pub fn clamp(&self, f: T) -> T {
        f.clamp_to(self.a, self.b)
    }

    /// Point at unit parameter `t`; `t` outside `[0, 1]` extrapolates.
    pub fn interpolate(&self, t: T) -> T {
        (T::one() - t) * self.a + t * self.b
    }

    /// Unit parameter of `value`, clamped to `[0, 1]`. Zero-length intervals
    /// map everything to zero.
    pub fn get_t(&self, value: T) -> T {
        if value <= self.a {
            T::zero()
        } else if value >= self.b {
            T::one()
        } else if self.a == self.b {
            T::zero()
        } else {
            (value - self.a) / (self.b - self.a)
        }
    }

    pub fn expand(&mut self, r: T) {
        self.a -= r;
        self.b += r;
    }
}

impl<T: Scalar> Add<T> for Interval1<T> {
    type Output = Self;
    fn add(self, f: T) -> Self {
        Self::new(self.a + f, self.b + f)
    }
}

impl<T: Scalar> Sub<T> for Interval1<T> {
    type Output = Self;
    fn sub(self, f: T) -> Self {
        Self::new(self.a - f, self.b - f)
    }
}

impl<T: Scalar> Mul<T> for Interval1<T> {
    type Output = Self;
    fn mul(self, f: T) -> Self {
        Self::spanning(self.a * f, self.b * f)
    }
}

/// Closed integer interval `[a, b]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Interval1i {
    pub a: i32,
    pub b: i32,
}

impl Interval1i {
    pub const ZERO: Interval1i = Interval1i { a: 0, b: 0 };
    pub const EMPTY: Interval1i = Interval1i {
        a: i32::MAX,
        b: -i32::MAX,
    };
    pub const INFINITE: Interval1i = Interval1i {
        a: -i32::MAX,
        b: i32::MAX,
    };

    pub fn new(a: i32, b: i32) -> Self {
        Self { a, b }
    }

    pub fn is_empty(&self) -> bool {
        self.a > self.b
    }

    pub fn length(&self) -> i32 {
        self.b - self.a
    }

    pub fn center(&self) -> i32 {
        (self.a + self.b) / 2
    }

    pub fn contain(&mut self, d: i32) {
        if d < self.a {
            self.a = d;
        }
        if d > self.b {
            self.b = d;
        }
    }

    pub fn contains(&self, d: i32) -> bool {
        d >= self.a && d <= self.b
    }

    pub fn overlaps(&self, o: &Self) -> bool {
        !(o.a > self.b || o.b < self.a)
    }

    pub fn squared_dist(&self, o: &Self) -> i64 {
        let d = if self.b < o.a {
            o.a as i64 - self.b as i64
        } else if self.a > o.b {
            self.a as i64 - o.b as i64
        } else {
            0
        };
        d * d
    }

    pub fn clamp(&self, v: i32) -> i32 {
        v.clamp(self.a, self.b)
    }

    /// Every integer in `[a, b]`; nothing for an empty interval.
    pub fn iter(&self) -> std::ops::RangeInclusive<i32> {
        self.a..=self.b
    }
}

impl IntoIterator for Interval1i {
    type Item = i32;
    type IntoIter = std::ops::RangeInclusive<i32>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

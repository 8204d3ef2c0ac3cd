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

use num_traits::{Float, FloatConst};

use std::{
    fmt::Debug,
    ops::{AddAssign, DivAssign, MulAssign, SubAssign},
};

/// Floating-point type every primitive and query is generic over.
///
/// Implemented for `f32` and `f64`. The tolerances are the thresholds the
/// region-classification branches compare against, so they are fixed per
/// precision rather than configurable.
pub trait Scalar:
    Float
    + FloatConst
    + Debug
    + Default
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
    + Send
    + Sync
    + 'static
{
    /// Threshold below which a determinant or cosine deficit counts as zero.
    fn zero_tolerance() -> Self;

    fn from_f64(v: f64) -> Self;
    fn as_f64(self) -> f64;

    #[inline(always)]
    fn two() -> Self {
        Self::one() + Self::one()
    }

    #[inline(always)]
    fn half() -> Self {
        Self::from_f64(0.5)
    }

    /// Clamp into `[lo, hi]`. NaN passes through unchanged.
    #[inline(always)]
    fn clamp_to(self, lo: Self, hi: Self) -> Self {
        if self < lo {
            lo
        } else if self > hi {
            hi
        } else {
            self
        }
    }
}

impl Scalar for f64 {
    #[inline(always)]
    fn zero_tolerance() -> Self {
        1e-8
    }

    #[inline(always)]
    fn from_f64(v: f64) -> Self {
        v
    }

    #[inline(always)]
    fn as_f64(self) -> f64 {
        self
    }
}

impl Scalar for f32 {
    #[inline(always)]
    fn zero_tolerance() -> Self {
        1e-6
    }

    #[inline(always)]
    fn from_f64(v: f64) -> Self {
        v as f32
    }

    #[inline(always)]
    fn as_f64(self) -> f64 {
        self as f64
    }
}

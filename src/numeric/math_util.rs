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

//! Process-wide numeric constants and small scalar/triangle helpers.

use crate::{
    geometry::vector::{Vector, Vector3},
    numeric::scalar::Scalar,
};

/// Parallel / zero threshold for double precision.
pub const ZERO_TOLERANCE: f64 = 1e-8;
/// Parallel / zero threshold for single precision.
pub const ZERO_TOLERANCE_F: f32 = 1e-6;
pub const EPSILON: f64 = f64::EPSILON;
pub const EPSILON_F: f32 = f32::EPSILON;

pub const HALF_PI: f64 = std::f64::consts::FRAC_PI_2;
pub const TWO_PI: f64 = 2.0 * std::f64::consts::PI;
pub const FOUR_PI: f64 = 4.0 * std::f64::consts::PI;
pub const DEG2RAD: f64 = std::f64::consts::PI / 180.0;
pub const RAD2DEG: f64 = 180.0 / std::f64::consts::PI;

#[inline]
pub fn clamp<T: Scalar>(f: T, low: T, high: T) -> T {
    f.clamp_to(low, high)
}

/// Clamp the magnitude of `f` to `f_max`, keeping its sign.
#[inline]
pub fn signed_clamp<T: Scalar>(f: T, f_max: T) -> T {
    let mag = f.abs().min(f_max);
    if f < T::zero() { -mag } else { mag }
}

/// Clamp into the range spanned by `a` and `b`, whichever order they come in.
#[inline]
pub fn range_clamp<T: Scalar>(f: T, a: T, b: T) -> T {
    if a <= b { f.clamp_to(a, b) } else { f.clamp_to(b, a) }
}

#[inline]
pub fn epsilon_equal<T: Scalar>(a: T, b: T, eps: T) -> bool {
    (a - b).abs() <= eps
}

#[inline]
pub fn lerp<T: Scalar>(a: T, b: T, t: T) -> T {
    (T::one() - t) * a + t * b
}

/// Cubic Hermite ramp on `[0, 1]`, clamped outside.
#[inline]
pub fn smooth_step<T: Scalar>(x: T) -> T {
    let t = x.clamp_to(T::zero(), T::one());
    t * t * (T::from_f64(3.0) - T::two() * t)
}

/// Barycentric coordinates of `p` with respect to `(v0, v1, v2)`.
///
/// Solved relative to `v2`. The result divides by the Gram determinant, so a
/// degenerate triangle yields very large or non-finite weights.
pub fn barycentric_coords<T: Scalar, const N: usize>(
    p: &Vector<T, N>,
    v0: &Vector<T, N>,
    v1: &Vector<T, N>,
    v2: &Vector<T, N>,
) -> Vector3<T> {
    let v02 = *v0 - *v2;
    let v12 = *v1 - *v2;
    let pv2 = *p - *v2;
    let a00 = v02.dot(&v02);
    let a01 = v02.dot(&v12);
    let a11 = v12.dot(&v12);
    let b0 = v02.dot(&pv2);
    let b1 = v12.dot(&pv2);
    let det = a00 * a11 - a01 * a01;
    let bary0 = (a11 * b0 - a01 * b1) / det;
    let bary1 = (a00 * b1 - a01 * b0) / det;
    Vector3::new(bary0, bary1, T::one() - bary0 - bary1)
}

/// Unit normal of `(v0, v1, v2)`.
pub fn normal<T: Scalar>(v0: &Vector3<T>, v1: &Vector3<T>, v2: &Vector3<T>) -> Vector3<T> {
    let e0 = (*v1 - *v0).normalized();
    let e1 = (*v2 - *v0).normalized();
    e0.cross(&e1).normalized()
}

/// Unit normal and area from one cross product and a single normalise.
pub fn fast_normal_area<T: Scalar>(
    v0: &Vector3<T>,
    v1: &Vector3<T>,
    v2: &Vector3<T>,
) -> (Vector3<T>, T) {
    let mut n = (*v1 - *v0).cross(&(*v2 - *v0));
    let len = n.normalize();
    (n, len * T::half())
}

/// Unnormalised normal; its length is twice the area.
pub fn fast_normal_direction<T: Scalar>(
    v0: &Vector3<T>,
    v1: &Vector3<T>,
    v2: &Vector3<T>,
) -> Vector3<T> {
    (*v1 - *v0).cross(&(*v2 - *v0))
}

pub fn area<T: Scalar>(v0: &Vector3<T>, v1: &Vector3<T>, v2: &Vector3<T>) -> T {
    T::half() * fast_normal_direction(v0, v1, v2).length()
}

/// Signed solid angle subtended at `p` by triangle `(a, b, c)`.
///
/// Van Oosterom-Strackee form; divide by `4 pi` for the winding number.
pub fn tri_solid_angle<T: Scalar>(
    a: &Vector3<T>,
    b: &Vector3<T>,
    c: &Vector3<T>,
    p: &Vector3<T>,
) -> T {
    let a = *a - *p;
    let b = *b - *p;
    let c = *c - *p;
    let (la, lb, lc) = (a.length(), b.length(), c.length());
    let top = la * lb * lc + a.dot(&b) * lc + b.dot(&c) * la + c.dot(&a) * lb;
    let bottom = a[0] * (b[1] * c[2] - c[1] * b[2]) - a[1] * (b[0] * c[2] - c[0] * b[2])
        + a[2] * (b[0] * c[1] - c[0] * b[1]);
    T::two() * bottom.atan2(top)
}

/// Cotangent of the angle between `v0` and `v1`.
pub fn vector_cot<T: Scalar, const N: usize>(v0: &Vector<T, N>, v1: &Vector<T, N>) -> T {
    let d = v0.dot(v1);
    d / (v0.length_squared() * v1.length_squared() - d * d).sqrt()
}

/// Angle in degrees between two arbitrary (not necessarily unit) vectors.
pub fn vector_angle_deg<T: Scalar, const N: usize>(v0: &Vector<T, N>, v1: &Vector<T, N>) -> T {
    let denom = (v0.length_squared() * v1.length_squared()).sqrt();
    if denom <= T::epsilon() {
        return T::zero();
    }
    (v0.dot(v1) / denom)
        .clamp_to(-T::one(), T::one())
        .acos()
        .to_degrees()
}

/// Circumradius-to-twice-inradius ratio; 1 for equilateral triangles.
pub fn aspect_ratio<T: Scalar, const N: usize>(
    v0: &Vector<T, N>,
    v1: &Vector<T, N>,
    v2: &Vector<T, N>,
) -> T {
    let a = v0.distance(v1);
    let b = v1.distance(v2);
    let c = v2.distance(v0);
    let s = (a + b + c) * T::half();
    (a * b * c) / (T::from_f64(8.0) * (s - a) * (s - b) * (s - c))
}

pub fn is_obtuse<T: Scalar, const N: usize>(
    v0: &Vector<T, N>,
    v1: &Vector<T, N>,
    v2: &Vector<T, N>,
) -> bool {
    let a2 = v0.distance_squared(v1);
    let b2 = v0.distance_squared(v2);
    let c2 = v1.distance_squared(v2);
    a2 + b2 < c2 || b2 + c2 < a2 || c2 + a2 < b2
}

/// Real roots of `a x^2 + b x + c = 0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum QuadraticRoots<T> {
    None,
    One(T),
    /// Roots in ascending order.
    Two(T, T),
}

/// Solve `a x^2 + b x + c = 0`, falling back to the linear equation when
/// `|a| < epsilon`.
pub fn solve_quadratic<T: Scalar>(a: T, b: T, c: T) -> QuadraticRoots<T> {
    if a.abs() < T::epsilon() {
        if b.abs() < T::epsilon() {
            return QuadraticRoots::None;
        }
        return QuadraticRoots::One(-c / b);
    }
    let delta = b * b - T::from_f64(4.0) * a * c;
    if delta < T::zero() {
        return QuadraticRoots::None;
    }
    if delta == T::zero() {
        return QuadraticRoots::One(-b / (T::two() * a));
    }
    let sqrt_delta = delta.sqrt();
    // Avoid cancellation between -b and sqrt(delta).
    let q = if b < T::zero() {
        -T::half() * (b - sqrt_delta)
    } else {
        -T::half() * (b + sqrt_delta)
    };
    let r0 = q / a;
    let r1 = if q != T::zero() { c / q } else { -r0 };
    if r0 < r1 {
        QuadraticRoots::Two(r0, r1)
    } else {
        QuadraticRoots::Two(r1, r0)
    }
}

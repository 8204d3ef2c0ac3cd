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

//! One-dimensional numeric integration over `[a, b]`.

use crate::{
    error::{GeometryError, GeometryResult},
    numeric::scalar::Scalar,
};

/// Composite trapezoid rule with `samples` equally spaced evaluations.
pub fn trapezoid_rule<T: Scalar>(
    samples: usize,
    a: T,
    b: T,
    f: impl Fn(T) -> T,
) -> GeometryResult<T> {
    if samples < 2 {
        return Err(GeometryError::invalid_argument(format!(
            "trapezoid rule needs at least 2 samples, got {samples}"
        )));
    }
    let h = (b - a) / T::from_f64((samples - 1) as f64);
    let mut result = T::half() * (f(a) + f(b));
    for i in 1..samples - 1 {
        result += f(a + T::from_f64(i as f64) * h);
    }
    Ok(result * h)
}

/// Romberg integration: trapezoid refinements with Richardson extrapolation.
pub fn romberg<T: Scalar>(order: usize, a: T, b: T, f: impl Fn(T) -> T) -> GeometryResult<T> {
    if order == 0 {
        return Err(GeometryError::invalid_argument("romberg order must be positive"));
    }
    let mut prev = vec![T::zero(); order];
    let mut curr = vec![T::zero(); order];
    let mut h = b - a;
    prev[0] = T::half() * h * (f(a) + f(b));

    let mut p0 = 1usize;
    for i0 in 1..order {
        let mut sum = T::zero();
        for j in 1..=p0 {
            sum += f(a + h * (T::from_f64(j as f64) - T::half()));
        }
        curr[0] = T::half() * (prev[0] + h * sum);

        let mut p2 = T::from_f64(4.0);
        for i2 in 1..=i0 {
            curr[i2] = (p2 * curr[i2 - 1] - prev[i2 - 1]) / (p2 - T::one());
            p2 *= T::from_f64(4.0);
        }
        prev[..=i0].copy_from_slice(&curr[..=i0]);
        p0 *= 2;
        h *= T::half();
    }
    Ok(prev[order - 1])
}

const GAUSS_ROOTS: [f64; 5] = [
    -0.906_179_845_938_664,
    -0.538_469_310_105_683,
    0.0,
    0.538_469_310_105_683,
    0.906_179_845_938_664,
];

const GAUSS_WEIGHTS: [f64; 5] = [
    0.236_926_885_056_189,
    0.478_628_670_499_366,
    0.568_888_888_888_889,
    0.478_628_670_499_366,
    0.236_926_885_056_189,
];

/// Five-point Gauss-Legendre quadrature; exact for polynomials up to
/// degree nine.
pub fn gaussian_quadrature<T: Scalar>(a: T, b: T, f: impl Fn(T) -> T) -> T {
    let radius = T::half() * (b - a);
    let center = T::half() * (b + a);
    let mut result = T::zero();
    for (root, weight) in GAUSS_ROOTS.iter().zip(GAUSS_WEIGHTS.iter()) {
        result += T::from_f64(*weight) * f(radius * T::from_f64(*root) + center);
    }
    result * radius
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trapezoid_is_exact_for_lines() {
        let v = trapezoid_rule(5, 0.0, 2.0, |x: f64| 3.0 * x + 1.0).unwrap();
        assert!((v - 8.0).abs() < 1e-12);
        assert!(trapezoid_rule(1, 0.0, 1.0, |x: f64| x).is_err());
    }

    #[test]
    fn romberg_integrates_sine() {
        let v = romberg(8, 0.0, std::f64::consts::PI, f64::sin).unwrap();
        assert!((v - 2.0).abs() < 1e-9);
        assert!(romberg(0, 0.0, 1.0, |x: f64| x).is_err());
    }

    #[test]
    fn gauss_is_exact_for_cubics() {
        let v = gaussian_quadrature(-1.0, 2.0, |x: f64| x * x * x - x);
        // x^4/4 - x^2/2 from -1 to 2 = (4 - 2) - (1/4 - 1/2)
        assert!((v - 2.25).abs() < 1e-9);
    }
}

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

//! Computational-geometry primitives and closest-point queries.
//!
//! `geometry` holds the value types (vectors, matrices, lines, boxes,
//! triangles and friends), `distance` the memoized minimum-distance queries
//! between pairs of them. `mesh` runs the queries over read-only mesh and
//! point-set sources; `numeric` carries the scalar trait and small numeric
//! utilities.

pub mod distance;
pub mod error;
pub mod geometry;
pub mod io;
pub mod mesh;
pub mod numeric;

pub use distance::DistanceQuery;
pub use error::{GeometryError, GeometryResult};
pub use numeric::scalar::Scalar;

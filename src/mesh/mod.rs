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

//! Read-only mesh and point-set sources plus the batch helpers that run the
//! core primitives over them.

pub mod bounds;
pub mod queries;
pub mod source;
pub mod tri_cache;
pub mod winding;

pub use bounds::{
    bounds_in_frame, bounds_of_mesh, bounds_of_points, bounds_of_segment, bounds_of_triangle,
    bounds_of_triangles, try_bounds_of_mesh, try_bounds_of_points, try_bounds_of_triangles,
};
pub use queries::{
    NearestTriangle, mesh_winding_number, nearest_triangle, nearest_vertex, point_set_distance,
};
pub use source::{PointSet, PointSource, TriangleMesh, TriangleSource};
pub use tri_cache::TriangleInfoCache;
pub use winding::{FastPointWinding, FastTriWinding, estimate_point_areas};

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

//! Axis-aligned bounds of point sets, triangles and meshes.
//!
//! The infallible forms return an empty box for empty input; the `try_`
//! forms report `GeometryError::EmptyInput` instead.

use tracing::debug;

use crate::{
    error::{GeometryError, GeometryResult},
    geometry::{aabb::AxisAlignedBox3, frame::Frame3, segment::Segment3, vector::Vector3},
    mesh::source::{PointSource, TriangleSource},
    numeric::scalar::Scalar,
};

pub fn bounds_of_points<T: Scalar, S: PointSource<T>>(source: &S) -> AxisAlignedBox3<T> {
    let mut bounds = AxisAlignedBox3::empty();
    for i in 0..source.vertex_count() {
        bounds.contain(&source.vertex(i));
    }
    debug!(vertices = source.vertex_count(), "point bounds");
    bounds
}

pub fn try_bounds_of_points<T: Scalar, S: PointSource<T>>(
    source: &S,
) -> GeometryResult<AxisAlignedBox3<T>> {
    if source.vertex_count() == 0 {
        return Err(GeometryError::EmptyInput);
    }
    Ok(bounds_of_points(source))
}

pub fn bounds_of_triangle<T: Scalar>(
    a: &Vector3<T>,
    b: &Vector3<T>,
    c: &Vector3<T>,
) -> AxisAlignedBox3<T> {
    AxisAlignedBox3::new(
        a.component_min(b).component_min(c),
        a.component_max(b).component_max(c),
    )
}

/// Bounds of the vertices referenced by triangles, ignoring unreferenced
/// vertices.
pub fn bounds_of_mesh<T: Scalar, S: TriangleSource<T>>(source: &S) -> AxisAlignedBox3<T> {
    bounds_of_triangles(source, 0..source.triangle_count())
}

pub fn try_bounds_of_mesh<T: Scalar, S: TriangleSource<T>>(
    source: &S,
) -> GeometryResult<AxisAlignedBox3<T>> {
    if source.triangle_count() == 0 {
        return Err(GeometryError::EmptyInput);
    }
    Ok(bounds_of_mesh(source))
}

pub fn bounds_of_triangles<T: Scalar, S: TriangleSource<T>>(
    source: &S,
    triangles: impl IntoIterator<Item = usize>,
) -> AxisAlignedBox3<T> {
    let mut bounds = AxisAlignedBox3::empty();
    let mut count = 0usize;
    for t in triangles {
        let (a, b, c) = source.triangle_vertices(t);
        bounds.contain_box(&bounds_of_triangle(&a, &b, &c));
        count += 1;
    }
    debug!(triangles = count, empty = bounds.is_empty(), "triangle bounds");
    bounds
}

pub fn try_bounds_of_triangles<T: Scalar, S: TriangleSource<T>>(
    source: &S,
    triangles: impl IntoIterator<Item = usize>,
) -> GeometryResult<AxisAlignedBox3<T>> {
    let mut indices = triangles.into_iter().peekable();
    if indices.peek().is_none() {
        return Err(GeometryError::EmptyInput);
    }
    let mut bounds = AxisAlignedBox3::empty();
    for t in indices {
        let tri = source.try_triangle(t)?;
        bounds.contain_box(&bounds_of_triangle(&tri.v0, &tri.v1, &tri.v2));
    }
    Ok(bounds)
}

/// Bounds of the points expressed in the local coordinates of `frame`.
pub fn bounds_in_frame<T: Scalar, S: PointSource<T>>(
    source: &S,
    frame: &Frame3<T>,
) -> AxisAlignedBox3<T> {
    let mut bounds = AxisAlignedBox3::empty();
    for i in 0..source.vertex_count() {
        bounds.contain(&frame.to_frame_p(&source.vertex(i)));
    }
    bounds
}

pub fn bounds_of_segment<T: Scalar>(segment: &Segment3<T>) -> AxisAlignedBox3<T> {
    AxisAlignedBox3::from_points(&segment.p0(), &segment.p1())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        geometry::vector::Vector3d,
        mesh::source::{PointSet, TriangleMesh},
    };

    #[test]
    fn empty_inputs() {
        let empty = PointSet::<f64>::new(vec![]);
        assert!(bounds_of_points(&empty).is_empty());
        assert!(matches!(try_bounds_of_points(&empty), Err(GeometryError::EmptyInput)));

        let mesh = TriangleMesh::<f64>::new();
        assert!(bounds_of_mesh(&mesh).is_empty());
        assert!(try_bounds_of_mesh(&mesh).is_err());
        assert!(try_bounds_of_triangles(&mesh, std::iter::empty()).is_err());
    }

    #[test]
    fn mesh_skips_unreferenced_vertices() {
        let mesh = TriangleMesh::from_parts(
            vec![
                Vector3d::new(0.0, 0.0, 0.0),
                Vector3d::new(1.0, 0.0, 2.0),
                Vector3d::new(0.0, -1.0, 0.0),
                Vector3d::new(100.0, 100.0, 100.0),
            ],
            vec![[0, 1, 2]],
        )
        .unwrap();
        let b = bounds_of_mesh(&mesh);
        assert_eq!(b.min, Vector3d::new(0.0, -1.0, 0.0));
        assert_eq!(b.max, Vector3d::new(1.0, 0.0, 2.0));
        assert_eq!(bounds_of_points(&mesh).max, Vector3d::new(100.0, 100.0, 100.0));
        assert!(matches!(
            try_bounds_of_triangles(&mesh, [0, 1]),
            Err(GeometryError::IndexOutOfRange { index: 1, len: 1 })
        ));
    }

    #[test]
    fn segment_bounds_are_ordered() {
        let s = Segment3::new(&Vector3d::new(2.0, 0.0, -1.0), &Vector3d::new(0.0, 4.0, 1.0));
        let b = bounds_of_segment(&s);
        assert!(b.min.epsilon_equal(&Vector3d::new(0.0, 0.0, -1.0), 1e-12));
        assert!(b.max.epsilon_equal(&Vector3d::new(2.0, 4.0, 1.0), 1e-12));
    }
}

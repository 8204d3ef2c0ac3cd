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

//! Read-only geometry sources consumed by the batch helpers.

use crate::{
    error::{GeometryError, GeometryResult},
    geometry::{triangle::Triangle3, vector::Vector3},
    numeric::{math_util, scalar::Scalar},
};

/// Indexed collection of 3D positions, optionally with normals.
pub trait PointSource<T: Scalar> {
    fn vertex_count(&self) -> usize;

    /// Position of vertex `i`. Panics when `i` is out of range.
    fn vertex(&self, i: usize) -> Vector3<T>;

    fn has_vertex_normals(&self) -> bool {
        false
    }

    fn vertex_normal(&self, _i: usize) -> Option<Vector3<T>> {
        None
    }

    fn try_vertex(&self, i: usize) -> GeometryResult<Vector3<T>> {
        GeometryError::check_index(i, self.vertex_count())?;
        Ok(self.vertex(i))
    }

    fn vertices(&self) -> impl Iterator<Item = Vector3<T>> + '_
    where
        Self: Sized,
    {
        (0..self.vertex_count()).map(move |i| self.vertex(i))
    }
}

/// Indexed triangle collection over a `PointSource`.
pub trait TriangleSource<T: Scalar>: PointSource<T> {
    fn triangle_count(&self) -> usize;

    /// Vertex indices of triangle `t`. Panics when `t` is out of range.
    fn triangle_indices(&self, t: usize) -> [usize; 3];

    fn triangle_vertices(&self, t: usize) -> (Vector3<T>, Vector3<T>, Vector3<T>) {
        let [a, b, c] = self.triangle_indices(t);
        (self.vertex(a), self.vertex(b), self.vertex(c))
    }

    fn triangle(&self, t: usize) -> Triangle3<T> {
        let (a, b, c) = self.triangle_vertices(t);
        Triangle3::new(a, b, c)
    }

    fn triangle_normal(&self, t: usize) -> Vector3<T> {
        let (a, b, c) = self.triangle_vertices(t);
        math_util::normal(&a, &b, &c)
    }

    fn triangle_area(&self, t: usize) -> T {
        let (a, b, c) = self.triangle_vertices(t);
        math_util::area(&a, &b, &c)
    }

    fn triangle_centroid(&self, t: usize) -> Vector3<T> {
        let (a, b, c) = self.triangle_vertices(t);
        (a + b + c) / T::from_f64(3.0)
    }

    /// Triangle `t`, checking both the triangle index and its vertex indices.
    fn try_triangle(&self, t: usize) -> GeometryResult<Triangle3<T>> {
        GeometryError::check_index(t, self.triangle_count())?;
        let [a, b, c] = self.triangle_indices(t);
        Ok(Triangle3::new(
            self.try_vertex(a)?,
            self.try_vertex(b)?,
            self.try_vertex(c)?,
        ))
    }
}

/// Plain indexed triangle mesh.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TriangleMesh<T: Scalar> {
    pub vertices: Vec<Vector3<T>>,
    pub triangles: Vec<[usize; 3]>,
}

impl<T: Scalar> TriangleMesh<T> {
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            triangles: Vec::new(),
        }
    }

    /// Build a mesh, rejecting triangles that reference missing vertices.
    pub fn from_parts(vertices: Vec<Vector3<T>>, triangles: Vec<[usize; 3]>) -> GeometryResult<Self> {
        for tri in &triangles {
            for &v in tri {
                GeometryError::check_index(v, vertices.len())?;
            }
        }
        Ok(Self {
            vertices,
            triangles,
        })
    }

    pub fn add_vertex(&mut self, p: Vector3<T>) -> usize {
        self.vertices.push(p);
        self.vertices.len() - 1
    }

    pub fn add_triangle(&mut self, a: usize, b: usize, c: usize) -> GeometryResult<usize> {
        for v in [a, b, c] {
            GeometryError::check_index(v, self.vertices.len())?;
        }
        self.triangles.push([a, b, c]);
        Ok(self.triangles.len() - 1)
    }

    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }
}

impl<T: Scalar> PointSource<T> for TriangleMesh<T> {
    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn vertex(&self, i: usize) -> Vector3<T> {
        self.vertices[i]
    }
}

impl<T: Scalar> TriangleSource<T> for TriangleMesh<T> {
    fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    fn triangle_indices(&self, t: usize) -> [usize; 3] {
        self.triangles[t]
    }
}

/// Point cloud with optional per-point normals.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PointSet<T: Scalar> {
    pub points: Vec<Vector3<T>>,
    pub normals: Option<Vec<Vector3<T>>>,
}

impl<T: Scalar> PointSet<T> {
    pub fn new(points: Vec<Vector3<T>>) -> Self {
        Self {
            points,
            normals: None,
        }
    }

    pub fn with_normals(points: Vec<Vector3<T>>, normals: Vec<Vector3<T>>) -> GeometryResult<Self> {
        if normals.len() != points.len() {
            return Err(GeometryError::invalid_argument(format!(
                "{} normals for {} points",
                normals.len(),
                points.len()
            )));
        }
        Ok(Self {
            points,
            normals: Some(normals),
        })
    }
}

impl<T: Scalar> PointSource<T> for PointSet<T> {
    fn vertex_count(&self) -> usize {
        self.points.len()
    }

    fn vertex(&self, i: usize) -> Vector3<T> {
        self.points[i]
    }

    fn has_vertex_normals(&self) -> bool {
        self.normals.is_some()
    }

    fn vertex_normal(&self, i: usize) -> Option<Vector3<T>> {
        self.normals.as_ref().map(|n| n[i])
    }
}

/// Any mesh is also a point source over its vertices; this exposes just
/// that view for the point-set helpers.
impl<T: Scalar> From<&TriangleMesh<T>> for PointSet<T> {
    fn from(mesh: &TriangleMesh<T>) -> Self {
        PointSet::new(mesh.vertices.clone())
    }
}

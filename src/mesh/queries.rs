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

//! Brute-force queries over a whole source. Linear in the number of
//! elements; callers wanting speed build their own acceleration structure.

use tracing::{debug, trace};

use crate::{
    distance::{DistanceQuery, point_triangle::DistPoint3Triangle3},
    geometry::vector::Vector3,
    mesh::source::{PointSource, TriangleSource},
    numeric::{math_util, scalar::Scalar},
};

/// Result of `nearest_triangle`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NearestTriangle<T: Scalar> {
    pub triangle: usize,
    pub distance_squared: T,
    pub closest: Vector3<T>,
    pub bary_coords: Vector3<T>,
}

impl<T: Scalar> NearestTriangle<T> {
    pub fn distance(&self) -> T {
        self.distance_squared.sqrt()
    }
}

/// Triangle of `source` closest to `p`, or `None` when there are no
/// triangles. Ties keep the lowest index.
pub fn nearest_triangle<T: Scalar, S: TriangleSource<T>>(
    source: &S,
    p: &Vector3<T>,
) -> Option<NearestTriangle<T>> {
    let mut best: Option<NearestTriangle<T>> = None;
    for t in 0..source.triangle_count() {
        let mut query = DistPoint3Triangle3::new(*p, source.triangle(t));
        let sqr_dist = query.get_squared();
        if best.is_none_or(|b| sqr_dist < b.distance_squared) {
            best = Some(NearestTriangle {
                triangle: t,
                distance_squared: sqr_dist,
                closest: query.triangle_closest,
                bary_coords: query.triangle_bary_coords,
            });
        }
    }
    if let Some(b) = &best {
        trace!(triangle = b.triangle, distance_squared = b.distance_squared.as_f64(), "nearest triangle");
    }
    best
}

/// Index and squared distance of the vertex closest to `p`.
pub fn nearest_vertex<T: Scalar, S: PointSource<T>>(source: &S, p: &Vector3<T>) -> Option<(usize, T)> {
    let mut best: Option<(usize, T)> = None;
    for i in 0..source.vertex_count() {
        let d = source.vertex(i).distance_squared(p);
        if best.is_none_or(|(_, bd)| d < bd) {
            best = Some((i, d));
        }
    }
    best
}

/// Smallest distance between a point of `a` and a point of `b`.
pub fn point_set_distance<T: Scalar, A: PointSource<T>, B: PointSource<T>>(a: &A, b: &B) -> Option<T> {
    let mut best: Option<T> = None;
    for i in 0..a.vertex_count() {
        if let Some((_, d)) = nearest_vertex(b, &a.vertex(i)) {
            best = Some(best.map_or(d, |bd| bd.min(d)));
        }
    }
    debug!(a = a.vertex_count(), b = b.vertex_count(), "point set distance");
    best.map(|d| d.sqrt())
}

/// Exact winding number of the whole mesh at `q`.
///
/// Close to 1 inside a closed, outward-oriented mesh and 0 outside.
pub fn mesh_winding_number<T: Scalar, S: TriangleSource<T>>(source: &S, q: &Vector3<T>) -> T {
    let mut sum = T::zero();
    for t in 0..source.triangle_count() {
        let (a, b, c) = source.triangle_vertices(t);
        sum += math_util::tri_solid_angle(&a, &b, &c, q);
    }
    sum / T::from_f64(math_util::FOUR_PI)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        geometry::vector::Vector3d,
        mesh::source::{PointSet, TriangleMesh},
    };

    fn two_triangles() -> TriangleMesh<f64> {
        TriangleMesh::from_parts(
            vec![
                Vector3d::new(0.0, 0.0, 0.0),
                Vector3d::new(4.0, 0.0, 0.0),
                Vector3d::new(0.0, 4.0, 0.0),
                Vector3d::new(10.0, 0.0, 0.0),
                Vector3d::new(14.0, 0.0, 0.0),
                Vector3d::new(10.0, 4.0, 0.0),
            ],
            vec![[0, 1, 2], [3, 4, 5]],
        )
        .unwrap()
    }

    #[test]
    fn nearest_triangle_picks_second() {
        let mesh = two_triangles();
        let hit = nearest_triangle(&mesh, &Vector3d::new(11.0, 1.0, 2.0)).unwrap();
        assert_eq!(hit.triangle, 1);
        assert_eq!(hit.distance_squared, 4.0);
        assert_eq!(hit.closest, Vector3d::new(11.0, 1.0, 0.0));
        assert_eq!(hit.distance(), 2.0);
    }

    #[test]
    fn empty_sources_give_none() {
        let mesh = TriangleMesh::<f64>::new();
        assert!(nearest_triangle(&mesh, &Vector3d::zero()).is_none());
        assert!(nearest_vertex(&mesh, &Vector3d::zero()).is_none());
        assert_eq!(mesh_winding_number(&mesh, &Vector3d::zero()), 0.0);
    }

    #[test]
    fn nearest_vertex_and_set_distance() {
        let mesh = two_triangles();
        assert_eq!(nearest_vertex(&mesh, &Vector3d::new(9.0, 0.5, 0.0)), Some((3, 1.25)));
        let other = PointSet::new(vec![Vector3d::new(7.0, 0.0, 0.0), Vector3d::new(0.0, 4.0, 3.0)]);
        assert_eq!(point_set_distance(&mesh, &other), Some(3.0));
    }
}

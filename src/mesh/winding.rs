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

//! Fast winding-number approximation for triangle and point clusters.
//!
//! A cluster is summarised by its area-weighted center, a bounding radius
//! and the first two moments of its oriented area. Far from the cluster the
//! winding number is evaluated from the moments; close to it the exact sum
//! is used.

use tracing::debug;

use crate::{
    error::{GeometryError, GeometryResult},
    geometry::{matrix::Matrix3, vector::Vector3},
    mesh::{
        source::{PointSource, TriangleSource},
        tri_cache::TriangleInfoCache,
    },
    numeric::{math_util, scalar::Scalar},
};

fn inv_four_pi<T: Scalar>() -> T {
    T::one() / T::from_f64(math_util::FOUR_PI)
}

/// First-order far-field estimate of the winding number at `q`.
pub fn evaluate_order1<T: Scalar>(center: &Vector3<T>, order1: &Vector3<T>, q: &Vector3<T>) -> T {
    let dpq = *center - *q;
    let len = dpq.length();
    inv_four_pi::<T>() * order1.dot(&dpq) / (len * len * len)
}

/// Second-order far-field estimate of the winding number at `q`.
pub fn evaluate_order2<T: Scalar>(
    center: &Vector3<T>,
    order1: &Vector3<T>,
    order2: &Matrix3<T>,
    q: &Vector3<T>,
) -> T {
    let dpq = *center - *q;
    let len = dpq.length();
    let len3 = len * len * len;
    let four_pi_len3 = inv_four_pi::<T>() / len3;
    let first = four_pi_len3 * order1.dot(&dpq);

    let c = -T::from_f64(3.0) * inv_four_pi::<T>() / (len3 * len * len);
    let hessian = Matrix3::identity() * four_pi_len3 + Matrix3::outer(&dpq, &dpq) * c;
    first + order2.inner_product(&hessian)
}

/// Expansion coefficients of a triangle cluster.
#[derive(Clone, Debug)]
pub struct FastTriWinding<T: Scalar> {
    pub triangles: Vec<usize>,
    pub center: Vector3<T>,
    pub radius: T,
    pub order1: Vector3<T>,
    pub order2: Matrix3<T>,
}

impl<T: Scalar> FastTriWinding<T> {
    /// Compute the coefficients of `triangles`, reading normals, areas and
    /// centroids from `cache`.
    pub fn new<S: TriangleSource<T>>(
        source: &S,
        cache: &TriangleInfoCache<T>,
        triangles: &[usize],
    ) -> GeometryResult<Self> {
        if triangles.is_empty() {
            return Err(GeometryError::EmptyInput);
        }
        for &t in triangles {
            GeometryError::check_index(t, cache.len())?;
        }

        let center = cache.weighted_centroid(triangles.iter().copied());
        let mut radius = T::zero();
        let mut order1 = Vector3::zero();
        let mut order2 = Matrix3::zero();
        for &t in triangles {
            let (a, b, c) = source.triangle_vertices(t);
            for v in [a, b, c] {
                radius = radius.max(v.distance(&center));
            }
            let (normal, area, centroid) = cache.get(t);
            order1 += normal * area;
            order2 = order2 + Matrix3::outer(&(centroid - center), &normal) * area;
        }

        debug!(triangles = triangles.len(), radius = radius.as_f64(), "triangle winding coefficients");
        Ok(Self {
            triangles: triangles.to_vec(),
            center,
            radius,
            order1,
            order2,
        })
    }

    /// Exact winding number of the cluster's triangles at `q`.
    pub fn exact_eval<S: TriangleSource<T>>(&self, source: &S, q: &Vector3<T>) -> T {
        let sum = self.triangles.iter().fold(T::zero(), |acc, &t| {
            let (a, b, c) = source.triangle_vertices(t);
            acc + math_util::tri_solid_angle(&a, &b, &c, q)
        });
        sum * inv_four_pi()
    }

    pub fn evaluate_order1(&self, q: &Vector3<T>) -> T {
        evaluate_order1(&self.center, &self.order1, q)
    }

    pub fn evaluate_order2(&self, q: &Vector3<T>) -> T {
        evaluate_order2(&self.center, &self.order1, &self.order2, q)
    }

    /// Order-2 approximation when `q` is farther than `beta * radius` from
    /// the center, exact sum otherwise.
    pub fn winding_number<S: TriangleSource<T>>(&self, source: &S, q: &Vector3<T>, beta: T) -> T {
        if q.distance(&self.center) > beta * self.radius {
            self.evaluate_order2(q)
        } else {
            self.exact_eval(source, q)
        }
    }
}

/// Expansion coefficients of an oriented point cluster. Each point carries
/// a normal and the surface area it stands for.
#[derive(Clone, Debug)]
pub struct FastPointWinding<T: Scalar> {
    pub points: Vec<usize>,
    pub center: Vector3<T>,
    pub radius: T,
    pub order1: Vector3<T>,
    pub order2: Matrix3<T>,
}

impl<T: Scalar> FastPointWinding<T> {
    pub fn new<S: PointSource<T>>(source: &S, areas: &[T], points: &[usize]) -> GeometryResult<Self> {
        if points.is_empty() {
            return Err(GeometryError::EmptyInput);
        }
        if !source.has_vertex_normals() {
            return Err(GeometryError::invalid_argument("point winding needs vertex normals"));
        }
        if areas.len() != source.vertex_count() {
            return Err(GeometryError::invalid_argument(format!(
                "{} areas for {} points",
                areas.len(),
                source.vertex_count()
            )));
        }

        let mut weighted = Vector3::zero();
        let mut total_area = T::zero();
        for &i in points {
            GeometryError::check_index(i, source.vertex_count())?;
            weighted += source.vertex(i) * areas[i];
            total_area += areas[i];
        }
        let center = if total_area > T::zero() {
            weighted / total_area
        } else {
            weighted
        };

        let mut radius = T::zero();
        let mut order1 = Vector3::zero();
        let mut order2 = Matrix3::zero();
        for &i in points {
            let p = source.vertex(i);
            let n = source.vertex_normal(i).unwrap_or_else(Vector3::zero);
            radius = radius.max(p.distance(&center));
            order1 += n * areas[i];
            order2 = order2 + Matrix3::outer(&(p - center), &n) * areas[i];
        }

        debug!(points = points.len(), radius = radius.as_f64(), "point winding coefficients");
        Ok(Self {
            points: points.to_vec(),
            center,
            radius,
            order1,
            order2,
        })
    }

    /// Exact dipole sum of the cluster at `q`.
    pub fn exact_eval<S: PointSource<T>>(&self, source: &S, areas: &[T], q: &Vector3<T>) -> T {
        let sum = self.points.iter().fold(T::zero(), |acc, &i| {
            let dpq = source.vertex(i) - *q;
            let len = dpq.length();
            let n = source.vertex_normal(i).unwrap_or_else(Vector3::zero);
            acc + areas[i] * n.dot(&dpq) / (len * len * len)
        });
        sum * inv_four_pi()
    }

    pub fn evaluate_order1(&self, q: &Vector3<T>) -> T {
        evaluate_order1(&self.center, &self.order1, q)
    }

    pub fn evaluate_order2(&self, q: &Vector3<T>) -> T {
        evaluate_order2(&self.center, &self.order1, &self.order2, q)
    }

    pub fn winding_number<S: PointSource<T>>(
        &self,
        source: &S,
        areas: &[T],
        q: &Vector3<T>,
        beta: T,
    ) -> T {
        if q.distance(&self.center) > beta * self.radius {
            self.evaluate_order2(q)
        } else {
            self.exact_eval(source, areas, q)
        }
    }
}

/// Area represented by each point, from its `k` nearest neighbours.
///
/// With `r` the distance to the k-th nearest neighbour, the point gets
/// `pi * r^2 / k`. Clouds with fewer than `k + 1` points use every other
/// point. Brute force, quadratic in the number of points.
pub fn estimate_point_areas<T: Scalar, S: PointSource<T>>(source: &S, k: usize) -> GeometryResult<Vec<T>> {
    if k == 0 {
        return Err(GeometryError::invalid_argument("k must be positive"));
    }
    let count = source.vertex_count();
    if count < 2 {
        return Err(GeometryError::EmptyInput);
    }

    let neighbours = k.min(count - 1);
    let mut areas = Vec::with_capacity(count);
    let mut sqr_dists = Vec::with_capacity(count - 1);
    for i in 0..count {
        let p = source.vertex(i);
        sqr_dists.clear();
        sqr_dists.extend((0..count).filter(|&j| j != i).map(|j| p.distance_squared(&source.vertex(j))));
        sqr_dists.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
        let r2 = sqr_dists[neighbours - 1];
        areas.push(T::PI() * r2 / T::from_f64(neighbours as f64));
    }
    debug!(points = count, k = neighbours, "estimated point areas");
    Ok(areas)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        geometry::vector::Vector3d,
        mesh::source::{PointSet, TriangleMesh},
    };

    fn tetrahedron() -> TriangleMesh<f64> {
        TriangleMesh::from_parts(
            vec![
                Vector3d::new(0.0, 0.0, 0.0),
                Vector3d::new(1.0, 0.0, 0.0),
                Vector3d::new(0.0, 1.0, 0.0),
                Vector3d::new(0.0, 0.0, 1.0),
            ],
            vec![[0, 2, 1], [0, 1, 3], [0, 3, 2], [1, 2, 3]],
        )
        .unwrap()
    }

    #[test]
    fn exact_winding_inside_and_outside() {
        let mesh = tetrahedron();
        let cache = TriangleInfoCache::new(&mesh);
        let w = FastTriWinding::new(&mesh, &cache, &[0, 1, 2, 3]).unwrap();
        assert!((w.exact_eval(&mesh, &Vector3d::new(0.1, 0.1, 0.1)) - 1.0).abs() < 1e-12);
        assert!(w.exact_eval(&mesh, &Vector3d::new(2.0, 2.0, 2.0)).abs() < 1e-12);
    }

    #[test]
    fn closed_cluster_has_vanishing_far_field() {
        let mesh = tetrahedron();
        let cache = TriangleInfoCache::new(&mesh);
        let w = FastTriWinding::new(&mesh, &cache, &[0, 1, 2, 3]).unwrap();
        assert!(w.order1.length() < 1e-12);
        let q = Vector3d::new(50.0, 40.0, 30.0);
        assert!(w.evaluate_order2(&q).abs() < 1e-9);
        assert!(w.winding_number(&mesh, &q, 2.0).abs() < 1e-9);
    }

    #[test]
    fn far_field_matches_exact_for_single_triangle() {
        let mesh = tetrahedron();
        let cache = TriangleInfoCache::new(&mesh);
        let w = FastTriWinding::new(&mesh, &cache, &[0]).unwrap();
        let q = Vector3d::new(0.3, 0.3, 100.0);
        let exact = w.exact_eval(&mesh, &q);
        assert!(exact > 0.0);
        assert!((w.evaluate_order1(&q) - exact).abs() < 1e-8);
        assert!((w.evaluate_order2(&q) - exact).abs() < 1e-9);
    }

    #[test]
    fn empty_cluster_is_rejected() {
        let mesh = tetrahedron();
        let cache = TriangleInfoCache::new(&mesh);
        assert!(matches!(FastTriWinding::new(&mesh, &cache, &[]), Err(GeometryError::EmptyInput)));
        assert!(FastTriWinding::new(&mesh, &cache, &[4]).is_err());
    }

    #[test]
    fn point_areas_from_grid_spacing() {
        let points = PointSet::new(vec![
            Vector3d::new(0.0, 0.0, 0.0),
            Vector3d::new(1.0, 0.0, 0.0),
            Vector3d::new(0.0, 1.0, 0.0),
            Vector3d::new(1.0, 1.0, 0.0),
        ]);
        let areas = estimate_point_areas(&points, 1).unwrap();
        for a in &areas {
            assert!((a - std::f64::consts::PI).abs() < 1e-12);
        }
        assert!(estimate_point_areas(&points, 0).is_err());
    }

    #[test]
    fn point_winding_requires_normals() {
        let points = PointSet::new(vec![Vector3d::zero()]);
        assert!(FastPointWinding::new(&points, &[1.0], &[0]).is_err());
    }

    #[test]
    fn point_winding_far_field_matches_exact() {
        let normals = vec![Vector3d::unit(2); 4];
        let points = PointSet::with_normals(
            vec![
                Vector3d::new(0.0, 0.0, 0.0),
                Vector3d::new(1.0, 0.0, 0.0),
                Vector3d::new(0.0, 1.0, 0.0),
                Vector3d::new(1.0, 1.0, 0.0),
            ],
            normals,
        )
        .unwrap();
        let areas = vec![0.25; 4];
        let w = FastPointWinding::new(&points, &areas, &[0, 1, 2, 3]).unwrap();
        assert!(w.center.epsilon_equal(&Vector3d::new(0.5, 0.5, 0.0), 1e-12));
        let q = Vector3d::new(0.5, 0.5, -200.0);
        let exact = w.exact_eval(&points, &areas, &q);
        assert!(exact > 0.0);
        assert!((w.winding_number(&points, &areas, &q, 2.0) - exact).abs() < 1e-10);
    }
}

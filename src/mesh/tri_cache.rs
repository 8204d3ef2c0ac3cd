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

use crate::{
    geometry::vector::Vector3,
    mesh::source::TriangleSource,
    numeric::{math_util, scalar::Scalar},
};

/// Per-triangle normal, area and centroid, computed once from a source.
///
/// The cache is a snapshot; rebuild it after the source geometry changes.
#[derive(Clone, Debug, Default)]
pub struct TriangleInfoCache<T: Scalar> {
    pub normals: Vec<Vector3<T>>,
    pub areas: Vec<T>,
    pub centroids: Vec<Vector3<T>>,
}

impl<T: Scalar> TriangleInfoCache<T> {
    pub fn new<S: TriangleSource<T>>(source: &S) -> Self {
        let count = source.triangle_count();
        let mut cache = Self {
            normals: Vec::with_capacity(count),
            areas: Vec::with_capacity(count),
            centroids: Vec::with_capacity(count),
        };
        let three = T::from_f64(3.0);
        for t in 0..count {
            let (a, b, c) = source.triangle_vertices(t);
            let direction = math_util::fast_normal_direction(&a, &b, &c);
            let length = direction.length();
            let normal = if length > T::zero() {
                direction / length
            } else {
                Vector3::zero()
            };
            cache.normals.push(normal);
            cache.areas.push(T::half() * length);
            cache.centroids.push((a + b + c) / three);
        }
        cache
    }

    pub fn len(&self) -> usize {
        self.areas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }

    /// `(normal, area, centroid)` of triangle `t`.
    pub fn get(&self, t: usize) -> (Vector3<T>, T, Vector3<T>) {
        (self.normals[t], self.areas[t], self.centroids[t])
    }

    pub fn total_area(&self) -> T {
        self.areas.iter().fold(T::zero(), |acc, &a| acc + a)
    }

    /// Area-weighted centroid of the subset `triangles`.
    pub fn weighted_centroid(&self, triangles: impl IntoIterator<Item = usize>) -> Vector3<T> {
        let mut sum = Vector3::zero();
        let mut area = T::zero();
        for t in triangles {
            sum += self.centroids[t] * self.areas[t];
            area += self.areas[t];
        }
        if area > T::zero() { sum / area } else { sum }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{geometry::vector::Vector3d, mesh::source::TriangleMesh};

    #[test]
    fn degenerate_triangle_has_zero_normal() {
        let mesh = TriangleMesh::from_parts(
            vec![
                Vector3d::zero(),
                Vector3d::new(3.0, 0.0, 0.0),
                Vector3d::new(0.0, 3.0, 0.0),
                Vector3d::new(6.0, 0.0, 0.0),
            ],
            vec![[0, 1, 2], [0, 1, 3]],
        )
        .unwrap();
        let cache = TriangleInfoCache::new(&mesh);
        assert_eq!(cache.len(), 2);
        let (n, a, c) = cache.get(0);
        assert_eq!(n, Vector3d::unit(2));
        assert_eq!(a, 4.5);
        assert_eq!(c, Vector3d::new(1.0, 1.0, 0.0));
        assert_eq!(cache.normals[1], Vector3d::zero());
        assert_eq!(cache.total_area(), 4.5);
        assert_eq!(cache.weighted_centroid([0, 1]), Vector3d::new(1.0, 1.0, 0.0));
    }
}

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

use approx::{assert_abs_diff_eq, assert_relative_eq};
use geoprim::{
    GeometryError,
    geometry::{Frame3d, Quaterniond, Vector3d},
    io::{read_obj, read_obj_from, write_obj},
    mesh::{
        FastTriWinding, PointSet, TriangleInfoCache, TriangleMesh, TriangleSource, bounds_in_frame,
        bounds_of_mesh, bounds_of_points, bounds_of_triangles, mesh_winding_number,
        nearest_triangle, try_bounds_of_points,
    },
};
use rand::{Rng, SeedableRng, rngs::StdRng};

const CUBE_OBJ: &str = "\
# unit cube, outward faces as quads
v 0 0 0
v 1 0 0
v 1 1 0
v 0 1 0
v 0 0 1
v 1 0 1
v 1 1 1
v 0 1 1
f 1 4 3 2
f 5 6 7 8
f 1 2 6 5
f 2 3 7 6
f 3 4 8 7
f 4 1 5 8
";

fn cube() -> TriangleMesh<f64> {
    read_obj_from(CUBE_OBJ.as_bytes()).unwrap()
}

#[test]
fn cube_loads_as_twelve_outward_triangles() {
    let mesh = cube();
    assert_eq!(mesh.vertices.len(), 8);
    assert_eq!(mesh.triangle_count(), 12);

    let cache = TriangleInfoCache::new(&mesh);
    assert_relative_eq!(cache.total_area(), 6.0, epsilon = 1e-12);
    let center = Vector3d::new(0.5, 0.5, 0.5);
    for t in 0..mesh.triangle_count() {
        let outward = cache.centroids[t] - center;
        assert!(cache.normals[t].dot(&outward) > 0.0, "triangle {t} faces inward");
    }
}

#[test]
fn cube_winding_numbers() {
    let mesh = cube();
    assert_abs_diff_eq!(mesh_winding_number(&mesh, &Vector3d::new(0.3, 0.6, 0.5)), 1.0, epsilon = 1e-10);
    assert_abs_diff_eq!(mesh_winding_number(&mesh, &Vector3d::new(1.5, 0.5, 0.5)), 0.0, epsilon = 1e-10);

    let cache = TriangleInfoCache::new(&mesh);
    let all: Vec<usize> = (0..mesh.triangle_count()).collect();
    let fast = FastTriWinding::new(&mesh, &cache, &all).unwrap();
    assert!(fast.center.epsilon_equal(&Vector3d::new(0.5, 0.5, 0.5), 1e-12));

    let mut rng = StdRng::seed_from_u64(17);
    for _ in 0..50 {
        let q = Vector3d::new(
            rng.random_range(-0.5..1.5),
            rng.random_range(-0.5..1.5),
            rng.random_range(-0.5..1.5),
        );
        let exact = mesh_winding_number(&mesh, &q);
        // beta large enough that nearby points always take the exact path.
        assert_abs_diff_eq!(fast.winding_number(&mesh, &q, 10.0), exact, epsilon = 1e-12);
    }

    let far = Vector3d::new(30.0, -20.0, 25.0);
    assert_abs_diff_eq!(fast.winding_number(&mesh, &far, 2.0), 0.0, epsilon = 1e-9);
}

#[test]
fn split_clusters_sum_to_the_whole() {
    let mesh = cube();
    let cache = TriangleInfoCache::new(&mesh);
    let left = FastTriWinding::new(&mesh, &cache, &[0, 1, 2, 3, 4, 5]).unwrap();
    let right = FastTriWinding::new(&mesh, &cache, &[6, 7, 8, 9, 10, 11]).unwrap();
    let q = Vector3d::new(400.0, 150.0, -100.0);
    let exact = left.exact_eval(&mesh, &q) + right.exact_eval(&mesh, &q);
    assert_abs_diff_eq!(exact, mesh_winding_number(&mesh, &q), epsilon = 1e-12);
    let approx = left.evaluate_order2(&q) + right.evaluate_order2(&q);
    assert_abs_diff_eq!(approx, exact, epsilon = 1e-10);
    assert_abs_diff_eq!(left.evaluate_order2(&q), left.exact_eval(&mesh, &q), epsilon = 1e-10);
}

#[test]
fn bounds_of_cube_and_subsets() {
    let mesh = cube();
    let b = bounds_of_mesh(&mesh);
    assert_eq!(b.min, Vector3d::zero());
    assert_eq!(b.max, Vector3d::new(1.0, 1.0, 1.0));

    // Bottom face triangles only.
    let bottom = bounds_of_triangles(&mesh, [0, 1]);
    assert_eq!(bottom.max.z(), 0.0);
    assert_eq!(bottom.volume(), 0.0);

    // A frame rotated a quarter turn about z swaps the x and y extents.
    let frame = Frame3d::with_rotation(Vector3d::new(1.0, 0.0, 0.0), Quaterniond::from_axis_angle_deg(&Vector3d::unit_z(), 90.0));
    let local = bounds_in_frame(&mesh, &frame);
    assert!(local.min.epsilon_equal(&Vector3d::new(0.0, 0.0, 0.0), 1e-12));
    assert!(local.max.epsilon_equal(&Vector3d::new(1.0, 1.0, 1.0), 1e-12));

    let empty = PointSet::<f64>::new(Vec::new());
    assert!(bounds_of_points(&empty).is_empty());
    assert!(matches!(try_bounds_of_points(&empty), Err(GeometryError::EmptyInput)));
}

#[test]
fn nearest_triangle_on_cube() {
    let mesh = cube();
    let hit = nearest_triangle(&mesh, &Vector3d::new(0.25, 0.5, 3.0)).unwrap();
    assert_relative_eq!(hit.distance(), 2.0, epsilon = 1e-12);
    assert_abs_diff_eq!(hit.closest.z(), 1.0, epsilon = 1e-12);
    let tri = mesh.triangle(hit.triangle);
    assert!(tri.point_at(&hit.bary_coords).epsilon_equal(&hit.closest, 1e-12));
}

#[test]
fn obj_file_round_trip() {
    let mesh = cube();
    let path = std::env::temp_dir().join(format!("geoprim-cube-{}.obj", std::process::id()));
    write_obj(&mesh, &path).unwrap();
    let back: TriangleMesh<f64> = read_obj(&path).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert_eq!(back, mesh);

    let missing = std::env::temp_dir().join("geoprim-definitely-missing.obj");
    assert!(matches!(read_obj::<f64, _>(&missing), Err(GeometryError::Io(_))));
}

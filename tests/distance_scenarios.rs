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
    DistanceQuery,
    distance::{
        DistLine3Line3, DistLine3Segment3, DistLine3Triangle3, DistPoint2Circle2, DistPoint3Box3,
        DistPoint3Circle3, DistPoint3Cylinder3, DistPoint3Triangle3, DistPointAabb, DistRay3Ray3,
        DistRay3Segment3, DistSegment2Segment2, DistSegment3Segment3, PointTriangleRegion,
        RayRayRegion, RaySegmentRegion, SegmentSegmentRegion,
    },
    geometry::{
        AxisAlignedBox3d, Box3d, Circle2d, Circle3d, Cylinder3d, Frame3d, Line3d, Quaterniond,
        Ray3d, Segment2d, Segment3d, Segment3f, Triangle3d, Vector2d, Vector3d, Vector3f,
    },
};
use rand::{Rng, SeedableRng, rngs::StdRng};
use rug::Rational;

#[test]
fn crossing_segment2_pair_has_zero_distance() {
    let a = Segment2d::new(&Vector2d::new(0.0, 0.0), &Vector2d::new(2.0, 0.0));
    let b = Segment2d::new(&Vector2d::new(1.0, 1.0), &Vector2d::new(1.0, -1.0));
    let mut q = DistSegment2Segment2::new(a, b);
    assert_eq!(q.get(), 0.0);
    assert_eq!(q.segment0_closest, Vector2d::new(1.0, 0.0));
    assert_eq!(q.segment1_closest, Vector2d::new(1.0, 0.0));
    assert_eq!(q.region, SegmentSegmentRegion::Interior);
}

#[test]
fn line3_segment3_scenario() {
    let line = Line3d::new(Vector3d::zero(), Vector3d::unit_z());
    let segment = Segment3d::new(&Vector3d::new(5.0, 0.0, -1.0), &Vector3d::new(5.0, 0.0, 1.0));
    let mut q = DistLine3Segment3::new(line, segment);
    assert_eq!(q.get_squared(), 25.0);
    assert_eq!(q.line_parameter, 0.0);
    assert_eq!(q.segment_parameter, 0.0);
    assert_eq!(q.line_closest, Vector3d::zero());
    assert_eq!(q.segment_closest, Vector3d::new(5.0, 0.0, 0.0));
}

fn reference_triangle() -> Triangle3d {
    Triangle3d::new(
        Vector3d::new(0.0, 0.0, 0.0),
        Vector3d::new(4.0, 0.0, 0.0),
        Vector3d::new(0.0, 4.0, 0.0),
    )
}

#[test]
fn point_inside_triangle_is_zero() {
    let tri = reference_triangle();

    let mut q = DistPoint3Triangle3::new(Vector3d::new(1.0, 1.0, 0.0), tri);
    assert_eq!(q.get_squared(), 0.0);
    assert_eq!(q.region, PointTriangleRegion::Interior);

    q.set_point(tri.centroid());
    assert_abs_diff_eq!(q.get(), 0.0, epsilon = 1e-12);
    let bary = q.triangle_bary_coords;
    assert_relative_eq!(bary[0] + bary[1] + bary[2], 1.0, epsilon = 1e-12);
    assert!(bary.iter().all(|&b| b >= 0.0));
    assert!(q.triangle_closest.epsilon_equal(&tri.centroid(), 1e-12));
}

#[test]
fn line_through_triangle_is_zero() {
    let tri = reference_triangle();
    let centroid = tri.centroid();
    let line = Line3d::new(centroid + Vector3d::new(0.0, 0.0, 5.0), -Vector3d::unit_z());
    let mut q = DistLine3Triangle3::new(line, tri);
    assert_eq!(q.get_squared(), 0.0);
    assert!(q.line_closest.epsilon_equal(&centroid, 1e-12));
    assert!(q.triangle_closest.epsilon_equal(&centroid, 1e-12));
    let bary = q.triangle_bary_coords;
    assert_relative_eq!(bary[0] + bary[1] + bary[2], 1.0, epsilon = 1e-12);
    assert!(bary.iter().all(|&b| b >= 0.0));
    assert_relative_eq!(q.line_parameter, 5.0, epsilon = 1e-12);

    // Oblique line through an interior point.
    let dir = Vector3d::new(1.0, 2.0, 3.0).normalized();
    let hit = Vector3d::new(1.0, 1.0, 0.0);
    let mut q = DistLine3Triangle3::new(Line3d::new(hit - dir * 2.0, dir), tri);
    assert_eq!(q.get_squared(), 0.0);
    assert!(q.triangle_closest.epsilon_equal(&hit, 1e-12));
}

#[test]
fn line_missing_triangle_uses_nearest_edge() {
    let tri = reference_triangle();
    // Parallel to the plane, one unit above, running past the hypotenuse.
    let line = Line3d::new(Vector3d::new(5.0, 5.0, 1.0), Vector3d::new(1.0, -1.0, 0.0).normalized());
    let mut q = DistLine3Triangle3::new(line, tri);
    // The line sits on x + y = 10, six over root two from the hypotenuse
    // x + y = 4 in the plane, and one unit above it.
    assert_relative_eq!(q.get_squared(), 19.0, epsilon = 1e-9);
    assert_abs_diff_eq!(q.triangle_closest[0] + q.triangle_closest[1], 4.0, epsilon = 1e-9);
}

#[test]
fn point_box_inside_and_offset_along_axis() {
    let center = Vector3d::new(1.0, -2.0, 0.5);
    let axes = [Vector3d::unit_x(), Vector3d::unit_y(), Vector3d::unit_z()];
    let extent = Vector3d::new(1.0, 2.0, 3.0);
    let b = Box3d::new(center, axes, extent);

    let mut q = DistPoint3Box3::new(center + Vector3d::new(0.5, -1.0, 2.0), b);
    assert_eq!(q.get(), 0.0);

    let d = 0.75;
    q.set_point(center + axes[0] * (extent[0] + d));
    assert_eq!(q.get(), d);
    assert_eq!(q.box_closest, center + axes[0] * extent[0]);

    // Same check on a rotated box built from a frame.
    let frame = Frame3d::with_rotation(center, Quaterniond::from_axis_angle_deg(&Vector3d::new(1.0, 1.0, 0.0).normalized(), 30.0));
    let rotated = Box3d::from_frame(&frame, extent);
    let p = center + rotated.axis(0) * (extent[0] + d);
    assert_relative_eq!(DistPoint3Box3::min_distance(p, rotated), d, epsilon = 1e-12);
}

fn dyadic(rng: &mut StdRng, lo: i32, hi: i32) -> (f64, Rational) {
    let k = rng.random_range(lo..=hi);
    (k as f64 / 8.0, Rational::from((k, 8)))
}

#[test]
fn point_box_matches_exact_rational_oracle() {
    let mut rng = StdRng::seed_from_u64(0xb0c5);
    let axes = [Vector3d::unit_x(), Vector3d::unit_y(), Vector3d::unit_z()];
    for _ in 0..200 {
        let mut center = Vector3d::zero();
        let mut extent = Vector3d::zero();
        let mut point = Vector3d::zero();
        let mut exact = Rational::from(0);
        for i in 0..3 {
            let (c, cr) = dyadic(&mut rng, -40, 40);
            let (e, er) = dyadic(&mut rng, 1, 24);
            let (p, pr) = dyadic(&mut rng, -80, 80);
            center[i] = c;
            extent[i] = e;
            point[i] = p;

            let offset = Rational::from(&pr - &cr);
            let excess = if offset > er {
                Rational::from(&offset - &er)
            } else if offset < -er.clone() {
                Rational::from(&offset + &er)
            } else {
                Rational::from(0)
            };
            exact += Rational::from(&excess * &excess);
        }

        let mut obb = DistPoint3Box3::new(point, Box3d::new(center, axes, extent));
        let got = Rational::from_f64(obb.get_squared()).expect("finite");
        assert_eq!(got, exact);

        let aabb = AxisAlignedBox3d::new(center - extent, center + extent);
        let mut q = DistPointAabb::new(point, aabb);
        let got = Rational::from_f64(q.get_squared()).expect("finite");
        assert_eq!(got, exact);
    }
}

#[test]
fn point_at_circle_center_is_equidistant() {
    let circle = Circle3d::new(Vector3d::new(1.0, 2.0, 3.0), Vector3d::unit_z(), 2.5);
    let mut q = DistPoint3Circle3::new(circle.center, circle);
    assert_relative_eq!(q.get(), 2.5, epsilon = 1e-12);
    assert!(q.all_circle_points_equidistant);
    assert_relative_eq!(q.circle_closest.distance(&circle.center), 2.5, epsilon = 1e-12);

    // Off-center points clear the flag again.
    q.set_point(circle.center + Vector3d::new(0.0, 1.0, 4.0));
    assert_relative_eq!(q.get(), (1.5f64 * 1.5 + 16.0).sqrt(), epsilon = 1e-12);
    assert!(!q.all_circle_points_equidistant);

    let mut q2 = DistPoint2Circle2::new(Vector2d::new(3.0, 4.0), Circle2d::new(Vector2d::new(3.0, 4.0), 1.0));
    assert_eq!(q2.get(), 1.0);
    assert!(q2.all_circle_points_equidistant);
}

#[test]
fn point_cylinder_inside_and_radial_offset() {
    let (radius, height) = (1.5, 4.0);
    let origin = Vector3d::new(1.0, -2.0, 3.0);
    let axis = Line3d::new(origin, Vector3d::new(0.0, 0.6, 0.8));
    let cylinder = Cylinder3d::new(axis, radius, height);

    let mut q = DistPoint3Cylinder3::new(origin, cylinder);
    q.compute();
    assert!(q.is_inside());
    assert_eq!(q.solid_distance(), 0.0);
    assert!(q.signed_distance < 0.0);

    let (radial, _) = Vector3d::generate_complement_basis(&axis.direction);
    let d = 0.25;
    q.set_point(origin + radial * (radius + d));
    assert_relative_eq!(q.get(), d, epsilon = 1e-12);
    assert_relative_eq!(q.signed_distance, d, epsilon = 1e-12);
    assert!(!q.is_inside());
    assert_relative_eq!(q.solid_distance(), d, epsilon = 1e-12);

    // Level with the top cap.
    let cap = origin + axis.direction * (0.5 * height);
    q.set_point(cap + radial * (radius + d));
    assert_relative_eq!(q.signed_distance, d, epsilon = 1e-12);
}

#[test]
fn ray_regions() {
    let segment = Segment3d::new(&Vector3d::new(2.0, 1.0, -1.0), &Vector3d::new(2.0, 1.0, 1.0));

    let mut toward = DistRay3Segment3::new(Ray3d::new(Vector3d::zero(), Vector3d::unit_x()), segment);
    assert_eq!(toward.get_squared(), 1.0);
    assert_eq!(toward.region, RaySegmentRegion::Interior);
    assert_eq!(toward.ray_parameter, 2.0);

    let mut away = DistRay3Segment3::new(Ray3d::new(Vector3d::zero(), -Vector3d::unit_x()), segment);
    assert_eq!(away.get_squared(), 5.0);
    assert_eq!(away.region, RaySegmentRegion::RayOrigin);
    assert_eq!(away.region.number(), Some(3));
    assert_eq!(away.ray_closest, Vector3d::zero());

    let r0 = Ray3d::new(Vector3d::zero(), Vector3d::unit_x());
    let r1 = Ray3d::new(Vector3d::new(-3.0, 0.0, 1.0), Vector3d::unit_y());
    let mut rr = DistRay3Ray3::new(r0, r1);
    assert_eq!(rr.get_squared(), 10.0);
    assert_eq!(rr.region, RayRayRegion::Ray0Origin);
    assert_eq!(rr.ray1_closest, r1.origin);
}

#[test]
fn parallel_lines_report_offset() {
    let l0 = Line3d::new(Vector3d::zero(), Vector3d::unit_x());
    let l1 = Line3d::new(Vector3d::new(7.0, 3.0, 4.0), -Vector3d::unit_x());
    let mut q = DistLine3Line3::new(l0, l1);
    assert_eq!(q.get(), 5.0);
    assert_eq!(q.line1_parameter, 0.0);
    assert_eq!(q.line0_closest, Vector3d::new(7.0, 0.0, 0.0));
}

#[test]
fn single_precision_queries() {
    let a = Segment3f::new(&Vector3f::new(0.0, 0.0, 0.0), &Vector3f::new(2.0, 0.0, 0.0));
    let b = Segment3f::new(&Vector3f::new(1.0, 1.0, 3.0), &Vector3f::new(1.0, -1.0, 3.0));
    let mut q = DistSegment3Segment3::new(a, b);
    assert_relative_eq!(q.get(), 3.0f32, epsilon = 1e-6);

    // Widening is explicit and lossless.
    let wide = q.segment0_closest.to_f64();
    assert_relative_eq!(wide[0], 1.0, epsilon = 1e-6);
}

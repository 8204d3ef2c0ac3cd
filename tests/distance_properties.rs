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

use std::collections::HashSet;

use approx::assert_relative_eq;
use geoprim::{
    DistanceQuery,
    distance::{
        DistLine3Line3, DistLine3Segment3, DistLine3Triangle3, DistPoint3Box3, DistPoint3Cylinder3,
        DistPoint3Triangle3, DistRay3Ray3, DistRay3Segment3, DistSegment3Segment3,
        DistSegment3Triangle3, DistTriangle3Triangle3, SegmentSegmentRegion,
    },
    geometry::{Box3d, Cylinder3d, Line3d, Ray3d, Segment3d, Triangle3d, Vector3d},
};
use rand::{Rng, SeedableRng, rngs::StdRng};

fn random_point(rng: &mut StdRng) -> Vector3d {
    Vector3d::new(
        rng.random_range(-5.0..5.0),
        rng.random_range(-5.0..5.0),
        rng.random_range(-5.0..5.0),
    )
}

fn random_direction(rng: &mut StdRng) -> Vector3d {
    loop {
        let v = random_point(rng);
        if v.length() > 1e-3 {
            return v.normalized();
        }
    }
}

fn random_segment(rng: &mut StdRng) -> Segment3d {
    Segment3d::new(&random_point(rng), &random_point(rng))
}

fn random_triangle(rng: &mut StdRng) -> Triangle3d {
    Triangle3d::new(random_point(rng), random_point(rng), random_point(rng))
}

#[test]
fn segment_segment_is_symmetric() {
    let mut rng = StdRng::seed_from_u64(0x5e95);
    for _ in 0..500 {
        let a = random_segment(&mut rng);
        let b = random_segment(&mut rng);
        let ab = DistSegment3Segment3::min_distance(a, b);
        let ba = DistSegment3Segment3::min_distance(b, a);
        assert_relative_eq!(ab, ba, epsilon = 1e-9, max_relative = 1e-9);
    }
}

#[test]
fn parallel_segments_are_symmetric() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..200 {
        let dir = random_direction(&mut rng);
        let offset = random_point(&mut rng);
        let a = Segment3d::from_center(random_point(&mut rng), dir, rng.random_range(0.0..3.0));
        let flip = if rng.random_bool(0.5) { -1.0 } else { 1.0 };
        let b = Segment3d::from_center(a.center + offset, dir * flip, rng.random_range(0.0..3.0));

        let mut q0 = DistSegment3Segment3::new(a, b);
        let mut q1 = DistSegment3Segment3::new(b, a);
        let ab = q0.get();
        let ba = q1.get();
        assert_eq!(q0.region, SegmentSegmentRegion::Parallel);
        assert_eq!(q1.region, SegmentSegmentRegion::Parallel);
        assert_relative_eq!(ab, ba, epsilon = 1e-9, max_relative = 1e-9);
        // The reported closest points realise the reported distance.
        assert_relative_eq!(
            q0.segment0_closest.distance(&q0.segment1_closest),
            ab,
            epsilon = 1e-9
        );
    }
}

#[test]
fn degenerate_parallel_points_do_not_produce_nan() {
    let p = Vector3d::new(1.0, 2.0, 3.0);
    let a = Segment3d::from_center(p, Vector3d::unit_x(), 0.0);
    let b = Segment3d::from_center(p + Vector3d::unit_y(), Vector3d::unit_x(), 0.0);
    let mut q = DistSegment3Segment3::new(a, b);
    assert_eq!(q.get(), 1.0);
    assert_eq!(q.segment1_parameter, 0.0);
}

#[test]
fn squared_distances_are_never_negative() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..300 {
        let p = random_point(&mut rng);
        let line = Line3d::new(random_point(&mut rng), random_direction(&mut rng));
        let ray = Ray3d::new(random_point(&mut rng), random_direction(&mut rng));
        let seg = random_segment(&mut rng);
        let tri = random_triangle(&mut rng);

        // A line parallel to the first one, so the parallel branches run too.
        let parallel = Line3d::new(line.origin + random_point(&mut rng), line.direction);
        let parallel_ray = Ray3d::new(ray.origin + random_point(&mut rng), -ray.direction);

        let values = [
            DistLine3Line3::new(line, parallel).get_squared(),
            DistLine3Line3::new(line, Line3d::new(random_point(&mut rng), random_direction(&mut rng)))
                .get_squared(),
            DistLine3Segment3::new(line, seg).get_squared(),
            DistRay3Ray3::new(ray, parallel_ray).get_squared(),
            DistRay3Segment3::new(ray, seg).get_squared(),
            DistSegment3Segment3::new(seg, random_segment(&mut rng)).get_squared(),
            DistPoint3Triangle3::new(p, tri).get_squared(),
            DistLine3Triangle3::new(line, tri).get_squared(),
            DistSegment3Triangle3::new(seg, tri).get_squared(),
            DistTriangle3Triangle3::new(tri, random_triangle(&mut rng)).get_squared(),
            DistPoint3Box3::new(
                p,
                Box3d::new(
                    random_point(&mut rng),
                    [Vector3d::unit_x(), Vector3d::unit_y(), Vector3d::unit_z()],
                    Vector3d::new(1.0, 2.0, 0.5),
                ),
            )
            .get_squared(),
            DistPoint3Cylinder3::new(
                p,
                Cylinder3d::new(
                    Line3d::new(random_point(&mut rng), random_direction(&mut rng)),
                    rng.random_range(0.1..2.0),
                    rng.random_range(0.1..4.0),
                ),
            )
            .get_squared(),
        ];
        for v in values {
            assert!(v >= 0.0, "negative squared distance {v}");
        }
    }
}

#[test]
fn repeated_get_squared_is_idempotent() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut q = DistSegment3Triangle3::new(random_segment(&mut rng), random_triangle(&mut rng));
    assert!(!q.is_computed());
    let first = q.get_squared();
    let closest = (q.segment_closest, q.triangle_closest, q.segment_parameter);
    assert!(q.is_computed());

    let second = q.get_squared();
    assert_eq!(first.to_bits(), second.to_bits());
    assert_eq!(closest, (q.segment_closest, q.triangle_closest, q.segment_parameter));
    assert_eq!(q.get(), first.sqrt());
}

#[test]
fn setters_invalidate_the_cache() {
    let a = Segment3d::new(&Vector3d::new(0.0, 0.0, 0.0), &Vector3d::new(2.0, 0.0, 0.0));
    let b = Segment3d::new(&Vector3d::new(1.0, 1.0, 0.0), &Vector3d::new(1.0, 3.0, 0.0));
    let mut q = DistSegment3Segment3::new(a, b);
    assert_eq!(q.get_squared(), 1.0);

    let moved = Segment3d::new(&Vector3d::new(1.0, 4.0, 0.0), &Vector3d::new(1.0, 6.0, 0.0));
    q.set_segment1(moved);
    assert!(!q.is_computed());
    assert_eq!(q.get_squared(), 16.0);
    assert_eq!(q.segment1(), &moved);

    let mut p = DistPoint3Triangle3::new(
        Vector3d::new(0.0, 0.0, 1.0),
        Triangle3d::new(Vector3d::zero(), Vector3d::unit_x(), Vector3d::unit_y()),
    );
    assert_eq!(p.get_squared(), 1.0);
    p.set_point(Vector3d::new(0.0, 0.0, 3.0));
    assert_eq!(p.get_squared(), 9.0);
}

#[test]
fn segment_distance_is_continuous_across_regions() {
    // Segment B is parallel to z, offset in y, and its lower end sits above
    // segment A, so sliding it along x walks through
    // Corner0Min1Min -> Side1Min -> Corner0Max1Min.
    let a = Segment3d::new(&Vector3d::new(0.0, 0.0, 0.0), &Vector3d::new(2.0, 0.0, 0.0));
    let step = 0.01;
    let mut regions = HashSet::new();
    let mut previous: Option<f64> = None;
    for i in 0..=400 {
        let x = -1.0 + step * i as f64;
        let b = Segment3d::new(&Vector3d::new(x, 1.0, 0.5), &Vector3d::new(x, 1.0, 2.0));
        let mut q = DistSegment3Segment3::new(a, b);
        let d = q.get();
        regions.insert(q.region);
        if let Some(prev) = previous {
            // Translating B by `step` moves the distance by at most `step`.
            assert!((d - prev).abs() <= step + 1e-12, "jump at x = {x}: {prev} -> {d}");
        }
        previous = Some(d);
    }
    assert!(regions.contains(&SegmentSegmentRegion::Corner0Min1Min));
    assert!(regions.contains(&SegmentSegmentRegion::Side1Min));
    assert!(regions.contains(&SegmentSegmentRegion::Corner0Max1Min));

    // Crossing segments: Side0Min -> Interior -> Side0Max.
    let mut regions = HashSet::new();
    let mut previous: Option<f64> = None;
    for i in 0..=400 {
        let x = -1.0 + step * i as f64;
        let b = Segment3d::new(&Vector3d::new(x, 1.0, -1.0), &Vector3d::new(x, 1.0, 1.0));
        let mut q = DistSegment3Segment3::new(a, b);
        let d = q.get();
        regions.insert(q.region);
        if let Some(prev) = previous {
            assert!((d - prev).abs() <= step + 1e-12, "jump at x = {x}: {prev} -> {d}");
        }
        previous = Some(d);
    }
    assert!(regions.contains(&SegmentSegmentRegion::Side0Min));
    assert!(regions.contains(&SegmentSegmentRegion::Interior));
    assert!(regions.contains(&SegmentSegmentRegion::Side0Max));
}

#[test]
fn triangle_pair_is_symmetric() {
    let mut rng = StdRng::seed_from_u64(99);
    for _ in 0..100 {
        let t0 = random_triangle(&mut rng);
        let t1 = random_triangle(&mut rng);
        let d01 = DistTriangle3Triangle3::min_distance(t0, t1);
        let d10 = DistTriangle3Triangle3::min_distance(t1, t0);
        assert_relative_eq!(d01, d10, epsilon = 1e-7, max_relative = 1e-7);
    }
}

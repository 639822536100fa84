//! Property tests for lattice geometry

use fleet_tactics::spatial::*;
use proptest::prelude::*;

fn coord() -> impl Strategy<Value = i32> {
    -1000i32..1000
}

fn vector() -> impl Strategy<Value = Vector> {
    (coord(), coord(), coord()).prop_map(|(x, y, z)| Vector::new(x, y, z))
}

proptest! {
    #[test]
    fn metrics_are_symmetric_and_non_negative(a in vector(), b in vector()) {
        let ab = b - a;
        let ba = a - b;
        prop_assert!(chebyshev(ab) >= 0);
        prop_assert_eq!(chebyshev(ab), chebyshev(ba));
        prop_assert_eq!(manhattan(ab), manhattan(ba));
        prop_assert_eq!(distance(a, b), distance(b, a));
        prop_assert_eq!(chebyshev(ab) == 0, a == b);
        prop_assert_eq!(manhattan(ab) == 0, a == b);
        prop_assert_eq!(distance(a, b) == 0.0, a == b);
    }

    #[test]
    fn metrics_are_ordered(v in vector()) {
        let c = chebyshev(v) as f64;
        let e = euclidean(v);
        let m = manhattan(v) as f64;
        prop_assert!(c <= e + 1e-9);
        prop_assert!(e <= m + 1e-9);
    }

    #[test]
    fn vector_text_round_trips(v in vector()) {
        let parsed: Vector = v.to_string().parse().unwrap();
        prop_assert_eq!(parsed, v);
    }

    #[test]
    fn raster_hits_both_endpoints(a in vector(), b in vector()) {
        let path = rasterize(a, b);
        prop_assert_eq!(path.first(), Some(&a));
        prop_assert_eq!(path.last(), Some(&b));
        prop_assert_eq!(path.len() as i64, chebyshev(b - a) + 1);
    }

    #[test]
    fn raster_steps_are_unit_moves(a in vector(), b in vector()) {
        let path = rasterize(a, b);
        for pair in path.windows(2) {
            prop_assert_eq!(chebyshev(pair[1] - pair[0]), 1);
        }
    }

    #[test]
    fn raster_driving_axis_is_monotonic(a in vector(), b in vector()) {
        let d = b - a;
        let (dx, dy, dz) = (d.x.abs(), d.y.abs(), d.z.abs());
        let axis = if dx >= dy && dx >= dz { 0 } else if dy >= dz { 1 } else { 2 };
        let path = rasterize(a, b);
        for pair in path.windows(2) {
            let step = pair[1].coords()[axis] - pair[0].coords()[axis];
            prop_assert_eq!(step, (b.coords()[axis] - a.coords()[axis]).signum());
        }
    }

    #[test]
    fn raster_cap_is_a_prefix(a in vector(), b in vector(), cap in 1usize..50) {
        let full = rasterize(a, b);
        let capped = rasterize_capped(a, b, LengthCap::at_most(cap));
        prop_assert_eq!(capped.len(), full.len().min(cap));
        prop_assert_eq!(&full[..capped.len()], &capped[..]);
    }

    #[test]
    fn formation_stays_on_the_ring(
        center in vector(),
        count in 0usize..40,
        offset in -100i32..100,
        flip in any::<bool>(),
    ) {
        let side = if flip { -1 } else { 1 };
        let points: Vec<Vector> = formation(center, count, offset, side).collect();
        prop_assert!(points.len() <= count);
        prop_assert!(points.len() <= RING_OFFSETS.len());
        for p in &points {
            let r = distance(center, *p);
            prop_assert!((3.7..=4.25).contains(&r), "radius {}", r);
        }

        let mirrored: Vec<Vector> = formation(center, count, offset, -side).collect();
        for (p, q) in points.iter().zip(&mirrored) {
            prop_assert_eq!(*p - center, center - *q);
        }
    }

    #[test]
    fn formation_points_are_distinct(count in 1usize..=15, offset in -30i32..30) {
        let mut points: Vec<Vector> = formation(Vector::splat(15), count, offset, 1).collect();
        let n = points.len();
        points.sort();
        points.dedup();
        prop_assert_eq!(points.len(), n);
    }
}

#[test]
fn scenario_rasterize_known_line() {
    let path = rasterize(Vector::new(0, 0, 0), Vector::new(4, 2, 0));
    assert_eq!(path.len(), 5);
    assert_eq!(path[4], Vector::new(4, 2, 0));
}

#[test]
fn scenario_five_ship_formation() {
    let center = Vector::splat(15);
    let mut points: Vec<Vector> = formation(center, 5, 0, 1).collect();
    assert_eq!(points.len(), 5);
    points.sort();
    points.dedup();
    assert_eq!(points.len(), 5);
    for p in points {
        let r = distance(center, p);
        assert!((3.7..=4.25).contains(&r));
    }
}

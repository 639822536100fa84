//! Ring formation layout
//!
//! Spreads a fleet over a fixed discrete ring around a center point. The
//! ring is a table of lattice offsets; a fleet of `n` ships takes every
//! `k / n`-th entry starting from a rotation offset.

use crate::spatial::vector::Vector;

/// Ring of lattice offsets around the origin.
///
/// Every entry lies on the plane x + y + z = 4, at Chebyshev distance 3 or
/// 4 and Euclidean distance between ~3.7 and ~4.2 from the origin.
pub const RING_OFFSETS: [Vector; 15] = [
    Vector::new(-1, 2, 3),
    Vector::new(-1, 3, 2),
    Vector::new(-1, 4, 1),
    Vector::new(0, 4, 0),
    Vector::new(1, 4, -1),
    Vector::new(2, 3, -1),
    Vector::new(3, 2, -1),
    Vector::new(4, 1, -1),
    Vector::new(4, 0, 0),
    Vector::new(4, -1, 1),
    Vector::new(3, -1, 2),
    Vector::new(2, -1, 3),
    Vector::new(1, -1, 4),
    Vector::new(0, 0, 4),
    Vector::new(-1, 1, 4),
];

/// Lazy, re-iterable sequence of formation points
///
/// Holds no state beyond its cursor: cloning it or building it again
/// with the same arguments reproduces the same points.
#[derive(Debug, Clone)]
pub struct FormationPoints {
    center: Vector,
    side: i32,
    index: i64,
    end: i64,
    step: i64,
    remaining: usize,
}

/// Points for `count` ships around `center`.
///
/// `offset` rotates the ring, `side` (+1 / -1) mirrors it through the
/// center. The stride is `k / count` (integer division) so uneven counts
/// may leave gaps in the ring; at most `count` points are produced and
/// never more than the ring has entries.
pub fn formation(center: Vector, count: usize, offset: i32, side: i32) -> FormationPoints {
    let k = RING_OFFSETS.len();
    let step = if count == 0 { 1 } else { (k / count).max(1) };
    let start = i64::from(offset);

    FormationPoints {
        center,
        side,
        index: start,
        end: start + k as i64,
        step: step as i64,
        remaining: count,
    }
}

impl Iterator for FormationPoints {
    type Item = Vector;

    fn next(&mut self) -> Option<Vector> {
        if self.remaining == 0 || self.index >= self.end {
            return None;
        }

        let slot = self.index.rem_euclid(RING_OFFSETS.len() as i64) as usize;
        self.index += self.step;
        self.remaining -= 1;

        Some(self.center + RING_OFFSETS[slot] * self.side)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left_in_ring = ((self.end - self.index).max(0) + self.step - 1) / self.step;
        let n = (left_in_ring as usize).min(self.remaining);
        (n, Some(n))
    }
}

impl ExactSizeIterator for FormationPoints {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spatial::metric::chebyshev;

    const RING_PLANE_SUM: i32 = 4;

    #[test]
    fn test_ring_offsets_share_a_plane() {
        for offset in RING_OFFSETS {
            assert_eq!(offset.x + offset.y + offset.z, RING_PLANE_SUM);
            let r = chebyshev(offset);
            assert!((3..=4).contains(&r), "offset {} has radius {}", offset, r);
        }
    }

    #[test]
    fn test_five_ships_take_every_third_slot() {
        let center = Vector::splat(15);
        let points: Vec<Vector> = formation(center, 5, 0, 1).collect();
        let expected: Vec<Vector> = [0, 3, 6, 9, 12]
            .iter()
            .map(|&i| center + RING_OFFSETS[i])
            .collect();
        assert_eq!(points, expected);
    }

    #[test]
    fn test_side_mirrors_ring() {
        let center = Vector::splat(26);
        let near: Vec<Vector> = formation(center, 3, 0, 1).collect();
        let far: Vec<Vector> = formation(center, 3, 0, -1).collect();
        for (a, b) in near.iter().zip(&far) {
            assert_eq!(*a - center, -(*b - center));
        }
    }

    #[test]
    fn test_uneven_count_is_capped() {
        // k / 4 = 3 would visit 5 slots; only 4 points come out
        let points: Vec<Vector> = formation(Vector::ZERO, 4, 0, 1).collect();
        assert_eq!(points.len(), 4);
    }

    #[test]
    fn test_more_ships_than_slots() {
        let points: Vec<Vector> = formation(Vector::ZERO, 20, 0, 1).collect();
        assert_eq!(points.len(), RING_OFFSETS.len());
    }

    #[test]
    fn test_zero_ships() {
        assert_eq!(formation(Vector::ZERO, 0, 0, 1).count(), 0);
    }

    #[test]
    fn test_offset_rotates_and_wraps() {
        let rotated: Vec<Vector> = formation(Vector::ZERO, 1, 16, 1).collect();
        assert_eq!(rotated, vec![RING_OFFSETS[1]]);
        let negative: Vec<Vector> = formation(Vector::ZERO, 1, -1, 1).collect();
        assert_eq!(negative, vec![RING_OFFSETS[14]]);
    }

    #[test]
    fn test_reiterable() {
        let points = formation(Vector::splat(3), 5, 2, -1);
        let first: Vec<Vector> = points.clone().collect();
        let second: Vec<Vector> = points.collect();
        assert_eq!(first, second);
        assert_eq!(formation(Vector::splat(3), 5, 2, -1).len(), 5);
    }
}

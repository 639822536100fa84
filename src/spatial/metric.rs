//! Distance metrics over lattice vectors
//!
//! Integer metrics widen to i64 so that differences of extreme
//! coordinates cannot overflow.

use crate::spatial::vector::Vector;

/// Chebyshev length: max(|x|, |y|, |z|)
pub fn chebyshev(v: Vector) -> i64 {
    chebyshev_of(widen(v))
}

/// Manhattan length: |x| + |y| + |z|
pub fn manhattan(v: Vector) -> i64 {
    manhattan_of(widen(v))
}

/// Euclidean length. Only for range comparisons, never for equality.
pub fn euclidean(v: Vector) -> f64 {
    euclidean_of(widen(v))
}

/// Euclidean distance between two points
pub fn distance(a: Vector, b: Vector) -> f64 {
    euclidean_of(delta(a, b))
}

pub fn distance_chebyshev(a: Vector, b: Vector) -> i64 {
    chebyshev_of(delta(a, b))
}

pub fn distance_manhattan(a: Vector, b: Vector) -> i64 {
    manhattan_of(delta(a, b))
}

fn widen(v: Vector) -> [i64; 3] {
    v.coords().map(i64::from)
}

/// `b - a` per axis, in i64
fn delta(a: Vector, b: Vector) -> [i64; 3] {
    let (a, b) = (widen(a), widen(b));
    [b[0] - a[0], b[1] - a[1], b[2] - a[2]]
}

fn chebyshev_of(d: [i64; 3]) -> i64 {
    d.iter().map(|c| c.abs()).max().unwrap_or(0)
}

fn manhattan_of(d: [i64; 3]) -> i64 {
    d.iter().map(|c| c.abs()).sum()
}

fn euclidean_of(d: [i64; 3]) -> f64 {
    d.iter()
        .map(|c| {
            let c = *c as f64;
            c * c
        })
        .sum::<f64>()
        .sqrt()
}

impl Vector {
    pub fn chebyshev(self) -> i64 {
        chebyshev(self)
    }

    pub fn manhattan(self) -> i64 {
        manhattan(self)
    }

    pub fn euclidean(self) -> f64 {
        euclidean(self)
    }

    /// Euclidean distance to another point
    pub fn distance(self, other: Vector) -> f64 {
        distance(self, other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_lengths() {
        let v = Vector::new(3, -4, 12);
        assert_eq!(chebyshev(v), 12);
        assert_eq!(manhattan(v), 19);
        assert!((euclidean(v) - 13.0).abs() < 1e-12);
    }

    #[test]
    fn test_zero_vector() {
        assert_eq!(chebyshev(Vector::ZERO), 0);
        assert_eq!(manhattan(Vector::ZERO), 0);
        assert_eq!(euclidean(Vector::ZERO), 0.0);
    }

    #[test]
    fn test_extreme_coordinates_do_not_overflow() {
        let v = Vector::new(i32::MAX, i32::MIN + 1, i32::MAX);
        assert_eq!(manhattan(v), 3 * i64::from(i32::MAX));
        assert_eq!(chebyshev(v), i64::from(i32::MAX));
    }

    #[test]
    fn test_distance_between_points() {
        let a = Vector::new(0, 0, 0);
        let b = Vector::new(10, 0, 0);
        assert_eq!(a.distance(b), 10.0);
        assert_eq!(b.distance(a), 10.0);
        assert_eq!(distance_chebyshev(a, Vector::new(-3, 7, 1)), 7);
        assert_eq!(distance_manhattan(a, Vector::new(-3, 7, 1)), 11);
    }

    #[test]
    fn test_two_point_helpers_span_the_full_i32_range() {
        let lo = Vector::new(i32::MIN, 0, 0);
        let hi = Vector::new(i32::MAX, 0, 0);
        let span = i64::from(i32::MAX) - i64::from(i32::MIN);
        assert_eq!(distance_chebyshev(lo, hi), span);
        assert_eq!(distance_manhattan(hi, lo), span);
        assert!((distance(lo, hi) - span as f64).abs() < 1.0);
        assert_eq!(lo.distance(hi), hi.distance(lo));

        let corner = Vector::splat(i32::MIN);
        let opposite = Vector::splat(i32::MAX);
        assert_eq!(distance_manhattan(corner, opposite), 3 * span);
    }
}

//! Discrete 3D line rasterization (Bresenham)
//!
//! Produces the lattice path between two points. Used to reason about
//! lines of fire and straight movement paths.

use crate::spatial::vector::Vector;

/// Upper bound on the number of points a rasterized line may contain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LengthCap(Option<usize>);

impl LengthCap {
    /// No cap: the full path is produced
    pub const NONE: LengthCap = LengthCap(None);

    /// At most `n` points including the start; zero means no cap
    pub fn at_most(n: usize) -> Self {
        if n == 0 {
            Self::NONE
        } else {
            Self(Some(n))
        }
    }

    /// Signed form used by callers that mirror the wire model;
    /// non-positive values mean no cap
    pub fn from_signed(n: i64) -> Self {
        if n > 0 {
            Self::at_most(usize::try_from(n).unwrap_or(usize::MAX))
        } else {
            Self::NONE
        }
    }

    fn reached(self, len: usize) -> bool {
        matches!(self.0, Some(max) if len >= max)
    }
}

/// Index of the axis with the largest absolute delta plus the two
/// secondary axes in the order their error terms are evaluated.
fn axis_order(delta: [i64; 3]) -> (usize, usize, usize) {
    let [dx, dy, dz] = delta;
    if dx >= dy && dx >= dz {
        (0, 1, 2)
    } else if dy >= dx && dy >= dz {
        (1, 0, 2)
    } else {
        (2, 1, 0)
    }
}

/// Full lattice path from `from` to `to`, both endpoints included
pub fn rasterize(from: Vector, to: Vector) -> Vec<Vector> {
    rasterize_capped(from, to, LengthCap::NONE)
}

/// Lattice path from `from` toward `to`, truncated to `cap` points
pub fn rasterize_capped(from: Vector, to: Vector, cap: LengthCap) -> Vec<Vector> {
    let start = from.coords().map(i64::from);
    let end = to.coords().map(i64::from);

    let mut delta = [0i64; 3];
    let mut step = [0i64; 3];
    for axis in 0..3 {
        delta[axis] = (end[axis] - start[axis]).abs();
        step[axis] = (end[axis] - start[axis]).signum();
    }

    let (main, first, second) = axis_order(delta);

    let capacity = usize::try_from(delta[main]).unwrap_or(0).saturating_add(1);
    let mut points = Vec::with_capacity(match cap.0 {
        Some(max) => capacity.min(max),
        None => capacity,
    });

    let mut current = start;
    points.push(from);
    if cap.reached(points.len()) {
        return points;
    }

    // error terms of the two secondary axes
    let mut p1 = 2 * delta[first] - delta[main];
    let mut p2 = 2 * delta[second] - delta[main];

    while current[main] != end[main] {
        current[main] += step[main];
        if p1 >= 0 {
            current[first] += step[first];
            p1 -= 2 * delta[main];
        }
        if p2 >= 0 {
            current[second] += step[second];
            p2 -= 2 * delta[main];
        }
        p1 += 2 * delta[first];
        p2 += 2 * delta[second];

        points.push(to_vector(current));
        if cap.reached(points.len()) {
            break;
        }
    }

    points
}

fn to_vector(c: [i64; 3]) -> Vector {
    // every point lies between two i32 endpoints
    Vector::new(c[0] as i32, c[1] as i32, c[2] as i32)
}

/// True when no obstacle sits strictly between shooter and target
pub fn line_of_fire_clear(shooter: Vector, target: Vector, obstacles: &[Vector]) -> bool {
    let path = rasterize(shooter, target);
    if path.len() <= 2 {
        return true;
    }
    !path[1..path.len() - 1]
        .iter()
        .any(|point| obstacles.contains(point))
}

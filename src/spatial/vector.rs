//! Integer lattice vector shared by positions, velocities and offsets.
//!
//! Wire form is `"x/y/z"`; serde reads and writes that string directly.

use glam::DVec3;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};
use std::str::FromStr;

use crate::core::error::FleetError;

/// 3D integer vector (lattice point or lattice displacement)
///
/// The derived ordering is lexicographic over (x, y, z). It carries no
/// physical meaning and only exists for deterministic tie-breaking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Vector {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Vector {
    pub const ZERO: Vector = Vector { x: 0, y: 0, z: 0 };

    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Same value on every axis
    pub const fn splat(v: i32) -> Self {
        Self { x: v, y: v, z: v }
    }

    pub fn coords(self) -> [i32; 3] {
        [self.x, self.y, self.z]
    }

    pub fn from_coords(c: [i32; 3]) -> Self {
        Self::new(c[0], c[1], c[2])
    }

    /// Real-valued copy for intermediate computations
    pub fn as_dvec3(self) -> DVec3 {
        DVec3::new(self.x as f64, self.y as f64, self.z as f64)
    }

    /// Round a real-valued vector back onto the lattice (half away from zero)
    pub fn round_from(v: DVec3) -> Self {
        Self::new(v.x.round() as i32, v.y.round() as i32, v.z.round() as i32)
    }
}

impl Add for Vector {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vector {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<i32> for Vector {
    type Output = Self;
    fn mul(self, k: i32) -> Self {
        Self::new(self.x * k, self.y * k, self.z * k)
    }
}

impl Neg for Vector {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.x, self.y, self.z)
    }
}

impl FromStr for Vector {
    type Err = FleetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split('/').collect();
        if parts.len() != 3 {
            return Err(FleetError::Format(format!(
                "vector {:?} has {} components, expected 3",
                s,
                parts.len()
            )));
        }

        let mut coords = [0i32; 3];
        for (slot, part) in coords.iter_mut().zip(&parts) {
            *slot = part.trim().parse().map_err(|_| {
                FleetError::Format(format!(
                    "vector {:?} has non-integer component {:?}",
                    s, part
                ))
            })?;
        }

        Ok(Self::from_coords(coords))
    }
}

impl Serialize for Vector {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Vector {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

//! Particle-swarm style velocity step
//!
//! Each ship is a particle pulled toward two attractors: its own nearest
//! enemy (weak pull) and the fleet engagement target (strong pull).
//! Every term on every axis gets its own uniform draw in [0, 1).

use glam::DVec3;
use rand::Rng;

use crate::core::config::EngineConfig;
use crate::spatial::vector::Vector;

/// Attractor weights of the swarm step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwarmWeights {
    /// Pull toward the locally nearest enemy
    pub best: f64,
    /// Pull toward the engagement target
    pub main: f64,
}

impl SwarmWeights {
    pub fn from_config(config: &EngineConfig) -> Self {
        Self {
            best: config.best_particle_weight,
            main: config.main_particle_weight,
        }
    }
}

impl Default for SwarmWeights {
    fn default() -> Self {
        Self::from_config(&EngineConfig::default())
    }
}

/// Corrected velocity, rounded back onto the lattice.
///
/// Draws six numbers from `rng`: for each axis x, y, z in turn, one for
/// the nearest-enemy term and one for the target term.
pub fn velocity_correction<R: Rng + ?Sized>(
    velocity: Vector,
    position: Vector,
    nearest: Vector,
    target: Vector,
    weights: SwarmWeights,
    rng: &mut R,
) -> Vector {
    let mut r_best = [0.0f64; 3];
    let mut r_main = [0.0f64; 3];
    for axis in 0..3 {
        r_best[axis] = rng.gen::<f64>();
        r_main[axis] = rng.gen::<f64>();
    }

    let pos = position.as_dvec3();
    let to_nearest = nearest.as_dvec3() - pos;
    let to_target = target.as_dvec3() - pos;

    let corrected = velocity.as_dvec3()
        + weights.best * DVec3::from_array(r_best) * to_nearest
        + weights.main * DVec3::from_array(r_main) * to_target;

    Vector::round_from(corrected)
}

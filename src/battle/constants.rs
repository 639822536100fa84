//! Tactical constants - all tunable defaults in one place
//!
//! These feed `EngineConfig::default()`; a config file may override them.

// Phases
pub const DEFAULT_FORMATION_TURNS: u32 = 10;
pub const DEFAULT_ROTATION_STEP: i32 = 0;

// Weapons
pub const ATTACK_RANGE_FACTOR: f64 = 3.0; // slack for target movement

// Swarm step
pub const BEST_PARTICLE_WEIGHT: f64 = 0.1; // locally nearest enemy
pub const MAIN_PARTICLE_WEIGHT: f64 = 0.9; // fleet engagement target

// Map geometry
pub const DEFAULT_MAP_SIZE: i32 = 30;
pub const HOME_MARGIN: i32 = 3; // home corners at 3/3/3 and 26/26/26 on a 30 map

// Support
pub const HEAL_THRESHOLD: i32 = 80;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_main_pull_dominates() {
        assert!(MAIN_PARTICLE_WEIGHT > BEST_PARTICLE_WEIGHT);
    }

    #[test]
    fn test_home_corners_fit_on_default_map() {
        let far = DEFAULT_MAP_SIZE - 1 - HOME_MARGIN;
        assert_eq!(far, 26);
        assert!(HOME_MARGIN < far);
    }
}

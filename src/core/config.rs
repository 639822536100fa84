//! Engine configuration with documented constants
//!
//! All tuning numbers of the tactical engine are collected here. The
//! defaults give the stock fleet behavior; a TOML file can
//! override any subset of them.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::battle::constants::{
    ATTACK_RANGE_FACTOR, BEST_PARTICLE_WEIGHT, DEFAULT_FORMATION_TURNS, DEFAULT_MAP_SIZE,
    DEFAULT_ROTATION_STEP, HEAL_THRESHOLD, HOME_MARGIN, MAIN_PARTICLE_WEIGHT,
};
use crate::core::error::{FleetError, Result};

/// Configuration for the tactical engine and the turn loop
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    // === PHASES ===
    /// Number of battle turns spent moving into the ring formation
    ///
    /// After this many turns the fleet switches to swarm engagement.
    /// Zero skips the formation phase entirely.
    pub formation_turns: u32,

    /// Angular offset added to the formation ring after every formation turn
    ///
    /// Zero keeps the ring fixed; 1 rotates every slot by one ring step
    /// per turn.
    pub rotation_step: i32,

    // === WEAPONS ===
    /// Slack multiplier applied to a gun's radius before range gating
    ///
    /// Enemies move between the state snapshot and command execution,
    /// so attacks are issued while the target is still out of nominal
    /// range. At 3.0 a radius-5 gun fires at anything within 15 units.
    pub attack_range_factor: f64,

    // === SWARM ===
    /// Pull toward the locally nearest enemy
    pub best_particle_weight: f64,

    /// Pull toward the fleet-wide engagement target
    ///
    /// Should dominate `best_particle_weight` so the fleet focuses fire.
    pub main_particle_weight: f64,

    // === GEOMETRY ===
    /// Distance of the home formation center from the map corner
    pub home_margin: i32,

    /// Map edge length used until draft options tell otherwise
    pub default_map_size: i32,

    // === SUPPORT ===
    /// Allies below this health are candidates for healing
    pub heal_threshold: i32,

    // === DRAFT ===
    /// Complete ship templates to buy during the draft, in order
    ///
    /// Empty lets the server pick the fleet.
    pub draft_ships: Vec<String>,

    // === TURN LOOP ===
    /// Seed for the swarm random draws (OS entropy when absent)
    pub seed: Option<u64>,

    /// Abort on an undecodable input line instead of skipping the turn
    pub strict: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            formation_turns: DEFAULT_FORMATION_TURNS,
            rotation_step: DEFAULT_ROTATION_STEP,
            attack_range_factor: ATTACK_RANGE_FACTOR,
            best_particle_weight: BEST_PARTICLE_WEIGHT,
            main_particle_weight: MAIN_PARTICLE_WEIGHT,
            home_margin: HOME_MARGIN,
            default_map_size: DEFAULT_MAP_SIZE,
            heal_threshold: HEAL_THRESHOLD,
            draft_ships: Vec::new(),
            seed: None,
            strict: false,
        }
    }
}

impl EngineConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from TOML text; missing keys keep their defaults
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: EngineConfig = toml::from_str(content)?;
        config.validate().map_err(FleetError::Config)?;
        Ok(config)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.attack_range_factor <= 0.0 {
            return Err(format!(
                "attack_range_factor ({}) must be positive",
                self.attack_range_factor
            ));
        }

        if self.best_particle_weight < 0.0 || self.main_particle_weight < 0.0 {
            return Err("Particle weights must not be negative".into());
        }

        if self.home_margin < 0 || self.home_margin * 2 >= self.default_map_size {
            return Err(format!(
                "home_margin ({}) must fit twice inside default_map_size ({})",
                self.home_margin, self.default_map_size
            ));
        }

        if self.draft_ships.iter().any(|id| id.trim().is_empty()) {
            return Err("draft_ships entries must not be blank".into());
        }

        Ok(())
    }
}

/// Load and validate a config from a TOML file
pub fn load_config(path: &Path) -> Result<EngineConfig> {
    let contents = fs::read_to_string(path).map_err(|e| {
        FleetError::Config(format!("Failed to read config file {:?}: {}", path, e))
    })?;

    let config = EngineConfig::from_toml_str(&contents)?;
    tracing::debug!("Loaded engine config from {:?}", path);
    Ok(config)
}

//! Battle system - greedy per-turn fleet tactics
//!
//! Each turn the fleet picks one focus-fire target, every armed ship
//! shoots at whatever is nearest and in reach, and movement follows the
//! phase: ring formation at home first, then a swarm toward the target.

pub mod batch;
pub mod constants;
pub mod engine;
pub mod heal;
pub mod phase;
pub mod swarm;
pub mod targeting;

// Re-exports for convenient access
pub use batch::CommandBatch;
pub use constants::*;
pub use engine::TacticalEngine;
pub use heal::heal_command;
pub use phase::TurnPhase;
pub use swarm::{velocity_correction, SwarmWeights};
pub use targeting::{
    attack_command, in_attack_range, longest_range_gun, nearest_enemy, select_engagement_target,
};

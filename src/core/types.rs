//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};
use std::fmt;

/// Ship identifier as assigned by the game server
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShipId(pub u32);

impl ShipId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }
}

impl fmt::Display for ShipId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Player identifier from the draft options (0 or 1 in a duel)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub i32);

/// Battle turn counter (one per state snapshot)
pub type Turn = u64;

/// Which corner of the map a fleet starts from.
///
/// The side doubles as the mirroring multiplier for formation rings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FleetSide {
    /// Starts near the origin corner
    #[default]
    Near,
    /// Starts in the opposite corner
    Far,
}

impl FleetSide {
    /// Player 0 starts near the origin, every other player in the far corner
    pub fn from_player(player: PlayerId) -> Self {
        if player.0 == 0 {
            FleetSide::Near
        } else {
            FleetSide::Far
        }
    }

    /// Mirroring multiplier (+1 near, -1 far)
    pub fn multiplier(self) -> i32 {
        match self {
            FleetSide::Near => 1,
            FleetSide::Far => -1,
        }
    }
}

//! Per-ship commands and the battle turn reply

use serde::{Deserialize, Serialize};

use crate::core::types::ShipId;
use crate::spatial::vector::Vector;

/// Command issued to one ship for the coming round
///
/// Encodes as `{"Command": "MOVE", "Parameters": {"Id": .., "Target": ..}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "Command", content = "Parameters", rename_all = "UPPERCASE")]
pub enum Command {
    /// Fly toward a point; the server picks the acceleration
    #[serde(rename_all = "PascalCase")]
    Move { id: ShipId, target: Vector },

    /// Apply a raw velocity change
    #[serde(rename_all = "PascalCase")]
    Accelerate { id: ShipId, vector: Vector },

    /// Activate a gun (or heal block) on a point
    #[serde(rename_all = "PascalCase")]
    Attack {
        id: ShipId,
        name: String,
        target: Vector,
    },

    #[serde(rename_all = "PascalCase")]
    Defend { id: ShipId, name: String },

    #[serde(rename_all = "PascalCase")]
    Scan { id: ShipId, name: String },
}

impl Command {
    /// Convenience: create a move command
    pub fn move_to(id: ShipId, target: Vector) -> Self {
        Command::Move { id, target }
    }

    /// Convenience: create an accelerate command
    pub fn accelerate(id: ShipId, vector: Vector) -> Self {
        Command::Accelerate { id, vector }
    }

    /// Convenience: create an attack command
    pub fn attack(id: ShipId, block: impl Into<String>, target: Vector) -> Self {
        Command::Attack {
            id,
            name: block.into(),
            target,
        }
    }

    pub fn defend(id: ShipId, block: impl Into<String>) -> Self {
        Command::Defend {
            id,
            name: block.into(),
        }
    }

    pub fn scan(id: ShipId, block: impl Into<String>) -> Self {
        Command::Scan {
            id,
            name: block.into(),
        }
    }

    /// Ship the command is addressed to
    pub fn ship(&self) -> ShipId {
        match self {
            Command::Move { id, .. }
            | Command::Accelerate { id, .. }
            | Command::Attack { id, .. }
            | Command::Defend { id, .. }
            | Command::Scan { id, .. } => *id,
        }
    }

    /// Move and Accelerate both steer the ship; only one may be sent per turn
    pub fn is_movement(&self) -> bool {
        matches!(self, Command::Move { .. } | Command::Accelerate { .. })
    }
}

/// Reply to a battle state
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UserOutput {
    pub user_commands: Vec<Command>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl UserOutput {
    pub fn new(user_commands: Vec<Command>) -> Self {
        Self {
            user_commands,
            message: None,
        }
    }
}

//! Draft phase messages: fleet purchase options and the player's choice

use serde::{Deserialize, Serialize};

use crate::core::types::PlayerId;
use crate::protocol::equipment::Equipment;
use crate::spatial::vector::Vector;

/// Axis-aligned box on the map, corners inclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MapRegion {
    pub from: Vector,
    pub to: Vector,
}

/// Block offered for purchase together with the slots it occupies
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DraftEquipment {
    pub size: i32,
    pub equipment: Equipment,
}

/// Prebuilt ship template
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DraftCompleteShip {
    pub id: String,
    pub price: i32,
    /// Names of the blocks the template carries
    #[serde(default)]
    pub equipment: Vec<String>,
}

/// Everything the server offers before the battle
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DraftOptions {
    pub player_id: PlayerId,
    pub map_size: i32,
    pub money: i32,
    pub max_ships_count: i32,
    #[serde(default)]
    pub draft_timeout: Option<i32>,
    #[serde(default)]
    pub battle_round_timeout: Option<i32>,
    pub start_area: MapRegion,
    #[serde(default)]
    pub equipment: Vec<DraftEquipment>,
    #[serde(default)]
    pub complete_ships: Vec<DraftCompleteShip>,
}

impl DraftOptions {
    pub fn complete_ship(&self, id: &str) -> Option<&DraftCompleteShip> {
        self.complete_ships.iter().find(|ship| ship.id == id)
    }
}

/// One ship to buy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DraftShipChoice {
    pub complete_ship_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Vector>,
}

impl DraftShipChoice {
    pub fn new(complete_ship_id: impl Into<String>) -> Self {
        Self {
            complete_ship_id: complete_ship_id.into(),
            position: None,
        }
    }
}

/// Reply to the draft options. Empty lets the server pick.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DraftChoice {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ships: Option<Vec<DraftShipChoice>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

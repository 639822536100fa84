//! Battle state snapshot received every turn

use serde::Deserialize;

use crate::core::types::ShipId;
use crate::protocol::equipment::{EffectType, Equipment, GunBlock, HealBlock};
use crate::spatial::vector::Vector;

/// A ship as seen in the current snapshot
///
/// Enemy ships usually arrive without health, energy or equipment.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Ship {
    pub id: ShipId,
    pub position: Vector,
    /// Advisory: the swarm step rewrites this in memory while planning
    pub velocity: Vector,
    #[serde(default)]
    pub health: Option<i32>,
    #[serde(default)]
    pub energy: Option<i32>,
    #[serde(default)]
    pub equipment: Option<Vec<Equipment>>,
}

impl Ship {
    /// Ship with no optional fields, as enemies are reported
    pub fn new(id: u32, position: Vector) -> Self {
        Self {
            id: ShipId::new(id),
            position,
            velocity: Vector::ZERO,
            health: None,
            energy: None,
            equipment: None,
        }
    }

    pub fn with_equipment(mut self, equipment: Vec<Equipment>) -> Self {
        self.equipment = Some(equipment);
        self
    }

    pub fn with_health(mut self, health: i32) -> Self {
        self.health = Some(health);
        self
    }

    /// Known equipment; empty when the snapshot did not include any
    pub fn blocks(&self) -> &[Equipment] {
        self.equipment.as_deref().unwrap_or(&[])
    }

    pub fn guns(&self) -> impl Iterator<Item = &GunBlock> {
        self.blocks().iter().filter_map(Equipment::as_gun)
    }

    pub fn has_gun(&self) -> bool {
        self.blocks().iter().any(Equipment::is_gun)
    }

    /// First heal block on board
    pub fn heal_block(&self) -> Option<&HealBlock> {
        self.blocks().iter().find_map(Equipment::as_heal)
    }
}

/// A shot fired during the previous round
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FireInfo {
    pub source: Vector,
    pub target: Vector,
    pub effect_type: EffectType,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct State {
    pub my: Vec<Ship>,
    pub opponent: Vec<Ship>,
    #[serde(default)]
    pub fire_infos: Vec<FireInfo>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const STATE: &str = r#"{
        "My": [{
            "Id": 0, "Position": "3/3/3", "Velocity": "0/0/0", "Health": 100, "Energy": 50,
            "Equipment": [
                {"Name": "hull", "Type": 3, "MaxHealth": 100, "StartHealth": 100},
                {"Name": "small_gun", "Type": 1, "Damage": 5, "EnergyPrice": 3, "Radius": 5, "EffectType": 0},
                {"Name": "big_gun", "Type": 1, "Damage": 10, "EnergyPrice": 8, "Radius": 7, "EffectType": 1},
                {"Name": "medkit", "Type": 7, "EnergyPrice": 4, "Radius": 6, "HealthGain": 10, "EnergyGain": 0}
            ]
        }],
        "Opponent": [{"Id": 10000, "Position": "26/26/26", "Velocity": "0/0/-1"}],
        "FireInfos": [{"Source": "1/1/1", "Target": "2/2/2", "EffectType": 1}]
    }"#;

    #[test]
    fn test_decode_state() {
        let state: State = serde_json::from_str(STATE).unwrap();
        let me = &state.my[0];
        assert_eq!(me.health, Some(100));
        assert_eq!(me.guns().count(), 2);
        assert!(me.has_gun());
        assert_eq!(me.heal_block().map(|h| h.radius), Some(6));

        let enemy = &state.opponent[0];
        assert_eq!(enemy.id, ShipId(10000));
        assert!(enemy.health.is_none());
        assert!(enemy.blocks().is_empty());
        assert!(!enemy.has_gun());

        assert_eq!(state.fire_infos[0].effect_type, EffectType::Railgun);
    }

    #[test]
    fn test_fire_infos_are_optional() {
        let state: State = serde_json::from_str(r#"{"My": [], "Opponent": []}"#).unwrap();
        assert!(state.fire_infos.is_empty());
    }

    #[test]
    fn test_bad_vector_is_rejected() {
        let json = r#"{"My": [{"Id": 0, "Position": "3/3", "Velocity": "0/0/0"}], "Opponent": []}"#;
        assert!(serde_json::from_str::<State>(json).is_err());
    }
}

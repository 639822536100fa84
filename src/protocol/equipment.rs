//! Equipment blocks attached to ships
//!
//! On the wire every block is a flat object with a numeric `Type` tag and
//! kind-specific PascalCase fields. Decoding goes through [`RawBlock`] and
//! rejects unknown tags or missing fields as format errors.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::error::FleetError;

/// Kind of an equipment block with its wire tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BlockKind {
    Energy,
    Gun,
    Engine,
    Health,
    Shield,
    Radar,
    Heal,
}

impl BlockKind {
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(BlockKind::Energy),
            1 => Some(BlockKind::Gun),
            2 => Some(BlockKind::Engine),
            3 => Some(BlockKind::Health),
            4 => Some(BlockKind::Shield),
            6 => Some(BlockKind::Radar),
            7 => Some(BlockKind::Heal),
            _ => None,
        }
    }

    pub fn code(self) -> u8 {
        match self {
            BlockKind::Energy => 0,
            BlockKind::Gun => 1,
            BlockKind::Engine => 2,
            BlockKind::Health => 3,
            BlockKind::Shield => 4,
            BlockKind::Radar => 6,
            BlockKind::Heal => 7,
        }
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Visual/damage effect of a shot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub enum EffectType {
    Blaster,
    Railgun,
    /// Effect codes this client does not know about
    Other(u8),
}

impl From<u8> for EffectType {
    fn from(code: u8) -> Self {
        match code {
            0 => EffectType::Blaster,
            1 => EffectType::Railgun,
            other => EffectType::Other(other),
        }
    }
}

impl From<EffectType> for u8 {
    fn from(effect: EffectType) -> u8 {
        match effect {
            EffectType::Blaster => 0,
            EffectType::Railgun => 1,
            EffectType::Other(code) => code,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnergyBlock {
    pub name: String,
    pub increment_per_turn: i32,
    pub max_energy: i32,
    pub start_energy: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GunBlock {
    pub name: String,
    pub damage: i32,
    pub energy_price: i32,
    /// Nominal firing radius
    pub radius: i32,
    pub effect_type: EffectType,
}

impl GunBlock {
    /// Blaster with the given radius and zero cost
    pub fn new(name: impl Into<String>, radius: i32) -> Self {
        Self {
            name: name.into(),
            damage: 0,
            energy_price: 0,
            radius,
            effect_type: EffectType::Blaster,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineBlock {
    pub name: String,
    pub max_accelerate: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HealthBlock {
    pub name: String,
    pub max_health: i32,
    pub start_health: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShieldBlock {
    pub name: String,
    pub energy_price: i32,
    pub armor: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RadarBlock {
    pub name: String,
    pub energy_price: i32,
    pub radius: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HealBlock {
    pub name: String,
    pub energy_price: i32,
    pub radius: i32,
    pub health_gain: i32,
    pub energy_gain: i32,
}

impl HealBlock {
    pub fn new(name: impl Into<String>, radius: i32) -> Self {
        Self {
            name: name.into(),
            energy_price: 0,
            radius,
            health_gain: 0,
            energy_gain: 0,
        }
    }
}

/// One equipment block, closed over the kinds the server knows
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawBlock")]
pub enum Equipment {
    Energy(EnergyBlock),
    Gun(GunBlock),
    Engine(EngineBlock),
    Health(HealthBlock),
    Shield(ShieldBlock),
    Radar(RadarBlock),
    Heal(HealBlock),
}

impl Equipment {
    pub fn kind(&self) -> BlockKind {
        match self {
            Equipment::Energy(_) => BlockKind::Energy,
            Equipment::Gun(_) => BlockKind::Gun,
            Equipment::Engine(_) => BlockKind::Engine,
            Equipment::Health(_) => BlockKind::Health,
            Equipment::Shield(_) => BlockKind::Shield,
            Equipment::Radar(_) => BlockKind::Radar,
            Equipment::Heal(_) => BlockKind::Heal,
        }
    }

    /// Name used to address the block in commands
    pub fn name(&self) -> &str {
        match self {
            Equipment::Energy(b) => &b.name,
            Equipment::Gun(b) => &b.name,
            Equipment::Engine(b) => &b.name,
            Equipment::Health(b) => &b.name,
            Equipment::Shield(b) => &b.name,
            Equipment::Radar(b) => &b.name,
            Equipment::Heal(b) => &b.name,
        }
    }

    pub fn as_gun(&self) -> Option<&GunBlock> {
        match self {
            Equipment::Gun(gun) => Some(gun),
            _ => None,
        }
    }

    pub fn as_heal(&self) -> Option<&HealBlock> {
        match self {
            Equipment::Heal(heal) => Some(heal),
            _ => None,
        }
    }

    pub fn is_gun(&self) -> bool {
        self.as_gun().is_some()
    }
}

/// Flat wire shape shared by every block kind
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct RawBlock {
    name: String,
    #[serde(rename = "Type")]
    kind: u8,
    increment_per_turn: Option<i32>,
    max_energy: Option<i32>,
    start_energy: Option<i32>,
    damage: Option<i32>,
    energy_price: Option<i32>,
    radius: Option<i32>,
    effect_type: Option<EffectType>,
    max_accelerate: Option<i32>,
    max_health: Option<i32>,
    start_health: Option<i32>,
    armor: Option<i32>,
    health_gain: Option<i32>,
    energy_gain: Option<i32>,
}

fn required<T>(value: Option<T>, field: &str, kind: BlockKind, name: &str) -> Result<T, FleetError> {
    value.ok_or_else(|| {
        FleetError::Format(format!("{} block {:?} is missing field {}", kind, name, field))
    })
}

impl TryFrom<RawBlock> for Equipment {
    type Error = FleetError;

    fn try_from(raw: RawBlock) -> Result<Self, Self::Error> {
        let kind = BlockKind::from_code(raw.kind).ok_or_else(|| {
            FleetError::Format(format!("block {:?} has unknown type {}", raw.name, raw.kind))
        })?;
        let name = raw.name.as_str();

        let block = match kind {
            BlockKind::Energy => Equipment::Energy(EnergyBlock {
                increment_per_turn: required(raw.increment_per_turn, "IncrementPerTurn", kind, name)?,
                max_energy: required(raw.max_energy, "MaxEnergy", kind, name)?,
                start_energy: required(raw.start_energy, "StartEnergy", kind, name)?,
                name: raw.name,
            }),
            BlockKind::Gun => Equipment::Gun(GunBlock {
                damage: required(raw.damage, "Damage", kind, name)?,
                energy_price: required(raw.energy_price, "EnergyPrice", kind, name)?,
                radius: required(raw.radius, "Radius", kind, name)?,
                effect_type: required(raw.effect_type, "EffectType", kind, name)?,
                name: raw.name,
            }),
            BlockKind::Engine => Equipment::Engine(EngineBlock {
                max_accelerate: required(raw.max_accelerate, "MaxAccelerate", kind, name)?,
                name: raw.name,
            }),
            BlockKind::Health => Equipment::Health(HealthBlock {
                max_health: required(raw.max_health, "MaxHealth", kind, name)?,
                start_health: required(raw.start_health, "StartHealth", kind, name)?,
                name: raw.name,
            }),
            BlockKind::Shield => Equipment::Shield(ShieldBlock {
                energy_price: required(raw.energy_price, "EnergyPrice", kind, name)?,
                armor: required(raw.armor, "Armor", kind, name)?,
                name: raw.name,
            }),
            BlockKind::Radar => Equipment::Radar(RadarBlock {
                energy_price: required(raw.energy_price, "EnergyPrice", kind, name)?,
                radius: required(raw.radius, "Radius", kind, name)?,
                name: raw.name,
            }),
            BlockKind::Heal => Equipment::Heal(HealBlock {
                energy_price: required(raw.energy_price, "EnergyPrice", kind, name)?,
                radius: required(raw.radius, "Radius", kind, name)?,
                health_gain: required(raw.health_gain, "HealthGain", kind, name)?,
                energy_gain: required(raw.energy_gain, "EnergyGain", kind, name)?,
                name: raw.name,
            }),
        };

        Ok(block)
    }
}

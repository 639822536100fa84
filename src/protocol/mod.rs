//! Wire model of the game server protocol
//!
//! One JSON object per line in each direction. Field names are PascalCase,
//! vectors travel as `"x/y/z"` strings.

pub mod draft;
pub mod equipment;
pub mod output;
pub mod state;

pub use draft::{DraftChoice, DraftCompleteShip, DraftEquipment, DraftOptions, DraftShipChoice, MapRegion};
pub use equipment::{
    BlockKind, EffectType, EnergyBlock, EngineBlock, Equipment, GunBlock, HealBlock, HealthBlock,
    RadarBlock, ShieldBlock,
};
pub use output::{Command, UserOutput};
pub use state::{FireInfo, Ship, State};

use serde_json::Value;

use crate::core::error::{FleetError, Result};

/// Key present only in draft input
pub const DRAFT_MARKER: &str = "PlayerId";

/// Which kind of message a line carries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InboundKind {
    Draft,
    Battle,
}

/// A decoded input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inbound {
    Draft(DraftOptions),
    Battle(State),
}

impl Inbound {
    pub fn kind(&self) -> InboundKind {
        match self {
            Inbound::Draft(_) => InboundKind::Draft,
            Inbound::Battle(_) => InboundKind::Battle,
        }
    }
}

/// Classify a raw JSON value by the draft marker key
pub fn classify(value: &Value) -> InboundKind {
    if value.get(DRAFT_MARKER).is_some() {
        InboundKind::Draft
    } else {
        InboundKind::Battle
    }
}

/// Decode one line into draft or battle input.
///
/// On failure the error comes back with the kind the line was meant to be,
/// when that could still be told, so the caller can answer in the right
/// shape.
pub fn decode_line(line: &str) -> std::result::Result<Inbound, (Option<InboundKind>, FleetError)> {
    let value: Value = serde_json::from_str(line).map_err(|e| (None, FleetError::from(e)))?;
    if !value.is_object() {
        return Err((None, FleetError::Format("input line is not a JSON object".into())));
    }

    let kind = classify(&value);
    let decoded: Result<Inbound> = match kind {
        InboundKind::Draft => serde_json::from_value(value)
            .map(Inbound::Draft)
            .map_err(FleetError::from),
        InboundKind::Battle => serde_json::from_value(value)
            .map(Inbound::Battle)
            .map_err(FleetError::from),
    };
    decoded.map_err(|e| (Some(kind), e))
}

pub mod config;
pub mod error;
pub mod types;

pub use config::{load_config, EngineConfig};
pub use error::{FleetError, LogicGap, Result};
pub use types::{FleetSide, PlayerId, ShipId, Turn};

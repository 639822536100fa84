use thiserror::Error;

#[derive(Error, Debug)]
pub enum FleetError {
    #[error("Format error: {0}")]
    Format(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl FleetError {
    /// Errors that only invalidate the current input line
    pub fn is_format(&self) -> bool {
        matches!(self, FleetError::Format(_) | FleetError::Json(_))
    }
}

pub type Result<T> = std::result::Result<T, FleetError>;

/// A sub-decision that could not be made this turn.
///
/// Never fatal: the ship skips the affected behavior and falls through to
/// movement.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicGap {
    #[error("ship carries no gun")]
    NoWeapon,

    #[error("no enemy ship visible")]
    NoEnemyVisible,

    #[error("nearest enemy is out of weapon range")]
    OutOfRange,

    #[error("ship carries no heal block")]
    NoHealBlock,

    #[error("no ally needs healing within range")]
    NoHealTarget,
}

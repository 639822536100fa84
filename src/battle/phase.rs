//! Turn phases of a match
//!
//! A match starts in the draft, spends a fixed number of battle turns
//! moving into formation and then engages for the rest of the match.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Current phase of the tactical engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TurnPhase {
    /// Waiting for draft options
    #[default]
    Draft,
    /// Moving into the ring; the count is the number of formation turns left
    Formation(u32),
    /// Focus fire on the engagement target
    Engaged,
}

impl TurnPhase {
    /// Phase entered once the draft is done
    pub fn after_draft(formation_turns: u32) -> Self {
        if formation_turns == 0 {
            TurnPhase::Engaged
        } else {
            TurnPhase::Formation(formation_turns)
        }
    }

    /// Phase for the next battle turn
    pub fn advance(self) -> Self {
        match self {
            TurnPhase::Formation(left) if left > 1 => TurnPhase::Formation(left - 1),
            TurnPhase::Formation(_) => TurnPhase::Engaged,
            other => other,
        }
    }

    pub fn is_formation(self) -> bool {
        matches!(self, TurnPhase::Formation(_))
    }

    pub fn is_engaged(self) -> bool {
        self == TurnPhase::Engaged
    }
}

impl fmt::Display for TurnPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TurnPhase::Draft => write!(f, "draft"),
            TurnPhase::Formation(left) => write!(f, "formation ({} left)", left),
            TurnPhase::Engaged => write!(f, "engaged"),
        }
    }
}

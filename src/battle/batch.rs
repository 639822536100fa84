//! Per-turn command ledger

use ahash::AHashSet;

use crate::core::types::ShipId;
use crate::protocol::output::{Command, UserOutput};

/// Commands collected for one turn.
///
/// A ship may receive any number of block activations but only one
/// movement command (Move or Accelerate); later ones are refused.
#[derive(Debug, Clone, Default)]
pub struct CommandBatch {
    commands: Vec<Command>,
    steered: AHashSet<ShipId>,
}

impl CommandBatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a command; returns false if it was refused
    pub fn push(&mut self, command: Command) -> bool {
        if command.is_movement() && !self.steered.insert(command.ship()) {
            tracing::debug!(ship = %command.ship(), "Dropping second movement command");
            return false;
        }
        self.commands.push(command);
        true
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn into_output(self) -> UserOutput {
        UserOutput::new(self.commands)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spatial::vector::Vector;

    #[test]
    fn test_second_movement_refused() {
        let id = ShipId(3);
        let mut batch = CommandBatch::new();
        assert!(batch.push(Command::move_to(id, Vector::ZERO)));
        assert!(!batch.push(Command::accelerate(id, Vector::splat(1))));
        assert_eq!(batch.len(), 1);
        assert_eq!(
            batch.into_output().user_commands,
            vec![Command::move_to(id, Vector::ZERO)]
        );
    }

    #[test]
    fn test_activations_are_unlimited() {
        let id = ShipId(3);
        let mut batch = CommandBatch::new();
        assert!(batch.push(Command::attack(id, "gun", Vector::ZERO)));
        assert!(batch.push(Command::attack(id, "medkit", Vector::ZERO)));
        assert!(batch.push(Command::move_to(id, Vector::ZERO)));
        assert!(batch.push(Command::move_to(ShipId(4), Vector::ZERO)));
        assert_eq!(batch.into_output().user_commands.len(), 4);
    }
}

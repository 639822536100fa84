//! Heal support between own ships

use crate::core::error::LogicGap;
use crate::protocol::output::Command;
use crate::protocol::state::Ship;

/// Heal the most damaged ally in reach.
///
/// Eligible allies report a health below `threshold` and sit within the
/// heal block's radius. The healer never targets itself. The heal block is
/// activated with an attack command aimed at the ally.
pub fn heal_command(healer: &Ship, allies: &[Ship], threshold: i32) -> Result<Command, LogicGap> {
    let block = healer.heal_block().ok_or(LogicGap::NoHealBlock)?;
    let reach = f64::from(block.radius);

    let patient = allies
        .iter()
        .filter(|ally| ally.id != healer.id)
        .filter_map(|ally| ally.health.map(|health| (health, ally)))
        .filter(|(health, ally)| {
            *health < threshold && healer.position.distance(ally.position) <= reach
        })
        .min_by_key(|(health, _)| *health)
        .map(|(_, ally)| ally)
        .ok_or(LogicGap::NoHealTarget)?;

    Ok(Command::attack(healer.id, block.name.clone(), patient.position))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::equipment::{Equipment, HealBlock};
    use crate::spatial::vector::Vector;

    fn medic(id: u32, position: Vector) -> Ship {
        Ship::new(id, position)
            .with_health(30)
            .with_equipment(vec![Equipment::Heal(HealBlock::new("medkit", 5))])
    }

    #[test]
    fn test_heals_lowest_health_in_reach() {
        let healer = medic(0, Vector::ZERO);
        let allies = vec![
            healer.clone(),
            Ship::new(1, Vector::new(2, 0, 0)).with_health(70),
            Ship::new(2, Vector::new(0, 3, 0)).with_health(40),
            Ship::new(3, Vector::new(0, 0, 9)).with_health(10),
        ];
        let cmd = heal_command(&healer, &allies, 80).unwrap();
        assert_eq!(cmd, Command::attack(healer.id, "medkit", Vector::new(0, 3, 0)));
    }

    #[test]
    fn test_healthy_or_unknown_allies_are_skipped() {
        let healer = medic(0, Vector::ZERO);
        let allies = vec![
            healer.clone(),
            Ship::new(1, Vector::new(1, 0, 0)).with_health(80),
            Ship::new(2, Vector::new(0, 1, 0)),
        ];
        assert_eq!(heal_command(&healer, &allies, 80), Err(LogicGap::NoHealTarget));
    }

    #[test]
    fn test_ship_without_heal_block() {
        let ship = Ship::new(0, Vector::ZERO);
        assert_eq!(heal_command(&ship, &[], 80), Err(LogicGap::NoHealBlock));
    }

    #[test]
    fn test_ties_pick_first() {
        let healer = medic(0, Vector::ZERO);
        let allies = vec![
            Ship::new(5, Vector::new(1, 0, 0)).with_health(50),
            Ship::new(6, Vector::new(-1, 0, 0)).with_health(50),
        ];
        let cmd = heal_command(&healer, &allies, 80).unwrap();
        assert_eq!(cmd.ship(), healer.id);
        assert_eq!(cmd, Command::attack(healer.id, "medkit", Vector::new(1, 0, 0)));
    }
}

//! Target selection and weapon range gating
//!
//! All ties resolve to the first candidate in input order so a turn is
//! reproducible from its snapshot.

use ordered_float::OrderedFloat;

use crate::core::error::LogicGap;
use crate::protocol::equipment::GunBlock;
use crate::protocol::output::Command;
use crate::protocol::state::Ship;
use crate::spatial::vector::Vector;

/// Enemy with the smallest summed Euclidean distance to all own ships
///
/// With no own ships every sum is zero and the first enemy wins.
pub fn select_engagement_target<'a>(own: &[Ship], enemies: &'a [Ship]) -> Option<&'a Ship> {
    enemies.iter().min_by_key(|enemy| {
        OrderedFloat(
            own.iter()
                .map(|ship| ship.position.distance(enemy.position))
                .sum::<f64>(),
        )
    })
}

/// Enemy closest to `position` (Euclidean)
pub fn nearest_enemy(position: Vector, enemies: &[Ship]) -> Option<&Ship> {
    enemies
        .iter()
        .min_by_key(|enemy| OrderedFloat(position.distance(enemy.position)))
}

/// Gun with the largest radius; the first one wins a tie
pub fn longest_range_gun(ship: &Ship) -> Option<&GunBlock> {
    let mut best: Option<&GunBlock> = None;
    for gun in ship.guns() {
        match best {
            Some(current) if current.radius >= gun.radius => {}
            _ => best = Some(gun),
        }
    }
    best
}

/// Whether `gun` may fire from `from` at `to`.
///
/// `factor` widens the nominal radius; the boundary itself is in range.
pub fn in_attack_range(gun: &GunBlock, from: Vector, to: Vector, factor: f64) -> bool {
    factor * f64::from(gun.radius) >= from.distance(to)
}

/// Attack on the nearest enemy with the longest-range gun, if it can reach
pub fn attack_command(ship: &Ship, enemies: &[Ship], factor: f64) -> Result<Command, LogicGap> {
    let gun = longest_range_gun(ship).ok_or(LogicGap::NoWeapon)?;
    let enemy = nearest_enemy(ship.position, enemies).ok_or(LogicGap::NoEnemyVisible)?;

    if !in_attack_range(gun, ship.position, enemy.position, factor) {
        return Err(LogicGap::OutOfRange);
    }

    Ok(Command::attack(ship.id, gun.name.clone(), enemy.position))
}

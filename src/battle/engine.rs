//! Tactical engine - per-turn fleet decisions
//!
//! Owns everything that survives between turns: the phase countdown, the
//! fleet side, the map size, the formation rotation, the last engagement
//! target and the random source of the swarm step.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::battle::batch::CommandBatch;
use crate::battle::heal::heal_command;
use crate::battle::phase::TurnPhase;
use crate::battle::swarm::{velocity_correction, SwarmWeights};
use crate::battle::targeting::{attack_command, nearest_enemy, select_engagement_target};
use crate::core::config::EngineConfig;
use crate::core::error::LogicGap;
use crate::core::types::{FleetSide, ShipId, Turn};
use crate::protocol::draft::{DraftChoice, DraftOptions, DraftShipChoice};
use crate::protocol::output::{Command, UserOutput};
use crate::protocol::state::{Ship, State};
use crate::spatial::formation::formation;
use crate::spatial::raster::line_of_fire_clear;
use crate::spatial::vector::Vector;

/// Greedy one-turn-at-a-time fleet controller
pub struct TacticalEngine<R: Rng = ChaCha8Rng> {
    config: EngineConfig,
    phase: TurnPhase,
    side: FleetSide,
    map_size: i32,
    rotation: i32,
    turn: Turn,
    last_target: Option<ShipId>,
    rng: R,
}

impl TacticalEngine<ChaCha8Rng> {
    /// Create an engine seeded from the config, or from OS entropy
    pub fn new(config: EngineConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Self::with_rng(config, rng)
    }

    /// Create with specific RNG seed for deterministic behavior
    pub fn with_seed(config: EngineConfig, seed: u64) -> Self {
        Self::with_rng(config, ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> TacticalEngine<R> {
    pub fn with_rng(config: EngineConfig, rng: R) -> Self {
        let map_size = config.default_map_size;
        Self {
            config,
            phase: TurnPhase::Draft,
            side: FleetSide::Near,
            map_size,
            rotation: 0,
            turn: 0,
            last_target: None,
            rng,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    pub fn side(&self) -> FleetSide {
        self.side
    }

    pub fn map_size(&self) -> i32 {
        self.map_size
    }

    /// Current formation ring rotation
    pub fn rotation(&self) -> i32 {
        self.rotation
    }

    /// Battle turns played so far
    pub fn turn(&self) -> Turn {
        self.turn
    }

    /// Engagement target of the most recent battle turn
    pub fn last_target(&self) -> Option<ShipId> {
        self.last_target
    }

    /// Formation center in the fleet's own corner
    pub fn home_center(&self) -> Vector {
        let margin = self.config.home_margin;
        match self.side {
            FleetSide::Near => Vector::splat(margin),
            FleetSide::Far => Vector::splat(self.map_size - 1 - margin),
        }
    }

    /// Map center, where the fleet gathers when no enemy is visible
    pub fn rally_point(&self) -> Vector {
        Vector::splat(self.map_size / 2)
    }

    /// Answer the draft options and start the formation countdown
    pub fn draft(&mut self, options: &DraftOptions) -> DraftChoice {
        self.side = FleetSide::from_player(options.player_id);
        self.map_size = if options.map_size > 0 {
            options.map_size
        } else {
            self.config.default_map_size
        };
        self.phase = TurnPhase::after_draft(self.config.formation_turns);
        self.rotation = 0;
        self.turn = 0;
        self.last_target = None;

        tracing::info!(
            player = options.player_id.0,
            side = ?self.side,
            map_size = self.map_size,
            phase = %self.phase,
            "Draft received"
        );

        if self.config.draft_ships.is_empty() {
            return DraftChoice::default();
        }

        let limit = usize::try_from(options.max_ships_count)
            .ok()
            .filter(|n| *n > 0)
            .unwrap_or(usize::MAX);

        let ships: Vec<DraftShipChoice> = self
            .config
            .draft_ships
            .iter()
            .take(limit)
            .map(|id| {
                if options.complete_ship(id).is_none() {
                    tracing::warn!(ship = %id, "Drafting a ship template the server did not offer");
                }
                DraftShipChoice::new(id.clone())
            })
            .collect();

        DraftChoice {
            ships: Some(ships),
            message: None,
        }
    }

    /// Decide the commands for one battle turn
    pub fn battle(&mut self, state: State) -> UserOutput {
        if self.phase == TurnPhase::Draft {
            tracing::warn!("Battle state arrived before draft options; assuming the near side");
            self.phase = TurnPhase::after_draft(self.config.formation_turns);
        }
        self.turn += 1;

        let State {
            my: mut own,
            opponent: enemies,
            ..
        } = state;

        let target = select_engagement_target(&own, &enemies);
        self.last_target = target.map(|ship| ship.id);
        match target {
            Some(t) => tracing::debug!(turn = self.turn, enemy = %t.id, at = %t.position, "Engagement target"),
            None => tracing::debug!(turn = self.turn, "No engagement target: {}", LogicGap::NoEnemyVisible),
        }

        let mut batch = CommandBatch::new();

        for ship in &own {
            self.plan_activations(ship, &own, &enemies, &mut batch);
        }

        let side = self.side.multiplier();
        match self.phase {
            TurnPhase::Engaged => match target {
                Some(target) => {
                    let weights = SwarmWeights::from_config(&self.config);
                    for ship in own.iter_mut() {
                        if let Some(nearest) = nearest_enemy(ship.position, &enemies) {
                            ship.velocity = velocity_correction(
                                ship.velocity,
                                ship.position,
                                nearest.position,
                                target.position,
                                weights,
                                &mut self.rng,
                            );
                            tracing::trace!(ship = %ship.id, velocity = %ship.velocity, "Swarm step");
                        }
                        batch.push(Command::move_to(ship.id, target.position));
                    }
                }
                None => {
                    let rally = self.rally_point();
                    hold_formation(&own, rally, self.rotation, side, &mut batch);
                }
            },
            TurnPhase::Formation(_) | TurnPhase::Draft => {
                let home = self.home_center();
                hold_formation(&own, home, self.rotation, side, &mut batch);
            }
        }

        if self.phase.is_formation() {
            self.rotation = self.rotation.wrapping_add(self.config.rotation_step);
        }
        let next = self.phase.advance();
        if next != self.phase {
            tracing::info!(turn = self.turn, from = %self.phase, to = %next, "Phase change");
        }
        self.phase = next;

        tracing::debug!(turn = self.turn, commands = batch.len(), "Turn planned");
        batch.into_output()
    }

    /// Attack and heal decisions for one ship, independent of the others
    fn plan_activations(&self, ship: &Ship, own: &[Ship], enemies: &[Ship], batch: &mut CommandBatch) {
        match attack_command(ship, enemies, self.config.attack_range_factor) {
            Ok(command) => {
                if let Command::Attack { target, .. } = &command {
                    if tracing::enabled!(tracing::Level::DEBUG) {
                        let obstacles = obstacles_between(ship, *target, own, enemies);
                        if !line_of_fire_clear(ship.position, *target, &obstacles) {
                            tracing::debug!(ship = %ship.id, aim = %target, "Line of fire is blocked");
                        }
                    }
                }
                batch.push(command);
            }
            Err(LogicGap::NoWeapon) => {}
            Err(gap) => tracing::debug!(ship = %ship.id, "Attack skipped: {}", gap),
        }

        match heal_command(ship, own, self.config.heal_threshold) {
            Ok(command) => {
                batch.push(command);
            }
            Err(LogicGap::NoHealBlock) => {}
            Err(gap) => tracing::debug!(ship = %ship.id, "Heal skipped: {}", gap),
        }
    }
}

/// Move every ship to its ring slot; ships beyond the ring hold the center
fn hold_formation(own: &[Ship], center: Vector, rotation: i32, side: i32, batch: &mut CommandBatch) {
    let mut slots = formation(center, own.len(), rotation, side);
    for ship in own {
        let point = slots.next().unwrap_or(center);
        batch.push(Command::move_to(ship.id, point));
    }
}

fn obstacles_between(shooter: &Ship, target: Vector, own: &[Ship], enemies: &[Ship]) -> Vec<Vector> {
    own.iter()
        .chain(enemies)
        .filter(|other| other.id != shooter.id && other.position != target)
        .map(|other| other.position)
        .collect()
}

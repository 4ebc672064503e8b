//! Session engine — the core of the game.
//!
//! `SessionEngine` owns the hecs ECS world, processes player commands, runs
//! all systems in a fixed per-tick order, and produces `RoundSnapshot`s.
//! Completely headless (no renderer dependency), enabling deterministic
//! testing.

use std::collections::VecDeque;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use driftwell_core::commands::PlayerCommand;
use driftwell_core::constants::{MAX_TICK_STEP, ROUND_DURATION_SECS};
use driftwell_core::enums::RoundPhase;
use driftwell_core::events::SessionEvent;
use driftwell_core::state::RoundSnapshot;
use driftwell_core::types::SimTime;

use crate::field_setup;
use crate::player::{CarrierSlot, InputState, TargetingState};
use crate::systems;
use crate::systems::capture::ScoreState;
use crate::systems::respawn::RespawnQueue;

/// Configuration for starting a new session.
pub struct SessionConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self { seed: 42 }
    }
}

/// The session engine. Owns the ECS world and all simulation state.
pub struct SessionEngine {
    world: World,
    time: SimTime,
    phase: RoundPhase,
    rng: ChaCha8Rng,
    command_queue: VecDeque<PlayerCommand>,
    input: InputState,
    targeting: TargetingState,
    carrier: CarrierSlot,
    respawns: RespawnQueue,
    /// Bumped on every round (re)start; deferred respawn entries from an
    /// earlier token never fire.
    round_token: u32,
    score: ScoreState,
    events: Vec<SessionEvent>,
    despawn_buffer: Vec<hecs::Entity>,
    next_debris_id: u32,
}

impl SessionEngine {
    /// Create a new session engine with the given config.
    pub fn new(config: SessionConfig) -> Self {
        Self {
            world: World::new(),
            time: SimTime::default(),
            phase: RoundPhase::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            command_queue: VecDeque::new(),
            input: InputState::default(),
            targeting: TargetingState::default(),
            carrier: CarrierSlot::default(),
            respawns: RespawnQueue::default(),
            round_token: 0,
            score: ScoreState::default(),
            events: Vec::new(),
            despawn_buffer: Vec::new(),
            next_debris_id: 0,
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by `dt_secs` and return the resulting
    /// snapshot. The delta is clamped to `MAX_TICK_STEP` so frame stalls
    /// cannot destabilize the integration.
    pub fn tick(&mut self, dt_secs: f64) -> RoundSnapshot {
        let dt = dt_secs.clamp(0.0, MAX_TICK_STEP);
        self.process_commands();

        if self.phase == RoundPhase::Active {
            self.run_systems(dt);
            self.time.advance(dt);
            if self.remaining_secs() <= 0.0 {
                self.phase = RoundPhase::Complete;
                self.events.push(SessionEvent::RoundComplete {
                    collected: self.score.collected,
                    points: self.score.points,
                });
            }
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.phase,
            self.remaining_secs(),
            &self.input,
            &self.targeting,
            &self.carrier,
            &self.score,
            events,
        )
    }

    /// Get the current round phase.
    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Remaining round time in seconds (0 outside an active round).
    pub fn remaining_secs(&self) -> f64 {
        match self.phase {
            RoundPhase::Idle | RoundPhase::Complete => 0.0,
            RoundPhase::Active | RoundPhase::Paused => {
                (ROUND_DURATION_SECS - self.time.elapsed_secs).max(0.0)
            }
        }
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::StartRound => {
                if matches!(self.phase, RoundPhase::Idle | RoundPhase::Complete) {
                    self.reset_round();
                }
            }
            PlayerCommand::RestartRound => {
                self.reset_round();
            }
            PlayerCommand::Pause => {
                if self.phase == RoundPhase::Active {
                    self.phase = RoundPhase::Paused;
                }
            }
            PlayerCommand::Resume => {
                if self.phase == RoundPhase::Paused {
                    self.phase = RoundPhase::Active;
                }
            }
            PlayerCommand::SetAim {
                origin,
                forward,
                source,
            } => {
                let dir = forward.normalize_or_zero();
                if dir != glam::DVec3::ZERO {
                    self.input.aim.forward = dir;
                }
                self.input.aim.origin = origin;
                self.input.aim.source = source;
            }
            PlayerCommand::Move { intent } => {
                self.input.move_intent = intent;
            }
            PlayerCommand::Teleport { delta } => {
                self.input.pending_teleport = Some(delta);
            }
            PlayerCommand::SetTargeting { active } => {
                self.input.targeting_active = active;
            }
            PlayerCommand::Throw => {
                if self.phase == RoundPhase::Active {
                    systems::carrier::throw_held(
                        &mut self.world,
                        &mut self.carrier,
                        &self.input.aim,
                        &self.time,
                        &mut self.events,
                    );
                }
            }
        }
    }

    /// Reinitialize the round: fresh field, zones, score, and clock.
    /// Nothing persists across restarts.
    fn reset_round(&mut self) {
        self.world.clear();
        self.round_token += 1;
        self.respawns.clear();
        self.targeting = TargetingState::default();
        self.carrier = CarrierSlot::default();
        self.score = ScoreState::default();
        self.time = SimTime::default();
        self.next_debris_id = 0;
        field_setup::populate_field(&mut self.world, &mut self.rng, &mut self.next_debris_id);
        field_setup::spawn_zones(&mut self.world);
        self.phase = RoundPhase::Active;
        self.events.push(SessionEvent::RoundStarted);
    }

    /// Run all systems in order.
    fn run_systems(&mut self, dt: f64) {
        // 1. Locomotion offset — the player stays anchored near the origin.
        systems::locomotion::run(&mut self.world, &mut self.input, dt);
        // 2. Zone motion (orbit/bob).
        systems::zone_motion::run(&mut self.world, self.time.elapsed_secs);
        // 3. Targeting before physics: a freshly pulled target is excluded
        //    from this tick's field forces.
        systems::targeting::run(
            &mut self.world,
            &self.input,
            &mut self.targeting,
            &mut self.carrier,
            dt,
            &mut self.events,
        );
        // 4. Carrier follow.
        systems::carrier::run(&mut self.world, &mut self.carrier, &self.input, dt);
        // 5. Field physics; skips every owned entity.
        systems::debris_physics::run(
            &mut self.world,
            &mut self.rng,
            &self.time,
            dt,
            &mut self.respawns,
            self.round_token,
        );
        // 6. Capture after physics and targeting, on final per-tick
        //    positions.
        systems::capture::run(
            &mut self.world,
            &mut self.score,
            &self.time,
            &mut self.events,
            &mut self.despawn_buffer,
        );
        // 7. Deferred respawns due this tick.
        systems::respawn::run(
            &mut self.world,
            &mut self.respawns,
            &self.time,
            &mut self.rng,
            self.round_token,
            &mut self.events,
        );
    }

    /// Get a read-only reference to the score state.
    #[cfg(test)]
    pub fn score(&self) -> &ScoreState {
        &self.score
    }

    /// Mutable world access for test setup.
    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// The entity currently pulled by the targeting tool.
    #[cfg(test)]
    pub fn target(&self) -> Option<hecs::Entity> {
        self.targeting.target
    }

    /// The entity currently held by the carrier.
    #[cfg(test)]
    pub fn held(&self) -> Option<hecs::Entity> {
        self.carrier.held
    }

    /// Number of pending deferred respawns.
    #[cfg(test)]
    pub fn pending_respawns(&self) -> usize {
        self.respawns.len()
    }

    /// Start a round and strip the default population, leaving an empty
    /// active field for controlled setups.
    #[cfg(test)]
    pub fn start_bare_round(&mut self) {
        self.reset_round();
        let entities: Vec<hecs::Entity> = self.world.iter().map(|e| e.entity()).collect();
        for entity in entities {
            let _ = self.world.despawn(entity);
        }
    }

    /// Spawn an extra floating debris object at a fixed position.
    #[cfg(test)]
    pub fn spawn_debris_at(&mut self, position: glam::DVec3) -> hecs::Entity {
        use driftwell_core::components::*;
        use driftwell_core::enums::DebrisState;
        use driftwell_core::types::{Position, Velocity};

        let id = self.next_debris_id;
        self.next_debris_id += 1;
        self.world.spawn((
            DebrisTag { id },
            Position(position),
            Velocity(glam::DVec3::ZERO),
            Orientation::default(),
            Spin::default(),
            DebrisBody {
                state: DebrisState::Floating,
                float_phase: 0.0,
                base_height: position.y,
                thrown_at: None,
            },
        ))
    }

    /// Spawn an extra static zone at a fixed position.
    #[cfg(test)]
    pub fn spawn_zone_at(&mut self, position: glam::DVec3, radius: f64) -> hecs::Entity {
        field_setup::spawn_zone(
            &mut self.world,
            position,
            radius,
            driftwell_core::enums::ZoneMotion::Static,
        )
    }
}

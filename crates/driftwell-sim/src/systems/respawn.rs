//! Deferred respawn — recycles pit-disposed debris after a fixed delay.
//!
//! Entries are due-time records fired against the injected simulation
//! clock, keeping replays deterministic. Every entry carries the engine's
//! round token; entries scheduled before a round (re)start are discarded
//! unfired, so a stale respawn can never resurrect an object into a fresh
//! field.

use glam::DVec3;
use hecs::World;
use rand_chacha::ChaCha8Rng;

use driftwell_core::components::{DebrisBody, DebrisTag};
use driftwell_core::enums::DebrisState;
use driftwell_core::events::SessionEvent;
use driftwell_core::types::{Position, SimTime, Velocity};

use crate::field_setup;

#[derive(Debug, Clone, Copy)]
struct RespawnEntry {
    entity: hecs::Entity,
    due_at_secs: f64,
    round_token: u32,
}

/// Pending deferred respawns, owned by the engine.
#[derive(Debug, Clone, Default)]
pub struct RespawnQueue {
    entries: Vec<RespawnEntry>,
}

impl RespawnQueue {
    pub fn schedule(&mut self, entity: hecs::Entity, due_at_secs: f64, round_token: u32) {
        self.entries.push(RespawnEntry {
            entity,
            due_at_secs,
            round_token,
        });
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Fire every due entry: reposition to a freshly sampled spawn point, zero
/// velocity, return to `Floating`.
pub fn run(
    world: &mut World,
    queue: &mut RespawnQueue,
    time: &SimTime,
    rng: &mut ChaCha8Rng,
    round_token: u32,
    events: &mut Vec<SessionEvent>,
) {
    let now = time.elapsed_secs;
    let mut i = 0;
    while i < queue.entries.len() {
        let entry = queue.entries[i];
        if entry.round_token != round_token {
            // Scheduled before a reset; the object it referred to is gone.
            queue.entries.swap_remove(i);
            continue;
        }
        if now < entry.due_at_secs {
            i += 1;
            continue;
        }
        queue.entries.swap_remove(i);

        let point = field_setup::sample_spawn_point(rng);
        if let Ok((tag, pos, vel, body)) = world
            .query_one_mut::<(&DebrisTag, &mut Position, &mut Velocity, &mut DebrisBody)>(
                entry.entity,
            )
        {
            if body.state != DebrisState::Respawning {
                continue;
            }
            pos.0 = point;
            vel.0 = DVec3::ZERO;
            body.state = DebrisState::Floating;
            body.base_height = point.y;
            body.thrown_at = None;
            events.push(SessionEvent::Respawned { debris_id: tag.id });
        }
    }
}

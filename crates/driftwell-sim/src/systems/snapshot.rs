//! Snapshot system: queries the ECS world and builds a complete
//! RoundSnapshot.
//!
//! This system is read-only — it never modifies the world.

use hecs::World;

use driftwell_core::components::{CollectionZone, DebrisBody, DebrisTag, Orientation};
use driftwell_core::enums::{DebrisState, RoundPhase};
use driftwell_core::events::SessionEvent;
use driftwell_core::state::*;
use driftwell_core::types::{Position, SimTime};

use crate::player::{CarrierSlot, InputState, TargetingState};
use crate::systems::capture::ScoreState;

/// Build a complete RoundSnapshot from the current world state.
#[allow(clippy::too_many_arguments)]
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: RoundPhase,
    remaining_secs: f64,
    input: &InputState,
    targeting: &TargetingState,
    carrier: &CarrierSlot,
    score: &ScoreState,
    events: Vec<SessionEvent>,
) -> RoundSnapshot {
    RoundSnapshot {
        time: *time,
        phase,
        remaining_secs,
        debris: build_debris(world),
        zones: build_zones(world),
        targeting: TargetingView {
            active: input.targeting_active,
            aim_source: input.aim.source,
            target: targeting.target.and_then(|e| debris_id(world, e)),
        },
        carrier: CarrierView {
            held: carrier.held.and_then(|e| debris_id(world, e)),
        },
        score: ScoreView {
            collected: score.collected,
            combo_count: score.combo_count,
            combo_multiplier: score.combo_multiplier,
            points: score.points,
        },
        events,
    }
}

/// Build DebrisView list, sorted by id for stable serialization.
fn build_debris(world: &World) -> Vec<DebrisView> {
    let mut debris: Vec<DebrisView> = world
        .query::<(&DebrisTag, &Position, &Orientation, &DebrisBody)>()
        .iter()
        .map(|(_, (tag, pos, orient, body))| DebrisView {
            id: tag.id,
            position: pos.0,
            orientation: *orient,
            state: body.state,
            visible: body.state != DebrisState::Respawning,
        })
        .collect();

    debris.sort_by_key(|d| d.id);
    debris
}

/// Build ZoneView list, sorted by id.
fn build_zones(world: &World) -> Vec<ZoneView> {
    let mut zones: Vec<ZoneView> = world
        .query::<(&Position, &CollectionZone)>()
        .iter()
        .map(|(_, (pos, zone))| ZoneView {
            id: zone.id,
            position: pos.0,
            radius: zone.radius,
        })
        .collect();

    zones.sort_by_key(|z| z.id);
    zones
}

/// Resolve an entity to its stable debris id, if it still exists.
fn debris_id(world: &World, entity: hecs::Entity) -> Option<u32> {
    world.get::<&DebrisTag>(entity).ok().map(|tag| tag.id)
}

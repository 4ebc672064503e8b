//! Locomotion system — applies the player's movement as a world-frame
//! offset.
//!
//! The player rig stays anchored near the origin; continuous movement
//! intent and teleport requests shift every spatially anchored piece of
//! core state (debris positions, zone positions, zone orbit centers) in the
//! opposite direction.

use glam::DVec3;
use hecs::World;

use driftwell_core::components::CollectionZone;
use driftwell_core::constants::MOVE_SPEED;
use driftwell_core::enums::ZoneMotion;
use driftwell_core::types::Position;

use crate::player::InputState;

pub fn run(world: &mut World, input: &mut InputState, dt: f64) {
    let mut shift = DVec3::ZERO;

    let intent = DVec3::new(input.move_intent.x, 0.0, input.move_intent.z);
    if intent.length_squared() > f64::EPSILON {
        shift -= intent.normalize() * MOVE_SPEED * dt;
    }
    if let Some(delta) = input.pending_teleport.take() {
        shift -= DVec3::new(delta.x, 0.0, delta.z);
    }
    if shift == DVec3::ZERO {
        return;
    }

    // Debris and zones both carry Position; one pass shifts them all.
    for (_entity, pos) in world.query_mut::<&mut Position>() {
        pos.0 += shift;
    }
    // Orbit centers are stored inside the motion parameters and must track
    // the same offset, or the next zone_motion pass would undo it.
    for (_entity, zone) in world.query_mut::<&mut CollectionZone>() {
        if let ZoneMotion::Orbit { center, .. } = &mut zone.motion {
            *center += shift;
        }
    }
}

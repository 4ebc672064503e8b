//! Targeting system — ray acquisition, pull, and carrier handoff.
//!
//! Runs before debris physics so a freshly acquired target is excluded from
//! this tick's field forces (no visible snap). A pulled object is moved
//! directly toward the hold point at constant speed, not through velocity
//! integration.

use glam::DVec3;
use hecs::World;

use driftwell_core::components::{DebrisBody, DebrisTag};
use driftwell_core::constants::{DEBRIS_PICK_RADIUS, PULL_CAPTURE_RANGE, PULL_SPEED};
use driftwell_core::enums::DebrisState;
use driftwell_core::events::SessionEvent;
use driftwell_core::types::{Position, Velocity};

use crate::player::{CarrierSlot, InputState, TargetingState};

pub fn run(
    world: &mut World,
    input: &InputState,
    targeting: &mut TargetingState,
    carrier: &mut CarrierSlot,
    dt: f64,
    events: &mut Vec<SessionEvent>,
) {
    if !input.targeting_active {
        release(world, targeting);
        return;
    }

    // Drop a target that was disposed out from under us. Respawning objects
    // are untouchable, so only the local reference is cleared.
    if let Some(entity) = targeting.target {
        match world.get::<&DebrisBody>(entity) {
            Ok(body) if body.state == DebrisState::Respawning => targeting.target = None,
            Ok(_) => {}
            Err(_) => targeting.target = None,
        }
    }

    if targeting.target.is_none() {
        if let Some(entity) = raycast(world, input.aim.origin, input.aim.forward) {
            if let Ok((tag, vel, body)) =
                world.query_one_mut::<(&DebrisTag, &mut Velocity, &mut DebrisBody)>(entity)
            {
                vel.0 = DVec3::ZERO;
                body.state = DebrisState::Pulled;
                events.push(SessionEvent::TargetAcquired { debris_id: tag.id });
                targeting.target = Some(entity);
            }
        }
        // No ray hit: non-fatal, nothing acquired this tick.
    }

    let Some(entity) = targeting.target else {
        return;
    };
    let hold = input.aim.hold_point();

    let within_reach = match world.get::<&Position>(entity) {
        Ok(pos) => pos.0.distance(hold) <= PULL_CAPTURE_RANGE,
        Err(_) => {
            targeting.target = None;
            return;
        }
    };

    if within_reach {
        // Hand ownership to the carrier. A conflicting held object leaves
        // the target pulled at the hold point until the slot frees up.
        if carrier.attach(entity) {
            if let Ok((tag, body)) = world.query_one_mut::<(&DebrisTag, &mut DebrisBody)>(entity) {
                body.state = DebrisState::Held;
                events.push(SessionEvent::Grabbed { debris_id: tag.id });
            }
            targeting.target = None;
        }
    } else if let Ok(pos) = world.get::<&mut Position>(entity) {
        let mut pos = pos;
        let to_hold = hold - pos.0;
        let dist = to_hold.length();
        pos.0 += to_hold / dist * (PULL_SPEED * dt).min(dist);
    }
}

/// Release the current target back to the field, if any. Releasing a null
/// target is a no-op.
pub fn release(world: &mut World, targeting: &mut TargetingState) {
    let Some(entity) = targeting.target.take() else {
        return;
    };
    if let Ok((pos, vel, body)) =
        world.query_one_mut::<(&Position, &mut Velocity, &mut DebrisBody)>(entity)
    {
        if body.state == DebrisState::Pulled {
            body.state = DebrisState::Floating;
            body.base_height = pos.0.y;
            vel.0 = DVec3::ZERO;
        }
    }
}

/// Cast the aim ray against the debris set by linear scan (ray-sphere test
/// with `DEBRIS_PICK_RADIUS`), returning the nearest targetable hit.
/// A linear scan is fine at field scale (~18 objects).
fn raycast(world: &World, origin: DVec3, forward: DVec3) -> Option<hecs::Entity> {
    let dir = forward.normalize_or_zero();
    if dir == DVec3::ZERO {
        return None;
    }

    let mut best: Option<(f64, hecs::Entity)> = None;
    for (entity, (pos, body)) in world.query::<(&Position, &DebrisBody)>().iter() {
        if !body.state.targetable() {
            continue;
        }
        let to_center = pos.0 - origin;
        let along = to_center.dot(dir);
        if along <= 0.0 {
            continue;
        }
        let offset_sq = to_center.length_squared() - along * along;
        if offset_sq > DEBRIS_PICK_RADIUS * DEBRIS_PICK_RADIUS {
            continue;
        }
        if best.map_or(true, |(t, _)| along < t) {
            best = Some((along, entity));
        }
    }
    best.map(|(_, entity)| entity)
}

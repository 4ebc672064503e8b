//! Carrier system — tracks the held object to the hand anchor and executes
//! throws.
//!
//! The held object's velocity is forced to zero every tick, so the debris
//! field resumes from rest when ownership returns to it.

use glam::DVec3;
use hecs::World;

use driftwell_core::components::{DebrisBody, DebrisTag, Orientation};
use driftwell_core::constants::{CARRIER_FOLLOW_RATE, CARRIER_TURN_RATE, THROW_SPEED};
use driftwell_core::enums::DebrisState;
use driftwell_core::events::SessionEvent;
use driftwell_core::types::{Position, SimTime, Velocity};

use crate::player::{AimTransform, CarrierSlot, InputState};

pub fn run(world: &mut World, carrier: &mut CarrierSlot, input: &InputState, dt: f64) {
    let Some(entity) = carrier.held else {
        return;
    };
    let anchor = input.aim.hold_point();
    let facing_yaw = input.aim.forward.x.atan2(input.aim.forward.z);

    match world.query_one_mut::<(&mut Position, &mut Velocity, &mut Orientation, &DebrisBody)>(
        entity,
    ) {
        Ok((pos, vel, orient, body)) => {
            if body.state != DebrisState::Held {
                // Ownership was cleared elsewhere; drop the stale reference.
                carrier.clear();
                return;
            }
            let follow = 1.0 - (-CARRIER_FOLLOW_RATE * dt).exp();
            let turn = 1.0 - (-CARRIER_TURN_RATE * dt).exp();
            pos.0 = pos.0.lerp(anchor, follow);
            vel.0 = DVec3::ZERO;
            orient.yaw = blend_angle(orient.yaw, facing_yaw, turn);
            orient.pitch *= 1.0 - turn;
            orient.roll *= 1.0 - turn;
        }
        Err(_) => carrier.clear(),
    }
}

/// Throw the held object along the aim forward. A throw with nothing held
/// is a no-op.
pub fn throw_held(
    world: &mut World,
    carrier: &mut CarrierSlot,
    aim: &AimTransform,
    time: &SimTime,
    events: &mut Vec<SessionEvent>,
) {
    let Some(entity) = carrier.held else {
        return;
    };
    if let Ok((tag, vel, body)) =
        world.query_one_mut::<(&DebrisTag, &mut Velocity, &mut DebrisBody)>(entity)
    {
        let dir = aim.forward.normalize_or_zero();
        let dir = if dir == DVec3::ZERO { DVec3::NEG_Z } else { dir };
        vel.0 = dir * THROW_SPEED;
        body.state = DebrisState::Thrown;
        body.thrown_at = Some(time.elapsed_secs);
        events.push(SessionEvent::Thrown { debris_id: tag.id });
    }
    carrier.clear();
}

/// Blend `current` toward `target` along the shortest arc.
fn blend_angle(current: f64, target: f64, t: f64) -> f64 {
    let mut delta = (target - current).rem_euclid(std::f64::consts::TAU);
    if delta > std::f64::consts::PI {
        delta -= std::f64::consts::TAU;
    }
    current + delta * t
}

//! Debris field physics — per-tick integration and local state transitions
//! for every object the field owns.
//!
//! Objects in `Pulled | Held | Respawning` are skipped entirely; that
//! exclusion is the sole concurrency-safety mechanism of the simulation
//! (exactly one writer per entity per tick).

use glam::DVec3;
use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use driftwell_core::components::{DebrisBody, DebrisTag, Orientation, Spin};
use driftwell_core::constants::*;
use driftwell_core::enums::DebrisState;
use driftwell_core::types::{Position, SimTime, Velocity};

use crate::systems::respawn::RespawnQueue;

pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    time: &SimTime,
    dt: f64,
    respawns: &mut RespawnQueue,
    round_token: u32,
) {
    let now = time.elapsed_secs;
    let mut disposals: Vec<hecs::Entity> = Vec::new();

    for (entity, (_tag, pos, vel, body, spin, orient)) in world.query_mut::<(
        &DebrisTag,
        &mut Position,
        &mut Velocity,
        &mut DebrisBody,
        &mut Spin,
        &mut Orientation,
    )>() {
        if !body.state.field_owned() {
            continue;
        }

        let radial = pos.radial_distance();
        if radial < PIT_RADIUS {
            // Over the pit: thrown objects keep their momentum tag, but the
            // well pulls on everything.
            if body.state != DebrisState::Thrown {
                body.state = DebrisState::Falling;
            }
            vel.0.y -= GRAVITY_ACCEL * dt;
            if radial > 1e-6 {
                let inward = -DVec3::new(pos.0.x, 0.0, pos.0.z) / radial;
                let swirl = DVec3::new(-pos.0.z, 0.0, pos.0.x) / radial;
                vel.0 += (inward * VORTEX_PULL + swirl * VORTEX_SWIRL) * dt;
            }
        } else {
            match body.state {
                DebrisState::Floating => {
                    // Vertical velocity chases the shared oscillation;
                    // everything else is damped away.
                    let target_y = body.base_height
                        + (now * FLOAT_SPEED + body.float_phase).sin() * FLOAT_AMPLITUDE;
                    let desired = DVec3::new(0.0, (target_y - pos.0.y) * FLOAT_STIFFNESS, 0.0);
                    let blend = 1.0 - (-FLOAT_DAMPING * dt).exp();
                    vel.0 = vel.0.lerp(desired, blend);
                }
                DebrisState::Thrown => {
                    vel.0 *= (-THROWN_DRAG * dt).exp();
                    if vel.speed() < SETTLE_SPEED {
                        body.state = DebrisState::Floating;
                        body.thrown_at = None;
                        body.base_height = pos.0.y;
                    }
                }
                DebrisState::Falling => {
                    vel.0.y -= GRAVITY_ACCEL * dt;
                    if vel.speed() < SETTLE_SPEED {
                        body.state = DebrisState::Floating;
                        body.base_height = pos.0.y;
                    }
                }
                _ => unreachable!("field-owned states only"),
            }
        }

        pos.0 += vel.0 * dt;

        // Platform bounce: reflect about the upward normal with partial
        // energy retention and a random spin perturbation.
        let radial = pos.radial_distance();
        if radial >= PIT_RADIUS
            && radial <= PLATFORM_RADIUS
            && pos.0.y < PLATFORM_SURFACE_Y + DEBRIS_RADIUS
            && vel.0.y < 0.0
        {
            pos.0.y = PLATFORM_SURFACE_Y + DEBRIS_RADIUS;
            vel.0.y = -vel.0.y * RESTITUTION;
            vel.0.x *= RESTITUTION;
            vel.0.z *= RESTITUTION;
            spin.pitch_rate += rng.gen_range(-SPIN_KICK..SPIN_KICK);
            spin.roll_rate += rng.gen_range(-SPIN_KICK..SPIN_KICK);
        }

        orient.pitch += spin.pitch_rate * dt;
        orient.roll += spin.roll_rate * dt;

        // Pit disposal: below the kill plane the object leaves every other
        // subsystem's reach until the deferred respawn fires.
        if pos.0.y < KILL_PLANE_Y {
            body.state = DebrisState::Respawning;
            body.thrown_at = None;
            vel.0 = DVec3::ZERO;
            disposals.push(entity);
        }
    }

    for entity in disposals {
        respawns.schedule(entity, now + RESPAWN_DELAY_SECS, round_token);
    }
}

//! Entity spawn factories for populating the play field.
//!
//! Creates the debris population and the collection zones with appropriate
//! component bundles. Respawns sample fresh points through the same
//! `sample_spawn_point` used at population time.

use glam::DVec3;
use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use driftwell_core::components::*;
use driftwell_core::constants::*;
use driftwell_core::enums::{DebrisState, ZoneMotion};
use driftwell_core::types::{Position, Velocity};

/// Populate a fresh field: `DEBRIS_COUNT` floating objects in the spawn
/// annulus.
pub fn populate_field(world: &mut World, rng: &mut ChaCha8Rng, next_id: &mut u32) {
    for _ in 0..DEBRIS_COUNT {
        spawn_debris(world, rng, next_id);
    }
}

/// Spawn a single floating debris object at a random annulus point.
pub fn spawn_debris(world: &mut World, rng: &mut ChaCha8Rng, next_id: &mut u32) -> hecs::Entity {
    let point = sample_spawn_point(rng);
    let id = *next_id;
    *next_id += 1;

    let body = DebrisBody {
        state: DebrisState::Floating,
        float_phase: rng.gen_range(0.0..std::f64::consts::TAU),
        base_height: point.y,
        thrown_at: None,
    };
    let spin = Spin {
        pitch_rate: rng.gen_range(-SPIN_RATE_MAX..SPIN_RATE_MAX),
        roll_rate: rng.gen_range(-SPIN_RATE_MAX..SPIN_RATE_MAX),
    };

    world.spawn((
        DebrisTag { id },
        Position(point),
        Velocity(DVec3::ZERO),
        Orientation::default(),
        spin,
        body,
    ))
}

/// Sample a spawn point in the outer annulus at elevated height, clear of
/// the pit.
pub fn sample_spawn_point(rng: &mut ChaCha8Rng) -> DVec3 {
    let bearing: f64 = rng.gen_range(0.0..std::f64::consts::TAU);
    let radius: f64 = rng.gen_range(SPAWN_INNER_RADIUS..SPAWN_OUTER_RADIUS);
    let height: f64 = rng.gen_range(SPAWN_HEIGHT_MIN..SPAWN_HEIGHT_MAX);
    DVec3::new(radius * bearing.cos(), height, radius * bearing.sin())
}

/// Spawn the default zone layout: one static zone near the platform edge
/// and one zone orbiting the pit.
pub fn spawn_zones(world: &mut World) {
    spawn_zone(
        world,
        DVec3::new(PLATFORM_RADIUS - ZONE_RADIUS - 0.5, ZONE_HEIGHT, 0.0),
        ZONE_RADIUS,
        ZoneMotion::Static,
    );
    spawn_zone(
        world,
        DVec3::new(ZONE_ORBIT_RADIUS, ZONE_HEIGHT, 0.0),
        ZONE_RADIUS,
        ZoneMotion::Orbit {
            center: DVec3::new(0.0, ZONE_HEIGHT, 0.0),
            radius: ZONE_ORBIT_RADIUS,
            angular_speed: ZONE_ORBIT_SPEED,
            phase: 0.0,
            bob_amplitude: ZONE_BOB_AMPLITUDE,
            bob_speed: ZONE_BOB_SPEED,
        },
    );
}

/// Spawn a single collection zone. Zone ids are assigned in spawn order.
pub fn spawn_zone(
    world: &mut World,
    position: DVec3,
    radius: f64,
    motion: ZoneMotion,
) -> hecs::Entity {
    let id = {
        let mut query = world.query::<&CollectionZone>();
        query.iter().count() as u8
    };
    world.spawn((
        Position(position),
        CollectionZone { id, radius, motion },
    ))
}

//! Zone motion system — advances orbiting collection zones.
//!
//! Orbits are parameterized on elapsed simulation time, so zone positions
//! are a pure function of (offset center, time) and replay exactly.

use hecs::World;

use driftwell_core::components::CollectionZone;
use driftwell_core::enums::ZoneMotion;
use driftwell_core::types::Position;

pub fn run(world: &mut World, elapsed_secs: f64) {
    for (_entity, (pos, zone)) in world.query_mut::<(&mut Position, &CollectionZone)>() {
        if let ZoneMotion::Orbit {
            center,
            radius,
            angular_speed,
            phase,
            bob_amplitude,
            bob_speed,
        } = zone.motion
        {
            let angle = phase + elapsed_secs * angular_speed;
            pos.0.x = center.x + angle.cos() * radius;
            pos.0.z = center.z + angle.sin() * radius;
            pos.0.y = center.y + (elapsed_secs * bob_speed).sin() * bob_amplitude;
        }
    }
}

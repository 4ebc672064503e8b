//! Systems that operate on the simulation world each tick.
//!
//! Systems are free functions over `&mut World` (or `&World` for the
//! read-only snapshot). They do not own long-lived state beyond the small
//! schedule/score structs defined alongside them; the tick order is fixed
//! by `SessionEngine::run_systems`.

pub mod capture;
pub mod carrier;
pub mod debris_physics;
pub mod locomotion;
pub mod respawn;
pub mod snapshot;
pub mod targeting;
pub mod zone_motion;

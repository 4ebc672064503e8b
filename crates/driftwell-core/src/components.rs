//! ECS components for hecs entities.
//!
//! Components are plain data structs with no game logic.
//! Behavior lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::constants::THROW_IMMUNITY_SECS;
use crate::enums::{DebrisState, ZoneMotion};

/// Stable identity of a debris object, independent of its ECS entity handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebrisTag {
    pub id: u32,
}

/// Per-debris simulation state beyond position/velocity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebrisBody {
    pub state: DebrisState,
    /// Phase offset into the shared buoyancy oscillation (radians).
    pub float_phase: f64,
    /// Height the buoyancy oscillation is centered on. Rebased when a thrown
    /// object settles or a pulled object is released.
    pub base_height: f64,
    /// Simulation timestamp of the last throw, while in `Thrown`.
    pub thrown_at: Option<f64>,
}

impl DebrisBody {
    /// Whether a collection zone may capture this object at time `now`.
    /// Only floating debris and thrown debris past the immunity window
    /// are eligible; every owned or respawning object is excluded.
    pub fn capture_eligible(&self, now: f64) -> bool {
        match self.state {
            DebrisState::Floating => true,
            DebrisState::Thrown => self
                .thrown_at
                .is_some_and(|t| now - t >= THROW_IMMUNITY_SECS),
            _ => false,
        }
    }
}

/// Cosmetic tumble rates (rad/s) about two local axes.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Spin {
    pub pitch_rate: f64,
    pub roll_rate: f64,
}

/// Accumulated orientation (radians), advanced from `Spin` each tick.
/// Yaw is steered by the carrier while an object is held.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Orientation {
    pub pitch: f64,
    pub yaw: f64,
    pub roll: f64,
}

/// A capture volume that removes eligible debris and reports score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionZone {
    pub id: u8,
    pub radius: f64,
    pub motion: ZoneMotion,
}

//! Enumeration types used throughout the simulation.

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Lifecycle state of a debris object.
///
/// Exactly one subsystem may mutate a debris object's position/velocity in a
/// given tick, selected by this tag: the debris field for
/// `Floating | Falling | Thrown`, the targeting tool for `Pulled`, the
/// carrier for `Held`. `Respawning` objects are untouchable until the
/// deferred respawn fires.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DebrisState {
    /// Bobbing on the buoyancy oscillation over the platform.
    #[default]
    Floating,
    /// Dropping into the pit (or landing back onto the platform).
    Falling,
    /// Owned by the targeting tool, being drawn toward the player.
    Pulled,
    /// Owned by the carrier slot, tracking the hand anchor.
    Held,
    /// In free flight after a throw; capture-immune until the window expires.
    Thrown,
    /// Disposed into the pit, waiting for the deferred respawn.
    Respawning,
}

impl DebrisState {
    /// States whose position/velocity are integrated by the debris field.
    pub fn field_owned(self) -> bool {
        matches!(self, Self::Floating | Self::Falling | Self::Thrown)
    }

    /// States a targeting ray is allowed to acquire.
    pub fn targetable(self) -> bool {
        matches!(self, Self::Floating | Self::Falling | Self::Thrown)
    }
}

/// Round phase (top-level session state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundPhase {
    /// No round in progress; the field is empty.
    #[default]
    Idle,
    Active,
    Paused,
    /// Round clock expired; field frozen until restart.
    Complete,
}

/// Which pose the aim ray is cast from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AimSource {
    /// Desktop: screen center through the pointer-lock camera.
    #[default]
    HeadCamera,
    /// VR: controller position and forward vector.
    Controller,
}

/// How a collection zone moves.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ZoneMotion {
    /// Fixed in the play field (still subject to the locomotion offset).
    Static,
    /// Circular orbit around a center point, with a vertical bob.
    Orbit {
        center: DVec3,
        radius: f64,
        /// Radians per second.
        angular_speed: f64,
        /// Starting angle (radians).
        phase: f64,
        bob_amplitude: f64,
        bob_speed: f64,
    },
}

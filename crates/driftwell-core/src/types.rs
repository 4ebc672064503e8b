//! Fundamental geometric and simulation types.

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// 3D position in play-field space (meters, y up).
/// The field is centered on the origin: the pit disk surrounds x/z = 0 and
/// the platform annulus extends out to the field edge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position(pub DVec3);

/// 3D velocity in play-field space (m/s).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity(pub DVec3);

/// Simulation time, advanced by an injected per-tick delta.
/// All throw/combo/respawn timing is measured against `elapsed_secs`,
/// never against wall-clock samples taken inside systems.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl Position {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self(DVec3::new(x, y, z))
    }

    /// Horizontal (x/z plane) distance from the field center.
    pub fn radial_distance(&self) -> f64 {
        (self.0.x * self.0.x + self.0.z * self.0.z).sqrt()
    }

    /// Horizontal distance to another position.
    pub fn horizontal_distance_to(&self, other: &Position) -> f64 {
        let dx = other.0.x - self.0.x;
        let dz = other.0.z - self.0.z;
        (dx * dx + dz * dz).sqrt()
    }

    /// Full 3D distance to another position.
    pub fn distance_to(&self, other: &Position) -> f64 {
        self.0.distance(other.0)
    }

    /// Height above the platform surface plane.
    pub fn height(&self) -> f64 {
        self.0.y
    }
}

impl Velocity {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self(DVec3::new(x, y, z))
    }

    /// Speed magnitude (m/s).
    pub fn speed(&self) -> f64 {
        self.0.length()
    }

    /// Horizontal speed (ignoring the vertical component).
    pub fn horizontal_speed(&self) -> f64 {
        (self.0.x * self.0.x + self.0.z * self.0.z).sqrt()
    }
}

impl SimTime {
    /// Advance by one tick of `dt` seconds.
    pub fn advance(&mut self, dt: f64) {
        self.tick += 1;
        self.elapsed_secs += dt;
    }
}

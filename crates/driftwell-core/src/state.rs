//! Round snapshot — the complete visible state produced each tick.
//!
//! The render collaborator reads positions/orientations/states from it to
//! drive visuals; the scoring/UI collaborator reads score and remaining
//! time. Snapshots are read-only: collaborators never write simulation
//! state.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::enums::{AimSource, DebrisState, RoundPhase};
use crate::events::SessionEvent;
use crate::components::Orientation;
use crate::types::SimTime;

/// Complete simulation state visible to collaborators after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoundSnapshot {
    pub time: SimTime,
    pub phase: RoundPhase,
    /// Remaining round time in seconds (0 when no round is running).
    pub remaining_secs: f64,
    pub debris: Vec<DebrisView>,
    pub zones: Vec<ZoneView>,
    pub targeting: TargetingView,
    pub carrier: CarrierView,
    pub score: ScoreView,
    pub events: Vec<SessionEvent>,
}

/// A visible debris object.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DebrisView {
    pub id: u32,
    pub position: DVec3,
    pub orientation: Orientation,
    pub state: DebrisState,
    /// Respawning objects are hidden by the renderer until they reappear.
    pub visible: bool,
}

/// A visible collection zone.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ZoneView {
    pub id: u8,
    pub position: DVec3,
    pub radius: f64,
}

/// Targeting tool status.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TargetingView {
    pub active: bool,
    pub aim_source: AimSource,
    /// Debris id currently being pulled, if any.
    pub target: Option<u32>,
}

/// Carrier slot status.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CarrierView {
    /// Debris id currently held, if any.
    pub held: Option<u32>,
}

/// Running score for the scoring/UI collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreView {
    pub collected: u32,
    pub combo_count: u32,
    pub combo_multiplier: u32,
    pub points: u32,
}

impl Default for ScoreView {
    fn default() -> Self {
        Self {
            collected: 0,
            combo_count: 0,
            combo_multiplier: 1,
            points: 0,
        }
    }
}

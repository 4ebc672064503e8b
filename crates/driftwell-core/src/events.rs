//! Events emitted by the simulation for the scoring/UI collaborator.
//!
//! Events are drained into each tick's snapshot; the collaborator that
//! consumes the snapshot owns all display, sound, and timer presentation.

use serde::{Deserialize, Serialize};

/// Session events raised during a tick.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SessionEvent {
    /// A round was (re)started and the field repopulated.
    RoundStarted,
    /// The round clock expired.
    RoundComplete { collected: u32, points: u32 },
    /// The targeting ray acquired a new target.
    TargetAcquired { debris_id: u32 },
    /// A pulled object reached the hand and is now held.
    Grabbed { debris_id: u32 },
    /// The held object was thrown.
    Thrown { debris_id: u32 },
    /// A zone captured a debris object. Carries the updated totals the
    /// scoring collaborator needs for its callback.
    Captured {
        debris_id: u32,
        collected: u32,
        combo_count: u32,
        combo_multiplier: u32,
    },
    /// A disposed object reappeared in the spawn annulus.
    Respawned { debris_id: u32 },
}

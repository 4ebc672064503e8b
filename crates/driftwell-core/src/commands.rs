//! Player commands sent from the input collaborator to the simulation.
//!
//! Commands are queued and processed at the next tick boundary. The core
//! never reads input devices directly; the collaborator translates keyboard,
//! pointer-lock mouse, or VR controller events into these commands.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::enums::AimSource;

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Round lifecycle ---
    /// Start a round from Idle/Complete. Ignored while a round runs.
    StartRound,
    /// Reinitialize the round unconditionally; nothing persists across it.
    RestartRound,
    /// Pause the simulation.
    Pause,
    /// Resume the simulation.
    Resume,

    // --- Aim and movement (continuous input, latched until replaced) ---
    /// Update the aim transform for targeting, carrying, and throwing.
    SetAim {
        origin: DVec3,
        forward: DVec3,
        source: AimSource,
    },
    /// Set the continuous movement intent vector (world-frame locomotion).
    Move { intent: DVec3 },
    /// One-shot teleport by the given player displacement.
    Teleport { delta: DVec3 },

    // --- Acquisition ---
    /// Raise or lower the targeting activation flag.
    SetTargeting { active: bool },
    /// Throw the held object along the current aim forward.
    Throw,
}

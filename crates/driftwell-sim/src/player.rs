//! Player rig state — aim input, targeting slot, carry slot.
//!
//! Stored on `SessionEngine`, NOT as ECS entities: there is exactly one
//! player, and the single-slot semantics (one target, one held object) are
//! easier to enforce on plain structs.

use glam::DVec3;

use driftwell_core::constants::{HOLD_DISTANCE_CAMERA, HOLD_DISTANCE_CONTROLLER, HOLD_DROP};
use driftwell_core::enums::AimSource;

/// The aim ray supplied by the input collaborator each frame.
#[derive(Debug, Clone, Copy)]
pub struct AimTransform {
    pub origin: DVec3,
    /// Unit forward direction (normalized on ingest).
    pub forward: DVec3,
    pub source: AimSource,
}

impl Default for AimTransform {
    fn default() -> Self {
        Self {
            // Standing eye height at the field center, looking down -z.
            origin: DVec3::new(0.0, 1.6, 0.0),
            forward: DVec3::NEG_Z,
            source: AimSource::HeadCamera,
        }
    }
}

impl AimTransform {
    /// The point pulled/held objects are drawn toward. Camera aim holds the
    /// object out in front and slightly below the view line; a controller
    /// holds it just past the hand.
    pub fn hold_point(&self) -> DVec3 {
        match self.source {
            AimSource::HeadCamera => {
                self.origin + self.forward * HOLD_DISTANCE_CAMERA - DVec3::Y * HOLD_DROP
            }
            AimSource::Controller => self.origin + self.forward * HOLD_DISTANCE_CONTROLLER,
        }
    }
}

/// Latched continuous input, updated by commands at tick boundaries.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    pub aim: AimTransform,
    pub targeting_active: bool,
    /// World-frame movement intent (y ignored by locomotion).
    pub move_intent: DVec3,
    /// One-shot teleport displacement, consumed by the next locomotion pass.
    pub pending_teleport: Option<DVec3>,
}

/// The targeting tool's view of the world: at most one pulled object.
#[derive(Debug, Clone, Copy, Default)]
pub struct TargetingState {
    pub target: Option<hecs::Entity>,
}

/// The single "currently held" slot.
#[derive(Debug, Clone, Copy, Default)]
pub struct CarrierSlot {
    pub held: Option<hecs::Entity>,
}

impl CarrierSlot {
    /// Take ownership of `entity`. Re-attaching the held object is an
    /// idempotent no-op; attaching while holding a *different* object is
    /// rejected as a benign conflict.
    pub fn attach(&mut self, entity: hecs::Entity) -> bool {
        match self.held {
            None => {
                self.held = Some(entity);
                true
            }
            Some(current) => current == entity,
        }
    }

    pub fn clear(&mut self) {
        self.held = None;
    }
}

//! Capture system — zone eligibility tests, exactly-once removal, and combo
//! scoring.
//!
//! Runs after physics and targeting so captures reflect final per-tick
//! positions, including freshly thrown objects.

use hecs::World;

use driftwell_core::components::{CollectionZone, DebrisBody, DebrisTag};
use driftwell_core::constants::{COMBO_MAX_MULTIPLIER, COMBO_WINDOW_SECS};
use driftwell_core::events::SessionEvent;
use driftwell_core::types::{Position, SimTime};

/// Running score state tracked by the engine.
#[derive(Debug, Clone)]
pub struct ScoreState {
    pub collected: u32,
    pub combo_count: u32,
    pub combo_multiplier: u32,
    pub points: u32,
    /// Simulation timestamp of the previous capture.
    pub last_capture_at: Option<f64>,
}

impl Default for ScoreState {
    fn default() -> Self {
        Self {
            collected: 0,
            combo_count: 0,
            combo_multiplier: 1,
            points: 0,
            last_capture_at: None,
        }
    }
}

impl ScoreState {
    /// Record a capture at time `now`: the combo chain continues while
    /// captures land inside the combo window, otherwise it resets to base.
    pub fn register_capture(&mut self, now: f64) {
        let chained = self
            .last_capture_at
            .is_some_and(|last| now - last <= COMBO_WINDOW_SECS);
        self.combo_count = if chained { self.combo_count + 1 } else { 1 };
        self.combo_multiplier = self.combo_count.min(COMBO_MAX_MULTIPLIER);
        self.collected += 1;
        self.points += self.combo_multiplier;
        self.last_capture_at = Some(now);
    }
}

/// Test every eligible debris object against every zone, removing matches
/// exactly once. An object captured by one zone this tick is never
/// re-tested by subsequent zones.
pub fn run(
    world: &mut World,
    score: &mut ScoreState,
    time: &SimTime,
    events: &mut Vec<SessionEvent>,
    despawn_buffer: &mut Vec<hecs::Entity>,
) {
    despawn_buffer.clear();
    let now = time.elapsed_secs;

    let zones: Vec<(Position, f64)> = {
        let mut query = world.query::<(&Position, &CollectionZone)>();
        query.iter().map(|(_, (pos, zone))| (*pos, zone.radius)).collect()
    };
    if zones.is_empty() {
        return;
    }

    {
        let mut query = world.query::<(&DebrisTag, &Position, &DebrisBody)>();
        for (entity, (tag, pos, body)) in query.iter() {
            if !body.capture_eligible(now) {
                continue;
            }
            for (zone_pos, radius) in &zones {
                if pos.distance_to(zone_pos) <= *radius {
                    score.register_capture(now);
                    events.push(SessionEvent::Captured {
                        debris_id: tag.id,
                        collected: score.collected,
                        combo_count: score.combo_count,
                        combo_multiplier: score.combo_multiplier,
                    });
                    despawn_buffer.push(entity);
                    break;
                }
            }
        }
    }

    // Captured objects are fully removed and disposed.
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}

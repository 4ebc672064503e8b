//! Simulation constants and tuning parameters.
//!
//! All rates are per second; the engine integrates with an injected,
//! clamped per-tick delta, so none of these depend on a fixed tick rate.

/// Maximum delta-time accepted for a single tick (seconds). Larger frame
/// stalls are clamped to this step to keep the integration stable.
pub const MAX_TICK_STEP: f64 = 0.1;

/// Round length in seconds.
pub const ROUND_DURATION_SECS: f64 = 90.0;

// --- Field geometry ---

/// Number of debris objects populating the field.
pub const DEBRIS_COUNT: usize = 18;

/// Radius of the central pit disk.
pub const PIT_RADIUS: f64 = 2.5;

/// Outer radius of the platform annulus.
pub const PLATFORM_RADIUS: f64 = 7.0;

/// Height of the platform surface.
pub const PLATFORM_SURFACE_Y: f64 = 0.0;

/// Effective debris radius used for platform contact and ray picking.
pub const DEBRIS_RADIUS: f64 = 0.18;

/// Height below which a debris object is disposed and scheduled for respawn.
pub const KILL_PLANE_Y: f64 = -15.0;

// --- Spawn annulus ---

/// Inner radius of the spawn annulus (clear of the pit).
pub const SPAWN_INNER_RADIUS: f64 = 3.2;

/// Outer radius of the spawn annulus.
pub const SPAWN_OUTER_RADIUS: f64 = 6.2;

/// Elevation band for freshly spawned debris.
pub const SPAWN_HEIGHT_MIN: f64 = 1.1;
pub const SPAWN_HEIGHT_MAX: f64 = 2.1;

// --- Buoyant floating ---

/// Angular speed of the shared buoyancy oscillation (rad/s).
pub const FLOAT_SPEED: f64 = 1.6;

/// Vertical amplitude of the oscillation (meters).
pub const FLOAT_AMPLITUDE: f64 = 0.18;

/// Gain converting height error into desired vertical velocity (1/s).
pub const FLOAT_STIFFNESS: f64 = 2.0;

/// Decay rate blending velocity toward the oscillation (1/s).
pub const FLOAT_DAMPING: f64 = 4.0;

// --- Pit forces ---

/// Downward acceleration applied to falling debris (m/s²).
pub const GRAVITY_ACCEL: f64 = 9.0;

/// Inward radial acceleration inside the pit (m/s²).
pub const VORTEX_PULL: f64 = 2.2;

/// Tangential swirl acceleration inside the pit (m/s²).
pub const VORTEX_SWIRL: f64 = 3.5;

// --- Thrown flight ---

/// Air drag decay rate on thrown debris (1/s).
pub const THROWN_DRAG: f64 = 0.5;

/// Speed below which thrown/falling debris settles back to floating (m/s).
pub const SETTLE_SPEED: f64 = 0.3;

/// Launch speed applied on throw (m/s).
pub const THROW_SPEED: f64 = 8.0;

/// Post-throw interval during which a thrown object cannot be captured.
pub const THROW_IMMUNITY_SECS: f64 = 0.5;

// --- Platform bounce ---

/// Velocity retained after a platform bounce.
pub const RESTITUTION: f64 = 0.45;

/// Magnitude bound of the random spin perturbation on bounce (rad/s).
pub const SPIN_KICK: f64 = 3.0;

/// Magnitude bound of the initial tumble rates at spawn (rad/s).
pub const SPIN_RATE_MAX: f64 = 1.5;

// --- Targeting ---

/// Ray-pick radius around a debris center.
pub const DEBRIS_PICK_RADIUS: f64 = 0.35;

/// Speed at which a pulled object is drawn toward the hold point (m/s).
pub const PULL_SPEED: f64 = 6.0;

/// Distance to the hold point below which ownership passes to the carrier.
pub const PULL_CAPTURE_RANGE: f64 = 0.4;

// --- Carrier ---

/// Hold-point distance along the camera aim ray.
pub const HOLD_DISTANCE_CAMERA: f64 = 1.1;

/// Hold point drop below the camera aim line, so the object does not
/// obscure the view.
pub const HOLD_DROP: f64 = 0.15;

/// Hold-point distance along a controller aim ray.
pub const HOLD_DISTANCE_CONTROLLER: f64 = 0.55;

/// Exponential rate at which a held object closes on the hand anchor (1/s).
pub const CARRIER_FOLLOW_RATE: f64 = 14.0;

/// Exponential rate at which a held object turns to the player facing (1/s).
pub const CARRIER_TURN_RATE: f64 = 10.0;

// --- Respawn ---

/// Delay between pit disposal and reappearance in the spawn annulus.
pub const RESPAWN_DELAY_SECS: f64 = 0.3;

// --- Scoring ---

/// Maximum time between captures for the combo chain to continue.
pub const COMBO_WINDOW_SECS: f64 = 3.0;

/// Cap on the combo multiplier.
pub const COMBO_MAX_MULTIPLIER: u32 = 5;

// --- Locomotion ---

/// Continuous movement speed of the player (m/s).
pub const MOVE_SPEED: f64 = 2.5;

// --- Zone layout ---

/// Capture radius of the default zones.
pub const ZONE_RADIUS: f64 = 1.2;

/// Orbit radius of the moving zone.
pub const ZONE_ORBIT_RADIUS: f64 = 5.0;

/// Orbit angular speed of the moving zone (rad/s).
pub const ZONE_ORBIT_SPEED: f64 = 0.25;

/// Height of the default zones. Kept above the float band plus the capture
/// radius, so idle floating debris is never captured without a throw.
pub const ZONE_HEIGHT: f64 = 3.8;

/// Vertical bob of the moving zone.
pub const ZONE_BOB_AMPLITUDE: f64 = 0.2;
pub const ZONE_BOB_SPEED: f64 = 0.7;

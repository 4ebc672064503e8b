//! Simulation engine for DRIFTWELL.
//!
//! Owns the hecs ECS world, runs the per-tick systems in a fixed order,
//! and produces RoundSnapshots for the render and scoring collaborators.
//! Completely headless (no renderer dependency), enabling deterministic
//! testing.

pub mod engine;
pub mod field_setup;
pub mod player;
pub mod systems;

pub use driftwell_core as core;
pub use engine::SessionEngine;

//! Simulation engine for Garden Defense.
//!
//! Owns the session state, interprets player commands, advances the
//! tick-driven timers and systems, and produces `GameState` snapshots
//! for presentation. Completely headless, enabling deterministic testing.

pub mod engine;
pub mod runtime;
pub mod systems;
pub mod timers;
pub mod waves;

pub use engine::{GameEngine, SimConfig};
pub use garden_core as core;

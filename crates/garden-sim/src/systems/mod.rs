//! Per-tick simulation systems, one module per concern.
//!
//! Each system is a free function over `&mut GameState`; the engine calls
//! them in the fixed order that defines the tick semantics.

pub mod combat;
pub mod detonation;
pub mod economy;
pub mod effects;
pub mod movement;
pub mod projectiles;
pub mod spawner;

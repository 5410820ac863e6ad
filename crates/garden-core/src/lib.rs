//! Core types and definitions for the Garden Defense simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! entities, commands, the state snapshot, catalog tables, and constants.
//! It has no dependency on any runtime framework.

pub mod catalog;
pub mod commands;
pub mod constants;
pub mod entities;
pub mod enums;
pub mod state;

#[cfg(test)]
mod tests;

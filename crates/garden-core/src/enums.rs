//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Defensive unit type — the selectable catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PlantType {
    /// Single-shot ranged attacker.
    Peashooter,
    /// Produces suns on a fixed interval.
    Sunflower,
    /// Single-use trap; arms after a delay, destroys one zombie on contact.
    PotatoMine,
    /// Instant 3x3 blast on placement; never occupies a cell.
    CherryBomb,
    /// Ranged attacker firing two peas per volley.
    Repeater,
    /// Melee attacker striking the cell ahead.
    Cucumber,
    /// Mobile unit that walks forward and detonates on the first zombie hit.
    Eggplant,
    /// Area bomb that re-arms after a sleep period instead of dying.
    Strawberry,
    /// Slows any zombie that walks over its cell.
    Weed,
}

/// Enemy type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZombieType {
    Normal,
    /// Double speed, same health as Normal.
    Fast,
    /// Slow but heavily armored.
    Armored,
    /// Fires plant-destroying bolts down its lane.
    Magic,
}

/// Top-level session status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    Menu,
    LoadoutSelect,
    ChallengeSelect,
    Playing,
    Paused,
    Defeated,
    Victory,
}

/// Named challenge modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChallengeKind {
    /// Sunflower removed from the selectable catalog.
    NoSunflower,
    /// Catalog restricted to the four bomb-centric plants.
    Boom,
    /// Super-linear wave growth and a longer preparation window.
    Brutal,
}

/// An active challenge: the modifier plus how many waves it runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Challenge {
    pub kind: ChallengeKind,
    pub waves: usize,
}

impl Challenge {
    pub fn no_sunflower() -> Self {
        Self {
            kind: ChallengeKind::NoSunflower,
            waves: 25,
        }
    }

    pub fn boom() -> Self {
        Self {
            kind: ChallengeKind::Boom,
            waves: 25,
        }
    }

    pub fn brutal() -> Self {
        Self {
            kind: ChallengeKind::Brutal,
            waves: 10,
        }
    }
}

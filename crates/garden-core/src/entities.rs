//! Entity structs held by the state snapshot.
//!
//! Plain data, no methods beyond small geometry accessors. Each unit
//! category is a tagged union carrying exactly the timer fields its
//! behavior needs; game logic lives in the simulation systems.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::constants::{CELL_SIZE, ZOMBIE_HIT_WIDTH};
use crate::enums::{PlantType, ZombieType};

/// A stationary defensive unit anchored to one grid cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plant {
    pub id: u32,
    pub row: usize,
    pub col: usize,
    pub kind: PlantKind,
}

/// Per-type plant state. Cherry bombs and eggplants never appear here:
/// the former is an instant placement effect, the latter a `Runner`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlantKind {
    Peashooter,
    Sunflower,
    Repeater,
    Weed,
    PotatoMine {
        /// Remaining arming delay; the mine detonates only at <= 0.
        arm_ms: f64,
    },
    Cucumber {
        attack_cooldown_ms: f64,
        /// Remaining swing animation; nonzero means mid-strike.
        swing_ms: f64,
    },
    Strawberry {
        sleeping: bool,
        sleep_ms: f64,
    },
}

impl Plant {
    pub fn plant_type(&self) -> PlantType {
        match self.kind {
            PlantKind::Peashooter => PlantType::Peashooter,
            PlantKind::Sunflower => PlantType::Sunflower,
            PlantKind::Repeater => PlantType::Repeater,
            PlantKind::Weed => PlantType::Weed,
            PlantKind::PotatoMine { .. } => PlantType::PotatoMine,
            PlantKind::Cucumber { .. } => PlantType::Cucumber,
            PlantKind::Strawberry { .. } => PlantType::Strawberry,
        }
    }
}

/// A mobile defensive unit walking toward the zombie side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Runner {
    pub id: u32,
    pub row: usize,
    pub x: f64,
    pub kind: PlantType,
}

/// An advancing enemy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Zombie {
    pub id: u32,
    pub row: usize,
    pub x: f64,
    pub health: i32,
    pub slowed: bool,
    pub kind: ZombieKind,
}

/// Per-type zombie state; only magic zombies carry a weapon cooldown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ZombieKind {
    Normal,
    Fast,
    Armored,
    Magic { bolt_cooldown_ms: f64 },
}

impl Zombie {
    pub fn zombie_type(&self) -> ZombieType {
        match self.kind {
            ZombieKind::Normal => ZombieType::Normal,
            ZombieKind::Fast => ZombieType::Fast,
            ZombieKind::Armored => ZombieType::Armored,
            ZombieKind::Magic { .. } => ZombieType::Magic,
        }
    }

    /// Column of the cell the zombie's hitbox center is over.
    pub fn cell_col(&self) -> i32 {
        ((self.x + ZOMBIE_HIT_WIDTH / 2.0) / CELL_SIZE).floor() as i32
    }
}

/// A pea fired by a ranged plant; travels toward the zombie side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pea {
    pub id: u32,
    pub row: usize,
    pub x: f64,
}

/// A bolt fired by a magic zombie; travels toward the defended edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MagicBolt {
    pub id: u32,
    pub row: usize,
    pub x: f64,
}

/// Collectible sun pickup. Sky-spawned suns fall toward `target_y`;
/// sunflower-produced suns sit where they were emitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SunDrop {
    pub id: u32,
    pub pos: DVec2,
    pub falling: bool,
    pub target_y: f64,
}

/// Transient blast marker for presentation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Explosion {
    pub id: u32,
    pub row: usize,
    pub col: usize,
    pub ttl_ms: f64,
    /// Cherry-bomb blasts render one cell larger in every direction.
    pub large: bool,
}

/// Transient melee/contact hit marker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HitSplat {
    pub id: u32,
    pub row: usize,
    pub x: f64,
    pub ttl_ms: f64,
}

//! The session state — the complete snapshot visible to presentation.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::catalog::ALL_PLANTS;
use crate::constants::{IDLE_SPAWN_INTERVAL_MS, INITIAL_SUNS};
use crate::entities::*;
use crate::enums::{Challenge, GameStatus, PlantType, ZombieType};

/// One wave's composition and spawn pacing. Immutable once generated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WaveSpec {
    pub normal: u32,
    pub fast: u32,
    pub armored: u32,
    pub magic: u32,
    pub spawn_interval_ms: f64,
}

impl WaveSpec {
    pub fn total(&self) -> u32 {
        self.normal + self.fast + self.armored + self.magic
    }
}

/// Monotonic per-category id counters; ids are never reused in a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdCounters {
    pub plant: u32,
    pub runner: u32,
    pub zombie: u32,
    pub pea: u32,
    pub bolt: u32,
    pub sun: u32,
    pub explosion: u32,
    pub hit_splat: u32,
}

/// Claim the next id from a counter.
pub fn take_id(counter: &mut u32) -> u32 {
    let id = *counter;
    *counter += 1;
    id
}

/// Complete game state. Cloned wholesale as the snapshot handed to
/// presentation; external readers never see a partially updated value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub status: GameStatus,

    // Entity collections, each in ascending creation order. Scan order
    // doubles as the tie-break for "first target hit".
    pub plants: Vec<Plant>,
    pub runners: Vec<Runner>,
    pub zombies: Vec<Zombie>,
    pub peas: Vec<Pea>,
    pub bolts: Vec<MagicBolt>,
    pub sun_drops: Vec<SunDrop>,
    pub explosions: Vec<Explosion>,
    pub hit_splats: Vec<HitSplat>,

    pub suns: u32,
    pub selected_plant: Option<PlantType>,
    /// Remaining selection cooldown per plant type, floored at zero.
    pub cooldowns: BTreeMap<PlantType, f64>,
    pub next_ids: IdCounters,
    pub chosen_plants: Vec<PlantType>,
    pub challenge: Option<Challenge>,

    // Wave state
    pub waves: Vec<WaveSpec>,
    pub current_wave: usize,
    /// Zombie count of the active wave; zero marks the wave inactive.
    pub wave_total: u32,
    pub spawn_queue: Vec<ZombieType>,
    pub spawn_interval_ms: f64,
    pub preparation_ms: f64,
    pub announcement: Option<String>,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            status: GameStatus::Menu,
            plants: Vec::new(),
            runners: Vec::new(),
            zombies: Vec::new(),
            peas: Vec::new(),
            bolts: Vec::new(),
            sun_drops: Vec::new(),
            explosions: Vec::new(),
            hit_splats: Vec::new(),
            suns: INITIAL_SUNS,
            selected_plant: None,
            cooldowns: ALL_PLANTS.iter().map(|p| (*p, 0.0)).collect(),
            next_ids: IdCounters::default(),
            chosen_plants: Vec::new(),
            challenge: None,
            waves: Vec::new(),
            current_wave: 0,
            wave_total: 0,
            spawn_queue: Vec::new(),
            spawn_interval_ms: IDLE_SPAWN_INTERVAL_MS,
            preparation_ms: 0.0,
            announcement: None,
        }
    }
}

impl GameState {
    /// Announcement text for the given 0-based wave index.
    pub fn wave_announcement(index: usize) -> String {
        format!("Get ready for Wave {}!", index + 1)
    }
}

//! Static per-type stat tables for plants and zombies.
//!
//! Pure data; all behavior lives in the simulation systems.

use crate::constants::*;
use crate::enums::{Challenge, ChallengeKind, PlantType, ZombieType};

/// Placement cost and selection cooldown of a plant type.
#[derive(Debug, Clone, Copy)]
pub struct PlantStats {
    pub cost: u32,
    pub cooldown_ms: f64,
}

/// Starting health and walk speed of a zombie type.
#[derive(Debug, Clone, Copy)]
pub struct ZombieStats {
    pub health: i32,
    /// Pixels per tick toward the defended edge.
    pub speed: f64,
}

/// Every plant type, in catalog display order.
pub const ALL_PLANTS: [PlantType; 9] = [
    PlantType::Sunflower,
    PlantType::Peashooter,
    PlantType::Repeater,
    PlantType::PotatoMine,
    PlantType::CherryBomb,
    PlantType::Cucumber,
    PlantType::Eggplant,
    PlantType::Strawberry,
    PlantType::Weed,
];

pub const fn plant_stats(plant: PlantType) -> PlantStats {
    match plant {
        PlantType::Peashooter => PlantStats {
            cost: 100,
            cooldown_ms: 12_500.0,
        },
        PlantType::Sunflower => PlantStats {
            cost: 50,
            cooldown_ms: 10_000.0,
        },
        PlantType::PotatoMine => PlantStats {
            cost: 25,
            cooldown_ms: 25_000.0,
        },
        PlantType::CherryBomb => PlantStats {
            cost: 150,
            cooldown_ms: 30_000.0,
        },
        PlantType::Repeater => PlantStats {
            cost: 250,
            cooldown_ms: 15_000.0,
        },
        PlantType::Cucumber => PlantStats {
            cost: 75,
            cooldown_ms: 20_000.0,
        },
        PlantType::Eggplant => PlantStats {
            cost: 100,
            cooldown_ms: 17_500.0,
        },
        PlantType::Strawberry => PlantStats {
            cost: 75,
            cooldown_ms: 30_000.0,
        },
        PlantType::Weed => PlantStats {
            cost: 25,
            cooldown_ms: 10_000.0,
        },
    }
}

pub const fn zombie_stats(zombie: ZombieType) -> ZombieStats {
    match zombie {
        ZombieType::Normal => ZombieStats {
            health: 3,
            speed: 0.5,
        },
        ZombieType::Fast => ZombieStats {
            health: 3,
            speed: 1.0,
        },
        ZombieType::Armored => ZombieStats {
            health: 10,
            speed: 0.25,
        },
        ZombieType::Magic => ZombieStats {
            health: 5,
            speed: 0.6,
        },
    }
}

/// Plants selectable under the given challenge (all nine when none).
pub fn available_plants(challenge: Option<Challenge>) -> Vec<PlantType> {
    match challenge.map(|c| c.kind) {
        Some(ChallengeKind::NoSunflower) => ALL_PLANTS
            .iter()
            .copied()
            .filter(|p| *p != PlantType::Sunflower)
            .collect(),
        Some(ChallengeKind::Boom) => vec![
            PlantType::PotatoMine,
            PlantType::CherryBomb,
            PlantType::Strawberry,
            PlantType::Sunflower,
        ],
        Some(ChallengeKind::Brutal) | None => ALL_PLANTS.to_vec(),
    }
}

/// Preparation window before the first wave under the given challenge.
pub fn preparation_ms(challenge: Option<Challenge>) -> f64 {
    match challenge.map(|c| c.kind) {
        Some(ChallengeKind::Brutal) => BRUTAL_PREPARATION_TIME_MS,
        _ => PREPARATION_TIME_MS,
    }
}

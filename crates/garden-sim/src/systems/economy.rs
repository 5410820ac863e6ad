//! Sun economy: passive spawns, sunflower production, and collection.

use glam::DVec2;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use garden_core::constants::{CELL_SIZE, GRID_HEIGHT, GRID_WIDTH, MAX_SUNS, SUN_SIZE, SUN_VALUE};
use garden_core::entities::{PlantKind, SunDrop};
use garden_core::state::{take_id, GameState};

/// Spawn one sun above a random board position, falling to a random
/// target height.
pub fn spawn_natural_sun(state: &mut GameState, rng: &mut ChaCha8Rng) {
    let x = rng.gen::<f64>() * (GRID_WIDTH - SUN_SIZE);
    let target_y = rng.gen::<f64>() * (GRID_HEIGHT - SUN_SIZE);
    let id = take_id(&mut state.next_ids.sun);
    state.sun_drops.push(SunDrop {
        id,
        pos: DVec2::new(x, -SUN_SIZE),
        falling: true,
        target_y,
    });
}

/// Every sunflower emits one sun at its own cell with a small jitter.
/// Produced suns sit in place; they do not fall.
pub fn produce_suns(state: &mut GameState, rng: &mut ChaCha8Rng) {
    let mut drops = Vec::new();
    for plant in &state.plants {
        if !matches!(plant.kind, PlantKind::Sunflower) {
            continue;
        }
        let jitter_x = rng.gen::<f64>() * 20.0 - 10.0;
        let jitter_y = rng.gen::<f64>() * 20.0 - 10.0;
        drops.push(DVec2::new(
            plant.col as f64 * CELL_SIZE + jitter_x,
            plant.row as f64 * CELL_SIZE + jitter_y,
        ));
    }

    for pos in drops {
        let id = take_id(&mut state.next_ids.sun);
        state.sun_drops.push(SunDrop {
            id,
            pos,
            falling: false,
            target_y: 0.0,
        });
    }
}

/// Collect a sun by id: remove it and credit its value, clamped to the
/// counter ceiling. An unknown id is a silent no-op.
pub fn collect_sun(state: &mut GameState, id: u32) {
    let Some(index) = state.sun_drops.iter().position(|s| s.id == id) else {
        return;
    };
    state.sun_drops.remove(index);
    state.suns = (state.suns + SUN_VALUE).min(MAX_SUNS);
}

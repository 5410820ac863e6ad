//! Detonations: armed potato mines and non-sleeping strawberries.

use garden_core::constants::{EXPLOSION_TTL_MS, STRAWBERRY_DAMAGE, STRAWBERRY_SLEEP_MS};
use garden_core::entities::{Explosion, PlantKind};
use garden_core::state::{take_id, GameState};

/// Each armed mine sharing a cell with a live zombie destroys that zombie
/// and itself. A mine consumes at most one zombie per tick, and a zombie
/// triggers at most one mine.
pub fn mine_detonations(state: &mut GameState) {
    // (plant id, row, col) of every still-available armed mine.
    let mut armed: Vec<(u32, usize, usize)> = state
        .plants
        .iter()
        .filter(|p| matches!(p.kind, PlantKind::PotatoMine { arm_ms } if arm_ms <= 0.0))
        .map(|p| (p.id, p.row, p.col))
        .collect();

    let mut dead_zombies = Vec::new();
    let mut spent_mines = Vec::new();

    for zombie in &state.zombies {
        let cell_col = zombie.cell_col();
        let hit = armed
            .iter()
            .position(|(_, row, col)| *row == zombie.row && *col as i32 == cell_col);
        let Some(index) = hit else { continue };

        let (mine_id, row, col) = armed.remove(index);
        dead_zombies.push(zombie.id);
        spent_mines.push(mine_id);

        let id = take_id(&mut state.next_ids.explosion);
        state.explosions.push(Explosion {
            id,
            row,
            col,
            ttl_ms: EXPLOSION_TTL_MS,
            large: false,
        });
    }

    state.zombies.retain(|z| !dead_zombies.contains(&z.id));
    state.plants.retain(|p| !spent_mines.contains(&p.id));
}

/// Each awake strawberry with any zombie in the 3x3 block around it
/// damages every zombie in that block, emits an explosion, and falls
/// asleep for its fixed sleep duration. It is not removed; it re-arms
/// when the sleep timer runs out.
pub fn strawberry_detonations(state: &mut GameState) {
    for i in 0..state.plants.len() {
        let (row, col) = (state.plants[i].row, state.plants[i].col);
        match state.plants[i].kind {
            PlantKind::Strawberry { sleeping: false, .. } => {}
            _ => continue,
        }

        let in_blast = |z_row: usize, z_col: i32| {
            z_row.abs_diff(row) <= 1 && (z_col - col as i32).abs() <= 1
        };

        let triggered = state
            .zombies
            .iter()
            .any(|z| in_blast(z.row, z.cell_col()));
        if !triggered {
            continue;
        }

        state.plants[i].kind = PlantKind::Strawberry {
            sleeping: true,
            sleep_ms: STRAWBERRY_SLEEP_MS,
        };

        let id = take_id(&mut state.next_ids.explosion);
        state.explosions.push(Explosion {
            id,
            row,
            col,
            ttl_ms: EXPLOSION_TTL_MS,
            large: false,
        });

        for zombie in &mut state.zombies {
            if in_blast(zombie.row, zombie.cell_col()) {
                zombie.health -= STRAWBERRY_DAMAGE;
            }
        }
    }
}

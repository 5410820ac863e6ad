//! Combat resolution: auto-fire, melee strikes, magic-zombie bolts,
//! runner detonations, and the weed slow effect.

use garden_core::constants::{
    CELL_SIZE, CUCUMBER_ATTACK_MS, CUCUMBER_SWING_MS, EGGPLANT_DAMAGE, HIT_SPLAT_TTL_MS,
    MAGIC_BOLT_INTERVAL_MS, ZOMBIE_HIT_WIDTH,
};
use garden_core::entities::{HitSplat, MagicBolt, Pea, PlantKind, ZombieKind};
use garden_core::state::{take_id, GameState};

/// Auto-fire scan, driven by the slow fire timer rather than the tick:
/// every ranged plant with a zombie anywhere at or beyond its column
/// emits one pea (two for the repeater, horizontally offset).
pub fn auto_fire(state: &mut GameState) {
    let mut new_peas = Vec::new();
    for plant in &state.plants {
        let offsets: &[f64] = match plant.kind {
            PlantKind::Peashooter => &[0.7],
            PlantKind::Repeater => &[0.7, 0.9],
            _ => continue,
        };

        let muzzle_x = plant.col as f64 * CELL_SIZE;
        let target_in_lane = state
            .zombies
            .iter()
            .any(|z| z.row == plant.row && z.x > muzzle_x);
        if !target_in_lane {
            continue;
        }

        for offset in offsets {
            new_peas.push((plant.row, (plant.col as f64 + offset) * CELL_SIZE));
        }
    }

    for (row, x) in new_peas {
        let id = take_id(&mut state.next_ids.pea);
        state.peas.push(Pea { id, row, x });
    }
}

/// Cucumber melee: each ready cucumber strikes the first zombie (by
/// creation order) overlapping the cell ahead of it. One strike per
/// cucumber per tick.
pub fn melee_strikes(state: &mut GameState) {
    for i in 0..state.plants.len() {
        let (row, col) = (state.plants[i].row, state.plants[i].col);
        match state.plants[i].kind {
            PlantKind::Cucumber {
                attack_cooldown_ms, ..
            } if attack_cooldown_ms <= 0.0 => {}
            _ => continue,
        }

        let strike_near = (col as f64 + 1.0) * CELL_SIZE;
        let strike_far = (col as f64 + 2.0) * CELL_SIZE;
        let target = state
            .zombies
            .iter_mut()
            .find(|z| z.row == row && z.x < strike_far && z.x + ZOMBIE_HIT_WIDTH > strike_near);

        let Some(zombie) = target else { continue };
        zombie.health -= 1;
        let splat_x = zombie.x + ZOMBIE_HIT_WIDTH / 2.0;

        state.plants[i].kind = PlantKind::Cucumber {
            attack_cooldown_ms: CUCUMBER_ATTACK_MS,
            swing_ms: CUCUMBER_SWING_MS,
        };
        let id = take_id(&mut state.next_ids.hit_splat);
        state.hit_splats.push(HitSplat {
            id,
            row,
            x: splat_x,
            ttl_ms: HIT_SPLAT_TTL_MS,
        });
    }
}

/// Magic zombies with an expired cooldown fire a bolt down their lane
/// whenever any plant stands in it; no range or line-of-sight check.
pub fn magic_fire(state: &mut GameState) {
    for i in 0..state.zombies.len() {
        let (row, x) = (state.zombies[i].row, state.zombies[i].x);
        match state.zombies[i].kind {
            ZombieKind::Magic { bolt_cooldown_ms } if bolt_cooldown_ms <= 0.0 => {}
            _ => continue,
        }
        if !state.plants.iter().any(|p| p.row == row) {
            continue;
        }

        let id = take_id(&mut state.next_ids.bolt);
        state.bolts.push(MagicBolt { id, row, x });
        state.zombies[i].kind = ZombieKind::Magic {
            bolt_cooldown_ms: MAGIC_BOLT_INTERVAL_MS,
        };
    }
}

/// Eggplant runners detonate on the first live zombie whose hitbox their
/// leading edge overlaps, dealing their contact damage once and
/// self-destructing. The health check uses already-applied damage, so a
/// zombie absorbs at most one runner per tick.
pub fn runner_strikes(state: &mut GameState) {
    let mut spent = Vec::new();
    for runner in &state.runners {
        let leading_edge = runner.x + CELL_SIZE * 0.8;
        let target = state.zombies.iter_mut().find(|z| {
            z.health > 0 && z.row == runner.row && leading_edge >= z.x && runner.x <= z.x + ZOMBIE_HIT_WIDTH
        });

        let Some(zombie) = target else { continue };
        zombie.health -= EGGPLANT_DAMAGE;
        spent.push(runner.id);

        let id = take_id(&mut state.next_ids.hit_splat);
        state.hit_splats.push(HitSplat {
            id,
            row: runner.row,
            x: zombie.x + ZOMBIE_HIT_WIDTH / 2.0,
            ttl_ms: HIT_SPLAT_TTL_MS,
        });
    }
    state.runners.retain(|r| !spent.contains(&r.id));
}

/// Any zombie standing on a weed's cell becomes slowed. The flag is
/// sticky; it is never cleared by leaving the cell.
pub fn apply_slow(state: &mut GameState) {
    for i in 0..state.zombies.len() {
        if state.zombies[i].slowed {
            continue;
        }
        let (row, cell_col) = (state.zombies[i].row, state.zombies[i].cell_col());
        let on_weed = state.plants.iter().any(|p| {
            matches!(p.kind, PlantKind::Weed) && p.row == row && p.col as i32 == cell_col
        });
        if on_weed {
            state.zombies[i].slowed = true;
        }
    }
}

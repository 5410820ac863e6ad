//! Projectile collision: peas against zombies, magic bolts against
//! plants, and end-of-tick removal of dead zombies.

use garden_core::constants::{CELL_SIZE, PEA_HIT_WIDTH, ZOMBIE_HIT_WIDTH};
use garden_core::state::GameState;

/// Each pea hits the first live zombie (by creation order) in its row
/// whose hitbox it has reached, deals 1 damage, and is consumed.
pub fn pea_hits(state: &mut GameState) {
    let mut spent = Vec::new();
    for pea in &state.peas {
        let target = state.zombies.iter_mut().find(|z| {
            z.health > 0
                && z.row == pea.row
                && pea.x + PEA_HIT_WIDTH >= z.x
                && pea.x < z.x + ZOMBIE_HIT_WIDTH
        });
        if let Some(zombie) = target {
            zombie.health -= 1;
            spent.push(pea.id);
        }
    }
    state.peas.retain(|p| !spent.contains(&p.id));
}

/// Each bolt hits the first plant in its row whose cell it has reached;
/// the plant is destroyed outright and the bolt is consumed.
pub fn bolt_hits(state: &mut GameState) {
    let mut spent_bolts = Vec::new();
    let mut dead_plants = Vec::new();
    for bolt in &state.bolts {
        let target = state.plants.iter().find(|p| {
            !dead_plants.contains(&p.id)
                && p.row == bolt.row
                && bolt.x <= (p.col as f64 + 1.0) * CELL_SIZE
                && bolt.x >= p.col as f64 * CELL_SIZE
        });
        if let Some(plant) = target {
            dead_plants.push(plant.id);
            spent_bolts.push(bolt.id);
        }
    }
    state.plants.retain(|p| !dead_plants.contains(&p.id));
    state.bolts.retain(|b| !spent_bolts.contains(&b.id));
}

/// Remove every zombie whose health dropped to zero or below this tick.
pub fn reap_dead(state: &mut GameState) {
    state.zombies.retain(|z| z.health > 0);
}

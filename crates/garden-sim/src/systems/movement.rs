//! Kinematics: advances every mobile entity and drops out-of-bounds ones.

use garden_core::catalog::zombie_stats;
use garden_core::constants::{
    BREACH_X, CELL_SIZE, EGGPLANT_SPEED, GRID_WIDTH, MAGIC_BOLT_SPEED, PEA_SPEED, SLOW_FACTOR,
    SUN_FALL_SPEED,
};
use garden_core::state::GameState;

/// Advance every zombie toward the defended edge. Returns true if any
/// zombie crossed the boundary this tick; the caller resolves the defeat
/// at the end of the tick so the crossing zombie still takes part in
/// combat.
pub fn move_zombies(state: &mut GameState) -> bool {
    let mut breached = false;
    for zombie in &mut state.zombies {
        let mut speed = zombie_stats(zombie.zombie_type()).speed;
        if zombie.slowed {
            speed *= SLOW_FACTOR;
        }
        zombie.x -= speed;
        if zombie.x < BREACH_X {
            breached = true;
        }
    }
    breached
}

/// Advance peas; drop those that leave the grid on the zombie side.
pub fn move_peas(state: &mut GameState) {
    for pea in &mut state.peas {
        pea.x += PEA_SPEED;
    }
    state.peas.retain(|p| p.x < GRID_WIDTH);
}

/// Advance magic bolts; drop those past the defended edge.
pub fn move_bolts(state: &mut GameState) {
    for bolt in &mut state.bolts {
        bolt.x -= MAGIC_BOLT_SPEED;
    }
    state.bolts.retain(|b| b.x > -CELL_SIZE);
}

/// Advance mobile plants; drop those that walk off the far edge without
/// finding a target.
pub fn move_runners(state: &mut GameState) {
    for runner in &mut state.runners {
        runner.x += EGGPLANT_SPEED;
    }
    state.runners.retain(|r| r.x < GRID_WIDTH);
}

/// Sky-spawned suns fall until they reach their target height;
/// sunflower-produced suns never move.
pub fn move_suns(state: &mut GameState) {
    for sun in &mut state.sun_drops {
        if sun.falling && sun.pos.y < sun.target_y {
            sun.pos.y += SUN_FALL_SPEED;
        }
    }
}

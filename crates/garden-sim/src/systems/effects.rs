//! Timer decay: transient markers, per-entity timers, selection cooldowns.

use garden_core::constants::TICK_MS;
use garden_core::entities::{PlantKind, ZombieKind};
use garden_core::state::GameState;

/// Decrement explosion and hit-splat ttls; drop expired markers.
pub fn expire_markers(state: &mut GameState) {
    for explosion in &mut state.explosions {
        explosion.ttl_ms -= TICK_MS;
    }
    state.explosions.retain(|e| e.ttl_ms > 0.0);

    for splat in &mut state.hit_splats {
        splat.ttl_ms -= TICK_MS;
    }
    state.hit_splats.retain(|h| h.ttl_ms > 0.0);
}

/// Decrement mine arming, cucumber attack/swing, and strawberry sleep
/// timers. A sleep timer reaching zero clears the sleeping flag.
pub fn tick_plant_timers(state: &mut GameState) {
    for plant in &mut state.plants {
        match &mut plant.kind {
            PlantKind::PotatoMine { arm_ms } => {
                *arm_ms = (*arm_ms - TICK_MS).max(0.0);
            }
            PlantKind::Cucumber {
                attack_cooldown_ms,
                swing_ms,
            } => {
                *attack_cooldown_ms = (*attack_cooldown_ms - TICK_MS).max(0.0);
                *swing_ms = (*swing_ms - TICK_MS).max(0.0);
            }
            PlantKind::Strawberry { sleeping, sleep_ms } => {
                if *sleeping {
                    *sleep_ms = (*sleep_ms - TICK_MS).max(0.0);
                    if *sleep_ms <= 0.0 {
                        *sleeping = false;
                    }
                }
            }
            _ => {}
        }
    }
}

/// Decrement every magic zombie's bolt cooldown.
pub fn tick_zombie_timers(state: &mut GameState) {
    for zombie in &mut state.zombies {
        if let ZombieKind::Magic { bolt_cooldown_ms } = &mut zombie.kind {
            *bolt_cooldown_ms = (*bolt_cooldown_ms - TICK_MS).max(0.0);
        }
    }
}

/// Decrement the player's per-type selection cooldowns, floored at zero.
pub fn tick_selection_cooldowns(state: &mut GameState) {
    for cooldown in state.cooldowns.values_mut() {
        if *cooldown > 0.0 {
            *cooldown = (*cooldown - TICK_MS).max(0.0);
        }
    }
}

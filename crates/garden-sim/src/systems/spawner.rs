//! Wave scheduling: spawn-queue construction, batch spawning, wave
//! completion, and the preparation countdown.

use rand::seq::SliceRandom;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use garden_core::catalog::zombie_stats;
use garden_core::constants::{GRID_ROWS, GRID_WIDTH, MAGIC_BOLT_INTERVAL_MS, TICK_MS};
use garden_core::entities::{Zombie, ZombieKind};
use garden_core::enums::{ChallengeKind, ZombieType};
use garden_core::state::{take_id, GameState};

/// Outcome of the per-tick wave-completion check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    None,
    /// Wave cleared; the next wave's announcement is now pending.
    NextWave,
    /// Final wave cleared.
    Victory,
}

/// Build and shuffle the current wave's spawn queue and clear the
/// pending announcement. No-op if the wave index is out of range.
pub fn start_wave(state: &mut GameState, rng: &mut ChaCha8Rng) {
    let Some(spec) = state.waves.get(state.current_wave).copied() else {
        return;
    };

    let mut queue = Vec::with_capacity(spec.total() as usize);
    queue.extend(std::iter::repeat(ZombieType::Normal).take(spec.normal as usize));
    queue.extend(std::iter::repeat(ZombieType::Fast).take(spec.fast as usize));
    queue.extend(std::iter::repeat(ZombieType::Armored).take(spec.armored as usize));
    queue.extend(std::iter::repeat(ZombieType::Magic).take(spec.magic as usize));
    queue.shuffle(rng);

    state.announcement = None;
    state.wave_total = queue.len() as u32;
    state.spawn_queue = queue;
    state.spawn_interval_ms = spec.spawn_interval_ms;
}

/// Number of zombies released per spawn-timer fire. Brutal sessions
/// release 3-4; standard sessions ramp from 1 to 2-3 around wave 6.
fn batch_size(state: &GameState, rng: &mut ChaCha8Rng) -> usize {
    let brutal = matches!(
        state.challenge.map(|c| c.kind),
        Some(ChallengeKind::Brutal)
    );
    if brutal {
        if rng.gen_bool(0.5) {
            4
        } else {
            3
        }
    } else if state.current_wave > 5 {
        if rng.gen_bool(0.35) {
            3
        } else {
            2
        }
    } else if state.current_wave >= 5 {
        2
    } else {
        1
    }
}

/// Pop a batch from the spawn queue and create the zombies at the far
/// edge, each in a row drawn without replacement so a single batch never
/// stacks a lane.
pub fn spawn_batch(state: &mut GameState, rng: &mut ChaCha8Rng) {
    if state.spawn_queue.is_empty() {
        return;
    }

    let count = batch_size(state, rng).min(state.spawn_queue.len());
    let batch: Vec<ZombieType> = state.spawn_queue.drain(..count).collect();

    let mut available_rows: Vec<usize> = (0..GRID_ROWS).collect();
    for zombie_type in batch {
        if available_rows.is_empty() {
            break;
        }
        let row = available_rows.remove(rng.gen_range(0..available_rows.len()));
        let stats = zombie_stats(zombie_type);
        let kind = match zombie_type {
            ZombieType::Normal => ZombieKind::Normal,
            ZombieType::Fast => ZombieKind::Fast,
            ZombieType::Armored => ZombieKind::Armored,
            // Magic zombies spawn with the bolt cooldown pre-loaded.
            ZombieType::Magic => ZombieKind::Magic {
                bolt_cooldown_ms: MAGIC_BOLT_INTERVAL_MS,
            },
        };

        let id = take_id(&mut state.next_ids.zombie);
        state.zombies.push(Zombie {
            id,
            row,
            x: GRID_WIDTH,
            health: stats.health,
            slowed: false,
            kind,
        });
    }
}

/// A wave completes once it was started, its queue is drained, and no
/// zombie is left standing. The last wave ends the session in victory;
/// any other advances the index and posts the next announcement.
pub fn check_wave_completion(state: &mut GameState) -> Completion {
    let wave_active = state.wave_total > 0;
    if !wave_active || !state.spawn_queue.is_empty() || !state.zombies.is_empty() {
        return Completion::None;
    }

    if state.current_wave + 1 >= state.waves.len() {
        return Completion::Victory;
    }

    state.current_wave += 1;
    state.announcement = Some(GameState::wave_announcement(state.current_wave));
    state.wave_total = 0;
    Completion::NextWave
}

/// Decrement the preparation countdown; hitting zero posts the first
/// wave's announcement.
pub fn tick_preparation(state: &mut GameState) {
    if state.preparation_ms <= 0.0 {
        return;
    }
    state.preparation_ms = (state.preparation_ms - TICK_MS).max(0.0);
    if state.preparation_ms == 0.0 {
        state.announcement = Some(GameState::wave_announcement(state.current_wave));
    }
}

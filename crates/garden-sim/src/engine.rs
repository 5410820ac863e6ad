//! Simulation engine — the core of the game.
//!
//! `GameEngine` owns the session state, interprets player commands,
//! advances the timer bank, and runs the fixed-order tick systems.
//! Every invalid command is a silent no-op; the returned snapshot is a
//! complete clone, so readers never observe a half-applied transition.

use std::collections::VecDeque;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use garden_core::catalog::{available_plants, plant_stats, preparation_ms};
use garden_core::commands::PlayerCommand;
use garden_core::constants::{
    CELL_SIZE, EXPLOSION_TTL_MS, GRID_COLS, GRID_ROWS, LOADOUT_SIZE, TICK_MS,
};
use garden_core::entities::{Explosion, Plant, PlantKind, Runner};
use garden_core::enums::{GameStatus, PlantType};
use garden_core::state::{take_id, GameState};

use crate::systems;
use crate::systems::spawner::Completion;
use crate::timers::TimerBank;
use crate::waves;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, Copy)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed + same commands = same run.
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self { seed: 42 }
    }
}

/// The simulation engine. Owns the session state and all timers.
pub struct GameEngine {
    state: GameState,
    rng: ChaCha8Rng,
    command_queue: VecDeque<PlayerCommand>,
    timers: TimerBank,
}

impl GameEngine {
    pub fn new(config: SimConfig) -> Self {
        Self {
            state: GameState::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            command_queue: VecDeque::new(),
            timers: TimerBank::default(),
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the new snapshot.
    pub fn tick(&mut self) -> GameState {
        self.process_commands();

        if self.state.status == GameStatus::Playing {
            self.run_timers();
            self.run_tick_systems();
        }

        self.state.clone()
    }

    /// Read-only view of the current state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[cfg(test)]
    pub(crate) fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command, applying the status gates first:
    /// terminal sessions accept only restart/menu-return, the menu only
    /// its two entry commands, and a paused session only resume/restart.
    fn handle_command(&mut self, command: PlayerCommand) {
        use PlayerCommand::*;

        let status = self.state.status;
        match status {
            GameStatus::Defeated | GameStatus::Victory => {
                if !matches!(command, Restart | ReturnToMenu) {
                    return;
                }
            }
            GameStatus::Menu => {
                if !matches!(command, BeginLoadoutSelection | BeginChallengeSelection) {
                    return;
                }
            }
            GameStatus::Paused => {
                if !matches!(command, Resume | Restart) {
                    return;
                }
            }
            _ => {}
        }

        match command {
            BeginLoadoutSelection => {
                if status != GameStatus::Menu {
                    return;
                }
                let mut next = GameState::default();
                next.status = GameStatus::LoadoutSelect;
                next.waves = waves::waves_for(None);
                self.replace_state(next);
            }
            BeginChallengeSelection => {
                if status != GameStatus::Menu {
                    return;
                }
                self.state.status = GameStatus::ChallengeSelect;
            }
            StartChallenge { challenge } => {
                if status != GameStatus::ChallengeSelect {
                    return;
                }
                let mut next = GameState::default();
                next.status = GameStatus::LoadoutSelect;
                next.challenge = Some(challenge);
                next.waves = waves::waves_for(Some(challenge));
                self.replace_state(next);
            }
            ReturnToMenu => {
                self.replace_state(GameState::default());
            }
            ConfirmLoadout { plants } => self.confirm_loadout(plants),
            Restart => {
                let challenge = self.state.challenge;
                let mut next = GameState::default();
                next.status = GameStatus::LoadoutSelect;
                next.challenge = challenge;
                next.waves = waves::waves_for(challenge);
                self.replace_state(next);
            }
            Pause => {
                if self.state.status == GameStatus::Playing {
                    self.state.status = GameStatus::Paused;
                    // Suspended, not merely ignored: a resumed session
                    // starts every interval fresh.
                    self.timers.reset();
                }
            }
            Resume => {
                if self.state.status == GameStatus::Paused {
                    self.state.status = GameStatus::Playing;
                    // The reset bank restarts at the idle pacing; restore
                    // the active wave's spawn interval from the snapshot.
                    self.timers.set_spawn_interval(self.state.spawn_interval_ms);
                }
            }
            SelectPlant { plant } => self.select_plant(plant),
            PlacePlant { row, col } => self.place_plant(row, col),
            CollectSun { id } => {
                if self.state.status == GameStatus::Playing {
                    systems::economy::collect_sun(&mut self.state, id);
                }
            }
        }
    }

    /// Swap in a fresh session state and cancel all outstanding timers.
    fn replace_state(&mut self, next: GameState) {
        self.state = next;
        self.timers.reset();
    }

    /// Lock in the loadout: exactly four distinct plants, all drawn from
    /// the challenge's available catalog.
    fn confirm_loadout(&mut self, plants: Vec<PlantType>) {
        if self.state.status != GameStatus::LoadoutSelect {
            return;
        }
        if plants.len() != LOADOUT_SIZE {
            return;
        }
        let catalog = available_plants(self.state.challenge);
        let distinct = plants
            .iter()
            .all(|p| plants.iter().filter(|q| *q == p).count() == 1);
        if !distinct || !plants.iter().all(|p| catalog.contains(p)) {
            return;
        }

        self.state.chosen_plants = plants;
        self.state.status = GameStatus::Playing;
        self.state.announcement = None;
        self.state.preparation_ms = preparation_ms(self.state.challenge);
        self.timers.reset();
    }

    fn select_plant(&mut self, plant: PlantType) {
        if self.state.status != GameStatus::Playing {
            return;
        }
        if !self.state.chosen_plants.contains(&plant) {
            return;
        }
        let affordable = self.state.suns >= plant_stats(plant).cost;
        let ready = self.state.cooldowns.get(&plant).copied().unwrap_or(0.0) <= 0.0;
        if affordable && ready {
            self.state.selected_plant = Some(plant);
        }
    }

    /// Place the selected plant. Cherry bombs resolve instantly without
    /// creating a unit; eggplants spawn a runner; everything else becomes
    /// a stationary plant with its type-specific initial timers.
    fn place_plant(&mut self, row: usize, col: usize) {
        if self.state.status != GameStatus::Playing {
            return;
        }
        let Some(plant_type) = self.state.selected_plant else {
            return;
        };
        if row >= GRID_ROWS || col >= GRID_COLS {
            return;
        }
        if self.state.plants.iter().any(|p| p.row == row && p.col == col) {
            return;
        }
        let stats = plant_stats(plant_type);
        if self.state.suns < stats.cost {
            return;
        }

        match plant_type {
            PlantType::CherryBomb => {
                let state = &mut self.state;
                state.zombies.retain(|z| {
                    let in_blast = z.row.abs_diff(row) <= 1 && (z.cell_col() - col as i32).abs() <= 1;
                    !in_blast
                });
                let id = take_id(&mut state.next_ids.explosion);
                state.explosions.push(Explosion {
                    id,
                    row,
                    col,
                    ttl_ms: EXPLOSION_TTL_MS,
                    large: true,
                });
            }
            PlantType::Eggplant => {
                let id = take_id(&mut self.state.next_ids.runner);
                self.state.runners.push(Runner {
                    id,
                    row,
                    x: col as f64 * CELL_SIZE,
                    kind: PlantType::Eggplant,
                });
            }
            _ => {
                let kind = match plant_type {
                    PlantType::Peashooter => PlantKind::Peashooter,
                    PlantType::Sunflower => PlantKind::Sunflower,
                    PlantType::Repeater => PlantKind::Repeater,
                    PlantType::Weed => PlantKind::Weed,
                    PlantType::PotatoMine => PlantKind::PotatoMine {
                        arm_ms: garden_core::constants::POTATO_MINE_ARM_MS,
                    },
                    PlantType::Cucumber => PlantKind::Cucumber {
                        attack_cooldown_ms: 0.0,
                        swing_ms: 0.0,
                    },
                    PlantType::Strawberry => PlantKind::Strawberry {
                        sleeping: false,
                        sleep_ms: 0.0,
                    },
                    PlantType::CherryBomb | PlantType::Eggplant => unreachable!(),
                };
                let id = take_id(&mut self.state.next_ids.plant);
                self.state.plants.push(Plant { id, row, col, kind });
            }
        }

        self.state.suns -= stats.cost;
        self.state.selected_plant = None;
        self.state.cooldowns.insert(plant_type, stats.cooldown_ms);
    }

    /// Advance the timer bank and fire the transitions that came due:
    /// wave start, batch spawn, auto-fire, and the two sun sources.
    fn run_timers(&mut self) {
        if self.state.announcement.is_some() {
            self.timers.arm_wave_start();
        } else {
            self.timers.disarm_wave_start();
        }

        let spawning = !self.state.spawn_queue.is_empty();
        let due = self.timers.advance(TICK_MS, spawning);

        if due.start_wave && self.state.announcement.is_some() {
            systems::spawner::start_wave(&mut self.state, &mut self.rng);
            self.timers.set_spawn_interval(self.state.spawn_interval_ms);
        }
        if due.spawn_batch {
            systems::spawner::spawn_batch(&mut self.state, &mut self.rng);
        }
        if due.auto_fire {
            systems::combat::auto_fire(&mut self.state);
        }
        if due.natural_sun {
            systems::economy::spawn_natural_sun(&mut self.state, &mut self.rng);
        }
        if due.produce_suns {
            systems::economy::produce_suns(&mut self.state, &mut self.rng);
        }
    }

    /// The per-tick transition. Order matters: later steps observe the
    /// effects of earlier ones within the same tick.
    fn run_tick_systems(&mut self) {
        // 1. Expire transient markers.
        systems::effects::expire_markers(&mut self.state);
        // 2. Advance zombies; a breach is resolved at the end of the tick
        //    so the crossing zombie still takes part in combat.
        let breached = systems::movement::move_zombies(&mut self.state);
        // 3. Advance projectiles.
        systems::movement::move_peas(&mut self.state);
        systems::movement::move_bolts(&mut self.state);
        // 4-5. Per-entity timers.
        systems::effects::tick_plant_timers(&mut self.state);
        systems::effects::tick_zombie_timers(&mut self.state);
        // 6. Melee strikes.
        systems::combat::melee_strikes(&mut self.state);
        // 7. Magic zombies fire.
        systems::combat::magic_fire(&mut self.state);
        // 8. Runners advance and detonate.
        systems::movement::move_runners(&mut self.state);
        systems::combat::runner_strikes(&mut self.state);
        // 9. Weed slow.
        systems::combat::apply_slow(&mut self.state);
        // 10-11. Detonations.
        systems::detonation::mine_detonations(&mut self.state);
        systems::detonation::strawberry_detonations(&mut self.state);
        // 12-13. Projectile collisions.
        systems::projectiles::pea_hits(&mut self.state);
        systems::projectiles::bolt_hits(&mut self.state);
        // 14. Remove dead zombies.
        systems::projectiles::reap_dead(&mut self.state);
        // 15. Falling suns.
        systems::movement::move_suns(&mut self.state);
        // 16. Selection cooldowns.
        systems::effects::tick_selection_cooldowns(&mut self.state);
        // 17. Wave completion. Victory and next-wave advance outrank a
        //     breach detected in step 2.
        match systems::spawner::check_wave_completion(&mut self.state) {
            Completion::Victory => {
                self.state.status = GameStatus::Victory;
                self.timers.reset();
                return;
            }
            Completion::NextWave => return,
            Completion::None => {}
        }
        // 18. Preparation countdown.
        systems::spawner::tick_preparation(&mut self.state);
        // 19. Terminal resolution.
        if breached {
            self.state.status = GameStatus::Defeated;
            self.timers.reset();
        }
    }
}

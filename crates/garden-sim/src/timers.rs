//! Tick-driven timer bank.
//!
//! The engine drives every periodic transition (auto-fire, sun spawns,
//! sunflower production, enemy batches) and the one-shot wave-start delay
//! off the tick clock instead of wall-clock timers. The bank only advances
//! while the session is PLAYING; leaving PLAYING resets it, so a resumed
//! session starts every interval fresh and stale timers never bleed into
//! a new session.

use garden_core::constants::{
    NATURAL_SUN_INTERVAL_MS, PLANT_FIRE_INTERVAL_MS, SUNFLOWER_PRODUCE_INTERVAL_MS,
    WAVE_TRANSITION_DELAY_MS,
};

/// A repeating countdown. Reloading adds the interval to the remainder so
/// cadence does not drift when an interval is not a whole tick multiple.
#[derive(Debug, Clone, Copy)]
struct Interval {
    remaining_ms: f64,
    interval_ms: f64,
}

impl Interval {
    fn new(interval_ms: f64) -> Self {
        Self {
            remaining_ms: interval_ms,
            interval_ms,
        }
    }

    /// Advance by `dt_ms`; returns true when the interval elapsed.
    fn advance(&mut self, dt_ms: f64) -> bool {
        self.remaining_ms -= dt_ms;
        if self.remaining_ms <= 0.0 {
            self.remaining_ms += self.interval_ms;
            true
        } else {
            false
        }
    }
}

/// Transitions due this tick, in firing order.
#[derive(Debug, Clone, Copy, Default)]
pub struct DueTransitions {
    pub start_wave: bool,
    pub spawn_batch: bool,
    pub auto_fire: bool,
    pub natural_sun: bool,
    pub produce_suns: bool,
}

#[derive(Debug, Clone)]
pub struct TimerBank {
    auto_fire: Interval,
    natural_sun: Interval,
    produce: Interval,
    spawn: Interval,
    /// One-shot delay between a wave announcement and its first spawn.
    wave_start_ms: Option<f64>,
}

impl Default for TimerBank {
    fn default() -> Self {
        Self {
            auto_fire: Interval::new(PLANT_FIRE_INTERVAL_MS),
            natural_sun: Interval::new(NATURAL_SUN_INTERVAL_MS),
            produce: Interval::new(SUNFLOWER_PRODUCE_INTERVAL_MS),
            spawn: Interval::new(garden_core::constants::IDLE_SPAWN_INTERVAL_MS),
            wave_start_ms: None,
        }
    }
}

impl TimerBank {
    /// Discard all progress. Called on any transition out of PLAYING.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Arm the one-shot wave-start delay if it is not already pending.
    pub fn arm_wave_start(&mut self) {
        if self.wave_start_ms.is_none() {
            self.wave_start_ms = Some(WAVE_TRANSITION_DELAY_MS);
        }
    }

    /// Cancel the pending wave-start delay.
    pub fn disarm_wave_start(&mut self) {
        self.wave_start_ms = None;
    }

    pub fn wave_start_pending(&self) -> bool {
        self.wave_start_ms.is_some()
    }

    /// Restart the batch-spawn interval at a new wave's pacing.
    pub fn set_spawn_interval(&mut self, interval_ms: f64) {
        self.spawn = Interval::new(interval_ms);
    }

    /// Advance one tick. `spawning` gates the batch timer so it only runs
    /// while the spawn queue is non-empty.
    pub fn advance(&mut self, dt_ms: f64, spawning: bool) -> DueTransitions {
        let mut due = DueTransitions::default();

        if let Some(remaining) = &mut self.wave_start_ms {
            *remaining -= dt_ms;
            if *remaining <= 0.0 {
                self.wave_start_ms = None;
                due.start_wave = true;
            }
        }

        if spawning {
            due.spawn_batch = self.spawn.advance(dt_ms);
        }
        due.auto_fire = self.auto_fire.advance(dt_ms);
        due.natural_sun = self.natural_sun.advance(dt_ms);
        due.produce_suns = self.produce.advance(dt_ms);

        due
    }
}

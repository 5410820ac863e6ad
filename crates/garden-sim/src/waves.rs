//! Wave generation — pure functions from (mode, count) to wave specs.

use garden_core::constants::{BRUTAL_MIN_SPAWN_INTERVAL_MS, STANDARD_MIN_SPAWN_INTERVAL_MS};
use garden_core::enums::{Challenge, ChallengeKind};
use garden_core::state::WaveSpec;

/// Standard mode: counts grow roughly linearly with wave index. Fast
/// zombies unlock at wave 3, armored at wave 6, magic at wave 10.
pub fn standard_waves(count: usize) -> Vec<WaveSpec> {
    (0..count)
        .map(|i| {
            let normal = 5 + i as u32;
            let fast = if i >= 2 { 2 + (i as u32 - 2) / 2 } else { 0 };
            let armored = if i >= 5 { 1 + (i as u32 - 5) / 2 } else { 0 };
            let magic = if i >= 9 { 1 + (i as u32 - 9) / 2 } else { 0 };

            // Shallow linear decrease through wave 5, then a steeper slope
            // starting from the wave-5 rate, floored at the minimum.
            let interval = if i < 5 {
                5000.0 - i as f64 * 45.0
            } else {
                let wave5_interval = 5000.0 - 4.0 * 45.0;
                wave5_interval - (i as f64 - 4.0) * 150.0
            };

            WaveSpec {
                normal,
                fast,
                armored,
                magic,
                spawn_interval_ms: interval.max(STANDARD_MIN_SPAWN_INTERVAL_MS),
            }
        })
        .collect()
}

/// Brutal mode: counts grow super-linearly (power law in the 1-based
/// wave number). Armored unlocks at wave 2, magic at wave 4.
pub fn brutal_waves(count: usize) -> Vec<WaveSpec> {
    (0..count)
        .map(|i| {
            let wave = (i + 1) as f64;
            let normal = 10 + wave.powf(1.8).floor() as u32;
            let fast = 3 + wave.powf(1.6).floor() as u32;
            let armored = if wave >= 2.0 {
                2 + (wave - 1.0).powf(1.5).floor() as u32
            } else {
                0
            };
            let magic = if wave >= 4.0 {
                2 + (wave - 3.0).powf(1.4).floor() as u32
            } else {
                0
            };

            WaveSpec {
                normal,
                fast,
                armored,
                magic,
                spawn_interval_ms: (3000.0 - i as f64 * 250.0).max(BRUTAL_MIN_SPAWN_INTERVAL_MS),
            }
        })
        .collect()
}

/// Wave list for a session under the given challenge (standard/100 when
/// none).
pub fn waves_for(challenge: Option<Challenge>) -> Vec<WaveSpec> {
    use garden_core::constants::DEFAULT_WAVE_COUNT;
    match challenge {
        Some(Challenge {
            kind: ChallengeKind::Brutal,
            waves,
        }) => brutal_waves(waves),
        Some(Challenge { waves, .. }) => standard_waves(waves),
        None => standard_waves(DEFAULT_WAVE_COUNT),
    }
}

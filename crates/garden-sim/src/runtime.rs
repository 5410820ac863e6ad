//! Game loop thread — drives the engine at the fixed 60Hz tick rate.
//!
//! The engine lives on, and is owned by, the loop thread; the outside world
//! talks to it only through an `mpsc` channel drained at tick boundaries.
//! Each tick's snapshot goes to a caller-supplied callback and into a shared
//! slot that can be polled synchronously.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use garden_core::commands::PlayerCommand;
use garden_core::constants::TICK_RATE;
use garden_core::state::GameState;

use crate::engine::{GameEngine, SimConfig};

/// Nominal duration of one tick.
const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Messages accepted by the game loop thread.
#[derive(Debug, Clone)]
pub enum LoopCommand {
    Player(PlayerCommand),
    Shutdown,
}

/// Starts the game loop on its own thread and returns the sender the
/// input layer feeds commands into. `on_snapshot` is called once per tick
/// with the freshly produced snapshot.
pub fn spawn_game_loop(
    config: SimConfig,
    latest_snapshot: Arc<Mutex<Option<GameState>>>,
    on_snapshot: impl Fn(&GameState) + Send + 'static,
) -> mpsc::Sender<LoopCommand> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<LoopCommand>();

    std::thread::Builder::new()
        .name("garden-game-loop".into())
        .spawn(move || {
            run_game_loop(config, cmd_rx, &latest_snapshot, on_snapshot);
        })
        .expect("Failed to spawn game loop thread");

    cmd_tx
}

/// Loop body. Exits on Shutdown or when every sender is gone.
fn run_game_loop(
    config: SimConfig,
    cmd_rx: mpsc::Receiver<LoopCommand>,
    latest_snapshot: &Mutex<Option<GameState>>,
    on_snapshot: impl Fn(&GameState),
) {
    let mut engine = GameEngine::new(config);
    let mut next_tick_time = Instant::now();

    loop {
        // Everything that arrived since the last tick goes in before it.
        loop {
            match cmd_rx.try_recv() {
                Ok(LoopCommand::Player(cmd)) => {
                    engine.queue_command(cmd);
                }
                Ok(LoopCommand::Shutdown) => return,
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return,
            }
        }

        // Pause is the engine's concern; the loop always ticks.
        let snapshot = engine.tick();

        on_snapshot(&snapshot);
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // Fixed-rate pacing against an absolute deadline.
        next_tick_time += TICK_DURATION;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > TICK_DURATION * 2 {
            // More than two ticks behind: rebase rather than fast-forward.
            next_tick_time = now;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use garden_core::enums::GameStatus;

    #[test]
    fn test_command_channel_round_trip() {
        let (tx, rx) = mpsc::channel::<LoopCommand>();

        tx.send(LoopCommand::Player(PlayerCommand::BeginLoadoutSelection))
            .unwrap();
        tx.send(LoopCommand::Player(PlayerCommand::Pause)).unwrap();
        tx.send(LoopCommand::Shutdown).unwrap();

        let mut commands = Vec::new();
        while let Ok(cmd) = rx.try_recv() {
            commands.push(cmd);
        }

        assert_eq!(commands.len(), 3);
        assert!(matches!(
            commands[0],
            LoopCommand::Player(PlayerCommand::BeginLoadoutSelection)
        ));
        assert!(matches!(
            commands[1],
            LoopCommand::Player(PlayerCommand::Pause)
        ));
        assert!(matches!(commands[2], LoopCommand::Shutdown));
    }

    #[test]
    fn test_snapshot_serialization_under_3ms() {
        let mut engine = GameEngine::new(SimConfig::default());
        engine.queue_command(PlayerCommand::BeginLoadoutSelection);

        for _ in 0..50 {
            engine.tick();
        }

        let snapshot = engine.tick();
        let start = Instant::now();
        let json = serde_json::to_string(&snapshot).unwrap();
        let elapsed = start.elapsed();

        assert!(
            elapsed < Duration::from_millis(3),
            "Snapshot serialization took {:?}, should be <3ms",
            elapsed
        );
        assert!(!json.is_empty());
    }

    #[test]
    fn test_loop_thread_shutdown() {
        let latest = Arc::new(Mutex::new(None));
        let tx = spawn_game_loop(SimConfig::default(), Arc::clone(&latest), |_| {});

        tx.send(LoopCommand::Player(PlayerCommand::BeginLoadoutSelection))
            .unwrap();
        std::thread::sleep(Duration::from_millis(100));
        tx.send(LoopCommand::Shutdown).unwrap();

        let snap = latest.lock().unwrap().clone();
        let snap = snap.expect("loop should have published a snapshot");
        assert_eq!(snap.status, GameStatus::LoadoutSelect);
    }

    #[test]
    fn test_tick_duration_constant() {
        // 60Hz = 16.666ms per tick
        let expected_nanos = 1_000_000_000u64 / 60;
        assert_eq!(TICK_DURATION.as_nanos(), expected_nanos as u128);
    }
}

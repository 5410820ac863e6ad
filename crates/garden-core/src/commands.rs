//! Player commands sent from the input/presentation layer to the engine.
//!
//! Commands are queued and processed at the next tick boundary. Every
//! command is guarded; a failed guard leaves the state unchanged.

use serde::{Deserialize, Serialize};

use crate::enums::{Challenge, PlantType};

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Menu navigation ---
    /// Open loadout selection for a default session.
    BeginLoadoutSelection,
    /// Open the challenge list.
    BeginChallengeSelection,
    /// Start a session under the given challenge modifier.
    StartChallenge { challenge: Challenge },
    /// Return to the main menu, discarding the session.
    ReturnToMenu,

    // --- Session lifecycle ---
    /// Lock in the chosen loadout and begin the preparation countdown.
    ConfirmLoadout { plants: Vec<PlantType> },
    /// Regenerate waves for the active challenge and reset to loadout
    /// selection.
    Restart,
    Pause,
    Resume,

    // --- In-session actions ---
    /// Select a plant type for placement.
    SelectPlant { plant: PlantType },
    /// Place the selected plant at a grid cell.
    PlacePlant { row: usize, col: usize },
    /// Collect a sun pickup by id.
    CollectSun { id: u32 },
}

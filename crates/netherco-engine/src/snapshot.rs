//! The versioned snapshot contract.
//!
//! The engine produces and restores a plain serializable snapshot of the
//! whole [`GameState`]; reading or writing it to actual storage is an
//! external collaborator's job. A version tag travels with the payload:
//! older snapshots migrate forward (fields added since then take their
//! serde defaults), newer ones are rejected rather than misread.

use serde::{Deserialize, Serialize};
use tracing::info;

use netherco_types::{Room, RoomKind};

use crate::error::EngineError;
use crate::state::GameState;

/// Current snapshot format version.
pub const SNAPSHOT_VERSION: u32 = 1;

/// A versioned, opaque-to-the-engine persistence payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Format version the state was written with.
    pub version: u32,
    /// The full engine-owned state.
    pub state: GameState,
}

/// Capture the current state.
pub fn capture(state: &GameState) -> GameSnapshot {
    GameSnapshot {
        version: SNAPSHOT_VERSION,
        state: state.clone(),
    }
}

/// Restore state from a snapshot, migrating older versions forward.
///
/// Every version up to [`SNAPSHOT_VERSION`] is readable: fields introduced
/// after a snapshot was written deserialize to their defaults, and any room
/// kind missing from the payload is restored at level 1 so every facility
/// operation finds its room. Snapshots from a newer engine are rejected.
pub fn restore(snapshot: GameSnapshot) -> Result<GameState, EngineError> {
    if snapshot.version > SNAPSHOT_VERSION {
        return Err(EngineError::UnsupportedSnapshotVersion {
            found: snapshot.version,
            supported: SNAPSHOT_VERSION,
        });
    }
    if snapshot.version < SNAPSHOT_VERSION {
        info!(
            from = snapshot.version,
            to = SNAPSHOT_VERSION,
            "migrating snapshot forward"
        );
    }
    let mut state = snapshot.state;
    for kind in RoomKind::ALL {
        state
            .rooms
            .entry(kind)
            .or_insert(Room { kind, level: 1 });
    }
    Ok(state)
}

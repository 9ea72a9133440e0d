//! Error types for the netherco-roster crate.
//!
//! Every variant here is a *validation failure*: the caller referenced a
//! missing entity or attempted an action on an entity in a terminal state.
//! Validation failures perform no mutation. Internal invariant violations
//! do not appear here -- the mutators use saturating/clamped arithmetic so
//! the invariants cannot be broken at runtime.

use netherco_types::{DaemonId, EquipmentId};

/// Errors that can occur during roster and equipment operations.
#[derive(Debug, thiserror::Error)]
pub enum RosterError {
    /// Daemon with the given ID was not found.
    #[error("daemon not found: {0}")]
    DaemonNotFound(DaemonId),

    /// The daemon exists but is no longer on the active roster.
    #[error("daemon is not active: {0}")]
    DaemonInactive(DaemonId),

    /// Candidate with the given ID was not found in the recruitment pool.
    #[error("candidate not found in pool: {0}")]
    CandidateNotFound(DaemonId),

    /// Equipment with the given ID was not found.
    #[error("equipment not found: {0}")]
    EquipmentNotFound(EquipmentId),

    /// The equipment's durability reached zero; destroyed items are
    /// terminal and cannot be repaired or assigned.
    #[error("equipment is destroyed: {0}")]
    EquipmentDestroyed(EquipmentId),

    /// Repair was requested on an item already at full durability.
    #[error("equipment already at full durability: {0}")]
    EquipmentFullyDurable(EquipmentId),

    /// No equipment template exists for the given key.
    #[error("unknown equipment template: {0}")]
    UnknownTemplate(String),
}

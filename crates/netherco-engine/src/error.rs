//! Error types for the netherco-engine crate.
//!
//! Every variant is a *validation failure*: the operation was rejected
//! before any mutation happened, and the presentation layer can render the
//! message inline. Internal invariant violations (negative counters,
//! out-of-range stats) are unrepresentable by construction in the lower
//! crates, so they have no variants here.

use netherco_types::{DaemonId, PlanetId, ResourceCost, RoomKind, TaskId};
use netherco_roster::RosterError;

/// Errors that can occur during engine operations.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// A roster or equipment operation failed.
    #[error(transparent)]
    Roster(#[from] RosterError),

    /// The ledger cannot cover the cost of the operation.
    #[error("insufficient resources: {cost:?} required")]
    InsufficientResources {
        /// The bundle that could not be afforded.
        cost: ResourceCost,
    },

    /// A mission was deployed with no team members.
    #[error("mission team is empty")]
    EmptyTeam,

    /// The same daemon was listed more than once on a mission team.
    #[error("daemon {0} is listed twice on the team")]
    DuplicateTeamMember(DaemonId),

    /// A team member's health is below the deployment floor.
    #[error("daemon {daemon_id} has health {health}, below the mission floor of {floor}")]
    BelowHealthFloor {
        /// The unfit team member.
        daemon_id: DaemonId,
        /// The member's current health.
        health: u32,
        /// The minimum health required to deploy.
        floor: u32,
    },

    /// Planet with the given ID was not found.
    #[error("planet not found: {0}")]
    PlanetNotFound(PlanetId),

    /// A conquest was deployed against an already-conquered planet.
    #[error("planet already conquered: {0}")]
    PlanetAlreadyConquered(PlanetId),

    /// No event definition exists for the given key.
    #[error("unknown event: {0}")]
    EventNotFound(String),

    /// The event has not been surfaced by a trigger, so there is nothing
    /// to resolve.
    #[error("event not pending: {0}")]
    EventNotPending(String),

    /// The event was already resolved; events fire at most once.
    #[error("event already resolved: {0}")]
    EventAlreadyResolved(String),

    /// The event's resource requirements are not met.
    #[error("event requirements not met: {0}")]
    EventRequirementsNotMet(String),

    /// An option index was given that the event does not have, or an
    /// automatic event was resolved as if it had options.
    #[error("event {event} has no option {choice}")]
    InvalidChoice {
        /// The event key.
        event: String,
        /// The option index that does not exist.
        choice: usize,
    },

    /// A choice event was resolved without picking an option.
    #[error("event {0} requires a choice")]
    ChoiceRequired(String),

    /// Compliance task with the given ID was not found.
    #[error("compliance task not found: {0}")]
    TaskNotFound(TaskId),

    /// The compliance task was already completed.
    #[error("compliance task already completed: {0}")]
    TaskAlreadyCompleted(TaskId),

    /// The room is already at its maximum level.
    #[error("room {kind:?} is already at maximum level {level}")]
    RoomAtMaxLevel {
        /// The room kind.
        kind: RoomKind,
        /// Its current (maximum) level.
        level: u32,
    },

    /// The next tier's requirements are not met.
    #[error("promotion requirements not met for tier {next_tier}")]
    PromotionRequirementsNotMet {
        /// Index of the tier that was evaluated.
        next_tier: usize,
    },

    /// The corporation already holds the final tier.
    #[error("already at the top of the corporate ladder")]
    LadderExhausted,

    /// A daily tick was started while one was already running.
    #[error("a daily tick is already in progress")]
    TickInProgress,

    /// The snapshot was produced by a newer engine version.
    #[error("unsupported snapshot version {found}, newest supported is {supported}")]
    UnsupportedSnapshotVersion {
        /// Version tag found in the snapshot.
        found: u32,
        /// Newest version this engine can read.
        supported: u32,
    },
}

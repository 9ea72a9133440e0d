//! Core entity structs for the NetherCo simulation engine.
//!
//! Covers the resource bundle types consumed by the ledger, the daemon and
//! equipment records, mission targets, temporary modifiers, compliance
//! tasks, and the legacy archive. All optional fields have documented
//! defaults here, at the data-model boundary, rather than ad hoc at call
//! sites.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::enums::{Difficulty, QuirkEffect, Resource, RoomKind, Specialization, StoryCategory};
use crate::ids::{DaemonId, EquipmentId, PlanetId, TaskId};

// ---------------------------------------------------------------------------
// Resource bundles
// ---------------------------------------------------------------------------

/// The four resource counters owned by the ledger.
///
/// Counters are unsigned: negativity is unrepresentable by construction.
/// All spending and crediting flows through the ledger, never through
/// direct field writes outside it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ResourcePool {
    /// Primary currency balance.
    #[serde(default)]
    pub credits: u64,
    /// Soul balance.
    #[serde(default)]
    pub souls: u64,
    /// Favor balance.
    #[serde(default)]
    pub favor: u64,
    /// Brimstone balance.
    #[serde(default)]
    pub brimstone: u64,
}

impl ResourcePool {
    /// Return the balance of a single counter.
    pub const fn amount(&self, resource: Resource) -> u64 {
        match resource {
            Resource::Credits => self.credits,
            Resource::Souls => self.souls,
            Resource::Favor => self.favor,
            Resource::Brimstone => self.brimstone,
        }
    }

    /// Set the balance of a single counter.
    pub const fn set_amount(&mut self, resource: Resource, value: u64) {
        match resource {
            Resource::Credits => self.credits = value,
            Resource::Souls => self.souls = value,
            Resource::Favor => self.favor = value,
            Resource::Brimstone => self.brimstone = value,
        }
    }
}

/// A non-negative bundle of resource amounts: a price or a reward.
///
/// Missing fields deserialize to zero, so partial bundles are the norm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ResourceCost {
    /// Credits component.
    #[serde(default)]
    pub credits: u64,
    /// Souls component.
    #[serde(default)]
    pub souls: u64,
    /// Favor component.
    #[serde(default)]
    pub favor: u64,
    /// Brimstone component.
    #[serde(default)]
    pub brimstone: u64,
}

impl ResourceCost {
    /// A bundle consisting only of credits.
    pub const fn credits(amount: u64) -> Self {
        Self {
            credits: amount,
            souls: 0,
            favor: 0,
            brimstone: 0,
        }
    }

    /// Return the amount of a single component.
    pub const fn amount(&self, resource: Resource) -> u64 {
        match resource {
            Resource::Credits => self.credits,
            Resource::Souls => self.souls,
            Resource::Favor => self.favor,
            Resource::Brimstone => self.brimstone,
        }
    }

    /// Whether every component is zero.
    pub const fn is_zero(&self) -> bool {
        self.credits == 0 && self.souls == 0 && self.favor == 0 && self.brimstone == 0
    }
}

/// A signed bundle of resource changes applied by events.
///
/// Application floors each counter at zero; the pool never goes negative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ResourceDelta {
    /// Credits change.
    #[serde(default)]
    pub credits: i64,
    /// Souls change.
    #[serde(default)]
    pub souls: i64,
    /// Favor change.
    #[serde(default)]
    pub favor: i64,
    /// Brimstone change.
    #[serde(default)]
    pub brimstone: i64,
}

impl ResourceDelta {
    /// Return the change for a single counter.
    pub const fn amount(&self, resource: Resource) -> i64 {
        match resource {
            Resource::Credits => self.credits,
            Resource::Souls => self.souls,
            Resource::Favor => self.favor,
            Resource::Brimstone => self.brimstone,
        }
    }
}

/// One entry in the ledger's append-only audit history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct LedgerEntry {
    /// In-game day the mutation happened.
    pub day: u64,
    /// Wall-clock timestamp, for earned-in-last-N-hours analytics.
    pub timestamp: DateTime<Utc>,
    /// The counter that changed.
    pub resource: Resource,
    /// Signed change actually applied (after flooring).
    pub delta: i64,
    /// Human-readable reason, e.g. `"RECRUIT"` or `"MISSION_REWARD"`.
    pub reason: String,
}

// ---------------------------------------------------------------------------
// Daemons
// ---------------------------------------------------------------------------

/// A personality quirk assigned at creation, immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Quirk {
    /// Display name, e.g. `"Asbestos Hide"`.
    pub name: String,
    /// Machine-readable effect tag resolved by the rules, never by name.
    pub effect: QuirkEffect,
    /// Effect strength, interpreted per tag (usually percentage points).
    pub magnitude: u32,
    /// Flavor text shown in the UI.
    pub description: String,
}

/// Cumulative achievements a daemon carries into the legacy archive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct LegacyCounters {
    /// Missions this daemon returned from successfully.
    #[serde(default)]
    pub successful_missions: u32,
    /// Conquest missions this daemon closed.
    #[serde(default)]
    pub planets_conquered: u32,
    /// Equipment pieces crafted on this daemon's watch.
    #[serde(default)]
    pub equipment_crafted: u32,
    /// Full years (360 in-game days) on the payroll.
    #[serde(default)]
    pub years_served: u32,
}

/// A recruitable, mortal agent of the corporation.
///
/// Health and morale are conventionally 0--100; the type does not clamp
/// them, every mutator does. `lifespan_days` counts down to retirement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Daemon {
    /// Unique identifier.
    pub id: DaemonId,
    /// Display name.
    pub name: String,
    /// Field specialization, fixed at creation.
    pub specialization: Specialization,
    /// Current health, 0--100.
    pub health: u32,
    /// Current morale, 0--100.
    pub morale: u32,
    /// Remaining days before mandatory retirement (death).
    pub lifespan_days: u32,
    /// Quirks rolled at creation. Immutable once assigned.
    pub quirks: Vec<Quirk>,
    /// Whether the daemon is on the active roster.
    pub active: bool,
    /// Generation within the bloodline. Fresh recruits are generation 1.
    pub generation: u32,
    /// Lineage label shared across generations.
    pub bloodline: String,
    /// Back-reference to the predecessor this daemon succeeded, if any.
    /// Informational only; never an ownership edge.
    #[serde(default)]
    pub mentor: Option<DaemonId>,
    /// Traits accumulated across generations of this bloodline.
    #[serde(default)]
    pub inherited_traits: Vec<String>,
    /// Cumulative achievement counters.
    #[serde(default)]
    pub legacy: LegacyCounters,
    /// The single piece of equipment currently held, if any.
    #[serde(default)]
    pub equipment: Option<EquipmentId>,
    /// In-game day the daemon joined the active roster.
    #[serde(default)]
    pub recruited_day: u64,
}

/// An unrecruited daemon waiting in the hiring pool, with its signing cost.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Candidate {
    /// The daemon record (inactive until recruited).
    pub daemon: Daemon,
    /// Signing cost in credits.
    pub cost: u64,
}

// ---------------------------------------------------------------------------
// Equipment
// ---------------------------------------------------------------------------

/// A piece of equipment tracked by the registry.
///
/// Durability is 0--100; zero is a terminal destroyed state. Inheritance
/// across owner generations accumulates a permanent `legacy_bonus`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Equipment {
    /// Unique identifier.
    pub id: EquipmentId,
    /// Display name.
    pub name: String,
    /// The specialization this equipment is tuned for.
    pub kind: Specialization,
    /// Current durability, 0--100.
    pub durability: u32,
    /// Description of the equipment's ability.
    pub ability: String,
    /// The daemon currently holding this item, if any.
    #[serde(default)]
    pub assigned_to: Option<DaemonId>,
    /// How many times this item has been inherited.
    #[serde(default)]
    pub generation: u32,
    /// Permanent effectiveness bonus accumulated through inheritance.
    #[serde(default)]
    pub legacy_bonus: u32,
    /// Append-only log of notable events in the item's history.
    #[serde(default)]
    pub history: Vec<String>,
    /// Whether durability reached zero. Terminal: destroyed items are
    /// never repaired or assigned.
    #[serde(default)]
    pub destroyed: bool,
}

// ---------------------------------------------------------------------------
// Planets
// ---------------------------------------------------------------------------

/// A rival planet, the target of missions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Planet {
    /// Unique identifier.
    pub id: PlanetId,
    /// Display name.
    pub name: String,
    /// Difficulty tier. Drives the composition bonus and chance penalty.
    pub difficulty: Difficulty,
    /// Flavor category, e.g. `"mining colony"`.
    pub flavor: String,
    /// Description of the planet's resistance.
    pub resistance: String,
    /// Description of the reward for conquering it.
    pub reward_text: String,
    /// One-way flag set by a successful conquest mission.
    #[serde(default)]
    pub conquered: bool,
    /// Day of the most recent mission against this planet.
    #[serde(default)]
    pub last_mission_day: Option<u64>,
}

// ---------------------------------------------------------------------------
// Temporary modifiers
// ---------------------------------------------------------------------------

/// What a temporary modifier does while active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum ModifierKind {
    /// Credits credited automatically each day.
    PassiveIncome {
        /// Credits per day.
        per_day: u64,
    },
    /// Percentage discount on recruitment costs.
    RecruitmentDiscount {
        /// Discount in percent, 0--100.
        pct: u32,
    },
    /// Percentage bonus to mission success chance.
    ProductivityBonus {
        /// Bonus in percentage points.
        pct: u32,
    },
    /// Daemons age faster: extra lifespan days lost per tick.
    AcceleratedAging {
        /// Extra days subtracted from each daemon's lifespan per tick.
        extra_days: u32,
    },
}

/// The decay clock of a temporary modifier.
///
/// Each [`ModifierKind`] has a fixed decay basis: it is decremented either
/// by the daily tick or by mission resolution, never both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum ModifierClock {
    /// Expires after this many daily ticks.
    Days(u32),
    /// Expires after this many resolved missions.
    Missions(u32),
}

/// A temporary modifier currently in effect, with its remaining duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ActiveModifier {
    /// The effect in force.
    pub kind: ModifierKind,
    /// Remaining duration. Removed when the clock reaches zero.
    pub clock: ModifierClock,
}

// ---------------------------------------------------------------------------
// Rooms
// ---------------------------------------------------------------------------

/// A facility room in the corporate office.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Room {
    /// The kind of facility.
    pub kind: RoomKind,
    /// Upgrade level, starting at 1.
    pub level: u32,
}

// ---------------------------------------------------------------------------
// Compliance
// ---------------------------------------------------------------------------

/// The penalty bundle applied exactly once when a task goes overdue.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct CompliancePenalty {
    /// Resource fine deducted from the ledger (floored at zero).
    #[serde(default)]
    pub fine: ResourceCost,
    /// Morale lost by every active daemon.
    #[serde(default)]
    pub morale_loss: u32,
}

/// A deadline-bound obligation imposed by Head Office.
///
/// Overdue tasks apply their penalty exactly once and remain visible as
/// overdue; they are never auto-removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ComplianceTask {
    /// Unique identifier.
    pub id: TaskId,
    /// Display name, e.g. `"Quarterly Soul Audit"`.
    pub name: String,
    /// Last day (inclusive) the task can be completed without penalty.
    pub deadline_day: u64,
    /// Penalty applied once the deadline passes uncompleted.
    pub penalty: CompliancePenalty,
    /// Whether the player completed the task.
    #[serde(default)]
    pub completed: bool,
    /// Whether the overdue penalty has already been applied.
    #[serde(default)]
    pub penalty_applied: bool,
}

impl ComplianceTask {
    /// Whether the task is past its deadline and uncompleted on `day`.
    pub const fn is_overdue(&self, day: u64) -> bool {
        !self.completed && day > self.deadline_day
    }
}

// ---------------------------------------------------------------------------
// Legacy archive
// ---------------------------------------------------------------------------

/// A narrative entry recorded in a bloodline's history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Story {
    /// Story title.
    pub title: String,
    /// Story body.
    pub description: String,
    /// Story category.
    pub category: StoryCategory,
    /// In-game day the story was recorded.
    pub day: u64,
    /// Wall-clock timestamp of the recording.
    pub timestamp: DateTime<Utc>,
}

/// A named bonus unlocked by bloodline achievement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Legend {
    /// Legend name, e.g. `"Dynasty of Ash"`.
    pub name: String,
    /// Description of the bonus.
    pub bonus: String,
}

/// The archive record for one bloodline, keyed by bloodline name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct BloodlineRecord {
    /// The lineage label.
    pub bloodline: String,
    /// Highest generation reached by this bloodline.
    pub generation: u32,
    /// Name of the first daemon of the line.
    pub founder: String,
    /// Cumulative totals mirrored from member daemons' legacy counters.
    #[serde(default)]
    pub totals: LegacyCounters,
    /// Narrative history of the line.
    #[serde(default)]
    pub stories: Vec<Story>,
    /// Named bonuses unlocked by achievement.
    #[serde(default)]
    pub legends: Vec<Legend>,
}

// ---------------------------------------------------------------------------
// Outcomes
// ---------------------------------------------------------------------------

/// Structured outcome of a mutating operation, consumed by the (external)
/// notification subsystem. Failures are carried by the error channel; an
/// `Outcome` always describes a mutation that happened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Outcome {
    /// Human-readable summary of what happened.
    pub summary: String,
}

impl Outcome {
    /// Build an outcome from anything printable.
    pub fn new(summary: impl Into<String>) -> Self {
        Self {
            summary: summary.into(),
        }
    }
}

//! Enumeration types for the NetherCo simulation engine.
//!
//! Closed enumerations replace every stringly-typed discriminator the game
//! rules depend on: resource kinds, daemon specializations, mission
//! difficulties, quirk effect tags, and room kinds. Exhaustive `match` on
//! these is how the compiler keeps the rule set honest.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// ---------------------------------------------------------------------------
// Resources
// ---------------------------------------------------------------------------

/// A fungible resource counter managed by the ledger.
///
/// The economy has exactly four counters: one primary currency, two
/// secondary currencies, and one crafting material. No counter is ever
/// observed negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum Resource {
    /// Primary currency. Pays for recruitment, crafting, repairs, upgrades.
    Credits,
    /// Souls harvested from conquered planets. Secondary currency.
    Souls,
    /// Standing with Head Office. Secondary currency, gates some events.
    Favor,
    /// Crafting material consumed by the workshop.
    Brimstone,
}

impl Resource {
    /// All four resource counters, in canonical display order.
    pub const ALL: [Self; 4] = [Self::Credits, Self::Souls, Self::Favor, Self::Brimstone];
}

// ---------------------------------------------------------------------------
// Daemons
// ---------------------------------------------------------------------------

/// A daemon's field specialization, fixed at creation.
///
/// Each specialization is favored against one mission difficulty tier and
/// aligns with one equipment kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum Specialization {
    /// Stealth work. Favored on easy targets.
    Infiltration,
    /// Direct assault. Favored on medium targets.
    Combat,
    /// Demolition and disruption. Favored on hard targets.
    Sabotage,
}

impl Specialization {
    /// All specializations, used for random assignment during pool generation.
    pub const ALL: [Self; 3] = [Self::Infiltration, Self::Combat, Self::Sabotage];
}

/// Machine-readable effect tag carried by a quirk.
///
/// Quirk behavior is resolved by tag lookup, never by matching on the
/// quirk's display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum QuirkEffect {
    /// Reduces mission damage taken by `magnitude` percent.
    DamageResistance,
    /// Increases mission damage taken by `magnitude` percent.
    DamageVulnerability,
    /// Adds `magnitude` percentage points to mission success chance.
    MissionBonus,
    /// Subtracts `magnitude` percentage points from mission success chance.
    MissionPenalty,
    /// Recovers `magnitude` extra morale during the daily tick.
    MoraleRecovery,
    /// Purely narrative; no mechanical effect.
    Cosmetic,
}

// ---------------------------------------------------------------------------
// Missions
// ---------------------------------------------------------------------------

/// Difficulty tier of a rival planet. Ordered: easy < medium < hard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum Difficulty {
    /// Soft target. No chance penalty.
    Easy,
    /// Defended target. Moderate chance penalty.
    Medium,
    /// Fortified target. Severe chance penalty.
    Hard,
}

impl Difficulty {
    /// The specialization that earns the team composition bonus against
    /// this difficulty tier.
    pub const fn favored_specialization(self) -> Specialization {
        match self {
            Self::Easy => Specialization::Infiltration,
            Self::Medium => Specialization::Combat,
            Self::Hard => Specialization::Sabotage,
        }
    }
}

/// The kind of mission being deployed against a planet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum MissionKind {
    /// Permanent takeover. Success flips the planet to conquered.
    Conquest,
    /// Smash-and-grab for resources. The planet stays contested.
    Raid,
    /// Intelligence gathering. Lower rewards, lower stakes.
    Reconnaissance,
}

// ---------------------------------------------------------------------------
// Facilities
// ---------------------------------------------------------------------------

/// A kind of facility room in the corporate office.
///
/// Exactly one room of each kind exists; rooms level up rather than
/// multiply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum RoomKind {
    /// Restores daemon morale each day, scaling with level.
    BreakRoom,
    /// Restores daemon health each day, scaling with level.
    Infirmary,
    /// Discounts equipment crafting costs, scaling with level.
    Workshop,
}

impl RoomKind {
    /// All room kinds, in canonical display order.
    pub const ALL: [Self; 3] = [Self::BreakRoom, Self::Infirmary, Self::Workshop];
}

// ---------------------------------------------------------------------------
// Legacy
// ---------------------------------------------------------------------------

/// Category of a bloodline story recorded in the legacy archive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum StoryCategory {
    /// Memorial for a veteran daemon (five or more successful missions).
    Legendary,
    /// Memorial for a daemon lost before making a name.
    Tragic,
    /// A succession: a descendant stepping into a dead daemon's role.
    Succession,
    /// A notable mission outcome.
    Triumph,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn difficulty_ordering_is_easy_to_hard() {
        assert!(Difficulty::Easy < Difficulty::Medium);
        assert!(Difficulty::Medium < Difficulty::Hard);
    }

    #[test]
    fn favored_specialization_mapping() {
        assert_eq!(
            Difficulty::Easy.favored_specialization(),
            Specialization::Infiltration
        );
        assert_eq!(
            Difficulty::Medium.favored_specialization(),
            Specialization::Combat
        );
        assert_eq!(
            Difficulty::Hard.favored_specialization(),
            Specialization::Sabotage
        );
    }

    #[test]
    fn resource_all_lists_every_counter() {
        assert_eq!(Resource::ALL.len(), 4);
        assert!(Resource::ALL.contains(&Resource::Credits));
        assert!(Resource::ALL.contains(&Resource::Brimstone));
    }
}

//! Shared type definitions for the NetherCo simulation engine.
//!
//! This crate is the single source of truth for the data model shared by
//! the engine crates. Types defined here flow downstream to `TypeScript`
//! via `ts-rs` for the browser UI.
//!
//! # Modules
//!
//! - [`ids`] -- Type-safe UUID wrappers for entity identifiers
//! - [`enums`] -- Enumeration types (resources, specializations, quirk tags)
//! - [`structs`] -- Core entity structs (daemons, equipment, planets, ledger)

pub mod enums;
pub mod ids;
pub mod structs;

// Re-export all public types at crate root for convenience.
pub use enums::{
    Difficulty, MissionKind, QuirkEffect, Resource, RoomKind, Specialization, StoryCategory,
};
pub use ids::{DaemonId, EquipmentId, PlanetId, TaskId};
pub use structs::{
    ActiveModifier, BloodlineRecord, Candidate, CompliancePenalty, ComplianceTask, Daemon,
    Equipment, LedgerEntry, LegacyCounters, Legend, ModifierClock, ModifierKind, Outcome, Planet,
    Quirk, ResourceCost, ResourceDelta, ResourcePool, Room, Story,
};

#[cfg(test)]
mod tests {
    //! Binding-generation smoke test.

    #[test]
    fn export_bindings() {
        // ts-rs generates TypeScript bindings when types with #[ts(export)]
        // are exercised. The files land in `bindings/` under the crate root.
        use ts_rs::TS;

        let _ = crate::ids::DaemonId::export_all();
        let _ = crate::ids::EquipmentId::export_all();
        let _ = crate::ids::PlanetId::export_all();
        let _ = crate::ids::TaskId::export_all();

        let _ = crate::enums::Resource::export_all();
        let _ = crate::enums::Specialization::export_all();
        let _ = crate::enums::QuirkEffect::export_all();
        let _ = crate::enums::Difficulty::export_all();
        let _ = crate::enums::MissionKind::export_all();
        let _ = crate::enums::RoomKind::export_all();
        let _ = crate::enums::StoryCategory::export_all();

        let _ = crate::structs::ResourcePool::export_all();
        let _ = crate::structs::ResourceCost::export_all();
        let _ = crate::structs::ResourceDelta::export_all();
        let _ = crate::structs::LedgerEntry::export_all();
        let _ = crate::structs::Daemon::export_all();
        let _ = crate::structs::Candidate::export_all();
        let _ = crate::structs::Equipment::export_all();
        let _ = crate::structs::Planet::export_all();
        let _ = crate::structs::ActiveModifier::export_all();
        let _ = crate::structs::Room::export_all();
        let _ = crate::structs::ComplianceTask::export_all();
        let _ = crate::structs::BloodlineRecord::export_all();
        let _ = crate::structs::Outcome::export_all();
    }
}

//! Daemon lifecycle, recruitment, equipment, and legacy for the NetherCo
//! simulation.
//!
//! This crate contains the personnel layer -- everything that operates on
//! daemons and their gear without touching the resource ledger or the
//! orchestrating engine. It sits between `netherco-types` (which defines
//! the data structures) and `netherco-engine` (which owns game state and
//! sequencing).
//!
//! # Modules
//!
//! - [`config`] -- Configurable lifecycle parameters ([`LifecycleConfig`])
//! - [`death`] -- Retirement conditions and consequences ([`RetirementConsequences`])
//! - [`equipment`] -- Crafting templates, durability, assignment, inheritance
//! - [`error`] -- Error types for all roster operations ([`RosterError`])
//! - [`legacy`] -- The bloodline archive: stories, totals, legend unlocks
//! - [`lifecycle`] -- Per-tick aging, damage, and stat clamping
//! - [`quirks`] -- Quirk/trait catalogs and their combat and morale effects
//! - [`recruitment`] -- Candidate pool generation with randomized stats
//! - [`succession`] -- Successor creation for qualifying bloodlines

pub mod config;
pub mod death;
pub mod equipment;
pub mod error;
pub mod legacy;
pub mod lifecycle;
pub mod quirks;
pub mod recruitment;
pub mod succession;

// Re-export primary types at crate root.
pub use config::LifecycleConfig;
pub use death::RetirementConsequences;
pub use equipment::{DegradeOutcome, EquipmentTemplate};
pub use error::RosterError;
pub use lifecycle::AgingResult;
pub use succession::Succession;

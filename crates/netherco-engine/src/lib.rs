//! Orchestration layer for the NetherCo simulation.
//!
//! This crate owns the game state and the sequencing around it: the daily
//! tick, mission resolution, the corporate event engine, the progression
//! ladder, and the versioned snapshot contract. It composes the resource
//! ledger (`netherco-ledger`) and the personnel layer (`netherco-roster`)
//! into the [`GameEngine`] facade the presentation layer calls.
//!
//! # Modules
//!
//! - [`config`] -- Engine tuning ([`EngineConfig`], [`MissionConfig`])
//! - [`engine`] -- The [`GameEngine`] facade: every entry point
//! - [`error`] -- Error types for all engine operations ([`EngineError`])
//! - [`events`] -- Static event catalog and the effect interpreter
//! - [`mission`] -- The success chance pipeline and atomic resolution
//! - [`progression`] -- The corporate ladder and compliance obligations
//! - [`rooms`] -- Facility recovery rates, discounts, upgrade economics
//! - [`snapshot`] -- Versioned snapshot capture and restore
//! - [`state`] -- The engine-owned [`GameState`]
//! - [`tick`] -- The ordered phases of the daily tick

pub mod config;
pub mod engine;
pub mod error;
pub mod events;
pub mod mission;
pub mod progression;
pub mod rooms;
pub mod snapshot;
pub mod state;
pub mod tick;

// Re-export primary types at crate root.
pub use config::{EngineConfig, MissionConfig};
pub use engine::GameEngine;
pub use error::EngineError;
pub use events::TriggeredEvent;
pub use mission::MissionReport;
pub use snapshot::{GameSnapshot, SNAPSHOT_VERSION};
pub use state::GameState;
pub use tick::TickSummary;

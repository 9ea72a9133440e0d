//! Resource ledger for the NetherCo simulation engine.
//!
//! All spending and crediting of the corporation's four resource counters
//! flows through this crate. The ledger enforces two invariants:
//!
//! 1. No counter is ever negative. Spends that cannot be covered in full
//!    are rejected entirely (all-or-nothing), and signed event deltas floor
//!    at zero.
//! 2. Every mutation appends an audit entry (day, timestamp, applied delta,
//!    reason) to an append-only history.
//!
//! # Modules
//!
//! - [`ledger`] -- The [`ResourceLedger`]: counters, spend/credit/apply,
//!   audit history.
//! - [`analytics`] -- Earnings queries over the history (total earned,
//!   earned since a timestamp).
//!
//! # Usage
//!
//! ```
//! use netherco_ledger::ResourceLedger;
//! use netherco_types::{Resource, ResourceCost, ResourcePool};
//!
//! let mut ledger = ResourceLedger::with_pool(ResourcePool {
//!     credits: 500,
//!     ..ResourcePool::default()
//! });
//!
//! // Spends are all-or-nothing and boolean-returning.
//! assert!(ledger.spend(&ResourceCost::credits(120), 1, "RECRUIT"));
//! assert!(!ledger.spend(&ResourceCost::credits(1_000), 1, "RECRUIT"));
//! assert_eq!(ledger.balance(Resource::Credits), 380);
//! ```

pub mod analytics;
pub mod ledger;

// Re-export primary types at crate root.
pub use analytics::{earned_since, total_earned, total_spent};
pub use ledger::ResourceLedger;

//! Earnings analytics over the ledger history.
//!
//! Pure functions over the append-only entry slice. The UI uses these for
//! the income panel (total earned, earned in the last N hours); the engine
//! never reads them for game rules.

use chrono::{DateTime, Utc};

use netherco_types::{LedgerEntry, Resource};

/// Sum of all positive deltas for `resource` across the whole history.
pub fn total_earned(entries: &[LedgerEntry], resource: Resource) -> u64 {
    entries
        .iter()
        .filter(|e| e.resource == resource && e.delta > 0)
        .fold(0_u64, |acc, e| acc.saturating_add(e.delta.unsigned_abs()))
}

/// Sum of all negative deltas (as a positive magnitude) for `resource`.
pub fn total_spent(entries: &[LedgerEntry], resource: Resource) -> u64 {
    entries
        .iter()
        .filter(|e| e.resource == resource && e.delta < 0)
        .fold(0_u64, |acc, e| acc.saturating_add(e.delta.unsigned_abs()))
}

/// Sum of positive deltas for `resource` recorded at or after `since`.
pub fn earned_since(entries: &[LedgerEntry], since: DateTime<Utc>, resource: Resource) -> u64 {
    entries
        .iter()
        .filter(|e| e.resource == resource && e.delta > 0 && e.timestamp >= since)
        .fold(0_u64, |acc, e| acc.saturating_add(e.delta.unsigned_abs()))
}

//! The resource ledger: four counters and an append-only audit history.
//!
//! The [`ResourceLedger`] owns the corporation's four fungible counters and
//! is the only code allowed to mutate them. Every mutation path appends a
//! [`LedgerEntry`] recording the in-game day, wall-clock timestamp, signed
//! delta actually applied, and a reason string for the audit trail.
//!
//! # Design
//!
//! - **Non-negative**: counters are `u64`; a spend that cannot be covered in
//!   full is rejected entirely, with no partial application.
//! - **Validate-then-mutate**: every mutator checks the whole bundle before
//!   touching any counter.
//! - **Boolean spend**: per the presentation contract, `spend` reports
//!   failure by returning `false`, never by panicking or erroring.
//! - **Append-only history**: entries are never modified or deleted.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::debug;

use netherco_types::{LedgerEntry, Resource, ResourceCost, ResourceDelta, ResourcePool};

/// Convert a `u64` magnitude into a signed delta, capping at `i64::MAX`.
///
/// Balances near `u64::MAX` are unreachable in practice; the cap only
/// protects the audit record from overflow.
fn signed(amount: u64) -> i64 {
    i64::try_from(amount).unwrap_or(i64::MAX)
}

/// The corporation's resource counters plus their audit history.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceLedger {
    /// Current balances.
    pool: ResourcePool,
    /// Append-only mutation history, in insertion order.
    history: Vec<LedgerEntry>,
}

impl ResourceLedger {
    /// Create an empty ledger with all counters at zero.
    pub const fn new() -> Self {
        Self {
            pool: ResourcePool {
                credits: 0,
                souls: 0,
                favor: 0,
                brimstone: 0,
            },
            history: Vec::new(),
        }
    }

    /// Create a ledger with starting balances and an empty history.
    pub const fn with_pool(pool: ResourcePool) -> Self {
        Self {
            pool,
            history: Vec::new(),
        }
    }

    /// Current balances, read-only.
    pub const fn pool(&self) -> &ResourcePool {
        &self.pool
    }

    /// Current balance of a single counter.
    pub const fn balance(&self, resource: Resource) -> u64 {
        self.pool.amount(resource)
    }

    /// The full audit history, in insertion order.
    pub fn history(&self) -> &[LedgerEntry] {
        &self.history
    }

    /// Whether every component of `cost` can be covered in full.
    pub const fn can_afford(&self, cost: &ResourceCost) -> bool {
        self.pool.credits >= cost.credits
            && self.pool.souls >= cost.souls
            && self.pool.favor >= cost.favor
            && self.pool.brimstone >= cost.brimstone
    }

    /// Spend a resource bundle, all-or-nothing.
    ///
    /// Returns `false` and mutates nothing if any component exceeds its
    /// balance. Callers must check the return value before assuming the
    /// transaction occurred.
    pub fn spend(&mut self, cost: &ResourceCost, day: u64, reason: &str) -> bool {
        if !self.can_afford(cost) {
            debug!(reason, "spend rejected: insufficient balance");
            return false;
        }

        for resource in Resource::ALL {
            let amount = cost.amount(resource);
            if amount == 0 {
                continue;
            }
            // Cannot underflow: can_afford validated the full bundle above.
            let balance = self.pool.amount(resource).saturating_sub(amount);
            self.pool.set_amount(resource, balance);
            self.record(day, resource, signed(amount).saturating_neg(), reason);
        }

        debug!(reason, "spend applied");
        true
    }

    /// Credit a resource bundle unconditionally.
    ///
    /// Balances saturate at `u64::MAX` rather than wrapping; the recorded
    /// delta is the increase actually applied.
    pub fn credit(&mut self, gain: &ResourceCost, day: u64, reason: &str) {
        for resource in Resource::ALL {
            let amount = gain.amount(resource);
            if amount == 0 {
                continue;
            }
            let before = self.pool.amount(resource);
            let after = before.saturating_add(amount);
            self.pool.set_amount(resource, after);
            self.record(day, resource, signed(after.saturating_sub(before)), reason);
        }
    }

    /// Apply a signed bundle of deltas, flooring each counter at zero.
    ///
    /// Unlike [`spend`], this never rejects: event effects that drain more
    /// than the balance simply empty the counter. The recorded delta is the
    /// change actually applied after flooring.
    ///
    /// [`spend`]: ResourceLedger::spend
    pub fn apply(&mut self, delta: &ResourceDelta, day: u64, reason: &str) {
        for resource in Resource::ALL {
            let change = delta.amount(resource);
            if change == 0 {
                continue;
            }
            let before = self.pool.amount(resource);
            let after = if change >= 0 {
                before.saturating_add(change.unsigned_abs())
            } else {
                before.saturating_sub(change.unsigned_abs())
            };
            self.pool.set_amount(resource, after);

            let applied = if after >= before {
                signed(after.saturating_sub(before))
            } else {
                signed(before.saturating_sub(after)).saturating_neg()
            };
            self.record(day, resource, applied, reason);
        }
    }

    /// Append one history entry.
    fn record(&mut self, day: u64, resource: Resource, delta: i64, reason: &str) {
        self.history.push(LedgerEntry {
            day,
            timestamp: Utc::now(),
            resource,
            delta,
            reason: reason.to_owned(),
        });
    }
}

//! Office facility rules: daily recovery rates, workshop discount, and
//! upgrade economics.
//!
//! Exactly one room of each kind exists; upgrades raise its level up to
//! the configured cap. Recovery and discount all scale linearly with level.

use netherco_types::{ResourceCost, RoomKind};

use crate::config::RoomConfig;
use crate::state::GameState;

/// Morale restored per day by the break room at its current level.
pub fn morale_recovery(state: &GameState, config: &RoomConfig) -> u32 {
    state
        .room_level(RoomKind::BreakRoom)
        .saturating_mul(config.morale_per_level)
}

/// Health restored per day by the infirmary at its current level.
pub fn health_recovery(state: &GameState, config: &RoomConfig) -> u32 {
    state
        .room_level(RoomKind::Infirmary)
        .saturating_mul(config.health_per_level)
}

/// Workshop discount percent, capped.
pub fn workshop_discount_pct(state: &GameState, config: &RoomConfig) -> u32 {
    state
        .room_level(RoomKind::Workshop)
        .saturating_mul(config.discount_pct_per_level)
        .min(config.discount_pct_cap)
}

/// Apply the workshop discount to a crafting cost.
pub fn discounted_cost(cost: &ResourceCost, discount_pct: u32) -> ResourceCost {
    let keep = u64::from(100_u32.saturating_sub(discount_pct.min(100)));
    let scale = |value: u64| value.saturating_mul(keep).checked_div(100).unwrap_or(0);
    ResourceCost {
        credits: scale(cost.credits),
        souls: scale(cost.souls),
        favor: scale(cost.favor),
        brimstone: scale(cost.brimstone),
    }
}

/// Credit cost of upgrading a room from its current level.
pub fn upgrade_cost(current_level: u32, config: &RoomConfig) -> ResourceCost {
    ResourceCost::credits(
        config
            .upgrade_base_cost
            .saturating_mul(u64::from(current_level)),
    )
}

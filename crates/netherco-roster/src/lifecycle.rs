//! Per-tick aging and stat mutation for daemons.
//!
//! Every mutator in this module clamps health and morale to 0--100 and
//! floors lifespan at zero. The type does not enforce the ranges; these
//! functions do, and nothing else writes the stats.
//!
//! # Order of operations per daily tick
//!
//! 1. Decrement lifespan by the base aging rate plus any accelerated-aging
//!    modifier days.
//! 2. Apply room-derived health and morale recovery, plus quirk morale
//!    recovery, clamped to 100.
//! 3. Report whether lifespan reached zero; the caller retires the daemon.

use netherco_types::Daemon;

use crate::config::LifecycleConfig;
use crate::quirks;

/// Upper clamp for health and morale.
pub const STAT_MAX: u32 = 100;

/// Result of applying one day of aging to a daemon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgingResult {
    /// Whether the daemon's lifespan ran out this tick.
    pub died: bool,
}

/// Apply one daily tick of aging and recovery to an active daemon.
///
/// `extra_aging_days` comes from accelerated-aging modifiers; room recovery
/// values come from the facility levels. The caller retires the daemon if
/// `died` is reported.
pub fn age_daemon(
    daemon: &mut Daemon,
    config: &LifecycleConfig,
    extra_aging_days: u32,
    health_recovery: u32,
    morale_recovery: u32,
) -> AgingResult {
    // 1. Aging
    let lost = config.base_aging_days.saturating_add(extra_aging_days);
    daemon.lifespan_days = daemon.lifespan_days.saturating_sub(lost);

    // 2. Recovery (skipped when lifespan just ran out; retirement follows)
    if daemon.lifespan_days > 0 {
        daemon.health = daemon
            .health
            .saturating_add(health_recovery)
            .min(STAT_MAX);
        let morale_gain = morale_recovery.saturating_add(quirks::morale_recovery_bonus(&daemon.quirks));
        daemon.morale = daemon.morale.saturating_add(morale_gain).min(STAT_MAX);
    }

    AgingResult {
        died: daemon.lifespan_days == 0,
    }
}

/// Apply mission damage to a daemon, flooring every stat at zero.
pub const fn apply_damage(
    daemon: &mut Daemon,
    health_loss: u32,
    morale_loss: u32,
    lifespan_loss: u32,
) {
    daemon.health = daemon.health.saturating_sub(health_loss);
    daemon.morale = daemon.morale.saturating_sub(morale_loss);
    daemon.lifespan_days = daemon.lifespan_days.saturating_sub(lifespan_loss);
}

/// Adjust morale by a signed delta, clamped to 0--100.
pub const fn adjust_morale(daemon: &mut Daemon, delta: i32) {
    daemon.morale = shift_stat(daemon.morale, delta);
}

/// Adjust health by a signed delta, clamped to 0--100.
pub const fn adjust_health(daemon: &mut Daemon, delta: i32) {
    daemon.health = shift_stat(daemon.health, delta);
}

/// Shift a 0--100 stat by a signed delta with clamping.
const fn shift_stat(value: u32, delta: i32) -> u32 {
    let magnitude = delta.unsigned_abs();
    if delta >= 0 {
        let raised = value.saturating_add(magnitude);
        if raised > STAT_MAX { STAT_MAX } else { raised }
    } else {
        value.saturating_sub(magnitude)
    }
}

//! The corporate ladder and compliance obligations.
//!
//! Tiers form a static ordered ladder. Evaluation compares the *next*
//! tier's requirements against live counters with AND semantics: every
//! dimension must be individually met (zero-valued requirements are
//! trivially met). Promotion is explicit and monotonic; nothing in the
//! engine lowers the tier.
//!
//! Compliance tasks carry deadline days. The daily tick sweeps them: a
//! task past its deadline applies its penalty bundle exactly once and then
//! stays visible as overdue.

use tracing::{info, warn};

use netherco_roster::{legacy, lifecycle};
use netherco_types::{
    ComplianceTask, Outcome, ResourceDelta, TaskId,
};

use crate::error::EngineError;
use crate::state::GameState;

// ---------------------------------------------------------------------------
// The ladder
// ---------------------------------------------------------------------------

/// Requirement set for one tier. All dimensions are ANDed.
#[derive(Debug, Clone, Copy, Default)]
pub struct TierRequirements {
    /// Minimum planets currently conquered.
    pub min_planets: u32,
    /// Minimum in-game days survived.
    pub min_days_survived: u64,
    /// Minimum deepest bloodline generation.
    pub min_legacy_generation: u32,
    /// Minimum rival overlords defeated.
    pub min_rivals_defeated: u32,
    /// Minimum compliance tasks completed.
    pub min_audits_completed: u32,
}

/// One rung of the corporate ladder.
#[derive(Debug, Clone, Copy)]
pub struct TierDef {
    /// Tier title.
    pub name: &'static str,
    /// Requirements to *reach* this tier from the one below.
    pub requirements: TierRequirements,
    /// What reaching this tier unlocks, for the presentation layer.
    pub unlocks: &'static [&'static str],
}

/// The founding tier every corporation starts on.
const FOUNDING_TIER: TierDef = TierDef {
    name: "Startup Fiefdom",
    requirements: TierRequirements {
        min_planets: 0,
        min_days_survived: 0,
        min_legacy_generation: 0,
        min_rivals_defeated: 0,
        min_audits_completed: 0,
    },
    unlocks: &["recruitment", "missions"],
};

/// The ladder, bottom to top. Index 0 is the founding tier.
pub const TIER_LADDER: &[TierDef] = &[
    FOUNDING_TIER,
    TierDef {
        name: "Branch Office",
        requirements: TierRequirements {
            min_planets: 1,
            min_days_survived: 10,
            min_legacy_generation: 0,
            min_rivals_defeated: 0,
            min_audits_completed: 0,
        },
        unlocks: &["workshop crafting", "corporate events"],
    },
    TierDef {
        name: "Regional Office",
        requirements: TierRequirements {
            min_planets: 2,
            min_days_survived: 30,
            min_legacy_generation: 2,
            min_rivals_defeated: 0,
            min_audits_completed: 1,
        },
        unlocks: &["medium contracts", "compliance fast-track"],
    },
    TierDef {
        name: "Division Headquarters",
        requirements: TierRequirements {
            min_planets: 4,
            min_days_survived: 60,
            min_legacy_generation: 3,
            min_rivals_defeated: 1,
            min_audits_completed: 2,
        },
        unlocks: &["hard contracts", "legend sponsorships"],
    },
    TierDef {
        name: "Infernal Conglomerate",
        requirements: TierRequirements {
            min_planets: 6,
            min_days_survived: 120,
            min_legacy_generation: 4,
            min_rivals_defeated: 2,
            min_audits_completed: 4,
        },
        unlocks: &["the corner office"],
    },
];

/// Deepest generation across the archive and the living roster.
fn deepest_generation(state: &GameState) -> u32 {
    let archived = legacy::max_generation(&state.legacy_archive);
    let living = state
        .daemons
        .values()
        .map(|d| d.generation)
        .max()
        .unwrap_or(0);
    archived.max(living)
}

/// Whether the next tier's requirements are currently met.
///
/// Returns `false` when the corporation already holds the top tier.
pub fn evaluate(state: &GameState) -> bool {
    let Some(next) = TIER_LADDER.get(state.tier.saturating_add(1)) else {
        return false;
    };
    let req = &next.requirements;
    state.planets_conquered() >= req.min_planets
        && state.day >= req.min_days_survived
        && deepest_generation(state) >= req.min_legacy_generation
        && state.rivals_defeated >= req.min_rivals_defeated
        && state.audits_completed >= req.min_audits_completed
}

/// Promote to the next tier. Fails (with no mutation) unless [`evaluate`]
/// holds; the tier index only ever increases.
pub fn promote(state: &mut GameState) -> Result<&'static TierDef, EngineError> {
    let next_tier = state.tier.saturating_add(1);
    let Some(next) = TIER_LADDER.get(next_tier) else {
        return Err(EngineError::LadderExhausted);
    };
    if !evaluate(state) {
        return Err(EngineError::PromotionRequirementsNotMet { next_tier });
    }
    state.tier = next_tier;
    info!(tier = next.name, "promoted");
    Ok(next)
}

/// The current tier definition.
pub fn current_tier(state: &GameState) -> &'static TierDef {
    TIER_LADDER.get(state.tier).unwrap_or(&FOUNDING_TIER)
}

// ---------------------------------------------------------------------------
// Compliance
// ---------------------------------------------------------------------------

/// Sweep overdue compliance tasks, applying each penalty exactly once.
///
/// Returns how many penalties were applied this sweep. Overdue tasks stay
/// on the list, visibly overdue.
pub fn sweep_compliance(state: &mut GameState) -> u32 {
    let day = state.day;
    let mut applied = 0_u32;

    // Collect penalties first; the ledger and roster borrows conflict with
    // iterating the task list mutably.
    let mut pending = Vec::new();
    for task in &mut state.compliance_tasks {
        if task.is_overdue(day) && !task.penalty_applied {
            task.penalty_applied = true;
            pending.push((task.name.clone(), task.penalty));
        }
    }

    for (name, penalty) in pending {
        warn!(task = %name, "compliance deadline missed");
        let fine = ResourceDelta {
            credits: negated(penalty.fine.credits),
            souls: negated(penalty.fine.souls),
            favor: negated(penalty.fine.favor),
            brimstone: negated(penalty.fine.brimstone),
        };
        state.ledger.apply(&fine, day, "COMPLIANCE_FINE");
        if penalty.morale_loss > 0 {
            let loss = i32::try_from(penalty.morale_loss).unwrap_or(i32::MAX);
            for daemon in state.daemons.values_mut().filter(|d| d.active) {
                lifecycle::adjust_morale(daemon, loss.saturating_neg());
            }
        }
        applied = applied.saturating_add(1);
    }

    applied
}

/// Negate a fine component into a signed delta.
fn negated(amount: u64) -> i64 {
    i64::try_from(amount).unwrap_or(i64::MAX).saturating_neg()
}

/// Mark a compliance task completed and count the audit.
pub fn complete_task(state: &mut GameState, task_id: TaskId) -> Result<Outcome, EngineError> {
    let task = state
        .compliance_tasks
        .iter_mut()
        .find(|t| t.id == task_id)
        .ok_or(EngineError::TaskNotFound(task_id))?;
    if task.completed {
        return Err(EngineError::TaskAlreadyCompleted(task_id));
    }
    task.completed = true;
    let name = task.name.clone();
    state.audits_completed = state.audits_completed.saturating_add(1);
    info!(task = %name, "compliance task completed");
    Ok(Outcome::new(format!("{name} filed with Head Office.")))
}

/// Add a new compliance task to the list.
pub fn issue_task(state: &mut GameState, task: ComplianceTask) -> Outcome {
    let summary = format!("{} due by day {}.", task.name, task.deadline_day);
    state.compliance_tasks.push(task);
    Outcome::new(summary)
}

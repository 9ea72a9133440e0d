//! The daily tick: ordered phases that advance the simulation one day.
//!
//! Phases, in order:
//!
//! 1. **Day advance** -- increment the day counter.
//! 2. **Aging & recovery** -- every active daemon loses lifespan (base rate
//!    plus accelerated-aging modifiers) and recovers health/morale from the
//!    infirmary and break room.
//! 3. **Death & succession** -- daemons whose lifespan ran out retire:
//!    memorial story, legacy absorption, equipment inheritance, and a
//!    successor when the bloodline qualifies.
//! 4. **Modifier decay** -- day-clocked modifiers count down and expire.
//! 5. **Compliance sweep** -- overdue tasks apply their penalty once.
//! 6. **Event trigger** -- with configured probability, one catalog event
//!    surfaces or applies.
//! 7. **Passive income** -- active income modifiers pay out.
//!
//! The cycle runs to completion before returning; re-entrancy is guarded
//! by the engine facade.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use netherco_roster::{death, equipment, legacy, lifecycle, succession};
use netherco_types::{ModifierClock, ModifierKind, Outcome, ResourceCost};

use crate::config::EngineConfig;
use crate::events::{self, TriggeredEvent};
use crate::progression;
use crate::rooms;
use crate::state::GameState;

/// Summary of one executed tick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickSummary {
    /// The day that was just simulated.
    pub day: u64,
    /// Names of daemons who died this tick.
    pub deaths: Vec<String>,
    /// Names of successors who joined this tick.
    pub successions: Vec<String>,
    /// Modifiers that expired this tick.
    pub expired_modifiers: usize,
    /// Compliance penalties applied this tick.
    pub penalties_applied: u32,
    /// The event that triggered, if any.
    pub event: Option<TriggeredEvent>,
    /// Passive income credited this tick.
    pub passive_income: u64,
    /// Structured outcome for the notification boundary.
    pub outcome: Outcome,
}

/// Sum of accelerated-aging modifiers, in extra lifespan days per tick.
fn accelerated_aging(state: &GameState) -> u32 {
    state.modifiers.iter().fold(0_u32, |acc, m| match m.kind {
        ModifierKind::AcceleratedAging { extra_days } => acc.saturating_add(extra_days),
        _ => acc,
    })
}

/// Sum of passive-income modifiers, in credits per day.
fn passive_income(state: &GameState) -> u64 {
    state.modifiers.iter().fold(0_u64, |acc, m| match m.kind {
        ModifierKind::PassiveIncome { per_day } => acc.saturating_add(per_day),
        _ => acc,
    })
}

/// Execute one full tick over the state.
///
/// Called through the engine facade, which guards against re-entrancy.
pub fn run(state: &mut GameState, config: &EngineConfig, rng: &mut impl Rng) -> TickSummary {
    // Phase 1: day advance.
    state.day = state.day.saturating_add(1);
    let day = state.day;
    debug!(day, "tick started");

    // Phase 2: aging and recovery.
    let extra_days = accelerated_aging(state);
    let health_recovery = rooms::health_recovery(state, &config.rooms);
    let morale_recovery = rooms::morale_recovery(state, &config.rooms);

    let mut died = Vec::new();
    for daemon in state.daemons.values_mut().filter(|d| d.active) {
        let result = lifecycle::age_daemon(
            daemon,
            &config.lifecycle,
            extra_days,
            health_recovery,
            morale_recovery,
        );
        if result.died {
            died.push(daemon.id);
        }
    }

    // Phase 3: death and succession.
    let mut deaths = Vec::new();
    let mut successions = Vec::new();
    for daemon_id in died {
        let Some(daemon) = state.daemons.get_mut(&daemon_id) else {
            continue;
        };
        let consequences = death::retire(daemon, day, &config.lifecycle);
        let parent = daemon.clone();
        deaths.push(parent.name.clone());
        info!(daemon = %parent.name, day, "daemon died");

        if let Some(equipment_id) = consequences.released_equipment
            && let Some(item) = state.equipment.get_mut(&equipment_id)
        {
            equipment::inherit(item, &config.lifecycle, &parent.name, day);
        }

        legacy::record_story(
            &mut state.legacy_archive,
            &consequences.bloodline,
            &parent.name,
            parent.generation,
            consequences.memorial,
        );
        legacy::absorb_legacy(
            &mut state.legacy_archive,
            &consequences.bloodline,
            &parent.name,
            parent.generation,
            &parent.legacy,
        );

        if consequences.succession_eligible {
            let outcome = succession::create_successor(&parent, day, &config.lifecycle, rng);
            successions.push(outcome.successor.name.clone());
            legacy::record_story(
                &mut state.legacy_archive,
                &outcome.successor.bloodline,
                &parent.name,
                outcome.successor.generation,
                outcome.story,
            );
            state
                .daemons
                .insert(outcome.successor.id, outcome.successor);
        }
    }

    // Phase 4: day-clocked modifier decay.
    let before = state.modifiers.len();
    for modifier in &mut state.modifiers {
        if let ModifierClock::Days(remaining) = modifier.clock {
            modifier.clock = ModifierClock::Days(remaining.saturating_sub(1));
        }
    }
    state
        .modifiers
        .retain(|m| !matches!(m.clock, ModifierClock::Days(0)));
    let expired_modifiers = before.saturating_sub(state.modifiers.len());

    // Phase 5: compliance deadlines.
    let penalties_applied = progression::sweep_compliance(state);

    // Phase 6: probabilistic event trigger.
    let event = if rng.random_range(0_u32..100) < config.events.trigger_chance_pct {
        events::trigger(state, config, rng)
    } else {
        None
    };

    // Phase 7: passive income.
    let income = passive_income(state);
    if income > 0 {
        state
            .ledger
            .credit(&ResourceCost::credits(income), day, "PASSIVE_INCOME");
    }

    let outcome = Outcome::new(format!(
        "Day {day}: {} deaths, {} successions, {} penalties.",
        deaths.len(),
        successions.len(),
        penalties_applied
    ));

    TickSummary {
        day,
        deaths,
        successions,
        expired_modifiers,
        penalties_applied,
        event,
        passive_income: income,
        outcome,
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use netherco_types::{ActiveModifier, Daemon, DaemonId, LegacyCounters, Specialization};

    use super::*;

    fn roster_daemon(lifespan: u32) -> Daemon {
        Daemon {
            id: DaemonId::new(),
            name: String::from("Hexa Duskveil"),
            specialization: Specialization::Combat,
            health: 60,
            morale: 50,
            lifespan_days: lifespan,
            quirks: Vec::new(),
            active: true,
            generation: 1,
            bloodline: String::from("Duskveil"),
            mentor: None,
            inherited_traits: Vec::new(),
            legacy: LegacyCounters::default(),
            equipment: None,
            recruited_day: 0,
        }
    }

    #[test]
    fn tick_advances_the_day() {
        let mut state = GameState::new();
        let config = EngineConfig::default();
        let mut rng = StdRng::seed_from_u64(1);
        let summary = run(&mut state, &config, &mut rng);
        assert_eq!(summary.day, 1);
        assert_eq!(state.day, 1);
    }

    #[test]
    fn aging_applies_room_recovery() {
        let mut state = GameState::new();
        let daemon = roster_daemon(30);
        let id = daemon.id;
        state.daemons.insert(id, daemon);
        let config = EngineConfig::default();
        let mut rng = StdRng::seed_from_u64(1);

        let _ = run(&mut state, &config, &mut rng);
        let after = state.daemons.get(&id);
        // Level-1 rooms: +2 health, +2 morale; lifespan down by 1.
        assert!(after.is_some_and(|d| d.health == 62));
        assert!(after.is_some_and(|d| d.morale == 52));
        assert!(after.is_some_and(|d| d.lifespan_days == 29));
    }

    #[test]
    fn death_without_eligibility_leaves_no_successor() {
        let mut state = GameState::new();
        let daemon = roster_daemon(1);
        state.daemons.insert(daemon.id, daemon);
        let config = EngineConfig::default();
        let mut rng = StdRng::seed_from_u64(1);

        let summary = run(&mut state, &config, &mut rng);
        assert_eq!(summary.deaths.len(), 1);
        assert!(summary.successions.is_empty());
        assert_eq!(state.daemons.len(), 1);
        // The memorial landed in the archive.
        assert!(state.legacy_archive.contains_key("Duskveil"));
    }

    #[test]
    fn qualifying_death_produces_a_successor() {
        let mut state = GameState::new();
        let mut daemon = roster_daemon(1);
        daemon.legacy.successful_missions = 3;
        state.daemons.insert(daemon.id, daemon);
        let config = EngineConfig::default();
        let mut rng = StdRng::seed_from_u64(1);

        let summary = run(&mut state, &config, &mut rng);
        assert_eq!(summary.successions.len(), 1);
        assert_eq!(state.daemons.len(), 2);
        let successor = state.daemons.values().find(|d| d.active);
        assert!(successor.is_some_and(|d| d.generation == 2));
        assert!(successor.is_some_and(|d| d.bloodline == "Duskveil"));
    }

    #[test]
    fn accelerated_aging_modifier_bites() {
        let mut state = GameState::new();
        let daemon = roster_daemon(30);
        let id = daemon.id;
        state.daemons.insert(id, daemon);
        state.modifiers.push(ActiveModifier {
            kind: ModifierKind::AcceleratedAging { extra_days: 2 },
            clock: ModifierClock::Days(5),
        });
        let config = EngineConfig::default();
        let mut rng = StdRng::seed_from_u64(1);

        let _ = run(&mut state, &config, &mut rng);
        assert!(
            state
                .daemons
                .get(&id)
                .is_some_and(|d| d.lifespan_days == 27)
        );
    }

    #[test]
    fn day_clocked_modifiers_expire() {
        let mut state = GameState::new();
        state.modifiers.push(ActiveModifier {
            kind: ModifierKind::PassiveIncome { per_day: 10 },
            clock: ModifierClock::Days(1),
        });
        let config = EngineConfig::default();
        let mut rng = StdRng::seed_from_u64(1);

        let summary = run(&mut state, &config, &mut rng);
        assert_eq!(summary.expired_modifiers, 1);
        assert!(state.modifiers.is_empty());
        // Decay runs before income, so a one-day modifier never pays.
        assert_eq!(summary.passive_income, 0);
    }

    #[test]
    fn passive_income_credits_the_ledger() {
        let mut state = GameState::new();
        state.modifiers.push(ActiveModifier {
            kind: ModifierKind::PassiveIncome { per_day: 10 },
            clock: ModifierClock::Days(5),
        });
        let config = EngineConfig::default();
        let mut rng = StdRng::seed_from_u64(1);

        let before = state.ledger.pool().credits;
        let summary = run(&mut state, &config, &mut rng);
        assert_eq!(summary.passive_income, 10);
        assert_eq!(state.ledger.pool().credits, before.saturating_add(10));
    }
}

//! Mission resolution: the success chance pipeline, the roll, and the
//! atomic application of rewards and casualties.
//!
//! # Chance pipeline
//!
//! 1. Base chance 50.
//! 2. Composition bonus when the team fields the specialization favored by
//!    the target tier (Infiltration for easy, Combat for medium, Sabotage
//!    for hard).
//! 3. Team condition: `(avg_health - 50) * 0.12 + (avg_morale - 50) * 0.06`
//!    in integer math, health weighted above morale.
//! 4. Per-member equipment bonus.
//! 5. Difficulty penalty (0 / -15 / -30).
//! 6. Quirk chance tags and any active productivity modifiers.
//! 7. Clamp to [10, 90]. The outcome is never certain in either direction.
//!
//! Every precondition is validated before any mutation; the full outcome
//! (roll, rewards, per-member damage) is computed into a plan and only then
//! applied, so a rejected mission leaves no trace and an accepted one is
//! never observed half-applied.

use std::collections::BTreeSet;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::info;

use netherco_roster::{RosterError, lifecycle, quirks};
use netherco_types::{
    Daemon, DaemonId, Difficulty, MissionKind, ModifierClock, ModifierKind, Outcome, PlanetId,
    ResourceCost,
};

use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::state::GameState;

/// Casualty record for one mission participant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberDamage {
    /// The participant.
    pub daemon_id: DaemonId,
    /// Participant display name, for the narrative layer.
    pub name: String,
    /// Health lost.
    pub health_lost: u32,
    /// Morale lost.
    pub morale_lost: u32,
    /// Lifespan days lost.
    pub lifespan_lost: u32,
}

/// The full result of a resolved mission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissionReport {
    /// Whether the mission succeeded.
    pub success: bool,
    /// The clamped chance the roll was made against, for display and audit.
    pub chance: i64,
    /// Generated narrative summary.
    pub narrative: String,
    /// Resources credited (scaled down on failure, never zeroed).
    pub rewards: ResourceCost,
    /// Per-participant casualty records.
    pub damage: Vec<MemberDamage>,
    /// Whether this mission conquered the target.
    pub conquered: bool,
    /// Structured outcome for the notification boundary.
    pub outcome: Outcome,
}

/// Percentage helper: `value * pct / 100`, saturating.
const fn pct_of(value: u64, pct: u64) -> u64 {
    match value.saturating_mul(pct).checked_div(100) {
        Some(v) => v,
        None => 0,
    }
}

/// Base reward bundle for a target difficulty.
const fn reward_for(difficulty: Difficulty) -> ResourceCost {
    match difficulty {
        Difficulty::Easy => ResourceCost {
            credits: 100,
            souls: 5,
            favor: 1,
            brimstone: 2,
        },
        Difficulty::Medium => ResourceCost {
            credits: 200,
            souls: 12,
            favor: 3,
            brimstone: 5,
        },
        Difficulty::Hard => ResourceCost {
            credits: 400,
            souls: 25,
            favor: 8,
            brimstone: 10,
        },
    }
}

/// Compute the clamped success chance for a team against a target.
///
/// Pure over its inputs; exposed for the engine's mission preview.
pub fn success_chance(
    team: &[&Daemon],
    difficulty: Difficulty,
    config: &EngineConfig,
    productivity_pct: i64,
) -> i64 {
    let mission = &config.mission;
    let len = u64::try_from(team.len()).unwrap_or(1).max(1);

    let avg_health = team
        .iter()
        .fold(0_u64, |acc, d| acc.saturating_add(u64::from(d.health)))
        .checked_div(len)
        .unwrap_or(0);
    let avg_morale = team
        .iter()
        .fold(0_u64, |acc, d| acc.saturating_add(u64::from(d.morale)))
        .checked_div(len)
        .unwrap_or(0);

    let favored = difficulty.favored_specialization();
    let composition = if team.iter().any(|d| d.specialization == favored) {
        mission.composition_bonus
    } else {
        0
    };

    let health_term = i64::try_from(avg_health)
        .unwrap_or(0)
        .saturating_sub(50)
        .saturating_mul(mission.health_weight_pct)
        .checked_div(100)
        .unwrap_or(0);
    let morale_term = i64::try_from(avg_morale)
        .unwrap_or(0)
        .saturating_sub(50)
        .saturating_mul(mission.morale_weight_pct)
        .checked_div(100)
        .unwrap_or(0);

    let equipped = team.iter().filter(|d| d.equipment.is_some()).count();
    let equipment_bonus = i64::try_from(equipped)
        .unwrap_or(0)
        .saturating_mul(mission.equipment_bonus_per_member);

    let difficulty_penalty = match difficulty {
        Difficulty::Easy => 0,
        Difficulty::Medium => mission.medium_penalty,
        Difficulty::Hard => mission.hard_penalty,
    };

    let quirk_term = team.iter().fold(0_i64, |acc, d| {
        acc.saturating_add(i64::from(quirks::chance_modifier(&d.quirks)))
    });

    mission
        .base_chance
        .saturating_add(composition)
        .saturating_add(health_term)
        .saturating_add(morale_term)
        .saturating_add(equipment_bonus)
        .saturating_sub(difficulty_penalty)
        .saturating_add(quirk_term)
        .saturating_add(productivity_pct)
        .clamp(mission.chance_min, mission.chance_max)
}

/// Sum of active productivity bonuses, in chance points.
fn productivity_bonus(state: &GameState) -> i64 {
    state.modifiers.iter().fold(0_i64, |acc, m| match m.kind {
        ModifierKind::ProductivityBonus { pct } => acc.saturating_add(i64::from(pct)),
        _ => acc,
    })
}

/// Planned damage for one member, computed before any mutation.
struct DamagePlan {
    daemon_id: DaemonId,
    name: String,
    health_lost: u32,
    morale_lost: u32,
    lifespan_lost: u32,
}

/// Roll one member's casualty record.
fn roll_damage(
    daemon: &Daemon,
    difficulty: Difficulty,
    config: &EngineConfig,
    rng: &mut impl Rng,
) -> DamagePlan {
    let mission = &config.mission;
    let difficulty_pct = match difficulty {
        Difficulty::Easy => mission.easy_damage_pct,
        Difficulty::Medium => mission.medium_damage_pct,
        Difficulty::Hard => mission.hard_damage_pct,
    };
    let wounded_pct = if daemon.health < mission.wounded_threshold {
        mission.wounded_damage_pct
    } else {
        100
    };
    let quirk_pct = quirks::damage_modifier_pct(&daemon.quirks);

    let scale = |base: u32| -> u32 {
        let scaled = pct_of(
            pct_of(
                pct_of(u64::from(base), u64::from(difficulty_pct)),
                u64::from(wounded_pct),
            ),
            u64::from(quirk_pct),
        );
        u32::try_from(scaled).unwrap_or(u32::MAX)
    };

    DamagePlan {
        daemon_id: daemon.id,
        name: daemon.name.clone(),
        health_lost: scale(rng.random_range(mission.health_loss_min..=mission.health_loss_max)),
        morale_lost: scale(rng.random_range(mission.morale_loss_min..=mission.morale_loss_max)),
        lifespan_lost: rng.random_range(mission.lifespan_loss_min..=mission.lifespan_loss_max),
    }
}

/// Resolve a mission against a planet.
///
/// Validates the team and target fully, computes the entire outcome, then
/// applies it in one pass: member damage and legacy counters, planet flags,
/// reward credit, and mission-clocked modifier decay.
pub fn resolve(
    state: &mut GameState,
    team_ids: &[DaemonId],
    planet_id: PlanetId,
    kind: MissionKind,
    config: &EngineConfig,
    rng: &mut impl Rng,
) -> Result<MissionReport, EngineError> {
    if team_ids.is_empty() {
        return Err(EngineError::EmptyTeam);
    }

    let planet = state
        .planets
        .get(&planet_id)
        .ok_or(EngineError::PlanetNotFound(planet_id))?;
    if kind == MissionKind::Conquest && planet.conquered {
        return Err(EngineError::PlanetAlreadyConquered(planet_id));
    }
    let difficulty = planet.difficulty;
    let planet_name = planet.name.clone();

    // Validate every member before touching anything. A daemon is one
    // participant, so duplicate ids are rejected rather than double-counted.
    let mut seen: BTreeSet<DaemonId> = BTreeSet::new();
    let mut team: Vec<&Daemon> = Vec::with_capacity(team_ids.len());
    for id in team_ids {
        if !seen.insert(*id) {
            return Err(EngineError::DuplicateTeamMember(*id));
        }
        let daemon = state
            .daemons
            .get(id)
            .ok_or(RosterError::DaemonNotFound(*id))?;
        if !daemon.active {
            return Err(RosterError::DaemonInactive(*id).into());
        }
        if daemon.health < config.mission.health_floor {
            return Err(EngineError::BelowHealthFloor {
                daemon_id: *id,
                health: daemon.health,
                floor: config.mission.health_floor,
            });
        }
        team.push(daemon);
    }

    // Compute the full outcome as a plan.
    let chance = success_chance(&team, difficulty, config, productivity_bonus(state));
    let roll = i64::from(rng.random_range(0_u32..100));
    let success = roll < chance;

    let base_rewards = reward_for(difficulty);
    let rewards = if success {
        base_rewards
    } else {
        let scale = config.mission.failure_reward_pct;
        ResourceCost {
            credits: pct_of(base_rewards.credits, scale),
            souls: pct_of(base_rewards.souls, scale),
            favor: pct_of(base_rewards.favor, scale),
            brimstone: pct_of(base_rewards.brimstone, scale),
        }
    };

    let plans: Vec<DamagePlan> = team
        .iter()
        .map(|d| roll_damage(d, difficulty, config, rng))
        .collect();

    let conquered = success && kind == MissionKind::Conquest;
    let narrative = narrative_for(&planet_name, kind, success, chance);

    // Apply the plan. Nothing below can fail.
    let day = state.day;
    for plan in &plans {
        if let Some(daemon) = state.daemons.get_mut(&plan.daemon_id) {
            lifecycle::apply_damage(
                daemon,
                plan.health_lost,
                plan.morale_lost,
                plan.lifespan_lost,
            );
            if success {
                daemon.legacy.successful_missions =
                    daemon.legacy.successful_missions.saturating_add(1);
                if conquered {
                    daemon.legacy.planets_conquered =
                        daemon.legacy.planets_conquered.saturating_add(1);
                }
            }
        }
    }

    if let Some(planet) = state.planets.get_mut(&planet_id) {
        planet.last_mission_day = Some(day);
        if conquered {
            planet.conquered = true;
        }
    }
    if conquered && difficulty == Difficulty::Hard {
        state.rivals_defeated = state.rivals_defeated.saturating_add(1);
    }

    let reason = if success {
        "MISSION_REWARD"
    } else {
        "MISSION_CONSOLATION"
    };
    state.ledger.credit(&rewards, day, reason);

    decay_mission_modifiers(state);

    info!(
        planet = %planet_name,
        ?kind,
        chance,
        success,
        "mission resolved"
    );

    let damage = plans
        .into_iter()
        .map(|p| MemberDamage {
            daemon_id: p.daemon_id,
            name: p.name,
            health_lost: p.health_lost,
            morale_lost: p.morale_lost,
            lifespan_lost: p.lifespan_lost,
        })
        .collect();

    Ok(MissionReport {
        success,
        chance,
        narrative: narrative.clone(),
        rewards,
        damage,
        conquered,
        outcome: Outcome::new(narrative),
    })
}

/// Decrement mission-clocked modifiers and drop the expired ones.
fn decay_mission_modifiers(state: &mut GameState) {
    for modifier in &mut state.modifiers {
        if let ModifierClock::Missions(remaining) = modifier.clock {
            modifier.clock = ModifierClock::Missions(remaining.saturating_sub(1));
        }
    }
    state
        .modifiers
        .retain(|m| !matches!(m.clock, ModifierClock::Missions(0)));
}

/// One-line mission narrative for the report and the notification layer.
fn narrative_for(planet: &str, kind: MissionKind, success: bool, chance: i64) -> String {
    let verb = match kind {
        MissionKind::Conquest => "conquest of",
        MissionKind::Raid => "raid on",
        MissionKind::Reconnaissance => "reconnaissance of",
    };
    if success {
        format!("The {verb} {planet} succeeded against {chance}% odds.")
    } else {
        format!("The {verb} {planet} failed despite {chance}% odds. Consolation pay issued.")
    }
}

#[cfg(test)]
mod tests {
    use netherco_types::{ActiveModifier, LegacyCounters, Specialization};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn member(specialization: Specialization, health: u32, morale: u32) -> Daemon {
        Daemon {
            id: DaemonId::new(),
            name: String::from("Grix Vex"),
            specialization,
            health,
            morale,
            lifespan_days: 40,
            quirks: Vec::new(),
            active: true,
            generation: 1,
            bloodline: String::from("Vex"),
            mentor: None,
            inherited_traits: Vec::new(),
            legacy: LegacyCounters::default(),
            equipment: None,
            recruited_day: 0,
        }
    }

    #[test]
    fn perfect_easy_mission_reaches_eighty_nine() {
        // 50 base + 20 composition + 9 condition (100/100 stats) + 10
        // equipment + 0 difficulty = 89, inside the clamp band.
        let mut d = member(Specialization::Infiltration, 100, 100);
        d.equipment = Some(netherco_types::EquipmentId::new());
        let config = EngineConfig::default();
        let chance = success_chance(&[&d], Difficulty::Easy, &config, 0);
        assert_eq!(chance, 89);
    }

    #[test]
    fn chance_never_exceeds_ninety() {
        let mut team_member = member(Specialization::Infiltration, 100, 100);
        team_member.equipment = Some(netherco_types::EquipmentId::new());
        let config = EngineConfig::default();
        // Stack an absurd productivity bonus; the clamp must hold.
        let chance = success_chance(&[&team_member], Difficulty::Easy, &config, 500);
        assert_eq!(chance, 90);
    }

    #[test]
    fn chance_never_falls_below_ten() {
        let team_member = member(Specialization::Infiltration, 25, 0);
        let config = EngineConfig::default();
        let chance = success_chance(&[&team_member], Difficulty::Hard, &config, -500);
        assert_eq!(chance, 10);
    }

    #[test]
    fn composition_bonus_requires_favored_specialization() {
        let combat = member(Specialization::Combat, 50, 50);
        let config = EngineConfig::default();
        // 50 base, no composition, no condition terms, easy penalty 0.
        let chance = success_chance(&[&combat], Difficulty::Easy, &config, 0);
        assert_eq!(chance, 50);
    }

    #[test]
    fn failure_rewards_are_scaled_not_zeroed() {
        let full = reward_for(Difficulty::Medium);
        let scaled = pct_of(full.credits, 30);
        assert_eq!(scaled, 60);
        assert!(scaled > 0);
    }

    #[test]
    fn duplicate_team_member_is_rejected_without_mutation() {
        let mut state = GameState::new();
        let daemon = member(Specialization::Combat, 80, 80);
        let id = daemon.id;
        state.daemons.insert(id, daemon);
        let planet_id = state
            .planets
            .keys()
            .next()
            .copied()
            .unwrap_or_else(PlanetId::new);
        let config = EngineConfig::default();
        let mut rng = StdRng::seed_from_u64(3);

        let result = resolve(
            &mut state,
            &[id, id],
            planet_id,
            MissionKind::Raid,
            &config,
            &mut rng,
        );
        assert!(matches!(result, Err(EngineError::DuplicateTeamMember(_))));
        assert!(
            state
                .daemons
                .get(&id)
                .is_some_and(|d| d.legacy.successful_missions == 0 && d.health == 80)
        );
        assert!(state.ledger.history().is_empty());
    }

    #[test]
    fn mission_clock_decays_and_expires() {
        let mut state = GameState::new();
        state.modifiers.push(ActiveModifier {
            kind: ModifierKind::ProductivityBonus { pct: 10 },
            clock: ModifierClock::Missions(1),
        });
        state.modifiers.push(ActiveModifier {
            kind: ModifierKind::PassiveIncome { per_day: 5 },
            clock: ModifierClock::Days(3),
        });
        decay_mission_modifiers(&mut state);
        // The mission-clocked one expired; the day-clocked one is untouched.
        assert_eq!(state.modifiers.len(), 1);
        assert!(matches!(
            state.modifiers.first().map(|m| m.clock),
            Some(ModifierClock::Days(3))
        ));
    }
}

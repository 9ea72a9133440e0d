//! The engine facade: every entry point the presentation layer calls.
//!
//! [`GameEngine`] owns the state, the tuning config, and the random
//! source. Every mutator is internally atomic (validate fully, then
//! mutate) and returns either a typed report or a structured [`Outcome`]
//! for the notification boundary. Failures are typed [`EngineError`]s with
//! no mutation performed.

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;

use netherco_roster::{equipment, recruitment, RosterError};
use netherco_types::{
    CompliancePenalty, ComplianceTask, DaemonId, EquipmentId, MissionKind, ModifierKind, Outcome,
    PlanetId, ResourceCost, RoomKind, TaskId,
};

use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::events::{self, TriggeredEvent};
use crate::mission::{self, MissionReport};
use crate::progression::{self, TierDef};
use crate::rooms;
use crate::snapshot::{self, GameSnapshot};
use crate::state::GameState;
use crate::tick::{self, TickSummary};

/// Cap on stacked recruitment discounts, in percent.
const RECRUIT_DISCOUNT_CAP: u32 = 50;

/// The single orchestrating service owning all game state.
#[derive(Debug)]
pub struct GameEngine {
    state: GameState,
    config: EngineConfig,
    rng: StdRng,
    tick_in_progress: bool,
}

impl GameEngine {
    /// A fresh game with OS-seeded randomness.
    pub fn new() -> Self {
        Self::from_state(GameState::new(), EngineConfig::default(), StdRng::from_os_rng())
    }

    /// A fresh game with a fixed seed, for reproducible runs.
    pub fn with_seed(seed: u64) -> Self {
        Self::from_state(
            GameState::new(),
            EngineConfig::default(),
            StdRng::seed_from_u64(seed),
        )
    }

    /// Assemble an engine around existing state.
    pub const fn from_state(state: GameState, config: EngineConfig, rng: StdRng) -> Self {
        Self {
            state,
            config,
            rng,
            tick_in_progress: false,
        }
    }

    /// Read access to the full game state.
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    /// The active tuning configuration.
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    // -----------------------------------------------------------------------
    // Recruitment
    // -----------------------------------------------------------------------

    /// Replace the recruitment pool with `count` fresh candidates.
    pub fn generate_pool(&mut self, count: usize) -> Outcome {
        self.state.pool =
            recruitment::generate_pool(&mut self.rng, &self.config.lifecycle, count);
        Outcome::new(format!("{count} candidates lined up outside HR."))
    }

    /// Stacked recruitment discount percent, capped.
    fn recruit_discount_pct(&self) -> u32 {
        self.state
            .modifiers
            .iter()
            .fold(0_u32, |acc, m| match m.kind {
                ModifierKind::RecruitmentDiscount { pct } => acc.saturating_add(pct),
                _ => acc,
            })
            .min(RECRUIT_DISCOUNT_CAP)
    }

    /// Hire a candidate from the pool: spend the signing cost, move the
    /// daemon onto the active roster.
    pub fn recruit(&mut self, candidate_id: DaemonId) -> Result<Outcome, EngineError> {
        let index = self
            .state
            .pool
            .iter()
            .position(|c| c.daemon.id == candidate_id)
            .ok_or(RosterError::CandidateNotFound(candidate_id))?;

        let discount = self.recruit_discount_pct();
        let base_cost = self
            .state
            .pool
            .get(index)
            .map_or(0, |c| c.cost);
        let cost = rooms::discounted_cost(&ResourceCost::credits(base_cost), discount);

        if !self.state.ledger.spend(&cost, self.state.day, "RECRUIT") {
            return Err(EngineError::InsufficientResources { cost });
        }

        let mut candidate = self.state.pool.remove(index);
        candidate.daemon.active = true;
        candidate.daemon.recruited_day = self.state.day;
        let name = candidate.daemon.name.clone();
        info!(daemon = %name, cost = cost.credits, "recruited");
        self.state.daemons.insert(candidate.daemon.id, candidate.daemon);

        Ok(Outcome::new(format!(
            "{name} signed for {} credits.",
            cost.credits
        )))
    }

    // -----------------------------------------------------------------------
    // Missions
    // -----------------------------------------------------------------------

    /// Deploy a team against a planet.
    pub fn resolve_mission(
        &mut self,
        team: &[DaemonId],
        planet: PlanetId,
        kind: MissionKind,
    ) -> Result<MissionReport, EngineError> {
        mission::resolve(
            &mut self.state,
            team,
            planet,
            kind,
            &self.config,
            &mut self.rng,
        )
    }

    // -----------------------------------------------------------------------
    // Events
    // -----------------------------------------------------------------------

    /// Force an event trigger, outside the daily tick's probability.
    pub fn trigger_event(&mut self) -> Option<TriggeredEvent> {
        events::trigger(&mut self.state, &self.config, &mut self.rng)
    }

    /// Resolve a surfaced event, picking an option for choice events.
    pub fn resolve_event(
        &mut self,
        key: &str,
        choice: Option<usize>,
    ) -> Result<Outcome, EngineError> {
        events::resolve(&mut self.state, key, choice, &self.config, &mut self.rng)
    }

    // -----------------------------------------------------------------------
    // Facilities & equipment
    // -----------------------------------------------------------------------

    /// Upgrade a room by one level, spending credits scaled to its level.
    pub fn upgrade_room(&mut self, kind: RoomKind) -> Result<Outcome, EngineError> {
        let level = self.state.room_level(kind);
        if level >= self.config.rooms.max_level {
            return Err(EngineError::RoomAtMaxLevel { kind, level });
        }
        let cost = rooms::upgrade_cost(level, &self.config.rooms);
        if !self
            .state
            .ledger
            .spend(&cost, self.state.day, "ROOM_UPGRADE")
        {
            return Err(EngineError::InsufficientResources { cost });
        }
        let new_level = level.saturating_add(1);
        if let Some(room) = self.state.rooms.get_mut(&kind) {
            room.level = new_level;
        }
        Ok(Outcome::new(format!("{kind:?} upgraded to level {new_level}.")))
    }

    /// Forge equipment from a template, spending the workshop-discounted
    /// cost atomically with the craft.
    pub fn craft_equipment(&mut self, template_key: &str) -> Result<EquipmentId, EngineError> {
        let template = equipment::template_for(template_key)
            .ok_or_else(|| RosterError::UnknownTemplate(String::from(template_key)))?;

        let discount = rooms::workshop_discount_pct(&self.state, &self.config.rooms);
        let cost = rooms::discounted_cost(&template.cost, discount);
        if !self.state.ledger.spend(&cost, self.state.day, "CRAFT") {
            return Err(EngineError::InsufficientResources { cost });
        }

        let item = equipment::craft(template, self.state.day);
        let id = item.id;
        info!(item = %item.name, "equipment forged");
        self.state.equipment.insert(id, item);

        // Crafted on the whole roster's watch.
        for daemon in self.state.daemons.values_mut().filter(|d| d.active) {
            daemon.legacy.equipment_crafted = daemon.legacy.equipment_crafted.saturating_add(1);
        }

        Ok(id)
    }

    /// Repair an item, paying per point of missing durability.
    pub fn repair_equipment(&mut self, id: EquipmentId) -> Result<Outcome, EngineError> {
        // Validate against the item before spending anything.
        let (name, missing) = {
            let item = self
                .state
                .equipment
                .get(&id)
                .ok_or(RosterError::EquipmentNotFound(id))?;
            if item.destroyed {
                return Err(RosterError::EquipmentDestroyed(id).into());
            }
            if item.durability >= equipment::DURABILITY_MAX {
                return Err(RosterError::EquipmentFullyDurable(id).into());
            }
            (
                item.name.clone(),
                equipment::DURABILITY_MAX.saturating_sub(item.durability),
            )
        };

        let cost = ResourceCost::credits(
            u64::from(missing).saturating_mul(self.config.rooms.repair_cost_per_point),
        );
        if !self.state.ledger.spend(&cost, self.state.day, "REPAIR") {
            return Err(EngineError::InsufficientResources { cost });
        }

        let restored = self
            .state
            .equipment
            .get_mut(&id)
            .ok_or(RosterError::EquipmentNotFound(id))
            .and_then(|item| equipment::repair(item, &self.config.lifecycle))?;

        Ok(Outcome::new(format!(
            "{name} patched up: +{restored} durability for {} credits.",
            cost.credits
        )))
    }

    /// Assign an item to a daemon, with one-to-one exclusivity.
    pub fn assign_equipment(
        &mut self,
        equipment_id: EquipmentId,
        daemon_id: DaemonId,
    ) -> Result<Outcome, EngineError> {
        equipment::assign(
            &mut self.state.equipment,
            &mut self.state.daemons,
            equipment_id,
            daemon_id,
        )?;
        Ok(Outcome::new("Equipment assigned."))
    }

    // -----------------------------------------------------------------------
    // Time
    // -----------------------------------------------------------------------

    /// Run one daily tick. Rejects re-entrant invocation.
    pub fn tick(&mut self) -> Result<TickSummary, EngineError> {
        if self.tick_in_progress {
            return Err(EngineError::TickInProgress);
        }
        self.tick_in_progress = true;
        let summary = tick::run(&mut self.state, &self.config, &mut self.rng);
        self.tick_in_progress = false;
        Ok(summary)
    }

    // -----------------------------------------------------------------------
    // Progression & compliance
    // -----------------------------------------------------------------------

    /// Whether the next tier's requirements are currently met.
    pub fn evaluate_progression(&self) -> bool {
        progression::evaluate(&self.state)
    }

    /// Advance to the next tier if its requirements hold.
    pub fn promote(&mut self) -> Result<&'static TierDef, EngineError> {
        progression::promote(&mut self.state)
    }

    /// The tier the corporation currently holds.
    pub fn current_tier(&self) -> &'static TierDef {
        progression::current_tier(&self.state)
    }

    /// Mark a compliance task completed.
    pub fn complete_compliance_task(&mut self, task_id: TaskId) -> Result<Outcome, EngineError> {
        progression::complete_task(&mut self.state, task_id)
    }

    /// Issue a new compliance task with a deadline and penalty.
    pub fn issue_compliance_task(
        &mut self,
        name: &str,
        deadline_day: u64,
        penalty: CompliancePenalty,
    ) -> (TaskId, Outcome) {
        let id = TaskId::new();
        let outcome = progression::issue_task(
            &mut self.state,
            ComplianceTask {
                id,
                name: String::from(name),
                deadline_day,
                penalty,
                completed: false,
                penalty_applied: false,
            },
        );
        (id, outcome)
    }

    // -----------------------------------------------------------------------
    // Persistence boundary
    // -----------------------------------------------------------------------

    /// Capture a versioned snapshot of the whole state.
    pub fn snapshot(&self) -> GameSnapshot {
        snapshot::capture(&self.state)
    }

    /// Replace the state from a snapshot, migrating old versions forward.
    pub fn restore(&mut self, payload: GameSnapshot) -> Result<(), EngineError> {
        self.state = snapshot::restore(payload)?;
        Ok(())
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recruit_with_exact_balance_reaches_zero() {
        let mut engine = GameEngine::with_seed(5);
        let _ = engine.generate_pool(1);
        let (id, cost) = engine
            .state()
            .pool
            .first()
            .map(|c| (c.daemon.id, c.cost))
            .unwrap_or((DaemonId::new(), 0));

        // Pin the balance to exactly the signing cost.
        let pool = netherco_types::ResourcePool {
            credits: cost,
            souls: 0,
            favor: 0,
            brimstone: 0,
        };
        engine.state.ledger = netherco_ledger::ResourceLedger::with_pool(pool);

        assert!(engine.recruit(id).is_ok());
        assert_eq!(engine.state().ledger.pool().credits, 0);
        assert!(engine.state().daemons.contains_key(&id));
        assert!(engine.state().pool.is_empty());
    }

    #[test]
    fn recruit_without_funds_mutates_nothing() {
        let mut engine = GameEngine::with_seed(5);
        let _ = engine.generate_pool(1);
        let id = engine
            .state()
            .pool
            .first()
            .map(|c| c.daemon.id)
            .unwrap_or_default();

        engine.state.ledger = netherco_ledger::ResourceLedger::new();
        assert!(matches!(
            engine.recruit(id),
            Err(EngineError::InsufficientResources { .. })
        ));
        assert_eq!(engine.state().pool.len(), 1);
        assert!(engine.state().daemons.is_empty());
    }

    #[test]
    fn unknown_candidate_is_rejected() {
        let mut engine = GameEngine::with_seed(5);
        let result = engine.recruit(DaemonId::new());
        assert!(matches!(
            result,
            Err(EngineError::Roster(RosterError::CandidateNotFound(_)))
        ));
    }

    #[test]
    fn room_upgrade_spends_and_levels() {
        let mut engine = GameEngine::with_seed(5);
        let before = engine.state().ledger.pool().credits;
        let result = engine.upgrade_room(RoomKind::Infirmary);
        assert!(result.is_ok());
        assert_eq!(engine.state().room_level(RoomKind::Infirmary), 2);
        assert_eq!(
            engine.state().ledger.pool().credits,
            before.saturating_sub(200)
        );
    }

    #[test]
    fn craft_spends_discounted_cost() {
        let mut engine = GameEngine::with_seed(5);
        let before = *engine.state().ledger.pool();
        let crafted = engine.craft_equipment("shadow_cloak");
        assert!(crafted.is_ok());
        // Level-1 workshop: 10% off 120 credits and 4 brimstone.
        assert_eq!(
            engine.state().ledger.pool().credits,
            before.credits.saturating_sub(108)
        );
        assert_eq!(
            engine.state().ledger.pool().brimstone,
            before.brimstone.saturating_sub(3)
        );
    }

    #[test]
    fn room_upgrade_works_after_restoring_a_roomless_save() {
        let mut engine = GameEngine::with_seed(5);
        let mut payload = engine.snapshot();
        payload.state.rooms.clear();
        assert!(engine.restore(payload).is_ok());

        let before = engine.state().ledger.pool().credits;
        let result = engine.upgrade_room(RoomKind::Infirmary);
        assert!(result.is_ok());
        assert_eq!(engine.state().room_level(RoomKind::Infirmary), 2);
        assert_eq!(
            engine.state().ledger.pool().credits,
            before.saturating_sub(200)
        );
    }

    #[test]
    fn tick_guard_resets_after_completion() {
        let mut engine = GameEngine::with_seed(5);
        assert!(engine.tick().is_ok());
        assert!(engine.tick().is_ok());
    }
}

//! Configurable parameters for the engine.
//!
//! [`EngineConfig`] bundles the lifecycle tuning from `netherco-roster`
//! with the mission chance pipeline, room economics, and event trigger
//! rate. All integer math: percentage weights are expressed as numerator
//! over a fixed denominator of 100.

use netherco_roster::LifecycleConfig;

/// Tuning for the mission success chance pipeline and damage rolls.
#[derive(Debug, Clone)]
pub struct MissionConfig {
    /// Starting success chance before bonuses and penalties.
    pub base_chance: i64,
    /// Bonus for fielding the specialization favored by the target tier.
    pub composition_bonus: i64,
    /// Health weight numerator over 100: chance points per point of
    /// average health above 50.
    pub health_weight_pct: i64,
    /// Morale weight numerator over 100. Lower than the health weight.
    pub morale_weight_pct: i64,
    /// Chance points per team member holding assigned equipment.
    pub equipment_bonus_per_member: i64,
    /// Chance penalty for medium targets.
    pub medium_penalty: i64,
    /// Chance penalty for hard targets.
    pub hard_penalty: i64,
    /// Lower clamp: missions never fall below this chance.
    pub chance_min: i64,
    /// Upper clamp: missions never exceed this chance.
    pub chance_max: i64,
    /// Minimum health required of every team member at deployment.
    pub health_floor: u32,
    /// Failure reward scaling, percent of the full bundle.
    pub failure_reward_pct: u64,
    /// Minimum base health loss per participant.
    pub health_loss_min: u32,
    /// Maximum base health loss per participant.
    pub health_loss_max: u32,
    /// Minimum base morale loss per participant.
    pub morale_loss_min: u32,
    /// Maximum base morale loss per participant.
    pub morale_loss_max: u32,
    /// Minimum lifespan days lost per participant.
    pub lifespan_loss_min: u32,
    /// Maximum lifespan days lost per participant.
    pub lifespan_loss_max: u32,
    /// Damage multiplier percent against easy targets.
    pub easy_damage_pct: u32,
    /// Damage multiplier percent against medium targets.
    pub medium_damage_pct: u32,
    /// Damage multiplier percent against hard targets.
    pub hard_damage_pct: u32,
    /// Health below which a participant counts as wounded.
    pub wounded_threshold: u32,
    /// Extra damage percentage taken by wounded participants.
    pub wounded_damage_pct: u32,
}

impl Default for MissionConfig {
    fn default() -> Self {
        Self {
            base_chance: 50,
            composition_bonus: 20,
            health_weight_pct: 12,
            morale_weight_pct: 6,
            equipment_bonus_per_member: 10,
            medium_penalty: 15,
            hard_penalty: 30,
            chance_min: 10,
            chance_max: 90,
            health_floor: 25,
            failure_reward_pct: 30,
            health_loss_min: 5,
            health_loss_max: 15,
            morale_loss_min: 3,
            morale_loss_max: 10,
            lifespan_loss_min: 1,
            lifespan_loss_max: 3,
            easy_damage_pct: 100,
            medium_damage_pct: 125,
            hard_damage_pct: 150,
            wounded_threshold: 50,
            wounded_damage_pct: 125,
        }
    }
}

/// Tuning for the office facility rooms.
#[derive(Debug, Clone)]
pub struct RoomConfig {
    /// Credits for the first upgrade; later upgrades scale with level.
    pub upgrade_base_cost: u64,
    /// Maximum room level.
    pub max_level: u32,
    /// Morale restored per break room level per day.
    pub morale_per_level: u32,
    /// Health restored per infirmary level per day.
    pub health_per_level: u32,
    /// Crafting discount percent per workshop level.
    pub discount_pct_per_level: u32,
    /// Cap on the total workshop discount percent.
    pub discount_pct_cap: u32,
    /// Credits charged per point of missing durability when repairing.
    pub repair_cost_per_point: u64,
}

impl Default for RoomConfig {
    fn default() -> Self {
        Self {
            upgrade_base_cost: 200,
            max_level: 5,
            morale_per_level: 2,
            health_per_level: 2,
            discount_pct_per_level: 10,
            discount_pct_cap: 50,
            repair_cost_per_point: 2,
        }
    }
}

/// Top-level engine tuning.
#[derive(Debug, Clone, Default)]
pub struct EngineConfig {
    /// Lifecycle tuning threaded through all roster operations.
    pub lifecycle: LifecycleConfig,
    /// Mission chance and damage tuning.
    pub mission: MissionConfig,
    /// Room economics.
    pub rooms: RoomConfig,
    /// Event tuning.
    pub events: EventConfig,
}

/// Tuning for the corporate event engine.
#[derive(Debug, Clone)]
pub struct EventConfig {
    /// Percent chance per daily tick that an event triggers.
    pub trigger_chance_pct: u32,
    /// Durability restored by a random equipment upgrade effect.
    pub random_upgrade_durability: u32,
}

impl Default for EventConfig {
    fn default() -> Self {
        Self {
            trigger_chance_pct: 15,
            random_upgrade_durability: 10,
        }
    }
}

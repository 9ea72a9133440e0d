//! Configurable parameters for the daemon lifecycle.
//!
//! All tuning constants live here with documented defaults rather than as
//! magic numbers at call sites. The engine embeds one [`LifecycleConfig`]
//! and threads it through every lifecycle operation.

/// Tuning parameters for recruitment, aging, succession, and inheritance.
#[derive(Debug, Clone)]
pub struct LifecycleConfig {
    // --- Recruitment pool ---
    /// Minimum starting health for a pool candidate.
    pub recruit_health_min: u32,
    /// Maximum starting health for a pool candidate.
    pub recruit_health_max: u32,
    /// Minimum starting morale for a pool candidate.
    pub recruit_morale_min: u32,
    /// Maximum starting morale for a pool candidate.
    pub recruit_morale_max: u32,
    /// Minimum starting lifespan in days.
    pub recruit_lifespan_min: u32,
    /// Maximum starting lifespan in days.
    pub recruit_lifespan_max: u32,
    /// Quirks rolled per fresh candidate (always distinct).
    pub quirks_per_recruit: usize,
    /// Minimum signing cost in credits.
    pub recruit_cost_min: u64,
    /// Maximum signing cost in credits.
    pub recruit_cost_max: u64,

    // --- Aging ---
    /// Lifespan days lost per daily tick before modifiers.
    pub base_aging_days: u32,
    /// In-game days per year, for the years-served legacy counter.
    pub days_per_year: u32,

    // --- Death & succession ---
    /// Successful missions required for a legendary memorial.
    pub veteran_threshold: u32,
    /// Succession qualifies if successful missions reach this count.
    pub succession_min_missions: u32,
    /// Succession qualifies if conquered planets reach this count.
    pub succession_min_planets: u32,
    /// Succession qualifies if the deceased's generation reaches this.
    pub succession_min_generation: u32,
    /// Percent chance a successor gains one extra inherited trait.
    pub successor_trait_chance_pct: u32,
    /// Parent successful-mission count required for the trait roll.
    pub successor_trait_min_missions: u32,
    /// Base starting health for a successor before the generation bonus.
    pub successor_health_base: u32,
    /// Base starting morale for a successor before the generation bonus.
    pub successor_morale_base: u32,
    /// Base starting lifespan for a successor before the generation bonus.
    pub successor_lifespan_base: u32,
    /// Stat points added per parent generation.
    pub successor_per_generation_bonus: u32,
    /// Cap on successor starting health and morale.
    pub successor_stat_cap: u32,
    /// Cap on successor starting lifespan.
    pub successor_lifespan_cap: u32,

    // --- Equipment inheritance ---
    /// Durability restored when equipment is inherited.
    pub inherit_durability_bonus: u32,
    /// Permanent legacy bonus gained per inheritance.
    pub inherit_legacy_bonus: u32,
    /// Durability restored by one repair action.
    pub repair_increment: u32,
}

impl Default for LifecycleConfig {
    /// Defaults tuned for a 35--60 day daemon working life.
    fn default() -> Self {
        Self {
            recruit_health_min: 70,
            recruit_health_max: 100,
            recruit_morale_min: 60,
            recruit_morale_max: 100,
            recruit_lifespan_min: 35,
            recruit_lifespan_max: 60,
            quirks_per_recruit: 2,
            recruit_cost_min: 80,
            recruit_cost_max: 150,
            base_aging_days: 1,
            days_per_year: 360,
            veteran_threshold: 5,
            succession_min_missions: 3,
            succession_min_planets: 1,
            succession_min_generation: 2,
            successor_trait_chance_pct: 30,
            successor_trait_min_missions: 5,
            successor_health_base: 70,
            successor_morale_base: 60,
            successor_lifespan_base: 40,
            successor_per_generation_bonus: 5,
            successor_stat_cap: 95,
            successor_lifespan_cap: 70,
            inherit_durability_bonus: 20,
            inherit_legacy_bonus: 5,
            repair_increment: 25,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_bounds_are_ordered() {
        let config = LifecycleConfig::default();
        assert!(config.recruit_health_min <= config.recruit_health_max);
        assert!(config.recruit_morale_min <= config.recruit_morale_max);
        assert!(config.recruit_lifespan_min <= config.recruit_lifespan_max);
        assert!(config.recruit_cost_min <= config.recruit_cost_max);
    }

    #[test]
    fn default_succession_thresholds_match_rules() {
        let config = LifecycleConfig::default();
        assert_eq!(config.succession_min_missions, 3);
        assert_eq!(config.succession_min_planets, 1);
        assert_eq!(config.succession_min_generation, 2);
        assert_eq!(config.successor_trait_chance_pct, 30);
    }
}

//! Successor creation for qualifying bloodlines.
//!
//! When a qualifying daemon dies, its bloodline produces a descendant:
//! generation parent + 1, a generation-scaled (and capped) stat floor,
//! inherited bloodline, specialization, and traits, and a chance to gain
//! one new inherited trait when the parent was a proven veteran.

use chrono::Utc;
use rand::Rng;
use tracing::info;

use netherco_types::{Daemon, DaemonId, LegacyCounters, Story, StoryCategory};

use crate::config::LifecycleConfig;
use crate::quirks;
use crate::recruitment;

/// A created successor plus the succession story for the archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Succession {
    /// The new daemon, active and ready for the roster.
    pub successor: Daemon,
    /// The archive story recording the succession.
    pub story: Story,
}

/// Starting stat from a generation-scaled floor: `base + generation * bonus`,
/// capped.
const fn scaled_floor(base: u32, generation: u32, bonus: u32, cap: u32) -> u32 {
    let scaled = base.saturating_add(generation.saturating_mul(bonus));
    if scaled > cap { cap } else { scaled }
}

/// Create a successor for a deceased, qualifying daemon.
///
/// The successor joins the active roster immediately with fresh quirks.
/// The parent's inherited traits carry over; with the configured chance
/// (gated on the parent having proven itself), one new trait from the
/// catalog is added, never duplicating a held trait.
pub fn create_successor(
    parent: &Daemon,
    day: u64,
    config: &LifecycleConfig,
    rng: &mut impl Rng,
) -> Succession {
    let generation = parent.generation.saturating_add(1);

    let mut inherited_traits = parent.inherited_traits.clone();
    if parent.legacy.successful_missions >= config.successor_trait_min_missions
        && rng.random_range(0..100) < config.successor_trait_chance_pct
        && let Some(gained) = quirks::roll_new_trait(rng, &inherited_traits)
    {
        inherited_traits.push(gained);
    }

    let given = recruitment::random_given_name(rng);
    let name = format!("{given} {}", parent.bloodline);

    let successor = Daemon {
        id: DaemonId::new(),
        name: name.clone(),
        specialization: parent.specialization,
        health: scaled_floor(
            config.successor_health_base,
            parent.generation,
            config.successor_per_generation_bonus,
            config.successor_stat_cap,
        ),
        morale: scaled_floor(
            config.successor_morale_base,
            parent.generation,
            config.successor_per_generation_bonus,
            config.successor_stat_cap,
        ),
        lifespan_days: scaled_floor(
            config.successor_lifespan_base,
            parent.generation,
            config.successor_per_generation_bonus,
            config.successor_lifespan_cap,
        ),
        quirks: quirks::roll_quirks(rng, config.quirks_per_recruit),
        active: true,
        generation,
        bloodline: parent.bloodline.clone(),
        mentor: Some(parent.id),
        inherited_traits,
        legacy: LegacyCounters::default(),
        equipment: None,
        recruited_day: day,
    };

    info!(
        bloodline = %parent.bloodline,
        generation,
        "succession: {} steps into the role left by {}",
        successor.name,
        parent.name
    );

    let story = Story {
        title: format!("{name} Takes Up the Mantle"),
        description: format!(
            "Generation {generation} of bloodline {}: {} inherits the desk, \
             the grudges, and the unfinished quarterly targets of {}.",
            parent.bloodline, name, parent.name
        ),
        category: StoryCategory::Succession,
        day,
        timestamp: Utc::now(),
    };

    Succession { successor, story }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use netherco_types::Specialization;

    use super::*;

    fn parent() -> Daemon {
        Daemon {
            id: DaemonId::new(),
            name: String::from("Malphas Ashfall"),
            specialization: Specialization::Infiltration,
            health: 0,
            morale: 0,
            lifespan_days: 0,
            quirks: Vec::new(),
            active: false,
            generation: 1,
            bloodline: String::from("Ashfall"),
            mentor: None,
            inherited_traits: vec![String::from("Iron Will")],
            legacy: LegacyCounters {
                successful_missions: 5,
                ..LegacyCounters::default()
            },
            equipment: None,
            recruited_day: 0,
        }
    }

    #[test]
    fn successor_generation_increments() {
        let mut rng = StdRng::seed_from_u64(1);
        let config = LifecycleConfig::default();
        let result = create_successor(&parent(), 50, &config, &mut rng);
        assert_eq!(result.successor.generation, 2);
        assert!(result.successor.active);
        assert_eq!(result.successor.bloodline, "Ashfall");
        assert_eq!(result.successor.specialization, Specialization::Infiltration);
    }

    #[test]
    fn successor_keeps_parent_traits() {
        let mut rng = StdRng::seed_from_u64(1);
        let config = LifecycleConfig::default();
        let result = create_successor(&parent(), 50, &config, &mut rng);
        assert!(
            result
                .successor
                .inherited_traits
                .iter()
                .any(|t| t == "Iron Will")
        );
    }

    #[test]
    fn successor_mentor_points_at_parent() {
        let mut rng = StdRng::seed_from_u64(1);
        let config = LifecycleConfig::default();
        let p = parent();
        let result = create_successor(&p, 50, &config, &mut rng);
        assert_eq!(result.successor.mentor, Some(p.id));
    }

    #[test]
    fn generation_scaled_floor_is_capped() {
        let mut rng = StdRng::seed_from_u64(1);
        let config = LifecycleConfig::default();
        let mut p = parent();
        p.generation = 40; // absurdly deep lineage
        let result = create_successor(&p, 50, &config, &mut rng);
        assert_eq!(result.successor.health, config.successor_stat_cap);
        assert_eq!(result.successor.morale, config.successor_stat_cap);
        assert_eq!(result.successor.lifespan_days, config.successor_lifespan_cap);
    }

    #[test]
    fn first_generation_floor_uses_one_bonus_step() {
        let mut rng = StdRng::seed_from_u64(1);
        let config = LifecycleConfig::default();
        let result = create_successor(&parent(), 50, &config, &mut rng);
        // base 70 + 1 generation * 5 = 75
        assert_eq!(result.successor.health, 75);
        assert_eq!(result.successor.morale, 65);
        assert_eq!(result.successor.lifespan_days, 45);
    }

    #[test]
    fn trait_gain_rate_matches_thirty_percent() {
        let config = LifecycleConfig::default();
        let mut gained = 0_u32;
        let runs = 1_000_u32;
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..runs {
            let result = create_successor(&parent(), 50, &config, &mut rng);
            if result.successor.inherited_traits.len() > 1 {
                gained = gained.saturating_add(1);
            }
        }
        // Expected 300 of 1000; accept a generous band around it.
        assert!((240..=360).contains(&gained), "gained {gained} of {runs}");
    }

    #[test]
    fn no_trait_roll_for_unproven_parent() {
        let config = LifecycleConfig::default();
        let mut p = parent();
        p.legacy.successful_missions = 4; // below the gate
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let result = create_successor(&p, 50, &config, &mut rng);
            assert_eq!(result.successor.inherited_traits.len(), 1);
        }
    }

    #[test]
    fn succession_story_is_recorded() {
        let mut rng = StdRng::seed_from_u64(1);
        let config = LifecycleConfig::default();
        let result = create_successor(&parent(), 50, &config, &mut rng);
        assert_eq!(result.story.category, StoryCategory::Succession);
        assert_eq!(result.story.day, 50);
    }
}

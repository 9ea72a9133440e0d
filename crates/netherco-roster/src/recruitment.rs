//! Recruitment pool generation.
//!
//! Fresh candidates are rolled with randomized stats inside fixed bounds:
//! health 70--100, morale 60--100, lifespan 35--60 days, two distinct
//! quirks, a random specialization, a random bloodline, and a signing cost.
//! Candidates are generation 1 and inactive until recruited.

use rand::Rng;

use netherco_types::{Candidate, Daemon, DaemonId, Specialization};

use crate::config::LifecycleConfig;
use crate::quirks;

/// Given names drawn for fresh recruits.
const GIVEN_NAMES: &[&str] = &[
    "Azzik", "Belial", "Cindra", "Drex", "Ember", "Fulgor", "Grix", "Hexa", "Ixxus", "Jinx",
    "Korvash", "Lilit", "Malphas", "Nix", "Ozzra", "Pyre", "Quill", "Razh", "Soot", "Tenebra",
];

/// Bloodline surnames. A bloodline persists across generations and keys
/// the legacy archive.
const BLOODLINES: &[&str] = &[
    "Ashfall", "Brimlock", "Cinderhart", "Duskveil", "Embermaw", "Gravewick", "Hollowe",
    "Marrow", "Nettlesoot", "Vex",
];

/// Pick one entry from a static slice. Falls back to the first entry,
/// which exists for every catalog used here.
fn pick<'a>(rng: &mut impl Rng, catalog: &'a [&'a str]) -> &'a str {
    let idx = rng.random_range(0..catalog.len());
    catalog.get(idx).copied().unwrap_or("Nameless")
}

/// Draw a random given name, for recruits and successors alike.
pub fn random_given_name(rng: &mut impl Rng) -> &'static str {
    pick(rng, GIVEN_NAMES)
}

/// Generate one fresh pool candidate.
pub fn generate_candidate(rng: &mut impl Rng, config: &LifecycleConfig) -> Candidate {
    let given = pick(rng, GIVEN_NAMES);
    let bloodline = pick(rng, BLOODLINES);

    let spec_idx = rng.random_range(0..Specialization::ALL.len());
    let specialization = Specialization::ALL
        .get(spec_idx)
        .copied()
        .unwrap_or(Specialization::Infiltration);

    let daemon = Daemon {
        id: DaemonId::new(),
        name: format!("{given} {bloodline}"),
        specialization,
        health: rng.random_range(config.recruit_health_min..=config.recruit_health_max),
        morale: rng.random_range(config.recruit_morale_min..=config.recruit_morale_max),
        lifespan_days: rng.random_range(config.recruit_lifespan_min..=config.recruit_lifespan_max),
        quirks: quirks::roll_quirks(rng, config.quirks_per_recruit),
        active: false,
        generation: 1,
        bloodline: String::from(bloodline),
        mentor: None,
        inherited_traits: Vec::new(),
        legacy: netherco_types::LegacyCounters::default(),
        equipment: None,
        recruited_day: 0,
    };

    Candidate {
        daemon,
        cost: rng.random_range(config.recruit_cost_min..=config.recruit_cost_max),
    }
}

/// Generate `count` fresh pool candidates.
pub fn generate_pool(rng: &mut impl Rng, config: &LifecycleConfig, count: usize) -> Vec<Candidate> {
    (0..count).map(|_| generate_candidate(rng, config)).collect()
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn candidate_stats_are_within_bounds() {
        let mut rng = StdRng::seed_from_u64(3);
        let config = LifecycleConfig::default();
        for _ in 0..100 {
            let candidate = generate_candidate(&mut rng, &config);
            let d = &candidate.daemon;
            assert!((70..=100).contains(&d.health));
            assert!((60..=100).contains(&d.morale));
            assert!((35..=60).contains(&d.lifespan_days));
            assert!((80..=150).contains(&candidate.cost));
            assert_eq!(d.quirks.len(), 2);
            assert_eq!(d.generation, 1);
            assert!(!d.active);
            assert!(d.inherited_traits.is_empty());
        }
    }

    #[test]
    fn pool_has_requested_size() {
        let mut rng = StdRng::seed_from_u64(3);
        let config = LifecycleConfig::default();
        let pool = generate_pool(&mut rng, &config, 5);
        assert_eq!(pool.len(), 5);
    }

    #[test]
    fn candidate_name_carries_bloodline() {
        let mut rng = StdRng::seed_from_u64(3);
        let config = LifecycleConfig::default();
        let candidate = generate_candidate(&mut rng, &config);
        assert!(candidate.daemon.name.ends_with(&candidate.daemon.bloodline));
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        let config = LifecycleConfig::default();
        let mut a = StdRng::seed_from_u64(99);
        let mut b = StdRng::seed_from_u64(99);
        let first = generate_candidate(&mut a, &config);
        let second = generate_candidate(&mut b, &config);
        assert_eq!(first.daemon.name, second.daemon.name);
        assert_eq!(first.daemon.health, second.daemon.health);
        assert_eq!(first.cost, second.cost);
    }
}

//! The quirk catalog and quirk-effect resolution.
//!
//! Quirks are rolled at daemon creation and immutable afterwards. Each
//! quirk carries a machine-readable [`QuirkEffect`] tag; all rule code
//! resolves behavior by tag lookup, never by matching on display names.
//!
//! The inherited-trait catalog for successions also lives here.

use rand::Rng;

use netherco_types::{Quirk, QuirkEffect};

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

/// A static catalog entry from which concrete [`Quirk`] values are built.
#[derive(Debug, Clone, Copy)]
pub struct QuirkTemplate {
    /// Display name.
    pub name: &'static str,
    /// Effect tag.
    pub effect: QuirkEffect,
    /// Effect strength.
    pub magnitude: u32,
    /// Flavor text.
    pub description: &'static str,
}

/// The full quirk catalog.
pub const QUIRK_CATALOG: &[QuirkTemplate] = &[
    QuirkTemplate {
        name: "Asbestos Hide",
        effect: QuirkEffect::DamageResistance,
        magnitude: 30,
        description: "Thick dermal plating shrugs off a third of incoming harm.",
    },
    QuirkTemplate {
        name: "Brittle Horns",
        effect: QuirkEffect::DamageVulnerability,
        magnitude: 30,
        description: "Old fracture lines make every hit land harder.",
    },
    QuirkTemplate {
        name: "Overachiever",
        effect: QuirkEffect::MissionBonus,
        magnitude: 5,
        description: "Reads the briefing twice. Annoying, effective.",
    },
    QuirkTemplate {
        name: "Chronic Doubter",
        effect: QuirkEffect::MissionPenalty,
        magnitude: 5,
        description: "Second-guesses the plan at the worst moment.",
    },
    QuirkTemplate {
        name: "Sunny Disposition",
        effect: QuirkEffect::MoraleRecovery,
        magnitude: 3,
        description: "Inexplicably cheerful for a creature of the pit.",
    },
    QuirkTemplate {
        name: "Obsidian Grin",
        effect: QuirkEffect::Cosmetic,
        magnitude: 0,
        description: "Unsettles rivals across the negotiating table.",
    },
    QuirkTemplate {
        name: "Sulfur Allergy",
        effect: QuirkEffect::DamageVulnerability,
        magnitude: 15,
        description: "An embarrassing condition for a daemon.",
    },
    QuirkTemplate {
        name: "Tempered in Committee",
        effect: QuirkEffect::DamageResistance,
        magnitude: 15,
        description: "Survived a thousand status meetings; survives most things.",
    },
];

/// Inherited traits a successor may gain, accumulated across generations.
pub const TRAIT_CATALOG: &[&str] = &[
    "Iron Will",
    "Ledger Sense",
    "Void Whisperer",
    "Cold Negotiator",
    "Ancestral Grudge",
    "Patient Flame",
];

// ---------------------------------------------------------------------------
// Rolling
// ---------------------------------------------------------------------------

/// Roll `count` distinct quirks from the catalog.
///
/// Selection is without replacement; if `count` exceeds the catalog size
/// the whole catalog is returned.
pub fn roll_quirks(rng: &mut impl Rng, count: usize) -> Vec<Quirk> {
    let mut picked: Vec<usize> = Vec::new();
    let limit = count.min(QUIRK_CATALOG.len());
    while picked.len() < limit {
        let idx = rng.random_range(0..QUIRK_CATALOG.len());
        if !picked.contains(&idx) {
            picked.push(idx);
        }
    }

    picked
        .into_iter()
        .filter_map(|idx| QUIRK_CATALOG.get(idx))
        .map(|t| Quirk {
            name: String::from(t.name),
            effect: t.effect,
            magnitude: t.magnitude,
            description: String::from(t.description),
        })
        .collect()
}

/// Roll one inherited trait the holder does not already have.
///
/// Returns `None` if every catalog trait is already held.
pub fn roll_new_trait(rng: &mut impl Rng, held: &[String]) -> Option<String> {
    let available: Vec<&&str> = TRAIT_CATALOG
        .iter()
        .filter(|t| !held.iter().any(|h| h == **t))
        .collect();
    if available.is_empty() {
        return None;
    }
    let idx = rng.random_range(0..available.len());
    available.get(idx).map(|t| String::from(**t))
}

// ---------------------------------------------------------------------------
// Effect resolution
// ---------------------------------------------------------------------------

/// Combined mission-damage multiplier from a quirk list, in percent.
///
/// Starts at 100; each [`QuirkEffect::DamageResistance`] subtracts its
/// magnitude, each [`QuirkEffect::DamageVulnerability`] adds its magnitude.
/// Floored at 10 so no daemon is ever fully immune.
pub fn damage_modifier_pct(quirks: &[Quirk]) -> u32 {
    let mut pct: u32 = 100;
    for quirk in quirks {
        match quirk.effect {
            QuirkEffect::DamageResistance => pct = pct.saturating_sub(quirk.magnitude),
            QuirkEffect::DamageVulnerability => pct = pct.saturating_add(quirk.magnitude),
            QuirkEffect::MissionBonus
            | QuirkEffect::MissionPenalty
            | QuirkEffect::MoraleRecovery
            | QuirkEffect::Cosmetic => {}
        }
    }
    pct.max(10)
}

/// Net mission success-chance adjustment from a quirk list, in points.
pub fn chance_modifier(quirks: &[Quirk]) -> i32 {
    let mut total: i32 = 0;
    for quirk in quirks {
        let magnitude = i32::try_from(quirk.magnitude).unwrap_or(i32::MAX);
        match quirk.effect {
            QuirkEffect::MissionBonus => total = total.saturating_add(magnitude),
            QuirkEffect::MissionPenalty => total = total.saturating_sub(magnitude),
            QuirkEffect::DamageResistance
            | QuirkEffect::DamageVulnerability
            | QuirkEffect::MoraleRecovery
            | QuirkEffect::Cosmetic => {}
        }
    }
    total
}

/// Extra morale recovered per daily tick from a quirk list.
pub fn morale_recovery_bonus(quirks: &[Quirk]) -> u32 {
    quirks
        .iter()
        .filter(|q| q.effect == QuirkEffect::MoraleRecovery)
        .fold(0_u32, |acc, q| acc.saturating_add(q.magnitude))
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn quirk(effect: QuirkEffect, magnitude: u32) -> Quirk {
        Quirk {
            name: String::from("test"),
            effect,
            magnitude,
            description: String::new(),
        }
    }

    #[test]
    fn rolled_quirks_are_distinct() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let quirks = roll_quirks(&mut rng, 2);
            assert_eq!(quirks.len(), 2);
            assert_ne!(
                quirks.first().map(|q| q.name.clone()),
                quirks.last().map(|q| q.name.clone())
            );
        }
    }

    #[test]
    fn oversized_roll_is_capped_at_catalog() {
        let mut rng = StdRng::seed_from_u64(7);
        let quirks = roll_quirks(&mut rng, 100);
        assert_eq!(quirks.len(), QUIRK_CATALOG.len());
    }

    #[test]
    fn damage_modifier_combines_tags() {
        let quirks = vec![
            quirk(QuirkEffect::DamageResistance, 30),
            quirk(QuirkEffect::DamageVulnerability, 15),
        ];
        assert_eq!(damage_modifier_pct(&quirks), 85);
    }

    #[test]
    fn damage_modifier_floors_at_ten() {
        let quirks = vec![
            quirk(QuirkEffect::DamageResistance, 80),
            quirk(QuirkEffect::DamageResistance, 80),
        ];
        assert_eq!(damage_modifier_pct(&quirks), 10);
    }

    #[test]
    fn chance_modifier_is_signed() {
        let quirks = vec![
            quirk(QuirkEffect::MissionBonus, 5),
            quirk(QuirkEffect::MissionPenalty, 8),
        ];
        assert_eq!(chance_modifier(&quirks), -3);
    }

    #[test]
    fn new_trait_never_duplicates() {
        let mut rng = StdRng::seed_from_u64(11);
        let held: Vec<String> = TRAIT_CATALOG
            .iter()
            .take(TRAIT_CATALOG.len().saturating_sub(1))
            .map(|t| String::from(*t))
            .collect();
        for _ in 0..20 {
            let rolled = roll_new_trait(&mut rng, &held);
            assert_eq!(rolled.as_deref(), TRAIT_CATALOG.last().copied());
        }
    }

    #[test]
    fn no_trait_available_when_all_held() {
        let mut rng = StdRng::seed_from_u64(11);
        let held: Vec<String> = TRAIT_CATALOG.iter().map(|t| String::from(*t)).collect();
        assert!(roll_new_trait(&mut rng, &held).is_none());
    }
}

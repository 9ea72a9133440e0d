//! The bloodline legacy archive.
//!
//! One record per bloodline, keyed by name, created lazily on the first
//! story recorded under it. Records accumulate stories, mirror legacy
//! counter totals from member daemons, and unlock named legends when
//! totals cross fixed thresholds.

use std::collections::BTreeMap;

use tracing::info;

use netherco_types::{BloodlineRecord, LegacyCounters, Legend, Story};

// ---------------------------------------------------------------------------
// Legend thresholds
// ---------------------------------------------------------------------------

/// A legend unlock rule: name, bonus text, and the predicate over a
/// record's cumulative totals and generation.
struct LegendRule {
    name: &'static str,
    bonus: &'static str,
    unlocked: fn(&BloodlineRecord) -> bool,
}

const LEGEND_RULES: &[LegendRule] = &[
    LegendRule {
        name: "Dynasty of Ash",
        bonus: "Three generations of unbroken service. The name alone opens doors.",
        unlocked: |record| record.generation >= 3,
    },
    LegendRule {
        name: "Planetbreakers",
        bonus: "Five worlds brought under contract by one family.",
        unlocked: |record| record.totals.planets_conquered >= 5,
    },
    LegendRule {
        name: "The Long Ledger",
        bonus: "Twenty successful missions logged against a single surname.",
        unlocked: |record| record.totals.successful_missions >= 20,
    },
];

// ---------------------------------------------------------------------------
// Archive operations
// ---------------------------------------------------------------------------

/// Fetch or create the record for a bloodline.
///
/// A new record starts at the given generation with the given founder;
/// an existing record keeps its founder and ratchets its generation up.
fn record_entry<'a>(
    archive: &'a mut BTreeMap<String, BloodlineRecord>,
    bloodline: &str,
    founder: &str,
    generation: u32,
) -> &'a mut BloodlineRecord {
    let record = archive
        .entry(String::from(bloodline))
        .or_insert_with(|| BloodlineRecord {
            bloodline: String::from(bloodline),
            generation,
            founder: String::from(founder),
            totals: LegacyCounters::default(),
            stories: Vec::new(),
            legends: Vec::new(),
        });
    record.generation = record.generation.max(generation);
    record
}

/// Append a story to a bloodline's record, creating the record if the
/// bloodline has none yet.
pub fn record_story(
    archive: &mut BTreeMap<String, BloodlineRecord>,
    bloodline: &str,
    founder: &str,
    generation: u32,
    story: Story,
) {
    let record = record_entry(archive, bloodline, founder, generation);
    record.stories.push(story);
}

/// Fold a deceased daemon's legacy counters into its bloodline totals
/// and unlock any legends the new totals earn.
pub fn absorb_legacy(
    archive: &mut BTreeMap<String, BloodlineRecord>,
    bloodline: &str,
    founder: &str,
    generation: u32,
    counters: &LegacyCounters,
) {
    let record = record_entry(archive, bloodline, founder, generation);
    record.totals.successful_missions = record
        .totals
        .successful_missions
        .saturating_add(counters.successful_missions);
    record.totals.planets_conquered = record
        .totals
        .planets_conquered
        .saturating_add(counters.planets_conquered);
    record.totals.equipment_crafted = record
        .totals
        .equipment_crafted
        .saturating_add(counters.equipment_crafted);
    record.totals.years_served = record
        .totals
        .years_served
        .saturating_add(counters.years_served);

    unlock_legends(record);
}

/// Check every legend rule against a record and unlock the ones earned,
/// never duplicating an already-held legend.
fn unlock_legends(record: &mut BloodlineRecord) {
    for rule in LEGEND_RULES {
        let held = record.legends.iter().any(|l| l.name == rule.name);
        if !held && (rule.unlocked)(record) {
            info!(bloodline = %record.bloodline, legend = rule.name, "legend unlocked");
            record.legends.push(Legend {
                name: String::from(rule.name),
                bonus: String::from(rule.bonus),
            });
        }
    }
}

/// The deepest generation reached across every archived bloodline.
pub fn max_generation(archive: &BTreeMap<String, BloodlineRecord>) -> u32 {
    archive.values().map(|r| r.generation).max().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use netherco_types::StoryCategory;

    use super::*;

    fn story(day: u64) -> Story {
        Story {
            title: String::from("A Quiet Retirement"),
            description: String::from("Filed without incident."),
            category: StoryCategory::Tragic,
            day,
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn first_story_creates_the_record() {
        let mut archive = BTreeMap::new();
        record_story(&mut archive, "Ashfall", "Malphas Ashfall", 1, story(10));
        let record = archive.get("Ashfall");
        assert!(record.is_some_and(|r| r.stories.len() == 1));
        assert!(record.is_some_and(|r| r.founder == "Malphas Ashfall"));
    }

    #[test]
    fn generation_ratchets_up_never_down() {
        let mut archive = BTreeMap::new();
        record_story(&mut archive, "Ashfall", "Malphas Ashfall", 3, story(10));
        record_story(&mut archive, "Ashfall", "Malphas Ashfall", 2, story(20));
        assert!(archive.get("Ashfall").is_some_and(|r| r.generation == 3));
    }

    #[test]
    fn founder_is_fixed_at_creation() {
        let mut archive = BTreeMap::new();
        record_story(&mut archive, "Ashfall", "Malphas Ashfall", 1, story(10));
        record_story(&mut archive, "Ashfall", "Cindra Ashfall", 2, story(20));
        assert!(
            archive
                .get("Ashfall")
                .is_some_and(|r| r.founder == "Malphas Ashfall")
        );
    }

    #[test]
    fn totals_accumulate_across_members() {
        let mut archive = BTreeMap::new();
        let counters = LegacyCounters {
            successful_missions: 4,
            planets_conquered: 1,
            equipment_crafted: 2,
            years_served: 1,
        };
        absorb_legacy(&mut archive, "Vex", "Grix Vex", 1, &counters);
        absorb_legacy(&mut archive, "Vex", "Grix Vex", 2, &counters);
        let record = archive.get("Vex");
        assert!(record.is_some_and(|r| r.totals.successful_missions == 8));
        assert!(record.is_some_and(|r| r.totals.planets_conquered == 2));
    }

    #[test]
    fn dynasty_legend_unlocks_at_generation_three() {
        let mut archive = BTreeMap::new();
        let counters = LegacyCounters::default();
        absorb_legacy(&mut archive, "Vex", "Grix Vex", 2, &counters);
        assert!(archive.get("Vex").is_some_and(|r| r.legends.is_empty()));
        absorb_legacy(&mut archive, "Vex", "Grix Vex", 3, &counters);
        assert!(
            archive
                .get("Vex")
                .is_some_and(|r| r.legends.iter().any(|l| l.name == "Dynasty of Ash"))
        );
    }

    #[test]
    fn legends_never_duplicate() {
        let mut archive = BTreeMap::new();
        let counters = LegacyCounters {
            planets_conquered: 5,
            ..LegacyCounters::default()
        };
        absorb_legacy(&mut archive, "Vex", "Grix Vex", 1, &counters);
        absorb_legacy(&mut archive, "Vex", "Grix Vex", 1, &counters);
        let planetbreaker_count = archive
            .get("Vex")
            .map(|r| r.legends.iter().filter(|l| l.name == "Planetbreakers").count())
            .unwrap_or(0);
        assert_eq!(planetbreaker_count, 1);
    }

    #[test]
    fn max_generation_over_empty_archive_is_zero() {
        let archive = BTreeMap::new();
        assert_eq!(max_generation(&archive), 0);
    }

    #[test]
    fn max_generation_spans_bloodlines() {
        let mut archive = BTreeMap::new();
        record_story(&mut archive, "Ashfall", "Malphas Ashfall", 2, story(10));
        record_story(&mut archive, "Vex", "Grix Vex", 4, story(10));
        assert_eq!(max_generation(&archive), 4);
    }
}

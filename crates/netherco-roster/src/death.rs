//! Retirement (death) conditions and consequences for daemons.
//!
//! A daemon dies when its lifespan counter reaches zero. Retirement marks
//! the record inactive, finalizes the years-served legacy counter, records
//! a memorial story, releases held equipment, and reports whether the
//! bloodline qualifies for succession. The caller (the engine tick) applies
//! the consequences: equipment inheritance, successor creation, archive
//! updates.

use chrono::Utc;

use netherco_types::{Daemon, DaemonId, EquipmentId, Story, StoryCategory};

use crate::config::LifecycleConfig;

/// Whether a deceased daemon qualifies for a successor.
///
/// Any one of three independent conditions is sufficient (logical OR):
/// successful missions, planets conquered, or generation depth.
pub const fn succession_eligible(daemon: &Daemon, config: &LifecycleConfig) -> bool {
    daemon.legacy.successful_missions >= config.succession_min_missions
        || daemon.legacy.planets_conquered >= config.succession_min_planets
        || daemon.generation >= config.succession_min_generation
}

/// Memorial category: veterans are remembered as legendary, the rest as
/// tragic losses.
pub const fn memorial_category(daemon: &Daemon, config: &LifecycleConfig) -> StoryCategory {
    if daemon.legacy.successful_missions >= config.veteran_threshold {
        StoryCategory::Legendary
    } else {
        StoryCategory::Tragic
    }
}

/// Data emitted when a daemon retires, applied by the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetirementConsequences {
    /// The daemon that died.
    pub daemon_id: DaemonId,
    /// The bloodline to record the memorial under.
    pub bloodline: String,
    /// The memorial story for the legacy archive.
    pub memorial: Story,
    /// Whether a successor should be created.
    pub succession_eligible: bool,
    /// Equipment released by the death, due an inheritance bonus.
    pub released_equipment: Option<EquipmentId>,
}

/// Retire a daemon whose lifespan reached zero.
///
/// Marks the record inactive, finalizes `years_served`, clears the
/// equipment back-reference, and builds the memorial. The equipment item
/// itself is updated by the registry, not here.
pub fn retire(daemon: &mut Daemon, day: u64, config: &LifecycleConfig) -> RetirementConsequences {
    daemon.active = false;

    let served_days = day.saturating_sub(daemon.recruited_day);
    let years = served_days
        .checked_div(u64::from(config.days_per_year.max(1)))
        .unwrap_or(0);
    daemon.legacy.years_served = u32::try_from(years).unwrap_or(u32::MAX);

    let released_equipment = daemon.equipment.take();

    let category = memorial_category(daemon, config);
    let memorial = Story {
        title: format!("The Passing of {}", daemon.name),
        description: memorial_text(daemon, category),
        category,
        day,
        timestamp: Utc::now(),
    };

    RetirementConsequences {
        daemon_id: daemon.id,
        bloodline: daemon.bloodline.clone(),
        memorial,
        succession_eligible: succession_eligible(daemon, config),
        released_equipment,
    }
}

/// Memorial flavor text, varying with the category.
fn memorial_text(daemon: &Daemon, category: StoryCategory) -> String {
    match category {
        StoryCategory::Legendary => format!(
            "{} of bloodline {} retired a veteran of {} successful missions. \
             The break room observed a full minute of silence.",
            daemon.name, daemon.bloodline, daemon.legacy.successful_missions
        ),
        _ => format!(
            "{} of bloodline {} expired with {} successful missions on record. \
             The paperwork was filed the same day.",
            daemon.name, daemon.bloodline, daemon.legacy.successful_missions
        ),
    }
}

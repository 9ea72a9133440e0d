//! The corporate event engine: a static catalog of event definitions and
//! the interpreter that applies their effects.
//!
//! Effects are a closed enum, so the compiler enforces exhaustive handling
//! of every effect kind. An event's effect list is applied in order as one
//! batch; no partial application is externally observable because no
//! effect can fail. Every temporary modifier an event introduces carries
//! an explicit decay clock, enforced by the daily tick (day-clocked) or by
//! mission resolution (mission-clocked).

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use netherco_roster::{equipment, lifecycle};
use netherco_types::{
    ActiveModifier, ModifierClock, ModifierKind, Outcome, ResourceCost, ResourceDelta,
    Specialization,
};

use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::state::{EventRecord, GameState};

// ---------------------------------------------------------------------------
// Definitions
// ---------------------------------------------------------------------------

/// One effect an event applies, interpreted by its variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventEffect {
    /// Signed resource change, floored at zero per counter.
    Resources(ResourceDelta),
    /// Morale change applied to every active daemon.
    RosterMorale(i32),
    /// Durability change applied to every non-destroyed item.
    FleetDurability(i32),
    /// A temporary modifier with its decay clock.
    Modifier(ActiveModifier),
    /// One random non-destroyed item gains durability.
    RandomEquipmentUpgrade,
    /// One random active daemon is forced into a new specialization.
    ReassignSpecialization,
}

/// A labeled option of a choice event.
#[derive(Debug, Clone, Copy)]
pub struct EventOption {
    /// Label shown to the player.
    pub label: &'static str,
    /// Effects applied when this option is chosen.
    pub effects: &'static [EventEffect],
}

/// How an event resolves.
#[derive(Debug, Clone, Copy)]
pub enum EventKind {
    /// Applies its effect list the moment it triggers.
    Automatic(&'static [EventEffect]),
    /// Surfaces two or more options; the player picks one.
    Choice(&'static [EventOption]),
}

/// A static corporate event definition.
#[derive(Debug, Clone, Copy)]
pub struct EventDef {
    /// Stable key; runtime records are stored under it.
    pub key: &'static str,
    /// Headline shown to the player.
    pub title: &'static str,
    /// Event body text.
    pub description: &'static str,
    /// Resolution mode and effects.
    pub kind: EventKind,
    /// Resource gate: the event only surfaces while this is affordable.
    pub requirements: ResourceCost,
}

const NO_REQUIREMENTS: ResourceCost = ResourceCost {
    credits: 0,
    souls: 0,
    favor: 0,
    brimstone: 0,
};

/// The event catalog. Each event fires at most once per game.
pub const EVENT_CATALOG: &[EventDef] = &[
    EventDef {
        key: "surprise_audit",
        title: "Surprise Audit",
        description: "Head Office auditors materialize in the lobby, unannounced and unamused.",
        kind: EventKind::Automatic(&[
            EventEffect::Resources(ResourceDelta {
                credits: -50,
                souls: 0,
                favor: 0,
                brimstone: 0,
            }),
            EventEffect::RosterMorale(-5),
        ]),
        requirements: NO_REQUIREMENTS,
    },
    EventDef {
        key: "brimstone_windfall",
        title: "Brimstone Windfall",
        description: "A mislabeled freight container turns out to be full of grade-A brimstone.",
        kind: EventKind::Automatic(&[EventEffect::Resources(ResourceDelta {
            credits: 0,
            souls: 0,
            favor: 0,
            brimstone: 40,
        })]),
        requirements: NO_REQUIREMENTS,
    },
    EventDef {
        key: "forge_sprites",
        title: "Forge Sprites",
        description: "Helpful sprites infest the workshop overnight and polish everything.",
        kind: EventKind::Automatic(&[
            EventEffect::RandomEquipmentUpgrade,
            EventEffect::FleetDurability(5),
        ]),
        requirements: NO_REQUIREMENTS,
    },
    EventDef {
        key: "hiring_freeze_lifted",
        title: "Hiring Freeze Lifted",
        description: "Head Office forgot why the freeze existed. Recruiters move fast.",
        kind: EventKind::Automatic(&[EventEffect::Modifier(ActiveModifier {
            kind: ModifierKind::RecruitmentDiscount { pct: 25 },
            clock: ModifierClock::Days(7),
        })]),
        requirements: NO_REQUIREMENTS,
    },
    EventDef {
        key: "cosmic_hr_review",
        title: "Cosmic HR Review",
        description: "HR decides someone's talents are needed elsewhere. Nobody is consulted.",
        kind: EventKind::Automatic(&[
            EventEffect::ReassignSpecialization,
            EventEffect::RosterMorale(-2),
        ]),
        requirements: NO_REQUIREMENTS,
    },
    EventDef {
        key: "motivational_seminar",
        title: "Motivational Seminar",
        description: "A consultant offers to teach the roster about synergy. For a fee.",
        kind: EventKind::Choice(&[
            EventOption {
                label: "Fund the seminar",
                effects: &[
                    EventEffect::Resources(ResourceDelta {
                        credits: -100,
                        souls: 0,
                        favor: 0,
                        brimstone: 0,
                    }),
                    EventEffect::RosterMorale(10),
                ],
            },
            EventOption {
                label: "Cancel it",
                effects: &[EventEffect::RosterMorale(-3)],
            },
        ]),
        requirements: NO_REQUIREMENTS,
    },
    EventDef {
        key: "head_office_grant",
        title: "Head Office Grant",
        description: "A development grant is on offer, with the usual strings attached.",
        kind: EventKind::Choice(&[
            EventOption {
                label: "Accept the strings",
                effects: &[
                    EventEffect::Resources(ResourceDelta {
                        credits: 0,
                        souls: 0,
                        favor: -5,
                        brimstone: 0,
                    }),
                    EventEffect::Modifier(ActiveModifier {
                        kind: ModifierKind::PassiveIncome { per_day: 15 },
                        clock: ModifierClock::Days(10),
                    }),
                ],
            },
            EventOption {
                label: "Decline politely",
                effects: &[EventEffect::Resources(ResourceDelta {
                    credits: 0,
                    souls: 0,
                    favor: 2,
                    brimstone: 0,
                })],
            },
        ]),
        requirements: ResourceCost {
            credits: 0,
            souls: 0,
            favor: 5,
            brimstone: 0,
        },
    },
    EventDef {
        key: "overtime_mandate",
        title: "Overtime Mandate",
        description: "Head Office wants quarterly numbers moved up a quarter.",
        kind: EventKind::Choice(&[
            EventOption {
                label: "Push production",
                effects: &[
                    EventEffect::Modifier(ActiveModifier {
                        kind: ModifierKind::ProductivityBonus { pct: 10 },
                        clock: ModifierClock::Missions(3),
                    }),
                    EventEffect::RosterMorale(-5),
                ],
            },
            EventOption {
                label: "Refuse",
                effects: &[
                    EventEffect::Resources(ResourceDelta {
                        credits: 0,
                        souls: 0,
                        favor: -3,
                        brimstone: 0,
                    }),
                    EventEffect::Modifier(ActiveModifier {
                        kind: ModifierKind::AcceleratedAging { extra_days: 1 },
                        clock: ModifierClock::Days(5),
                    }),
                ],
            },
        ]),
        requirements: NO_REQUIREMENTS,
    },
];

/// Look up an event definition by key.
pub fn event_for(key: &str) -> Option<&'static EventDef> {
    EVENT_CATALOG.iter().find(|e| e.key == key)
}

// ---------------------------------------------------------------------------
// Triggering & resolution
// ---------------------------------------------------------------------------

/// A surfaced event, returned to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriggeredEvent {
    /// The event's stable key.
    pub key: String,
    /// Headline.
    pub title: String,
    /// Body text.
    pub description: String,
    /// Whether `resolve` must be called with an option index.
    pub requires_choice: bool,
    /// Option labels, empty for automatic events.
    pub options: Vec<String>,
    /// Structured outcome for the notification boundary.
    pub outcome: Outcome,
}

/// Pick one eligible event at random and surface it.
///
/// Eligible events have no runtime record yet (never surfaced) and an
/// affordable requirement gate. Automatic events apply immediately; choice
/// events wait for [`resolve`]. Returns `None` when nothing is eligible.
pub fn trigger(
    state: &mut GameState,
    config: &EngineConfig,
    rng: &mut impl Rng,
) -> Option<TriggeredEvent> {
    let eligible: Vec<&'static EventDef> = EVENT_CATALOG
        .iter()
        .filter(|def| !state.events.contains_key(def.key))
        .filter(|def| state.ledger.can_afford(&def.requirements))
        .collect();
    if eligible.is_empty() {
        return None;
    }

    let idx = rng.random_range(0..eligible.len());
    let def = eligible.get(idx).copied()?;

    match def.kind {
        EventKind::Automatic(effects) => {
            apply_effects(state, effects, config, rng);
            state.events.insert(
                String::from(def.key),
                EventRecord {
                    resolved: true,
                    chosen_option: None,
                },
            );
            info!(event = def.key, "automatic event applied");
            Some(TriggeredEvent {
                key: String::from(def.key),
                title: String::from(def.title),
                description: String::from(def.description),
                requires_choice: false,
                options: Vec::new(),
                outcome: Outcome::new(format!("{}: {}", def.title, def.description)),
            })
        }
        EventKind::Choice(options) => {
            state
                .events
                .insert(String::from(def.key), EventRecord::default());
            info!(event = def.key, "choice event surfaced");
            Some(TriggeredEvent {
                key: String::from(def.key),
                title: String::from(def.title),
                description: String::from(def.description),
                requires_choice: true,
                options: options.iter().map(|o| String::from(o.label)).collect(),
                outcome: Outcome::new(format!("{} awaits a decision.", def.title)),
            })
        }
    }
}

/// Resolve a surfaced event.
///
/// Only events that [`trigger`] has surfaced carry a record and can be
/// resolved; anything else is rejected without mutation. Choice events
/// require an option index; the chosen option's effect list is applied in
/// order as one batch. Automatic events are applied by [`trigger`] and can
/// only reach here as an already-resolved error.
pub fn resolve(
    state: &mut GameState,
    key: &str,
    choice: Option<usize>,
    config: &EngineConfig,
    rng: &mut impl Rng,
) -> Result<Outcome, EngineError> {
    let def = event_for(key).ok_or_else(|| EngineError::EventNotFound(String::from(key)))?;

    let record = state
        .events
        .get(key)
        .cloned()
        .ok_or_else(|| EngineError::EventNotPending(String::from(key)))?;
    if record.resolved {
        return Err(EngineError::EventAlreadyResolved(String::from(key)));
    }
    if !state.ledger.can_afford(&def.requirements) {
        return Err(EngineError::EventRequirementsNotMet(String::from(key)));
    }

    match def.kind {
        EventKind::Automatic(effects) => {
            if let Some(idx) = choice {
                return Err(EngineError::InvalidChoice {
                    event: String::from(key),
                    choice: idx,
                });
            }
            apply_effects(state, effects, config, rng);
            state.events.insert(
                String::from(key),
                EventRecord {
                    resolved: true,
                    chosen_option: None,
                },
            );
            Ok(Outcome::new(format!("{} resolved.", def.title)))
        }
        EventKind::Choice(options) => {
            let idx = choice.ok_or_else(|| EngineError::ChoiceRequired(String::from(key)))?;
            let option = options.get(idx).ok_or_else(|| EngineError::InvalidChoice {
                event: String::from(key),
                choice: idx,
            })?;
            apply_effects(state, option.effects, config, rng);
            state.events.insert(
                String::from(key),
                EventRecord {
                    resolved: true,
                    chosen_option: Some(idx),
                },
            );
            Ok(Outcome::new(format!("{}: {}.", def.title, option.label)))
        }
    }
}

/// Apply one effect list in order.
fn apply_effects(
    state: &mut GameState,
    effects: &[EventEffect],
    config: &EngineConfig,
    rng: &mut impl Rng,
) {
    for effect in effects {
        apply_effect(state, *effect, config, rng);
    }
}

fn apply_effect(
    state: &mut GameState,
    effect: EventEffect,
    config: &EngineConfig,
    rng: &mut impl Rng,
) {
    let day = state.day;
    match effect {
        EventEffect::Resources(delta) => {
            state.ledger.apply(&delta, day, "EVENT");
        }
        EventEffect::RosterMorale(delta) => {
            for daemon in state.daemons.values_mut().filter(|d| d.active) {
                lifecycle::adjust_morale(daemon, delta);
            }
        }
        EventEffect::FleetDurability(delta) => {
            for item in state.equipment.values_mut().filter(|i| !i.destroyed) {
                if delta >= 0 {
                    item.durability = item
                        .durability
                        .saturating_add(delta.unsigned_abs())
                        .min(equipment::DURABILITY_MAX);
                } else {
                    let _ = equipment::degrade(item, delta.unsigned_abs(), day);
                }
            }
        }
        EventEffect::Modifier(modifier) => {
            debug!(?modifier, "modifier activated");
            state.modifiers.push(modifier);
        }
        EventEffect::RandomEquipmentUpgrade => {
            let candidates: Vec<_> = state
                .equipment
                .values()
                .filter(|i| !i.destroyed)
                .map(|i| i.id)
                .collect();
            if candidates.is_empty() {
                return;
            }
            let idx = rng.random_range(0..candidates.len());
            if let Some(id) = candidates.get(idx)
                && let Some(item) = state.equipment.get_mut(id)
            {
                item.durability = item
                    .durability
                    .saturating_add(config.events.random_upgrade_durability)
                    .min(equipment::DURABILITY_MAX);
                item.history
                    .push(format!("Mysteriously improved on day {day}."));
            }
        }
        EventEffect::ReassignSpecialization => {
            let candidates: Vec<_> = state
                .daemons
                .values()
                .filter(|d| d.active)
                .map(|d| d.id)
                .collect();
            if candidates.is_empty() {
                return;
            }
            let idx = rng.random_range(0..candidates.len());
            let spec_idx = rng.random_range(0..Specialization::ALL.len());
            let new_spec = Specialization::ALL
                .get(spec_idx)
                .copied()
                .unwrap_or(Specialization::Infiltration);
            if let Some(id) = candidates.get(idx)
                && let Some(daemon) = state.daemons.get_mut(id)
            {
                info!(daemon = %daemon.name, ?new_spec, "specialization reassigned");
                daemon.specialization = new_spec;
            }
        }
    }
}

//! The engine-owned game state.
//!
//! One explicit struct holds everything the simulation mutates; every
//! component operates on state it is handed rather than on a global. The
//! whole struct serializes for the snapshot contract, with serde defaults
//! on fields added after the first snapshot version so older saves migrate
//! forward instead of being rejected.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use netherco_ledger::ResourceLedger;
use netherco_types::{
    ActiveModifier, BloodlineRecord, Candidate, ComplianceTask, Daemon, DaemonId, Difficulty,
    Equipment, EquipmentId, Planet, PlanetId, ResourcePool, Room, RoomKind,
};

/// Runtime record of a corporate event's resolution, keyed by the static
/// event key. Created when the event first surfaces.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    /// Whether the event has been applied (automatic) or chosen (choice).
    #[serde(default)]
    pub resolved: bool,
    /// Index of the option taken, for choice events.
    #[serde(default)]
    pub chosen_option: Option<usize>,
}

/// Everything the simulation owns and mutates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// The in-game day counter. Day 0 is founding day.
    #[serde(default)]
    pub day: u64,
    /// Resource counters and their audit history.
    pub ledger: ResourceLedger,
    /// Every daemon ever hired, active and retired, keyed by ID.
    pub daemons: BTreeMap<DaemonId, Daemon>,
    /// The current recruitment pool.
    #[serde(default)]
    pub pool: Vec<Candidate>,
    /// Every piece of equipment ever forged, keyed by ID.
    pub equipment: BTreeMap<EquipmentId, Equipment>,
    /// The office facilities, one room per kind.
    pub rooms: BTreeMap<RoomKind, Room>,
    /// Rival planets, keyed by ID.
    pub planets: BTreeMap<PlanetId, Planet>,
    /// Per-event resolution records, keyed by static event key.
    #[serde(default)]
    pub events: BTreeMap<String, EventRecord>,
    /// Temporary modifiers currently in effect.
    #[serde(default)]
    pub modifiers: Vec<ActiveModifier>,
    /// Current position on the corporate ladder (index into the tier table).
    #[serde(default)]
    pub tier: usize,
    /// Rival overlords defeated (hard-target conquests).
    #[serde(default)]
    pub rivals_defeated: u32,
    /// Compliance tasks completed on time.
    #[serde(default)]
    pub audits_completed: u32,
    /// Outstanding and historical compliance tasks.
    #[serde(default)]
    pub compliance_tasks: Vec<ComplianceTask>,
    /// The legacy archive, keyed by bloodline name.
    #[serde(default)]
    pub legacy_archive: BTreeMap<String, BloodlineRecord>,
}

impl GameState {
    /// A fresh corporation: starting credits, level-1 rooms, the standard
    /// planet roster, nobody hired yet.
    pub fn new() -> Self {
        let mut rooms = BTreeMap::new();
        for kind in RoomKind::ALL {
            rooms.insert(kind, Room { kind, level: 1 });
        }

        let mut planets = BTreeMap::new();
        for planet in starting_planets() {
            planets.insert(planet.id, planet);
        }

        Self {
            day: 0,
            ledger: ResourceLedger::with_pool(ResourcePool {
                credits: 500,
                souls: 0,
                favor: 10,
                brimstone: 20,
            }),
            daemons: BTreeMap::new(),
            pool: Vec::new(),
            equipment: BTreeMap::new(),
            rooms,
            planets,
            events: BTreeMap::new(),
            modifiers: Vec::new(),
            tier: 0,
            rivals_defeated: 0,
            audits_completed: 0,
            compliance_tasks: Vec::new(),
            legacy_archive: BTreeMap::new(),
        }
    }

    /// Active daemons, in roster order.
    pub fn active_daemons(&self) -> impl Iterator<Item = &Daemon> {
        self.daemons.values().filter(|d| d.active)
    }

    /// Count of planets currently conquered.
    pub fn planets_conquered(&self) -> u32 {
        let count = self.planets.values().filter(|p| p.conquered).count();
        u32::try_from(count).unwrap_or(u32::MAX)
    }

    /// Level of a room, defaulting to 1 when the kind is somehow missing.
    pub fn room_level(&self, kind: RoomKind) -> u32 {
        self.rooms.get(&kind).map_or(1, |r| r.level)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// The standard rival planet roster a fresh corporation faces.
fn starting_planets() -> Vec<Planet> {
    let defs: [(&str, Difficulty, &str, &str, &str); 6] = [
        (
            "Gloomfen IV",
            Difficulty::Easy,
            "swamp colony",
            "A volunteer militia with one working searchlight.",
            "Bog access and a modest soul tithe.",
        ),
        (
            "Cinder Prime",
            Difficulty::Easy,
            "mining colony",
            "Underpaid security contractors counting the days.",
            "Brimstone veins and cheap labor.",
        ),
        (
            "Veldt-9",
            Difficulty::Medium,
            "agri-world",
            "A well-drilled harvest guard with orbital scarecrows.",
            "Grain futures and favor with Head Office.",
        ),
        (
            "Korrath Spindle",
            Difficulty::Medium,
            "orbital foundry",
            "Automated point-defense and a strong union.",
            "Foundry output and salvage rights.",
        ),
        (
            "Pale Throne",
            Difficulty::Hard,
            "fortress world",
            "A rival overlord's honor guard, dug in for centuries.",
            "The overlord's ledger and a seat at the table.",
        ),
        (
            "Null Meridian",
            Difficulty::Hard,
            "citadel moon",
            "Void-shielded walls and a grudge against management.",
            "Total sector control.",
        ),
    ];

    defs.into_iter()
        .map(|(name, difficulty, flavor, resistance, reward_text)| Planet {
            id: PlanetId::new(),
            name: String::from(name),
            difficulty,
            flavor: String::from(flavor),
            resistance: String::from(resistance),
            reward_text: String::from(reward_text),
            conquered: false,
            last_mission_day: None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_state_has_all_rooms_at_level_one() {
        let state = GameState::new();
        assert_eq!(state.rooms.len(), 3);
        for kind in RoomKind::ALL {
            assert_eq!(state.room_level(kind), 1);
        }
    }

    #[test]
    fn fresh_state_has_six_unconquered_planets() {
        let state = GameState::new();
        assert_eq!(state.planets.len(), 6);
        assert_eq!(state.planets_conquered(), 0);
    }

    #[test]
    fn fresh_state_starts_with_founding_capital() {
        let state = GameState::new();
        assert_eq!(state.ledger.pool().credits, 500);
        assert_eq!(state.ledger.pool().brimstone, 20);
    }

    #[test]
    fn state_serde_round_trips() {
        let state = GameState::new();
        let json = serde_json::to_string(&state).unwrap_or_default();
        let restored: Result<GameState, _> = serde_json::from_str(&json);
        assert_eq!(restored.ok(), Some(state));
    }
}

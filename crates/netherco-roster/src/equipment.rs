//! The equipment registry: crafting templates, durability, assignment,
//! and generational inheritance.
//!
//! Assignment exclusivity is enforced uniformly in both directions: a
//! daemon holds at most one item and an item is held by at most one
//! daemon. The daemon's `equipment` back-reference and the item's
//! `assigned_to` field are only ever written here, so they cannot drift
//! apart.
//!
//! Durability zero is terminal: the item is flagged destroyed and refuses
//! repair and assignment from then on.

use std::collections::BTreeMap;

use tracing::debug;

use netherco_types::{Daemon, DaemonId, Equipment, EquipmentId, ResourceCost, Specialization};

use crate::config::LifecycleConfig;
use crate::error::RosterError;

/// Upper clamp for durability.
pub const DURABILITY_MAX: u32 = 100;

// ---------------------------------------------------------------------------
// Templates
// ---------------------------------------------------------------------------

/// A static crafting template from which equipment is forged.
#[derive(Debug, Clone, Copy)]
pub struct EquipmentTemplate {
    /// Stable key used by the crafting API.
    pub key: &'static str,
    /// Display name.
    pub name: &'static str,
    /// The specialization the item is tuned for.
    pub kind: Specialization,
    /// Ability description.
    pub ability: &'static str,
    /// Crafting cost (before workshop discounts).
    pub cost: ResourceCost,
}

/// The workshop's template table.
pub const EQUIPMENT_TEMPLATES: &[EquipmentTemplate] = &[
    EquipmentTemplate {
        key: "shadow_cloak",
        name: "Shadow Cloak",
        kind: Specialization::Infiltration,
        ability: "Bends light and audit trails around the wearer.",
        cost: ResourceCost {
            credits: 120,
            souls: 0,
            favor: 0,
            brimstone: 4,
        },
    },
    EquipmentTemplate {
        key: "hellforged_blade",
        name: "Hellforged Blade",
        kind: Specialization::Combat,
        ability: "Keeps its edge through a thousand severances.",
        cost: ResourceCost {
            credits: 150,
            souls: 0,
            favor: 0,
            brimstone: 6,
        },
    },
    EquipmentTemplate {
        key: "gremlin_kit",
        name: "Gremlin Kit",
        kind: Specialization::Sabotage,
        ability: "Everything needed to void a warranty at planetary scale.",
        cost: ResourceCost {
            credits: 135,
            souls: 0,
            favor: 0,
            brimstone: 5,
        },
    },
];

/// Look up a crafting template by key.
pub fn template_for(key: &str) -> Option<&'static EquipmentTemplate> {
    EQUIPMENT_TEMPLATES.iter().find(|t| t.key == key)
}

/// Forge a fresh item from a template. Generation 0, full durability.
pub fn craft(template: &EquipmentTemplate, day: u64) -> Equipment {
    Equipment {
        id: EquipmentId::new(),
        name: String::from(template.name),
        kind: template.kind,
        durability: DURABILITY_MAX,
        ability: String::from(template.ability),
        assigned_to: None,
        generation: 0,
        legacy_bonus: 0,
        history: vec![format!("Forged in the workshop on day {day}.")],
        destroyed: false,
    }
}

// ---------------------------------------------------------------------------
// Durability
// ---------------------------------------------------------------------------

/// Result of a degradation, surfacing the terminal state transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DegradeOutcome {
    /// Durability after the degradation.
    pub durability: u32,
    /// Whether this degradation destroyed the item.
    pub destroyed_now: bool,
}

/// Repair an item by the configured increment, clamped to 100.
///
/// Rejects destroyed items (terminal state) and items already at full
/// durability (a no-op is a caller error, not a silent success). Returns
/// the durability actually restored.
pub fn repair(
    equipment: &mut Equipment,
    config: &LifecycleConfig,
) -> Result<u32, RosterError> {
    if equipment.destroyed {
        return Err(RosterError::EquipmentDestroyed(equipment.id));
    }
    if equipment.durability >= DURABILITY_MAX {
        return Err(RosterError::EquipmentFullyDurable(equipment.id));
    }

    let before = equipment.durability;
    equipment.durability = before
        .saturating_add(config.repair_increment)
        .min(DURABILITY_MAX);
    Ok(equipment.durability.saturating_sub(before))
}

/// Degrade an item, flooring durability at zero.
///
/// Reaching zero flags the item destroyed and appends a history note;
/// the transition is surfaced to the caller rather than silently absorbed.
pub fn degrade(equipment: &mut Equipment, amount: u32, day: u64) -> DegradeOutcome {
    if equipment.destroyed {
        return DegradeOutcome {
            durability: 0,
            destroyed_now: false,
        };
    }

    equipment.durability = equipment.durability.saturating_sub(amount);
    let destroyed_now = equipment.durability == 0;
    if destroyed_now {
        equipment.destroyed = true;
        equipment.assigned_to = None;
        equipment
            .history
            .push(format!("Destroyed in the field on day {day}."));
        debug!(equipment = %equipment.id, "equipment destroyed");
    }

    DegradeOutcome {
        durability: equipment.durability,
        destroyed_now,
    }
}

// ---------------------------------------------------------------------------
// Assignment
// ---------------------------------------------------------------------------

/// Assign an item to a daemon, enforcing one-to-one exclusivity.
///
/// Any item the daemon previously held is released, and any previous
/// holder of this item loses it. Both back-references are kept consistent.
pub fn assign(
    equipment: &mut BTreeMap<EquipmentId, Equipment>,
    daemons: &mut BTreeMap<DaemonId, Daemon>,
    equipment_id: EquipmentId,
    daemon_id: DaemonId,
) -> Result<(), RosterError> {
    // Validate fully before mutating anything.
    {
        let item = equipment
            .get(&equipment_id)
            .ok_or(RosterError::EquipmentNotFound(equipment_id))?;
        if item.destroyed {
            return Err(RosterError::EquipmentDestroyed(equipment_id));
        }
        let daemon = daemons
            .get(&daemon_id)
            .ok_or(RosterError::DaemonNotFound(daemon_id))?;
        if !daemon.active {
            return Err(RosterError::DaemonInactive(daemon_id));
        }
    }

    // Release the item's previous holder.
    let previous_holder = equipment.get(&equipment_id).and_then(|i| i.assigned_to);
    if let Some(holder_id) = previous_holder
        && let Some(holder) = daemons.get_mut(&holder_id)
    {
        holder.equipment = None;
    }

    // Release the daemon's previous item.
    let previous_item = daemons.get(&daemon_id).and_then(|d| d.equipment);
    if let Some(item_id) = previous_item
        && let Some(item) = equipment.get_mut(&item_id)
    {
        item.assigned_to = None;
    }

    if let Some(item) = equipment.get_mut(&equipment_id) {
        item.assigned_to = Some(daemon_id);
    }
    if let Some(daemon) = daemons.get_mut(&daemon_id) {
        daemon.equipment = Some(equipment_id);
    }

    Ok(())
}

/// Clear an item's assignment and its holder's back-reference.
pub fn unassign(
    equipment: &mut BTreeMap<EquipmentId, Equipment>,
    daemons: &mut BTreeMap<DaemonId, Daemon>,
    equipment_id: EquipmentId,
) -> Result<(), RosterError> {
    let holder = {
        let item = equipment
            .get_mut(&equipment_id)
            .ok_or(RosterError::EquipmentNotFound(equipment_id))?;
        item.assigned_to.take()
    };
    if let Some(holder_id) = holder
        && let Some(daemon) = daemons.get_mut(&holder_id)
    {
        daemon.equipment = None;
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Inheritance
// ---------------------------------------------------------------------------

/// Apply the inheritance bonus when an item's owner dies.
///
/// The item is released, gains durability and a permanent legacy bonus,
/// and its generation counter increments. Destroyed items are passed over;
/// scrap inherits nothing.
pub fn inherit(
    equipment: &mut Equipment,
    config: &LifecycleConfig,
    deceased_name: &str,
    day: u64,
) {
    if equipment.destroyed {
        return;
    }

    equipment.assigned_to = None;
    equipment.durability = equipment
        .durability
        .saturating_add(config.inherit_durability_bonus)
        .min(DURABILITY_MAX);
    equipment.generation = equipment.generation.saturating_add(1);
    equipment.legacy_bonus = equipment
        .legacy_bonus
        .saturating_add(config.inherit_legacy_bonus);
    equipment.history.push(format!(
        "Inherited from {deceased_name} on day {day}. It remembers."
    ));
}

//! Type-safe identifier wrappers around [`Uuid`].
//!
//! Every entity in the engine has a strongly-typed ID to prevent accidental
//! mixing of identifiers at compile time. All IDs use UUID v7 (time-ordered)
//! so the browser UI can sort entities by creation without extra bookkeeping.
//!
//! Corporate events are the one exception: their catalog is static, so they
//! are keyed by stable string identifiers rather than generated UUIDs.

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// Generates a newtype wrapper around [`Uuid`] with standard derives.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
        #[ts(export, export_to = "bindings/")]
        pub struct $name(pub Uuid);

        impl $name {
            /// Create a new identifier using UUID v7 (time-ordered).
            pub fn new() -> Self {
                Self(Uuid::now_v7())
            }

            /// Return the inner [`Uuid`] value.
            pub const fn into_inner(self) -> Uuid {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<Uuid> for $name {
            fn from(id: Uuid) -> Self {
                Self(id)
            }
        }

        impl From<$name> for Uuid {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

define_id! {
    /// Unique identifier for a daemon (active roster or recruitment pool).
    DaemonId
}

define_id! {
    /// Unique identifier for a piece of equipment.
    EquipmentId
}

define_id! {
    /// Unique identifier for a rival planet (mission target).
    PlanetId
}

define_id! {
    /// Unique identifier for a compliance task.
    TaskId
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_distinct_types() {
        let daemon = DaemonId::new();
        let equipment = EquipmentId::new();
        // These are different types -- the compiler enforces no mixing.
        assert_ne!(daemon.into_inner(), Uuid::nil());
        assert_ne!(equipment.into_inner(), Uuid::nil());
    }

    #[test]
    fn id_round_trips_through_uuid() {
        let id = PlanetId::new();
        let raw: Uuid = id.into();
        assert_eq!(PlanetId::from(raw), id);
    }

    #[test]
    fn id_display_matches_uuid() {
        let id = TaskId::new();
        assert_eq!(id.to_string(), id.into_inner().to_string());
    }
}

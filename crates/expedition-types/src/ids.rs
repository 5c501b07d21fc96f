//! Type-safe identifier wrappers around `i64`.
//!
//! Every entity has a strongly-typed ID to prevent accidental mixing of
//! identifiers at compile time. All IDs are database-assigned `BIGSERIAL`
//! values; there is no app-side generation — rows get their ID from
//! `PostgreSQL` on insert.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Generates a newtype wrapper around `i64` with standard derives.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
        #[ts(export, export_to = "bindings/")]
        pub struct $name(pub i64);

        impl $name {
            /// Return the inner `i64` value.
            pub const fn into_inner(self) -> i64 {
                self.0
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            fn from(id: i64) -> Self {
                Self(id)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

define_id! {
    /// Unique identifier for a planet.
    PlanetId
}

define_id! {
    /// Unique identifier for a scientist.
    ScientistId
}

define_id! {
    /// Unique identifier for a mission linking a scientist to a planet.
    MissionId
}

//! Core entity records for the Expedition data service.
//!
//! These are the storage-shaped records: a [`Mission`] carries its two
//! required foreign keys, while [`Planet`] and [`Scientist`] carry no
//! stored back-pointer to their missions. The mission list for a parent
//! is always a derived lookup through an indexed query, which keeps the
//! entity graph acyclic.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::ids::{MissionId, PlanetId, ScientistId};

/// A planet that missions can target.
///
/// Planet fields carry no validation rules; values are accepted as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Planet {
    /// Database-assigned identifier.
    pub id: PlanetId,
    /// Planet name.
    pub name: Option<String>,
    /// Distance from Earth in light-years.
    pub distance_from_earth: Option<i64>,
    /// Name of the nearest star.
    pub nearest_star: Option<String>,
}

/// A scientist who undertakes missions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Scientist {
    /// Database-assigned identifier.
    pub id: ScientistId,
    /// Scientist name. Non-empty at every write.
    pub name: String,
    /// Field of study. Non-empty at every write.
    pub field_of_study: String,
}

/// A mission linking exactly one scientist to exactly one planet.
///
/// A mission cannot outlive either parent: deleting a planet or a
/// scientist cascades to its missions at the storage layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Mission {
    /// Database-assigned identifier.
    pub id: MissionId,
    /// Mission name. Non-empty at every write.
    pub name: String,
    /// The planet this mission targets.
    pub planet_id: PlanetId,
    /// The scientist undertaking this mission.
    pub scientist_id: ScientistId,
}

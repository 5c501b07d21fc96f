//! Per-endpoint response projections, one relationship hop deep.
//!
//! Bidirectional relationships (planet <-> mission, scientist <-> mission)
//! would recurse forever under a naive recursive serializer. Instead each
//! endpoint serializes an explicit view struct: an embedded parent never
//! contains its missions, and an embedded mission never contains the
//! parent it is embedded under. Cycles are unrepresentable rather than
//! truncated at runtime.

use serde::Serialize;
use ts_rs::TS;

use crate::entities::{Mission, Planet, Scientist};
use crate::ids::{MissionId, PlanetId, ScientistId};

/// A planet without its missions. Used by the planet list endpoint and
/// as the embedded planet inside mission views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct PlanetView {
    /// Planet identifier.
    pub id: PlanetId,
    /// Planet name.
    pub name: Option<String>,
    /// Distance from Earth in light-years.
    pub distance_from_earth: Option<i64>,
    /// Name of the nearest star.
    pub nearest_star: Option<String>,
}

impl From<Planet> for PlanetView {
    fn from(planet: Planet) -> Self {
        Self {
            id: planet.id,
            name: planet.name,
            distance_from_earth: planet.distance_from_earth,
            nearest_star: planet.nearest_star,
        }
    }
}

/// A scientist without their missions. Used by the scientist list,
/// create, and update endpoints, and as the embedded scientist inside
/// [`MissionDetail`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ScientistView {
    /// Scientist identifier.
    pub id: ScientistId,
    /// Scientist name.
    pub name: String,
    /// Field of study.
    pub field_of_study: String,
}

impl From<Scientist> for ScientistView {
    fn from(scientist: Scientist) -> Self {
        Self {
            id: scientist.id,
            name: scientist.name,
            field_of_study: scientist.field_of_study,
        }
    }
}

/// A mission with its planet embedded, used inside [`ScientistDetail`].
///
/// Carries no scientist back-reference: the scientist is the record this
/// view is embedded under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct MissionWithPlanet {
    /// Mission identifier.
    pub id: MissionId,
    /// Mission name.
    pub name: String,
    /// Target planet identifier.
    pub planet_id: PlanetId,
    /// Undertaking scientist identifier.
    pub scientist_id: ScientistId,
    /// The target planet, without its missions.
    pub planet: PlanetView,
}

impl MissionWithPlanet {
    /// Combine a mission with its (already fetched) planet.
    pub fn new(mission: Mission, planet: Planet) -> Self {
        Self {
            id: mission.id,
            name: mission.name,
            planet_id: mission.planet_id,
            scientist_id: mission.scientist_id,
            planet: PlanetView::from(planet),
        }
    }
}

/// A scientist with the one-hop expansion of their missions. Used by the
/// single-scientist GET endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ScientistDetail {
    /// Scientist identifier.
    pub id: ScientistId,
    /// Scientist name.
    pub name: String,
    /// Field of study.
    pub field_of_study: String,
    /// The scientist's missions, each with its planet embedded.
    pub missions: Vec<MissionWithPlanet>,
}

impl ScientistDetail {
    /// Combine a scientist with their derived mission lookup.
    pub fn new(scientist: Scientist, missions: Vec<MissionWithPlanet>) -> Self {
        Self {
            id: scientist.id,
            name: scientist.name,
            field_of_study: scientist.field_of_study,
            missions,
        }
    }
}

/// A mission with both parents embedded, used by the mission create
/// endpoint. Neither embedded parent contains missions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct MissionDetail {
    /// Mission identifier.
    pub id: MissionId,
    /// Mission name.
    pub name: String,
    /// Target planet identifier.
    pub planet_id: PlanetId,
    /// Undertaking scientist identifier.
    pub scientist_id: ScientistId,
    /// The target planet, without its missions.
    pub planet: PlanetView,
    /// The undertaking scientist, without their missions.
    pub scientist: ScientistView,
}

impl MissionDetail {
    /// Combine a mission with its (already fetched) parents.
    pub fn new(mission: Mission, planet: Planet, scientist: Scientist) -> Self {
        Self {
            id: mission.id,
            name: mission.name,
            planet_id: mission.planet_id,
            scientist_id: mission.scientist_id,
            planet: PlanetView::from(planet),
            scientist: ScientistView::from(scientist),
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::{MissionDetail, MissionWithPlanet, ScientistDetail};
    use crate::entities::{Mission, Planet, Scientist};
    use crate::ids::{MissionId, PlanetId, ScientistId};

    fn planet() -> Planet {
        Planet {
            id: PlanetId(1),
            name: Some(String::from("Kepler-442b")),
            distance_from_earth: Some(1206),
            nearest_star: Some(String::from("Kepler-442")),
        }
    }

    fn scientist() -> Scientist {
        Scientist {
            id: ScientistId(2),
            name: String::from("Ada"),
            field_of_study: String::from("Physics"),
        }
    }

    fn mission() -> Mission {
        Mission {
            id: MissionId(3),
            name: String::from("Apollo"),
            planet_id: PlanetId(1),
            scientist_id: ScientistId(2),
        }
    }

    #[test]
    fn embedded_planet_carries_no_missions() {
        let view = MissionWithPlanet::new(mission(), planet());
        let json = serde_json::to_value(&view).unwrap();
        assert!(json.get("planet").unwrap().get("missions").is_none());
    }

    #[test]
    fn scientist_detail_missions_carry_no_scientist_back_reference() {
        let detail = ScientistDetail::new(
            scientist(),
            vec![MissionWithPlanet::new(mission(), planet())],
        );
        let json = serde_json::to_value(&detail).unwrap();
        let first = json
            .get("missions")
            .and_then(|m| m.get(0))
            .unwrap();
        assert!(first.get("scientist").is_none());
        assert_eq!(first.get("scientist_id").unwrap(), 2);
    }

    #[test]
    fn mission_detail_never_embeds_itself_in_its_parents() {
        let detail = MissionDetail::new(mission(), planet(), scientist());
        let json = serde_json::to_value(&detail).unwrap();
        assert!(json.get("planet").unwrap().get("missions").is_none());
        assert!(json.get("scientist").unwrap().get("missions").is_none());
    }
}

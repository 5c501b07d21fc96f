//! Write payloads and their field-level validation rules.
//!
//! Validation is explicit: callers invoke [`Validate::validate`] on a
//! payload and get back a typed [`ValidationErrors`](validator::ValidationErrors)
//! before anything touches the database. A failed validation therefore
//! never partially commits — the store is only called on `Ok`.
//!
//! Rules (all rejections are domain validation errors, distinct from
//! not-found and server faults):
//!
//! - `Scientist.name` / `Scientist.field_of_study`: non-empty.
//! - `Mission.name`: non-empty.
//! - `Mission.planet_id` / `Mission.scientist_id`: must be present.
//! - `Planet` fields: no rules, accepted as-is.

use serde::Deserialize;
use validator::Validate;

use crate::ids::{PlanetId, ScientistId};

/// Payload for creating a scientist.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewScientist {
    /// Scientist name. Must be non-empty.
    #[validate(length(min = 1, message = "name must exist"))]
    pub name: String,
    /// Field of study. Must be non-empty.
    #[validate(length(min = 1, message = "field_of_study must exist"))]
    pub field_of_study: String,
}

/// Payload for updating a scientist.
///
/// Updates are whole-field replacement: both fields are required and
/// revalidated on every write. There is no partial-patch merge.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ScientistUpdate {
    /// Replacement name. Must be non-empty.
    #[validate(length(min = 1, message = "name must exist"))]
    pub name: String,
    /// Replacement field of study. Must be non-empty.
    #[validate(length(min = 1, message = "field_of_study must exist"))]
    pub field_of_study: String,
}

/// Payload for creating a mission.
///
/// The foreign keys are `Option` so a null or absent key fails
/// validation rather than deserialization; whether the referenced rows
/// actually exist is left to the storage engine's constraints.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewMission {
    /// Mission name. Must be non-empty.
    #[validate(length(min = 1, message = "name must exist"))]
    pub name: String,
    /// Target planet. Must be present.
    #[validate(required(message = "planet_id must exist"))]
    pub planet_id: Option<PlanetId>,
    /// Undertaking scientist. Must be present.
    #[validate(required(message = "scientist_id must exist"))]
    pub scientist_id: Option<ScientistId>,
}

/// Payload for creating a planet.
///
/// Planets have no validation rules; every field is optional and
/// accepted as-is.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct NewPlanet {
    /// Planet name.
    pub name: Option<String>,
    /// Distance from Earth in light-years.
    pub distance_from_earth: Option<i64>,
    /// Name of the nearest star.
    pub nearest_star: Option<String>,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use validator::Validate;

    use super::{NewMission, NewPlanet, NewScientist, ScientistUpdate};
    use crate::ids::{PlanetId, ScientistId};

    #[test]
    fn scientist_with_both_fields_passes() {
        let payload = NewScientist {
            name: String::from("Ada"),
            field_of_study: String::from("Physics"),
        };
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn scientist_with_empty_name_is_rejected() {
        let payload = NewScientist {
            name: String::new(),
            field_of_study: String::from("Physics"),
        };
        let errors = payload.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));
    }

    #[test]
    fn scientist_with_empty_field_of_study_is_rejected() {
        let payload = NewScientist {
            name: String::from("Ada"),
            field_of_study: String::new(),
        };
        let errors = payload.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("field_of_study"));
    }

    #[test]
    fn scientist_update_revalidates_both_fields() {
        let payload = ScientistUpdate {
            name: String::from("Ada Lovelace"),
            field_of_study: String::new(),
        };
        let errors = payload.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("field_of_study"));
    }

    #[test]
    fn mission_with_name_and_both_keys_passes() {
        let payload = NewMission {
            name: String::from("Apollo"),
            planet_id: Some(PlanetId(1)),
            scientist_id: Some(ScientistId(1)),
        };
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn mission_with_empty_name_is_rejected() {
        let payload = NewMission {
            name: String::new(),
            planet_id: Some(PlanetId(1)),
            scientist_id: Some(ScientistId(1)),
        };
        let errors = payload.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));
    }

    #[test]
    fn mission_without_planet_id_is_rejected() {
        let payload = NewMission {
            name: String::from("Apollo"),
            planet_id: None,
            scientist_id: Some(ScientistId(1)),
        };
        let errors = payload.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("planet_id"));
    }

    #[test]
    fn mission_without_scientist_id_is_rejected() {
        let payload = NewMission {
            name: String::from("Apollo"),
            planet_id: Some(PlanetId(1)),
            scientist_id: None,
        };
        let errors = payload.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("scientist_id"));
    }

    #[test]
    fn null_foreign_key_in_json_fails_validation_not_deserialization() {
        let payload: NewMission = serde_json::from_value(serde_json::json!({
            "name": "Apollo",
            "planet_id": 1,
            "scientist_id": null,
        }))
        .unwrap();
        assert!(payload.validate().is_err());
    }

    #[test]
    fn planet_payload_has_no_rules() {
        let payload = NewPlanet {
            name: Some(String::new()),
            distance_from_earth: None,
            nearest_star: None,
        };
        assert!(payload.validate().is_ok());
    }
}

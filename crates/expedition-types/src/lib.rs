//! Shared type definitions for the Expedition data service.
//!
//! This crate is the single source of truth for the entity model, write
//! payloads, and response projections used across the Expedition
//! workspace. Types defined here flow downstream to `TypeScript` via
//! `ts-rs` for API consumers.
//!
//! # Modules
//!
//! - [`ids`] -- Type-safe integer wrappers for entity identifiers
//! - [`entities`] -- Core entity records (planets, scientists, missions)
//! - [`input`] -- Write payloads with field-level validation rules
//! - [`views`] -- Per-endpoint response projections (one hop deep)

pub mod entities;
pub mod ids;
pub mod input;
pub mod views;

// Re-export all public types at crate root for convenience.
pub use entities::{Mission, Planet, Scientist};
pub use ids::{MissionId, PlanetId, ScientistId};
pub use input::{NewMission, NewPlanet, NewScientist, ScientistUpdate};
pub use views::{MissionDetail, MissionWithPlanet, PlanetView, ScientistDetail, ScientistView};

#[cfg(test)]
mod tests {
    //! Integration tests for type exports and `TypeScript` binding generation.

    #[test]
    fn export_bindings() {
        // ts-rs generates TypeScript bindings when types with
        // #[ts(export)] are used. Importing them here triggers generation.
        // The actual files are written to the `bindings/` directory
        // relative to the crate root.
        use ts_rs::TS;

        // IDs
        let _ = crate::ids::PlanetId::export_all();
        let _ = crate::ids::ScientistId::export_all();
        let _ = crate::ids::MissionId::export_all();

        // Entities
        let _ = crate::entities::Planet::export_all();
        let _ = crate::entities::Scientist::export_all();
        let _ = crate::entities::Mission::export_all();

        // Views
        let _ = crate::views::PlanetView::export_all();
        let _ = crate::views::ScientistView::export_all();
        let _ = crate::views::MissionWithPlanet::export_all();
        let _ = crate::views::ScientistDetail::export_all();
        let _ = crate::views::MissionDetail::export_all();
    }
}

//! `PostgreSQL` data layer for the Expedition service.
//!
//! Three tables hold the entire model: `planets`, `scientists`, and the
//! `missions` that link them. Referential integrity lives at the storage
//! layer: both mission foreign keys are `NOT NULL` and cascade on parent
//! delete, so a planet or scientist delete transitively removes its
//! missions in the same statement and no mission can reference a deleted
//! parent.
//!
//! Every constraint and index in the migrations is named explicitly with
//! a table/column-derived name (`pk_`, `fk_`, `ix_` prefixes) so schema
//! diffs stay stable across environments.
//!
//! # Modules
//!
//! - [`postgres`] -- `PostgreSQL` connection pool and configuration
//! - [`planet_store`] -- Planet CRUD
//! - [`scientist_store`] -- Scientist CRUD
//! - [`mission_store`] -- Mission writes and derived parent lookups
//! - [`error`] -- Shared error types

pub mod error;
pub mod mission_store;
pub mod planet_store;
pub mod postgres;
pub mod scientist_store;

// Re-export primary types for convenience.
pub use error::DbError;
pub use mission_store::{MissionPlanetRow, MissionRow, MissionStore};
pub use planet_store::{PlanetRow, PlanetStore};
pub use postgres::{PostgresConfig, PostgresPool};
pub use scientist_store::{ScientistRow, ScientistStore};

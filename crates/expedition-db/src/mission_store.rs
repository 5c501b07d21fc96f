//! Operations on the `missions` table.
//!
//! A mission belongs to exactly one planet and exactly one scientist.
//! Both foreign keys are `NOT NULL`; whether the referenced rows exist
//! is enforced by `PostgreSQL`, not pre-validated here. A violated
//! reference surfaces as [`DbError::ForeignKey`].
//!
//! The mission list for a parent is a derived lookup through the
//! `ix_missions_planet_id` / `ix_missions_scientist_id` indexes, never a
//! stored back-pointer.

use expedition_types::{Mission, MissionId, MissionWithPlanet, Planet, PlanetId, ScientistId};
use sqlx::PgPool;

use crate::error::{DbError, map_write_error};

/// Operations on the `missions` table.
pub struct MissionStore<'a> {
    pool: &'a PgPool,
}

impl<'a> MissionStore<'a> {
    /// Create a new mission store bound to a connection pool.
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert a mission and return the stored record with its
    /// database-assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::ForeignKey`] if either referenced parent does
    /// not exist, [`DbError::Postgres`] for any other failure.
    pub async fn insert(
        &self,
        name: &str,
        planet_id: PlanetId,
        scientist_id: ScientistId,
    ) -> Result<Mission, DbError> {
        let row = sqlx::query_as::<_, MissionRow>(
            r"INSERT INTO missions (name, planet_id, scientist_id)
              VALUES ($1, $2, $3)
              RETURNING id, name, planet_id, scientist_id",
        )
        .bind(name)
        .bind(planet_id.into_inner())
        .bind(scientist_id.into_inner())
        .fetch_one(self.pool)
        .await
        .map_err(map_write_error)?;

        tracing::debug!(id = row.id, "Inserted mission");
        Ok(Mission::from(row))
    }

    /// Fetch a single mission by id, returning `None` if absent.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if the query fails.
    pub async fn get(&self, id: MissionId) -> Result<Option<Mission>, DbError> {
        let row = sqlx::query_as::<_, MissionRow>(
            r"SELECT id, name, planet_id, scientist_id
              FROM missions
              WHERE id = $1",
        )
        .bind(id.into_inner())
        .fetch_optional(self.pool)
        .await?;

        Ok(row.map(Mission::from))
    }

    /// Derived lookup: all missions for a scientist, each joined with
    /// its planet, ordered by mission id.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if the query fails.
    pub async fn for_scientist_with_planets(
        &self,
        scientist_id: ScientistId,
    ) -> Result<Vec<MissionWithPlanet>, DbError> {
        let rows = sqlx::query_as::<_, MissionPlanetRow>(
            r"SELECT m.id AS mission_id, m.name AS mission_name,
                     m.planet_id, m.scientist_id,
                     p.name AS planet_name, p.distance_from_earth, p.nearest_star
              FROM missions m
              JOIN planets p ON p.id = m.planet_id
              WHERE m.scientist_id = $1
              ORDER BY m.id",
        )
        .bind(scientist_id.into_inner())
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(MissionWithPlanet::from).collect())
    }

    /// Derived lookup: all missions targeting a planet, ordered by
    /// mission id.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if the query fails.
    pub async fn for_planet(&self, planet_id: PlanetId) -> Result<Vec<Mission>, DbError> {
        let rows = sqlx::query_as::<_, MissionRow>(
            r"SELECT id, name, planet_id, scientist_id
              FROM missions
              WHERE planet_id = $1
              ORDER BY id",
        )
        .bind(planet_id.into_inner())
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(Mission::from).collect())
    }
}

/// A row from the `missions` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct MissionRow {
    /// Auto-incremented mission id.
    pub id: i64,
    /// Mission name.
    pub name: String,
    /// Target planet id.
    pub planet_id: i64,
    /// Undertaking scientist id.
    pub scientist_id: i64,
}

impl From<MissionRow> for Mission {
    fn from(row: MissionRow) -> Self {
        Self {
            id: MissionId(row.id),
            name: row.name,
            planet_id: PlanetId(row.planet_id),
            scientist_id: ScientistId(row.scientist_id),
        }
    }
}

/// A flat row from the missions-join-planets query.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct MissionPlanetRow {
    /// Mission id.
    pub mission_id: i64,
    /// Mission name.
    pub mission_name: String,
    /// Target planet id.
    pub planet_id: i64,
    /// Undertaking scientist id.
    pub scientist_id: i64,
    /// Joined planet name.
    pub planet_name: Option<String>,
    /// Joined planet distance from Earth.
    pub distance_from_earth: Option<i64>,
    /// Joined planet nearest star.
    pub nearest_star: Option<String>,
}

impl From<MissionPlanetRow> for MissionWithPlanet {
    fn from(row: MissionPlanetRow) -> Self {
        let mission = Mission {
            id: MissionId(row.mission_id),
            name: row.mission_name,
            planet_id: PlanetId(row.planet_id),
            scientist_id: ScientistId(row.scientist_id),
        };
        let planet = Planet {
            id: PlanetId(row.planet_id),
            name: row.planet_name,
            distance_from_earth: row.distance_from_earth,
            nearest_star: row.nearest_star,
        };
        Self::new(mission, planet)
    }
}

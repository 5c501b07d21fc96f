//! Operations on the `planets` table.
//!
//! Planets are the unvalidated side of the model: every field is
//! accepted as-is. Deleting a planet cascades to its missions through
//! the `fk_missions_planet_id_planets` constraint, so a mission can
//! never reference a deleted planet.

use expedition_types::{NewPlanet, Planet, PlanetId};
use sqlx::PgPool;

use crate::error::DbError;

/// Operations on the `planets` table.
pub struct PlanetStore<'a> {
    pool: &'a PgPool,
}

impl<'a> PlanetStore<'a> {
    /// Create a new planet store bound to a connection pool.
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all planets ordered by id.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if the query fails.
    pub async fn list(&self) -> Result<Vec<Planet>, DbError> {
        let rows = sqlx::query_as::<_, PlanetRow>(
            r"SELECT id, name, distance_from_earth, nearest_star
              FROM planets
              ORDER BY id",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(Planet::from).collect())
    }

    /// Fetch a single planet by id, returning `None` if absent.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if the query fails.
    pub async fn get(&self, id: PlanetId) -> Result<Option<Planet>, DbError> {
        let row = sqlx::query_as::<_, PlanetRow>(
            r"SELECT id, name, distance_from_earth, nearest_star
              FROM planets
              WHERE id = $1",
        )
        .bind(id.into_inner())
        .fetch_optional(self.pool)
        .await?;

        Ok(row.map(Planet::from))
    }

    /// Insert a planet and return the stored record with its
    /// database-assigned id. A single atomic statement.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if the insert fails.
    pub async fn insert(&self, planet: &NewPlanet) -> Result<Planet, DbError> {
        let row = sqlx::query_as::<_, PlanetRow>(
            r"INSERT INTO planets (name, distance_from_earth, nearest_star)
              VALUES ($1, $2, $3)
              RETURNING id, name, distance_from_earth, nearest_star",
        )
        .bind(planet.name.as_deref())
        .bind(planet.distance_from_earth)
        .bind(planet.nearest_star.as_deref())
        .fetch_one(self.pool)
        .await?;

        tracing::debug!(id = row.id, "Inserted planet");
        Ok(Planet::from(row))
    }

    /// Delete a planet, cascading to its missions. Returns `false` if no
    /// row had that id.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if the delete fails.
    pub async fn delete(&self, id: PlanetId) -> Result<bool, DbError> {
        let result = sqlx::query(r"DELETE FROM planets WHERE id = $1")
            .bind(id.into_inner())
            .execute(self.pool)
            .await?;

        let deleted = result.rows_affected() > 0;
        if deleted {
            tracing::debug!(id = id.into_inner(), "Deleted planet (missions cascaded)");
        }
        Ok(deleted)
    }
}

/// A row from the `planets` table.
///
/// Uses runtime types rather than compile-time checked types to avoid
/// requiring a live database during builds.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PlanetRow {
    /// Auto-incremented planet id.
    pub id: i64,
    /// Planet name.
    pub name: Option<String>,
    /// Distance from Earth in light-years.
    pub distance_from_earth: Option<i64>,
    /// Name of the nearest star.
    pub nearest_star: Option<String>,
}

impl From<PlanetRow> for Planet {
    fn from(row: PlanetRow) -> Self {
        Self {
            id: PlanetId(row.id),
            name: row.name,
            distance_from_earth: row.distance_from_earth,
            nearest_star: row.nearest_star,
        }
    }
}

//! Operations on the `scientists` table.
//!
//! Callers validate write payloads before these methods run; the store
//! itself only issues single atomic statements, so a rejected payload
//! never reaches `PostgreSQL` and a failed statement persists nothing.
//! Deleting a scientist cascades to their missions through the
//! `fk_missions_scientist_id_scientists` constraint: a mission cannot
//! outlive its scientist.

use expedition_types::{NewScientist, Scientist, ScientistId, ScientistUpdate};
use sqlx::PgPool;

use crate::error::DbError;

/// Operations on the `scientists` table.
pub struct ScientistStore<'a> {
    pool: &'a PgPool,
}

impl<'a> ScientistStore<'a> {
    /// Create a new scientist store bound to a connection pool.
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all scientists ordered by id.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if the query fails.
    pub async fn list(&self) -> Result<Vec<Scientist>, DbError> {
        let rows = sqlx::query_as::<_, ScientistRow>(
            r"SELECT id, name, field_of_study
              FROM scientists
              ORDER BY id",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(Scientist::from).collect())
    }

    /// Fetch a single scientist by id, returning `None` if absent.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if the query fails.
    pub async fn get(&self, id: ScientistId) -> Result<Option<Scientist>, DbError> {
        let row = sqlx::query_as::<_, ScientistRow>(
            r"SELECT id, name, field_of_study
              FROM scientists
              WHERE id = $1",
        )
        .bind(id.into_inner())
        .fetch_optional(self.pool)
        .await?;

        Ok(row.map(Scientist::from))
    }

    /// Insert a scientist and return the stored record with its
    /// database-assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if the insert fails.
    pub async fn insert(&self, scientist: &NewScientist) -> Result<Scientist, DbError> {
        let row = sqlx::query_as::<_, ScientistRow>(
            r"INSERT INTO scientists (name, field_of_study)
              VALUES ($1, $2)
              RETURNING id, name, field_of_study",
        )
        .bind(&scientist.name)
        .bind(&scientist.field_of_study)
        .fetch_one(self.pool)
        .await?;

        tracing::debug!(id = row.id, "Inserted scientist");
        Ok(Scientist::from(row))
    }

    /// Replace both mutable fields of a scientist, returning `None` if
    /// no row had that id. Whole-field replacement only, no merge.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if the update fails.
    pub async fn update(
        &self,
        id: ScientistId,
        update: &ScientistUpdate,
    ) -> Result<Option<Scientist>, DbError> {
        let row = sqlx::query_as::<_, ScientistRow>(
            r"UPDATE scientists
              SET name = $2, field_of_study = $3
              WHERE id = $1
              RETURNING id, name, field_of_study",
        )
        .bind(id.into_inner())
        .bind(&update.name)
        .bind(&update.field_of_study)
        .fetch_optional(self.pool)
        .await?;

        Ok(row.map(Scientist::from))
    }

    /// Delete a scientist, cascading to their missions. Returns `false`
    /// if no row had that id.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if the delete fails.
    pub async fn delete(&self, id: ScientistId) -> Result<bool, DbError> {
        let result = sqlx::query(r"DELETE FROM scientists WHERE id = $1")
            .bind(id.into_inner())
            .execute(self.pool)
            .await?;

        let deleted = result.rows_affected() > 0;
        if deleted {
            tracing::debug!(
                id = id.into_inner(),
                "Deleted scientist (missions cascaded)"
            );
        }
        Ok(deleted)
    }
}

/// A row from the `scientists` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ScientistRow {
    /// Auto-incremented scientist id.
    pub id: i64,
    /// Scientist name.
    pub name: String,
    /// Field of study.
    pub field_of_study: String,
}

impl From<ScientistRow> for Scientist {
    fn from(row: ScientistRow) -> Self {
        Self {
            id: ScientistId(row.id),
            name: row.name,
            field_of_study: row.field_of_study,
        }
    }
}

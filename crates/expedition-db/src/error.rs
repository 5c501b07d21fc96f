//! Error types for the data layer.
//!
//! All errors are propagated via [`DbError`], which wraps the underlying
//! [`sqlx`] errors with additional context about which operation failed.
//! Referential integrity is not pre-validated here: a foreign key
//! pointing at a nonexistent row surfaces from `PostgreSQL` itself and is
//! mapped to [`DbError::ForeignKey`] so callers can tell it apart from a
//! server fault. Lookups report absence as `Option`/`bool` rather than an
//! error; what absence means is the caller's decision.

/// Errors that can occur in the data layer.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    /// A `PostgreSQL` operation failed.
    #[error("PostgreSQL error: {0}")]
    Postgres(#[from] sqlx::Error),

    /// A `PostgreSQL` migration failed.
    #[error("PostgreSQL migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// A foreign key constraint was violated: the write referenced a row
    /// that does not exist. SQLSTATE 23503.
    #[error("foreign key violation: {constraint}")]
    ForeignKey {
        /// The name of the violated constraint.
        constraint: String,
    },

    /// A configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// SQLSTATE class for foreign key violations.
const FOREIGN_KEY_VIOLATION: &str = "23503";

/// Map a write error, promoting foreign key violations to
/// [`DbError::ForeignKey`].
pub(crate) fn map_write_error(err: sqlx::Error) -> DbError {
    if let sqlx::Error::Database(ref db_err) = err
        && db_err.code().as_deref() == Some(FOREIGN_KEY_VIOLATION)
    {
        return DbError::ForeignKey {
            constraint: db_err.constraint().unwrap_or("unknown").to_owned(),
        };
    }
    DbError::Postgres(err)
}

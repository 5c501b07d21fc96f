//! Shared application state for the API server.
//!
//! [`AppState`] holds the `PostgreSQL` pool the handlers read and write
//! through. There is no in-process cache and no background task: every
//! request is one atomic operation against the durable store.

use expedition_db::PostgresPool;

/// Shared state for the Axum application.
///
/// Wrapped in [`Arc`](std::sync::Arc) and injected via Axum's `State`
/// extractor.
#[derive(Clone)]
pub struct AppState {
    /// Connection pool to the durable store.
    pub db: PostgresPool,
}

impl AppState {
    /// Create application state around a connected pool.
    pub const fn new(db: PostgresPool) -> Self {
        Self { db }
    }
}

//! Axum router construction for the Expedition API.
//!
//! Assembles all routes into a single [`Router`] with CORS middleware
//! enabled for cross-origin consumers and request tracing on every
//! route.

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router for the Expedition API.
///
/// The router includes:
/// - `GET /` -- minimal HTML index page
/// - `GET /planets` -- list planets
/// - `GET /scientists` -- list scientists
/// - `POST /scientists` -- create scientist
/// - `GET /scientists/{id}` -- single scientist with missions
/// - `PATCH /scientists/{id}` -- update scientist
/// - `DELETE /scientists/{id}` -- delete scientist (cascades missions)
/// - `POST /missions` -- create mission
///
/// CORS is configured to allow any origin for development. In
/// production this should be restricted.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Index page
        .route("/", get(handlers::index))
        // REST API
        .route("/planets", get(handlers::list_planets))
        .route(
            "/scientists",
            get(handlers::list_scientists).post(handlers::create_scientist),
        )
        .route(
            "/scientists/{id}",
            get(handlers::get_scientist)
                .patch(handlers::update_scientist)
                .delete(handlers::delete_scientist),
        )
        .route("/missions", post(handlers::create_mission))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

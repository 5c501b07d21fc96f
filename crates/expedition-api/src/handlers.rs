//! REST API endpoint handlers.
//!
//! Each handler maps one HTTP verb/path onto a store operation, with
//! payload validation before any write and a per-endpoint view struct in
//! the response. Serialization is one hop deep: embedded parents never
//! carry their missions, embedded missions never carry the parent they
//! sit under.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/` | Minimal HTML index page |
//! | `GET` | `/planets` | List all planets (no missions) |
//! | `GET` | `/scientists` | List all scientists (no missions) |
//! | `POST` | `/scientists` | Create a scientist |
//! | `GET` | `/scientists/{id}` | Scientist with missions + planets |
//! | `PATCH` | `/scientists/{id}` | Replace both scientist fields |
//! | `DELETE` | `/scientists/{id}` | Delete scientist, cascade missions |
//! | `POST` | `/missions` | Create a mission |

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse};
use expedition_db::{MissionStore, PlanetStore, ScientistStore};
use expedition_types::{
    MissionDetail, NewMission, NewScientist, PlanetView, ScientistDetail, ScientistId,
    ScientistUpdate, ScientistView,
};
use validator::Validate;

use crate::error::ApiError;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// GET / -- minimal HTML index page
// ---------------------------------------------------------------------------

/// Serve a minimal HTML page listing the API endpoints.
pub async fn index() -> impl IntoResponse {
    Html(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>Expedition API</title>
    <style>
        body {
            background: #0d1117;
            color: #c9d1d9;
            font-family: 'Cascadia Code', 'Fira Code', 'Consolas', monospace;
            padding: 2rem;
            max-width: 800px;
            margin: 0 auto;
        }
        h1 { color: #58a6ff; margin-bottom: 0.25rem; }
        .subtitle { color: #8b949e; margin-top: 0; }
        a { color: #58a6ff; text-decoration: none; }
        a:hover { text-decoration: underline; }
        ul { list-style: none; padding: 0; }
        li { padding: 0.3rem 0; }
        .verb { color: #7ee787; font-weight: bold; }
    </style>
</head>
<body>
    <h1>Expedition API</h1>
    <p class="subtitle">Scientists, planets, and the missions linking them</p>

    <h2>Endpoints</h2>
    <ul>
        <li><span class="verb">GET</span> <a href="/planets">/planets</a> -- List planets</li>
        <li><span class="verb">GET</span> <a href="/scientists">/scientists</a> -- List scientists</li>
        <li><span class="verb">POST</span> /scientists -- Create a scientist</li>
        <li><span class="verb">GET</span> /scientists/{id} -- Scientist with missions</li>
        <li><span class="verb">PATCH</span> /scientists/{id} -- Update a scientist</li>
        <li><span class="verb">DELETE</span> /scientists/{id} -- Delete a scientist</li>
        <li><span class="verb">POST</span> /missions -- Create a mission</li>
    </ul>
</body>
</html>"#,
    )
}

// ---------------------------------------------------------------------------
// GET /planets -- list planets
// ---------------------------------------------------------------------------

/// List all planets. Missions are excluded from each item to bound the
/// payload size of the list endpoint.
pub async fn list_planets(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    let planets = PlanetStore::new(state.db.pool()).list().await?;
    let views: Vec<PlanetView> = planets.into_iter().map(PlanetView::from).collect();
    Ok(Json(views))
}

// ---------------------------------------------------------------------------
// GET /scientists -- list scientists
// ---------------------------------------------------------------------------

/// List all scientists. Missions are excluded from each item.
pub async fn list_scientists(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    let scientists = ScientistStore::new(state.db.pool()).list().await?;
    let views: Vec<ScientistView> = scientists.into_iter().map(ScientistView::from).collect();
    Ok(Json(views))
}

// ---------------------------------------------------------------------------
// POST /scientists -- create scientist
// ---------------------------------------------------------------------------

/// Create a scientist. The payload is validated before the insert, so a
/// rejected write persists nothing. Returns 201 Created.
pub async fn create_scientist(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<NewScientist>,
) -> Result<impl IntoResponse, ApiError> {
    payload.validate()?;

    let scientist = ScientistStore::new(state.db.pool())
        .insert(&payload)
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(ScientistView::from(scientist)),
    ))
}

// ---------------------------------------------------------------------------
// GET /scientists/{id} -- single scientist, one-hop expansion
// ---------------------------------------------------------------------------

/// Return a scientist with their missions, each mission carrying its
/// planet but no back-reference to the scientist.
pub async fn get_scientist(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let pool = state.db.pool();
    let id = ScientistId(id);

    let scientist = ScientistStore::new(pool)
        .get(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("scientist {id}")))?;

    let missions = MissionStore::new(pool)
        .for_scientist_with_planets(id)
        .await?;

    Ok(Json(ScientistDetail::new(scientist, missions)))
}

// ---------------------------------------------------------------------------
// PATCH /scientists/{id} -- whole-field replacement
// ---------------------------------------------------------------------------

/// Replace a scientist's name and field of study. Both fields are
/// required and revalidated; there is no partial merge. Returns 202
/// Accepted.
pub async fn update_scientist(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(payload): Json<ScientistUpdate>,
) -> Result<impl IntoResponse, ApiError> {
    payload.validate()?;

    let id = ScientistId(id);
    let scientist = ScientistStore::new(state.db.pool())
        .update(id, &payload)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("scientist {id}")))?;

    Ok((
        StatusCode::ACCEPTED,
        Json(ScientistView::from(scientist)),
    ))
}

// ---------------------------------------------------------------------------
// DELETE /scientists/{id} -- delete, cascading missions
// ---------------------------------------------------------------------------

/// Delete a scientist. All of their missions are removed in the same
/// statement by the cascade rule. Returns 204 No Content.
pub async fn delete_scientist(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let id = ScientistId(id);
    let deleted = ScientistStore::new(state.db.pool()).delete(id).await?;
    if !deleted {
        return Err(ApiError::NotFound(format!("scientist {id}")));
    }
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// POST /missions -- create mission
// ---------------------------------------------------------------------------

/// Create a mission. The payload is validated before the insert (name
/// non-empty, both foreign keys present); whether the referenced rows
/// exist is left to the storage engine and surfaces as a 409. Returns
/// 201 Created with both parents embedded, neither carrying missions.
pub async fn create_mission(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<NewMission>,
) -> Result<impl IntoResponse, ApiError> {
    payload.validate()?;
    let (Some(planet_id), Some(scientist_id)) = (payload.planet_id, payload.scientist_id) else {
        return Err(ApiError::Internal(String::from(
            "validated mission payload missing a foreign key",
        )));
    };

    let pool = state.db.pool();
    let mission = MissionStore::new(pool)
        .insert(&payload.name, planet_id, scientist_id)
        .await?;

    let planet = PlanetStore::new(pool)
        .get(planet_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("planet {planet_id}")))?;
    let scientist = ScientistStore::new(pool)
        .get(scientist_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("scientist {scientist_id}")))?;

    Ok((
        StatusCode::CREATED,
        Json(MissionDetail::new(mission, planet, scientist)),
    ))
}

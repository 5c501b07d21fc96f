//! REST API server for the Expedition data service.
//!
//! This crate provides an Axum HTTP server exposing scientists, planets,
//! and the missions that link them over plain JSON endpoints.
//!
//! # Architecture
//!
//! Handlers validate write payloads before anything touches the store,
//! call the per-table stores in `expedition-db`, and serialize responses
//! through explicit per-endpoint view structs (one relationship hop, no
//! cycles). Each write is a single atomic statement; there is no
//! in-process cache or background work.
//!
//! # Modules
//!
//! - [`handlers`] -- endpoint handlers
//! - [`router`] -- route assembly with CORS and tracing middleware
//! - [`state`] -- shared application state (the database pool)
//! - [`error`] -- HTTP error mapping
//! - [`server`] -- server lifecycle

pub mod error;
pub mod handlers;
pub mod router;
pub mod server;
pub mod state;

// Re-export primary types for convenience.
pub use error::ApiError;
pub use router::build_router;
pub use server::{ServerConfig, ServerError, start_server};
pub use state::AppState;

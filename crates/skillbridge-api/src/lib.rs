//! # skillbridge-api
//!
//! HTTP API layer for the SkillBridge activity feed built on Axum.
//!
//! Provides the `/api/activities` endpoints, bearer-token extraction,
//! middleware (CORS, compression, logging), DTOs, and error mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, run_server};
pub use state::AppState;

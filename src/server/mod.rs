//! HTTP server for the milestone service.
//!
//! # Endpoints
//!
//! - `GET /`       — Fixed list of CI/CD pipeline milestones
//! - `GET /health` — Liveness probe

pub mod routes;

pub use routes::app_router;

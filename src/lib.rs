//! # cicd-pipeline
//!
//! A minimal HTTP service that reports the milestones of a CI/CD pipeline
//! setup as a fixed, ordered list of JSON messages.
//!
//! The crate is split into the milestone data model ([`milestones`]) and the
//! axum HTTP layer ([`server`]); the `server` binary wires them together.

pub mod milestones;
pub mod server;

pub use milestones::{pipeline_milestones, Message};

/// Library version reported by the health endpoint.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

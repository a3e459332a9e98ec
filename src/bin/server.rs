//! cicd-pipeline HTTP server binary.
//!
//! Starts an axum HTTP server that serves the fixed CI/CD pipeline milestone
//! list at the root path.
//!
//! # Environment Variables
//!
//! - `PORT` — HTTP port (default: 8080)
//! - `RUST_LOG` — Tracing filter (default: "info")
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin server
//! ```

use cicd_pipeline::server::app_router;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,cicd_pipeline=debug".into()),
        )
        .init();

    let port = std::env::var("PORT").unwrap_or_else(|_| "8080".to_string());
    let bind_addr = format!("0.0.0.0:{}", port);

    let app = app_router();

    tracing::info!("cicd-pipeline server starting on {}", bind_addr);
    tracing::info!("Endpoints:");
    tracing::info!("  GET /        — pipeline milestone list");
    tracing::info!("  GET /health  — liveness probe");

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .expect("Failed to bind");

    axum::serve(listener, app)
        .await
        .expect("Server failed");
}

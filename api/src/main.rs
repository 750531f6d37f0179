//! Tripline API Server
//!
//! Trip catalog and client enrollment for group travel.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{
    routing::{delete, get, post},
    Json, Router,
};
use sea_orm::Database;
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod entity;
mod error;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::PostgresTravelStore;
use app::{ClientService, EnrollmentService, TripService};
use config::Config;
use domain::ports::TravelStore;

/// Application state shared across all handlers
///
/// Generic over the storage backend so the router can be exercised against
/// the in-memory store in tests.
pub struct AppState<S: TravelStore> {
    pub trip_service: Arc<TripService<S>>,
    pub enrollment_service: Arc<EnrollmentService<S>>,
    pub client_service: Arc<ClientService<S>>,
}

impl<S: TravelStore> AppState<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self {
            trip_service: Arc::new(TripService::new(store.clone())),
            enrollment_service: Arc::new(EnrollmentService::new(store.clone())),
            client_service: Arc::new(ClientService::new(store)),
        }
    }
}

impl<S: TravelStore> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            trip_service: self.trip_service.clone(),
            enrollment_service: self.enrollment_service.clone(),
            client_service: self.client_service.clone(),
        }
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

pub fn build_router<S: TravelStore>(state: AppState<S>) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health))
        // Trips
        .route("/api/trips", get(handlers::list_trips::<S>))
        .route(
            "/api/trips/:id/clients",
            post(handlers::assign_client_to_trip::<S>),
        )
        // Clients
        .route("/api/clients/:id", delete(handlers::remove_client::<S>))
        // Middleware
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tripline_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Tripline API...");

    // Load configuration
    let config = Config::from_env()?;

    // Connect to PostgreSQL
    tracing::info!("Connecting to database...");
    let db = Database::connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Database connected");

    let store = Arc::new(PostgresTravelStore::new(db));
    if config.run_migrations {
        store
            .apply_schema()
            .await
            .context("Failed to apply database schema")?;
        tracing::info!("Database schema applied");
    }

    let app = build_router(AppState::new(store));

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}

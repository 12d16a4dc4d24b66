//! Moderation API Server
//!
//! Lists pictures awaiting human review and records approve/reject decisions.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{middleware, routing::get, Json, Router};
use sea_orm::Database;
use serde::Serialize;
use tower::ServiceBuilder;
use tower_governor::governor::GovernorConfigBuilder;
use tower_governor::key_extractor::PeerIpKeyExtractor;
use tower_governor::GovernorLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod auth;
mod config;
mod domain;
mod entity;
mod error;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::{InMemoryItemRepository, PostgresItemRepository};
use app::{DecisionService, ListingService};
use config::Config;
use domain::ports::ItemRepository;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub listing_service: Arc<ListingService<dyn ItemRepository>>,
    pub decision_service: Arc<DecisionService<dyn ItemRepository>>,
    /// SHA-256 of the configured admin token, if any
    pub admin_token_hash: Option<String>,
}

impl AppState {
    pub fn new(items: Arc<dyn ItemRepository>, config: &Config) -> Self {
        Self {
            listing_service: Arc::new(ListingService::new(items.clone())),
            decision_service: Arc::new(DecisionService::new(items)),
            admin_token_hash: config.admin_token.as_deref().map(auth::hash_token),
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

/// Build the router for the configured service role
pub fn build_router(state: AppState, config: &Config) -> anyhow::Result<Router> {
    let mut moderation = Router::new();

    if config.role.serves_listing() {
        moderation = moderation.route("/admin", get(handlers::list_pending));
    }

    if config.role.serves_decision() {
        let mut decision = Router::new().route("/moderate", get(handlers::moderate));

        // Keyed on the peer address, so the server must be started with connect info
        if config.rate_limit.enabled {
            let governor_config = Arc::new(
                GovernorConfigBuilder::default()
                    .key_extractor(PeerIpKeyExtractor)
                    .per_second(config.rate_limit.per_second)
                    .burst_size(config.rate_limit.burst_size)
                    .finish()
                    .context("invalid rate limit settings")?,
            );
            decision = decision.layer(GovernorLayer {
                config: governor_config,
            });
        }

        moderation = moderation.merge(decision);
    }

    let moderation = moderation.route_layer(middleware::from_fn_with_state(
        state.clone(),
        auth::admin_token_middleware,
    ));

    Ok(Router::new()
        // Health check (no auth)
        .route("/health", get(health))
        .merge(moderation)
        .layer(
            ServiceBuilder::new().layer(TraceLayer::new_for_http()).layer(
                CorsLayer::new()
                    .allow_origin(Any)
                    .allow_methods(Any)
                    .allow_headers(Any),
            ),
        )
        .with_state(state))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,moderation_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env();
    tracing::info!(role = %config.role, "Starting moderation API...");

    if config.telemetry.is_configured() {
        tracing::info!(
            app_name = config.telemetry.app_name.as_deref().unwrap_or("moderation-api"),
            "Telemetry credentials configured"
        );
    }

    let items: Arc<dyn ItemRepository> = match &config.database_url {
        Some(url) => {
            tracing::info!("Connecting to database...");
            let db = Database::connect(url.as_str())
                .await
                .context("failed to connect to database")?;
            tracing::info!("Database connected");
            Arc::new(PostgresItemRepository::new(db))
        }
        None => {
            tracing::warn!("DATABASE_URL not set, using in-memory store (state is lost on restart)");
            Arc::new(InMemoryItemRepository::new())
        }
    };

    if config.admin_token.is_none() {
        tracing::warn!("ADMIN_TOKEN not set, moderation routes are unauthenticated");
    }

    let state = AppState::new(items, &config);
    let app = build_router(state, &config)?;

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .context("server error")?;

    Ok(())
}

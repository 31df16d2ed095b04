//! hnrss API Server
//!
//! Serves Hacker News activity (new stories, comments, user activity, hiring
//! threads) as RSS, Atom and JSON Feed, backed by the Algolia HN Search API.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::Uri,
    routing::get,
    Router,
};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod error;
mod feed;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::AlgoliaClient;
use app::{FeedParams, FeedRoute, FeedService};
use config::Config;
use domain::entities::FeedFormat;
use domain::ports::SearchClient;

/// Application state shared across all handlers
pub struct AppState<SC>
where
    SC: SearchClient,
{
    pub feed_service: Arc<FeedService<SC>>,
    pub config: Config,
}

impl<SC> Clone for AppState<SC>
where
    SC: SearchClient,
{
    fn clone(&self) -> Self {
        Self {
            feed_service: self.feed_service.clone(),
            config: self.config.clone(),
        }
    }
}

/// Build the router: site routes plus every feed route in every format
pub fn build_router<SC>(state: AppState<SC>) -> Router
where
    SC: SearchClient + 'static,
{
    let mut router = Router::new()
        .route("/", get(handlers::root::<SC>))
        .route("/health", get(handlers::health))
        .route("/robots.txt", get(handlers::robots))
        .route("/favicon.ico", get(handlers::favicon));

    for route in FeedRoute::all() {
        for format in FeedFormat::ALL {
            let path = format!("{}{}", route.definition().path, format.path_suffix());
            router = router.route(
                &path,
                get(
                    move |state: State<AppState<SC>>,
                          uri: Uri,
                          params: Result<Query<FeedParams>, QueryRejection>| {
                        handlers::get_feed(state, uri, params, route, format)
                    },
                ),
            );
        }
    }

    router
        // Middleware
        .layer(CompressionLayer::new())
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
                .unwrap_or_else(|_| "info,hnrss_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting hnrss API...");

    // Load configuration
    let config = Config::from_env();
    let addr: SocketAddr = config
        .bind_addr
        .parse()
        .with_context(|| format!("Invalid BIND_ADDR: {}", config.bind_addr))?;

    // Create adapters and services
    let search = Arc::new(
        AlgoliaClient::new(config.algolia_url.clone(), config.upstream_timeout)
            .context("Failed to build search client")?,
    );
    let feed_service = Arc::new(FeedService::new(search));

    let state = AppState {
        feed_service,
        config,
    };
    let app = build_router(state);

    // Start server
    tracing::info!("Listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Server exiting");
    Ok(())
}

/// Resolves on Ctrl+C, or SIGTERM on unix
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutting down server...");
}

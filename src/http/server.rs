//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (request ID, tracing, timeout, metrics)
//! - Hold the current configuration and registry snapshot
//! - Apply configuration reloads
//! - Serve until the shutdown signal fires

use std::sync::Arc;
use std::time::{Duration, Instant};

use arc_swap::ArcSwap;
use axum::{
    body::Body,
    extract::MatchedPath,
    http::Request,
    middleware::{self, Next},
    response::Response,
    routing::{get, put},
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::{broadcast, mpsc};
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::AppConfig;
use crate::http::handlers;
use crate::http::request::{request_id, MakeRequestUuid};
use crate::observability::metrics;
use crate::routing::{RegistryError, RouteRegistry};
use crate::settings::{SettingsStore, UserSettings};

/// Configuration together with the registry compiled from it.
#[derive(Debug)]
pub struct Snapshot {
    pub config: AppConfig,
    pub registry: RouteRegistry,
}

impl Snapshot {
    pub fn new(config: AppConfig) -> Result<Self, RegistryError> {
        let registry = RouteRegistry::new(config.routes.clone())?;
        Ok(Self { config, registry })
    }
}

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub inner: Arc<ArcSwap<Snapshot>>,
    pub settings: Arc<SettingsStore>,
}

impl AppState {
    pub fn new(snapshot: Snapshot) -> Self {
        Self {
            inner: Arc::new(ArcSwap::from_pointee(snapshot)),
            settings: Arc::new(SettingsStore::new(UserSettings::default())),
        }
    }

    /// Build a new registry from `config` and swap it in.
    ///
    /// On error the current snapshot stays in place.
    pub fn reload(&self, config: AppConfig) -> Result<(), RegistryError> {
        let snapshot = Snapshot::new(config)?;
        let ignored = startup_only_changes(&self.inner.load().config, &snapshot.config);
        if !ignored.is_empty() {
            tracing::warn!(
                sections = ?ignored,
                "Reload changes settings read only at startup. Restart to apply them."
            );
        }

        let routes = snapshot.registry.len();
        self.inner.store(Arc::new(snapshot));
        tracing::info!(routes, "Route table reloaded");
        Ok(())
    }
}

/// Sections of `next` that differ from `current` but are only read when the
/// server starts: the listener, the timeout layer and the metrics exporter.
pub fn startup_only_changes(current: &AppConfig, next: &AppConfig) -> Vec<&'static str> {
    let mut changed = Vec::new();
    if current.listener != next.listener {
        changed.push("listener");
    }
    if current.timeouts != next.timeouts {
        changed.push("timeouts");
    }
    if current.observability != next.observability {
        changed.push("observability");
    }
    changed
}

/// HTTP server for the navigation API.
pub struct HttpServer {
    router: Router,
    state: AppState,
}

impl HttpServer {
    /// Create a new HTTP server over the given state.
    pub fn new(state: AppState) -> Self {
        let request_timeout = Duration::from_secs(state.inner.load().config.timeouts.request_secs);
        let router = build_router(state.clone(), request_timeout);
        Self { router, state }
    }

    /// Run the server, accepting connections on the given listener.
    ///
    /// Configurations received on `config_updates` replace the route table.
    pub async fn run(
        self,
        listener: TcpListener,
        mut config_updates: mpsc::UnboundedReceiver<AppConfig>,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        let state = self.state.clone();
        tokio::spawn(async move {
            while let Some(config) = config_updates.recv().await {
                match state.reload(config) {
                    Ok(()) => metrics::record_reload("applied"),
                    Err(e) => {
                        metrics::record_reload("rejected");
                        tracing::error!(error = %e, "Reload rejected. Keeping current route table.");
                    }
                }
            }
        });

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }
}

/// Build the Axum router with all middleware layers.
#[allow(deprecated)]
pub fn build_router(state: AppState, request_timeout: Duration) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/api/routes", get(handlers::list_routes))
        .route("/api/routes/sidebar", get(handlers::sidebar_routes))
        .route("/api/routes/header", get(handlers::header_routes))
        .route("/api/routes/lookup", get(handlers::lookup_route))
        .route("/api/active", get(handlers::active))
        .route("/api/breadcrumbs", get(handlers::breadcrumbs))
        .route("/api/settings/tabs", get(handlers::settings_tabs))
        .route("/api/navigation", get(handlers::navigation))
        .route("/api/pages", get(handlers::page))
        .route("/api/user/settings", get(handlers::user_settings))
        .route("/api/user/settings/{field}", put(handlers::update_setting))
        .with_state(state)
        .layer(middleware::from_fn(track_metrics))
        .layer(TimeoutLayer::new(request_timeout))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                tracing::info_span!(
                    "request",
                    method = %request.method(),
                    uri = %request.uri(),
                    request_id = %request_id(request),
                )
            }),
        )
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}

/// Record request latency per matched route.
async fn track_metrics(request: Request<Body>, next: Next) -> Response {
    let start = Instant::now();
    let endpoint = request
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| "unmatched".to_string());

    let response = next.run(request).await;
    metrics::record_request(endpoint, response.status().as_u16(), start);
    response
}

//! API handlers.
//!
//! Each handler loads the current snapshot once and answers from it, so a
//! reload mid-request cannot mix two route tables in one response.

use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::http::response::ApiError;
use crate::http::server::AppState;
use crate::observability::metrics;
use crate::pages::{self, ComposedPage};
use crate::routing::breadcrumbs;
use crate::routing::navigation::{self, active_tab, partition_sidebar, SettingsView};
use crate::routing::{Breadcrumb, NavigationSnapshot, Route};
use crate::settings::{SettingField, UserSettings};

/// Header whose presence marks the caller as signed in.
pub const SESSION_HEADER: &str = "x-session";

fn root() -> String {
    "/".to_string()
}

#[derive(Debug, Deserialize)]
pub struct PathQuery {
    #[serde(default = "root")]
    pub path: String,
}

#[derive(Debug, Deserialize)]
pub struct NavigationQuery {
    #[serde(default = "root")]
    pub path: String,
    #[serde(default)]
    pub collapsed: bool,
}

#[derive(Debug, Deserialize)]
pub struct ActiveQuery {
    pub route: String,
    #[serde(default = "root")]
    pub path: String,
}

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub version: &'static str,
    pub routes: usize,
}

#[derive(Debug, Serialize)]
pub struct ActiveStatus {
    pub route: String,
    pub path: String,
    pub active: bool,
}

#[derive(Debug, Deserialize)]
pub struct SettingUpdate {
    pub value: bool,
}

pub async fn health(State(state): State<AppState>) -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        routes: state.inner.load().registry.len(),
    })
}

pub async fn list_routes(State(state): State<AppState>) -> Json<Vec<Route>> {
    metrics::record_query("routes");
    Json(state.inner.load().registry.routes().to_vec())
}

pub async fn sidebar_routes(
    State(state): State<AppState>,
) -> Result<Json<serde_json::Value>, ApiError> {
    metrics::record_query("sidebar");
    let snapshot = state.inner.load();
    let groups = partition_sidebar(
        snapshot.registry.sidebar_routes(),
        snapshot.config.navigation.footer_icons.as_slice(),
    );
    let value = serde_json::to_value(&groups).map_err(|e| ApiError::Internal(e.to_string()))?;
    Ok(Json(value))
}

pub async fn header_routes(State(state): State<AppState>) -> Json<Vec<Route>> {
    metrics::record_query("header");
    let snapshot = state.inner.load();
    Json(snapshot.registry.header_routes().into_iter().cloned().collect())
}

pub async fn lookup_route(
    State(state): State<AppState>,
    Query(query): Query<PathQuery>,
) -> Result<Json<Route>, ApiError> {
    metrics::record_query("lookup");
    let snapshot = state.inner.load();
    match snapshot.registry.get_route_by_path(&query.path) {
        Some(route) => Ok(Json(route.clone())),
        None => {
            metrics::record_unknown_path();
            Err(ApiError::NotFound(query.path))
        }
    }
}

pub async fn active(
    State(state): State<AppState>,
    Query(query): Query<ActiveQuery>,
) -> Json<ActiveStatus> {
    metrics::record_query("active");
    let active = state
        .inner
        .load()
        .registry
        .is_route_active(&query.route, &query.path);
    Json(ActiveStatus {
        route: query.route,
        path: query.path,
        active,
    })
}

pub async fn breadcrumbs(
    State(state): State<AppState>,
    Query(query): Query<PathQuery>,
) -> Json<Vec<Breadcrumb>> {
    metrics::record_query("breadcrumbs");
    let snapshot = state.inner.load();
    if snapshot.registry.get_route_by_path(&query.path).is_none() {
        metrics::record_unknown_path();
    }
    Json(breadcrumbs::build(
        &snapshot.registry,
        &query.path,
        &snapshot.config.navigation.home_title,
    ))
}

pub async fn settings_tabs(
    State(state): State<AppState>,
    Query(query): Query<PathQuery>,
) -> Json<SettingsView> {
    metrics::record_query("settings_tabs");
    let snapshot = state.inner.load();
    let tabs = navigation::settings_tabs(&snapshot.registry, &snapshot.config.navigation.settings_path);
    let active = active_tab(&tabs, &query.path).map(|tab| tab.path.clone());
    Json(SettingsView { tabs, active })
}

pub async fn navigation(
    State(state): State<AppState>,
    Query(query): Query<NavigationQuery>,
) -> Json<NavigationSnapshot> {
    metrics::record_query("navigation");
    let snapshot = state.inner.load();
    let view = navigation::snapshot(
        &snapshot.registry,
        &snapshot.config.navigation,
        &query.path,
        query.collapsed,
    );
    if view.route.is_none() {
        metrics::record_unknown_path();
    }
    Json(view)
}

pub async fn page(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<NavigationQuery>,
) -> (StatusCode, Json<ComposedPage>) {
    metrics::record_query("page");
    let authenticated = headers
        .get(SESSION_HEADER)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| !v.trim().is_empty());

    let snapshot = state.inner.load();
    let composed = pages::compose(
        &snapshot.registry,
        &snapshot.config.navigation,
        &snapshot.config.theme,
        &query.path,
        authenticated,
        query.collapsed,
    );

    let status = if composed.found {
        StatusCode::OK
    } else {
        metrics::record_unknown_path();
        StatusCode::NOT_FOUND
    };
    (status, Json(composed))
}

pub async fn user_settings(State(state): State<AppState>) -> Json<UserSettings> {
    Json(state.settings.snapshot())
}

pub async fn update_setting(
    State(state): State<AppState>,
    Path(field): Path<String>,
    Json(update): Json<SettingUpdate>,
) -> Result<Json<UserSettings>, ApiError> {
    let field: SettingField = field.parse()?;
    Ok(Json(state.settings.update(field, update.value)))
}

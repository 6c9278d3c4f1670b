//! End-to-end tests for the navigation API.

use std::time::Duration;

use axum::http::StatusCode;
use finance_nav::config::{AppConfig, RouteConfig};
use finance_nav::http::HttpServer;
use finance_nav::lifecycle::Shutdown;
use serde_json::json;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::mpsc;

mod common;

#[tokio::test]
async fn test_health_reports_route_count() {
    let state = common::default_state();
    let res = common::get(common::router(&state), "/health").await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body["status"], "ok");
    assert_eq!(res.body["routes"], 21);
}

#[tokio::test]
async fn test_request_id_is_assigned_and_propagated() {
    let state = common::default_state();

    let assigned = common::get(common::router(&state), "/health").await;
    let id = assigned.request_id.expect("request id header");
    assert_eq!(id.len(), 36);

    let propagated = common::get_with_headers(
        common::router(&state),
        "/health",
        &[("x-request-id", "trace-me-123")],
    )
    .await;
    assert_eq!(propagated.request_id.as_deref(), Some("trace-me-123"));
}

#[tokio::test]
async fn test_lookup_known_and_unknown_paths() {
    let state = common::default_state();

    let found = common::get(
        common::router(&state),
        "/api/routes/lookup?path=/settings/privacy",
    )
    .await;
    assert_eq!(found.status, StatusCode::OK);
    assert_eq!(found.body["title"], "Privacy");
    assert_eq!(found.body["full_path"], "/settings/privacy");
    assert_eq!(found.body["parent"], "/settings");

    let missing = common::get(common::router(&state), "/api/routes/lookup?path=/billing").await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
    assert_eq!(missing.body["error"], "not found: /billing");
}

#[tokio::test]
async fn test_route_listings() {
    let state = common::default_state();

    let all = common::get(common::router(&state), "/api/routes").await;
    assert_eq!(all.body.as_array().unwrap().len(), 16);

    let sidebar = common::get(common::router(&state), "/api/routes/sidebar").await;
    assert_eq!(sidebar.body["main"].as_array().unwrap().len(), 11);
    assert_eq!(sidebar.body["footer"][0]["path"], "/settings");
    assert_eq!(sidebar.body["footer"][1]["path"], "/help");

    let header = common::get(common::router(&state), "/api/routes/header").await;
    assert_eq!(header.body, json!([]));
}

#[tokio::test]
async fn test_active_and_breadcrumbs() {
    let state = common::default_state();

    let active = common::get(
        common::router(&state),
        "/api/active?route=/settings&path=/settings/account",
    )
    .await;
    assert_eq!(active.body["active"], true);

    let root = common::get(common::router(&state), "/api/active?route=/&path=/analytics").await;
    assert_eq!(root.body["active"], false);

    let crumbs = common::get(common::router(&state), "/api/breadcrumbs?path=/unknown/path").await;
    assert_eq!(
        crumbs.body,
        json!([
            {"title": "Home", "path": "/"},
            {"title": "Unknown", "path": "/unknown"},
            {"title": "Path", "path": "/unknown/path"},
        ])
    );
}

#[tokio::test]
async fn test_settings_tabs_endpoint() {
    let state = common::default_state();
    let res = common::get(
        common::router(&state),
        "/api/settings/tabs?path=/settings/preferences",
    )
    .await;
    assert_eq!(res.body["tabs"].as_array().unwrap().len(), 5);
    assert_eq!(res.body["tabs"][0]["path"], "/settings/account");
    assert_eq!(res.body["active"], "/settings/preferences");

    let parent = common::get(common::router(&state), "/api/settings/tabs?path=/settings").await;
    assert_eq!(parent.body["active"], serde_json::Value::Null);
}

#[tokio::test]
async fn test_navigation_snapshot_endpoint() {
    let state = common::default_state();
    let res = common::get(
        common::router(&state),
        "/api/navigation?path=/payments&collapsed=true",
    )
    .await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body["route"]["title"], "Payments");
    assert_eq!(res.body["sidebar"]["collapsed"], true);
    assert_eq!(res.body["settings"], serde_json::Value::Null);
}

#[tokio::test]
async fn test_pages_require_session() {
    let state = common::default_state();

    let redirect = common::get(common::router(&state), "/api/pages?path=/invoices").await;
    assert_eq!(redirect.status, StatusCode::OK);
    assert_eq!(redirect.body["content"], json!({"kind": "redirect", "to": "/login"}));

    let page = common::get_with_headers(
        common::router(&state),
        "/api/pages?path=/invoices",
        &[("x-session", "abc")],
    )
    .await;
    assert_eq!(page.body["template"], "dashboard");
    assert_eq!(page.body["content"]["kind"], "themed");

    let login = common::get(common::router(&state), "/api/pages?path=/login").await;
    assert_eq!(login.body["template"], "auth");
    assert_eq!(login.body["content"]["inner"]["heading"], "Financial Dashboard");
}

#[tokio::test]
async fn test_unknown_page_is_not_found() {
    let state = common::default_state();
    let res = common::get(common::router(&state), "/api/pages?path=/missing").await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);
    assert_eq!(res.body["found"], false);
    assert_eq!(res.body["template"], "error");
}

#[tokio::test]
async fn test_update_user_setting() {
    let state = common::default_state();

    let before = common::get(common::router(&state), "/api/user/settings").await;
    assert_eq!(before.body["email_notifications"]["marketing"], false);

    let updated = common::put_json(
        common::router(&state),
        "/api/user/settings/email-marketing",
        json!({"value": true}),
    )
    .await;
    assert_eq!(updated.status, StatusCode::OK);
    assert_eq!(updated.body["email_notifications"]["marketing"], true);

    let after = common::get(common::router(&state), "/api/user/settings").await;
    assert_eq!(after.body["email_notifications"]["marketing"], true);

    let rejected = common::put_json(
        common::router(&state),
        "/api/user/settings/dark-mode",
        json!({"value": true}),
    )
    .await;
    assert_eq!(rejected.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_reload_swaps_route_table() {
    let state = common::default_state();
    let router = common::router(&state);

    let mut config = AppConfig::default();
    config.routes.push(RouteConfig::new(
        "/reports",
        "Reports",
        "file-text",
        "reports_page::index",
    ));
    state.reload(config).unwrap();

    let res = common::get(router.clone(), "/api/routes/lookup?path=/reports").await;
    assert_eq!(res.status, StatusCode::OK);

    let mut broken = AppConfig::default();
    broken.routes.push(RouteConfig::new("/reports", "", "", ""));
    broken.routes.push(RouteConfig::new("/reports", "Again", "", ""));
    assert!(state.reload(broken).is_err());

    let health = common::get(router, "/health").await;
    assert_eq!(health.body["routes"], 22);
}

#[tokio::test]
async fn test_server_applies_updates_and_shuts_down() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let server = HttpServer::new(common::default_state());
    let state = server.state().clone();
    let (updates_tx, updates_rx) = mpsc::unbounded_channel();
    let shutdown = Shutdown::new();
    let handle = tokio::spawn(server.run(listener, updates_rx, shutdown.subscribe()));

    let mut config = AppConfig::default();
    config.routes.push(RouteConfig::new("/reports", "Reports", "", ""));
    updates_tx.send(config).unwrap();

    let mut applied = false;
    for _ in 0..50 {
        if state.inner.load().registry.get_route_by_path("/reports").is_some() {
            applied = true;
            break;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    assert!(applied);

    let mut stream = TcpStream::connect(addr).await.unwrap();
    stream
        .write_all(b"GET /health HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n")
        .await
        .unwrap();
    let mut raw = String::new();
    stream.read_to_string(&mut raw).await.unwrap();
    assert!(raw.starts_with("HTTP/1.1 200"));
    assert!(raw.contains("\"routes\":22"));

    shutdown.trigger();
    let result = tokio::time::timeout(Duration::from_secs(5), handle).await;
    assert!(matches!(result, Ok(Ok(Ok(())))));
}

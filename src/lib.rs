//! Navigation core for the finance dashboard.
//!
//! Holds the route table, resolves active routes and breadcrumbs for a
//! current path, and serves the derived views over a small JSON API.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod pages;
pub mod routing;
pub mod settings;

pub use config::schema::AppConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use routing::RouteRegistry;

//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the
//! navigation service. All types derive Serde traits for deserialization
//! from config files.

use serde::{Deserialize, Serialize};

use crate::config::defaults::dashboard_routes;
use crate::routing::ComponentRef;

/// Root configuration for the navigation service.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AppConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Navigation surface settings (breadcrumb seed, footer icons).
    pub navigation: NavigationConfig,

    /// Theme applied by the page pipeline.
    pub theme: ThemeConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,

    /// Route declarations, in declaration order.
    pub routes: Vec<RouteConfig>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            listener: ListenerConfig::default(),
            timeouts: TimeoutConfig::default(),
            navigation: NavigationConfig::default(),
            theme: ThemeConfig::default(),
            observability: ObservabilityConfig::default(),
            routes: dashboard_routes(),
        }
    }
}

/// Listener configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
        }
    }
}

/// A single route declaration.
///
/// Children are declared inline; their `path` is a segment relative to the
/// owning route. A top-level declaration may instead name a `parent` by full
/// path and is attached under it when the registry is built.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RouteConfig {
    /// Own path segment (e.g., "/settings" or "/account").
    pub path: String,

    /// Display title.
    pub title: String,

    /// Symbolic icon key.
    #[serde(default)]
    pub icon: String,

    /// Opaque handle to the page component, returned to the caller untouched.
    #[serde(default)]
    pub component: ComponentRef,

    /// Whether the page requires an authenticated session.
    #[serde(default = "default_true")]
    pub requires_auth: bool,

    /// Whether the route is listed in the sidebar.
    #[serde(default = "default_true")]
    pub is_sidebar_item: bool,

    /// Whether the route is listed in the header.
    #[serde(default)]
    pub is_header_item: bool,

    /// Full path of the owning route.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,

    /// Nested routes.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<RouteConfig>,
}

fn default_true() -> bool {
    true
}

impl RouteConfig {
    /// Create a route declaration with the default flags
    /// (auth required, sidebar item, not a header item).
    pub fn new(
        path: impl Into<String>,
        title: impl Into<String>,
        icon: impl Into<String>,
        component: impl Into<ComponentRef>,
    ) -> Self {
        Self {
            path: path.into(),
            title: title.into(),
            icon: icon.into(),
            component: component.into(),
            requires_auth: true,
            is_sidebar_item: true,
            is_header_item: false,
            parent: None,
            children: Vec::new(),
        }
    }

    pub fn public(mut self) -> Self {
        self.requires_auth = false;
        self
    }

    pub fn hidden(mut self) -> Self {
        self.is_sidebar_item = false;
        self
    }

    pub fn in_header(mut self) -> Self {
        self.is_header_item = true;
        self
    }

    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    pub fn with_children(mut self, children: Vec<RouteConfig>) -> Self {
        self.children = children;
        self
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Navigation surface configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct NavigationConfig {
    /// Title of the first breadcrumb.
    pub home_title: String,

    /// Full path of the route whose children are the settings tabs.
    pub settings_path: String,

    /// Where the auth check redirects unauthenticated visitors.
    pub login_path: String,

    /// Sidebar items with one of these icons go to the footer group.
    pub footer_icons: Vec<String>,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            home_title: "Home".to_string(),
            settings_path: "/settings".to_string(),
            login_path: "/login".to_string(),
            footer_icons: vec!["settings".to_string(), "help-circle".to_string()],
        }
    }
}

/// Theme settings attached to every composed page.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub accent_color: String,
    pub gray_color: String,
    pub radius: String,
    pub scaling: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            accent_color: "custom".to_string(),
            gray_color: "gray".to_string(),
            radius: "large".to_string(),
            scaling: "100%".to_string(),
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}

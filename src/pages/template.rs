//! Page templates.
//!
//! A template is a named, fixed decorator pipeline. Which template a path
//! gets follows from its route.

use serde::Serialize;

use crate::config::{NavigationConfig, ThemeConfig};
use crate::pages::content::{ComposedPage, PageContent};
use crate::pages::decorator::{
    AuthCheck, CenteredCard, DashboardChrome, PageContext, Pipeline, SettingsTabs, Theme,
};
use crate::routing::RouteRegistry;

/// Heading of the auth page card.
pub const APP_NAME: &str = "Financial Dashboard";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Template {
    Dashboard,
    Settings,
    Auth,
    Error,
}

impl Template {
    /// Template for the page at `path`.
    pub fn for_path(registry: &RouteRegistry, navigation: &NavigationConfig, path: &str) -> Self {
        match registry.get_route_by_path(path) {
            None => Template::Error,
            Some(route) if !route.requires_auth() => Template::Auth,
            Some(_) if registry.is_route_active(&navigation.settings_path, path) => {
                Template::Settings
            }
            Some(_) => Template::Dashboard,
        }
    }

    pub fn pipeline(self) -> Pipeline {
        match self {
            Template::Dashboard => Pipeline::new()
                .with(AuthCheck)
                .with(Theme)
                .with(DashboardChrome),
            Template::Settings => Pipeline::new()
                .with(AuthCheck)
                .with(Theme)
                .with(DashboardChrome)
                .with(SettingsTabs),
            Template::Auth => Pipeline::new()
                .with(Theme)
                .with(CenteredCard::with_heading(APP_NAME)),
            Template::Error => Pipeline::new().with(Theme).with(CenteredCard::default()),
        }
    }
}

/// Compose the page displayed at `path`.
pub fn compose(
    registry: &RouteRegistry,
    navigation: &NavigationConfig,
    theme: &ThemeConfig,
    path: &str,
    authenticated: bool,
    sidebar_collapsed: bool,
) -> ComposedPage {
    let route = registry.get_route_by_path(path);
    let template = Template::for_path(registry, navigation, path);

    let body = match route {
        Some(route) => PageContent::body(route.title(), route.component().clone()),
        None => PageContent::body("Page not found", "error_page::not_found".into()),
    };

    let ctx = PageContext {
        registry,
        navigation,
        theme,
        current_path: path,
        route,
        authenticated,
        sidebar_collapsed,
    };

    ComposedPage {
        path: path.to_string(),
        template,
        found: route.is_some(),
        content: template.pipeline().apply(body, &ctx),
    }
}

//! Derived navigation views.
//!
//! Everything here is computed on demand from the registry and a current
//! path. Nothing is cached.

use serde::Serialize;

use crate::config::NavigationConfig;
use crate::routing::breadcrumbs::{self, Breadcrumb};
use crate::routing::matcher::join_path;
use crate::routing::registry::RouteRegistry;
use crate::routing::route::Route;

/// Sidebar routes split into the main list and the footer list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SidebarGroups<'a> {
    pub main: Vec<&'a Route>,
    pub footer: Vec<&'a Route>,
}

/// Split `routes` by icon: footer icons go to the footer group.
/// Relative order is preserved within each group.
pub fn partition_sidebar<'a, I, S>(routes: I, footer_icons: &[S]) -> SidebarGroups<'a>
where
    I: IntoIterator<Item = &'a Route>,
    S: AsRef<str>,
{
    let (footer, main): (Vec<&Route>, Vec<&Route>) = routes
        .into_iter()
        .partition(|route| footer_icons.iter().any(|icon| icon.as_ref() == route.icon()));
    SidebarGroups { main, footer }
}

/// A navigation entry with its active flag for the current path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub title: String,
    pub icon: String,
    pub path: String,
    pub is_active: bool,
}

impl NavItem {
    pub fn from_route(route: &Route, current_path: &str) -> Self {
        Self {
            title: route.title().to_string(),
            icon: route.icon().to_string(),
            path: route.full_path().to_string(),
            is_active: route.is_active(current_path),
        }
    }
}

/// A settings tab descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SettingsTab {
    pub title: String,
    pub icon: String,
    pub path: String,
}

/// Tabs for the children of the settings route at `settings_path`.
pub fn settings_tabs(registry: &RouteRegistry, settings_path: &str) -> Vec<SettingsTab> {
    registry
        .children_of(settings_path)
        .iter()
        .map(|child| SettingsTab {
            title: child.title().to_string(),
            icon: child.icon().to_string(),
            path: join_path(settings_path, child.path()),
        })
        .collect()
}

/// The tab whose path is exactly `current_path`.
pub fn active_tab<'a>(tabs: &'a [SettingsTab], current_path: &str) -> Option<&'a SettingsTab> {
    tabs.iter().find(|tab| tab.path == current_path)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SidebarView {
    pub main: Vec<NavItem>,
    pub footer: Vec<NavItem>,
    pub collapsed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SettingsView {
    pub tabs: Vec<SettingsTab>,
    pub active: Option<String>,
}

/// Summary of the route matched by the current path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteSummary {
    pub path: String,
    pub title: String,
    pub requires_auth: bool,
    pub component: String,
}

/// Everything a dashboard shell needs to draw its navigation for one path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavigationSnapshot {
    pub path: String,
    pub route: Option<RouteSummary>,
    pub sidebar: SidebarView,
    pub header: Vec<NavItem>,
    pub breadcrumbs: Vec<Breadcrumb>,
    /// Present only while a settings page is open.
    pub settings: Option<SettingsView>,
}

/// Assemble the navigation snapshot for `current_path`.
pub fn snapshot(
    registry: &RouteRegistry,
    config: &NavigationConfig,
    current_path: &str,
    collapsed: bool,
) -> NavigationSnapshot {
    let groups = partition_sidebar(registry.sidebar_routes(), config.footer_icons.as_slice());
    let items = |routes: Vec<&Route>| -> Vec<NavItem> {
        routes
            .into_iter()
            .map(|route| NavItem::from_route(route, current_path))
            .collect()
    };

    let settings = if registry.is_route_active(&config.settings_path, current_path) {
        let tabs = settings_tabs(registry, &config.settings_path);
        let active = active_tab(&tabs, current_path).map(|tab| tab.path.clone());
        Some(SettingsView { tabs, active })
    } else {
        None
    };

    NavigationSnapshot {
        path: current_path.to_string(),
        route: registry.get_route_by_path(current_path).map(|route| RouteSummary {
            path: route.full_path().to_string(),
            title: route.title().to_string(),
            requires_auth: route.requires_auth(),
            component: route.component().as_str().to_string(),
        }),
        sidebar: SidebarView {
            main: items(groups.main),
            footer: items(groups.footer),
            collapsed,
        },
        header: items(registry.header_routes()),
        breadcrumbs: breadcrumbs::build(registry, current_path, &config.home_title),
        settings,
    }
}

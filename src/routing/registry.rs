//! Route registry.
//!
//! # Responsibilities
//! - Compile route declarations into an immutable route tree
//! - Index every route by its full path
//! - Reject malformed tables at construction
//! - Answer lookup, surface-filter and active-route queries
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - O(1) lookup via a full-path HashMap; no relative-segment fallback
//! - Full paths must be unique across the whole table, so a lookup can
//!   never be ambiguous
//! - All construction issues are reported together, not just the first

use std::collections::HashMap;
use std::fmt;

use thiserror::Error;

use crate::config::RouteConfig;
use crate::config::defaults::dashboard_routes;
use crate::routing::breadcrumbs::{self, Breadcrumb, DEFAULT_HOME_TITLE};
use crate::routing::matcher::{join_path, ROOT_PATH};
use crate::routing::route::Route;

/// A single problem found while compiling the route table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteIssue {
    #[error("invalid path '{path}': {reason}")]
    InvalidPath { path: String, reason: &'static str },

    #[error("route '{path}' has an empty title")]
    EmptyTitle { path: String },

    #[error("duplicate route path '{path}'")]
    DuplicatePath { path: String },

    #[error("route '{path}' declares parent '{declared}' but is nested under '{actual}'")]
    ParentMismatch {
        path: String,
        declared: String,
        actual: String,
    },

    #[error("route '{path}' references unknown parent '{parent}'")]
    UnknownParent { path: String, parent: String },
}

/// Errors that can occur while building a registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("malformed route table: {}", IssueList(.0))]
    Malformed(Vec<RouteIssue>),
}

impl RegistryError {
    pub fn issues(&self) -> &[RouteIssue] {
        match self {
            RegistryError::Malformed(issues) => issues,
        }
    }
}

struct IssueList<'a>(&'a [RouteIssue]);

impl fmt::Display for IssueList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, issue) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", issue)?;
        }
        Ok(())
    }
}

/// Immutable table of routes.
#[derive(Debug, Clone)]
pub struct RouteRegistry {
    /// Top-level routes, in declaration order.
    routes: Vec<Route>,
    /// Full path -> position in the tree (top-level index, then child indices).
    index: HashMap<String, Vec<usize>>,
    /// Full paths in depth-first declaration order.
    order: Vec<String>,
}

impl RouteRegistry {
    /// Compile route declarations.
    ///
    /// Inline children are nested under their owner. Top-level declarations
    /// that name a `parent` are attached under the route with that full path.
    pub fn new(configs: Vec<RouteConfig>) -> Result<Self, RegistryError> {
        let mut issues = Vec::new();
        let mut routes = Vec::new();
        let mut pending = Vec::new();

        for config in configs {
            if config.parent.is_some() {
                pending.push(config);
            } else {
                routes.push(compile(config, None, &mut issues));
            }
        }

        attach_pending(&mut routes, pending, &mut issues);

        let mut index = HashMap::new();
        let mut order = Vec::new();
        let mut position = Vec::new();
        for (i, route) in routes.iter().enumerate() {
            position.push(i);
            index_route(route, &mut position, &mut index, &mut order, &mut issues);
            position.pop();
        }

        if !issues.is_empty() {
            tracing::debug!(issues = issues.len(), "rejected route table");
            return Err(RegistryError::Malformed(issues));
        }

        tracing::debug!(
            top_level = routes.len(),
            total = order.len(),
            "built route table"
        );

        Ok(Self {
            routes,
            index,
            order,
        })
    }

    /// Registry over the built-in dashboard route table.
    pub fn dashboard() -> Result<Self, RegistryError> {
        Self::new(dashboard_routes())
    }

    /// Look up a route by its full path.
    pub fn get_route_by_path(&self, path: &str) -> Option<&Route> {
        self.index.get(path).and_then(|position| self.node(position))
    }

    /// Top-level routes, in declaration order.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Every route, depth-first in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Route> {
        self.order.iter().filter_map(|path| self.get_route_by_path(path))
    }

    /// Total number of routes, children included.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Children of the route at `path`, empty if the route is unknown.
    pub fn children_of(&self, path: &str) -> &[Route] {
        self.get_route_by_path(path)
            .map(Route::children)
            .unwrap_or_default()
    }

    /// Top-level sidebar routes.
    pub fn sidebar_routes(&self) -> Vec<&Route> {
        self.routes.iter().filter(|r| r.is_sidebar_item()).collect()
    }

    /// Top-level header routes.
    pub fn header_routes(&self) -> Vec<&Route> {
        self.routes.iter().filter(|r| r.is_header_item()).collect()
    }

    /// Top-level routes that require an authenticated session.
    pub fn auth_required_routes(&self) -> Vec<&Route> {
        self.routes.iter().filter(|r| r.requires_auth()).collect()
    }

    /// Top-level routes reachable without a session.
    pub fn public_routes(&self) -> Vec<&Route> {
        self.routes.iter().filter(|r| !r.requires_auth()).collect()
    }

    /// Returns true if the route at `path` is active for `current_path`.
    /// Unknown routes are never active.
    pub fn is_route_active(&self, path: &str, current_path: &str) -> bool {
        self.get_route_by_path(path)
            .is_some_and(|route| route.is_active(current_path))
    }

    /// Breadcrumb trail for `current_path`, seeded with "Home".
    pub fn breadcrumbs(&self, current_path: &str) -> Vec<Breadcrumb> {
        breadcrumbs::build(self, current_path, DEFAULT_HOME_TITLE)
    }

    fn node(&self, position: &[usize]) -> Option<&Route> {
        let (first, rest) = position.split_first()?;
        let mut route = self.routes.get(*first)?;
        for i in rest {
            route = route.children().get(*i)?;
        }
        Some(route)
    }
}

/// Compile one declaration and its inline children.
fn compile(config: RouteConfig, parent: Option<&str>, issues: &mut Vec<RouteIssue>) -> Route {
    check_path(&config.path, parent.is_some(), issues);

    let full_path = match parent {
        Some(parent) => join_path(parent, &config.path),
        None => config.path.clone(),
    };

    if config.title.trim().is_empty() {
        issues.push(RouteIssue::EmptyTitle {
            path: full_path.clone(),
        });
    }

    if let (Some(declared), Some(actual)) = (config.parent.as_deref(), parent) {
        if declared != actual {
            issues.push(RouteIssue::ParentMismatch {
                path: full_path.clone(),
                declared: declared.to_string(),
                actual: actual.to_string(),
            });
        }
    }

    let mut route = Route::new(
        config.path,
        full_path.clone(),
        config.title,
        config.icon,
        config.component,
        config.requires_auth,
        config.is_sidebar_item,
        config.is_header_item,
        parent.map(str::to_string),
    );

    for child in config.children {
        let compiled = compile(child, Some(&full_path), issues);
        route.children_mut().push(compiled);
    }

    route
}

/// Attach flat declarations under their named parents.
///
/// Runs until no further declaration can be placed, so a flat route may
/// name another flat route as its parent regardless of declaration order.
fn attach_pending(routes: &mut [Route], mut pending: Vec<RouteConfig>, issues: &mut Vec<RouteIssue>) {
    loop {
        let before = pending.len();
        let mut unresolved = Vec::new();

        for config in pending {
            let parent_path = config.parent.clone().unwrap_or_default();
            match find_mut(routes, &parent_path) {
                Some(parent) => {
                    let compiled = compile(config, Some(&parent_path), issues);
                    parent.children_mut().push(compiled);
                }
                None => unresolved.push(config),
            }
        }

        if unresolved.is_empty() {
            return;
        }
        if unresolved.len() == before {
            for config in unresolved {
                issues.push(RouteIssue::UnknownParent {
                    path: config.path,
                    parent: config.parent.unwrap_or_default(),
                });
            }
            return;
        }
        pending = unresolved;
    }
}

fn find_mut<'a>(routes: &'a mut [Route], full_path: &str) -> Option<&'a mut Route> {
    for route in routes.iter_mut() {
        if route.full_path() == full_path {
            return Some(route);
        }
        if full_path.starts_with(route.full_path()) {
            if let Some(found) = find_mut(route.children_mut(), full_path) {
                return Some(found);
            }
        }
    }
    None
}

fn index_route(
    route: &Route,
    position: &mut Vec<usize>,
    index: &mut HashMap<String, Vec<usize>>,
    order: &mut Vec<String>,
    issues: &mut Vec<RouteIssue>,
) {
    let path = route.full_path().to_string();
    if index.contains_key(&path) {
        issues.push(RouteIssue::DuplicatePath { path });
    } else {
        index.insert(path.clone(), position.clone());
        order.push(path);
    }

    for (i, child) in route.children().iter().enumerate() {
        position.push(i);
        index_route(child, position, index, order, issues);
        position.pop();
    }
}

fn check_path(path: &str, is_child: bool, issues: &mut Vec<RouteIssue>) {
    let reason = if !path.starts_with('/') {
        Some("must start with '/'")
    } else if is_child && path == ROOT_PATH {
        Some("a child route cannot use the root path")
    } else if path != ROOT_PATH && path.ends_with('/') {
        Some("must not end with '/'")
    } else if path.contains("//") {
        Some("must not contain empty segments")
    } else if path.contains(['?', '#']) || path.chars().any(char::is_whitespace) {
        Some("must not contain whitespace, '?' or '#'")
    } else {
        None
    };

    if let Some(reason) = reason {
        issues.push(RouteIssue::InvalidPath {
            path: path.to_string(),
            reason,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> RouteRegistry {
        RouteRegistry::dashboard().expect("default table is valid")
    }

    #[test]
    fn test_lookup_every_registered_route() {
        let registry = registry();
        assert_eq!(registry.len(), 21);
        for route in registry.iter() {
            let found = registry.get_route_by_path(route.full_path()).unwrap();
            assert_eq!(found, route);
        }
    }

    #[test]
    fn test_child_lookup_uses_full_path_only() {
        let registry = registry();
        let account = registry.get_route_by_path("/settings/account").unwrap();
        assert_eq!(account.title(), "Account");
        assert_eq!(account.path(), "/account");
        assert_eq!(account.parent(), Some("/settings"));

        // The bare relative segment is not an alias.
        assert!(registry.get_route_by_path("/account").is_none());
    }

    #[test]
    fn test_unknown_path() {
        let registry = registry();
        assert!(registry.get_route_by_path("/nope").is_none());
        assert!(!registry.is_route_active("/nope", "/nope"));
        assert!(!registry.is_route_active("", "/"));
    }

    #[test]
    fn test_sidebar_routes_order_and_filter() {
        let registry = registry();
        let titles: Vec<_> = registry.sidebar_routes().iter().map(|r| r.title()).collect();
        assert_eq!(
            titles,
            vec![
                "Dashboard",
                "Analytics",
                "Organization",
                "Projects",
                "Transactions",
                "Invoices",
                "Payments",
                "Members",
                "Permissions",
                "Chat",
                "Meetings",
                "Settings",
                "Help",
            ]
        );
        assert!(registry.sidebar_routes().iter().all(|r| r.is_sidebar_item()));
    }

    #[test]
    fn test_auth_partition() {
        let registry = registry();
        let public: Vec<_> = registry.public_routes().iter().map(|r| r.full_path()).collect();
        assert_eq!(public, vec!["/login", "/register", "/forgot-password"]);
        assert_eq!(
            registry.auth_required_routes().len() + public.len(),
            registry.routes().len()
        );
        assert!(registry.header_routes().is_empty());
    }

    #[test]
    fn test_reflexive_and_ancestor_activation() {
        let registry = registry();
        for route in registry.iter() {
            assert!(route.is_active(route.full_path()), "{}", route.full_path());
        }
        assert!(registry.is_route_active("/settings", "/settings/privacy"));
        assert!(!registry.is_route_active("/", "/settings/privacy"));
        assert!(!registry.is_route_active("/settings/account", "/settings/privacy"));
    }

    #[test]
    fn test_flat_declaration_is_attached_to_parent() {
        let registry = RouteRegistry::new(vec![
            RouteConfig::new("/monthly", "Monthly", "calendar", "monthly")
                .with_parent("/reports/annual"),
            RouteConfig::new("/annual", "Annual", "calendar", "annual").with_parent("/reports"),
            RouteConfig::new("/reports", "Reports", "file", "reports"),
        ])
        .unwrap();

        let reports = registry.get_route_by_path("/reports").unwrap();
        assert_eq!(reports.children().len(), 1);
        assert!(registry
            .get_route_by_path("/reports/annual/monthly")
            .is_some());
        assert_eq!(registry.children_of("/reports")[0].title(), "Annual");
    }

    #[test]
    fn test_rejects_duplicates_and_unknown_parent() {
        let err = RouteRegistry::new(vec![
            RouteConfig::new("/a", "A", "", ""),
            RouteConfig::new("/a", "A again", "", ""),
            RouteConfig::new("/b", "B", "", "").with_parent("/missing"),
        ])
        .unwrap_err();

        assert_eq!(
            err.issues(),
            &[
                RouteIssue::UnknownParent {
                    path: "/b".into(),
                    parent: "/missing".into(),
                },
                RouteIssue::DuplicatePath { path: "/a".into() },
            ]
        );
    }

    #[test]
    fn test_rejects_collision_between_child_and_top_level() {
        let err = RouteRegistry::new(vec![
            RouteConfig::new("/settings", "Settings", "", "")
                .with_children(vec![RouteConfig::new("/account", "Account", "", "")]),
            RouteConfig::new("/settings/account", "Account twin", "", ""),
        ])
        .unwrap_err();

        assert!(err.issues().contains(&RouteIssue::DuplicatePath {
            path: "/settings/account".into()
        }));
    }

    #[test]
    fn test_rejects_malformed_entries() {
        let err = RouteRegistry::new(vec![
            RouteConfig::new("no-slash", "X", "", ""),
            RouteConfig::new("/trailing/", "Y", "", ""),
            RouteConfig::new("/ok", " ", "", "").with_children(vec![
                RouteConfig::new("/", "Root child", "", ""),
                RouteConfig::new("/c", "C", "", "").with_parent("/elsewhere"),
            ]),
        ])
        .unwrap_err();

        let issues = err.issues();
        assert_eq!(issues.len(), 5);
        assert!(issues.contains(&RouteIssue::EmptyTitle { path: "/ok".into() }));
        assert!(issues.contains(&RouteIssue::ParentMismatch {
            path: "/ok/c".into(),
            declared: "/elsewhere".into(),
            actual: "/ok".into(),
        }));
        assert!(err.to_string().starts_with("malformed route table: "));
    }

    #[test]
    fn test_child_of_root_has_no_double_slash() {
        let registry = RouteRegistry::new(vec![RouteConfig::new("/", "Home", "home", "")
            .with_children(vec![RouteConfig::new("/welcome", "Welcome", "", "")])])
        .unwrap();
        assert!(registry.get_route_by_path("/welcome").is_some());
        assert!(registry.is_route_active("/", "/welcome"));
    }
}

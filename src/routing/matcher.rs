//! Active-route matching.
//!
//! # Responsibilities
//! - Exact match of the current path against a route's full path
//! - Descendant activation (a parent is active while a child page is open)
//! - Path prefix match on segment boundaries
//!
//! # Design Decisions
//! - Path matching is case-sensitive
//! - The root path `/` never prefix-matches, otherwise it would be active
//!   for every page
//! - Prefixes only match on a `/` boundary: `/settings` does not match
//!   `/settingsx`
//! - No regex, no allocation

use crate::routing::route::Route;

/// Path of the root route.
pub const ROOT_PATH: &str = "/";

/// Returns true if `current_path` lies strictly below `route_path`.
pub fn is_descendant_path(route_path: &str, current_path: &str) -> bool {
    if route_path == ROOT_PATH {
        return false;
    }
    current_path
        .strip_prefix(route_path)
        .is_some_and(|rest| rest.starts_with('/'))
}

/// Evaluate the active rule for `route`.
///
/// Checked in order: exact match, any child active, descendant prefix.
pub fn is_active(route: &Route, current_path: &str) -> bool {
    if current_path == route.full_path() {
        return true;
    }

    if route.children().iter().any(|child| is_active(child, current_path)) {
        return true;
    }

    is_descendant_path(route.full_path(), current_path)
}

/// Join a parent's full path with a child's own segment.
///
/// The root contributes no prefix, so `/` + `/x` is `/x`.
pub fn join_path(parent: &str, child: &str) -> String {
    if parent == ROOT_PATH {
        child.to_string()
    } else {
        format!("{}{}", parent, child)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::route::ComponentRef;

    fn route(path: &str, full_path: &str) -> Route {
        Route::new(
            path.to_string(),
            full_path.to_string(),
            "Title".to_string(),
            "icon".to_string(),
            ComponentRef::default(),
            true,
            true,
            false,
            None,
        )
    }

    #[test]
    fn test_descendant_path() {
        assert!(is_descendant_path("/settings", "/settings/account"));
        assert!(is_descendant_path("/settings", "/settings/account/email"));
        assert!(!is_descendant_path("/settings", "/settings"));
        assert!(!is_descendant_path("/settings", "/settingsx"));
        assert!(!is_descendant_path("/settings", "/other"));
    }

    #[test]
    fn test_root_never_prefix_matches() {
        assert!(!is_descendant_path("/", "/analytics"));

        let root = route("/", "/");
        assert!(root.is_active("/"));
        assert!(!root.is_active("/anything-else"));
    }

    #[test]
    fn test_child_activates_parent() {
        let mut parent = route("/settings", "/settings");
        parent
            .children_mut()
            .push(route("/account", "/settings/account"));

        assert!(parent.is_active("/settings"));
        assert!(parent.is_active("/settings/account"));
        assert!(parent.is_active("/settings/unregistered"));
        assert!(!parent.is_active("/analytics"));

        let child = &parent.children()[0];
        assert!(child.is_active("/settings/account"));
        assert!(!child.is_active("/settings"));
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        let r = route("/chat", "/chat");
        assert!(!r.is_active("/Chat"));
        assert!(!r.is_active("/CHAT/room"));
    }

    #[test]
    fn test_join_path() {
        assert_eq!(join_path("/", "/x"), "/x");
        assert_eq!(join_path("/settings", "/account"), "/settings/account");
    }
}

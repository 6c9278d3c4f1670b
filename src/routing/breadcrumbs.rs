//! Breadcrumb derivation.
//!
//! A trail always starts at the home crumb and gains one entry per
//! non-empty path segment. Segments without a registered route get a
//! capitalized fallback label, so the trail is never shorter than the path.

use serde::{Deserialize, Serialize};

use crate::routing::matcher::ROOT_PATH;
use crate::routing::registry::RouteRegistry;

/// Title of the first crumb unless configured otherwise.
pub const DEFAULT_HOME_TITLE: &str = "Home";

/// One entry of a breadcrumb trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breadcrumb {
    pub title: String,
    pub path: String,
}

impl Breadcrumb {
    pub fn new(title: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            path: path.into(),
        }
    }
}

/// Build the root-to-leaf trail for `current_path`.
pub fn build(registry: &RouteRegistry, current_path: &str, home_title: &str) -> Vec<Breadcrumb> {
    let mut trail = vec![Breadcrumb::new(home_title, ROOT_PATH)];

    if current_path == ROOT_PATH {
        return trail;
    }

    let mut prefix = String::with_capacity(current_path.len());
    for segment in current_path.split('/').filter(|s| !s.is_empty()) {
        prefix.push('/');
        prefix.push_str(segment);

        let title = match registry.get_route_by_path(&prefix) {
            Some(route) => route.title().to_string(),
            None => capitalize(segment),
        };
        trail.push(Breadcrumb::new(title, prefix.clone()));
    }

    trail
}

/// Titlecase the first character and lowercase the rest.
pub fn capitalize(segment: &str) -> String {
    let mut chars = segment.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };

    let mut out = String::with_capacity(segment.len());
    push_titlecase(first, &mut out);
    out.extend(chars.flat_map(char::to_lowercase));
    out
}

/// Titlecase differs from uppercase for the Latin digraphs and for letters
/// whose uppercase form is several characters (`ß` becomes `Ss`, not `SS`).
fn push_titlecase(c: char, out: &mut String) {
    let digraph = match c {
        'Ǆ' | 'ǅ' | 'ǆ' => Some('ǅ'),
        'Ǉ' | 'ǈ' | 'ǉ' => Some('ǈ'),
        'Ǌ' | 'ǋ' | 'ǌ' => Some('ǋ'),
        'Ǳ' | 'ǲ' | 'ǳ' => Some('ǲ'),
        _ => None,
    };
    if let Some(titled) = digraph {
        out.push(titled);
        return;
    }

    let mut upper = c.to_uppercase();
    if let Some(head) = upper.next() {
        out.push(head);
    }
    out.extend(upper.flat_map(char::to_lowercase));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> RouteRegistry {
        RouteRegistry::dashboard().unwrap()
    }

    #[test]
    fn test_root_is_home_only() {
        assert_eq!(registry().breadcrumbs("/"), vec![Breadcrumb::new("Home", "/")]);
    }

    #[test]
    fn test_registered_child() {
        assert_eq!(
            registry().breadcrumbs("/settings/account"),
            vec![
                Breadcrumb::new("Home", "/"),
                Breadcrumb::new("Settings", "/settings"),
                Breadcrumb::new("Account", "/settings/account"),
            ]
        );
    }

    #[test]
    fn test_unregistered_segments_fall_back() {
        assert_eq!(
            registry().breadcrumbs("/unknown/path"),
            vec![
                Breadcrumb::new("Home", "/"),
                Breadcrumb::new("Unknown", "/unknown"),
                Breadcrumb::new("Path", "/unknown/path"),
            ]
        );
    }

    #[test]
    fn test_mixed_and_trailing_slashes() {
        let trail = registry().breadcrumbs("/settings/BILLING/");
        assert_eq!(trail.len(), 3);
        assert_eq!(trail[1], Breadcrumb::new("Settings", "/settings"));
        assert_eq!(trail[2], Breadcrumb::new("Billing", "/settings/BILLING"));
    }

    #[test]
    fn test_length_is_one_plus_segments() {
        let registry = registry();
        for path in ["/a", "/a/b", "/a/b/c/d", "/settings/privacy/x"] {
            let segments = path.split('/').filter(|s| !s.is_empty()).count();
            assert_eq!(registry.breadcrumbs(path).len(), 1 + segments);
        }
    }

    #[test]
    fn test_custom_home_title() {
        let trail = build(&registry(), "/chat", "Start");
        assert_eq!(trail[0], Breadcrumb::new("Start", "/"));
        assert_eq!(trail[1], Breadcrumb::new("Chat", "/chat"));
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("forgot-password"), "Forgot-password");
        assert_eq!(capitalize("ÉTAT"), "État");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_capitalize_uses_titlecase() {
        assert_eq!(capitalize("ßtraße"), "Sstraße");
        assert_eq!(capitalize("ǆungla"), "ǅungla");
        assert_eq!(capitalize("ǈubljana"), "ǈubljana");
        assert_eq!(capitalize("ﬁnance"), "Finance");
    }
}

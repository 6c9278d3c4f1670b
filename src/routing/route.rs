//! Compiled route entries.
//!
//! A `Route` is built once by the registry from a `RouteConfig` and never
//! mutated afterwards. Fields are private; accessors hand out borrows.

use serde::{Deserialize, Serialize};

use crate::routing::matcher;

/// Opaque handle to the page component that renders a route.
///
/// The navigation core stores and returns it but never interprets it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComponentRef(String);

impl ComponentRef {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ComponentRef {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ComponentRef {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// A registered route.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    path: String,
    full_path: String,
    title: String,
    icon: String,
    component: ComponentRef,
    requires_auth: bool,
    is_sidebar_item: bool,
    is_header_item: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    parent: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    children: Vec<Route>,
}

impl Route {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        path: String,
        full_path: String,
        title: String,
        icon: String,
        component: ComponentRef,
        requires_auth: bool,
        is_sidebar_item: bool,
        is_header_item: bool,
        parent: Option<String>,
    ) -> Self {
        Self {
            path,
            full_path,
            title,
            icon,
            component,
            requires_auth,
            is_sidebar_item,
            is_header_item,
            parent,
            children: Vec::new(),
        }
    }

    /// Own path segment, relative to the parent for child routes.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Parent's full path followed by the own segment.
    pub fn full_path(&self) -> &str {
        &self.full_path
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn icon(&self) -> &str {
        &self.icon
    }

    pub fn component(&self) -> &ComponentRef {
        &self.component
    }

    pub fn requires_auth(&self) -> bool {
        self.requires_auth
    }

    pub fn is_sidebar_item(&self) -> bool {
        self.is_sidebar_item
    }

    pub fn is_header_item(&self) -> bool {
        self.is_header_item
    }

    /// Full path of the owning route, if this is a child.
    pub fn parent(&self) -> Option<&str> {
        self.parent.as_deref()
    }

    pub fn children(&self) -> &[Route] {
        &self.children
    }

    pub(crate) fn children_mut(&mut self) -> &mut Vec<Route> {
        &mut self.children
    }

    /// Returns true if this route, or one of its descendants, is the page
    /// being displayed at `current_path`.
    pub fn is_active(&self, current_path: &str) -> bool {
        matcher::is_active(self, current_path)
    }
}

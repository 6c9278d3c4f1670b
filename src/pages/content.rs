//! Layout tree produced by the page pipeline.

use serde::Serialize;

use crate::config::ThemeConfig;
use crate::pages::template::Template;
use crate::routing::navigation::{NavItem, SettingsTab, SidebarView};
use crate::routing::{Breadcrumb, ComponentRef};

/// One node of a composed page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PageContent {
    /// The page component itself.
    Body {
        title: String,
        component: ComponentRef,
    },
    Themed {
        theme: ThemeConfig,
        inner: Box<PageContent>,
    },
    /// Sidebar plus a navbar carrying the breadcrumb trail.
    Dashboard {
        sidebar: SidebarView,
        header: Vec<NavItem>,
        breadcrumbs: Vec<Breadcrumb>,
        inner: Box<PageContent>,
    },
    /// Settings tab column next to the page.
    SettingsFrame {
        heading: String,
        tabs: Vec<SettingsTab>,
        active: Option<String>,
        inner: Box<PageContent>,
    },
    /// Centered card used by auth and error pages.
    Centered {
        #[serde(skip_serializing_if = "Option::is_none")]
        heading: Option<String>,
        inner: Box<PageContent>,
    },
    Redirect {
        to: String,
    },
}

impl PageContent {
    pub fn body(title: impl Into<String>, component: ComponentRef) -> Self {
        PageContent::Body {
            title: title.into(),
            component,
        }
    }

    pub fn is_redirect(&self) -> bool {
        matches!(self, PageContent::Redirect { .. })
    }

    /// The wrapped node, if this is a wrapper.
    pub fn inner(&self) -> Option<&PageContent> {
        match self {
            PageContent::Themed { inner, .. }
            | PageContent::Dashboard { inner, .. }
            | PageContent::SettingsFrame { inner, .. }
            | PageContent::Centered { inner, .. } => Some(&**inner),
            PageContent::Body { .. } | PageContent::Redirect { .. } => None,
        }
    }

    /// Node kinds from the outermost inwards.
    pub fn layers(&self) -> Vec<&'static str> {
        let mut layers = Vec::new();
        let mut node = Some(self);
        while let Some(current) = node {
            layers.push(current.kind());
            node = current.inner();
        }
        layers
    }

    fn kind(&self) -> &'static str {
        match self {
            PageContent::Body { .. } => "body",
            PageContent::Themed { .. } => "themed",
            PageContent::Dashboard { .. } => "dashboard",
            PageContent::SettingsFrame { .. } => "settings_frame",
            PageContent::Centered { .. } => "centered",
            PageContent::Redirect { .. } => "redirect",
        }
    }
}

/// A page ready for rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComposedPage {
    pub path: String,
    pub template: Template,
    /// False when no route is registered for the path.
    pub found: bool,
    pub content: PageContent,
}

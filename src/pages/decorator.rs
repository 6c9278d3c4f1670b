//! Page decorators and the pipeline that applies them.
//!
//! # Responsibilities
//! - Gate a page behind a session check
//! - Attach the theme
//! - Add layout chrome (dashboard shell, settings tabs, centered card)
//!
//! # Design Decisions
//! - A pipeline is declared outermost first
//! - `admit` runs front to back before any wrapping; a refusal is final
//! - `wrap` runs back to front, so the last decorator sits closest to the body

use std::fmt;

use crate::config::{NavigationConfig, ThemeConfig};
use crate::pages::content::PageContent;
use crate::routing::navigation::{self, active_tab, settings_tabs};
use crate::routing::{Route, RouteRegistry};

/// Everything a decorator may consult.
#[derive(Debug, Clone, Copy)]
pub struct PageContext<'a> {
    pub registry: &'a RouteRegistry,
    pub navigation: &'a NavigationConfig,
    pub theme: &'a ThemeConfig,
    pub current_path: &'a str,
    /// Route registered at `current_path`, if any.
    pub route: Option<&'a Route>,
    pub authenticated: bool,
    pub sidebar_collapsed: bool,
}

/// One step of page composition.
pub trait PageDecorator: Send + Sync + fmt::Debug {
    fn name(&self) -> &'static str;

    /// Return a replacement page to stop composition, or `None` to continue.
    fn admit(&self, _ctx: &PageContext<'_>) -> Option<PageContent> {
        None
    }

    fn wrap(&self, content: PageContent, ctx: &PageContext<'_>) -> PageContent;
}

/// Ordered list of decorators.
#[derive(Debug, Default)]
pub struct Pipeline {
    decorators: Vec<Box<dyn PageDecorator>>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a decorator inside the ones already declared.
    pub fn with(mut self, decorator: impl PageDecorator + 'static) -> Self {
        self.decorators.push(Box::new(decorator));
        self
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.decorators.iter().map(|d| d.name()).collect()
    }

    pub fn apply(&self, body: PageContent, ctx: &PageContext<'_>) -> PageContent {
        for decorator in &self.decorators {
            if let Some(replacement) = decorator.admit(ctx) {
                tracing::debug!(
                    decorator = decorator.name(),
                    path = %ctx.current_path,
                    "Page composition stopped"
                );
                return replacement;
            }
        }

        self.decorators
            .iter()
            .rev()
            .fold(body, |content, decorator| decorator.wrap(content, ctx))
    }
}

/// Redirects to the login page when the route needs a session and there is none.
#[derive(Debug, Clone, Copy, Default)]
pub struct AuthCheck;

impl PageDecorator for AuthCheck {
    fn name(&self) -> &'static str {
        "auth_check"
    }

    fn admit(&self, ctx: &PageContext<'_>) -> Option<PageContent> {
        // Unregistered paths are treated as protected.
        let required = ctx.route.map_or(true, Route::requires_auth);
        if required && !ctx.authenticated {
            Some(PageContent::Redirect {
                to: ctx.navigation.login_path.clone(),
            })
        } else {
            None
        }
    }

    fn wrap(&self, content: PageContent, _ctx: &PageContext<'_>) -> PageContent {
        content
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Theme;

impl PageDecorator for Theme {
    fn name(&self) -> &'static str {
        "theme"
    }

    fn wrap(&self, content: PageContent, ctx: &PageContext<'_>) -> PageContent {
        PageContent::Themed {
            theme: ctx.theme.clone(),
            inner: Box::new(content),
        }
    }
}

/// Sidebar and navbar around the page.
#[derive(Debug, Clone, Copy, Default)]
pub struct DashboardChrome;

impl PageDecorator for DashboardChrome {
    fn name(&self) -> &'static str {
        "dashboard_chrome"
    }

    fn wrap(&self, content: PageContent, ctx: &PageContext<'_>) -> PageContent {
        let snapshot = navigation::snapshot(
            ctx.registry,
            ctx.navigation,
            ctx.current_path,
            ctx.sidebar_collapsed,
        );
        PageContent::Dashboard {
            sidebar: snapshot.sidebar,
            header: snapshot.header,
            breadcrumbs: snapshot.breadcrumbs,
            inner: Box::new(content),
        }
    }
}

/// Settings tab column.
#[derive(Debug, Clone, Copy, Default)]
pub struct SettingsTabs;

impl PageDecorator for SettingsTabs {
    fn name(&self) -> &'static str {
        "settings_tabs"
    }

    fn wrap(&self, content: PageContent, ctx: &PageContext<'_>) -> PageContent {
        let tabs = settings_tabs(ctx.registry, &ctx.navigation.settings_path);
        let active = active_tab(&tabs, ctx.current_path).map(|tab| tab.path.clone());
        let heading = ctx
            .registry
            .get_route_by_path(&ctx.navigation.settings_path)
            .map_or("Settings", Route::title)
            .to_string();

        PageContent::SettingsFrame {
            heading,
            tabs,
            active,
            inner: Box::new(content),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CenteredCard {
    pub heading: Option<String>,
}

impl CenteredCard {
    pub fn with_heading(heading: impl Into<String>) -> Self {
        Self {
            heading: Some(heading.into()),
        }
    }
}

impl PageDecorator for CenteredCard {
    fn name(&self) -> &'static str {
        "centered_card"
    }

    fn wrap(&self, content: PageContent, _ctx: &PageContext<'_>) -> PageContent {
        PageContent::Centered {
            heading: self.heading.clone(),
            inner: Box::new(content),
        }
    }
}

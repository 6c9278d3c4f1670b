//! Page composition subsystem.
//!
//! # Data Flow
//! ```text
//! current path + session flag
//!     → template.rs (pick Dashboard / Settings / Auth / Error)
//!     → decorator.rs (pipeline: admission checks, then wrapping)
//!     → content.rs (serialisable layout tree handed to the renderer)
//! ```
//!
//! # Design Decisions
//! - Decorators are values in an ordered list, not nested closures
//! - Declared order is outermost first: auth check, theme, layout chrome
//! - Admission runs in declared order; the first refusal replaces the page
//! - Components are referenced, never invoked

pub mod content;
pub mod decorator;
pub mod template;

pub use content::{ComposedPage, PageContent};
pub use decorator::{
    AuthCheck, CenteredCard, DashboardChrome, PageContext, PageDecorator, Pipeline, SettingsTabs,
    Theme,
};
pub use template::{compose, Template};

//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Route Compilation (at startup):
//!     RouteConfig[]
//!     → registry.rs (nest children, attach flat declarations, validate)
//!     → Full-path index
//!     → Freeze as immutable RouteRegistry
//!
//! Navigation Query (current path string):
//!     → registry.rs (lookup by full path)
//!     → matcher.rs (active rule: exact, child, prefix)
//!     → breadcrumbs.rs / navigation.rs (derived views)
//!     → Return: freshly built view, nothing cached
//! ```
//!
//! # Design Decisions
//! - Routes compiled at startup, immutable at runtime
//! - No regex (prefix matching on segment boundaries only)
//! - Deterministic: same table and path always give the same answer
//! - Unknown paths are answers, not errors

pub mod breadcrumbs;
pub mod matcher;
pub mod navigation;
pub mod registry;
pub mod route;

pub use breadcrumbs::Breadcrumb;
pub use navigation::{NavItem, NavigationSnapshot, SettingsTab, SidebarGroups};
pub use registry::{RegistryError, RouteIssue, RouteRegistry};
pub use route::{ComponentRef, Route};

//! User settings subsystem.
//!
//! # Responsibilities
//! - Hold a user's profile and preference record
//! - Toggle any boolean preference through a single `set(field, value)`
//! - Share one in-memory record between request handlers
//!
//! # Design Decisions
//! - Every toggle is named by a `SettingField`, no per-field setters
//! - Field identifiers are kebab-case strings on the wire
//! - In-memory only; nothing is persisted

pub mod store;
pub mod user;

pub use store::SettingsStore;
pub use user::{NotificationSettings, PrivacySettings, SettingField, UnknownField, UserSettings};

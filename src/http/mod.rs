//! HTTP API subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware, graceful shutdown)
//!     → request.rs (request ID assigned or propagated)
//!     → handlers.rs (query params → routing core → JSON)
//!     → response.rs (error → status code mapping)
//!     → Send to client
//! ```
//!
//! # Design Decisions
//! - Handlers load the current registry snapshot once per request
//! - Reloads replace the whole snapshot atomically (ArcSwap)
//! - Missing `path` parameters mean the root path

pub mod handlers;
pub mod request;
pub mod response;
pub mod server;

pub use request::{MakeRequestUuid, X_REQUEST_ID};
pub use response::ApiError;
pub use server::{AppState, HttpServer, Snapshot};

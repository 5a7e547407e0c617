//! # Link Shortener
//!
//! A small URL shortening service built with Axum and SQLite.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Link entities and the repository trait
//! - **Application Layer** ([`application`]) - The link registry: code allocation, lookup, stats
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite pool and repository
//! - **API Layer** ([`api`]) - REST API handlers, DTOs, and middleware
//!
//! ## Features
//!
//! - Random short codes with collision retry, or user-chosen custom codes
//! - Same URL submitted twice maps to the same link
//! - Atomic click counting on redirect
//! - Bounded store calls with retry on transient failures
//!
//! ## Quick Start
//!
//! ```bash
//! export DATABASE_URL="sqlite://url_shortener.db?mode=rwc"
//! export BASE_URL="http://localhost:8000"
//!
//! # Migrations run on startup
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::LinkService;
    pub use crate::config::RegistryConfig;
    pub use crate::domain::entities::{Link, NewLink, RegistryStats};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}

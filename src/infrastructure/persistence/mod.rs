//! SQLite persistence.
//!
//! Concrete implementations of domain repository traits using SQLx.
//!
//! - [`pool`] - Connection pool construction and embedded migrations
//! - [`SqliteLinkRepository`] - Link storage, lookup and click counting

pub mod pool;
pub mod sqlite_link_repository;

pub use pool::{MIGRATOR, connect_pool};
pub use sqlite_link_repository::SqliteLinkRepository;

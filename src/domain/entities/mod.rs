//! Core domain entities.
//!
//! - [`Link`] - A stored short link with its click counter
//! - [`NewLink`] - Input for creating a link
//! - [`LinkTotals`] / [`RegistryStats`] - Service-wide aggregates

pub mod link;

pub use link::{Link, LinkTotals, NewLink, RegistryStats};

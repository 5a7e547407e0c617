//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::LinkService;
use crate::infrastructure::persistence::SqliteLinkRepository;

/// Link registry backed by SQLite.
pub type Registry = LinkService<SqliteLinkRepository>;

#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<Registry>,
}

impl AppState {
    pub fn new(link_service: Arc<Registry>) -> Self {
        Self { link_service }
    }
}

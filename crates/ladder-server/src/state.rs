//! Shared application state.

use ladder_adapter_pg::Database;
use std::sync::Arc;

/// State handed to every handler.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    database: Database,
}

impl AppState {
    pub fn new(database: Database) -> Self {
        Self {
            inner: Arc::new(AppStateInner { database }),
        }
    }

    pub fn database(&self) -> &Database {
        &self.inner.database
    }
}

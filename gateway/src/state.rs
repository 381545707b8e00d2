//! Shared request-handler state.

use std::sync::Arc;

use fxquote_fx::RateTable;

/// State handed to every handler. Cloning only bumps the table's refcount.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Rate table, read-only after startup.
    pub rates: Arc<RateTable>,
}

impl AppState {
    pub fn new(rates: RateTable) -> Self {
        Self {
            rates: Arc::new(rates),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(RateTable::reference())
    }
}

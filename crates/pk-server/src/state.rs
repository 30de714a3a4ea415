use pk_conn::ConnRegistry;
use pk_store::Store;
use pk_table::TableRegistry;
use std::sync::Arc;

/// Shared, `Arc`-wrapped context passed into every handler. Replaces the
/// source's global table registry / connection map / logger with an
/// explicit context whose lifetime is bound to the dispatch loop.
pub struct AppState<S: Store> {
    pub store: S,
    pub tables: TableRegistry,
    pub conns: ConnRegistry,
}

impl<S: Store> AppState<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            tables: TableRegistry::new(),
            conns: ConnRegistry::new(),
        }
    }
}

pub type SharedState<S> = Arc<AppState<S>>;

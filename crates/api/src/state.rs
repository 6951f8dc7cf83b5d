use std::sync::Arc;

use practices_db::PracticeStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (the store is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Storage adapter selected at startup.
    pub store: Arc<dyn PracticeStore>,
}

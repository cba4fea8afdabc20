use std::sync::Arc;

use sqlx::PgPool;

use crate::llm_client::ChatModel;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    /// The chat-completion model behind a trait object so tests can swap in
    /// a stub without touching handlers or the engine.
    pub llm: Arc<dyn ChatModel>,
}

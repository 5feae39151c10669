use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::CompletionProvider;
use crate::store::Store;

/// Shared application state injected into all route handlers via Axum extractors.
/// Built once in `main`; every handle inside is read-only.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Store>,
    pub llm: Arc<dyn CompletionProvider>,
    pub config: Config,
}

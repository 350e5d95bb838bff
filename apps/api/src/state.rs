use std::sync::Arc;

use crate::config::Config;
use crate::tailoring::rewriter::ResumeRewriter;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Stateless across requests: the rewriter is the only collaborator and the
/// config is immutable after startup.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable rewriter. Production: `LlmRewriter`; tests use stubs.
    pub rewriter: Arc<dyn ResumeRewriter>,
    pub config: Config,
}

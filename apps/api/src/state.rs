use std::sync::Arc;

use crate::config::Config;
use crate::directory::SkillDirectory;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Source of candidate and job skills. Default: `PgSkillDirectory`.
    pub directory: Arc<dyn SkillDirectory>,
}

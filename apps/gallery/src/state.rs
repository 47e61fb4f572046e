use crate::config::Config;
use crate::layout::Breakpoints;

/// Shared application state injected into all route handlers via Axum extractors.
/// Read-only: every request builds and balances its own layout.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Viewport breakpoints resolved from `config` once at startup.
    pub breakpoints: Breakpoints,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let breakpoints = config.breakpoints();
        Self {
            config,
            breakpoints,
        }
    }
}

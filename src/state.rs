use std::sync::Arc;

use crate::config::Config;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub config: Config,
    /// The hosting document with the page mounted, rendered once at startup.
    pub document: String,
}

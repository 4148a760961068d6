// src/state.rs
use std::sync::Arc;

use crate::config::Config;
use crate::services::completion::CompletionBackend;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub config: Config,
    pub completion: Arc<dyn CompletionBackend>,
}

impl AppState {
    pub fn new(config: Config, completion: Arc<dyn CompletionBackend>) -> Self {
        Self { config, completion }
    }
}

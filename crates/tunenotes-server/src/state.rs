//! Shared application state

use crate::service::NotesService;
use std::sync::Arc;
use tunenotes_core::Config;

pub struct AppState {
    pub config: Config,
    pub notes: Arc<dyn NotesService>,
}

impl AppState {
    pub fn new(config: Config, notes: Arc<dyn NotesService>) -> Self {
        Self { config, notes }
    }
}

use std::sync::Arc;

use crate::config::Settings;
use crate::models::ParamBounds;

#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
    pub bounds: Arc<ParamBounds>,
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings: Arc::new(settings),
            bounds: Arc::new(ParamBounds::default()),
        }
    }
}

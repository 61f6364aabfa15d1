pub mod api;
pub mod config;
pub mod error;
pub mod form;
pub mod logging;
pub mod predictor;

use config::Config;
use predictor::PredictorClient;

/// Application state that will be shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub predictor: PredictorClient,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            predictor: PredictorClient::new(config.predictor_url.clone()),
        }
    }
}

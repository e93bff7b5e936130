use crate::modules::high_score::use_cases::get_high_score::handler::GetHighScoreHandler;
use crate::modules::high_score::use_cases::submit_score::handler::SubmitScoreHandler;
use crate::shared::infrastructure::cache::in_memory::InMemoryCache;
use crate::shell::config::Config;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub get_high_score: Arc<GetHighScoreHandler<InMemoryCache<i64>>>,
    pub submit_score: Arc<SubmitScoreHandler<InMemoryCache<i64>>>,
}

impl AppState {
    pub fn new(config: &Config, cache: Arc<InMemoryCache<i64>>) -> Self {
        Self {
            get_high_score: Arc::new(GetHighScoreHandler::new(&config.key, cache.clone())),
            submit_score: Arc::new(SubmitScoreHandler::new(&config.key, config.ttl, cache)),
        }
    }
}

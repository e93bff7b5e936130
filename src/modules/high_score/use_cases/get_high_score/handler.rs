use crate::modules::high_score::core::state::HighScoreState;
use crate::modules::high_score::use_cases::errors::ApplicationError;
use crate::shared::infrastructure::cache::ExpiringCache;
use std::sync::Arc;

pub struct GetHighScoreHandler<TCache>
where
    TCache: ExpiringCache<i64> + Send + Sync + 'static,
{
    key: String,
    cache: Arc<TCache>,
}

impl<TCache> GetHighScoreHandler<TCache>
where
    TCache: ExpiringCache<i64> + Send + Sync + 'static,
{
    pub fn new(key: impl Into<String>, cache: Arc<TCache>) -> Self {
        Self {
            key: key.into(),
            cache,
        }
    }

    /// Current record, or `0` when nothing is stored or the entry expired.
    pub async fn handle(&self) -> Result<i64, ApplicationError> {
        let stored = self.cache.get(&self.key).await?;
        Ok(HighScoreState::from(stored).value())
    }
}

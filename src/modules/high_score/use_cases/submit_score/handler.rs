use crate::modules::high_score::core::state::HighScoreState;
use crate::modules::high_score::use_cases::errors::ApplicationError;
use crate::modules::high_score::use_cases::submit_score::command::SubmitScore;
use crate::modules::high_score::use_cases::submit_score::decide::decide_submit;
use crate::modules::high_score::use_cases::submit_score::decision::Decision;
use crate::shared::infrastructure::cache::{CacheError, ExpiringCache};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

pub const MAX_ATTEMPTS: u32 = 8;

pub struct SubmitScoreHandler<TCache>
where
    TCache: ExpiringCache<i64> + Send + Sync + 'static,
{
    key: String,
    ttl: Duration,
    cache: Arc<TCache>,
}

impl<TCache> SubmitScoreHandler<TCache>
where
    TCache: ExpiringCache<i64> + Send + Sync + 'static,
{
    pub fn new(key: impl Into<String>, ttl: Duration, cache: Arc<TCache>) -> Self {
        Self {
            key: key.into(),
            ttl,
            cache,
        }
    }

    /// Returns whether `command.candidate` became the new high score.
    ///
    /// The write is a compare-and-swap against the value the decision was made on.
    /// When another writer got in between, the record is reloaded and the
    /// candidate decided again, so only a score that still beats the latest
    /// record is ever stored.
    pub async fn handle(&self, command: SubmitScore) -> Result<bool, ApplicationError> {
        for attempt in 1..=MAX_ATTEMPTS {
            let state = HighScoreState::from(self.cache.get(&self.key).await?);

            let high_score = match decide_submit(&state, command) {
                Decision::Accepted { high_score } => high_score,
                Decision::Rejected { reason } => {
                    debug!(%reason, "score rejected");
                    return Ok(false);
                }
            };

            match self
                .cache
                .compare_and_swap(&self.key, state.stored(), high_score, self.ttl)
                .await
            {
                Ok(()) => {
                    info!(high_score, previous = state.value(), "high score updated");
                    return Ok(true);
                }
                Err(CacheError::Conflict { .. }) => {
                    debug!(attempt, candidate = command.candidate, "high score changed while submitting");
                }
                Err(e) => return Err(ApplicationError::Store(e)),
            }
        }

        warn!(candidate = command.candidate, attempts = MAX_ATTEMPTS, "giving up on contended submission");
        Err(ApplicationError::Contention {
            attempts: MAX_ATTEMPTS,
        })
    }
}

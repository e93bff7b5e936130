use crate::shared::infrastructure::cache::CacheError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Store(#[from] CacheError),

    #[error("high score kept changing, gave up after {attempts} attempts")]
    Contention { attempts: u32 },
}

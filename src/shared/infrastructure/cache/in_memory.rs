use crate::shared::infrastructure::cache::{CacheError, ExpiringCache};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::Instant;

struct Entry<Value> {
    value: Value,
    expires_at: Instant,
}

impl<Value> Entry<Value> {
    fn is_live(&self, now: Instant) -> bool {
        self.expires_at > now
    }
}

pub struct InMemoryCache<Value: Clone + PartialEq + Send + Sync + 'static> {
    entries: Mutex<HashMap<String, Entry<Value>>>,
    is_offline: bool,
    delay_get_ms: AtomicU64,
}

impl<Value: Clone + PartialEq + Send + Sync + 'static> Default for InMemoryCache<Value> {
    fn default() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            is_offline: false,
            delay_get_ms: AtomicU64::new(0),
        }
    }
}

impl<Value: Clone + PartialEq + Send + Sync + 'static> InMemoryCache<Value> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    /// Sleeps after every read, widening the window between a read and a later write.
    pub fn set_delay_get_ms(&self, ms: u64) {
        self.delay_get_ms.store(ms, Ordering::SeqCst);
    }

    fn ensure_online(&self) -> Result<(), CacheError> {
        if self.is_offline {
            return Err(CacheError::Unavailable("Cache offline".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl<Value> ExpiringCache<Value> for InMemoryCache<Value>
where
    Value: Clone + PartialEq + Send + Sync + 'static,
{
    async fn get(&self, key: &str) -> Result<Option<Value>, CacheError> {
        self.ensure_online()?;
        let value = {
            let mut guard = self.entries.lock().await;
            let now = Instant::now();
            let live = guard
                .get(key)
                .filter(|entry| entry.is_live(now))
                .map(|entry| entry.value.clone());
            if live.is_none() {
                guard.remove(key);
            }
            live
        };

        let delay = self.delay_get_ms.load(Ordering::SeqCst);
        if delay > 0 {
            tokio::time::sleep(Duration::from_millis(delay)).await;
        }
        Ok(value)
    }

    async fn set(&self, key: &str, value: Value, ttl: Duration) -> Result<(), CacheError> {
        self.ensure_online()?;
        let expires_at = Instant::now() + ttl;
        self.entries
            .lock()
            .await
            .insert(key.to_string(), Entry { value, expires_at });
        Ok(())
    }

    async fn compare_and_swap(
        &self,
        key: &str,
        expected: Option<Value>,
        value: Value,
        ttl: Duration,
    ) -> Result<(), CacheError> {
        self.ensure_online()?;
        let mut guard = self.entries.lock().await;
        let now = Instant::now();
        let actual = guard
            .get(key)
            .filter(|entry| entry.is_live(now))
            .map(|entry| &entry.value);
        if actual != expected.as_ref() {
            return Err(CacheError::Conflict {
                key: key.to_string(),
            });
        }
        guard.insert(
            key.to_string(),
            Entry {
                value,
                expires_at: now + ttl,
            },
        );
        Ok(())
    }
}

#[cfg(test)]
mod in_memory_cache_tests {
    use super::*;
    use rstest::{fixture, rstest};

    const KEY: &str = "high_score";
    const TTL: Duration = Duration::from_secs(3600);

    #[fixture]
    fn cache() -> InMemoryCache<i64> {
        InMemoryCache::new()
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_read_absent_for_an_unknown_key(cache: InMemoryCache<i64>) {
        assert_eq!(cache.get(KEY).await.unwrap(), None);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_set_and_get_a_value(cache: InMemoryCache<i64>) {
        cache.set(KEY, 42, TTL).await.expect("set failed");
        assert_eq!(cache.get(KEY).await.unwrap(), Some(42));
    }

    #[rstest]
    #[tokio::test(start_paused = true)]
    async fn it_should_expire_a_value_once_its_ttl_elapses(cache: InMemoryCache<i64>) {
        cache.set(KEY, 42, TTL).await.unwrap();

        tokio::time::advance(TTL - Duration::from_secs(1)).await;
        assert_eq!(cache.get(KEY).await.unwrap(), Some(42));

        tokio::time::advance(Duration::from_secs(1)).await;
        assert_eq!(cache.get(KEY).await.unwrap(), None);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_swap_when_the_expected_value_matches(cache: InMemoryCache<i64>) {
        cache
            .compare_and_swap(KEY, None, 10, TTL)
            .await
            .expect("swap on absent key failed");
        cache
            .compare_and_swap(KEY, Some(10), 11, TTL)
            .await
            .expect("swap on matching value failed");
        assert_eq!(cache.get(KEY).await.unwrap(), Some(11));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fail_to_swap_when_the_value_changed(cache: InMemoryCache<i64>) {
        cache.set(KEY, 20, TTL).await.unwrap();
        let result = cache.compare_and_swap(KEY, Some(10), 11, TTL).await;
        assert!(matches!(result, Err(CacheError::Conflict { key }) if key == KEY));
        assert_eq!(cache.get(KEY).await.unwrap(), Some(20));
    }

    #[rstest]
    #[tokio::test(start_paused = true)]
    async fn it_should_treat_an_expired_entry_as_absent_when_swapping(cache: InMemoryCache<i64>) {
        cache.set(KEY, 20, TTL).await.unwrap();
        tokio::time::advance(TTL).await;

        let stale = cache.compare_and_swap(KEY, Some(20), 21, TTL).await;
        assert!(matches!(stale, Err(CacheError::Conflict { .. })));

        cache
            .compare_and_swap(KEY, None, 5, TTL)
            .await
            .expect("swap against expired entry failed");
        assert_eq!(cache.get(KEY).await.unwrap(), Some(5));
    }

    #[rstest]
    #[tokio::test(start_paused = true)]
    async fn it_should_refresh_the_ttl_on_swap(cache: InMemoryCache<i64>) {
        cache.set(KEY, 1, TTL).await.unwrap();
        tokio::time::advance(Duration::from_secs(1800)).await;
        cache.compare_and_swap(KEY, Some(1), 2, TTL).await.unwrap();

        tokio::time::advance(Duration::from_secs(1800)).await;
        assert_eq!(cache.get(KEY).await.unwrap(), Some(2));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fail_every_operation_when_offline(mut cache: InMemoryCache<i64>) {
        cache.toggle_offline();

        let get = cache.get(KEY).await;
        let set = cache.set(KEY, 1, TTL).await;
        let swap = cache.compare_and_swap(KEY, None, 1, TTL).await;

        for result in [get.map(|_| ()), set, swap] {
            assert!(
                result
                    .unwrap_err()
                    .to_string()
                    .contains("Cache offline")
            );
        }
    }
}

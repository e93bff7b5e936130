use crate::shared::infrastructure::cache::in_memory::InMemoryCache;
use crate::shell::config::Config;
use crate::shell::state::AppState;
use std::sync::Arc;

pub fn make_test_state() -> (AppState, Arc<InMemoryCache<i64>>) {
    let cache = Arc::new(InMemoryCache::<i64>::new());
    (AppState::new(&Config::default(), cache.clone()), cache)
}

pub fn make_offline_cache_state() -> AppState {
    let mut cache = InMemoryCache::<i64>::new();
    cache.toggle_offline();
    AppState::new(&Config::default(), Arc::new(cache))
}

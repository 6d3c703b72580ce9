use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::error::AvailabilityResult;
use crate::models::{Screen, Show};
use crate::sources::ShowSource;

pub mod shows;

/// Хранилище строк для кеша (в проде - Redis).
#[async_trait]
pub trait CacheBackend: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, redis::RedisError>;

    async fn set_ex(&self, key: &str, value: String, ttl_seconds: u64) -> Result<(), redis::RedisError>;
}

/// Кеш сеансов и залов поверх основного источника.
///
/// Включается только явно (`REDIS_URL` и `SHOW_CACHE_TTL_SECONDS > 0`).
/// Пока запись живет, удаленный сеанс или перенос сеанса в другой зал не
/// видны: отчет строится по закешированным данным до истечения TTL.
/// Места и бронирования через кеш не проходят.
#[derive(Clone)]
pub struct ShowCache {
    backend: Arc<dyn CacheBackend>,
    inner: Arc<dyn ShowSource>,
    ttl_seconds: u64,
}

impl ShowCache {
    pub fn new(backend: Arc<dyn CacheBackend>, inner: Arc<dyn ShowSource>, ttl_seconds: u64) -> Self {
        Self { backend, inner, ttl_seconds }
    }
}

#[async_trait]
impl ShowSource for ShowCache {
    async fn find_show(&self, show_id: i32) -> AvailabilityResult<Option<Show>> {
        let key = shows::show_key(show_id);

        // Сначала пробуем кеш
        if let Some(show) = self.get_from_cache::<Show>(&key).await {
            return Ok(Some(show));
        }

        // Если в кеше нет или кеш не работает - идем в БД
        let show = self.inner.find_show(show_id).await?;
        if let Some(ref show) = show {
            self.save_to_cache(&key, show).await;
        }
        Ok(show)
    }

    async fn find_screen(&self, screen_id: i32) -> AvailabilityResult<Option<Screen>> {
        let key = shows::screen_key(screen_id);

        if let Some(screen) = self.get_from_cache::<Screen>(&key).await {
            return Ok(Some(screen));
        }

        let screen = self.inner.find_screen(screen_id).await?;
        if let Some(ref screen) = screen {
            self.save_to_cache(&key, screen).await;
        }
        Ok(screen)
    }
}

impl ShowCache {
    async fn get_from_cache<T: serde::de::DeserializeOwned>(&self, key: &str) -> Option<T> {
        match self.backend.get(key).await {
            Ok(Some(data)) => match serde_json::from_str(&data) {
                Ok(value) => {
                    debug!("Cache HIT {}", key);
                    Some(value)
                }
                Err(e) => {
                    warn!("Cached {} is unreadable, reloading: {:?}", key, e);
                    None
                }
            },
            Ok(None) => {
                debug!("Cache MISS {}", key);
                None
            }
            Err(e) => {
                warn!("Cache read failed for {}, falling back to DB: {:?}", key, e);
                None
            }
        }
    }

    // Ошибка записи не критична: следующий запрос снова сходит в БД
    async fn save_to_cache<T: serde::Serialize>(&self, key: &str, value: &T) {
        let data = match serde_json::to_string(value) {
            Ok(data) => data,
            Err(e) => {
                warn!("Failed to serialize {} for cache: {:?}", key, e);
                return;
            }
        };
        if let Err(e) = self.backend.set_ex(key, data, self.ttl_seconds).await {
            warn!("Failed to cache {}: {:?}", key, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::InMemoryStore;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    #[derive(Default)]
    struct MemoryBackend {
        entries: Mutex<HashMap<String, String>>,
        broken: bool,
    }

    impl MemoryBackend {
        fn broken() -> Self {
            Self { broken: true, ..Self::default() }
        }

        fn failure() -> redis::RedisError {
            redis::RedisError::from((redis::ErrorKind::IoError, "connection refused"))
        }
    }

    #[async_trait]
    impl CacheBackend for MemoryBackend {
        async fn get(&self, key: &str) -> Result<Option<String>, redis::RedisError> {
            if self.broken {
                return Err(Self::failure());
            }
            Ok(self.entries.lock().unwrap().get(key).cloned())
        }

        async fn set_ex(&self, key: &str, value: String, _ttl: u64) -> Result<(), redis::RedisError> {
            if self.broken {
                return Err(Self::failure());
            }
            self.entries.lock().unwrap().insert(key.to_string(), value);
            Ok(())
        }
    }

    /// Считает обращения к основному источнику.
    struct CountingSource {
        store: InMemoryStore,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl ShowSource for CountingSource {
        async fn find_show(&self, show_id: i32) -> AvailabilityResult<Option<Show>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.store.find_show(show_id).await
        }

        async fn find_screen(&self, screen_id: i32) -> AvailabilityResult<Option<Screen>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.store.find_screen(screen_id).await
        }
    }

    fn source() -> Arc<CountingSource> {
        Arc::new(CountingSource {
            store: InMemoryStore::new().with_screen(10, "Screen 1", 10).with_show(1, "Dune", 10),
            calls: AtomicUsize::new(0),
        })
    }

    #[tokio::test]
    async fn miss_loads_from_source_and_hit_skips_it() {
        let inner = source();
        let backend = Arc::new(MemoryBackend::default());
        let cache = ShowCache::new(backend.clone(), inner.clone(), 60);

        let first = cache.find_show(1).await.unwrap();
        assert_eq!(first.as_ref().map(|s| s.movie_name.as_str()), Some("Dune"));
        assert_eq!(inner.calls.load(Ordering::SeqCst), 1);
        assert!(backend.entries.lock().unwrap().contains_key("show:1"));

        let second = cache.find_show(1).await.unwrap();
        assert_eq!(second, first);
        assert_eq!(inner.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn broken_backend_falls_back_to_source() {
        let inner = source();
        let cache = ShowCache::new(Arc::new(MemoryBackend::broken()), inner.clone(), 60);

        let screen = cache.find_screen(10).await.unwrap();
        assert_eq!(screen.map(|s| s.screen_name), Some("Screen 1".to_string()));

        assert!(cache.find_show(1).await.unwrap().is_some());
        assert_eq!(inner.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn unknown_show_is_not_cached() {
        let inner = source();
        let backend = Arc::new(MemoryBackend::default());
        let cache = ShowCache::new(backend.clone(), inner.clone(), 60);

        assert!(cache.find_show(404).await.unwrap().is_none());
        assert!(cache.find_show(404).await.unwrap().is_none());
        assert_eq!(inner.calls.load(Ordering::SeqCst), 2);
        assert!(backend.entries.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn unreadable_entry_is_reloaded() {
        let inner = source();
        let backend = Arc::new(MemoryBackend::default());
        backend.entries.lock().unwrap().insert("show:1".to_string(), "{not json".to_string());
        let cache = ShowCache::new(backend, inner.clone(), 60);

        assert!(cache.find_show(1).await.unwrap().is_some());
        assert_eq!(inner.calls.load(Ordering::SeqCst), 1);
    }
}

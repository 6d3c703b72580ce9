pub mod config;
pub mod database;
pub mod redis_client;
pub mod models;
pub mod controllers;
pub mod cache;
pub mod services;
pub mod sources;
pub mod error;

use std::sync::Arc;
use tracing::{info, warn};

use crate::services::availability::AvailabilityService;
use crate::sources::ShowSource;

// Shared state для всего приложения
#[derive(Clone)]
pub struct AppState {
    pub config: config::Config,
    pub availability: AvailabilityService,
}

impl AppState {
    /// Подключается к БД (и к Redis, если он настроен) и собирает сервисы.
    pub async fn new(config: config::Config) -> anyhow::Result<Arc<Self>> {
        let db = database::Database::connect(&config.database).await?;

        if config.database.run_migrations {
            db.run_migrations().await?;
        }

        let db = Arc::new(db);
        let shows: Arc<dyn ShowSource> = match config.redis.url.as_deref() {
            Some(url) if config.redis.show_cache_ttl_seconds > 0 => {
                match redis_client::RedisClient::connect(url).await {
                    Ok(redis) => {
                        info!(
                            "Show cache enabled, TTL {}s",
                            config.redis.show_cache_ttl_seconds
                        );
                        let cached: Arc<dyn ShowSource> = Arc::new(cache::ShowCache::new(
                            Arc::new(redis),
                            db.clone(),
                            config.redis.show_cache_ttl_seconds,
                        ));
                        cached
                    }
                    Err(e) => {
                        // Без кеша сервис работает, просто медленнее
                        warn!("Redis unavailable, show cache disabled: {:?}", e);
                        db.clone()
                    }
                }
            }
            _ => {
                info!("Show cache disabled, shows are read from the database on every request");
                db.clone()
            }
        };

        let availability = AvailabilityService::new(shows, db.clone(), db)
            .with_ignored_statuses(config.availability.ignored_booking_statuses.clone());

        Ok(Arc::new(Self::from_parts(config, availability)))
    }

    pub fn from_parts(config: config::Config, availability: AvailabilityService) -> Self {
        Self { config, availability }
    }
}

//! Explicit construction of the user service and its collaborators.

use deadpool_redis::{Config as RedisConfig, Pool, Runtime};
use roster_config::{
    AppConfig, CacheBackend, CacheConfig, NotificationBackend, NotificationConfig, StorageBackend,
    StorageConfig,
};
use roster_core::{RosterError, RosterResult};
use roster_repository::{create_pool, DatabasePool, InMemoryUserRepository, SqliteUserRepository, UserRepository};
use roster_service::{
    BroadcastNotificationChannel, CreateInvalidation, InMemoryUserCache, LoggingNotificationChannel,
    NoopUserCache, NotificationChannel, NotificationEvent, RedisNotificationChannel, RedisUserCache,
    UserCache, UserService, UserServiceImpl,
};
use std::sync::Arc;
use tokio::sync::broadcast;
use tokio::task::JoinHandle;
use tracing::{info, warn};

/// Everything the HTTP layer needs plus the handles that must be closed on
/// shutdown.
pub struct Components {
    pub user_service: Arc<dyn UserService>,
    pub database: Option<Arc<DatabasePool>>,
    pub event_logger: Option<JoinHandle<()>>,
}

impl Components {
    /// Releases external resources.
    pub async fn shutdown(self) {
        if let Some(handle) = self.event_logger {
            handle.abort();
        }
        if let Some(pool) = self.database {
            pool.close().await;
        }
    }
}

/// Builds the record store, cache, notification channel and user service
/// selected by `config`.
pub async fn build_components(config: &AppConfig) -> RosterResult<Components> {
    let (repository, database) = build_repository(&config.storage).await?;
    let cache = build_cache(&config.cache)?;
    let (notifier, event_logger) = build_notifier(&config.notifications)?;

    let service = UserServiceImpl::new(repository, cache, notifier).with_create_invalidation(
        CreateInvalidation::from_flag(config.cache.invalidate_all_on_create),
    );

    Ok(Components {
        user_service: Arc::new(service),
        database,
        event_logger,
    })
}

/// Builds the record store.
pub async fn build_repository(
    config: &StorageConfig,
) -> RosterResult<(Arc<dyn UserRepository>, Option<Arc<DatabasePool>>)> {
    match config.backend {
        StorageBackend::Memory => {
            info!("Using in-memory record store");
            Ok((Arc::new(InMemoryUserRepository::new()), None))
        }
        StorageBackend::Sqlite => {
            let pool = create_pool(config).await?;
            let repository = SqliteUserRepository::new(Arc::clone(&pool));
            Ok((Arc::new(repository), Some(pool)))
        }
    }
}

/// Builds the user cache.
pub fn build_cache(config: &CacheConfig) -> RosterResult<Arc<dyn UserCache>> {
    match config.backend {
        CacheBackend::Memory => {
            info!("Using in-memory user cache");
            Ok(Arc::new(InMemoryUserCache::new()))
        }
        CacheBackend::Redis => {
            info!("Using Redis user cache at {}", config.redis_url);
            let pool = redis_pool(&config.redis_url)?;
            Ok(Arc::new(RedisUserCache::new(pool, config.ttl())))
        }
        CacheBackend::Disabled => {
            warn!("User cache disabled, every read goes to the record store");
            Ok(Arc::new(NoopUserCache))
        }
    }
}

/// Builds the notification channel. The broadcast channel comes with a task
/// that logs every event it carries.
pub fn build_notifier(
    config: &NotificationConfig,
) -> RosterResult<(Arc<dyn NotificationChannel>, Option<JoinHandle<()>>)> {
    match config.backend {
        NotificationBackend::Broadcast => {
            let channel = BroadcastNotificationChannel::with_capacity(config.buffer_size);
            let handle = spawn_event_logger(channel.subscribe());
            Ok((Arc::new(channel), Some(handle)))
        }
        NotificationBackend::Redis => {
            info!("Publishing notifications to Redis at {}", config.redis_url);
            let pool = redis_pool(&config.redis_url)?;
            Ok((Arc::new(RedisNotificationChannel::new(pool)), None))
        }
        NotificationBackend::Log => Ok((Arc::new(LoggingNotificationChannel), None)),
    }
}

fn redis_pool(url: &str) -> RosterResult<Arc<Pool>> {
    RedisConfig::from_url(url)
        .create_pool(Some(Runtime::Tokio1))
        .map(Arc::new)
        .map_err(|e| RosterError::Configuration(format!("Failed to create Redis pool: {}", e)))
}

fn spawn_event_logger(mut rx: broadcast::Receiver<NotificationEvent>) -> JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            match rx.recv().await {
                Ok(event) => info!(
                    topic = %event.topic,
                    event = %event.event_name,
                    event_id = %event.event_id,
                    "{}",
                    event.payload
                ),
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    warn!("Event logger lagged, skipped {} events", skipped);
                }
                Err(broadcast::error::RecvError::Closed) => break,
            }
        }
    })
}

//! PostgreSQL 连接管理

use std::time::{Duration, Instant};

use catalog_errors::{AppError, AppResult};
use sqlx::postgres::{PgPool, PgPoolOptions};
use tracing::debug;

/// PostgreSQL 连接池配置
#[derive(Debug, Clone)]
pub struct PostgresConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    /// 获取连接的等待上限，也约束建池时的首次连接
    pub acquire_timeout: Duration,
    pub idle_timeout: Duration,
}

impl PostgresConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_connections: 10,
            min_connections: 1,
            acquire_timeout: Duration::from_secs(30),
            idle_timeout: Duration::from_secs(600),
        }
    }

    pub fn with_max_connections(mut self, max: u32) -> Self {
        self.max_connections = max;
        // 最小连接数不能超过最大连接数
        self.min_connections = self.min_connections.min(max);
        self
    }

    pub fn with_acquire_timeout(mut self, timeout: Duration) -> Self {
        self.acquire_timeout = timeout;
        self
    }

    fn pool_options(&self) -> PgPoolOptions {
        PgPoolOptions::new()
            .max_connections(self.max_connections)
            .min_connections(self.min_connections)
            .acquire_timeout(self.acquire_timeout)
            .idle_timeout(self.idle_timeout)
    }
}

/// 创建 PostgreSQL 连接池并建立首个连接
pub async fn create_pool(config: &PostgresConfig) -> AppResult<PgPool> {
    config
        .pool_options()
        .connect(&config.url)
        .await
        .map_err(|e| AppError::database(format!("Failed to create pool: {}", e)))
}

/// 检查数据库连接，返回往返耗时
pub async fn check_connection(pool: &PgPool) -> AppResult<Duration> {
    let start = Instant::now();
    sqlx::query("SELECT 1")
        .execute(pool)
        .await
        .map_err(|e| AppError::database(format!("Database health check failed: {}", e)))?;

    let elapsed = start.elapsed();
    debug!(latency_ms = elapsed.as_millis() as u64, "Database ping");
    Ok(elapsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder() {
        let config = PostgresConfig::new("postgres://localhost/catalog")
            .with_max_connections(25)
            .with_acquire_timeout(Duration::from_secs(5));
        assert_eq!(config.url, "postgres://localhost/catalog");
        assert_eq!(config.max_connections, 25);
        assert_eq!(config.min_connections, 1);
        assert_eq!(config.acquire_timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_min_connections_clamped() {
        let config = PostgresConfig::new("postgres://localhost/catalog").with_max_connections(0);
        assert_eq!(config.min_connections, 0);
    }
}

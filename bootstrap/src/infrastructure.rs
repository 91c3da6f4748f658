//! 基础设施资源管理
//!
//! 统一管理服务共享的基础设施资源

use catalog_adapter_postgres::{PostgresConfig, create_pool};
use catalog_config::AppConfig;
use catalog_errors::AppResult;
use secrecy::ExposeSecret;
use sqlx::PgPool;
use tracing::info;

use crate::retry::{RetryConfig, with_retry};

/// 基础设施资源容器
///
/// 由 bootstrap 统一初始化；`PgPool` 内部引用计数，克隆开销很小
#[derive(Clone)]
pub struct Infrastructure {
    config: AppConfig,
    postgres_pool: PgPool,
}

impl Infrastructure {
    /// 从配置创建基础设施资源（带重试）
    pub async fn from_config(config: AppConfig) -> AppResult<Self> {
        let retry_config = RetryConfig::default();

        let pg_config = PostgresConfig::new(config.database.url.expose_secret())
            .with_max_connections(config.database.max_connections);
        let postgres_pool = with_retry(&retry_config, "PostgreSQL connection", || {
            let cfg = pg_config.clone();
            async move { create_pool(&cfg).await }
        })
        .await?;
        info!(
            max_connections = config.database.max_connections,
            "PostgreSQL connection pool created"
        );

        Ok(Self {
            config,
            postgres_pool,
        })
    }

    /// 获取应用配置
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// 获取 PostgreSQL 连接池
    pub fn postgres_pool(&self) -> PgPool {
        self.postgres_pool.clone()
    }
}

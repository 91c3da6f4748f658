//! PostgreSQL 迁移管理模块
//!
//! 版本化、带校验和的 SQL 迁移。每个迁移在独立事务中执行并记录到迁移表。

use std::collections::HashMap;

use catalog_errors::{AppError, AppResult};
use sqlx::PgPool;
use tracing::{info, warn};

/// 迁移记录
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct MigrationRecord {
    pub version: i64,
    pub name: String,
    pub applied_at: chrono::DateTime<chrono::Utc>,
    pub checksum: String,
}

/// 迁移定义
#[derive(Debug, Clone)]
pub struct Migration {
    pub version: i64,
    pub name: String,
    pub up_sql: String,
    pub checksum: String,
}

impl Migration {
    /// 创建新的迁移
    pub fn new(version: i64, name: impl Into<String>, up_sql: impl Into<String>) -> Self {
        let up_sql = up_sql.into();
        let checksum = Self::calculate_checksum(&up_sql);
        Self {
            version,
            name: name.into(),
            up_sql,
            checksum,
        }
    }

    /// FNV-1a 64 位校验和，跨进程、跨版本稳定
    fn calculate_checksum(sql: &str) -> String {
        const OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
        const PRIME: u64 = 0x0000_0100_0000_01b3;

        let hash = sql
            .bytes()
            .fold(OFFSET, |acc, b| (acc ^ u64::from(b)).wrapping_mul(PRIME));
        format!("{:016x}", hash)
    }
}

/// 迁移管理器
pub struct MigrationManager {
    pool: PgPool,
    table_name: String,
}

impl MigrationManager {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            table_name: "_migrations".to_string(),
        }
    }

    /// 设置迁移表名
    pub fn with_table_name(mut self, name: impl Into<String>) -> Self {
        self.table_name = name.into();
        self
    }

    /// 初始化迁移表
    async fn init(&self) -> AppResult<()> {
        let create_sql = format!(
            r#"
            CREATE TABLE IF NOT EXISTS {} (
                version BIGINT PRIMARY KEY,
                name VARCHAR(255) NOT NULL,
                applied_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
                checksum VARCHAR(64) NOT NULL
            )
            "#,
            self.table_name
        );

        sqlx::query(&create_sql)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to create migration table: {}", e)))?;

        Ok(())
    }

    /// 获取已应用的迁移
    async fn applied_migrations(&self) -> AppResult<Vec<MigrationRecord>> {
        let sql = format!(
            "SELECT version, name, applied_at, checksum FROM {} ORDER BY version ASC",
            self.table_name
        );

        sqlx::query_as::<_, MigrationRecord>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to get migrations: {}", e)))
    }

    /// 在事务中应用单个迁移
    async fn apply(&self, migration: &Migration) -> AppResult<()> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| AppError::database(format!("Failed to begin transaction: {}", e)))?;

        sqlx::raw_sql(&migration.up_sql)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                AppError::database(format!(
                    "Failed to apply migration {}: {}",
                    migration.version, e
                ))
            })?;

        let insert_sql = format!(
            "INSERT INTO {} (version, name, checksum) VALUES ($1, $2, $3)",
            self.table_name
        );
        sqlx::query(&insert_sql)
            .bind(migration.version)
            .bind(&migration.name)
            .bind(&migration.checksum)
            .execute(&mut *tx)
            .await
            .map_err(|e| AppError::database(format!("Failed to record migration: {}", e)))?;

        tx.commit()
            .await
            .map_err(|e| AppError::database(format!("Failed to commit migration: {}", e)))?;

        info!(
            version = migration.version,
            name = %migration.name,
            "Migration applied"
        );

        Ok(())
    }

    /// 应用所有待处理的迁移
    ///
    /// 已应用迁移的校验和不一致时返回错误，不会继续执行后续迁移。
    pub async fn migrate(&self, migrations: &[Migration]) -> AppResult<MigrationResult> {
        self.init().await?;

        let applied: HashMap<i64, String> = self
            .applied_migrations()
            .await?
            .into_iter()
            .map(|r| (r.version, r.checksum))
            .collect();

        let mut sorted: Vec<_> = migrations.iter().collect();
        sorted.sort_by_key(|m| m.version);

        let mut result = MigrationResult::default();
        for migration in sorted {
            match applied.get(&migration.version) {
                Some(checksum) if *checksum != migration.checksum => {
                    warn!(
                        version = migration.version,
                        name = %migration.name,
                        "Checksum mismatch - migration has been modified"
                    );
                    return Err(AppError::internal(format!(
                        "Migration {} ({}) has been modified after being applied",
                        migration.version, migration.name
                    )));
                }
                Some(_) => result.skipped.push(migration.version),
                None => {
                    self.apply(migration).await?;
                    result.applied.push(migration.version);
                }
            }
        }

        Ok(result)
    }
}

/// 迁移结果
#[derive(Debug, Clone, Default)]
pub struct MigrationResult {
    /// 本次应用的迁移版本
    pub applied: Vec<i64>,
    /// 已存在而跳过的迁移版本
    pub skipped: Vec<i64>,
}

impl MigrationResult {
    pub fn applied_count(&self) -> usize {
        self.applied.len()
    }
}

//! 数据库错误映射工具
//!
//! 提供统一的 SQLx 错误到 AppError 的转换

use catalog_errors::AppError;
use sqlx::error::DatabaseError;
use sqlx::postgres::PgDatabaseError;

/// 唯一约束冲突且驱动未给出详情时的提示
pub const UNIQUE_VIOLATION_FALLBACK: &str = "Record already exists";

/// 将 SQLx 错误转换为 AppError，区分不同错误类型
///
/// 唯一约束冲突映射为 `Conflict`，消息优先使用 PostgreSQL 的 `DETAIL`
/// （例如 `Key (slug)=(red_shoe) already exists.`）。
pub fn map_sqlx_error(e: sqlx::Error) -> AppError {
    match e {
        sqlx::Error::RowNotFound => AppError::not_found("Record not found"),
        sqlx::Error::Database(db_err) => map_database_error(db_err.as_ref()),
        sqlx::Error::PoolTimedOut => AppError::database("Database connection pool timeout"),
        sqlx::Error::PoolClosed => AppError::database("Database connection pool is closed"),
        sqlx::Error::Protocol(msg) => {
            AppError::database(format!("Database protocol error: {}", msg))
        }
        _ => AppError::database(e.to_string()),
    }
}

fn map_database_error(db_err: &dyn DatabaseError) -> AppError {
    let Some(code) = db_err.code() else {
        return AppError::database(db_err.to_string());
    };

    match code.as_ref() {
        // PostgreSQL 约束违规代码
        "23505" => {
            let detail = db_err
                .try_downcast_ref::<PgDatabaseError>()
                .and_then(PgDatabaseError::detail);
            unique_violation(detail)
        }
        "23514" => AppError::validation("Check constraint violation"),
        "23502" => AppError::validation("Not null constraint violation"),
        "22001" => AppError::validation("String data too long"),
        _ => AppError::database(format!("Database error ({}): {}", code, db_err)),
    }
}

/// 构造唯一约束冲突错误
pub fn unique_violation(detail: Option<&str>) -> AppError {
    match detail.map(str::trim).filter(|d| !d.is_empty()) {
        Some(detail) => AppError::conflict(detail),
        None => AppError::conflict(UNIQUE_VIOLATION_FALLBACK),
    }
}

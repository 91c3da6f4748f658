//! catalog-errors - 统一错误处理
//!
//! 基于 RFC 7807 Problem Details 规范

use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 应用错误类型
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl AppError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    pub fn database(msg: impl Into<String>) -> Self {
        Self::Database(msg.into())
    }

    /// 转换为 HTTP 状态码
    pub fn status_code(&self) -> u16 {
        match self {
            Self::NotFound(_) => 404,
            Self::Validation(_) => 400,
            Self::Conflict(_) => 409,
            Self::Internal(_) => 500,
            Self::Database(_) => 500,
        }
    }

    /// 是否为服务端错误（详情不对外暴露）
    pub fn is_server_error(&self) -> bool {
        self.status_code() >= 500
    }

    /// 转换为 Problem Details
    pub fn to_problem_details(&self) -> ProblemDetails {
        let detail = match self {
            Self::NotFound(msg) | Self::Validation(msg) | Self::Conflict(msg) => msg.clone(),
            // Internal 消息由调用方给出，不含内部细节
            Self::Internal(msg) => msg.clone(),
            Self::Database(_) => self.problem_title(),
        };

        ProblemDetails {
            r#type: self.problem_type(),
            title: self.problem_title(),
            status: self.status_code(),
            detail,
            instance: None,
        }
    }

    fn problem_type(&self) -> String {
        match self {
            Self::NotFound(_) => "https://api.catalog.dev/problems/not-found".to_string(),
            Self::Validation(_) => "https://api.catalog.dev/problems/validation".to_string(),
            Self::Conflict(_) => "https://api.catalog.dev/problems/conflict".to_string(),
            Self::Internal(_) => "https://api.catalog.dev/problems/internal".to_string(),
            Self::Database(_) => "https://api.catalog.dev/problems/internal".to_string(),
        }
    }

    fn problem_title(&self) -> String {
        match self {
            Self::NotFound(_) => "Resource Not Found".to_string(),
            Self::Validation(_) => "Validation Error".to_string(),
            Self::Conflict(_) => "Conflict".to_string(),
            Self::Internal(_) => "Internal Server Error".to_string(),
            Self::Database(_) => "Internal Server Error".to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let problem = self.to_problem_details();
        let status =
            StatusCode::from_u16(problem.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        (
            status,
            [(header::CONTENT_TYPE, "application/problem+json")],
            Json(problem),
        )
            .into_response()
    }
}

/// RFC 7807 Problem Details
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProblemDetails {
    pub r#type: String,
    pub title: String,
    pub status: u16,
    pub detail: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance: Option<String>,
}

/// Result 类型别名
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[test]
    fn test_status_codes() {
        assert_eq!(AppError::not_found("x").status_code(), 404);
        assert_eq!(AppError::validation("x").status_code(), 400);
        assert_eq!(AppError::conflict("x").status_code(), 409);
        assert_eq!(AppError::internal("x").status_code(), 500);
        assert_eq!(AppError::database("x").status_code(), 500);
    }

    #[test]
    fn test_conflict_detail_passed_through() {
        let problem = AppError::conflict("Key (slug)=(red_shoe) already exists.").to_problem_details();
        assert_eq!(problem.status, 409);
        assert_eq!(problem.detail, "Key (slug)=(red_shoe) already exists.");
    }

    #[test]
    fn test_database_detail_hidden() {
        let problem = AppError::database("relation \"products\" does not exist").to_problem_details();
        assert_eq!(problem.status, 500);
        assert!(!problem.detail.contains("products"));
    }

    #[tokio::test]
    async fn test_into_response_problem_json() {
        let response = AppError::not_found("Product with term \"abc\" not found").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/problem+json"
        );

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let problem: ProblemDetails = serde_json::from_slice(&body).unwrap();
        assert_eq!(problem.title, "Resource Not Found");
        assert!(problem.detail.contains("abc"));
    }
}

//! 健康检查模块
//!
//! 提供 /health、/ready 和 /metrics 端点

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use catalog_adapter_postgres::check_connection;
use serde::Serialize;
use sqlx::PgPool;

use crate::metrics::MetricsRecorder;

/// 健康检查状态
#[derive(Debug, Clone, Serialize)]
pub struct HealthStatus {
    pub status: String,
    pub checks: Vec<ComponentHealth>,
}

/// 组件健康状态
#[derive(Debug, Clone, Serialize)]
pub struct ComponentHealth {
    pub name: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latency_ms: Option<u64>,
}

impl HealthStatus {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            checks: vec![],
        }
    }

    pub fn add_check(&mut self, check: ComponentHealth) {
        if check.status != "healthy" {
            self.status = "unhealthy".to_string();
        }
        self.checks.push(check);
    }

    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}

impl ComponentHealth {
    pub fn healthy(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: "healthy".to_string(),
            message: None,
            latency_ms: None,
        }
    }

    pub fn with_latency(mut self, latency: std::time::Duration) -> Self {
        self.latency_ms = Some(latency.as_millis() as u64);
        self
    }

    pub fn unhealthy(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: "unhealthy".to_string(),
            message: Some(message.into()),
            latency_ms: None,
        }
    }
}

/// 健康检查器
#[derive(Clone)]
pub struct HealthChecker {
    pool: PgPool,
}

impl HealthChecker {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// 存活检查（liveness），不检查依赖
    pub async fn liveness(&self) -> HealthStatus {
        HealthStatus::healthy()
    }

    /// 就绪检查（readiness），检查数据库是否可用
    pub async fn readiness(&self) -> HealthStatus {
        let mut status = HealthStatus::healthy();

        let postgres = match check_connection(&self.pool).await {
            Ok(latency) => ComponentHealth::healthy("postgres").with_latency(latency),
            Err(e) => ComponentHealth::unhealthy("postgres", e.to_string()),
        };
        status.add_check(postgres);

        status
    }
}

/// 健康检查路由状态
#[derive(Clone)]
struct HealthState {
    checker: HealthChecker,
    metrics: Option<MetricsRecorder>,
}

/// 构建健康检查路由
pub fn health_routes(checker: HealthChecker, metrics: Option<MetricsRecorder>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/ready", get(ready_handler))
        .route("/metrics", get(metrics_handler))
        .with_state(HealthState { checker, metrics })
}

/// Liveness 端点处理器
async fn health_handler(State(state): State<HealthState>) -> impl IntoResponse {
    let status = state.checker.liveness().await;
    (StatusCode::OK, Json(status))
}

/// Readiness 端点处理器
async fn ready_handler(State(state): State<HealthState>) -> impl IntoResponse {
    let status = state.checker.readiness().await;
    let code = if status.is_healthy() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    (code, Json(status))
}

/// Metrics 端点处理器
async fn metrics_handler(State(state): State<HealthState>) -> impl IntoResponse {
    match state.metrics {
        Some(metrics) => (
            StatusCode::OK,
            [("content-type", "text/plain; charset=utf-8")],
            metrics.render(),
        ),
        None => (
            StatusCode::SERVICE_UNAVAILABLE,
            [("content-type", "text/plain; charset=utf-8")],
            "metrics recorder not installed".to_string(),
        ),
    }
}

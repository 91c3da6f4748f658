//! telemetry - 可观测性库

use std::time::Instant;

use metrics::{counter, histogram};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder, PrometheusHandle};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// 初始化 tracing
pub fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// 初始化 JSON 格式的 tracing（生产环境）
pub fn init_tracing_json(log_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().json())
        .init();
}

/// 初始化 Prometheus metrics
pub fn init_metrics() -> Result<PrometheusHandle, BuildError> {
    PrometheusBuilder::new().install_recorder()
}

/// 记录一次业务操作
pub fn record_operation(operation: &'static str, outcome: &'static str, duration_ms: f64) {
    counter!("catalog_operations_total", "operation" => operation, "outcome" => outcome)
        .increment(1);
    histogram!("catalog_operation_duration_ms", "operation" => operation, "outcome" => outcome)
        .record(duration_ms);
}

/// 操作计时器
///
/// 结束时调用 [`OperationTimer::finish`] 记录耗时和结果
pub struct OperationTimer {
    start: Instant,
    operation: &'static str,
}

impl OperationTimer {
    pub fn start(operation: &'static str) -> Self {
        Self {
            start: Instant::now(),
            operation,
        }
    }

    pub fn finish(self, outcome: &'static str) {
        let duration_ms = self.start.elapsed().as_secs_f64() * 1000.0;
        record_operation(self.operation, outcome, duration_ms);
    }
}

//! Metrics 模块
//!
//! 提供 Prometheus metrics 导出

use catalog_telemetry::init_metrics;
use metrics_exporter_prometheus::PrometheusHandle;
use tracing::warn;

/// Metrics 记录器
#[derive(Clone)]
pub struct MetricsRecorder {
    handle: PrometheusHandle,
}

impl MetricsRecorder {
    /// 安装全局 Prometheus 记录器
    ///
    /// 记录器已被安装时返回 `None`，服务照常运行但 `/metrics` 不可用
    pub fn install() -> Option<Self> {
        match init_metrics() {
            Ok(handle) => Some(Self { handle }),
            Err(e) => {
                warn!(error = %e, "Failed to install Prometheus recorder");
                None
            }
        }
    }

    /// 获取 Prometheus 格式的 metrics
    pub fn render(&self) -> String {
        self.handle.render()
    }
}

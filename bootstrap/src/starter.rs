//! 服务启动器
//!
//! 提供统一的 HTTP 服务启动模式

use std::future::Future;
use std::net::SocketAddr;
use std::time::Duration;

use axum::Router;
use axum::http::StatusCode;
use catalog_config::AppConfig;
use catalog_errors::AppResult;
use tokio::net::TcpListener;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::health::{HealthChecker, health_routes};
use crate::infrastructure::Infrastructure;
use crate::metrics::MetricsRecorder;
use crate::runtime::{init_runtime, shutdown_signal};

/// 请求体上限
const MAX_BODY_BYTES: usize = 1024 * 1024;

/// 运行 HTTP 服务
///
/// 所有服务的统一入口点：
/// 1. 加载配置
/// 2. 初始化运行时（日志）
/// 3. 安装 Prometheus 记录器
/// 4. 创建基础设施资源（数据库连接池，带重试）
/// 5. 调用闭包构建业务路由，并合并 /health、/ready、/metrics
/// 6. 启动服务器并处理 graceful shutdown
///
/// # 示例
///
/// ```ignore
/// use catalog_bootstrap::run_http;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     run_http("config", |infra| async move {
///         Ok(my_router(infra.postgres_pool()))
///     }).await
/// }
/// ```
pub async fn run_http<F, Fut>(
    config_dir: &str,
    router_builder: F,
) -> Result<(), Box<dyn std::error::Error>>
where
    F: FnOnce(Infrastructure) -> Fut,
    Fut: Future<Output = AppResult<Router>>,
{
    // 1. 加载配置
    let config = AppConfig::load(config_dir)?;

    // 2. 初始化运行时
    init_runtime(&config);

    info!("Starting {} service", config.app_name);

    // 3. 初始化 Metrics 记录器
    let metrics = MetricsRecorder::install();

    // 4. 创建基础设施（带重试）
    let infra = Infrastructure::from_config(config.clone()).await?;
    let checker = HealthChecker::new(infra.postgres_pool());

    // 5. 构建路由
    let app = router_builder(infra)
        .await?
        .merge(health_routes(checker, metrics));
    let app = with_server_layers(app, Duration::from_secs(config.server.request_timeout_secs));

    // 6. 启动服务器
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    let listener = TcpListener::bind(addr).await?;

    info!(%addr, "HTTP server starting");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Service stopped");

    Ok(())
}

/// 挂载通用中间件，请求超时返回 408
fn with_server_layers(router: Router, request_timeout: Duration) -> Router {
    router
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            request_timeout,
        ))
        .layer(TraceLayer::new_for_http())
}

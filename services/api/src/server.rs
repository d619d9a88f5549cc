use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::evaluation_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use essay_rubric::config::AppConfig;
use essay_rubric::error::AppError;
use essay_rubric::telemetry;
use essay_rubric::AcademicEvaluationEngine;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
        engine: AcademicEvaluationEngine::new(),
        limits: config.limits,
    };

    let app = evaluation_routes()
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        max_text_bytes = config.limits.max_text_bytes,
        "essay rubric service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}

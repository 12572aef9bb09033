use crate::cli::ServeArgs;
use crate::infra::{build_generator, AppState};
use crate::routes::with_salary_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use fantasy_salary::config::AppConfig;
use fantasy_salary::error::AppError;
use fantasy_salary::telemetry;
use fantasy_salary::workflows::salary::SalaryRouteState;
use std::sync::atomic::{AtomicBool, Ordering};
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

    telemetry::init(&config.telemetry, config.environment)?;

    let generator = build_generator(&config.salary)?;
    let salary_state = Arc::new(SalaryRouteState::new(
        generator,
        config.salary.source_domain.clone(),
    ));

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let app = with_salary_routes(salary_state)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        source_domain = %config.salary.source_domain,
        fetch_timeout = ?config.salary.fetch_timeout,
        "salary service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}

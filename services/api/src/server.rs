use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::with_directory_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use ecomap::config::AppConfig;
use ecomap::directory::{default_sheet_headers, DirectoryService, DisabledLogoStore, MemorySheet};
use ecomap::error::AppError;
use ecomap::telemetry;
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
    };

    // Deployments wire a real sheet gateway here; the default store keeps
    // the service fully operational for demos and tests. Without Drive
    // credentials logo uploads fall back to inline storage.
    let sheet = Arc::new(MemorySheet::with_headers(default_sheet_headers()));
    let directory_service = Arc::new(DirectoryService::new(sheet, Arc::new(DisabledLogoStore)));

    let app = with_directory_routes(directory_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "ecosystem mapping portal ready");

    axum::serve(listener, app).await?;
    Ok(())
}

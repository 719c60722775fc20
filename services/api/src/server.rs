use crate::cli::ServeArgs;
use crate::infra::{AppState, FileStateStore};
use crate::routes::with_helper_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use pragmatic_ux::config::AppConfig;
use pragmatic_ux::content::{MethodCatalog, PrincipleCatalog};
use pragmatic_ux::error::AppError;
use pragmatic_ux::helper::{DecisionCatalog, DecisionHelperService};
use pragmatic_ux::telemetry;
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

    let catalog = Arc::new(DecisionCatalog::bundled()?);
    let principles = Arc::new(PrincipleCatalog::bundled()?);
    let methods = Arc::new(MethodCatalog::bundled()?);
    let store = Arc::new(FileStateStore::new(config.storage.state_dir.clone()));
    let helper_service = Arc::new(DecisionHelperService::new(
        catalog, principles, methods, store,
    ));

    let app = with_helper_routes(helper_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        state_dir = %config.storage.state_dir.display(),
        "decision helper service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}

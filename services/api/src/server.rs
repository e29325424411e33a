use crate::cli::ServeArgs;
use crate::infra::{load_catalog, AppState};
use crate::routes::with_producer_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;
use whisky_catalog::config::AppConfig;
use whisky_catalog::error::AppError;
use whisky_catalog::producers::{CandidateSource, ProducerKind, ProducerNameService};
use whisky_catalog::telemetry;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }
    if let Some(path) = args.catalog.take() {
        config.catalog.producer_seed = Some(path);
    }

    telemetry::init(&config.telemetry)?;

    let catalog = Arc::new(load_catalog(&config.catalog)?);
    for kind in ProducerKind::ordered() {
        let candidates = catalog.active_names(kind)?.len();
        info!(%kind, candidates, "producer candidates loaded");
    }

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let producer_service = Arc::new(ProducerNameService::new(catalog));

    let app = with_producer_routes(producer_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "whisky catalog service ready");

    axum::serve(listener, app).await?;
    Ok(())
}

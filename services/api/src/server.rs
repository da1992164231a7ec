use crate::cli::ServeArgs;
use crate::infra::{load_question_bank, AppState, InMemoryResultStore};
use crate::routes::with_assessment_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use track_advisor::assessment::AssessmentService;
use track_advisor::config::AppConfig;
use track_advisor::error::AppError;
use track_advisor::telemetry;
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

    let bank = Arc::new(load_question_bank(&config.assessment)?);
    let store = Arc::new(InMemoryResultStore::default());
    let assessment_service = Arc::new(AssessmentService::new(
        bank,
        store,
        config.assessment.questions_per_domain,
    ));

    let app = with_assessment_routes(assessment_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        questions_per_domain = config.assessment.questions_per_domain,
        "track advisor ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}

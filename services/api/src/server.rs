use crate::cli::ServeArgs;
use crate::infra::{
    AppState, InMemoryAccountRequestStore, InMemoryDayOffStore, InMemoryEmployeeStore,
};
use crate::routes::api_router;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::Ordering;
use std::sync::Arc;

use staffhub::config::AppConfig;
use staffhub::error::AppError;
use staffhub::hr::accounts::service::AccountRequestQueue;
use staffhub::hr::employees::service::EmployeeService;
use staffhub::hr::leave::service::LeaveLedger;
use staffhub::hr::statistics::service::StatisticsService;
use staffhub::telemetry;
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

    let employees = Arc::new(InMemoryEmployeeStore::default());
    let day_offs = Arc::new(InMemoryDayOffStore::default());
    let accounts = Arc::new(InMemoryAccountRequestStore::default());

    let directory = Arc::new(EmployeeService::new(employees.clone(), day_offs.clone()));
    let ledger = Arc::new(LeaveLedger::new(employees.clone(), day_offs));
    let queue = Arc::new(AccountRequestQueue::new(accounts.clone()));
    let statistics = Arc::new(StatisticsService::new(employees.clone()));

    let app = api_router(directory, ledger, queue, statistics, employees, accounts)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "staffhub hr service ready");

    axum::serve(listener, app).await?;
    Ok(())
}

use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use serde_json::json;
use std::sync::Arc;

use staffhub::hr::accounts::repository::AccountRequestStore;
use staffhub::hr::accounts::router::accounts_router;
use staffhub::hr::accounts::service::AccountRequestQueue;
use staffhub::hr::employees::repository::EmployeeStore;
use staffhub::hr::employees::router::employee_router;
use staffhub::hr::employees::service::EmployeeService;
use staffhub::hr::export::export_router;
use staffhub::hr::leave::repository::DayOffStore;
use staffhub::hr::leave::router::leave_router;
use staffhub::hr::leave::service::LeaveLedger;
use staffhub::hr::statistics::router::statistics_router;
use staffhub::hr::statistics::service::StatisticsService;

/// Merge every module router with the operational endpoints into the final
/// application surface.
pub(crate) fn api_router<E, D, S>(
    directory: Arc<EmployeeService<E, D>>,
    ledger: Arc<LeaveLedger<E, D>>,
    queue: Arc<AccountRequestQueue<S>>,
    statistics: Arc<StatisticsService<E>>,
    employees: Arc<E>,
    accounts: Arc<S>,
) -> axum::Router
where
    E: EmployeeStore + 'static,
    D: DayOffStore + 'static,
    S: AccountRequestStore + 'static,
{
    employee_router(directory)
        .merge(leave_router(ledger))
        .merge(accounts_router(queue))
        .merge(statistics_router(statistics))
        .merge(export_router(employees, accounts))
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

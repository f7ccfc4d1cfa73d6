use std::sync::Arc;

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use serde_json::json;

use super::service::{StatisticsError, StatisticsService};
use crate::hr::employees::repository::EmployeeStore;
use crate::hr::employees::router::unauthorized;
use crate::hr::principal::Principal;

/// Router builder exposing the statistics page payload.
pub fn statistics_router<E>(service: Arc<StatisticsService<E>>) -> Router
where
    E: EmployeeStore + 'static,
{
    Router::new()
        .route("/api/v1/statistics", get(headcount_handler::<E>))
        .with_state(service)
}

pub(crate) async fn headcount_handler<E>(
    State(service): State<Arc<StatisticsService<E>>>,
    headers: HeaderMap,
) -> Response
where
    E: EmployeeStore + 'static,
{
    let principal = match Principal::from_headers(&headers) {
        Ok(principal) => principal,
        Err(error) => return unauthorized(error),
    };

    match service.headcount(&principal) {
        Ok(report) => (StatusCode::OK, axum::Json(report)).into_response(),
        Err(StatisticsError::Access(error)) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::FORBIDDEN, axum::Json(payload)).into_response()
        }
        Err(error) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use chrono::{Local, NaiveDate};
use serde::Deserialize;
use serde_json::json;

use super::domain::DayOffRequestId;
use super::repository::DayOffStore;
use super::service::{LeaveError, LeaveLedger};
use crate::hr::employees::repository::{EmployeeStore, RepositoryError};
use crate::hr::employees::router::unauthorized;
use crate::hr::principal::Principal;

/// Router builder exposing the day-off ledger endpoints.
pub fn leave_router<E, D>(ledger: Arc<LeaveLedger<E, D>>) -> Router
where
    E: EmployeeStore + 'static,
    D: DayOffStore + 'static,
{
    Router::new()
        .route(
            "/api/v1/leave/requests",
            get(list_handler::<E, D>).post(submit_handler::<E, D>),
        )
        .route("/api/v1/leave/requests/:request_id", get(get_handler::<E, D>))
        .route(
            "/api/v1/leave/requests/:request_id/cancel",
            post(cancel_handler::<E, D>),
        )
        .with_state(ledger)
}

#[derive(Debug, Deserialize)]
pub(crate) struct LeaveRequestBody {
    start_date: NaiveDate,
    end_date: NaiveDate,
}

pub(crate) async fn list_handler<E, D>(
    State(ledger): State<Arc<LeaveLedger<E, D>>>,
    headers: HeaderMap,
) -> Response
where
    E: EmployeeStore + 'static,
    D: DayOffStore + 'static,
{
    let _principal = match Principal::from_headers(&headers) {
        Ok(principal) => principal,
        Err(error) => return unauthorized(error),
    };

    match ledger.list_all() {
        Ok(requests) => (StatusCode::OK, axum::Json(requests)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn get_handler<E, D>(
    State(ledger): State<Arc<LeaveLedger<E, D>>>,
    headers: HeaderMap,
    Path(request_id): Path<u32>,
) -> Response
where
    E: EmployeeStore + 'static,
    D: DayOffStore + 'static,
{
    let _principal = match Principal::from_headers(&headers) {
        Ok(principal) => principal,
        Err(error) => return unauthorized(error),
    };

    match ledger.get(DayOffRequestId(request_id)) {
        Ok(request) => (StatusCode::OK, axum::Json(request)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn submit_handler<E, D>(
    State(ledger): State<Arc<LeaveLedger<E, D>>>,
    headers: HeaderMap,
    axum::Json(body): axum::Json<LeaveRequestBody>,
) -> Response
where
    E: EmployeeStore + 'static,
    D: DayOffStore + 'static,
{
    let principal = match Principal::from_headers(&headers) {
        Ok(principal) => principal,
        Err(error) => return unauthorized(error),
    };

    match ledger.submit(&principal, body.start_date, body.end_date) {
        Ok(request) => (StatusCode::CREATED, axum::Json(request)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn cancel_handler<E, D>(
    State(ledger): State<Arc<LeaveLedger<E, D>>>,
    headers: HeaderMap,
    Path(request_id): Path<u32>,
) -> Response
where
    E: EmployeeStore + 'static,
    D: DayOffStore + 'static,
{
    let principal = match Principal::from_headers(&headers) {
        Ok(principal) => principal,
        Err(error) => return unauthorized(error),
    };

    let today = Local::now().date_naive();
    match ledger.cancel(&principal, DayOffRequestId(request_id), today) {
        Ok(request) => (StatusCode::OK, axum::Json(request)).into_response(),
        Err(error) => error_response(error),
    }
}

fn error_response(error: LeaveError) -> Response {
    let status = match &error {
        LeaveError::NotFound(_) | LeaveError::UnknownPrincipal(_) => StatusCode::NOT_FOUND,
        LeaveError::Cancel(_) | LeaveError::InvalidRange { .. } | LeaveError::Balance(_) => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
        LeaveError::NotRequestOwner { .. } => StatusCode::FORBIDDEN,
        LeaveError::Store(RepositoryError::Conflict) => StatusCode::CONFLICT,
        LeaveError::Store(RepositoryError::NotFound) => StatusCode::NOT_FOUND,
        LeaveError::Store(RepositoryError::Unavailable(_)) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    let payload = json!({ "error": error.to_string() });
    (status, axum::Json(payload)).into_response()
}

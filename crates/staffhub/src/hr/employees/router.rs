use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::{AdminUpdate, EmployeeId, EmployeeSubmission, ProfileUpdate};
use super::repository::{EmployeeStore, RepositoryError};
use super::service::{EmployeeService, EmployeeServiceError};
use crate::hr::leave::repository::DayOffStore;
use crate::hr::principal::{Principal, PrincipalError};

/// Router builder exposing the employee directory endpoints.
pub fn employee_router<E, D>(service: Arc<EmployeeService<E, D>>) -> Router
where
    E: EmployeeStore + 'static,
    D: DayOffStore + 'static,
{
    Router::new()
        .route(
            "/api/v1/employees",
            get(list_handler::<E, D>).post(create_handler::<E, D>),
        )
        .route("/api/v1/employees/search", get(search_handler::<E, D>))
        .route(
            "/api/v1/employees/:employee_id",
            get(get_handler::<E, D>)
                .put(admin_update_handler::<E, D>)
                .delete(delete_handler::<E, D>),
        )
        .route(
            "/api/v1/me",
            get(me_handler::<E, D>).put(profile_handler::<E, D>),
        )
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub(crate) struct SearchParams {
    last_name: String,
}

pub(crate) async fn list_handler<E, D>(
    State(service): State<Arc<EmployeeService<E, D>>>,
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

    match service.list() {
        Ok(employees) => (StatusCode::OK, axum::Json(employees)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn search_handler<E, D>(
    State(service): State<Arc<EmployeeService<E, D>>>,
    headers: HeaderMap,
    Query(params): Query<SearchParams>,
) -> Response
where
    E: EmployeeStore + 'static,
    D: DayOffStore + 'static,
{
    let _principal = match Principal::from_headers(&headers) {
        Ok(principal) => principal,
        Err(error) => return unauthorized(error),
    };

    match service.find_by_last_name(&params.last_name) {
        Ok(employees) => (StatusCode::OK, axum::Json(employees)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn get_handler<E, D>(
    State(service): State<Arc<EmployeeService<E, D>>>,
    headers: HeaderMap,
    Path(employee_id): Path<u32>,
) -> Response
where
    E: EmployeeStore + 'static,
    D: DayOffStore + 'static,
{
    let _principal = match Principal::from_headers(&headers) {
        Ok(principal) => principal,
        Err(error) => return unauthorized(error),
    };

    match service.get(EmployeeId(employee_id)) {
        Ok(employee) => (StatusCode::OK, axum::Json(employee)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn create_handler<E, D>(
    State(service): State<Arc<EmployeeService<E, D>>>,
    headers: HeaderMap,
    axum::Json(submission): axum::Json<EmployeeSubmission>,
) -> Response
where
    E: EmployeeStore + 'static,
    D: DayOffStore + 'static,
{
    let principal = match Principal::from_headers(&headers) {
        Ok(principal) => principal,
        Err(error) => return unauthorized(error),
    };

    match service.create(&principal, submission) {
        Ok(employee) => (StatusCode::CREATED, axum::Json(employee)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn admin_update_handler<E, D>(
    State(service): State<Arc<EmployeeService<E, D>>>,
    headers: HeaderMap,
    Path(employee_id): Path<u32>,
    axum::Json(update): axum::Json<AdminUpdate>,
) -> Response
where
    E: EmployeeStore + 'static,
    D: DayOffStore + 'static,
{
    let principal = match Principal::from_headers(&headers) {
        Ok(principal) => principal,
        Err(error) => return unauthorized(error),
    };

    match service.admin_update(&principal, EmployeeId(employee_id), update) {
        Ok(employee) => (StatusCode::OK, axum::Json(employee)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn delete_handler<E, D>(
    State(service): State<Arc<EmployeeService<E, D>>>,
    headers: HeaderMap,
    Path(employee_id): Path<u32>,
) -> Response
where
    E: EmployeeStore + 'static,
    D: DayOffStore + 'static,
{
    let principal = match Principal::from_headers(&headers) {
        Ok(principal) => principal,
        Err(error) => return unauthorized(error),
    };

    match service.delete(&principal, EmployeeId(employee_id)) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn me_handler<E, D>(
    State(service): State<Arc<EmployeeService<E, D>>>,
    headers: HeaderMap,
) -> Response
where
    E: EmployeeStore + 'static,
    D: DayOffStore + 'static,
{
    let principal = match Principal::from_headers(&headers) {
        Ok(principal) => principal,
        Err(error) => return unauthorized(error),
    };

    match service.current(&principal) {
        Ok(employee) => (StatusCode::OK, axum::Json(employee)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn profile_handler<E, D>(
    State(service): State<Arc<EmployeeService<E, D>>>,
    headers: HeaderMap,
    axum::Json(update): axum::Json<ProfileUpdate>,
) -> Response
where
    E: EmployeeStore + 'static,
    D: DayOffStore + 'static,
{
    let principal = match Principal::from_headers(&headers) {
        Ok(principal) => principal,
        Err(error) => return unauthorized(error),
    };

    match service.update_profile(&principal, update) {
        Ok(employee) => (StatusCode::OK, axum::Json(employee)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) fn unauthorized(error: PrincipalError) -> Response {
    let payload = json!({ "error": error.to_string() });
    (StatusCode::UNAUTHORIZED, axum::Json(payload)).into_response()
}

fn error_response(error: EmployeeServiceError) -> Response {
    let status = match &error {
        EmployeeServiceError::Access(_) => StatusCode::FORBIDDEN,
        EmployeeServiceError::Validation(validation) => {
            let payload = json!({
                "error": validation.to_string(),
                "field": validation.field(),
            });
            return (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response();
        }
        EmployeeServiceError::DuplicateEmail(_) | EmployeeServiceError::DuplicateNationalId(_) => {
            StatusCode::CONFLICT
        }
        EmployeeServiceError::NotFound(_) | EmployeeServiceError::UnknownPrincipal(_) => {
            StatusCode::NOT_FOUND
        }
        EmployeeServiceError::Store(RepositoryError::Conflict) => StatusCode::CONFLICT,
        EmployeeServiceError::Store(RepositoryError::NotFound) => StatusCode::NOT_FOUND,
        EmployeeServiceError::Store(RepositoryError::Unavailable(_)) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    let payload = json!({ "error": error.to_string() });
    (status, axum::Json(payload)).into_response()
}

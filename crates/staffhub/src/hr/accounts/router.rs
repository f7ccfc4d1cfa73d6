use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{delete, get, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::AccountRequestId;
use super::repository::AccountRequestStore;
use super::service::{AccountRequestError, AccountRequestQueue};
use crate::hr::employees::repository::RepositoryError;
use crate::hr::employees::router::unauthorized;
use crate::hr::principal::Principal;

/// Router builder exposing public signup plus the admin review endpoints.
pub fn accounts_router<S>(queue: Arc<AccountRequestQueue<S>>) -> Router
where
    S: AccountRequestStore + 'static,
{
    Router::new()
        .route("/api/v1/signup", post(signup_handler::<S>))
        .route(
            "/api/v1/account-requests/active",
            get(active_handler::<S>),
        )
        .route(
            "/api/v1/account-requests/history",
            get(history_handler::<S>),
        )
        .route(
            "/api/v1/account-requests/:request_id/complete",
            post(complete_handler::<S>),
        )
        .route(
            "/api/v1/account-requests/:request_id",
            delete(delete_handler::<S>),
        )
        .with_state(queue)
}

#[derive(Debug, Deserialize)]
pub(crate) struct SignupBody {
    name: String,
    email: String,
}

/// Public intake; no identity required.
pub(crate) async fn signup_handler<S>(
    State(queue): State<Arc<AccountRequestQueue<S>>>,
    axum::Json(body): axum::Json<SignupBody>,
) -> Response
where
    S: AccountRequestStore + 'static,
{
    match queue.submit(body.name, body.email) {
        Ok(request) => (StatusCode::CREATED, axum::Json(request)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn active_handler<S>(
    State(queue): State<Arc<AccountRequestQueue<S>>>,
    headers: HeaderMap,
) -> Response
where
    S: AccountRequestStore + 'static,
{
    let principal = match Principal::from_headers(&headers) {
        Ok(principal) => principal,
        Err(error) => return unauthorized(error),
    };

    match queue.list_active(&principal) {
        Ok(requests) => (StatusCode::OK, axum::Json(requests)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn history_handler<S>(
    State(queue): State<Arc<AccountRequestQueue<S>>>,
    headers: HeaderMap,
) -> Response
where
    S: AccountRequestStore + 'static,
{
    let principal = match Principal::from_headers(&headers) {
        Ok(principal) => principal,
        Err(error) => return unauthorized(error),
    };

    match queue.list_completed(&principal) {
        Ok(requests) => (StatusCode::OK, axum::Json(requests)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn complete_handler<S>(
    State(queue): State<Arc<AccountRequestQueue<S>>>,
    headers: HeaderMap,
    Path(request_id): Path<u32>,
) -> Response
where
    S: AccountRequestStore + 'static,
{
    let principal = match Principal::from_headers(&headers) {
        Ok(principal) => principal,
        Err(error) => return unauthorized(error),
    };

    match queue.complete(&principal, AccountRequestId(request_id)) {
        Ok(request) => (StatusCode::OK, axum::Json(request)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn delete_handler<S>(
    State(queue): State<Arc<AccountRequestQueue<S>>>,
    headers: HeaderMap,
    Path(request_id): Path<u32>,
) -> Response
where
    S: AccountRequestStore + 'static,
{
    let principal = match Principal::from_headers(&headers) {
        Ok(principal) => principal,
        Err(error) => return unauthorized(error),
    };

    match queue.delete(&principal, AccountRequestId(request_id)) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(error) => error_response(error),
    }
}

fn error_response(error: AccountRequestError) -> Response {
    let status = match &error {
        AccountRequestError::Access(_) => StatusCode::FORBIDDEN,
        AccountRequestError::NotFound(_) => StatusCode::NOT_FOUND,
        AccountRequestError::Store(RepositoryError::Conflict) => StatusCode::CONFLICT,
        AccountRequestError::Store(RepositoryError::NotFound) => StatusCode::NOT_FOUND,
        AccountRequestError::Store(RepositoryError::Unavailable(_)) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    let payload = json!({ "error": error.to_string() });
    (status, axum::Json(payload)).into_response()
}

//! CSV export of directory data for payroll and audit handoffs.

use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use serde_json::json;

use super::accounts::domain::AccountRequest;
use super::accounts::repository::AccountRequestStore;
use super::employees::domain::Employee;
use super::employees::repository::EmployeeStore;
use super::employees::router::unauthorized;
use super::principal::Principal;

/// Column layout of the employee export, kept stable for downstream sheets.
const EMPLOYEE_COLUMNS: [&str; 9] = [
    "user_id",
    "email",
    "first_name",
    "last_name",
    "gender",
    "phone_number",
    "department",
    "job_title",
    "hiring_date",
];

const ACCOUNT_REQUEST_COLUMNS: [&str; 4] = ["request_id", "name", "email", "completed"];

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to encode csv: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to flush csv buffer: {0}")]
    Buffer(String),
    #[error("exported csv was not valid utf-8")]
    Encoding(#[from] std::string::FromUtf8Error),
}

/// Render the employee sheet.
pub fn employees_csv(employees: &[Employee]) -> Result<String, ExportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(EMPLOYEE_COLUMNS)?;
    for employee in employees {
        writer.write_record([
            employee.id.to_string(),
            employee.email.clone(),
            employee.first_name.clone(),
            employee.last_name.clone(),
            employee.gender.label().to_string(),
            employee.phone_number.clone(),
            employee.department.label().to_string(),
            employee.job_title.clone(),
            employee.hiring_date.clone(),
        ])?;
    }
    finish(writer)
}

/// Render the account-request sheet.
pub fn account_requests_csv(requests: &[AccountRequest]) -> Result<String, ExportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(ACCOUNT_REQUEST_COLUMNS)?;
    for request in requests {
        writer.write_record([
            request.id.to_string(),
            request.name.clone(),
            request.email.clone(),
            request.is_completed().to_string(),
        ])?;
    }
    finish(writer)
}

fn finish(writer: csv::Writer<Vec<u8>>) -> Result<String, ExportError> {
    let bytes = writer
        .into_inner()
        .map_err(|error| ExportError::Buffer(error.to_string()))?;
    Ok(String::from_utf8(bytes)?)
}

/// Router builder for the admin-only export downloads.
pub fn export_router<E, S>(employees: Arc<E>, accounts: Arc<S>) -> Router
where
    E: EmployeeStore + 'static,
    S: AccountRequestStore + 'static,
{
    let employee_routes = Router::new()
        .route(
            "/api/v1/export/employees.csv",
            get(export_employees_handler::<E>),
        )
        .with_state(employees);
    let account_routes = Router::new()
        .route(
            "/api/v1/export/account-requests.csv",
            get(export_account_requests_handler::<S>),
        )
        .with_state(accounts);

    employee_routes.merge(account_routes)
}

pub(crate) async fn export_employees_handler<E>(
    State(employees): State<Arc<E>>,
    headers: HeaderMap,
) -> Response
where
    E: EmployeeStore + 'static,
{
    let principal = match Principal::from_headers(&headers) {
        Ok(principal) => principal,
        Err(error) => return unauthorized(error),
    };
    if let Err(error) = principal.require_admin() {
        let payload = json!({ "error": error.to_string() });
        return (StatusCode::FORBIDDEN, axum::Json(payload)).into_response();
    }

    let records = match employees.list() {
        Ok(records) => records,
        Err(error) => {
            let payload = json!({ "error": error.to_string() });
            return (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response();
        }
    };

    match employees_csv(&records) {
        Ok(body) => csv_attachment("employees.csv", body),
        Err(error) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn export_account_requests_handler<S>(
    State(accounts): State<Arc<S>>,
    headers: HeaderMap,
) -> Response
where
    S: AccountRequestStore + 'static,
{
    let principal = match Principal::from_headers(&headers) {
        Ok(principal) => principal,
        Err(error) => return unauthorized(error),
    };
    if let Err(error) = principal.require_admin() {
        let payload = json!({ "error": error.to_string() });
        return (StatusCode::FORBIDDEN, axum::Json(payload)).into_response();
    }

    let records = match accounts.list() {
        Ok(records) => records,
        Err(error) => {
            let payload = json!({ "error": error.to_string() });
            return (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response();
        }
    };

    match account_requests_csv(&records) {
        Ok(body) => csv_attachment("account-requests.csv", body),
        Err(error) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

fn csv_attachment(filename: &str, body: String) -> Response {
    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/csv".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        body,
    )
        .into_response()
}

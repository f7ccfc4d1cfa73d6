use crate::config::ConfigError;
use crate::hr::accounts::service::AccountRequestError;
use crate::hr::employees::service::EmployeeServiceError;
use crate::hr::export::ExportError;
use crate::hr::leave::service::LeaveError;
use crate::hr::statistics::service::StatisticsError;
use crate::telemetry::TelemetryError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Server(axum::Error),
    Employee(EmployeeServiceError),
    Leave(LeaveError),
    Accounts(AccountRequestError),
    Statistics(StatisticsError),
    Export(ExportError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Server(err) => write!(f, "server error: {}", err),
            AppError::Employee(err) => write!(f, "employee service error: {}", err),
            AppError::Leave(err) => write!(f, "day-off ledger error: {}", err),
            AppError::Accounts(err) => write!(f, "account request error: {}", err),
            AppError::Statistics(err) => write!(f, "statistics error: {}", err),
            AppError::Export(err) => write!(f, "export error: {}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Server(err) => Some(err),
            AppError::Employee(err) => Some(err),
            AppError::Leave(err) => Some(err),
            AppError::Accounts(err) => Some(err),
            AppError::Statistics(err) => Some(err),
            AppError::Export(err) => Some(err),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::Employee(_)
            | AppError::Leave(_)
            | AppError::Accounts(_)
            | AppError::Statistics(_) => StatusCode::BAD_REQUEST,
            AppError::Config(_)
            | AppError::Telemetry(_)
            | AppError::Io(_)
            | AppError::Server(_)
            | AppError::Export(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<axum::Error> for AppError {
    fn from(value: axum::Error) -> Self {
        Self::Server(value)
    }
}

impl From<EmployeeServiceError> for AppError {
    fn from(value: EmployeeServiceError) -> Self {
        Self::Employee(value)
    }
}

impl From<LeaveError> for AppError {
    fn from(value: LeaveError) -> Self {
        Self::Leave(value)
    }
}

impl From<AccountRequestError> for AppError {
    fn from(value: AccountRequestError) -> Self {
        Self::Accounts(value)
    }
}

impl From<StatisticsError> for AppError {
    fn from(value: StatisticsError) -> Self {
        Self::Statistics(value)
    }
}

impl From<ExportError> for AppError {
    fn from(value: ExportError) -> Self {
        Self::Export(value)
    }
}

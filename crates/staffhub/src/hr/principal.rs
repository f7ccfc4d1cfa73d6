use axum::http::HeaderMap;
use serde::{Deserialize, Serialize};

use super::employees::domain::Role;

/// Identity headers populated by the upstream authentication layer. The core
/// never consults an ambient security context; handlers resolve a
/// [`Principal`] once and pass it into every service call.
pub const PRINCIPAL_EMAIL_HEADER: &str = "x-staff-email";
pub const PRINCIPAL_ROLE_HEADER: &str = "x-staff-role";

/// The authenticated caller of a service operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    pub email: String,
    pub role: Role,
}

impl Principal {
    pub fn new(email: impl Into<String>, role: Role) -> Self {
        Self {
            email: email.into(),
            role,
        }
    }

    /// Resolve the caller identity from the auth headers.
    pub fn from_headers(headers: &HeaderMap) -> Result<Self, PrincipalError> {
        let email = headers
            .get(PRINCIPAL_EMAIL_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .ok_or(PrincipalError::MissingIdentity)?;

        let raw_role = headers
            .get(PRINCIPAL_ROLE_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .ok_or(PrincipalError::MissingIdentity)?;

        let role = Role::parse(raw_role)
            .ok_or_else(|| PrincipalError::UnknownRole(raw_role.to_string()))?;

        Ok(Self::new(email, role))
    }

    pub fn is_admin(&self) -> bool {
        matches!(self.role, Role::Admin)
    }

    pub fn require_admin(&self) -> Result<(), AccessDenied> {
        if self.is_admin() {
            Ok(())
        } else {
            Err(AccessDenied)
        }
    }
}

/// Raised when the identity headers are missing or unusable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PrincipalError {
    #[error("missing caller identity headers")]
    MissingIdentity,
    #[error("unknown role '{0}' in identity headers")]
    UnknownRole(String),
}

/// Raised when an operation requires the ADMIN role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("operation requires the ADMIN role")]
pub struct AccessDenied;

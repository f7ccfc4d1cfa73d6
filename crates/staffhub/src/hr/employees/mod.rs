//! Employee directory: typed records, the intake validation rules, and the
//! role-gated CRUD service.

pub mod domain;
pub mod repository;
pub mod router;
pub mod service;
pub mod validation;

#[cfg(test)]
mod tests;

pub use domain::{
    AdminUpdate, ContractType, Department, Employee, EmployeeId, EmployeeSubmission, Gender,
    InsufficientBalance, ProfileUpdate, Role,
};
pub use repository::{EmployeeStore, RepositoryError};
pub use router::employee_router;
pub use service::{EmployeeService, EmployeeServiceError};
pub use validation::{ValidationError, ValidationRules};

use super::domain::{Employee, EmployeeId};

/// Error enumeration for store failures, shared by every store trait in the
/// crate.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Storage abstraction for employee records so the services can be exercised
/// against in-memory stores in tests and against a real database in
/// deployment.
pub trait EmployeeStore: Send + Sync {
    fn insert(&self, employee: Employee) -> Result<Employee, RepositoryError>;
    fn update(&self, employee: Employee) -> Result<(), RepositoryError>;
    fn fetch(&self, id: EmployeeId) -> Result<Option<Employee>, RepositoryError>;
    fn fetch_by_email(&self, email: &str) -> Result<Option<Employee>, RepositoryError>;
    fn fetch_by_national_id(&self, national_id: &str)
        -> Result<Option<Employee>, RepositoryError>;
    fn list(&self) -> Result<Vec<Employee>, RepositoryError>;
    fn remove(&self, id: EmployeeId) -> Result<(), RepositoryError>;
}

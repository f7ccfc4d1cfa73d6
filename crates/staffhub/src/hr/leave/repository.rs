use super::domain::{DayOffRequest, DayOffRequestId};
use crate::hr::employees::domain::EmployeeId;
use crate::hr::employees::repository::RepositoryError;

/// Storage abstraction for day-off requests.
pub trait DayOffStore: Send + Sync {
    fn insert(&self, request: DayOffRequest) -> Result<DayOffRequest, RepositoryError>;
    fn update(&self, request: DayOffRequest) -> Result<(), RepositoryError>;
    fn fetch(&self, id: DayOffRequestId) -> Result<Option<DayOffRequest>, RepositoryError>;
    fn list(&self) -> Result<Vec<DayOffRequest>, RepositoryError>;
    fn list_for_employee(
        &self,
        employee_id: EmployeeId,
    ) -> Result<Vec<DayOffRequest>, RepositoryError>;
    /// Drop every request owned by the employee (cascade on employee
    /// deletion); returns how many were removed.
    fn remove_for_employee(&self, employee_id: EmployeeId) -> Result<u32, RepositoryError>;
}

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use tracing::info;

use super::domain::{AdminUpdate, Employee, EmployeeId, EmployeeSubmission, ProfileUpdate};
use super::repository::{EmployeeStore, RepositoryError};
use super::validation::{ValidationError, ValidationRules};
use crate::hr::leave::repository::DayOffStore;
use crate::hr::principal::{AccessDenied, Principal};

static EMPLOYEE_SEQUENCE: AtomicU32 = AtomicU32::new(1);

fn next_employee_id() -> EmployeeId {
    EmployeeId(EMPLOYEE_SEQUENCE.fetch_add(1, Ordering::Relaxed))
}

/// Role-gated CRUD over the employee directory. Deleting an employee also
/// drops their day-off history, so the service holds both stores.
pub struct EmployeeService<E, D> {
    employees: Arc<E>,
    day_offs: Arc<D>,
    rules: ValidationRules,
}

impl<E, D> EmployeeService<E, D>
where
    E: EmployeeStore + 'static,
    D: DayOffStore + 'static,
{
    pub fn new(employees: Arc<E>, day_offs: Arc<D>) -> Self {
        Self {
            employees,
            day_offs,
            rules: ValidationRules::default(),
        }
    }

    pub fn list(&self) -> Result<Vec<Employee>, EmployeeServiceError> {
        Ok(self.employees.list()?)
    }

    /// Active employees only (role USER; administrators are back-office
    /// accounts, not headcount).
    pub fn list_active(&self) -> Result<Vec<Employee>, EmployeeServiceError> {
        let mut employees = self.employees.list()?;
        employees.retain(Employee::is_active);
        Ok(employees)
    }

    pub fn get(&self, id: EmployeeId) -> Result<Employee, EmployeeServiceError> {
        self.employees
            .fetch(id)?
            .ok_or(EmployeeServiceError::NotFound(id))
    }

    /// Exact-match filter over last names, backing the directory search box.
    pub fn find_by_last_name(&self, last_name: &str) -> Result<Vec<Employee>, EmployeeServiceError> {
        let mut employees = self.employees.list()?;
        employees.retain(|employee| employee.last_name == last_name);
        Ok(employees)
    }

    /// The employee record behind the caller's identity.
    pub fn current(&self, principal: &Principal) -> Result<Employee, EmployeeServiceError> {
        self.employees
            .fetch_by_email(&principal.email)?
            .ok_or_else(|| EmployeeServiceError::UnknownPrincipal(principal.email.clone()))
    }

    /// Validate and persist a new employee record. Admin only; the candidate
    /// runs through the full rule set before anything is stored.
    pub fn create(
        &self,
        principal: &Principal,
        submission: EmployeeSubmission,
    ) -> Result<Employee, EmployeeServiceError> {
        principal.require_admin()?;

        let mut employee = self.rules.employee_from_submission(submission)?;

        if self.employees.fetch_by_email(&employee.email)?.is_some() {
            return Err(EmployeeServiceError::DuplicateEmail(employee.email));
        }
        if self
            .employees
            .fetch_by_national_id(&employee.national_id)?
            .is_some()
        {
            return Err(EmployeeServiceError::DuplicateNationalId(
                employee.national_id,
            ));
        }

        employee.assign_id(next_employee_id());
        let stored = self.employees.insert(employee)?;
        info!(employee = %stored.id, email = %stored.email, "employee record created");
        Ok(stored)
    }

    /// Self-service update of the caller's own profile fields.
    pub fn update_profile(
        &self,
        principal: &Principal,
        update: ProfileUpdate,
    ) -> Result<Employee, EmployeeServiceError> {
        let mut employee = self.current(principal)?;
        employee.apply_profile_update(update);
        self.employees.update(employee.clone())?;
        Ok(employee)
    }

    /// Administrative edit of an existing record. The job title must still
    /// come from the allow-list; a changed email must remain unique.
    pub fn admin_update(
        &self,
        principal: &Principal,
        id: EmployeeId,
        update: AdminUpdate,
    ) -> Result<Employee, EmployeeServiceError> {
        principal.require_admin()?;

        let mut employee = self.get(id)?;

        if !self.rules.is_allowed_job_title(&update.job_title) {
            return Err(ValidationError::JobTitle(update.job_title).into());
        }
        if update.email != employee.email {
            if let Some(other) = self.employees.fetch_by_email(&update.email)? {
                if other.id != id {
                    return Err(EmployeeServiceError::DuplicateEmail(update.email));
                }
            }
        }

        employee.apply_admin_update(update);
        self.employees.update(employee.clone())?;
        Ok(employee)
    }

    /// Remove an employee and, with them, their entire day-off history.
    pub fn delete(&self, principal: &Principal, id: EmployeeId) -> Result<(), EmployeeServiceError> {
        principal.require_admin()?;

        let employee = self.get(id)?;
        let dropped = self.day_offs.remove_for_employee(id)?;
        self.employees.remove(id)?;
        info!(
            employee = %id,
            email = %employee.email,
            day_off_requests = dropped,
            "employee record deleted"
        );
        Ok(())
    }
}

/// Error raised by the employee service.
#[derive(Debug, thiserror::Error)]
pub enum EmployeeServiceError {
    #[error(transparent)]
    Access(#[from] AccessDenied),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("an employee with email '{0}' already exists")]
    DuplicateEmail(String),
    #[error("an employee with national id '{0}' already exists")]
    DuplicateNationalId(String),
    #[error("employee {0} not found")]
    NotFound(EmployeeId),
    #[error("no employee record matches '{0}'")]
    UnknownPrincipal(String),
    #[error(transparent)]
    Store(#[from] RepositoryError),
}

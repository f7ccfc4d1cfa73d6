use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{info, warn};

use super::domain::{inclusive_days, CancelError, DayOffRequest, DayOffRequestId};
use super::repository::DayOffStore;
use crate::hr::employees::domain::{EmployeeId, InsufficientBalance};
use crate::hr::employees::repository::{EmployeeStore, RepositoryError};
use crate::hr::principal::Principal;

static DAY_OFF_SEQUENCE: AtomicU32 = AtomicU32::new(1);

fn next_request_id() -> DayOffRequestId {
    DayOffRequestId(DAY_OFF_SEQUENCE.fetch_add(1, Ordering::Relaxed))
}

/// The day-off ledger: records leave requests and keeps each employee's
/// balance consistent with them. Submitting deducts and records in one
/// operation; canceling restores the exact day count the request froze at
/// creation.
pub struct LeaveLedger<E, D> {
    employees: Arc<E>,
    requests: Arc<D>,
}

impl<E, D> LeaveLedger<E, D>
where
    E: EmployeeStore + 'static,
    D: DayOffStore + 'static,
{
    pub fn new(employees: Arc<E>, requests: Arc<D>) -> Self {
        Self {
            employees,
            requests,
        }
    }

    /// Point-in-time snapshot of every request, canceled ones included.
    pub fn list_all(&self) -> Result<Vec<DayOffRequest>, LeaveError> {
        Ok(self.requests.list()?)
    }

    pub fn list_for_employee(
        &self,
        employee_id: EmployeeId,
    ) -> Result<Vec<DayOffRequest>, LeaveError> {
        Ok(self.requests.list_for_employee(employee_id)?)
    }

    pub fn get(&self, id: DayOffRequestId) -> Result<DayOffRequest, LeaveError> {
        self.requests.fetch(id)?.ok_or(LeaveError::NotFound(id))
    }

    /// Submit a leave request for the calling employee. The inclusive day
    /// count (minimum 1 for a single-day range) is checked against the
    /// balance, deducted, and frozen onto the stored request; when the
    /// balance is short, nothing is persisted.
    pub fn submit(
        &self,
        principal: &Principal,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<DayOffRequest, LeaveError> {
        let mut employee = self
            .employees
            .fetch_by_email(&principal.email)?
            .ok_or_else(|| LeaveError::UnknownPrincipal(principal.email.clone()))?;

        let requested_days = inclusive_days(start_date, end_date).ok_or(
            LeaveError::InvalidRange {
                start: start_date,
                end: end_date,
            },
        )?;

        if let Err(short) = employee.deduct_holiday(requested_days) {
            warn!(
                employee = %employee.id,
                available = short.available,
                requested = short.requested,
                "leave request rejected, balance too low"
            );
            return Err(short.into());
        }

        let request = DayOffRequest::open(
            next_request_id(),
            employee.id,
            start_date,
            end_date,
            requested_days,
        );
        let stored = self.requests.insert(request)?;
        self.employees.update(employee)?;

        info!(
            request = %stored.id,
            employee = %stored.employee_id,
            days = stored.requested_days,
            "leave request recorded"
        );
        Ok(stored)
    }

    /// Cancel a request owned by the caller, restoring its day count to the
    /// balance. Only pending requests that have not started by `today` can
    /// be canceled.
    pub fn cancel(
        &self,
        principal: &Principal,
        id: DayOffRequestId,
        today: NaiveDate,
    ) -> Result<DayOffRequest, LeaveError> {
        let mut request = self.get(id)?;
        let mut employee = self
            .employees
            .fetch_by_email(&principal.email)?
            .ok_or_else(|| LeaveError::UnknownPrincipal(principal.email.clone()))?;

        if request.employee_id != employee.id {
            return Err(LeaveError::NotRequestOwner {
                request: id,
                email: principal.email.clone(),
            });
        }

        request.cancel(today)?;
        employee.restore_holiday(request.requested_days);

        self.requests.update(request.clone())?;
        self.employees.update(employee)?;

        info!(
            request = %request.id,
            employee = %request.employee_id,
            days_restored = request.requested_days,
            "leave request canceled"
        );
        Ok(request)
    }
}

/// Error raised by the day-off ledger.
#[derive(Debug, thiserror::Error)]
pub enum LeaveError {
    #[error("day-off request {0} not found")]
    NotFound(DayOffRequestId),
    #[error(transparent)]
    Cancel(#[from] CancelError),
    #[error("end date {end} precedes start date {start}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },
    #[error(transparent)]
    Balance(#[from] InsufficientBalance),
    #[error("day-off request {request} does not belong to '{email}'")]
    NotRequestOwner {
        request: DayOffRequestId,
        email: String,
    },
    #[error("no employee record matches '{0}'")]
    UnknownPrincipal(String),
    #[error(transparent)]
    Store(#[from] RepositoryError),
}

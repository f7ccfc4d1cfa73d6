use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::hr::employees::domain::EmployeeId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DayOffRequestId(pub u32);

impl fmt::Display for DayOffRequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A bounded date-range leave request owned by one employee. The day count
/// is fixed at creation and never recalculated; cancellation is a one-way
/// transition guarded by [`DayOffRequest::cancel`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayOffRequest {
    pub id: DayOffRequestId,
    pub employee_id: EmployeeId,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub requested_days: u32,
    canceled: bool,
}

impl DayOffRequest {
    pub(super) fn open(
        id: DayOffRequestId,
        employee_id: EmployeeId,
        start_date: NaiveDate,
        end_date: NaiveDate,
        requested_days: u32,
    ) -> Self {
        Self {
            id,
            employee_id,
            start_date,
            end_date,
            requested_days,
            canceled: false,
        }
    }

    pub fn is_canceled(&self) -> bool {
        self.canceled
    }

    /// Flip the canceled flag. Only allowed once, and only strictly before
    /// the start date: a request starting today can still be canceled.
    pub fn cancel(&mut self, today: NaiveDate) -> Result<(), CancelError> {
        if self.canceled {
            return Err(CancelError::AlreadyCanceled);
        }
        if self.start_date < today {
            return Err(CancelError::AlreadyStarted {
                start: self.start_date,
            });
        }
        self.canceled = true;
        Ok(())
    }
}

/// Inclusive day count of a leave range; `None` when the end precedes the
/// start.
pub fn inclusive_days(start: NaiveDate, end: NaiveDate) -> Option<u32> {
    if end < start {
        return None;
    }
    Some((end.signed_duration_since(start).num_days() + 1) as u32)
}

/// Rejections of the cancel transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CancelError {
    #[error("request is already canceled")]
    AlreadyCanceled,
    #[error("cannot cancel, leave already started on {start}")]
    AlreadyStarted { start: NaiveDate },
}

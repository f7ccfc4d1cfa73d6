//! Day-off ledger: leave requests, one-way cancellation, and the balance
//! accounting tied to them.

pub mod domain;
pub mod repository;
pub mod router;
pub mod service;

pub use domain::{CancelError, DayOffRequest, DayOffRequestId};
pub use repository::DayOffStore;
pub use router::leave_router;
pub use service::{LeaveError, LeaveLedger};

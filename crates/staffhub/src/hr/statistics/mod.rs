//! Workforce statistics: headcount breakdowns recomputed by full scan on
//! every call.

pub mod router;
pub mod service;
pub mod views;

pub use router::statistics_router;
pub use service::{StatisticsError, StatisticsService};
pub use views::{ContractBreakdown, DepartmentCount, GenderBreakdown, HeadcountReport};

//! HR domain: employee directory, day-off ledger, account-signup queue,
//! workforce statistics, and CSV export.

pub mod accounts;
pub mod employees;
pub mod export;
pub mod leave;
pub mod principal;
pub mod statistics;

#[cfg(test)]
pub(crate) mod testing;

pub use principal::{AccessDenied, Principal};

//! StaffHub core: employee directory, day-off ledger, account-signup queue,
//! and workforce statistics.
//!
//! The crate exposes the domain services behind storage traits so the API
//! binary (and tests) can plug in their own stores. HTTP routers live next to
//! each service; everything above them (server wiring, metrics, CLI) belongs
//! to the `staffhub-api` crate.

pub mod config;
pub mod error;
pub mod hr;
pub mod telemetry;

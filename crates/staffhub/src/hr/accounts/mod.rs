//! Account-signup queue: public signup intake and the admin review flow.

pub mod domain;
pub mod repository;
pub mod router;
pub mod service;

pub use domain::{AccountRequest, AccountRequestId};
pub use repository::AccountRequestStore;
pub use router::accounts_router;
pub use service::{AccountRequestError, AccountRequestQueue};

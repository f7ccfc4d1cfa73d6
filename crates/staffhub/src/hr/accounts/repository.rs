use super::domain::{AccountRequest, AccountRequestId};
use crate::hr::employees::repository::RepositoryError;

/// Storage abstraction for account-signup requests.
pub trait AccountRequestStore: Send + Sync {
    fn insert(&self, request: AccountRequest) -> Result<AccountRequest, RepositoryError>;
    fn update(&self, request: AccountRequest) -> Result<(), RepositoryError>;
    fn fetch(&self, id: AccountRequestId) -> Result<Option<AccountRequest>, RepositoryError>;
    fn list(&self) -> Result<Vec<AccountRequest>, RepositoryError>;
    fn remove(&self, id: AccountRequestId) -> Result<(), RepositoryError>;
}

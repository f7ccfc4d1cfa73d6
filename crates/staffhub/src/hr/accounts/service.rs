use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use tracing::info;

use super::domain::{AccountRequest, AccountRequestId};
use super::repository::AccountRequestStore;
use crate::hr::employees::repository::RepositoryError;
use crate::hr::principal::{AccessDenied, Principal};

static ACCOUNT_REQUEST_SEQUENCE: AtomicU32 = AtomicU32::new(1);

fn next_request_id() -> AccountRequestId {
    AccountRequestId(ACCOUNT_REQUEST_SEQUENCE.fetch_add(1, Ordering::Relaxed))
}

/// Queue of pending signup requests. Submission is public; everything else
/// is an administrator action.
pub struct AccountRequestQueue<S> {
    store: Arc<S>,
}

impl<S> AccountRequestQueue<S>
where
    S: AccountRequestStore + 'static,
{
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Record a signup submission from the public form.
    pub fn submit(
        &self,
        name: impl Into<String>,
        email: impl Into<String>,
    ) -> Result<AccountRequest, AccountRequestError> {
        let request = AccountRequest::pending(next_request_id(), name.into(), email.into());
        let stored = self.store.insert(request)?;
        info!(request = %stored.id, email = %stored.email, "account request received");
        Ok(stored)
    }

    /// Requests still awaiting action, partitioned by full scan.
    pub fn list_active(
        &self,
        principal: &Principal,
    ) -> Result<Vec<AccountRequest>, AccountRequestError> {
        principal.require_admin()?;
        let mut requests = self.store.list()?;
        requests.retain(|request| !request.is_completed());
        Ok(requests)
    }

    /// Requests an administrator already handled.
    pub fn list_completed(
        &self,
        principal: &Principal,
    ) -> Result<Vec<AccountRequest>, AccountRequestError> {
        principal.require_admin()?;
        let mut requests = self.store.list()?;
        requests.retain(AccountRequest::is_completed);
        Ok(requests)
    }

    pub fn get(&self, id: AccountRequestId) -> Result<AccountRequest, AccountRequestError> {
        self.store
            .fetch(id)?
            .ok_or(AccountRequestError::NotFound(id))
    }

    /// Mark a request handled. Completing an already-completed request is a
    /// no-op; the updated record is returned either way.
    pub fn complete(
        &self,
        principal: &Principal,
        id: AccountRequestId,
    ) -> Result<AccountRequest, AccountRequestError> {
        principal.require_admin()?;

        let mut request = self.get(id)?;
        if request.complete() {
            self.store.update(request.clone())?;
            info!(request = %request.id, "account request completed");
        }
        Ok(request)
    }

    /// Delete a request, but only while it is still pending. A missing or
    /// already-completed request is silently left alone.
    pub fn delete(
        &self,
        principal: &Principal,
        id: AccountRequestId,
    ) -> Result<(), AccountRequestError> {
        principal.require_admin()?;

        if let Some(request) = self.store.fetch(id)? {
            if !request.is_completed() {
                self.store.remove(id)?;
                info!(request = %id, "account request deleted");
            }
        }
        Ok(())
    }
}

/// Error raised by the account-request queue.
#[derive(Debug, thiserror::Error)]
pub enum AccountRequestError {
    #[error(transparent)]
    Access(#[from] AccessDenied),
    #[error("account request {0} not found")]
    NotFound(AccountRequestId),
    #[error(transparent)]
    Store(#[from] RepositoryError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hr::employees::domain::Role;
    use crate::hr::testing::{admin_principal, MemoryAccountRequestStore};

    fn queue() -> AccountRequestQueue<MemoryAccountRequestStore> {
        AccountRequestQueue::new(Arc::new(MemoryAccountRequestStore::default()))
    }

    #[test]
    fn submissions_start_pending() {
        let queue = queue();
        let request = queue
            .submit("Ana Popescu", "ana.signup@staffhub.test")
            .expect("submitted");

        assert!(!request.is_completed());
        let active = queue.list_active(&admin_principal()).expect("list");
        assert!(active.iter().any(|entry| entry.id == request.id));
    }

    #[test]
    fn complete_is_idempotent() {
        let queue = queue();
        let admin = admin_principal();
        let request = queue
            .submit("Dan Ionescu", "dan.signup@staffhub.test")
            .expect("submitted");

        let first = queue.complete(&admin, request.id).expect("first complete");
        let second = queue.complete(&admin, request.id).expect("second complete");

        assert!(first.is_completed());
        assert!(second.is_completed());
        let completed = queue.list_completed(&admin).expect("list");
        assert_eq!(
            completed
                .iter()
                .filter(|entry| entry.id == request.id)
                .count(),
            1
        );
    }

    #[test]
    fn listing_partitions_by_completion() {
        let queue = queue();
        let admin = admin_principal();
        let pending = queue
            .submit("Ioana Marin", "ioana.signup@staffhub.test")
            .expect("submitted");
        let handled = queue
            .submit("Vlad Georgescu", "vlad.signup@staffhub.test")
            .expect("submitted");
        queue.complete(&admin, handled.id).expect("completed");

        let active = queue.list_active(&admin).expect("active");
        let completed = queue.list_completed(&admin).expect("completed");

        assert!(active.iter().any(|entry| entry.id == pending.id));
        assert!(active.iter().all(|entry| entry.id != handled.id));
        assert!(completed.iter().any(|entry| entry.id == handled.id));
    }

    #[test]
    fn delete_skips_completed_requests() {
        let queue = queue();
        let admin = admin_principal();
        let request = queue
            .submit("Mara Stan", "mara.signup@staffhub.test")
            .expect("submitted");
        queue.complete(&admin, request.id).expect("completed");

        queue.delete(&admin, request.id).expect("delete is quiet");

        assert!(queue.get(request.id).is_ok(), "completed request survives");
    }

    #[test]
    fn delete_removes_pending_requests() {
        let queue = queue();
        let admin = admin_principal();
        let request = queue
            .submit("Radu Petre", "radu.signup@staffhub.test")
            .expect("submitted");

        queue.delete(&admin, request.id).expect("deleted");

        assert!(matches!(
            queue.get(request.id),
            Err(AccountRequestError::NotFound(_))
        ));
    }

    #[test]
    fn delete_of_unknown_id_is_quiet() {
        let queue = queue();
        let result = queue.delete(&admin_principal(), AccountRequestId(424_242));
        assert!(result.is_ok());
    }

    #[test]
    fn admin_gate_covers_the_review_surface() {
        let queue = queue();
        let user = Principal::new("ana.signup@staffhub.test", Role::User);
        let request = queue
            .submit("Ana Popescu", "ana.signup@staffhub.test")
            .expect("submitted");

        assert!(matches!(
            queue.list_active(&user),
            Err(AccountRequestError::Access(_))
        ));
        assert!(matches!(
            queue.complete(&user, request.id),
            Err(AccountRequestError::Access(_))
        ));
        assert!(matches!(
            queue.delete(&user, request.id),
            Err(AccountRequestError::Access(_))
        ));
    }
}

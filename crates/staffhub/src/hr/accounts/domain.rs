use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccountRequestId(pub u32);

impl fmt::Display for AccountRequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A pending request for a new employee login, awaiting administrator
/// action. Not linked to an employee record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountRequest {
    pub id: AccountRequestId,
    pub name: String,
    pub email: String,
    completed: bool,
}

impl AccountRequest {
    pub(super) fn pending(id: AccountRequestId, name: String, email: String) -> Self {
        Self {
            id,
            name,
            email,
            completed: false,
        }
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Mark the request handled. Idempotent: returns whether this call
    /// changed anything.
    pub fn complete(&mut self) -> bool {
        if self.completed {
            return false;
        }
        self.completed = true;
        true
    }
}

//! Shared in-memory stores and fixtures for the unit tests in this crate.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use super::accounts::domain::{AccountRequest, AccountRequestId};
use super::accounts::repository::AccountRequestStore;
use super::employees::domain::{Employee, EmployeeId, EmployeeSubmission, Role};
use super::employees::repository::{EmployeeStore, RepositoryError};
use super::employees::service::EmployeeService;
use super::leave::domain::{DayOffRequest, DayOffRequestId};
use super::leave::repository::DayOffStore;
use super::leave::service::LeaveLedger;
use super::principal::Principal;

#[derive(Default, Clone)]
pub(crate) struct MemoryEmployeeStore {
    records: Arc<Mutex<HashMap<EmployeeId, Employee>>>,
}

impl EmployeeStore for MemoryEmployeeStore {
    fn insert(&self, employee: Employee) -> Result<Employee, RepositoryError> {
        let mut guard = self.records.lock().expect("store mutex poisoned");
        if guard.contains_key(&employee.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(employee.id, employee.clone());
        Ok(employee)
    }

    fn update(&self, employee: Employee) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("store mutex poisoned");
        if guard.contains_key(&employee.id) {
            guard.insert(employee.id, employee);
            Ok(())
        } else {
            Err(RepositoryError::NotFound)
        }
    }

    fn fetch(&self, id: EmployeeId) -> Result<Option<Employee>, RepositoryError> {
        let guard = self.records.lock().expect("store mutex poisoned");
        Ok(guard.get(&id).cloned())
    }

    fn fetch_by_email(&self, email: &str) -> Result<Option<Employee>, RepositoryError> {
        let guard = self.records.lock().expect("store mutex poisoned");
        Ok(guard.values().find(|record| record.email == email).cloned())
    }

    fn fetch_by_national_id(
        &self,
        national_id: &str,
    ) -> Result<Option<Employee>, RepositoryError> {
        let guard = self.records.lock().expect("store mutex poisoned");
        Ok(guard
            .values()
            .find(|record| record.national_id == national_id)
            .cloned())
    }

    fn list(&self) -> Result<Vec<Employee>, RepositoryError> {
        let guard = self.records.lock().expect("store mutex poisoned");
        Ok(guard.values().cloned().collect())
    }

    fn remove(&self, id: EmployeeId) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("store mutex poisoned");
        guard.remove(&id).map(|_| ()).ok_or(RepositoryError::NotFound)
    }
}

#[derive(Default, Clone)]
pub(crate) struct MemoryDayOffStore {
    records: Arc<Mutex<HashMap<DayOffRequestId, DayOffRequest>>>,
}

impl DayOffStore for MemoryDayOffStore {
    fn insert(&self, request: DayOffRequest) -> Result<DayOffRequest, RepositoryError> {
        let mut guard = self.records.lock().expect("store mutex poisoned");
        if guard.contains_key(&request.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(request.id, request.clone());
        Ok(request)
    }

    fn update(&self, request: DayOffRequest) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("store mutex poisoned");
        if guard.contains_key(&request.id) {
            guard.insert(request.id, request);
            Ok(())
        } else {
            Err(RepositoryError::NotFound)
        }
    }

    fn fetch(&self, id: DayOffRequestId) -> Result<Option<DayOffRequest>, RepositoryError> {
        let guard = self.records.lock().expect("store mutex poisoned");
        Ok(guard.get(&id).cloned())
    }

    fn list(&self) -> Result<Vec<DayOffRequest>, RepositoryError> {
        let guard = self.records.lock().expect("store mutex poisoned");
        Ok(guard.values().cloned().collect())
    }

    fn list_for_employee(
        &self,
        employee_id: EmployeeId,
    ) -> Result<Vec<DayOffRequest>, RepositoryError> {
        let guard = self.records.lock().expect("store mutex poisoned");
        Ok(guard
            .values()
            .filter(|record| record.employee_id == employee_id)
            .cloned()
            .collect())
    }

    fn remove_for_employee(&self, employee_id: EmployeeId) -> Result<u32, RepositoryError> {
        let mut guard = self.records.lock().expect("store mutex poisoned");
        let before = guard.len();
        guard.retain(|_, record| record.employee_id != employee_id);
        Ok((before - guard.len()) as u32)
    }
}

#[derive(Default, Clone)]
pub(crate) struct MemoryAccountRequestStore {
    records: Arc<Mutex<HashMap<AccountRequestId, AccountRequest>>>,
}

impl AccountRequestStore for MemoryAccountRequestStore {
    fn insert(&self, request: AccountRequest) -> Result<AccountRequest, RepositoryError> {
        let mut guard = self.records.lock().expect("store mutex poisoned");
        if guard.contains_key(&request.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(request.id, request.clone());
        Ok(request)
    }

    fn update(&self, request: AccountRequest) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("store mutex poisoned");
        if guard.contains_key(&request.id) {
            guard.insert(request.id, request);
            Ok(())
        } else {
            Err(RepositoryError::NotFound)
        }
    }

    fn fetch(&self, id: AccountRequestId) -> Result<Option<AccountRequest>, RepositoryError> {
        let guard = self.records.lock().expect("store mutex poisoned");
        Ok(guard.get(&id).cloned())
    }

    fn list(&self) -> Result<Vec<AccountRequest>, RepositoryError> {
        let guard = self.records.lock().expect("store mutex poisoned");
        Ok(guard.values().cloned().collect())
    }

    fn remove(&self, id: AccountRequestId) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("store mutex poisoned");
        guard.remove(&id).map(|_| ()).ok_or(RepositoryError::NotFound)
    }
}

pub(crate) fn admin_principal() -> Principal {
    Principal::new("root@staffhub.test", Role::Admin)
}

/// A submission that passes every intake rule; tests tweak single fields to
/// probe individual rules.
pub(crate) fn valid_submission(email: &str, national_id: &str) -> EmployeeSubmission {
    EmployeeSubmission {
        role: "USER".to_string(),
        national_id: national_id.to_string(),
        first_name: "Ana".to_string(),
        last_name: "Popescu".to_string(),
        email: email.to_string(),
        gender: "Female".to_string(),
        address: "12 Union Square".to_string(),
        phone_number: "0740123456".to_string(),
        image_link: "https://cdn.staffhub.test/avatars/ana.png".to_string(),
        degrees: vec!["BSc Computer Science".to_string()],
        department: "Development".to_string(),
        job_title: "Developer".to_string(),
        hiring_date: "15-03-2021".to_string(),
        contract: "Full-Time".to_string(),
        salary: 5400,
        holiday_allowance: 21,
        devices: vec!["laptop-0042".to_string()],
    }
}

pub(crate) fn build_directory() -> (
    Arc<MemoryEmployeeStore>,
    Arc<MemoryDayOffStore>,
    EmployeeService<MemoryEmployeeStore, MemoryDayOffStore>,
) {
    let employees = Arc::new(MemoryEmployeeStore::default());
    let day_offs = Arc::new(MemoryDayOffStore::default());
    let directory = EmployeeService::new(employees.clone(), day_offs.clone());
    (employees, day_offs, directory)
}

pub(crate) fn build_ledger(
    employees: Arc<MemoryEmployeeStore>,
    day_offs: Arc<MemoryDayOffStore>,
) -> LeaveLedger<MemoryEmployeeStore, MemoryDayOffStore> {
    LeaveLedger::new(employees, day_offs)
}

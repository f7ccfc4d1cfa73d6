use chrono::NaiveDate;
use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

use staffhub::hr::accounts::domain::{AccountRequest, AccountRequestId};
use staffhub::hr::accounts::repository::AccountRequestStore;
use staffhub::hr::employees::domain::{Employee, EmployeeId};
use staffhub::hr::employees::repository::{EmployeeStore, RepositoryError};
use staffhub::hr::leave::domain::{DayOffRequest, DayOffRequestId};
use staffhub::hr::leave::repository::DayOffStore;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryEmployeeStore {
    records: Arc<Mutex<HashMap<EmployeeId, Employee>>>,
}

impl EmployeeStore for InMemoryEmployeeStore {
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
pub(crate) struct InMemoryDayOffStore {
    records: Arc<Mutex<HashMap<DayOffRequestId, DayOffRequest>>>,
}

impl DayOffStore for InMemoryDayOffStore {
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
pub(crate) struct InMemoryAccountRequestStore {
    records: Arc<Mutex<HashMap<AccountRequestId, AccountRequest>>>,
}

impl AccountRequestStore for InMemoryAccountRequestStore {
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

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

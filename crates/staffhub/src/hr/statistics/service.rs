use std::sync::Arc;

use super::views::{ContractBreakdown, DepartmentCount, GenderBreakdown, HeadcountReport};
use crate::hr::employees::domain::{ContractType, Department, Employee, Gender};
use crate::hr::employees::repository::{EmployeeStore, RepositoryError};
use crate::hr::principal::{AccessDenied, Principal};

/// Population counts over the employee set. Every metric is an independent
/// full scan filtered to active employees (role USER); nothing is cached or
/// maintained incrementally.
pub struct StatisticsService<E> {
    employees: Arc<E>,
}

impl<E> StatisticsService<E>
where
    E: EmployeeStore + 'static,
{
    pub fn new(employees: Arc<E>) -> Self {
        Self { employees }
    }

    pub fn total_active(&self) -> Result<usize, StatisticsError> {
        Ok(self.active_scan()?.count())
    }

    pub fn count_by_gender(&self, gender: Gender) -> Result<usize, StatisticsError> {
        Ok(self
            .active_scan()?
            .filter(|employee| employee.gender == gender)
            .count())
    }

    pub fn count_by_contract(&self, contract: ContractType) -> Result<usize, StatisticsError> {
        Ok(self
            .active_scan()?
            .filter(|employee| employee.contract == contract)
            .count())
    }

    pub fn count_by_department(&self, department: Department) -> Result<usize, StatisticsError> {
        Ok(self
            .active_scan()?
            .filter(|employee| employee.department == department)
            .count())
    }

    /// Assemble the statistics page payload; admin only. Each breakdown is
    /// recomputed from scratch on every call.
    pub fn headcount(&self, principal: &Principal) -> Result<HeadcountReport, StatisticsError> {
        principal.require_admin()?;

        let by_gender = GenderBreakdown {
            male: self.count_by_gender(Gender::Male)?,
            female: self.count_by_gender(Gender::Female)?,
        };
        let by_contract = ContractBreakdown {
            full_time: self.count_by_contract(ContractType::FullTime)?,
            part_time: self.count_by_contract(ContractType::PartTime)?,
            internship: self.count_by_contract(ContractType::Internship)?,
        };
        let by_department = Department::ALL
            .into_iter()
            .map(|department| {
                Ok(DepartmentCount {
                    department,
                    label: department.label(),
                    headcount: self.count_by_department(department)?,
                })
            })
            .collect::<Result<Vec<_>, StatisticsError>>()?;

        Ok(HeadcountReport {
            total_active: self.total_active()?,
            by_gender,
            by_contract,
            by_department,
        })
    }

    fn active_scan(&self) -> Result<impl Iterator<Item = Employee>, RepositoryError> {
        Ok(self
            .employees
            .list()?
            .into_iter()
            .filter(Employee::is_active))
    }
}

/// Error raised by the statistics service.
#[derive(Debug, thiserror::Error)]
pub enum StatisticsError {
    #[error(transparent)]
    Access(#[from] AccessDenied),
    #[error(transparent)]
    Store(#[from] RepositoryError),
}

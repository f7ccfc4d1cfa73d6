use serde::Serialize;

use crate::hr::employees::domain::Department;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct GenderBreakdown {
    pub male: usize,
    pub female: usize,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ContractBreakdown {
    pub full_time: usize,
    pub part_time: usize,
    pub internship: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct DepartmentCount {
    pub department: Department,
    pub label: &'static str,
    pub headcount: usize,
}

/// Snapshot of the active-workforce counts, serialized straight onto the
/// statistics endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct HeadcountReport {
    pub total_active: usize,
    pub by_gender: GenderBreakdown,
    pub by_contract: ContractBreakdown,
    pub by_department: Vec<DepartmentCount>,
}

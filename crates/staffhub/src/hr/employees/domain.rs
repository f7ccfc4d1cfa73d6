use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier assigned to an employee record at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EmployeeId(pub u32);

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Access role; ADMIN unlocks the management surface, USER is a regular
/// employee account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    Admin,
    User,
}

impl Role {
    pub const fn label(self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::User => "USER",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "ADMIN" => Some(Role::Admin),
            "USER" => Some(Role::User),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const fn label(self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Male" => Some(Gender::Male),
            "Female" => Some(Gender::Female),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Department {
    Management,
    #[serde(rename = "IT")]
    It,
    Development,
    #[serde(rename = "HR")]
    Hr,
    Finance,
    Marketing,
}

impl Department {
    pub const ALL: [Department; 6] = [
        Department::Management,
        Department::It,
        Department::Development,
        Department::Hr,
        Department::Finance,
        Department::Marketing,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Department::Management => "Management",
            Department::It => "IT",
            Department::Development => "Development",
            Department::Hr => "HR",
            Department::Finance => "Finance",
            Department::Marketing => "Marketing",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|department| department.label() == value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContractType {
    #[serde(rename = "Full-Time")]
    FullTime,
    #[serde(rename = "Part-Time")]
    PartTime,
    Internship,
}

impl ContractType {
    pub const ALL: [ContractType; 3] = [
        ContractType::FullTime,
        ContractType::PartTime,
        ContractType::Internship,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            ContractType::FullTime => "Full-Time",
            ContractType::PartTime => "Part-Time",
            ContractType::Internship => "Internship",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|contract| contract.label() == value)
    }
}

/// Raw candidate record as submitted by the management form. Closed-set
/// fields stay strings here; the validation rules convert them into the
/// typed [`Employee`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeSubmission {
    pub role: String,
    pub national_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub gender: String,
    pub address: String,
    pub phone_number: String,
    pub image_link: String,
    #[serde(default)]
    pub degrees: Vec<String>,
    pub department: String,
    pub job_title: String,
    pub hiring_date: String,
    pub contract: String,
    pub salary: i64,
    pub holiday_allowance: u32,
    #[serde(default)]
    pub devices: Vec<String>,
}

/// Self-service profile fields an employee may change about themselves.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileUpdate {
    pub first_name: String,
    pub last_name: String,
    pub image_link: String,
    pub address: String,
    pub phone_number: String,
    #[serde(default)]
    pub degrees: Vec<String>,
}

/// Administrative edit of an existing record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminUpdate {
    pub role: Role,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub address: String,
    pub phone_number: String,
    #[serde(default)]
    pub degrees: Vec<String>,
    pub department: Department,
    pub job_title: String,
    pub contract: ContractType,
    pub holiday_allowance: u32,
    #[serde(default)]
    pub devices: Vec<String>,
}

/// At most this many free-text degree entries are kept per employee.
pub const MAX_DEGREES: usize = 4;

/// A validated employee record. The leave balance only moves through the
/// named transitions below, never through direct field access.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: EmployeeId,
    pub role: Role,
    pub national_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub gender: Gender,
    pub address: String,
    pub phone_number: String,
    pub image_link: String,
    pub degrees: Vec<String>,
    pub department: Department,
    pub job_title: String,
    pub hiring_date: String,
    pub contract: ContractType,
    pub salary: u32,
    holiday_balance: u32,
    pub devices: Vec<String>,
}

impl Employee {
    #[allow(clippy::too_many_arguments)]
    pub(super) fn from_validated(
        role: Role,
        national_id: String,
        first_name: String,
        last_name: String,
        email: String,
        gender: Gender,
        address: String,
        phone_number: String,
        image_link: String,
        degrees: Vec<String>,
        department: Department,
        job_title: String,
        hiring_date: String,
        contract: ContractType,
        salary: u32,
        holiday_allowance: u32,
        devices: Vec<String>,
    ) -> Self {
        Self {
            id: EmployeeId(0),
            role,
            national_id,
            first_name,
            last_name,
            email,
            gender,
            address,
            phone_number,
            image_link,
            degrees,
            department,
            job_title,
            hiring_date,
            contract,
            salary,
            holiday_balance: holiday_allowance,
            devices,
        }
    }

    pub(super) fn assign_id(&mut self, id: EmployeeId) {
        self.id = id;
    }

    /// Remaining leave days.
    pub fn holiday_balance(&self) -> u32 {
        self.holiday_balance
    }

    /// Whether this record counts as an active (non-administrative) employee.
    pub fn is_active(&self) -> bool {
        matches!(self.role, Role::User)
    }

    /// Take `days` out of the leave balance, rejecting overdraw.
    pub fn deduct_holiday(&mut self, days: u32) -> Result<(), InsufficientBalance> {
        if self.holiday_balance < days {
            return Err(InsufficientBalance {
                available: self.holiday_balance,
                requested: days,
            });
        }
        self.holiday_balance -= days;
        Ok(())
    }

    /// Give `days` back, e.g. when a request is canceled before it starts.
    pub fn restore_holiday(&mut self, days: u32) {
        self.holiday_balance = self.holiday_balance.saturating_add(days);
    }

    pub fn apply_profile_update(&mut self, update: ProfileUpdate) {
        let ProfileUpdate {
            first_name,
            last_name,
            image_link,
            address,
            phone_number,
            degrees,
        } = update;

        self.first_name = first_name;
        self.last_name = last_name;
        self.image_link = image_link;
        self.address = address;
        self.phone_number = phone_number;
        self.degrees = clamp_degrees(degrees);
    }

    pub(super) fn apply_admin_update(&mut self, update: AdminUpdate) {
        let AdminUpdate {
            role,
            first_name,
            last_name,
            email,
            address,
            phone_number,
            degrees,
            department,
            job_title,
            contract,
            holiday_allowance,
            devices,
        } = update;

        self.role = role;
        self.first_name = first_name;
        self.last_name = last_name;
        self.email = email;
        self.address = address;
        self.phone_number = phone_number;
        self.degrees = clamp_degrees(degrees);
        self.department = department;
        self.job_title = job_title;
        self.contract = contract;
        self.holiday_balance = holiday_allowance;
        self.devices = devices;
    }
}

pub(super) fn clamp_degrees(mut degrees: Vec<String>) -> Vec<String> {
    degrees.truncate(MAX_DEGREES);
    degrees
}

/// Raised when a leave deduction would overdraw the balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("holiday balance {available} cannot cover the requested {requested} days")]
pub struct InsufficientBalance {
    pub available: u32,
    pub requested: u32,
}

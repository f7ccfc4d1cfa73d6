use super::domain::{
    clamp_degrees, ContractType, Department, Employee, EmployeeSubmission, Gender, Role,
};

/// Job titles accepted at intake.
const ALLOWED_JOB_TITLES: [&str; 14] = [
    "CEO",
    "CTO",
    "CFO",
    "Manager",
    "IT Support Engineer",
    "Developer",
    "QA",
    "Product Owner",
    "HR",
    "HR Manager",
    "Account Payable Operation",
    "Account Payable Manager",
    "Marketing Assistant",
    "Marketing Manager",
];

/// Validation failures carry the offending field plus a human-readable
/// reason; the first violated rule wins.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("gender must be Male or Female")]
    Gender,
    #[error("national id must be exactly 13 decimal digits")]
    NationalId,
    #[error("first and last name must contain letters only")]
    Name,
    #[error("email must look like name@domain")]
    Email,
    #[error("image link must start with 'https://'")]
    ImageLink,
    #[error("role must be ADMIN or USER")]
    Role,
    #[error("job title '{0}' is not in the allowed list")]
    JobTitle(String),
    #[error("department '{0}' is not in the allowed list")]
    Department(String),
    #[error("hiring date must be in format dd-mm-yyyy or dd.mm.yyyy")]
    HiringDate,
    #[error("contract type '{0}' is not in the allowed list")]
    Contract(String),
    #[error("salary must be strictly greater than 0")]
    Salary,
}

impl ValidationError {
    /// Name of the submission field the rule applies to.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::Gender => "gender",
            ValidationError::NationalId => "national_id",
            ValidationError::Name => "name",
            ValidationError::Email => "email",
            ValidationError::ImageLink => "image_link",
            ValidationError::Role => "role",
            ValidationError::JobTitle(_) => "job_title",
            ValidationError::Department(_) => "department",
            ValidationError::HiringDate => "hiring_date",
            ValidationError::Contract(_) => "contract",
            ValidationError::Salary => "salary",
        }
    }
}

/// Stateless rule set guarding employee intake. Rules run in a fixed order
/// and stop at the first violation; a rejected candidate is never persisted.
#[derive(Debug, Clone)]
pub struct ValidationRules {
    job_titles: &'static [&'static str],
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self {
            job_titles: &ALLOWED_JOB_TITLES,
        }
    }
}

impl ValidationRules {
    pub fn is_allowed_job_title(&self, title: &str) -> bool {
        self.job_titles.contains(&title)
    }

    /// Convert a raw submission into a typed [`Employee`] (id still
    /// unassigned), failing on the first violated rule. Order: gender,
    /// national id, name, email, image link, role, job title, department,
    /// hiring date, contract, salary.
    pub fn employee_from_submission(
        &self,
        submission: EmployeeSubmission,
    ) -> Result<Employee, ValidationError> {
        let gender = Gender::parse(&submission.gender).ok_or(ValidationError::Gender)?;

        if !is_national_id(&submission.national_id) {
            return Err(ValidationError::NationalId);
        }

        if !is_plain_name(&submission.first_name) || !is_plain_name(&submission.last_name) {
            return Err(ValidationError::Name);
        }

        if !is_email_shaped(&submission.email) {
            return Err(ValidationError::Email);
        }

        if !submission.image_link.starts_with("https://") {
            return Err(ValidationError::ImageLink);
        }

        let role = Role::parse(&submission.role).ok_or(ValidationError::Role)?;

        if !self.is_allowed_job_title(&submission.job_title) {
            return Err(ValidationError::JobTitle(submission.job_title));
        }

        let department = Department::parse(&submission.department)
            .ok_or_else(|| ValidationError::Department(submission.department.clone()))?;

        if !is_hiring_date(&submission.hiring_date) {
            return Err(ValidationError::HiringDate);
        }

        let contract = ContractType::parse(&submission.contract)
            .ok_or_else(|| ValidationError::Contract(submission.contract.clone()))?;

        if submission.salary <= 0 {
            return Err(ValidationError::Salary);
        }
        let salary = u32::try_from(submission.salary).map_err(|_| ValidationError::Salary)?;

        Ok(Employee::from_validated(
            role,
            submission.national_id,
            submission.first_name,
            submission.last_name,
            submission.email,
            gender,
            submission.address,
            submission.phone_number,
            submission.image_link,
            clamp_degrees(submission.degrees),
            department,
            submission.job_title,
            submission.hiring_date,
            contract,
            salary,
            submission.holiday_allowance,
            submission.devices,
        ))
    }
}

/// Exactly 13 decimal digits.
fn is_national_id(value: &str) -> bool {
    value.len() == 13 && value.bytes().all(|byte| byte.is_ascii_digit())
}

/// Letters only, no spaces or hyphens.
fn is_plain_name(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|ch| ch.is_ascii_alphabetic())
}

/// Permissive `local@domain` shape: some '@' with non-empty text on both
/// sides.
fn is_email_shaped(value: &str) -> bool {
    value
        .rfind('@')
        .is_some_and(|at| at > 0 && at + 1 < value.len())
}

/// `dd-mm-yyyy` or `dd.mm.yyyy`; syntactic only, no calendar check.
fn is_hiring_date(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 10
        && bytes[0].is_ascii_digit()
        && bytes[1].is_ascii_digit()
        && (bytes[2] == b'-' || bytes[2] == b'.')
        && bytes[3].is_ascii_digit()
        && bytes[4].is_ascii_digit()
        && (bytes[5] == b'-' || bytes[5] == b'.')
        && bytes[6..].iter().all(|byte| byte.is_ascii_digit())
}

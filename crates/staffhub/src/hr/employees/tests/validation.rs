use crate::hr::employees::domain::{ContractType, Department, Gender, Role, MAX_DEGREES};
use crate::hr::employees::validation::{ValidationError, ValidationRules};
use crate::hr::testing::valid_submission;

fn rules() -> ValidationRules {
    ValidationRules::default()
}

#[test]
fn a_fully_valid_submission_passes_every_rule() {
    let employee = rules()
        .employee_from_submission(valid_submission("ana@staffhub.test", "2940915123456"))
        .expect("valid submission accepted");

    assert_eq!(employee.role, Role::User);
    assert_eq!(employee.gender, Gender::Female);
    assert_eq!(employee.department, Department::Development);
    assert_eq!(employee.contract, ContractType::FullTime);
    assert_eq!(employee.salary, 5400);
    assert_eq!(employee.holiday_balance(), 21);
}

#[test]
fn gender_rule_fires_first_when_several_fields_are_invalid() {
    let mut submission = valid_submission("ana@staffhub.test", "2940915123456");
    submission.gender = "Other".to_string();
    submission.national_id = "123".to_string();
    submission.salary = -1;

    let error = rules()
        .employee_from_submission(submission)
        .expect_err("must fail");
    assert_eq!(error, ValidationError::Gender);
    assert_eq!(error.field(), "gender");
}

#[test]
fn national_id_must_be_thirteen_digits() {
    let rules = rules();

    let mut short = valid_submission("a@b.test", "2940915123456");
    short.national_id = "294091512345".to_string();
    assert_eq!(
        rules.employee_from_submission(short),
        Err(ValidationError::NationalId)
    );

    let mut lettered = valid_submission("a@b.test", "2940915123456");
    lettered.national_id = "29409151234AB".to_string();
    assert_eq!(
        rules.employee_from_submission(lettered),
        Err(ValidationError::NationalId)
    );
}

#[test]
fn names_allow_letters_only() {
    let rules = rules();

    let mut hyphenated = valid_submission("a@b.test", "2940915123456");
    hyphenated.first_name = "Anne-Marie".to_string();
    assert_eq!(
        rules.employee_from_submission(hyphenated),
        Err(ValidationError::Name)
    );

    let mut spaced = valid_submission("a@b.test", "2940915123456");
    spaced.last_name = "van Dyke".to_string();
    assert_eq!(
        rules.employee_from_submission(spaced),
        Err(ValidationError::Name)
    );

    let mut empty = valid_submission("a@b.test", "2940915123456");
    empty.first_name = String::new();
    assert_eq!(
        rules.employee_from_submission(empty),
        Err(ValidationError::Name)
    );
}

#[test]
fn email_needs_text_on_both_sides_of_the_at_sign() {
    let rules = rules();

    for bad in ["nodomain", "@staffhub.test", "ana@"] {
        let mut submission = valid_submission("placeholder@b.test", "2940915123456");
        submission.email = bad.to_string();
        assert_eq!(
            rules.employee_from_submission(submission),
            Err(ValidationError::Email),
            "'{bad}' should be rejected"
        );
    }

    let mut terse = valid_submission("placeholder@b.test", "2940915123456");
    terse.email = "a@b".to_string();
    assert!(rules.employee_from_submission(terse).is_ok());
}

#[test]
fn image_links_must_be_https() {
    let mut submission = valid_submission("a@b.test", "2940915123456");
    submission.image_link = "http://cdn.staffhub.test/avatar.png".to_string();
    assert_eq!(
        rules().employee_from_submission(submission),
        Err(ValidationError::ImageLink)
    );
}

#[test]
fn role_must_be_admin_or_user() {
    let mut submission = valid_submission("a@b.test", "2940915123456");
    submission.role = "SUPERVISOR".to_string();
    assert_eq!(
        rules().employee_from_submission(submission),
        Err(ValidationError::Role)
    );
}

#[test]
fn job_title_comes_from_the_allow_list() {
    let mut submission = valid_submission("a@b.test", "2940915123456");
    submission.job_title = "Janitor".to_string();
    assert_eq!(
        rules().employee_from_submission(submission),
        Err(ValidationError::JobTitle("Janitor".to_string()))
    );
}

#[test]
fn department_comes_from_the_allow_list() {
    let mut submission = valid_submission("a@b.test", "2940915123456");
    submission.department = "Legal".to_string();
    assert_eq!(
        rules().employee_from_submission(submission),
        Err(ValidationError::Department("Legal".to_string()))
    );
}

#[test]
fn hiring_date_is_checked_syntactically_only() {
    let rules = rules();

    let mut iso = valid_submission("a@b.test", "2940915123456");
    iso.hiring_date = "2021-03-15".to_string();
    assert_eq!(
        rules.employee_from_submission(iso),
        Err(ValidationError::HiringDate)
    );

    let mut dotted = valid_submission("a@b.test", "2940915123456");
    dotted.hiring_date = "15.03.2021".to_string();
    assert!(rules.employee_from_submission(dotted).is_ok());

    // Mixed separators pass, and so does an impossible calendar day: the
    // rule is shape-only.
    let mut mixed = valid_submission("c@d.test", "1940915123456");
    mixed.hiring_date = "99-99.9999".to_string();
    assert!(rules.employee_from_submission(mixed).is_ok());
}

#[test]
fn contract_comes_from_the_closed_set() {
    let mut submission = valid_submission("a@b.test", "2940915123456");
    submission.contract = "Contractor".to_string();
    assert_eq!(
        rules().employee_from_submission(submission),
        Err(ValidationError::Contract("Contractor".to_string()))
    );
}

#[test]
fn salary_must_be_strictly_positive() {
    let rules = rules();

    let mut zero = valid_submission("a@b.test", "2940915123456");
    zero.salary = 0;
    assert_eq!(
        rules.employee_from_submission(zero),
        Err(ValidationError::Salary)
    );

    let mut negative = valid_submission("a@b.test", "2940915123456");
    negative.salary = -4200;
    assert_eq!(
        rules.employee_from_submission(negative),
        Err(ValidationError::Salary)
    );
}

#[test]
fn surplus_degrees_are_dropped() {
    let mut submission = valid_submission("a@b.test", "2940915123456");
    submission.degrees = (1..=6).map(|n| format!("Degree {n}")).collect();

    let employee = rules()
        .employee_from_submission(submission)
        .expect("valid submission accepted");
    assert_eq!(employee.degrees.len(), MAX_DEGREES);
}

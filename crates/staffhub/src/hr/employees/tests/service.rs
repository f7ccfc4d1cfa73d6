use chrono::NaiveDate;

use crate::hr::employees::domain::{AdminUpdate, ContractType, Department, EmployeeId, ProfileUpdate, Role};
use crate::hr::employees::repository::EmployeeStore;
use crate::hr::employees::service::EmployeeServiceError;
use crate::hr::leave::repository::DayOffStore;
use crate::hr::principal::Principal;
use crate::hr::testing::{admin_principal, build_directory, build_ledger, valid_submission};

#[test]
fn create_assigns_an_id_and_persists() {
    let (employees, _, directory) = build_directory();

    let employee = directory
        .create(
            &admin_principal(),
            valid_submission("ana.dir@staffhub.test", "2940915654321"),
        )
        .expect("employee created");

    assert_ne!(employee.id, EmployeeId(0));
    let stored = employees
        .fetch(employee.id)
        .expect("fetch")
        .expect("record present");
    assert_eq!(stored.email, "ana.dir@staffhub.test");
}

#[test]
fn create_is_admin_only() {
    let (_, _, directory) = build_directory();
    let user = Principal::new("someone@staffhub.test", Role::User);

    let result = directory.create(&user, valid_submission("x@staffhub.test", "1940915654321"));

    assert!(matches!(result, Err(EmployeeServiceError::Access(_))));
}

#[test]
fn rejected_candidates_are_never_persisted() {
    let (employees, _, directory) = build_directory();
    let mut submission = valid_submission("bad.dir@staffhub.test", "2840915654321");
    submission.salary = 0;

    let result = directory.create(&admin_principal(), submission);

    assert!(matches!(result, Err(EmployeeServiceError::Validation(_))));
    assert!(employees.list().expect("list").is_empty());
}

#[test]
fn duplicate_emails_are_rejected() {
    let (_, _, directory) = build_directory();
    let admin = admin_principal();
    directory
        .create(&admin, valid_submission("dup.dir@staffhub.test", "2740915654321"))
        .expect("first created");

    let result = directory.create(
        &admin,
        valid_submission("dup.dir@staffhub.test", "1740915654321"),
    );

    assert!(matches!(
        result,
        Err(EmployeeServiceError::DuplicateEmail(_))
    ));
}

#[test]
fn duplicate_national_ids_are_rejected() {
    let (_, _, directory) = build_directory();
    let admin = admin_principal();
    directory
        .create(&admin, valid_submission("nid1.dir@staffhub.test", "2640915654321"))
        .expect("first created");

    let result = directory.create(
        &admin,
        valid_submission("nid2.dir@staffhub.test", "2640915654321"),
    );

    assert!(matches!(
        result,
        Err(EmployeeServiceError::DuplicateNationalId(_))
    ));
}

#[test]
fn get_surfaces_not_found() {
    let (_, _, directory) = build_directory();
    let result = directory.get(EmployeeId(987_654));
    assert!(matches!(result, Err(EmployeeServiceError::NotFound(_))));
}

#[test]
fn last_name_search_is_exact_match() {
    let (_, _, directory) = build_directory();
    let admin = admin_principal();
    directory
        .create(&admin, valid_submission("pa.dir@staffhub.test", "2540915654321"))
        .expect("created");
    let mut other = valid_submission("io.dir@staffhub.test", "1540915654321");
    other.last_name = "Ionescu".to_string();
    directory.create(&admin, other).expect("created");

    let hits = directory.find_by_last_name("Popescu").expect("search");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].email, "pa.dir@staffhub.test");
    assert!(directory
        .find_by_last_name("popescu")
        .expect("search")
        .is_empty());
}

#[test]
fn active_listing_excludes_admin_accounts() {
    let (_, _, directory) = build_directory();
    let admin = admin_principal();
    directory
        .create(&admin, valid_submission("u.dir@staffhub.test", "2440915654321"))
        .expect("created");
    let mut back_office = valid_submission("a.dir@staffhub.test", "1440915654321");
    back_office.role = "ADMIN".to_string();
    directory.create(&admin, back_office).expect("created");

    assert_eq!(directory.list().expect("list").len(), 2);
    let active = directory.list_active().expect("active");
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].email, "u.dir@staffhub.test");
}

#[test]
fn current_resolves_the_principal_email() {
    let (_, _, directory) = build_directory();
    directory
        .create(
            &admin_principal(),
            valid_submission("me.dir@staffhub.test", "2340915654321"),
        )
        .expect("created");

    let me = directory
        .current(&Principal::new("me.dir@staffhub.test", Role::User))
        .expect("record found");
    assert_eq!(me.email, "me.dir@staffhub.test");

    let stranger = directory.current(&Principal::new("ghost@staffhub.test", Role::User));
    assert!(matches!(
        stranger,
        Err(EmployeeServiceError::UnknownPrincipal(_))
    ));
}

#[test]
fn profile_update_touches_self_service_fields_only() {
    let (_, _, directory) = build_directory();
    directory
        .create(
            &admin_principal(),
            valid_submission("prof.dir@staffhub.test", "2240915654321"),
        )
        .expect("created");
    let principal = Principal::new("prof.dir@staffhub.test", Role::User);

    let updated = directory
        .update_profile(
            &principal,
            ProfileUpdate {
                first_name: "Anamaria".to_string(),
                last_name: "Pop".to_string(),
                image_link: "https://cdn.staffhub.test/avatars/new.png".to_string(),
                address: "1 Long Street".to_string(),
                phone_number: "0722000111".to_string(),
                degrees: (1..=6).map(|n| format!("Degree {n}")).collect(),
            },
        )
        .expect("profile updated");

    assert_eq!(updated.first_name, "Anamaria");
    assert_eq!(updated.degrees.len(), 4);
    assert_eq!(updated.department, Department::Development, "job fields untouched");
}

#[test]
fn admin_update_rewrites_the_job_facts() {
    let (_, _, directory) = build_directory();
    let admin = admin_principal();
    let employee = directory
        .create(&admin, valid_submission("edit.dir@staffhub.test", "2140915654321"))
        .expect("created");

    let updated = directory
        .admin_update(
            &admin,
            employee.id,
            AdminUpdate {
                role: Role::User,
                first_name: employee.first_name.clone(),
                last_name: employee.last_name.clone(),
                email: "edit.dir@staffhub.test".to_string(),
                address: employee.address.clone(),
                phone_number: employee.phone_number.clone(),
                degrees: employee.degrees.clone(),
                department: Department::Hr,
                job_title: "HR Manager".to_string(),
                contract: ContractType::PartTime,
                holiday_allowance: 12,
                devices: vec!["badge-0007".to_string()],
            },
        )
        .expect("admin update applied");

    assert_eq!(updated.department, Department::Hr);
    assert_eq!(updated.contract, ContractType::PartTime);
    assert_eq!(updated.holiday_balance(), 12);
    assert_eq!(updated.devices, vec!["badge-0007".to_string()]);
}

#[test]
fn admin_update_still_enforces_the_job_title_allow_list() {
    let (_, _, directory) = build_directory();
    let admin = admin_principal();
    let employee = directory
        .create(&admin, valid_submission("title.dir@staffhub.test", "2040915654321"))
        .expect("created");

    let result = directory.admin_update(
        &admin,
        employee.id,
        AdminUpdate {
            role: Role::User,
            first_name: employee.first_name.clone(),
            last_name: employee.last_name.clone(),
            email: employee.email.clone(),
            address: employee.address.clone(),
            phone_number: employee.phone_number.clone(),
            degrees: employee.degrees.clone(),
            department: employee.department,
            job_title: "Wizard".to_string(),
            contract: employee.contract,
            holiday_allowance: employee.holiday_balance(),
            devices: employee.devices.clone(),
        },
    );

    assert!(matches!(
        result,
        Err(EmployeeServiceError::Validation(_))
    ));
}

#[test]
fn admin_update_rejects_an_email_collision() {
    let (_, _, directory) = build_directory();
    let admin = admin_principal();
    directory
        .create(&admin, valid_submission("taken.dir@staffhub.test", "1840915654321"))
        .expect("created");
    let victim = directory
        .create(&admin, valid_submission("victim.dir@staffhub.test", "1940915654322"))
        .expect("created");

    let result = directory.admin_update(
        &admin,
        victim.id,
        AdminUpdate {
            role: Role::User,
            first_name: victim.first_name.clone(),
            last_name: victim.last_name.clone(),
            email: "taken.dir@staffhub.test".to_string(),
            address: victim.address.clone(),
            phone_number: victim.phone_number.clone(),
            degrees: victim.degrees.clone(),
            department: victim.department,
            job_title: victim.job_title.clone(),
            contract: victim.contract,
            holiday_allowance: victim.holiday_balance(),
            devices: victim.devices.clone(),
        },
    );

    assert!(matches!(
        result,
        Err(EmployeeServiceError::DuplicateEmail(_))
    ));
}

#[test]
fn delete_cascades_the_day_off_history() {
    let (employees, day_offs, directory) = build_directory();
    let admin = admin_principal();
    let employee = directory
        .create(&admin, valid_submission("gone.dir@staffhub.test", "1740915654322"))
        .expect("created");

    let ledger = build_ledger(employees.clone(), day_offs.clone());
    let principal = Principal::new("gone.dir@staffhub.test", Role::User);
    let start = NaiveDate::from_ymd_opt(2024, 6, 3).expect("valid date");
    let end = NaiveDate::from_ymd_opt(2024, 6, 4).expect("valid date");
    ledger.submit(&principal, start, end).expect("request recorded");

    directory.delete(&admin, employee.id).expect("deleted");

    assert!(employees.fetch(employee.id).expect("fetch").is_none());
    assert!(day_offs
        .list_for_employee(employee.id)
        .expect("list")
        .is_empty());
}

#[test]
fn delete_of_a_missing_employee_is_an_error() {
    let (_, _, directory) = build_directory();
    let result = directory.delete(&admin_principal(), EmployeeId(424_242));
    assert!(matches!(result, Err(EmployeeServiceError::NotFound(_))));
}

#[test]
fn delete_is_admin_only() {
    let (_, _, directory) = build_directory();
    let employee = directory
        .create(
            &admin_principal(),
            valid_submission("keep.dir@staffhub.test", "1640915654322"),
        )
        .expect("created");

    let result = directory.delete(
        &Principal::new("keep.dir@staffhub.test", Role::User),
        employee.id,
    );

    assert!(matches!(result, Err(EmployeeServiceError::Access(_))));
}

use chrono::{Duration, Local, NaiveDate};
use clap::Args;
use std::sync::Arc;

use crate::infra::{InMemoryAccountRequestStore, InMemoryDayOffStore, InMemoryEmployeeStore};
use staffhub::error::AppError;
use staffhub::hr::accounts::service::AccountRequestQueue;
use staffhub::hr::employees::domain::{EmployeeSubmission, Role};
use staffhub::hr::employees::service::EmployeeService;
use staffhub::hr::export::employees_csv;
use staffhub::hr::leave::service::{LeaveError, LeaveLedger};
use staffhub::hr::principal::Principal;
use staffhub::hr::statistics::service::StatisticsService;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Reference date for the day-off walkthrough (YYYY-MM-DD, defaults to today)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Print the employee CSV sheet at the end of the walkthrough
    #[arg(long)]
    pub(crate) show_export: bool,
}

fn seed_submissions() -> Vec<EmployeeSubmission> {
    let base = |email: &str, national_id: &str| EmployeeSubmission {
        role: "USER".to_string(),
        national_id: national_id.to_string(),
        first_name: "Ana".to_string(),
        last_name: "Popescu".to_string(),
        email: email.to_string(),
        gender: "Female".to_string(),
        address: "12 Union Square".to_string(),
        phone_number: "0740123456".to_string(),
        image_link: "https://cdn.staffhub.test/avatars/default.png".to_string(),
        degrees: vec!["BSc Computer Science".to_string()],
        department: "Development".to_string(),
        job_title: "Developer".to_string(),
        hiring_date: "15-03-2021".to_string(),
        contract: "Full-Time".to_string(),
        salary: 5400,
        holiday_allowance: 21,
        devices: vec!["laptop-0042".to_string()],
    };

    let ana = base("ana.popescu@staffhub.demo", "2940915123456");

    let mut dan = base("dan.ionescu@staffhub.demo", "1881201123456");
    dan.first_name = "Dan".to_string();
    dan.last_name = "Ionescu".to_string();
    dan.gender = "Male".to_string();
    dan.department = "Finance".to_string();
    dan.job_title = "Account Payable Operation".to_string();
    dan.contract = "Part-Time".to_string();
    dan.holiday_allowance = 10;

    let mut ioana = base("ioana.marin@staffhub.demo", "2850620123456");
    ioana.first_name = "Ioana".to_string();
    ioana.last_name = "Marin".to_string();
    ioana.department = "HR".to_string();
    ioana.job_title = "HR Manager".to_string();
    ioana.holiday_allowance = 3;

    vec![ana, dan, ioana]
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let today = args.today.unwrap_or_else(|| Local::now().date_naive());

    let employees = Arc::new(InMemoryEmployeeStore::default());
    let day_offs = Arc::new(InMemoryDayOffStore::default());
    let accounts = Arc::new(InMemoryAccountRequestStore::default());

    let directory = EmployeeService::new(employees.clone(), day_offs.clone());
    let ledger = LeaveLedger::new(employees.clone(), day_offs);
    let queue = AccountRequestQueue::new(accounts);
    let statistics = StatisticsService::new(employees);

    let admin = Principal::new("root@staffhub.demo", Role::Admin);

    println!("StaffHub workflow demo (reference date {today})");

    println!("\nEmployee intake");
    for submission in seed_submissions() {
        let employee = directory.create(&admin, submission)?;
        println!(
            "- #{} {} {} | {} / {} | {} | {} leave days",
            employee.id,
            employee.first_name,
            employee.last_name,
            employee.department.label(),
            employee.job_title,
            employee.contract.label(),
            employee.holiday_balance()
        );
    }

    println!("\nAccount-signup queue");
    let pending = queue.submit("Vlad Georgescu", "vlad.georgescu@staffhub.demo")?;
    let handled = queue.submit("Mara Stan", "mara.stan@staffhub.demo")?;
    queue.complete(&admin, handled.id)?;
    println!(
        "- {} pending / {} completed",
        queue.list_active(&admin)?.len(),
        queue.list_completed(&admin)?.len()
    );
    println!("- still waiting: {} <{}>", pending.name, pending.email);

    println!("\nDay-off ledger");
    let ana = Principal::new("ana.popescu@staffhub.demo", Role::User);
    let request = ledger.submit(&ana, today + Duration::days(7), today + Duration::days(9))?;
    println!(
        "- Ana books {} days ({} -> {}), balance now {}",
        request.requested_days,
        request.start_date,
        request.end_date,
        directory.current(&ana)?.holiday_balance()
    );

    let ioana = Principal::new("ioana.marin@staffhub.demo", Role::User);
    match ledger.submit(&ioana, today + Duration::days(1), today + Duration::days(5)) {
        Err(LeaveError::Balance(short)) => println!(
            "- Ioana asks for {} days with only {} left: rejected, nothing recorded",
            short.requested, short.available
        ),
        Ok(_) => println!("- Ioana's request unexpectedly went through"),
        Err(other) => return Err(other.into()),
    }

    let canceled = ledger.cancel(&ana, request.id, today)?;
    println!(
        "- Ana cancels request #{} before it starts, balance back to {}",
        canceled.id,
        directory.current(&ana)?.holiday_balance()
    );

    println!("\nWorkforce statistics");
    let report = statistics.headcount(&admin)?;
    println!("- active employees: {}", report.total_active);
    println!(
        "- gender: {} male / {} female",
        report.by_gender.male, report.by_gender.female
    );
    println!(
        "- contracts: {} full-time, {} part-time, {} internships",
        report.by_contract.full_time, report.by_contract.part_time, report.by_contract.internship
    );
    for entry in &report.by_department {
        if entry.headcount > 0 {
            println!("- {}: {}", entry.label, entry.headcount);
        }
    }

    if args.show_export {
        println!("\nEmployee sheet (CSV)");
        let sheet = employees_csv(&directory.list()?)?;
        print!("{sheet}");
    }

    Ok(())
}

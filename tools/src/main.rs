//! desk-runner: headless front door for the ISP desk core.
//!
//! Usage:
//!   desk-runner --db isp_database.db              print a dashboard summary
//!   desk-runner --db isp_database.db --seed-demo  seed demo data first
//!   desk-runner --ipc-mode                        serve JSON requests on stdin
//!
//! In IPC mode the UI process writes one JSON request per line and reads one
//! JSON response per line: {"ok": ...} on success, {"error", "kind"} on
//! failure.

mod troubleshooting;

use anyhow::Result;
use ispdesk_core::{
    complaint::ComplaintStatus,
    config::DeskConfig,
    customer::CustomerRef,
    desk::Desk,
    error::DeskResult,
    types::{BillId, ComplaintId, CustomerId, PlanId},
};
use serde_json::json;
use std::env;
use std::io::{self, BufRead, Write};
use std::path::Path;

#[derive(serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum IpcRequest {
    Dashboard,
    RecentActivity {
        #[serde(default = "default_activity_limit")]
        limit: usize,
    },
    ListCustomers,
    ListPlans,
    ListComplaints,
    ListBills,
    AddCustomer {
        name: String,
        address: String,
        phone: String,
        email: String,
        plan_id: Option<PlanId>,
    },
    UpdateCustomer {
        id: CustomerId,
        name: String,
        address: String,
        phone: String,
        email: String,
        plan_id: Option<PlanId>,
    },
    DeleteCustomer {
        id: CustomerId,
    },
    AddPlan {
        name: String,
        speed: String,
        price: f64,
        data_limit: Option<String>,
        description: Option<String>,
    },
    UpdatePlan {
        id: PlanId,
        name: String,
        speed: String,
        price: f64,
        data_limit: Option<String>,
        description: Option<String>,
    },
    DeletePlan {
        id: PlanId,
    },
    AddComplaint {
        customer: CustomerRef,
        description: String,
        #[serde(default = "default_status")]
        status: ComplaintStatus,
    },
    UpdateComplaint {
        id: ComplaintId,
        customer: CustomerRef,
        description: String,
        status: ComplaintStatus,
        resolution: Option<String>,
    },
    ResolveComplaint {
        id: ComplaintId,
        resolution: String,
    },
    GenerateBill {
        customer: CustomerRef,
        amount: f64,
        due_date: String,
    },
    MarkBillPaid {
        id: BillId,
    },
    Troubleshoot {
        issue: String,
    },
    Quit,
}

fn default_status() -> ComplaintStatus {
    ComplaintStatus::Open
}

fn default_activity_limit() -> usize {
    10
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let mut config = match arg_value(&args, "--config") {
        Some(path) => DeskConfig::load(Path::new(path))?,
        None => DeskConfig::default(),
    };
    if let Some(db) = arg_value(&args, "--db") {
        config.database_path = db.to_string();
    }
    let ipc_mode = args.iter().any(|a| a == "--ipc-mode");
    let seed_demo = args.iter().any(|a| a == "--seed-demo");

    let mut desk = Desk::from_config(&config)?;

    if seed_demo {
        seed_demo_data(&mut desk)?;
    }

    if ipc_mode {
        run_ipc_loop(&mut desk)?;
    } else {
        print_summary(&desk)?;
    }

    Ok(())
}

fn arg_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].as_str())
}

fn run_ipc_loop(desk: &mut Desk) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut handle = stdin.lock();
    let mut buffer = String::new();

    loop {
        buffer.clear();
        let bytes_read = handle.read_line(&mut buffer)?;
        if bytes_read == 0 {
            break; // EOF
        }

        let request: IpcRequest = match serde_json::from_str(&buffer) {
            Ok(r) => r,
            Err(e) => {
                writeln!(stdout, "{}", json!({ "error": e.to_string(), "kind": "request" }))?;
                stdout.flush()?;
                continue;
            }
        };

        if matches!(request, IpcRequest::Quit) {
            break;
        }

        let response = match handle_request(desk, request) {
            Ok(value) => json!({ "ok": value }),
            Err(e) => json!({ "error": e.to_string(), "kind": e.kind() }),
        };
        writeln!(stdout, "{response}")?;
        stdout.flush()?;
    }
    Ok(())
}

fn handle_request(desk: &mut Desk, request: IpcRequest) -> DeskResult<serde_json::Value> {
    match request {
        IpcRequest::Dashboard => Ok(serde_json::to_value(desk.dashboard_stats()?)?),
        IpcRequest::RecentActivity { limit } => {
            Ok(serde_json::to_value(desk.recent_activity(limit)?)?)
        }
        IpcRequest::ListCustomers => Ok(serde_json::to_value(desk.customers()?)?),
        IpcRequest::ListPlans => Ok(serde_json::to_value(desk.plans()?)?),
        IpcRequest::ListComplaints => Ok(serde_json::to_value(desk.complaints()?)?),
        IpcRequest::ListBills => Ok(serde_json::to_value(desk.bills()?)?),
        IpcRequest::AddCustomer {
            name,
            address,
            phone,
            email,
            plan_id,
        } => {
            let id = desk.add_customer(&name, &address, &phone, &email, plan_id)?;
            Ok(json!({ "customer_id": id }))
        }
        IpcRequest::UpdateCustomer {
            id,
            name,
            address,
            phone,
            email,
            plan_id,
        } => {
            desk.update_customer(id, &name, &address, &phone, &email, plan_id)?;
            Ok(json!({ "updated": id }))
        }
        IpcRequest::DeleteCustomer { id } => {
            desk.delete_customer(id)?;
            Ok(json!({ "deleted": id }))
        }
        IpcRequest::AddPlan {
            name,
            speed,
            price,
            data_limit,
            description,
        } => {
            let id = desk.add_plan(
                &name,
                &speed,
                price,
                data_limit.as_deref(),
                description.as_deref(),
            )?;
            Ok(json!({ "plan_id": id }))
        }
        IpcRequest::UpdatePlan {
            id,
            name,
            speed,
            price,
            data_limit,
            description,
        } => {
            desk.update_plan(
                id,
                &name,
                &speed,
                price,
                data_limit.as_deref(),
                description.as_deref(),
            )?;
            Ok(json!({ "updated": id }))
        }
        IpcRequest::DeletePlan { id } => {
            desk.delete_plan(id)?;
            Ok(json!({ "deleted": id }))
        }
        IpcRequest::AddComplaint {
            customer,
            description,
            status,
        } => {
            let id = desk.add_complaint(&customer, &description, status)?;
            Ok(json!({ "complaint_id": id }))
        }
        IpcRequest::UpdateComplaint {
            id,
            customer,
            description,
            status,
            resolution,
        } => {
            desk.update_complaint(id, &customer, &description, status, resolution.as_deref())?;
            Ok(json!({ "updated": id }))
        }
        IpcRequest::ResolveComplaint { id, resolution } => {
            desk.resolve_complaint(id, &resolution)?;
            Ok(json!({ "resolved": id }))
        }
        IpcRequest::GenerateBill {
            customer,
            amount,
            due_date,
        } => {
            let id = desk.generate_bill(&customer, amount, &due_date)?;
            Ok(json!({ "bill_id": id }))
        }
        IpcRequest::MarkBillPaid { id } => {
            let outcome = desk.mark_bill_paid(id)?;
            Ok(json!({ "bill_id": id, "outcome": outcome }))
        }
        IpcRequest::Troubleshoot { issue } => match troubleshooting::steps(&issue) {
            Some(steps) => Ok(json!({ "issue": issue, "steps": steps })),
            None => Ok(json!({ "issue": issue, "steps": [] })),
        },
        IpcRequest::Quit => unreachable!("handled by the loop"),
    }
}

/// Small demo dataset so a fresh database has something to show.
fn seed_demo_data(desk: &mut Desk) -> Result<()> {
    if !desk.plans()?.is_empty() {
        log::info!("database already has plans, skipping demo seed");
        return Ok(());
    }

    let basic = desk.add_plan("Basic", "10Mbps", 19.99, Some("100GB"), None)?;
    let fibre = desk.add_plan("Fibre", "100Mbps", 49.99, None, Some("Unlimited fibre"))?;

    desk.add_customer("Alice Moran", "1 Main St", "555-1111", "alice@example.com", Some(basic))?;
    desk.add_customer("Ben Okafor", "2 Side Ave", "555-2222", "ben@example.com", Some(fibre))?;
    desk.add_customer("Cara Lindqvist", "3 Hill Rd", "555-3333", "cara@example.com", None)?;

    let alice = CustomerRef::Name("Alice Moran".to_string());
    desk.add_complaint(&alice, "Connection drops every evening", ComplaintStatus::Open)?;
    desk.generate_bill(&alice, 19.99, "2026-09-01")?;

    log::info!("seeded demo data");
    Ok(())
}

fn print_summary(desk: &Desk) -> Result<()> {
    let stats = desk.dashboard_stats()?;
    println!("=== DESK SUMMARY ===");
    println!("  customers:          {}", stats.total_customers);
    println!("  active customers:   {}", stats.active_customers);
    println!("  plans:              {}", stats.total_plans);
    match &stats.most_popular_plan {
        Some(popular) => println!(
            "  most popular plan:  {} ({} customers)",
            popular.name, popular.subscribers
        ),
        None => println!("  most popular plan:  none"),
    }
    println!("  open complaints:    {}", stats.open_complaints);
    println!("  resolved:           {}", stats.resolved_complaints);

    let recent = desk.recent_activity(10)?;
    if !recent.is_empty() {
        println!();
        println!("recent activity:");
        for entry in recent {
            println!("  [{}] {} — {}", entry.timestamp, entry.kind.label(), entry.message);
        }
    }
    Ok(())
}

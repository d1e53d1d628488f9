use std::fs::File;

use studio_console::app::App;
use studio_console::model::request::RequestStatus;
use studio_console::model::user::AuthUser;
use studio_console::service::{LeadImportSession, ServiceError};

use crate::cli::{
    ApprovalsCommands, AttendanceCommands, Commands, EmployeesCommands, InvoicesCommands,
    LeadsCommands, RequestsCommands, SettingsCommands,
};

pub async fn run(app: &App, command: Commands) -> Result<(), ServiceError> {
    match command {
        Commands::Login {
            user_id,
            username,
            name,
            role,
        } => {
            app.session.login(AuthUser {
                userId: user_id,
                username,
                displayName: name,
                role,
            })?;
            println!("Logged in.");
            Ok(())
        }
        Commands::Logout => {
            app.session.logout()?;
            println!("Logged out.");
            Ok(())
        }
        Commands::Whoami => {
            match app.session.current() {
                Some(user) => println!("{} (id {})", user.display_name(), user.userId),
                None => println!("Not logged in."),
            }
            Ok(())
        }
        Commands::Leads { command } => leads(app, command).await,
        Commands::Employees { command } => employees(app, command).await,
        Commands::Attendance { command } => attendance(app, command).await,
        Commands::Requests { command } => requests(app, command).await,
        Commands::Approvals { command } => approvals(app, command).await,
        Commands::Invoices { command } => invoices(app, command).await,
        Commands::Settings { command } => settings(app, command).await,
    }
}

async fn settings(app: &App, command: SettingsCommands) -> Result<(), ServiceError> {
    match command {
        SettingsCommands::Addons => {
            for addon in app.catalog.addons().await? {
                println!(
                    "#{:<5} {:<30} {:<12} {:.2}",
                    addon.id.unwrap_or(0),
                    addon.description,
                    addon.unit,
                    addon.price
                );
            }
        }
        SettingsCommands::Packages => {
            for package in app.catalog.packages().await? {
                println!(
                    "#{:<5} {:<30} {:.2} ({} services)",
                    package.id.unwrap_or(0),
                    package.title,
                    package.price,
                    package.services.len()
                );
            }
        }
        SettingsCommands::Roles => {
            for role in app.catalog.roles().await? {
                println!("#{:<5} {}", role.id.unwrap_or(0), role.roleName);
            }
        }
    }
    Ok(())
}

async fn leads(app: &App, command: LeadsCommands) -> Result<(), ServiceError> {
    match command {
        LeadsCommands::List => {
            let leads = app.lifecycle.list_leads().await?;
            for lead in &leads {
                println!(
                    "#{:<5} {:<30} {:<12} {}",
                    lead.id.unwrap_or(0),
                    lead.full_name(),
                    lead.status,
                    lead.email
                );
            }
            println!("{} leads", leads.len());
        }
        LeadsCommands::Booked => {
            for lead in app.lifecycle.booked_leads().await? {
                println!(
                    "#{:<5} {:<30} {:<20} {}",
                    lead.leadId,
                    lead.full_name(),
                    lead.eventName,
                    lead.eventDateTime
                );
            }
        }
        LeadsCommands::Assigned => {
            for lead in app.lifecycle.assigned_leads().await? {
                println!("#{:<5} {:<30} {}", lead.id.unwrap_or(0), lead.full_name(), lead.status);
            }
        }
        LeadsCommands::Assign { leads, employees } => {
            app.lifecycle.assign(&leads, &employees).await?;
            println!("Leads assigned.");
        }
        LeadsCommands::BulkUpdate { file } => {
            let reader = File::open(&file)
                .map_err(|e| ServiceError::InvalidInput(format!("Cannot open {file}: {e}")))?;
            let mut session = LeadImportSession::new();
            let parsed = session.load(reader)?;
            println!("Parsed {parsed} rows.");
            let saved = session.save(&app.lifecycle).await?;
            println!("Updated {saved} leads.");
        }
    }
    Ok(())
}

async fn employees(app: &App, command: EmployeesCommands) -> Result<(), ServiceError> {
    match command {
        EmployeesCommands::List => {
            let staff = app.employee_service.list().await?;
            for employee in &staff {
                println!(
                    "#{:<5} {:<30} {:<25} {}",
                    employee.id.unwrap_or(0),
                    employee.full_name(),
                    employee.email,
                    employee.workLocation.as_deref().unwrap_or("-")
                );
            }
            println!("{} employees", staff.len());
        }
        EmployeesCommands::Show { id } => {
            let employee = app.employee_service.get(id).await?;
            println!("{:#?}", employee);
            if let Some(image) = &employee.profileImage {
                match image.decoded() {
                    Ok(bytes) => println!("Profile image: {} bytes ({})", bytes.len(), image.mediaType),
                    Err(_) => println!("Profile image: invalid payload"),
                }
            }
        }
        EmployeesCommands::Delete { ids } => {
            let outcome = app.employee_service.delete_many(&ids).await?;
            println!("Deleted {} of {}.", outcome.succeeded, outcome.attempted);
            for (id, reason) in &outcome.failures {
                println!("  #{id}: {reason}");
            }
        }
    }
    Ok(())
}

async fn attendance(app: &App, command: AttendanceCommands) -> Result<(), ServiceError> {
    match command {
        AttendanceCommands::PunchIn => {
            let record = app.attendance.punch_in().await?;
            println!("Punched in at {:?}.", record.punch_in);
        }
        AttendanceCommands::PunchOut => {
            let record = app.attendance.punch_out().await?;
            println!("Punched out. Today: {}", record.worked());
        }
        AttendanceCommands::History => {
            for record in app.attendance.history().await? {
                println!("{}  {:?}  {}", record.date, record.status, record.worked());
            }
        }
    }
    Ok(())
}

async fn requests(app: &App, command: RequestsCommands) -> Result<(), ServiceError> {
    match command {
        RequestsCommands::Mine => {
            for request in app.requests.list_mine().await? {
                print_request(&request);
            }
        }
        RequestsCommands::All => {
            for request in app.requests.list_all().await? {
                print_request(&request);
            }
        }
        RequestsCommands::Approve { id } => decide(app, id, RequestStatus::Approved).await?,
        RequestsCommands::Reject { id } => decide(app, id, RequestStatus::Rejected).await?,
    }
    Ok(())
}

async fn decide(app: &App, id: u64, decision: RequestStatus) -> Result<(), ServiceError> {
    let all = app.requests.list_all().await?;
    let request = all
        .iter()
        .find(|r| r.id == Some(id))
        .ok_or_else(|| ServiceError::InvalidInput(format!("No request with id {id}")))?;
    let updated = app.requests.decide(request, decision).await?;
    println!("Request {} is now {}.", id, updated.status.as_str());
    Ok(())
}

fn print_request(request: &studio_console::model::request::LeaveRequest) {
    println!(
        "#{:<5} {:?}  {:<10} {}",
        request.id.unwrap_or(0),
        request.kind,
        request.status.as_str(),
        request.reason.as_deref().unwrap_or("")
    );
}

async fn approvals(app: &App, command: ApprovalsCommands) -> Result<(), ServiceError> {
    match command {
        ApprovalsCommands::List => {
            for row in app.lifecycle.approvals().await? {
                println!(
                    "#{:<5} {:<30} {:<20} {}",
                    row.lead_id,
                    row.full_name,
                    row.event_name,
                    row.approval_status.as_str()
                );
            }
        }
        ApprovalsCommands::SendToClient { lead_id } => {
            let rows = app.lifecycle.approvals().await?;
            let row = rows
                .iter()
                .find(|r| r.lead_id == lead_id)
                .ok_or_else(|| {
                    ServiceError::InvalidInput(format!("No quotation for lead {lead_id}"))
                })?;
            app.lifecycle.send_to_client(row).await?;
            println!("Quotation sent to {}.", row.full_name);
        }
    }
    Ok(())
}

async fn invoices(app: &App, command: InvoicesCommands) -> Result<(), ServiceError> {
    match command {
        InvoicesCommands::List => {
            for row in app.lifecycle.invoice_rows().await? {
                println!(
                    "#{:<5} {:<30} {:<20} total {:.2}",
                    row.lead_id,
                    row.full_name,
                    row.event_name,
                    row.computed_total()
                );
            }
        }
        InvoicesCommands::SendApproval { lead_id } => {
            let rows = app.lifecycle.invoice_rows().await?;
            let row = rows
                .iter()
                .find(|r| r.lead_id == lead_id)
                .ok_or_else(|| {
                    ServiceError::InvalidInput(format!("No invoice row for lead {lead_id}"))
                })?;
            app.lifecycle.send_for_approval(row).await?;
            println!("Quotation sent for approval for {}.", row.full_name);
        }
    }
    Ok(())
}

use clap::{Parser, Subcommand};

/// Command-line surface of the operations console. Every subcommand maps
/// onto one user action of the corresponding screen.
#[derive(Parser)]
#[command(
    name = "studio-console",
    version = env!("CARGO_PKG_VERSION"),
    about = "Studio operations console: leads, bookings, quotations, roster, attendance and leave",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Store the logged-in identity used to stamp created records
    Login {
        /// Numeric employee/user id
        #[arg(long)]
        user_id: u64,

        /// Login name
        #[arg(long)]
        username: String,

        /// Display name shown in headers
        #[arg(long)]
        name: Option<String>,

        /// Role tag, e.g. admin
        #[arg(long)]
        role: Option<String>,
    },

    /// Clear the stored identity
    Logout,

    /// Show the current session
    Whoami,

    /// Lead screens
    Leads {
        #[command(subcommand)]
        command: LeadsCommands,
    },

    /// Employee roster
    Employees {
        #[command(subcommand)]
        command: EmployeesCommands,
    },

    /// Attendance tracker
    Attendance {
        #[command(subcommand)]
        command: AttendanceCommands,
    },

    /// Leave and permission requests
    Requests {
        #[command(subcommand)]
        command: RequestsCommands,
    },

    /// Quotations pending sign-off
    Approvals {
        #[command(subcommand)]
        command: ApprovalsCommands,
    },

    /// Invoice aggregation view
    Invoices {
        #[command(subcommand)]
        command: InvoicesCommands,
    },

    /// Settings catalog
    Settings {
        #[command(subcommand)]
        command: SettingsCommands,
    },
}

#[derive(Subcommand)]
pub enum SettingsCommands {
    /// List the add-on catalog
    Addons,

    /// List the package templates
    Packages,

    /// List the employee roles
    Roles,
}

#[derive(Subcommand)]
pub enum LeadsCommands {
    /// List all leads
    List,

    /// List booked leads with their event and payment
    Booked,

    /// List leads assigned to employees
    Assigned,

    /// Assign selected employees to selected leads
    Assign {
        /// Lead ids, comma separated
        #[arg(long, value_delimiter = ',')]
        leads: Vec<u64>,

        /// Employee ids, comma separated
        #[arg(long, value_delimiter = ',')]
        employees: Vec<u64>,
    },

    /// Parse a spreadsheet and submit the batch update
    BulkUpdate {
        /// Path to the exported CSV sheet
        file: String,
    },
}

#[derive(Subcommand)]
pub enum EmployeesCommands {
    /// List the roster
    List,

    /// Show one employee
    Show { id: u64 },

    /// Delete each selected row (no bulk endpoint; one call per id)
    Delete {
        /// Employee ids, comma separated
        #[arg(value_delimiter = ',')]
        ids: Vec<u64>,
    },
}

#[derive(Subcommand)]
pub enum AttendanceCommands {
    /// Punch in for the logged-in employee
    PunchIn,

    /// Punch out and show worked hours
    PunchOut,

    /// Show the attendance history
    History,
}

#[derive(Subcommand)]
pub enum RequestsCommands {
    /// List my requests
    Mine,

    /// List everyone's requests (approver view)
    All,

    /// Approve a pending request
    Approve { id: u64 },

    /// Reject a pending request
    Reject { id: u64 },
}

#[derive(Subcommand)]
pub enum ApprovalsCommands {
    /// List quotations pending approval
    List,

    /// Send an approved quotation to the client
    SendToClient { lead_id: u64 },
}

#[derive(Subcommand)]
pub enum InvoicesCommands {
    /// List the quotation/payment/package aggregation
    List,

    /// Send a quotation for approval
    SendApproval { lead_id: u64 },
}

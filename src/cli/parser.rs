use crate::core::onboard::OnboardingFlow;
use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rTimesheet
/// Weekly contractor timesheets and onboarding wizards backed by SQLite
#[derive(Parser)]
#[command(
    name = "rtimesheet",
    version = env!("CARGO_PKG_VERSION"),
    about = "Contractor timesheets and onboarding: log 12-hour time ranges into weekly sheets, review them, and collect onboarding data",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Log a time range into the weekly timesheet
    Add {
        /// Date worked (YYYY-MM-DD)
        date: String,

        #[arg(long, help = "Contractor id")]
        contractor: String,

        #[arg(long, help = "Contract id")]
        contract: String,

        #[arg(long = "from", value_name = "H:MM AM/PM", help = "Start time, e.g. \"9:00 AM\"")]
        from_time: String,

        #[arg(long = "to", value_name = "H:MM AM/PM", help = "End time, e.g. \"5:30 PM\"")]
        to_time: String,

        #[arg(long = "desc", help = "Task description")]
        description: Option<String>,
    },

    /// Preview the hours a time range would log, without saving
    Calc {
        #[arg(long = "from", value_name = "H:MM AM/PM")]
        from_time: String,

        #[arg(long = "to", value_name = "H:MM AM/PM")]
        to_time: String,

        #[arg(long, help = "Date (YYYY-MM-DD, default: today)")]
        date: Option<String>,
    },

    /// List weekly timesheets
    List {
        #[arg(long, help = "Filter by contractor id")]
        contractor: Option<String>,

        #[arg(long, help = "Filter by status (draft, submitted, approved, rejected)")]
        status: Option<String>,

        #[arg(long, short, help = "Filter by week start: year/month/day or a custom range")]
        period: Option<String>,
    },

    /// Show one timesheet with its daily breakdown
    Show { id: i64 },

    /// Submit a draft timesheet for approval
    Submit { id: i64 },

    /// Approve a submitted timesheet
    Approve {
        id: i64,

        #[arg(long = "by", help = "Approver id")]
        by: String,
    },

    /// Reject a submitted timesheet
    Reject {
        id: i64,

        #[arg(long)]
        reason: Option<String>,
    },

    /// Run an onboarding wizard
    Onboard {
        #[arg(long, value_enum, default_value = "contractor")]
        flow: OnboardingFlow,

        #[arg(
            long,
            value_name = "FILE",
            conflicts_with = "interactive",
            help = "YAML file with field: value answers"
        )]
        answers: Option<String>,

        #[arg(long, short, help = "Prompt for every field")]
        interactive: bool,

        #[arg(long, help = "List stored submissions for the flow")]
        list: bool,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Export timesheets
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter by week start: year/month/day or a custom range"
        )]
        range: Option<String>,

        #[arg(long, help = "Only export timesheets with this status")]
        status: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },
}

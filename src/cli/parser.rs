use crate::export::ExportFormat;
use clap::{Parser, Subcommand, ValueEnum};

/// Command-line interface definition for carelog
/// CLI application to log an infant's care events with SQLite
#[derive(Parser)]
#[command(
    name = "carelog",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple care logging CLI: record feeds, ostomy care and pumping, and follow the daily metrics",
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

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum TrendMetric {
    Calories,
    Pumped,
    MaternalPct,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Run configuration file migrations if needed")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
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

        #[arg(long = "check", help = "Check database integrity and quarantined rows")]
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

    /// Record a care event
    Add {
        /// Date of the event (YYYY-MM-DD)
        date: String,

        /// Time of the event (HH:MM)
        time: String,

        /// Category: milk-feed, breast-feed, stoma-bridge, bowel-movement,
        /// reservoir-empty, bag-change, pumping
        category: String,

        /// Volume in ml (milk-feed, stoma-bridge, pumping); accepts comma decimals
        #[arg(long = "ml", value_name = "VOLUME")]
        volume: Option<String>,

        /// Milk type (milk-feed): maternal, puramino, nutramigen
        #[arg(long = "milk", value_name = "TYPE")]
        milk: Option<String>,

        /// Duration in minutes (breast-feed)
        #[arg(long = "minutes", value_name = "MINUTES")]
        minutes: Option<String>,

        /// Whether a bowel movement occurred (bowel-movement): yes or no
        #[arg(long = "bm", value_name = "YES/NO")]
        bowel: Option<String>,
    },

    /// List recorded events
    List {
        #[arg(
            long,
            short,
            help = "Filter by year/month/day or a custom range (YYYY, YYYY-MM, YYYY-MM-DD, or start:end)"
        )]
        period: Option<String>,

        #[arg(long, help = "Filter by category")]
        category: Option<String>,
    },

    /// Show the metrics snapshot
    Status {
        #[arg(
            long = "today",
            help = "Use the current calendar day instead of the trailing 24 hours"
        )]
        today: bool,

        #[arg(
            long = "at",
            value_name = "DATETIME",
            help = "Compute the snapshot as of this instant (YYYY-MM-DD HH:MM)"
        )]
        at: Option<String>,
    },

    /// Show daily totals with a 7-day moving average
    Trends {
        #[arg(long, value_enum, help = "Show a single metric instead of all three")]
        metric: Option<TrendMetric>,

        #[arg(long, value_name = "N", help = "Show only the last N days")]
        days: Option<usize>,

        #[arg(
            long = "at",
            value_name = "DATETIME",
            help = "Compute the series as of this instant (YYYY-MM-DD HH:MM)"
        )]
        at: Option<String>,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,
    },

    /// Export the full dataset
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by year/month/day or a custom range"
        )]
        range: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },
}

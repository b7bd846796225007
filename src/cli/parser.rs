use clap::{Parser, Subcommand};

/// Command-line interface definition for dwriter
/// Event journal backed by SQLite
#[derive(Parser)]
#[command(
    name = "dwriter",
    version = env!("CARGO_PKG_VERSION"),
    about = "A small event journal: append timestamped notes to SQLite and browse them as a list",
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

    /// Administer the events table and the database file
    Db {
        #[arg(long = "create", help = "Create the events table if missing")]
        create: bool,

        #[arg(
            long = "create-async",
            help = "Create the events table on a background connection"
        )]
        create_async: bool,

        #[arg(long = "drop", help = "Drop the events table (deletes every event)")]
        drop: bool,

        #[arg(long = "query", help = "Dump every row of the events table")]
        query: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,
    },

    /// Print or manage the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Append a new event stamped with the current time
    Add {
        /// Text of the event
        text: String,

        /// Use this moment instead of now (YYYY-MM-DD HH:MM[:SS] or RFC 3339)
        #[arg(long = "at", value_name = "TIMESTAMP")]
        at: Option<String>,
    },

    /// List every event as "timestamp, text"
    List {
        #[arg(long = "json", help = "Print the rows as a JSON array")]
        json: bool,
    },

    /// Show the event at a list position (0-based)
    Show { position: usize },

    /// Print the number of stored events
    Count,
}

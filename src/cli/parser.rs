use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rTaskTracker
/// CLI application to time tasks with a local SQLite store
#[derive(Parser)]
#[command(
    name = "rtasktracker",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple task timer: define tasks, start/stop a timer and review time entries stored in SQLite",
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

    /// Manage tasks
    Task {
        #[command(subcommand)]
        action: TaskAction,
    },

    /// Start the timer for a task, or stop it if it is the running one
    Toggle {
        /// Task id or alias
        task: String,
    },

    /// Stop the running timer, if any
    Stop,

    /// Show the running timer
    Status,

    /// Review and correct time entries
    Entry {
        #[command(subcommand)]
        action: EntryAction,
    },

    /// Export tasks and time entries
    Export {
        #[arg(long, value_enum, default_value = "json")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f')]
        force: bool,
    },
}

#[derive(Subcommand)]
pub enum TaskAction {
    /// Add a new task
    Add {
        /// Display name
        name: String,

        /// Unique alias time entries are logged against
        alias: String,

        #[arg(long, help = "Optional grouping label")]
        folder: Option<String>,
    },

    /// Rename a task (time entries are not rewritten)
    Edit {
        /// Task id or alias
        task: String,

        #[arg(long, help = "New display name")]
        name: Option<String>,

        #[arg(long, help = "New alias")]
        alias: Option<String>,
    },

    /// Delete a task (its time entries are kept)
    Del {
        /// Task id or alias
        task: String,

        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// List tasks
    List,
}

#[derive(Subcommand)]
pub enum EntryAction {
    /// List time entries, newest first
    List {
        #[arg(long, help = "Only entries logged against this alias")]
        task: Option<String>,
    },

    /// Correct a finished time entry
    Edit {
        /// Time entry id
        id: String,

        #[arg(long, help = "Reassign to another task (id or alias)")]
        task: Option<String>,

        #[arg(long, help = "New start (RFC 3339 or 'YYYY-MM-DD HH:MM[:SS]' local)")]
        start: Option<String>,

        #[arg(long, help = "New end (RFC 3339 or 'YYYY-MM-DD HH:MM[:SS]' local)")]
        end: Option<String>,
    },

    /// Delete a finished time entry
    Del {
        /// Time entry id
        id: String,

        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },
}

use clap::{Parser, Subcommand};

/// Command-line interface definition for shiftlog
/// CLI application standing in for the chat transport
#[derive(Parser)]
#[command(
    name = "shiftlog",
    version = env!("CARGO_PKG_VERSION"),
    about = "A chat-style attendance tracker: register your name, clock in, clock out",
    long_about = None
)]
pub struct Cli {
    /// Override the directory holding users.csv and shifts.csv
    #[arg(global = true, long = "data-dir")]
    pub data_dir: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and the data files
    Init,

    /// Print the welcome text with the available commands
    Start,

    /// Register your display name (asked for on stdin, /cancel aborts)
    Register {
        #[arg(long = "user", help = "Opaque user identifier")]
        user: String,
    },

    /// Record an arrival (opens a new shift)
    ClockIn {
        #[arg(long = "user", help = "Opaque user identifier")]
        user: String,

        /// Pretend "now" is this moment (HH:MM DD/MM/YYYY)
        #[arg(long = "at", hide = true)]
        at: Option<String>,
    },

    /// Record a departure (closes the latest open shift)
    ClockOut {
        #[arg(long = "user", help = "Opaque user identifier")]
        user: String,

        /// Pretend "now" is this moment (HH:MM DD/MM/YYYY)
        #[arg(long = "at", hide = true)]
        at: Option<String>,
    },

    /// Abort an in-progress registration dialogue
    Cancel {
        #[arg(long = "user", help = "Opaque user identifier")]
        user: String,
    },
}

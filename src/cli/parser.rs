use clap::{Parser, Subcommand};

/// Command-line interface definition for rmaplog
/// Record running and cycling sessions on a map, stored in SQLite
#[derive(Parser)]
#[command(
    name = "rmaplog",
    version = env!("CARGO_PKG_VERSION"),
    about = "Record running and cycling sessions at map locations, stored locally in SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Current position as "lat,lng"; overrides `home` from the configuration
    #[arg(global = true, long = "here", allow_hyphen_values = true)]
    pub here: Option<String>,

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
        /// Print the current configuration to stdout
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        /// Edit the configuration file with your preferred editor
        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        /// Specify the editor to use (overrides $EDITOR/$VISUAL).
        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Record a session at a location
    Add {
        /// Session type: running (cadence) or cycling (elevation)
        #[arg(long = "type", default_value = "running")]
        kind: String,

        /// Latitude of the picked location
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,

        /// Longitude of the picked location
        #[arg(long, allow_negative_numbers = true)]
        lng: f64,

        /// Distance in km
        #[arg(long, allow_hyphen_values = true)]
        distance: String,

        /// Duration in minutes
        #[arg(long, allow_hyphen_values = true)]
        duration: String,

        /// Cadence in steps per minute (running)
        #[arg(long, allow_hyphen_values = true)]
        cadence: Option<String>,

        /// Elevation gain in meters, may be negative (cycling)
        #[arg(long, allow_hyphen_values = true)]
        elevation: Option<String>,
    },

    /// Show every recorded session and the map markers
    List,

    /// Center the map on a session
    Show {
        /// Session id as printed by `list`
        id: String,
    },

    /// Delete ALL recorded sessions
    Reset {
        /// Do not ask for confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },
}

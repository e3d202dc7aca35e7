use clap::{Parser, Subcommand};
use std::path::PathBuf;
use warden::api::RECENT_ENTRIES;
use warden::config::DEFAULT_DATA_DIR;

#[derive(Parser, Debug)]
#[command(name = "warden", version)]
#[command(
    about = "Interactive calculator with persistent settings and history",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding settings.ini and, by default, the history file
    #[arg(
        long,
        global = true,
        env = "WARDEN_DATA_DIR",
        default_value = DEFAULT_DATA_DIR,
        help_heading = "Options"
    )]
    pub data_dir: PathBuf,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the interactive prompt (default)
    Shell,

    /// Evaluate a single action and record it (e.g. `warden eval 5 + 3`)
    #[command(alias = "e")]
    Eval {
        /// The action, as typed at the prompt
        #[arg(required = true, num_args = 1.., allow_hyphen_values = true, trailing_var_arg = true)]
        action: Vec<String>,
    },

    /// Show the most recent history entries
    #[command(alias = "h")]
    History {
        /// Number of entries to show
        #[arg(short = 'n', long, default_value_t = RECENT_ENTRIES)]
        count: usize,
    },

    /// Sum the results of the most recent history entries
    Sum {
        /// Number of entries to sum
        #[arg(short = 'n', long, default_value_t = RECENT_ENTRIES)]
        count: usize,
    },

    /// Erase all history
    Clear,

    /// Show configuration
    Config {
        /// Option name (e.g. savepath); all options when omitted
        key: Option<String>,
    },
}

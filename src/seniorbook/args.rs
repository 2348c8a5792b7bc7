use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "seniorbook")]
#[command(about = "Contact directory for seniors, stored as JSON and text", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding the data files (defaults to $SENIORBOOK_HOME, then the platform data dir)
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load the directory and report what was found (default)
    Open,

    /// Replace the directory with the seniors in a JSON file
    Import {
        /// JSON file to read
        path: PathBuf,
    },

    /// Write the directory to a JSON file
    Export {
        /// JSON file to write
        path: PathBuf,
    },

    /// Clean both data files by loading and saving them again
    Doctor,

    /// Show where data and preferences are stored
    Paths,
}

use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use seniorbook::api::SeniorApi;
use seniorbook::commands::{CmdMessage, CmdResult, MessageLevel};
use seniorbook::diagnostics::TracingSink;
use seniorbook::error::{Result, StoreError};
use std::path::PathBuf;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

mod args;
use args::{Cli, Commands};

const HOME_ENV: &str = "SENIORBOOK_HOME";
const LOG_ENV: &str = "SENIORBOOK_LOG";

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let data_dir = resolve_data_dir(&cli)?;
    tracing::debug!(data_dir = %data_dir.display(), "opening store");
    let api = SeniorApi::open(&data_dir, TracingSink::shared())?;

    let result = match cli.command {
        Some(Commands::Open) | None => api.open_book()?,
        Some(Commands::Import { path }) => api.import_book(&path)?,
        Some(Commands::Export { path }) => api.export_book(&path)?,
        Some(Commands::Doctor) => api.doctor()?,
        Some(Commands::Paths) => api.paths()?,
    };

    print_result(&result);
    Ok(())
}

fn init_tracing(verbose: bool) {
    let default = if verbose {
        LevelFilter::INFO
    } else {
        LevelFilter::WARN
    };
    let filter = EnvFilter::builder()
        .with_default_directive(default.into())
        .with_env_var(LOG_ENV)
        .from_env_lossy();
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn resolve_data_dir(cli: &Cli) -> Result<PathBuf> {
    if let Some(dir) = &cli.data_dir {
        return Ok(dir.clone());
    }
    if let Some(dir) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "seniorbook", "seniorbook")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| {
            StoreError::Config(format!(
                "Could not determine a data directory; pass --data-dir or set {}",
                HOME_ENV
            ))
        })
}

fn print_result(result: &CmdResult) {
    for (label, path) in &result.paths {
        println!("{:<12} {}", format!("{}:", label).bold(), path.display());
    }
    print_messages(&result.messages);
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use sfroster::{commands, config, tui};

// Default Configuration Constants
/// Default log level when not specified
const DEFAULT_LOG_LEVEL: &str = "info";

/// Default log file path (no logging to file)
const DEFAULT_LOG_FILE: &str = "/dev/null";

#[derive(Parser)]
#[command(name = "sfroster")]
#[command(
    about = "Guild roster browser and exporter",
    long_about = "Guild roster browser and exporter\n\nIf no command is specified, the program starts in interactive mode."
)]
struct Cli {
    /// Set log level (trace, debug, info, warn, error)
    #[arg(short = 'L', long, global = true, default_value = DEFAULT_LOG_LEVEL)]
    log_level: String,

    /// Log file path (default: /dev/null for no logging)
    #[arg(short = 'F', long, global = true, default_value = DEFAULT_LOG_FILE)]
    log_file: String,

    /// Directory holding roster JSON files (overrides config)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Use built-in sample rosters instead of the data directory
    #[arg(long, global = true)]
    mock: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Export a roster as one or more PNG images of up to 50 players
    ExportImage {
        /// Roster to export
        roster: String,

        /// Earlier roster to show deltas against
        #[arg(short, long)]
        compare: Option<String>,

        /// Only export guild members
        #[arg(short, long)]
        members: bool,

        /// Destination file (prompted for when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Export a roster as semicolon-delimited CSV
    ExportCsv {
        /// Roster to export
        roster: String,

        /// Only export guild members
        #[arg(short, long)]
        members: bool,

        /// Destination file (prompted for when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print the stat sheet of one or all players of a roster
    Show {
        /// Roster to read
        roster: String,

        /// Exact player name; all players when omitted
        #[arg(short, long)]
        player: Option<String>,

        /// Use ASCII instead of unicode box characters
        #[arg(long)]
        ascii: bool,
    },
    /// List stored rosters
    List,
    /// Write sample rosters to the data directory
    Demo {
        /// Target directory (defaults to the data directory)
        #[arg(short, long)]
        dir: Option<PathBuf>,
    },
    /// Display current configuration
    Config,
}

fn init_logging(log_level: &str, log_file: &str) {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };
    let file = match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
    {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Failed to open log file {}: {}", log_file, e);
            return;
        }
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
    }
}

/// Handle the config command - display current configuration
fn handle_config_command() {
    let cfg = config::read();

    let (path_str, exists) = match config::get_config_path() {
        Some(path) => {
            let exists = path.exists();
            (path.display().to_string(), exists)
        }
        None => ("Unable to determine config path".to_string(), false),
    };

    println!("Configuration File: {} (Exists: {})", path_str, if exists { "yes" } else { "no" });
    println!();
    println!("Current Configuration:");
    println!("=====================");
    println!("log_level: {}", cfg.log_level);
    println!("log_file: {}", cfg.log_file);
    match cfg.data_dir() {
        Some(dir) => println!("data_dir: {}", dir.display()),
        None => println!("data_dir: (unavailable)"),
    }
    println!("highlight_all: {}", cfg.highlight_all);
    println!();
    println!("[thresholds]");
    let t = &cfg.thresholds;
    for (name, pair) in [("mount", t.mount), ("pet", t.pet), ("knights", t.knights), ("book", t.book)] {
        println!("{}: low {} / high {}", name, pair.low, pair.high);
    }
    println!();
    println!("[theme]");
    println!("selection_fg: {:?}", cfg.theme.selection_fg);
    println!("unfocused_selection_fg: {:?}{}",
        cfg.theme.unfocused_selection_fg(),
        if cfg.theme.unfocused_selection_fg.is_none() { " (auto: 50% darker)" } else { "" }
    );
    println!("low_fg: {:?}", cfg.theme.low_fg);
    println!("mid_fg: {:?}", cfg.theme.mid_fg);
    println!("high_fg: {:?}", cfg.theme.high_fg);
}

/// Resolve log configuration from CLI args and config file
/// CLI arguments take precedence over config file
fn resolve_log_config<'a>(cli: &'a Cli, config: &'a config::Config) -> (&'a str, &'a str) {
    let log_level = if cli.log_level != DEFAULT_LOG_LEVEL {
        cli.log_level.as_str()
    } else {
        config.log_level.as_str()
    };

    let log_file = if cli.log_file != DEFAULT_LOG_FILE {
        cli.log_file.as_str()
    } else {
        config.log_file.as_str()
    };

    (log_level, log_file)
}

/// Execute a CLI command by routing it to the appropriate command handler
fn execute_command(cli: Cli, config: config::Config, command: Commands) -> anyhow::Result<()> {
    if let Commands::Demo { dir } = command {
        let dir = dir
            .or(cli.data_dir)
            .or_else(|| config.data_dir())
            .context("Unable to determine the data directory")?;
        return commands::demo::run(dir);
    }

    let source = commands::open_source(&config, cli.data_dir, cli.mock)?;
    match command {
        Commands::Config | Commands::Demo { .. } => {
            unreachable!("Config and Demo are handled before opening a roster source")
        }
        Commands::ExportImage { roster, compare, members, output } => {
            commands::export::run_image(source.as_ref(), &config, &roster, compare.as_deref(), members, output)
        }
        Commands::ExportCsv { roster, members, output } => {
            commands::export::run_csv(source.as_ref(), &roster, members, output)
        }
        Commands::Show { roster, player, ascii } => {
            commands::show::run(source.as_ref(), &config, &roster, player, !ascii)
        }
        Commands::List => commands::list::run(source.as_ref()),
    }
}

fn main() {
    let config = config::read();
    let mut cli = Cli::parse();

    // Resolve and initialize logging
    let (log_level, log_file) = resolve_log_config(&cli, &config);
    if log_file != DEFAULT_LOG_FILE {
        init_logging(log_level, log_file);
    }

    // If no subcommand, run TUI
    let Some(command) = cli.command.take() else {
        let result = commands::open_source(&config, cli.data_dir.clone(), cli.mock)
            .and_then(|source| tui::run(source.as_ref(), config).context("Terminal UI failed"));
        if let Err(e) = result {
            eprintln!("Error running TUI: {:#}", e);
            std::process::exit(1);
        }
        return;
    };

    // Handle Config command separately (doesn't need a roster source)
    if let Commands::Config = command {
        handle_config_command();
        return;
    }

    if let Err(e) = execute_command(cli, config, command) {
        eprintln!("Error: {:#}", e);
        tracing::error!("Command failed: {:#}", e);
        std::process::exit(1);
    }
}

// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result, anyhow};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, warn};
use std::fs::File;
use std::io::BufReader;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::app_config::Config;
use app_controller::Controller;

mod annotator;
mod app_config;
mod app_controller;
mod corpus_processor;
mod errors;
mod file_utils;
mod red_letter;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Add red letter markup to Bible corpus files (default command)
    #[command(alias = "annotate")]
    Annotate(AnnotateArgs),

    /// Generate shell completions for redletter
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct AnnotateArgs {
    /// Bible corpus JSON file to annotate
    #[arg(value_name = "INPUT_PATH")]
    input_path: Option<PathBuf>,

    /// Process all corpus files in the configured corpus directory
    #[arg(short, long)]
    all: bool,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// redletter - red letter markup for Bible JSON corpora
///
/// Wraps the words of Jesus in [r]...[/r] markers across a per-book,
/// per-chapter, per-verse JSON corpus, using the verse ranges of
/// traditional red letter Bible editions.
#[derive(Parser, Debug)]
#[command(name = "redletter")]
#[command(version = "1.0.0")]
#[command(about = "Red letter markup tool for Bible JSON corpora")]
#[command(long_about = "redletter marks the words of Jesus in Bible JSON files with [r]...[/r] markers.

EXAMPLES:
    redletter kjv.json                      # Annotate a single corpus file
    redletter --all                         # Annotate every file in the corpus directory
    redletter --log-level debug kjv.json    # Annotate with debug logging
    redletter completions bash > redletter.bash  # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a different
    config file with --config. If the config file doesn't exist, a default one
    will be created automatically.

BACKUPS:
    Before the first annotated write, the original file is renamed to
    <file>.backup. An existing backup is never overwritten, so repeated runs
    keep the original pre-annotation content.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Bible corpus JSON file to annotate
    #[arg(value_name = "INPUT_PATH")]
    input_path: Option<PathBuf>,

    /// Process all corpus files in the configured corpus directory
    #[arg(short, long)]
    all: bool,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color code for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "1;31",
            Level::Warn => "1;33",
            Level::Info => "1;32",
            Level::Debug => "1;36",
            Level::Trace => "1;35",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S%.3f");
            let color = Self::color_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(stderr, "\x1B[{}m{} {}\x1B[0m", color, now, record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> Result<()> {
    // Initialize the logger once with info level by default
    // We'll update the level after loading the config if needed
    CustomLogger::init(LevelFilter::Info)?;

    // Parse command line arguments using clap
    let cli = CommandLineOptions::parse();

    // Handle subcommands
    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "redletter", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Annotate(args)) => run_annotate(args),
        None => {
            // Default behavior - use top-level args for backwards compatibility
            let annotate_args = AnnotateArgs {
                input_path: cli.input_path,
                all: cli.all,
                config_path: cli.config_path,
                log_level: cli.log_level,
            };
            run_annotate(annotate_args)
        }
    }
}

fn run_annotate(options: AnnotateArgs) -> Result<()> {
    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = &options.log_level {
        let config_log_level: app_config::LogLevel = cmd_log_level.clone().into();
        log::set_max_level(config_log_level.to_level_filter());
    }

    // Load or create configuration
    let config_path = &options.config_path;
    let config = if Path::new(config_path).exists() {
        // Load existing configuration
        let file = File::open(config_path)
            .context(format!("Failed to open config file: {}", config_path))?;

        let reader = BufReader::new(file);
        let mut config: Config = serde_json::from_reader(reader)
            .context(format!("Failed to parse config file: {}", config_path))?;

        // Update log level in config if specified via command line
        if let Some(log_level) = &options.log_level {
            config.log_level = log_level.clone().into();
        }

        config
    } else {
        // Create default configuration if not exists
        warn!("Config file not found at '{}', creating default config.", config_path);

        let mut config = Config::default();

        // Apply command line log level to default config if specified
        if let Some(log_level) = &options.log_level {
            config.log_level = log_level.clone().into();
        }

        // Save default config
        let config_json = serde_json::to_string_pretty(&config)
            .context("Failed to serialize default config to JSON")?;

        std::fs::write(config_path, config_json)
            .context(format!("Failed to write default config to file: {}", config_path))?;

        config
    };

    // Validate the configuration after loading and overriding
    config.validate().context("Configuration validation failed")?;

    // If log level was not set via command line, update it from config now
    if options.log_level.is_none() {
        log::set_max_level(config.log_level.to_level_filter());
    }

    // Create controller
    let controller = Controller::with_config(config)?;

    if options.all {
        // Process every corpus file in the configured directory
        controller.run_all()?;
        return Ok(());
    }

    match options.input_path {
        Some(input_path) => {
            if !input_path.exists() {
                return Err(anyhow!("Input path does not exist: {:?}", input_path));
            }
            controller.run(input_path)?;
            Ok(())
        }
        None => {
            // No input and no --all: print usage and exit non-zero
            let mut cmd = CommandLineOptions::command();
            cmd.print_help()?;
            std::process::exit(2);
        }
    }
}

use std::process::ExitCode;
use clap::Parser;
use dotenv::dotenv;
use gpa_calc::cli::Cli;
use gpa_calc::config::Config;
use log::error;
use simplelog::{ColorChoice, Config as LogConfig, LevelFilter, TermLogger, TerminalMode};

fn main() -> ExitCode {
    // Loads environment variables from a `.env` file, if present.
    dotenv().ok();

    let cli = Cli::parse();
    let config = Config::from_env();

    // Logs go to stderr so reports and JSON on stdout stay clean.
    let level = config.as_ref().map_or(LevelFilter::Info, |c| c.log_level);
    if let Err(e) = TermLogger::init(level, LogConfig::default(), TerminalMode::Stderr, ColorChoice::Auto) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    let config = match config {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {:#}", e);
            return ExitCode::FAILURE;
        }
    };

    match cli.run(config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

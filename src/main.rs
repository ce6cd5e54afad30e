use std::path::PathBuf;

use clap::Parser;
use sprig::cli::commands::Cli;
use sprig::cli::handlers;
use sprig::io::config_io;
use sprig::logging;

fn main() {
    let cli = Cli::parse();

    let config = match config_io::load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    let level = config.log.level.as_deref();
    let log_file = cli
        .log_file
        .clone()
        .or_else(|| config.log.file.as_ref().map(PathBuf::from));
    let installed = match log_file {
        Some(path) => logging::init_file_logging(&path, level),
        // The TUI owns the terminal, so it only logs when given a file
        None if cli.command.is_none() => Ok(()),
        None => logging::init_stderr_logging(level),
    };
    if let Err(e) = installed {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }

    if let Err(e) = handlers::dispatch(cli, &config) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

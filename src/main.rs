//! Sentinel CLI entry point.

use clap::Parser;

use sentinel::cli::{commands, handle_error, Cli, Commands};
use sentinel::infrastructure::config::ConfigLoader;
use sentinel::infrastructure::logging::LoggerImpl;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let loaded = match cli.config.as_deref() {
        Some(path) => ConfigLoader::load_from_file(path),
        None => ConfigLoader::load(),
    };
    let config = match loaded {
        Ok(config) => config,
        Err(err) => handle_error(err, cli.json),
    };

    let logger = match LoggerImpl::init(&config.logging) {
        Ok(logger) => Some(logger),
        Err(err) => {
            eprintln!("warning: logging disabled: {err:#}");
            None
        }
    };

    let result = match cli.command {
        Commands::Analyze(args) => commands::analyze::execute(args, &config, cli.json).await,
        Commands::Modules => commands::modules::execute(cli.json),
        Commands::About(args) => commands::about::execute(&args, &config, cli.json),
        Commands::Config(command) => commands::config::execute(command, &config, cli.json),
    };

    if let Err(err) = result {
        drop(logger);
        handle_error(err, cli.json);
    }
}

use clap::Parser;
use form3_accounts::cli::dispatcher::Dispatcher;
use form3_accounts::cli::main_types::Cli;
use form3_accounts::storage::config::Config;
use form3_accounts::utils::logging::{log_error, log_hint};
use std::path::PathBuf;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Load Config
    let config_path = cli
        .config_dir
        .as_ref()
        .map(|dir| PathBuf::from(dir).join("config.toml"));

    let config = match Config::load(config_path.clone()) {
        Ok(config) => config,
        Err(err) => {
            log_error(&format!("loading config: {}", err));
            std::process::exit(1);
        }
    };

    if cli.verbose {
        eprintln!("Verbose mode is enabled");

        if let Some(config_dir) = &cli.config_dir {
            eprintln!("Using config directory: {}", config_dir);
        }
    }

    let dispatcher = Dispatcher::new(config, config_path, cli.url, cli.verbose);

    if let Err(e) = dispatcher.dispatch(cli.command).await {
        log_error(&format!("[{}] {}", e.severity().label(), e));
        if let Some(hint) = e.troubleshooting_hint() {
            log_hint(&hint);
        }
        std::process::exit(1);
    }

    Ok(())
}

use crate::cli::command_handlers::{AccountHandler, ConfigHandler};
use crate::cli::main_types::Commands;
use crate::core::form3::Form3;
use crate::error::AppError;
use crate::storage::config::Config;
use crate::utils::logging::print_verbose;
use crate::utils::validation::validate_url;
use std::path::PathBuf;

pub struct Dispatcher {
    config: Config,
    config_path: Option<PathBuf>,
    url: Option<String>,
    verbose: bool,
}

impl Dispatcher {
    fn log_verbose(&self, msg: &str) {
        print_verbose(self.verbose, msg);
    }

    pub fn new(
        config: Config,
        config_path: Option<PathBuf>,
        url: Option<String>,
        verbose: bool,
    ) -> Self {
        Self {
            config,
            config_path,
            url,
            verbose,
        }
    }

    fn create_client(&self) -> Result<Form3, AppError> {
        if let Some(url) = self.url.as_deref().filter(|url| !url.trim().is_empty()) {
            validate_url(url)?;
        }

        let client = Form3::new(self.config.to_client_config(self.url.as_deref()));
        self.log_verbose(&format!("Using account API at {}", client.base_url()));
        Ok(client)
    }

    pub async fn dispatch(mut self, command: Commands) -> Result<(), AppError> {
        match command {
            Commands::Accounts { command } => {
                let client = self.create_client()?;
                AccountHandler::new()
                    .handle(command, &client.accounts, self.verbose)
                    .await
            }
            Commands::Config { command } => {
                let effective_url = self.create_client()?.base_url().to_string();
                ConfigHandler::new().handle(
                    command,
                    &mut self.config,
                    self.config_path.clone(),
                    &effective_url,
                    self.verbose,
                )
            }
        }
    }
}

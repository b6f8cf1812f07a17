use crate::api::accounts::Accounts;
use crate::api::models::{AccountAttributes, AccountListParams};
use crate::cli::main_types::{AccountCommands, ConfigCommands, OutputFormat};
use crate::display::TableDisplay;
use crate::error::{AppError, CliError};
use crate::storage::config::Config;
use crate::utils::logging::print_verbose;
use crate::utils::validation::{validate_timeout_seconds, validate_url};
use serde::Serialize;
use std::path::PathBuf;

fn to_json<T: Serialize>(value: &T) -> Result<String, AppError> {
    serde_json::to_string_pretty(value).map_err(|e| AppError::Cli(CliError::Output(e.to_string())))
}

#[derive(Default)]
pub struct AccountHandler;

impl AccountHandler {
    pub fn new() -> Self {
        Self
    }

    pub async fn handle(
        &self,
        command: AccountCommands,
        accounts: &Accounts,
        verbose: bool,
    ) -> Result<(), AppError> {
        let output = self.render(command, accounts, verbose).await?;
        println!("{}", output);
        Ok(())
    }

    /// Run `command` and return what should be printed.
    pub async fn render(
        &self,
        command: AccountCommands,
        accounts: &Accounts,
        verbose: bool,
    ) -> Result<String, AppError> {
        match command {
            AccountCommands::Create {
                organisation_id,
                attributes,
                format,
            } => {
                print_verbose(
                    verbose,
                    &format!("Creating account for organisation {}", organisation_id),
                );
                let attributes = AccountAttributes::from(attributes);
                let account = accounts.create(&organisation_id, &attributes).await?;
                match format {
                    OutputFormat::Json => to_json(&account),
                    OutputFormat::Table => Ok(format!(
                        "Created account {}\n{}",
                        account.id,
                        TableDisplay::new().render_account_detail(&account)
                    )),
                }
            }
            AccountCommands::List {
                page_number,
                page_size,
                format,
            } => {
                print_verbose(
                    verbose,
                    &format!("Listing accounts page {} (size {})", page_number, page_size),
                );
                let params = AccountListParams::page(page_number, page_size);
                let page = accounts.list_page(&params).await?;
                match format {
                    OutputFormat::Json => to_json(&page.accounts),
                    OutputFormat::Table => {
                        let mut output = TableDisplay::new().render_account_list(&page.accounts);
                        if let Some(next) = page.links.as_ref().and_then(|l| l.next.as_ref()) {
                            output.push_str(&format!("\nNext page: {}", next));
                        }
                        Ok(output)
                    }
                }
            }
            AccountCommands::Fetch { account_id, format } => {
                print_verbose(verbose, &format!("Fetching account {}", account_id));
                let account = accounts.fetch(&account_id).await?;
                match format {
                    OutputFormat::Json => to_json(&account),
                    OutputFormat::Table => Ok(TableDisplay::new().render_account_detail(&account)),
                }
            }
            AccountCommands::Delete {
                account_id,
                version,
            } => {
                print_verbose(
                    verbose,
                    &format!("Deleting account {} at version {}", account_id, version),
                );
                accounts.delete(&account_id, version).await?;
                Ok(format!("Deleted account {}", account_id))
            }
        }
    }
}

#[derive(Default)]
pub struct ConfigHandler;

impl ConfigHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(
        &self,
        command: ConfigCommands,
        config: &mut Config,
        config_path: Option<PathBuf>,
        effective_url: &str,
        verbose: bool,
    ) -> Result<(), AppError> {
        match command {
            ConfigCommands::Show => {
                print_verbose(verbose, "Showing current configuration");

                println!("Current Configuration:");
                println!("=====================");
                println!(
                    "URL (stored): {}",
                    config.url.as_deref().unwrap_or("not set")
                );
                println!("URL (effective): {}", effective_url);
                match config.timeout_seconds {
                    Some(seconds) => println!("Timeout: {}s", seconds),
                    None => println!("Timeout: not set"),
                }
                Ok(())
            }
            ConfigCommands::Set {
                url,
                timeout_seconds,
            } => {
                let mut updated_fields = Vec::new();

                if let Some(url_value) = url {
                    validate_url(&url_value)?;
                    updated_fields.push(format!("URL to: {}", url_value));
                    config.set_url(url_value);
                }

                if let Some(seconds) = timeout_seconds {
                    validate_timeout_seconds(seconds)?;
                    config.set_timeout_seconds(seconds);
                    updated_fields.push(format!("timeout to: {}s", seconds));
                }

                if updated_fields.is_empty() {
                    return Err(AppError::Cli(CliError::InvalidArguments(
                        "No configuration values provided. Use --url and/or --timeout-seconds"
                            .to_string(),
                    )));
                }

                print_verbose(verbose, &format!("Saving configuration to {:?}", config_path));
                config.save(config_path)?;
                println!("Set {}", updated_fields.join(", "));
                println!("Configuration saved successfully.");
                Ok(())
            }
        }
    }
}

use crate::api::models::AccountAttributes;
use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "form3-accounts")]
#[command(about = "Command line interface for the Form3 accounts API")]
#[command(version)]
#[command(after_help = "Examples:
  form3-accounts accounts list                          # List accounts (server default page)
  form3-accounts accounts list --page-number 2 --page-size 10
  form3-accounts accounts fetch <ACCOUNT_ID>            # Show one account
  form3-accounts accounts fetch <ACCOUNT_ID> --format json
  form3-accounts accounts delete <ACCOUNT_ID> --version 0
  form3-accounts --url http://localhost:8080/v1 accounts list
  form3-accounts config set --url http://localhost:8080/v1

Environment Variables:
  FORM3_API_URL   Account API base URL")]
pub struct Cli {
    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Custom configuration directory path
    #[arg(long, global = true)]
    pub config_dir: Option<String>,

    /// Account API base URL (overrides the configuration file)
    #[arg(long, env = "FORM3_API_URL")]
    pub url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage accounts (create, list, fetch, delete)
    Accounts {
        #[command(subcommand)]
        command: AccountCommands,
    },
    /// Configuration management (show, set)
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum AccountCommands {
    /// Create an account
    Create {
        /// Owning organisation id
        #[arg(long)]
        organisation_id: String,
        #[command(flatten)]
        attributes: AttributeArgs,
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
    /// List one page of accounts
    List {
        /// Page number (0 lets the server choose)
        #[arg(long, default_value_t = 0)]
        page_number: u32,
        /// Page size (0 lets the server choose)
        #[arg(long, default_value_t = 0)]
        page_size: u32,
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
    /// Show a single account
    Fetch {
        account_id: String,
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
    /// Delete an account at a given version
    Delete {
        account_id: String,
        /// Current version of the account
        #[arg(long)]
        version: i64,
    },
}

#[derive(Args, Debug, Default)]
pub struct AttributeArgs {
    /// ISO 3166-1 country code, e.g. GB
    #[arg(long)]
    pub country: String,
    #[arg(long, default_value = "")]
    pub base_currency: String,
    #[arg(long, default_value = "")]
    pub bank_id: String,
    #[arg(long, default_value = "")]
    pub bank_id_code: String,
    #[arg(long, default_value = "")]
    pub account_number: String,
    #[arg(long, default_value = "")]
    pub bic: String,
    #[arg(long, default_value = "")]
    pub iban: String,
    #[arg(long, default_value = "")]
    pub customer_id: String,
    #[arg(long, default_value = "")]
    pub title: String,
    #[arg(long, default_value = "")]
    pub first_name: String,
    #[arg(long, default_value = "")]
    pub bank_account_name: String,
    /// Alternative account holder name (repeatable)
    #[arg(long = "alternative-name")]
    pub alternative_bank_account_names: Vec<String>,
    #[arg(long, default_value = "")]
    pub account_classification: String,
    #[arg(long)]
    pub joint_account: bool,
    #[arg(long)]
    pub account_matching_opt_out: bool,
    #[arg(long, default_value = "")]
    pub secondary_identification: String,
}

impl From<AttributeArgs> for AccountAttributes {
    fn from(args: AttributeArgs) -> Self {
        AccountAttributes {
            country: args.country,
            base_currency: args.base_currency,
            bank_id: args.bank_id,
            bank_id_code: args.bank_id_code,
            account_number: args.account_number,
            bic: args.bic,
            iban: args.iban,
            customer_id: args.customer_id,
            title: args.title,
            first_name: args.first_name,
            bank_account_name: args.bank_account_name,
            alternative_bank_account_names: args.alternative_bank_account_names,
            account_classification: args.account_classification,
            joint_account: args.joint_account,
            account_matching_opt_out: args.account_matching_opt_out,
            secondary_identification: args.secondary_identification,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show the current configuration
    Show,
    /// Set configuration values
    #[command(after_help = "Examples:
  form3-accounts config set --url http://localhost:8080/v1
  form3-accounts config set --timeout-seconds 10")]
    Set {
        /// Account API base URL
        #[arg(long)]
        url: Option<String>,
        /// Request timeout in seconds
        #[arg(long)]
        timeout_seconds: Option<u64>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
}

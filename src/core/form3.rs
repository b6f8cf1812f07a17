use crate::api::accounts::{Accounts, IdGenerator};
use crate::api::client::ApiClient;
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;

/// Base URL of a locally running account API.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/v1";

/// Construction-time options for [`Form3`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Form3Config {
    /// API base URL. Empty selects [`DEFAULT_BASE_URL`].
    pub url: String,
    /// Upper bound for every request issued through the client.
    pub timeout: Option<Duration>,
}

impl Form3Config {
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    /// The configured URL, or the local default when none was given.
    pub fn resolved_url(&self) -> &str {
        let url = self.url.trim();
        if url.is_empty() { DEFAULT_BASE_URL } else { url }
    }
}

/// Entry point of the library. Each instance owns its base URL, so
/// differently configured clients can be used side by side.
#[derive(Debug, Clone)]
pub struct Form3 {
    pub accounts: Accounts,
}

impl Form3 {
    pub fn new(config: Form3Config) -> Self {
        Self::from_api_client(ApiClient::new(config.resolved_url(), config.timeout))
    }

    /// Use a caller-provided reqwest client (proxies, TLS roots, ...).
    pub fn with_http_client(config: Form3Config, client: Client) -> Self {
        Self::from_api_client(ApiClient::with_http_client(
            client,
            config.resolved_url(),
            config.timeout,
        ))
    }

    /// Replace the source of ids used by `accounts.create`.
    pub fn with_id_generator(mut self, id_generator: Arc<dyn IdGenerator>) -> Self {
        self.accounts.set_id_generator(id_generator);
        self
    }

    pub fn base_url(&self) -> &str {
        self.accounts.base_url()
    }

    fn from_api_client(client: ApiClient) -> Self {
        Self {
            accounts: Accounts::new(client),
        }
    }
}

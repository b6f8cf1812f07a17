use crate::error::ApiError;
use crate::utils::error_helpers::handle_response_error;
use reqwest::header::{ACCEPT, USER_AGENT};
use reqwest::{Client, Method, RequestBuilder};
use std::time::Duration;

const USER_AGENT_VALUE: &str = concat!("form3-accounts/", env!("CARGO_PKG_VERSION"));

/// Status and body of a completed HTTP round trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

/// Request pipeline bound to one base URL.
///
/// Cloning is cheap; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    timeout: Option<Duration>,
}

impl ApiClient {
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Self {
        Self::with_http_client(Client::new(), base_url, timeout)
    }

    pub fn with_http_client(client: Client, base_url: &str, timeout: Option<Duration>) -> Self {
        ApiClient {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    pub fn set_timeout(&mut self, timeout: Option<Duration>) {
        self.timeout = timeout;
    }

    pub fn build_request(&self, method: Method, endpoint: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, endpoint);
        let mut request = self
            .client
            .request(method, url)
            .header(USER_AGENT, USER_AGENT_VALUE)
            .header(ACCEPT, "application/json");

        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        request
    }

    /// Send `request` and normalize the outcome.
    pub async fn execute(
        &self,
        request: RequestBuilder,
        endpoint: &str,
    ) -> Result<RawResponse, ApiError> {
        log::debug!("Sending request to {}{}", self.base_url, endpoint);

        let outcome = match request.send().await {
            Ok(response) => {
                let status = response.status().as_u16();
                response.bytes().await.map(|body| RawResponse {
                    status,
                    body: body.to_vec(),
                })
            }
            Err(e) => Err(e),
        };

        let result = handle_response_error(outcome, endpoint);
        match &result {
            Ok(response) => log::debug!("{} answered with status {}", endpoint, response.status),
            Err(e) => log::warn!("Request to {} failed: {}", endpoint, e),
        }
        result
    }
}

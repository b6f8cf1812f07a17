//! Accounts resource: create, list, fetch and delete.

use crate::api::client::ApiClient;
use crate::api::models::{
    Account, AccountAttributes, AccountListParams, AccountPage, AccountResponse, AccountsResponse,
    NewAccountRequest,
};
use crate::error::ApiError;
use crate::utils::error_helpers::decode_body;
use reqwest::Method;
use reqwest::header::CONTENT_TYPE;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;

const ACCOUNTS_ENDPOINT: &str = "/organisation/accounts";

/// Source of client-side account identifiers.
///
/// Any `Fn() -> String` closure works, which lets tests hand out fixed ids.
pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> String;
}

/// Random version 4 UUIDs in hyphenated form.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn generate(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

impl<F> IdGenerator for F
where
    F: Fn() -> String + Send + Sync,
{
    fn generate(&self) -> String {
        self()
    }
}

#[derive(Clone)]
pub struct Accounts {
    client: ApiClient,
    id_generator: Arc<dyn IdGenerator>,
}

impl fmt::Debug for Accounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Accounts")
            .field("client", &self.client)
            .finish_non_exhaustive()
    }
}

impl Accounts {
    pub fn new(client: ApiClient) -> Self {
        Self::with_id_generator(client, Arc::new(UuidGenerator))
    }

    pub fn with_id_generator(client: ApiClient, id_generator: Arc<dyn IdGenerator>) -> Self {
        Self {
            client,
            id_generator,
        }
    }

    pub fn set_id_generator(&mut self, id_generator: Arc<dyn IdGenerator>) {
        self.id_generator = id_generator;
    }

    /// Copy of this client whose requests give up after `timeout`.
    pub fn with_timeout(&self, timeout: Duration) -> Self {
        let mut accounts = self.clone();
        accounts.client.set_timeout(Some(timeout));
        accounts
    }

    pub fn base_url(&self) -> &str {
        self.client.base_url()
    }

    /// Create an account owned by `organisation_id` under a freshly generated id.
    pub async fn create(
        &self,
        organisation_id: &str,
        attributes: &AccountAttributes,
    ) -> Result<Account, ApiError> {
        let account_id = self.id_generator.generate();
        let payload = NewAccountRequest::new(&account_id, organisation_id, attributes);
        let body = serde_json::to_vec(&payload).map_err(|e| ApiError::Serialization {
            endpoint: ACCOUNTS_ENDPOINT.to_string(),
            message: e.to_string(),
        })?;

        log::debug!("Creating account {} for organisation {}", account_id, organisation_id);

        let request = self
            .client
            .build_request(Method::POST, ACCOUNTS_ENDPOINT)
            .header(CONTENT_TYPE, "application/json")
            .body(body);
        let response = self.client.execute(request, ACCOUNTS_ENDPOINT).await?;

        let envelope: AccountResponse = decode_body(&response, ACCOUNTS_ENDPOINT)?;
        Ok(envelope.data)
    }

    /// List one page of accounts, in the order the server returns them.
    pub async fn list(&self, params: &AccountListParams) -> Result<Vec<Account>, ApiError> {
        self.list_page(params).await.map(|page| page.accounts)
    }

    /// Like [`Accounts::list`], keeping the navigation links.
    pub async fn list_page(&self, params: &AccountListParams) -> Result<AccountPage, ApiError> {
        let request = self
            .client
            .build_request(Method::GET, ACCOUNTS_ENDPOINT)
            .query(&params.query());
        let response = self.client.execute(request, ACCOUNTS_ENDPOINT).await?;

        let envelope: AccountsResponse = decode_body(&response, ACCOUNTS_ENDPOINT)?;
        Ok(AccountPage {
            accounts: envelope.data,
            links: envelope.links,
        })
    }

    pub async fn fetch(&self, account_id: &str) -> Result<Account, ApiError> {
        let endpoint = account_endpoint(account_id)?;
        let request = self.client.build_request(Method::GET, &endpoint);
        let response = self.client.execute(request, &endpoint).await?;

        let envelope: AccountResponse = decode_body(&response, &endpoint)?;
        Ok(envelope.data)
    }

    /// Delete `account_id` if its current version is `version`.
    pub async fn delete(&self, account_id: &str, version: i64) -> Result<(), ApiError> {
        let endpoint = account_endpoint(account_id)?;
        let request = self
            .client
            .build_request(Method::DELETE, &endpoint)
            .query(&[("version", version)]);
        self.client.execute(request, &endpoint).await?;
        Ok(())
    }
}

/// Path of a single account. The id always occupies exactly one path segment.
fn account_endpoint(account_id: &str) -> Result<String, ApiError> {
    if matches!(account_id, "" | "." | "..") {
        return Err(ApiError::InvalidRequest {
            endpoint: ACCOUNTS_ENDPOINT.to_string(),
            message: format!("'{}' is not a valid account id", account_id),
        });
    }

    Ok(format!("{}/{}", ACCOUNTS_ENDPOINT, urlencoding::encode(account_id)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uuid_generator_produces_hyphenated_v4() {
        let id = UuidGenerator.generate();
        let parsed = Uuid::parse_str(&id).expect("generated id should parse");
        assert_eq!(parsed.get_version_num(), 4);
        assert_eq!(id.len(), 36);
        assert_ne!(id, UuidGenerator.generate());
    }

    #[test]
    fn test_closure_generator() {
        let generator = || "fixed-id".to_string();
        assert_eq!(generator.generate(), "fixed-id");
    }

    #[test]
    fn test_account_endpoint() {
        assert_eq!(
            account_endpoint("ad27e265-9605-4b4b-a0e5-3003ea9cc4dc").unwrap(),
            "/organisation/accounts/ad27e265-9605-4b4b-a0e5-3003ea9cc4dc"
        );
    }

    #[test]
    fn test_account_endpoint_escapes_reserved_characters() {
        assert_eq!(
            account_endpoint("abc?version=0&").unwrap(),
            "/organisation/accounts/abc%3Fversion%3D0%26"
        );
        assert_eq!(
            account_endpoint("a/b#c").unwrap(),
            "/organisation/accounts/a%2Fb%23c"
        );
    }

    #[test]
    fn test_account_endpoint_rejects_dot_segments() {
        for account_id in ["", ".", ".."] {
            let err = account_endpoint(account_id).expect_err("id should be rejected");
            assert!(matches!(err, ApiError::InvalidRequest { .. }));
            assert_eq!(err.endpoint(), "/organisation/accounts");
        }
    }

    #[test]
    fn test_with_timeout_leaves_original_untouched() {
        let accounts = Accounts::new(ApiClient::new("http://example.test/v1", None));
        let bounded = accounts.with_timeout(Duration::from_secs(2));

        assert_eq!(bounded.client.timeout(), Some(Duration::from_secs(2)));
        assert_eq!(accounts.client.timeout(), None);
        assert_eq!(bounded.base_url(), "http://example.test/v1");
    }
}

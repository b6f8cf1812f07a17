use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Wire value of the `type` field for this resource.
pub const ACCOUNT_RESOURCE_TYPE: &str = "accounts";

/// Custom deserializer: the API sends `null` for an empty name list
fn deserialize_null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let names: Option<Vec<String>> = Option::deserialize(deserializer)?;
    Ok(names.unwrap_or_default())
}

fn default_resource_type() -> String {
    ACCOUNT_RESOURCE_TYPE.to_string()
}

/// Business fields of an account. Validation is entirely server-side.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct AccountAttributes {
    pub country: String,
    pub base_currency: String,
    pub bank_id: String,
    pub bank_id_code: String,
    pub account_number: String,
    pub bic: String,
    pub iban: String,
    pub customer_id: String,
    pub title: String,
    pub first_name: String,
    pub bank_account_name: String,
    #[serde(
        deserialize_with = "deserialize_null_as_empty",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub alternative_bank_account_names: Vec<String>,
    pub account_classification: String,
    pub joint_account: bool,
    pub account_matching_opt_out: bool,
    pub secondary_identification: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Account {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub organisation_id: String,
    #[serde(rename = "type", default = "default_resource_type")]
    pub resource_type: String,
    #[serde(default)]
    pub version: i64,
    #[serde(default)]
    pub attributes: AccountAttributes,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_on: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified_on: Option<DateTime<Utc>>,
}

/// Page selector for listing. Zero values are sent as-is and left to the
/// server's defaulting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AccountListPagination {
    pub number: u32,
    pub size: u32,
}

#[derive(Debug, Clone, Default)]
pub struct AccountListParams {
    pub pagination: AccountListPagination,
}

impl AccountListParams {
    pub fn page(number: u32, size: u32) -> Self {
        Self {
            pagination: AccountListPagination { number, size },
        }
    }

    pub(crate) fn query(&self) -> [(&'static str, u32); 2] {
        [
            ("page[number]", self.pagination.number),
            ("page[size]", self.pagination.size),
        ]
    }
}

/// Navigation links returned alongside a list page.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Links {
    #[serde(rename = "self", skip_serializing_if = "Option::is_none")]
    pub self_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AccountPage {
    pub accounts: Vec<Account>,
    pub links: Option<Links>,
}

// Request envelopes

#[derive(Debug, Serialize)]
pub(crate) struct NewAccountRequest<'a> {
    pub data: NewAccountData<'a>,
}

#[derive(Debug, Serialize)]
pub(crate) struct NewAccountData<'a> {
    pub id: &'a str,
    pub organisation_id: &'a str,
    #[serde(rename = "type")]
    pub resource_type: &'static str,
    pub attributes: &'a AccountAttributes,
}

impl<'a> NewAccountRequest<'a> {
    pub fn new(id: &'a str, organisation_id: &'a str, attributes: &'a AccountAttributes) -> Self {
        Self {
            data: NewAccountData {
                id,
                organisation_id,
                resource_type: ACCOUNT_RESOURCE_TYPE,
                attributes,
            },
        }
    }
}

// Response envelopes

#[derive(Debug, Deserialize)]
pub(crate) struct AccountResponse {
    pub data: Account,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AccountsResponse {
    #[serde(default, deserialize_with = "deserialize_null_accounts")]
    pub data: Vec<Account>,
    #[serde(default)]
    pub links: Option<Links>,
}

fn deserialize_null_accounts<'de, D>(deserializer: D) -> Result<Vec<Account>, D::Error>
where
    D: Deserializer<'de>,
{
    let accounts: Option<Vec<Account>> = Option::deserialize(deserializer)?;
    Ok(accounts.unwrap_or_default())
}

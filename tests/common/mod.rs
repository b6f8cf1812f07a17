//! Shared fixtures: an in-memory stand-in for the account API.
#![allow(dead_code)]

use form3_accounts::prelude::*;
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};
use wiremock::matchers::path_regex;
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

pub const ORGANISATION_ID: &str = "eb0bd6f5-c3f5-44b2-b677-acd23cdde73c";
pub const API_PREFIX: &str = "/v1";

const COLLECTION_PATH: &str = "/v1/organisation/accounts";
const DEFAULT_PAGE_SIZE: usize = 100;
const TIMESTAMP: &str = "2021-03-01T12:04:05.123Z";

pub fn build_account_attributes() -> AccountAttributes {
    AccountAttributes {
        country: "GB".to_string(),
        base_currency: "GBP".to_string(),
        bank_id: "400302".to_string(),
        bank_id_code: "GBDSC".to_string(),
        account_number: "10000004".to_string(),
        bic: "NWBKGB42".to_string(),
        iban: "GB28NWBK40030212764204".to_string(),
        customer_id: "234".to_string(),
        title: "Sir".to_string(),
        first_name: "Mary-Jane Doe".to_string(),
        bank_account_name: "Mary-Jane Doe".to_string(),
        alternative_bank_account_names: vec!["Mary Doe".to_string(), "M J Doe".to_string()],
        account_classification: "Personal".to_string(),
        joint_account: false,
        account_matching_opt_out: true,
        secondary_identification: "A1B2C3D4".to_string(),
    }
}

/// Stateful fake of the account API, in insertion order.
#[derive(Clone, Default)]
pub struct FakeAccountApi {
    accounts: Arc<Mutex<Vec<Value>>>,
}

impl FakeAccountApi {
    pub fn len(&self) -> usize {
        self.accounts.lock().unwrap().len()
    }

    fn create(&self, request: &Request) -> ResponseTemplate {
        let body: Value = match serde_json::from_slice(&request.body) {
            Ok(body) => body,
            Err(_) => return error(400, "invalid request body"),
        };
        let data = &body["data"];

        let country = data["attributes"]["country"].as_str().unwrap_or_default();
        if country.len() != 2 || !country.chars().all(|c| c.is_ascii_uppercase()) {
            return error(
                400,
                "validation failure list:\nvalidation failure list:\nvalidation failure list:\ncountry in body should match '^[A-Z]{2}$'",
            );
        }

        let id = data["id"].as_str().unwrap_or_default().to_string();
        let mut accounts = self.accounts.lock().unwrap();
        if accounts.iter().any(|account| account["id"] == id.as_str()) {
            return error(
                409,
                "Account cannot be created as it violates a duplicate constraint",
            );
        }

        let account = json!({
            "id": id,
            "organisation_id": data["organisation_id"],
            "type": data["type"],
            "version": 0,
            "attributes": data["attributes"],
            "created_on": TIMESTAMP,
            "modified_on": TIMESTAMP,
        });
        accounts.push(account.clone());

        ResponseTemplate::new(201).set_body_json(json!({
            "data": account,
            "links": { "self": format!("{}/{}", COLLECTION_PATH, id) },
        }))
    }

    fn list(&self, request: &Request) -> ResponseTemplate {
        let query_value = |name: &str| {
            request
                .url
                .query_pairs()
                .find(|(key, _)| key == name)
                .and_then(|(_, value)| value.parse::<usize>().ok())
                .unwrap_or(0)
        };
        let number = query_value("page[number]");
        let size = match query_value("page[size]") {
            0 => DEFAULT_PAGE_SIZE,
            size => size,
        };

        let accounts = self.accounts.lock().unwrap();
        let page: Vec<Value> = accounts
            .iter()
            .skip(number.saturating_mul(size))
            .take(size)
            .cloned()
            .collect();

        let mut links = json!({
            "self": COLLECTION_PATH,
            "first": format!("{}?page%5Bnumber%5D=first", COLLECTION_PATH),
        });
        if (number + 1) * size < accounts.len() {
            links["next"] = json!(format!("{}?page%5Bnumber%5D={}", COLLECTION_PATH, number + 1));
        }

        ResponseTemplate::new(200).set_body_json(json!({ "data": page, "links": links }))
    }

    fn fetch(&self, id: &str) -> ResponseTemplate {
        let accounts = self.accounts.lock().unwrap();
        match accounts.iter().find(|account| account["id"] == id) {
            Some(account) => ResponseTemplate::new(200).set_body_json(json!({ "data": account })),
            None => error(404, &format!("record {} does not exist", id)),
        }
    }

    fn delete(&self, id: &str, request: &Request) -> ResponseTemplate {
        let version = request
            .url
            .query_pairs()
            .find(|(key, _)| key == "version")
            .and_then(|(_, value)| value.parse::<i64>().ok());

        let mut accounts = self.accounts.lock().unwrap();
        let Some(position) = accounts.iter().position(|account| account["id"] == id) else {
            // The real service answers a missing record with an empty 404.
            return ResponseTemplate::new(404);
        };

        if version != accounts[position]["version"].as_i64() {
            return error(409, "invalid version");
        }

        accounts.remove(position);
        ResponseTemplate::new(204)
    }
}

impl Respond for FakeAccountApi {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let path = request.url.path().trim_end_matches('/');
        let Some(rest) = path.strip_prefix(COLLECTION_PATH) else {
            return ResponseTemplate::new(404);
        };
        let id = match urlencoding::decode(rest.trim_start_matches('/')) {
            Ok(id) => id.into_owned(),
            Err(_) => return ResponseTemplate::new(400),
        };

        match (request.method.as_str(), id.is_empty()) {
            ("POST", true) => self.create(request),
            ("GET", true) => self.list(request),
            ("GET", false) => self.fetch(&id),
            ("DELETE", false) => self.delete(&id, request),
            _ => ResponseTemplate::new(405),
        }
    }
}

fn error(status: u16, message: &str) -> ResponseTemplate {
    ResponseTemplate::new(status).set_body_json(json!({
        "error_message": message,
        "error_code": "00000000-0000-0000-0000-000000000000",
    }))
}

/// Mock server with the fake account API mounted under `/v1`.
pub async fn start_fake_api() -> (MockServer, FakeAccountApi) {
    let server = MockServer::start().await;
    let api = FakeAccountApi::default();

    Mock::given(path_regex(r"^/v1/organisation/accounts(/.*)?$"))
        .respond_with(api.clone())
        .mount(&server)
        .await;

    (server, api)
}

pub fn client_for(server: &MockServer) -> Form3 {
    Form3::new(Form3Config::with_url(format!("{}{}", server.uri(), API_PREFIX)))
}

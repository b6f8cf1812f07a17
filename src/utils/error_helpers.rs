use crate::api::client::RawResponse;
use crate::error::ApiError;
use serde::de::DeserializeOwned;
use std::collections::HashMap;

/// Statuses above this are failures.
const LAST_SUCCESS_STATUS: u16 = 399;

/// Normalize the outcome of one HTTP round trip into success or a single
/// `ApiError`.
///
/// A transport error wins over anything else and the body is never looked at.
/// Otherwise an error status is explained by the body's `error_message`, or by
/// the raw body text when the body is not such an envelope.
pub fn handle_response_error(
    outcome: Result<RawResponse, reqwest::Error>,
    endpoint: &str,
) -> Result<RawResponse, ApiError> {
    let response = outcome.map_err(|e| convert_request_error(e, endpoint))?;

    if response.status > LAST_SUCCESS_STATUS {
        return Err(convert_error_body(response.status, &response.body, endpoint));
    }

    Ok(response)
}

/// Wrap a reqwest error as a transport failure for `endpoint`
pub fn convert_request_error(error: reqwest::Error, endpoint: &str) -> ApiError {
    ApiError::Transport {
        endpoint: endpoint.to_string(),
        source: error,
    }
}

fn convert_error_body(status: u16, body: &[u8], endpoint: &str) -> ApiError {
    let message = serde_json::from_slice::<HashMap<String, serde_json::Value>>(body)
        .ok()
        .and_then(|mut fields| fields.remove("error_message"))
        .and_then(|value| match value {
            serde_json::Value::String(message) => Some(message),
            _ => None,
        });

    match message {
        Some(message) => ApiError::Api {
            status,
            endpoint: endpoint.to_string(),
            message,
        },
        None => ApiError::DecodeFailure {
            status,
            endpoint: endpoint.to_string(),
            raw_body: String::from_utf8_lossy(body).into_owned(),
        },
    }
}

/// Decode a successful response body into the expected envelope
pub fn decode_body<T>(response: &RawResponse, endpoint: &str) -> Result<T, ApiError>
where
    T: DeserializeOwned,
{
    serde_json::from_slice(&response.body).map_err(|e| ApiError::InvalidResponse {
        status: response.status,
        endpoint: endpoint.to_string(),
        message: format!("JSON parse error: {}", e),
    })
}

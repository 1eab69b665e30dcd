//! Generic authenticated GET with status and parse error classification

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, error, info, instrument};

use crate::constants::AUTH_HEADER;
use crate::error::AppError;

/// Issues a single GET for `url` and deserializes the JSON body.
///
/// There is no caching and no retry: a transport error, a non-2xx status or
/// a body that does not match `T` is returned as the matching [`AppError`].
///
/// # Arguments
/// * `client` - HTTP client for making requests
/// * `url` - URL to fetch data from
/// * `api_key` - Sent as the `X-Auth-Token` header when present
#[instrument(skip(client, api_key))]
pub async fn fetch<T: DeserializeOwned>(
    client: &Client,
    url: &str,
    api_key: Option<&str>,
) -> Result<T, AppError> {
    info!("Fetching data from URL: {url}");

    let mut request = client.get(url);
    if let Some(key) = api_key {
        request = request.header(AUTH_HEADER, key);
    }

    let response = match request.send().await {
        Ok(resp) => resp,
        Err(e) => {
            error!("Request failed for URL {}: {}", url, e);
            return if e.is_timeout() {
                Err(AppError::network_timeout(url))
            } else if e.is_connect() {
                Err(AppError::network_connection(url, e.to_string()))
            } else {
                Err(AppError::ApiFetch(e))
            };
        }
    };

    let status = response.status();
    debug!("Response status: {status}");

    if !status.is_success() {
        let status_code = status.as_u16();
        let reason = status.canonical_reason().unwrap_or("Unknown error");

        error!("HTTP {} - {} (URL: {})", status_code, reason, url);

        return Err(match status_code {
            404 => AppError::api_not_found(url),
            429 => AppError::api_rate_limit(reason, url),
            400..=499 => AppError::api_client_error(status_code, reason, url),
            502 | 503 => AppError::api_service_unavailable(status_code, reason, url),
            _ => AppError::api_server_error(status_code, reason, url),
        });
    }

    let response_text = match response.text().await {
        Ok(text) => text,
        Err(e) => {
            error!("Failed to read response text from URL {}: {}", url, e);
            return Err(AppError::ApiFetch(e));
        }
    };

    debug!("Response length: {} bytes", response_text.len());

    parse_response(&response_text, url)
}

/// Parses a response body, telling apart empty bodies, non-JSON bodies and
/// JSON of the wrong shape.
pub(crate) fn parse_response<T: DeserializeOwned>(body: &str, url: &str) -> Result<T, AppError> {
    match serde_json::from_str::<T>(body) {
        Ok(parsed) => Ok(parsed),
        Err(e) => {
            error!("Failed to parse API response: {} (URL: {})", e, url);
            error!(
                "Response text (first 200 chars): {}",
                &body.chars().take(200).collect::<String>()
            );

            let trimmed = body.trim_start();
            if trimmed.is_empty() {
                Err(AppError::api_no_data("Response body is empty", url))
            } else if !trimmed.starts_with('{') && !trimmed.starts_with('[') {
                Err(AppError::api_malformed_json("Response is not valid JSON", url))
            } else if e.is_syntax() || e.is_eof() {
                Err(AppError::api_malformed_json(e.to_string(), url))
            } else {
                Err(AppError::api_unexpected_structure(e.to_string(), url))
            }
        }
    }
}

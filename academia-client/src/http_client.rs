//! Generic HTTP client tools
//!
//! Shared request/response handling for every `/users` call: sending,
//! logging, status checks and error-payload extraction.

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{ClientError, Result};
use crate::utils::log_sanitizer::truncate_for_log;

/// HTTP tool function set
pub struct HttpUtils;

impl HttpUtils {
    /// Performs an HTTP request and returns status code and response text
    ///
    /// # Arguments
    /// * `request_builder` - configured request (URL, headers, body)
    /// * `method_name` - request method name (for logs)
    /// * `url` - request URL (for logs)
    pub async fn execute_request(
        request_builder: RequestBuilder,
        method_name: &str,
        url: &str,
    ) -> Result<(u16, String)> {
        log::debug!("{method_name} {url}");

        let response = request_builder.send().await.map_err(|e| {
            if is_body_encoding_error(&e) {
                ClientError::SerializationError {
                    detail: e.to_string(),
                }
            } else if e.is_timeout() {
                ClientError::Timeout {
                    detail: e.to_string(),
                }
            } else {
                ClientError::NetworkError {
                    detail: e.to_string(),
                }
            }
        })?;

        let status_code = response.status().as_u16();
        log::debug!("Response Status: {status_code}");

        let response_text = response
            .text()
            .await
            .map_err(|e| ClientError::NetworkError {
                detail: format!("Failed to read response body: {e}"),
            })?;

        log::debug!("Response Body: {}", truncate_for_log(&response_text));

        Ok((status_code, response_text))
    }

    /// Turn a non-2xx answer into [`ClientError::Api`]
    ///
    /// # Arguments
    /// * `fallback` - message used when the payload carries nothing usable
    pub fn ensure_success(status: u16, body: &str, fallback: &str) -> Result<()> {
        if (200..300).contains(&status) {
            return Ok(());
        }
        let message = extract_error_message(body, fallback);
        if status >= 500 {
            log::error!("API error ({status}): {}", truncate_for_log(body));
        } else {
            log::warn!("API error ({status}): {message}");
        }
        Err(ClientError::Api { status, message })
    }

    /// Parse JSON response
    pub fn parse_json<T>(response_text: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(response_text).map_err(|e| {
            log::error!("JSON parse failed: {e}");
            log::error!("Raw response: {}", truncate_for_log(response_text));
            ClientError::ParseError {
                detail: e.to_string(),
            }
        })
    }
}

/// `.json(..)` failures surface from `send()` as builder errors wrapping the serde error
fn is_body_encoding_error(e: &reqwest::Error) -> bool {
    e.is_builder()
        && std::error::Error::source(e).is_some_and(|source| source.is::<serde_json::Error>())
}

/// Message of an error payload
///
/// Order: `message` (string, or array joined with ", "), then `error`,
/// then the raw text, then `fallback`.
pub fn extract_error_message(body: &str, fallback: &str) -> String {
    if let Ok(Value::Object(map)) = serde_json::from_str::<Value>(body) {
        match map.get("message") {
            Some(Value::String(message)) if !message.is_empty() => return message.clone(),
            Some(Value::Array(items)) if !items.is_empty() => {
                return items
                    .iter()
                    .map(|item| match item {
                        Value::String(s) => s.clone(),
                        other => other.to_string(),
                    })
                    .collect::<Vec<_>>()
                    .join(", ");
            }
            _ => {}
        }
        if let Some(Value::String(error)) = map.get("error") {
            if !error.is_empty() {
                return error.clone();
            }
        }
    }

    let raw = body.trim();
    if raw.is_empty() {
        fallback.to_string()
    } else {
        raw.to_string()
    }
}

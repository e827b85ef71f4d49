//! API utilities for frontend-backend communication
//!
//! Base URL resolution, bearer headers and the shared error type for every
//! call to the backend REST API.

use contracts::shared::api::MessageResponse;
use gloo_net::http::Response;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::shared::config::config;

/// Failure of a backend call
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("Failed to send request: {0}")]
    Network(String),

    #[error("Failed to serialize request: {0}")]
    Serialize(String),

    #[error("Request failed with status {status}")]
    Status { status: u16, message: Option<String> },

    #[error("Failed to parse response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Text for the user: the backend's `message` when it sent one,
    /// otherwise `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Status {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => message.clone(),
            _ => fallback.to_string(),
        }
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(e: gloo_net::Error) -> Self {
        match e {
            gloo_net::Error::SerdeError(e) => ApiError::Serialize(e.to_string()),
            other => ApiError::Network(other.to_string()),
        }
    }
}

/// Get the base URL for API requests
///
/// Uses `[server].url` from the embedded config (or the `SERVER_URL` build
/// override). When that is empty, falls back to the current window origin
/// with port 3000.
///
/// # Returns
/// - API base URL like "https://api.example.com" or "http://localhost:3000"
/// - Empty string if neither config nor window is available
pub fn api_base() -> String {
    let configured = &config().server.url;
    if !configured.is_empty() {
        return configured.clone();
    }
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// Build a full API URL from a path
///
/// # Example
/// ```ignore
/// let url = api_url("/request/search");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// `Authorization` header value. A missing session still produces a
/// header (`"Bearer "`), the backend decides what to do with it.
pub fn bearer(token: Option<&str>) -> String {
    format!("Bearer {}", token.unwrap_or_default())
}

/// Decode a JSON body, turning non-2xx responses into [`ApiError::Status`]
/// with the backend's `message` attached when present.
pub async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if !response.ok() {
        return Err(status_error(response).await);
    }
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

async fn status_error(response: Response) -> ApiError {
    let status = response.status();
    let message = response
        .json::<MessageResponse>()
        .await
        .ok()
        .and_then(|body| body.message);
    ApiError::Status { status, message }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bearer_header_with_and_without_token() {
        assert_eq!(bearer(Some("t1")), "Bearer t1");
        assert_eq!(bearer(None), "Bearer ");
    }

    #[test]
    fn user_message_prefers_backend_text() {
        let err = ApiError::Status {
            status: 401,
            message: Some("User not found".into()),
        };
        assert_eq!(err.user_message("fallback"), "User not found");
    }

    #[test]
    fn user_message_falls_back() {
        let blank = ApiError::Status {
            status: 500,
            message: Some("  ".into()),
        };
        assert_eq!(blank.user_message("fallback"), "fallback");
        assert_eq!(
            ApiError::Network("offline".into()).user_message("fallback"),
            "fallback"
        );
    }

    #[test]
    fn status_error_display() {
        let err = ApiError::Status {
            status: 404,
            message: None,
        };
        assert_eq!(err.to_string(), "Request failed with status 404");
    }
}

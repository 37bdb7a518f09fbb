//! HTTP API Client
//!
//! Thin wrappers over the Vigil backend REST API. Each wrapper logs
//! transport failures for diagnostics and re-raises them unchanged; the
//! caller owns user-visible failure presentation. No retries, no backoff.

use gloo_net::http::{Request, RequestBuilder, Response};

use crate::api::error::{ApiError, ApiResult};
use crate::state::auth::AuthContext;
use crate::state::global::AlarmRecord;

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:8080/api";

/// localStorage key for overriding the API base URL
const API_BASE_KEY: &str = "vigil_api_url";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item(API_BASE_KEY) {
                url
            } else {
                DEFAULT_API_BASE.to_string()
            }
        } else {
            DEFAULT_API_BASE.to_string()
        }
    } else {
        DEFAULT_API_BASE.to_string()
    };
    normalize_base(&url)
}

/// Set the API base URL in local storage
pub fn set_api_base(url: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(API_BASE_KEY, url);
        }
    }
}

/// Normalize a base URL: strip trailing slashes
fn normalize_base(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}

// ============ Request / Response Types ============

#[derive(Debug, serde::Serialize)]
struct RegisterRequest<'a> {
    username: &'a str,
    password: &'a str,
    email: &'a str,
}

#[derive(Debug, serde::Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Debug, serde::Deserialize)]
pub struct LoginResponse {
    pub message: String,
    pub token: String,
}

#[derive(Debug, serde::Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

// ============ API Functions ============

/// Register a new user account
pub async fn register(username: &str, password: &str, email: &str) -> ApiResult<MessageResponse> {
    let response = Request::post(&format!("{}/users/register", get_api_base()))
        .json(&RegisterRequest {
            username,
            password,
            email,
        })?
        .send()
        .await
        .map_err(|e| log_request_error("register", e))?;

    if !response.ok() {
        return Err(error_response(response).await);
    }

    Ok(response.json().await?)
}

/// Log in and receive a session token
pub async fn login(username: &str, password: &str) -> ApiResult<LoginResponse> {
    let response = Request::post(&format!("{}/users/login", get_api_base()))
        .json(&LoginRequest { username, password })?
        .send()
        .await
        .map_err(|e| log_request_error("login", e))?;

    if !response.ok() {
        return Err(error_response(response).await);
    }

    Ok(response.json().await?)
}

/// End the server-side session
pub async fn logout() -> ApiResult<MessageResponse> {
    let response = with_auth(Request::post(&format!("{}/users/logout", get_api_base())))
        .send()
        .await
        .map_err(|e| log_request_error("logout", e))?;

    if !response.ok() {
        return Err(error_response(response).await);
    }

    Ok(response.json().await?)
}

/// Fetch all alarm records, newest first (the backend sorts by timestamp)
pub async fn fetch_alarms() -> ApiResult<Vec<AlarmRecord>> {
    let response = with_auth(Request::get(&format!("{}/alarms", get_api_base())))
        .send()
        .await
        .map_err(|e| log_request_error("alarm fetch", e))?;

    if !response.ok() {
        return Err(error_response(response).await);
    }

    Ok(response.json().await?)
}

/// Attach the stored session token, when present, as a bearer header
fn with_auth(builder: RequestBuilder) -> RequestBuilder {
    let auth = AuthContext::load();
    match auth.token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
        None => builder,
    }
}

/// Log a transport failure before handing it back unchanged
fn log_request_error(operation: &str, err: gloo_net::Error) -> gloo_net::Error {
    web_sys::console::error_1(&format!("{} request failed: {}", operation, err).into());
    err
}

/// Turn a non-success response into an error carrying the backend message
async fn error_response(response: Response) -> ApiError {
    let status = response.status();
    let message = response
        .json::<MessageResponse>()
        .await
        .map(|body| body.message)
        .unwrap_or_else(|_| format!("request failed with status {}", status));

    ApiError::Server { status, message }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_base_strips_trailing_slashes() {
        assert_eq!(
            normalize_base("http://localhost:8080/api/"),
            "http://localhost:8080/api"
        );
        assert_eq!(
            normalize_base("http://localhost:8080/api"),
            "http://localhost:8080/api"
        );
    }

    #[test]
    fn test_default_base_is_already_normalized() {
        assert_eq!(normalize_base(DEFAULT_API_BASE), DEFAULT_API_BASE);
    }
}

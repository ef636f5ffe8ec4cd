//! REST API client for the Savora backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning [`ApiError::Unavailable`] since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every operation returns `Result<_, ApiError>`. A 401 maps to
//! [`ApiError::Unauthorized`] so callers can clear the stored session and
//! bounce to login instead of showing a generic failure.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use thiserror::Error;

#[cfg(feature = "hydrate")]
use super::types::{Restaurant, extract_token, normalize_restaurants};

/// Base URL of the hosted backend. All endpoints live under this prefix.
pub const API_BASE: &str = "https://staging.fastor.ai/v1";

/// Dial code sent with every OTP request. The product is India-only.
pub const DIAL_CODE: &str = "+91";

/// City the restaurant list is scoped to.
pub const DEFAULT_CITY_ID: u32 = 118;

/// Failures surfaced by API operations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The server rejected the session token.
    #[error("session expired")]
    Unauthorized,
    /// Any non-success, non-401 HTTP status, with the server's `message`
    /// field when the body carries one.
    #[error("request failed with status {status}{}", .message.as_ref().map(|m| format!(": {m}")).unwrap_or_default())]
    Http { status: u16, message: Option<String> },
    /// The request never completed.
    #[error("network error: {0}")]
    Network(String),
    /// The response body was not in any recognized shape.
    #[error("unexpected response: {0}")]
    Decode(String),
    /// Called outside the browser.
    #[error("not available on server")]
    Unavailable,
}

#[cfg(any(test, feature = "hydrate"))]
fn register_endpoint() -> String {
    format!("{API_BASE}/pwa/user/register")
}

#[cfg(any(test, feature = "hydrate"))]
fn login_endpoint() -> String {
    format!("{API_BASE}/pwa/user/login")
}

#[cfg(any(test, feature = "hydrate"))]
fn restaurants_endpoint(city_id: u32) -> String {
    format!("{API_BASE}/m/restaurant?city_id={city_id}")
}

/// Encode key/value pairs as `application/x-www-form-urlencoded`.
///
/// The dial code must survive as `%2B91`; a raw `+` in a form body decodes
/// to a space on the server.
#[cfg(any(test, feature = "hydrate"))]
fn form_encode(pairs: &[(&str, &str)]) -> String {
    let mut body = String::new();
    for (key, value) in pairs {
        if !body.is_empty() {
            body.push('&');
        }
        form_component(key, &mut body);
        body.push('=');
        form_component(value, &mut body);
    }
    body
}

/// Build an [`ApiError::Http`], pulling the server's `message` out of the
/// body when one is present.
#[cfg(feature = "hydrate")]
async fn http_error(resp: gloo_net::http::Response) -> ApiError {
    let status = resp.status();
    let message = resp
        .json::<serde_json::Value>()
        .await
        .ok()
        .and_then(|v| v.get("message").and_then(|m| m.as_str().map(str::to_owned)));
    ApiError::Http { status, message }
}

// Unescaped set per RFC 3986 unreserved characters; everything else is
// percent-encoded, with the form-urlencoded space-to-plus rule.
#[cfg(any(test, feature = "hydrate"))]
fn form_component(raw: &str, out: &mut String) {
    for byte in raw.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => out.push(byte as char),
            b' ' => out.push('+'),
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
}

/// Request an OTP for `phone` via `POST /pwa/user/register`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the server responds with
/// a non-success status.
pub async fn request_otp(phone: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = form_encode(&[("phone", phone), ("dial_code", DIAL_CODE)]);
        let resp = gloo_net::http::Request::post(&register_endpoint())
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(body)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(http_error(resp).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = phone;
        Err(ApiError::Unavailable)
    }
}

/// Verify `otp` for `phone` via `POST /pwa/user/login` and return the
/// session token.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails, the status is non-success,
/// or no token can be found in the response body.
pub async fn verify_otp(phone: &str, otp: &str) -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = form_encode(&[("phone", phone), ("otp", otp), ("dial_code", DIAL_CODE)]);
        let resp = gloo_net::http::Request::post(&login_endpoint())
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(body)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(http_error(resp).await);
        }
        let payload: serde_json::Value = resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))?;
        extract_token(&payload).ok_or_else(|| ApiError::Decode("no token in login response".to_owned()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (phone, otp);
        Err(ApiError::Unavailable)
    }
}

/// Fetch the restaurant list for [`DEFAULT_CITY_ID`] with a Bearer token.
///
/// # Errors
///
/// Returns [`ApiError::Unauthorized`] on a 401 so the caller can clear the
/// stored session; other failures map to the remaining variants.
#[cfg(feature = "hydrate")]
pub async fn fetch_restaurants(token: &str) -> Result<Vec<Restaurant>, ApiError> {
    let resp = gloo_net::http::Request::get(&restaurants_endpoint(DEFAULT_CITY_ID))
        .header("Authorization", &format!("Bearer {token}"))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if resp.status() == 401 {
        return Err(ApiError::Unauthorized);
    }
    if !resp.ok() {
        return Err(http_error(resp).await);
    }
    let payload: serde_json::Value = resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))?;
    Ok(normalize_restaurants(&payload))
}

#[cfg(not(feature = "hydrate"))]
pub async fn fetch_restaurants(token: &str) -> Result<Vec<super::types::Restaurant>, ApiError> {
    let _ = token;
    Err(ApiError::Unavailable)
}

/// Fetch a single restaurant by its normalized id.
///
/// The backend exposes no per-restaurant endpoint, so this fetches the list
/// and selects from it; an unknown id is `Ok(None)`, not an error.
///
/// # Errors
///
/// Same failure modes as [`fetch_restaurants`].
#[cfg(feature = "hydrate")]
pub async fn fetch_restaurant(token: &str, id: &str) -> Result<Option<Restaurant>, ApiError> {
    let items = fetch_restaurants(token).await?;
    Ok(items.into_iter().find(|r| r.id == id))
}

#[cfg(not(feature = "hydrate"))]
pub async fn fetch_restaurant(token: &str, id: &str) -> Result<Option<super::types::Restaurant>, ApiError> {
    let _ = (token, id);
    Err(ApiError::Unavailable)
}

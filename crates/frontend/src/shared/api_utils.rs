//! API utilities for frontend-backend communication
//!
//! URL construction plus the shared response handling every API module uses.

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::config::CLIENT_CONFIG;

/// Get the base URL for API requests
///
/// Uses `[api] base_url` when configured; otherwise builds it from the current
/// window location and the configured backend port.
///
/// # Returns
/// - API base URL like "http://localhost:3000"
/// - The configured base URL (or empty string) if window is not available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return CLIENT_CONFIG.api.base_url.clone(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    CLIENT_CONFIG.resolve_base(&protocol, &hostname)
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/api/bom/save");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Percent-encode one path segment
pub fn encode_segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

/// Reject an empty identifier before any request is made
pub fn require<'a>(value: &'a str, name: &str) -> Result<&'a str, String> {
    if value.trim().is_empty() {
        Err(format!("Missing {}", name))
    } else {
        Ok(value)
    }
}

/// Ошибка ответа: тело ответа, либо "{context}: {status text}", если тело пустое
pub async fn error_text(response: Response, context: &str) -> String {
    let body = response.text().await.unwrap_or_default();
    error_message(&body, context, &response.status_text())
}

fn error_message(body: &str, context: &str, status_text: &str) -> String {
    if body.trim().is_empty() {
        format!("{}: {}", context, status_text)
    } else {
        body.to_string()
    }
}

/// Check the status and parse the JSON body
pub async fn handle_response<T: DeserializeOwned>(
    response: Response,
    context: &str,
) -> Result<T, String> {
    if !response.ok() {
        return Err(error_text(response, context).await);
    }
    response
        .json::<T>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// POST a JSON body to `path` and parse the JSON answer
pub async fn post_json<B, T>(path: &str, body: &B, context: &str) -> Result<T, String>
where
    B: Serialize + ?Sized,
    T: DeserializeOwned,
{
    let response = Request::post(&api_url(path))
        .json(body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    handle_response(response, context).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_prefers_body() {
        assert_eq!(
            error_message("BOM code is invalid", "Failed to save BOM code", "Bad Request"),
            "BOM code is invalid"
        );
        assert_eq!(
            error_message("  ", "Failed to save BOM code", "Bad Request"),
            "Failed to save BOM code: Bad Request"
        );
    }

    #[test]
    fn test_encode_segment() {
        assert_eq!(encode_segment("Alpine 2/B"), "Alpine%202%2FB");
        assert_eq!(encode_segment("冰水缸"), "%E5%86%B0%E6%B0%B4%E7%BC%B8");
    }

    #[test]
    fn test_require() {
        assert_eq!(require("s1", "sessionId"), Ok("s1"));
        assert_eq!(require("", "sessionId"), Err("Missing sessionId".to_string()));
    }
}

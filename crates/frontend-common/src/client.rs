//! Shared client configuration and initialization

use std::sync::{Arc, Mutex};

use once_cell::sync::Lazy;

pub use moodlog_http::{ApiClient, ApiError};

use crate::config::AppConfig;
use crate::storage::BrowserTokens;

/// Global client instance
static CLIENT: Lazy<Mutex<Option<ApiClient>>> = Lazy::new(|| Mutex::new(None));

/// Get the base URL for API calls, fixed at build time.
fn base_url() -> String {
    option_env!("MOODLOG_API_URL")
        .unwrap_or(AppConfig::DEFAULT_API_URL)
        .to_string()
}

/// Get the shared client, bound to the browser-stored credential pair.
pub fn api() -> Result<ApiClient, ApiError> {
    let mut client_lock = CLIENT.lock().expect("Failed to acquire client lock");

    if let Some(client) = client_lock.as_ref() {
        return Ok(client.clone());
    }

    let client = ApiClient::builder()
        .base_url(base_url())
        .token_store(Arc::new(BrowserTokens))
        .build()?;
    *client_lock = Some(client.clone());
    Ok(client)
}

/// Route an unrecovered 401 to the session-expired handler before handing
/// the error back to the caller.
pub fn watch_session(error: ApiError) -> ApiError {
    if error.is_unauthorized() {
        crate::auth::session_expired::trigger();
    }
    error
}

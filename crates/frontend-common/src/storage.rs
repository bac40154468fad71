//! Browser-backed session credential store

use gloo::storage::{LocalStorage, Storage};
use moodlog_http::{ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY, TokenStore};

/// [`TokenStore`] over origin-scoped localStorage.
///
/// The pair lives under the `token` / `refreshToken` keys and is always
/// cleared together, never one entry at a time.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserTokens;

impl TokenStore for BrowserTokens {
    fn access_token(&self) -> Option<String> {
        LocalStorage::get(ACCESS_TOKEN_KEY).ok()
    }

    fn refresh_token(&self) -> Option<String> {
        LocalStorage::get(REFRESH_TOKEN_KEY).ok()
    }

    fn set_access_token(&self, token: &str) {
        let _ = LocalStorage::set(ACCESS_TOKEN_KEY, token);
    }

    fn set_tokens(&self, access: &str, refresh: &str) {
        let _ = LocalStorage::set(ACCESS_TOKEN_KEY, access);
        let _ = LocalStorage::set(REFRESH_TOKEN_KEY, refresh);
    }

    fn clear(&self) {
        LocalStorage::delete(ACCESS_TOKEN_KEY);
        LocalStorage::delete(REFRESH_TOKEN_KEY);
    }
}

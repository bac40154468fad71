//! Session credential storage

use std::sync::RwLock;

/// Storage key for the access token.
pub const ACCESS_TOKEN_KEY: &str = "token";

/// Storage key for the refresh token.
pub const REFRESH_TOKEN_KEY: &str = "refreshToken";

/// Durable home of the session credential pair.
///
/// The client reads the access token before every request and writes the
/// pair only on login, registration, refresh success, and teardown. Both
/// entries are cleared together, never independently.
pub trait TokenStore: Send + Sync {
    fn access_token(&self) -> Option<String>;

    fn refresh_token(&self) -> Option<String>;

    /// Replace just the access token; refresh success keeps the refresh token.
    fn set_access_token(&self, token: &str);

    /// Store a freshly issued credential pair.
    fn set_tokens(&self, access: &str, refresh: &str);

    /// Session teardown: drop both entries.
    fn clear(&self);
}

/// In-memory store used by native callers and tests.
#[derive(Debug, Default)]
pub struct MemoryTokens {
    inner: RwLock<Pair>,
}

#[derive(Debug, Default)]
struct Pair {
    access: Option<String>,
    refresh: Option<String>,
}

impl MemoryTokens {
    pub fn new(access: &str, refresh: &str) -> Self {
        let store = Self::default();
        store.set_tokens(access, refresh);
        store
    }
}

impl TokenStore for MemoryTokens {
    fn access_token(&self) -> Option<String> {
        self.inner
            .read()
            .expect("token store lock poisoned")
            .access
            .clone()
    }

    fn refresh_token(&self) -> Option<String> {
        self.inner
            .read()
            .expect("token store lock poisoned")
            .refresh
            .clone()
    }

    fn set_access_token(&self, token: &str) {
        self.inner
            .write()
            .expect("token store lock poisoned")
            .access = Some(token.to_string());
    }

    fn set_tokens(&self, access: &str, refresh: &str) {
        let mut pair = self.inner.write().expect("token store lock poisoned");
        pair.access = Some(access.to_string());
        pair.refresh = Some(refresh.to_string());
    }

    fn clear(&self) {
        let mut pair = self.inner.write().expect("token store lock poisoned");
        pair.access = None;
        pair.refresh = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn refresh_success_replaces_only_the_access_token() {
        let store = MemoryTokens::new("old-access", "keep-me");
        store.set_access_token("new-access");
        assert_eq!(store.access_token().as_deref(), Some("new-access"));
        assert_eq!(store.refresh_token().as_deref(), Some("keep-me"));
    }

    #[test]
    fn clear_drops_both_entries_together() {
        let store = MemoryTokens::new("a", "r");
        store.clear();
        assert_eq!(store.access_token(), None);
        assert_eq!(store.refresh_token(), None);
    }
}

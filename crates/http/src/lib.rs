//! MoodLog HTTP client
//!
//! Typed client for the MoodLog REST API. It attaches the bearer credential
//! to every outgoing request, recovers transparently from an expired access
//! token with a single refresh-and-replay, and normalizes every failure into
//! [`ApiError`] so callers never see a raw transport error.

pub mod client;
pub mod types;

pub use client::error::{ApiError, ErrorKind, FieldError, NETWORK_ERROR_MESSAGE};
pub use reqwest::StatusCode;
pub use client::session::{ACCESS_TOKEN_KEY, MemoryTokens, REFRESH_TOKEN_KEY, TokenStore};
pub use client::{ApiClient, ApiClientBuilder, REQUEST_TIMEOUT, RequestSpec};

pub mod auth;
pub mod client;
pub mod components;
pub mod config;
pub mod error_messages;
pub mod mood;
pub mod notify;
pub mod services;
pub mod storage;

pub use auth::context::AuthContext;
pub use client::api;
pub use components::Spinner;
pub use config::AppConfig;
pub use notify::{ToastProvider, use_toasts};

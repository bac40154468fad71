//! AI assistant API service

use moodlog_http::ApiError;
use moodlog_http::types::{ChatTurn, HealthChatResponse};

use crate::client::{api, watch_session};

#[derive(Clone)]
pub struct AiService;

impl AiService {
    pub fn new() -> Self {
        Self
    }

    /// Infer a 1-5 mood score from journal text.
    pub async fn analyze_mood(&self, content: &str) -> Result<u8, ApiError> {
        api()?.analyze_mood(content).await.map_err(watch_session)
    }

    /// Send one message plus the prior conversation to the assistant.
    pub async fn chat(
        &self,
        message: &str,
        history: &[ChatTurn],
    ) -> Result<HealthChatResponse, ApiError> {
        api()?.health_chat(message, history).await.map_err(watch_session)
    }
}

impl Default for AiService {
    fn default() -> Self {
        Self::new()
    }
}

//! AI assistant API client methods

use super::{ApiClient, error::ApiError};
use crate::types::{
    AnalyzeMoodRequest, AnalyzeMoodResponse, ChatTurn, HealthChatRequest, HealthChatResponse,
};

impl ApiClient {
    /// Ask the assistant to infer a 1-5 mood score from entry text.
    pub async fn analyze_mood(&self, content: &str) -> Result<u8, ApiError> {
        let req = self.post("/ai/analyze-mood").json(&AnalyzeMoodRequest {
            content: content.into(),
        })?;
        let response: AnalyzeMoodResponse = self.execute(req).await?;
        Ok(response.suggested_mood)
    }

    /// Send one user message plus the prior conversation to the assistant.
    pub async fn health_chat(
        &self,
        message: &str,
        history: &[ChatTurn],
    ) -> Result<HealthChatResponse, ApiError> {
        let req = self.post("/ai/health-chat").json(&HealthChatRequest {
            message: message.into(),
            conversation_history: history.to_vec(),
        })?;
        self.execute(req).await
    }
}

//! Community story API client methods

use super::{ApiClient, error::ApiError};
use crate::types::{
    CategoriesResponse, CreateStoryRequest, FlagRequest, LikeResponse, StoriesResponse, Story,
    StoryFilter, StoryResponse,
};

impl ApiClient {
    /// Page through the community feed.
    pub async fn stories(&self, filter: &StoryFilter) -> Result<StoriesResponse, ApiError> {
        let mut req = self
            .get("/stories")
            .query("page", filter.page)
            .query("limit", filter.limit)
            .query("sort", filter.sort.as_str());
        if let Some(category) = &filter.category {
            req = req.query("category", category);
        }
        self.execute(req).await
    }

    pub async fn story(&self, id: &str) -> Result<Story, ApiError> {
        let response: StoryResponse = self.execute(self.get(&format!("/stories/{id}"))).await?;
        Ok(response.story)
    }

    /// Publish an anonymized story to the community feed.
    pub async fn create_story(&self, story: &CreateStoryRequest) -> Result<Story, ApiError> {
        let response: StoryResponse = self.execute(self.post("/stories").json(story)?).await?;
        Ok(response.story)
    }

    /// Toggle the caller's like on a story; returns the new count and state.
    pub async fn like_story(&self, id: &str) -> Result<LikeResponse, ApiError> {
        self.execute(self.post(&format!("/stories/{id}/like"))).await
    }

    /// Report a story for moderation.
    pub async fn flag_story(&self, id: &str, reason: &str) -> Result<(), ApiError> {
        let req = self
            .post(&format!("/stories/{id}/flag"))
            .json(&FlagRequest {
                reason: reason.into(),
            })?;
        let _: serde_json::Value = self.execute(req).await?;
        Ok(())
    }

    pub async fn story_categories(&self) -> Result<Vec<String>, ApiError> {
        let response: CategoriesResponse =
            self.execute(self.get("/stories/categories/list")).await?;
        Ok(response.categories)
    }

    /// Stories authored by the current user.
    pub async fn my_stories(&self, limit: u32) -> Result<StoriesResponse, ApiError> {
        self.execute(self.get("/stories/user/my-stories").query("limit", limit))
            .await
    }
}

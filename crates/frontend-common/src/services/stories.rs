//! Community story API service

use moodlog_http::ApiError;
use moodlog_http::types::{
    CreateStoryRequest, LikeResponse, StoriesResponse, Story, StoryFilter,
};

use crate::client::{api, watch_session};

#[derive(Clone)]
pub struct StoryService;

impl StoryService {
    pub fn new() -> Self {
        Self
    }

    pub async fn list(&self, filter: &StoryFilter) -> Result<StoriesResponse, ApiError> {
        api()?.stories(filter).await.map_err(watch_session)
    }

    pub async fn story(&self, id: &str) -> Result<Story, ApiError> {
        api()?.story(id).await.map_err(watch_session)
    }

    pub async fn create(&self, request: &CreateStoryRequest) -> Result<Story, ApiError> {
        api()?.create_story(request).await.map_err(watch_session)
    }

    pub async fn like(&self, id: &str) -> Result<LikeResponse, ApiError> {
        api()?.like_story(id).await.map_err(watch_session)
    }

    pub async fn flag(&self, id: &str, reason: &str) -> Result<(), ApiError> {
        api()?.flag_story(id, reason).await.map_err(watch_session)
    }

    pub async fn categories(&self) -> Result<Vec<String>, ApiError> {
        api()?.story_categories().await.map_err(watch_session)
    }

    pub async fn my_stories(&self, limit: u32) -> Result<StoriesResponse, ApiError> {
        api()?.my_stories(limit).await.map_err(watch_session)
    }
}

impl Default for StoryService {
    fn default() -> Self {
        Self::new()
    }
}

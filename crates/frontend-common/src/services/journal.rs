//! Journal API service

use chrono::NaiveDate;
use moodlog_http::ApiError;
use moodlog_http::types::{EntryResponse, JournalEntry, MoodTrendsResponse, SaveEntryRequest};

use crate::client::{api, watch_session};

#[derive(Clone)]
pub struct JournalService;

impl JournalService {
    pub fn new() -> Self {
        Self
    }

    pub async fn recent(&self, limit: u32) -> Result<Vec<JournalEntry>, ApiError> {
        api()?.recent_entries(limit).await.map_err(watch_session)
    }

    /// The entry for a calendar date; a 404 means nothing was written.
    pub async fn entry(&self, date: NaiveDate) -> Result<JournalEntry, ApiError> {
        api()?.entry(date).await.map_err(watch_session)
    }

    pub async fn save(
        &self,
        content: &str,
        mood: u8,
        mood_emoji: &str,
    ) -> Result<EntryResponse, ApiError> {
        let request = SaveEntryRequest {
            content: content.into(),
            mood,
            mood_emoji: mood_emoji.into(),
        };
        api()?.save_entry(&request).await.map_err(watch_session)
    }

    pub async fn delete(&self, date: NaiveDate) -> Result<(), ApiError> {
        api()?.delete_entry(date).await.map_err(watch_session)
    }

    pub async fn mood_trends(&self, days: u32) -> Result<MoodTrendsResponse, ApiError> {
        api()?.mood_trends(days).await.map_err(watch_session)
    }
}

impl Default for JournalService {
    fn default() -> Self {
        Self::new()
    }
}

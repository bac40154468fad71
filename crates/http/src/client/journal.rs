//! Journal API client methods

use chrono::NaiveDate;

use super::{ApiClient, error::ApiError};
use crate::types::{
    EntryResponse, JournalEntry, MoodTrendsResponse, RecentEntriesResponse, SaveEntryRequest,
};

impl ApiClient {
    /// Most recent entries, newest first.
    pub async fn recent_entries(&self, limit: u32) -> Result<Vec<JournalEntry>, ApiError> {
        let response: RecentEntriesResponse = self
            .execute(self.get("/journal/recent").query("limit", limit))
            .await?;
        Ok(response.entries)
    }

    /// The entry for a calendar date. A 404 means no entry exists that day.
    pub async fn entry(&self, date: NaiveDate) -> Result<JournalEntry, ApiError> {
        let response: EntryResponse = self
            .execute(self.get(&format!("/journal/entry/{date}")))
            .await?;
        Ok(response.entry)
    }

    /// Create or update today's entry.
    pub async fn save_entry(&self, entry: &SaveEntryRequest) -> Result<EntryResponse, ApiError> {
        self.execute(self.post("/journal/entry").json(entry)?).await
    }

    pub async fn delete_entry(&self, date: NaiveDate) -> Result<(), ApiError> {
        let _: serde_json::Value = self
            .execute(self.delete(&format!("/journal/entry/{date}")))
            .await?;
        Ok(())
    }

    /// Aggregated mood data over the trailing `days` window.
    pub async fn mood_trends(&self, days: u32) -> Result<MoodTrendsResponse, ApiError> {
        self.execute(self.get("/journal/mood-trends").query("days", days))
            .await
    }
}

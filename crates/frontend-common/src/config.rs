//! Frontend configuration

/// Application-wide constants.
pub struct AppConfig;

impl AppConfig {
    /// Default API endpoint for local development; overridden at build time
    /// through the `MOODLOG_API_URL` environment variable.
    pub const DEFAULT_API_URL: &'static str = "http://localhost:5000/api";

    /// Journal entry length cap, matching the server-side validation.
    pub const ENTRY_MAX_CHARS: usize = 5000;

    /// How many recent entries the dashboard sidebar shows.
    pub const RECENT_ENTRIES_LIMIT: u32 = 5;

    /// Maximum number of tags on a community story.
    pub const MAX_STORY_TAGS: usize = 5;

    /// How long a toast stays on screen, in milliseconds.
    pub const TOAST_DISMISS_MS: u32 = 4000;
}

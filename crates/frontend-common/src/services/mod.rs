mod ai;
mod auth;
mod journal;
mod stories;

pub use ai::AiService;
pub use auth::AuthService;
pub use journal::JournalService;
pub use stories::StoryService;

mod ai_health;
mod dashboard;
mod journal;
mod login;
mod mood_trends;
mod new_story;
mod profile;
mod stories;
mod story_detail;

pub use ai_health::AiHealthPage;
pub use dashboard::DashboardPage;
pub use journal::{JournalPage, JournalQuery};
pub use login::LoginPage;
pub use mood_trends::MoodTrendsPage;
pub use new_story::NewStoryPage;
pub use profile::ProfilePage;
pub use stories::StoriesPage;
pub use story_detail::StoryDetailPage;

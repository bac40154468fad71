//! Chat UI for the MoodLog AI health assistant
//!
//! Message bubbles, an auto-resizing input, and the local-storage-backed
//! conversation history the assistant page persists between visits.

pub mod components;
pub mod history;
pub mod styles;
pub mod types;

pub use components::{ChatInput, ChatPanel, MessageBubble, MessageList, TypingIndicator};
pub use types::{ChatMessage, ChatRole};

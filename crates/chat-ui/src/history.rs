//! Local-storage-backed conversation history
//!
//! The assistant conversation survives page reloads by living under a single
//! origin-scoped storage key. An empty store is seeded with a fixed welcome
//! message so the page never renders an empty transcript.

use gloo::storage::{LocalStorage, Storage};

use crate::types::ChatMessage;

/// Storage key for the persisted conversation.
pub const HISTORY_KEY: &str = "aiHealthMessages";

/// Upper bound on stored turns; the oldest overflow is dropped first.
pub const MAX_STORED_MESSAGES: usize = 200;

const WELCOME: &str = "Hello! I'm your AI Health Journalist. I'm here to provide \
health and wellness guidance, answer your questions, and support your mental \
health journey. How can I help you today?";

pub fn welcome_message() -> ChatMessage {
    ChatMessage::assistant(WELCOME)
}

/// The stored conversation, seeded with the welcome message when empty.
pub fn load() -> Vec<ChatMessage> {
    let stored: Vec<ChatMessage> = LocalStorage::get(HISTORY_KEY).unwrap_or_default();
    if stored.is_empty() {
        let seeded = vec![welcome_message()];
        save(&seeded);
        seeded
    } else {
        stored
    }
}

/// Persist the conversation, capped at [`MAX_STORED_MESSAGES`].
pub fn save(messages: &[ChatMessage]) {
    let _ = LocalStorage::set(HISTORY_KEY, trimmed(messages));
}

/// Reset the conversation back to the welcome seed.
pub fn clear() -> Vec<ChatMessage> {
    let seeded = vec![welcome_message()];
    save(&seeded);
    seeded
}

fn trimmed(messages: &[ChatMessage]) -> &[ChatMessage] {
    let excess = messages.len().saturating_sub(MAX_STORED_MESSAGES);
    &messages[excess..]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ChatRole;

    fn turns(count: usize) -> Vec<ChatMessage> {
        (0..count)
            .map(|i| ChatMessage::new(ChatRole::User, format!("turn {i}")))
            .collect()
    }

    #[test]
    fn short_conversations_are_kept_whole() {
        let messages = turns(3);
        assert_eq!(trimmed(&messages).len(), 3);
        assert_eq!(trimmed(&messages)[0].content, "turn 0");
    }

    #[test]
    fn overflow_drops_the_oldest_turns_first() {
        let messages = turns(MAX_STORED_MESSAGES + 5);
        let kept = trimmed(&messages);
        assert_eq!(kept.len(), MAX_STORED_MESSAGES);
        assert_eq!(kept[0].content, "turn 5");
        assert_eq!(kept.last().unwrap().content, format!("turn {}", MAX_STORED_MESSAGES + 4));
    }
}

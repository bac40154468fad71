mod chat_input;
mod chat_panel;
mod message;
mod message_list;
mod typing_indicator;

pub use chat_input::ChatInput;
pub use chat_panel::ChatPanel;
pub use message::MessageBubble;
pub use message_list::MessageList;
pub use typing_indicator::TypingIndicator;

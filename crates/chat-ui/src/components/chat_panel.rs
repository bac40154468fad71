use crate::components::{ChatInput, MessageList, TypingIndicator};
use crate::styles::{CONTAINER_BG, FLEX_COL, combine_styles};
use crate::types::ChatMessage;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct ChatPanelProps {
    pub messages: Vec<ChatMessage>,
    pub on_send: Callback<String>,
    /// True while a reply is in flight; disables input and shows the
    /// typing indicator.
    #[prop_or_default]
    pub busy: bool,
    #[prop_or_default]
    pub placeholder: Option<String>,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(ChatPanel)]
pub fn chat_panel(props: &ChatPanelProps) -> Html {
    let ChatPanelProps {
        messages,
        on_send,
        busy,
        placeholder,
        class,
    } = props;

    html! {
        <div class={classes!(combine_styles(&[FLEX_COL, "h-full", CONTAINER_BG, "rounded-lg", "overflow-hidden"]), class.clone())}>
            <MessageList messages={messages.clone()} class="flex-1 overflow-y-auto" />
            if *busy {
                <TypingIndicator />
            }
            <ChatInput
                on_send={on_send.clone()}
                placeholder={placeholder.clone()}
                disabled={*busy}
            />
        </div>
    }
}

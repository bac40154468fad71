use crate::styles::{
    ASSISTANT_BUBBLE_COLORS, MUTED_TEXT, USER_BUBBLE_COLORS, USER_TIME_TEXT, combine_styles,
};
use crate::types::{ChatMessage, ChatRole};
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct MessageBubbleProps {
    pub message: ChatMessage,
}

#[function_component(MessageBubble)]
pub fn message_bubble(props: &MessageBubbleProps) -> Html {
    let message = &props.message;
    let (row, bubble, time) = match message.role {
        ChatRole::User => ("flex justify-end", USER_BUBBLE_COLORS, USER_TIME_TEXT),
        ChatRole::Assistant => ("flex justify-start", ASSISTANT_BUBBLE_COLORS, MUTED_TEXT),
    };

    html! {
        <div class={row}>
            <div class={combine_styles(&["max-w-[80%] rounded-lg px-4 py-2", bubble])}>
                <p class="text-sm whitespace-pre-wrap">{ &message.content }</p>
                <p class={combine_styles(&["text-xs mt-1", time])}>{ message.time_label() }</p>
            </div>
        </div>
    }
}

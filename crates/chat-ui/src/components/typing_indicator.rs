use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct TypingIndicatorProps {
    #[prop_or_default]
    pub class: Classes,
}

/// Three-dot pulse shown while the assistant is composing a reply.
#[function_component(TypingIndicator)]
pub fn typing_indicator(props: &TypingIndicatorProps) -> Html {
    html! {
        <div class={classes!("flex", "justify-start", "px-4", "pb-4", props.class.clone())}>
            <div class="bg-gray-100 rounded-lg px-4 py-3 flex gap-1">
                <span class="w-2 h-2 rounded-full bg-gray-400 animate-bounce"></span>
                <span class="w-2 h-2 rounded-full bg-gray-400 animate-bounce" style="animation-delay: 0.1s;"></span>
                <span class="w-2 h-2 rounded-full bg-gray-400 animate-bounce" style="animation-delay: 0.2s;"></span>
            </div>
        </div>
    }
}

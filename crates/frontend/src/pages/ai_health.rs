use moodlog_chat_ui::{ChatMessage, ChatPanel, history};
use moodlog_frontend_common::services::AiService;
use moodlog_frontend_common::use_toasts;
use moodlog_http::types::ChatTurn;
use yew::prelude::*;

const APOLOGY: &str =
    "I apologize, but I'm having trouble responding right now. Please try again in a moment.";

#[function_component(AiHealthPage)]
pub fn ai_health_page() -> Html {
    let toasts = use_toasts();

    let messages = use_state(history::load);
    let busy = use_state(|| false);

    let on_send = {
        let toasts = toasts.clone();
        let messages = messages.clone();
        let busy = busy.clone();
        Callback::from(move |text: String| {
            if *busy {
                return;
            }
            busy.set(true);

            // The prior conversation goes along so the assistant keeps context.
            let prior: Vec<ChatTurn> = messages
                .iter()
                .map(|message| ChatTurn {
                    role: message.role.as_str().to_string(),
                    content: message.content.clone(),
                })
                .collect();

            let mut transcript = (*messages).clone();
            transcript.push(ChatMessage::user(text.trim()));
            history::save(&transcript);
            messages.set(transcript.clone());

            let toasts = toasts.clone();
            let messages = messages.clone();
            let busy = busy.clone();
            let text = text.trim().to_string();
            wasm_bindgen_futures::spawn_local(async move {
                let reply = match AiService::new().chat(&text, &prior).await {
                    Ok(response) => ChatMessage::assistant(response.response),
                    Err(error) => {
                        tracing::debug!(%error, "assistant reply failed");
                        toasts.error("Failed to get AI response. Please try again.");
                        ChatMessage::assistant(APOLOGY)
                    }
                };
                transcript.push(reply);
                history::save(&transcript);
                messages.set(transcript);
                busy.set(false);
            });
        })
    };

    let on_clear = {
        let messages = messages.clone();
        Callback::from(move |_: MouseEvent| {
            messages.set(history::clear());
        })
    };

    html! {
        <div class="max-w-4xl mx-auto h-[calc(100vh-8rem)] flex flex-col">
            <div class="bg-white rounded-lg shadow-sm p-4 mb-4">
                <div class="flex items-center space-x-3">
                    <div class="p-2 bg-gradient-to-br from-indigo-500 to-purple-600 rounded-lg">
                        <span class="text-xl">{"✨"}</span>
                    </div>
                    <div class="flex-1">
                        <h1 class="text-xl font-bold text-gray-900">{"AI Health Journalist"}</h1>
                        <p class="text-sm text-gray-600">{"Your ultimate health assistance"}</p>
                    </div>
                    <button
                        onclick={on_clear}
                        class="p-2 text-gray-400 hover:text-red-600 hover:bg-red-50 rounded-lg transition-colors"
                        title="Clear Chat"
                    >
                        {"🗑"}
                    </button>
                </div>
            </div>

            <div class="flex-1 bg-white rounded-lg shadow-sm overflow-hidden">
                <ChatPanel
                    messages={(*messages).clone()}
                    busy={*busy}
                    on_send={on_send}
                    placeholder="Ask me about health, wellness, or mental health..."
                />
            </div>
        </div>
    }
}

use chrono::Utc;
use moodlog_frontend_common::services::StoryService;
use moodlog_frontend_common::{Spinner, use_toasts};
use moodlog_http::types::Story;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::pages::stories::{category_color, time_ago};

const FLAG_REASONS: [&str; 4] = ["inappropriate", "spam", "harmful", "other"];

#[derive(Properties, Clone, PartialEq)]
pub struct StoryDetailProps {
    pub id: String,
}

#[function_component(StoryDetailPage)]
pub fn story_detail_page(props: &StoryDetailProps) -> Html {
    let navigator = use_navigator().expect("navigator not available");
    let toasts = use_toasts();

    let loading = use_state(|| true);
    let story = use_state(|| Option::<Story>::None);
    let show_flag_modal = use_state(|| false);
    let flag_reason = use_state(String::new);

    {
        let loading = loading.clone();
        let story = story.clone();
        let toasts = toasts.clone();
        let navigator = navigator.clone();
        use_effect_with(props.id.clone(), move |id| {
            let id = id.clone();
            loading.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                match StoryService::new().story(&id).await {
                    Ok(found) => story.set(Some(found)),
                    Err(error) => {
                        tracing::debug!(%error, "failed to load story");
                        toasts.error("Failed to load story");
                        navigator.push(&Route::Stories);
                    }
                }
                loading.set(false);
            });
        });
    }

    let go_back = {
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| navigator.push(&Route::Stories))
    };

    let on_like = {
        let story = story.clone();
        let toasts = toasts.clone();
        let id = props.id.clone();
        Callback::from(move |_: MouseEvent| {
            let story = story.clone();
            let toasts = toasts.clone();
            let id = id.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match StoryService::new().like(&id).await {
                    Ok(liked) => {
                        if let Some(mut current) = (*story).clone() {
                            current.likes = liked.likes;
                            current.user_liked = liked.user_liked;
                            story.set(Some(current));
                        }
                    }
                    Err(error) => {
                        tracing::debug!(%error, "failed to like story");
                        toasts.error("Failed to like story");
                    }
                }
            });
        })
    };

    let open_flag_modal = {
        let show_flag_modal = show_flag_modal.clone();
        Callback::from(move |_: MouseEvent| show_flag_modal.set(true))
    };

    let close_flag_modal = {
        let show_flag_modal = show_flag_modal.clone();
        let flag_reason = flag_reason.clone();
        Callback::from(move |_: MouseEvent| {
            show_flag_modal.set(false);
            flag_reason.set(String::new());
        })
    };

    let on_flag = {
        let toasts = toasts.clone();
        let show_flag_modal = show_flag_modal.clone();
        let flag_reason = flag_reason.clone();
        let id = props.id.clone();
        Callback::from(move |_: MouseEvent| {
            if flag_reason.is_empty() {
                toasts.error("Please select a reason for flagging");
                return;
            }
            let toasts = toasts.clone();
            let show_flag_modal = show_flag_modal.clone();
            let flag_reason = flag_reason.clone();
            let id = id.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match StoryService::new().flag(&id, &flag_reason).await {
                    Ok(()) => {
                        show_flag_modal.set(false);
                        flag_reason.set(String::new());
                        toasts.success("Story flagged successfully");
                    }
                    Err(error) => {
                        tracing::debug!(%error, "failed to flag story");
                        toasts.error("Failed to flag story");
                    }
                }
            });
        })
    };

    if *loading {
        return html! { <Spinner /> };
    }

    let Some(current) = (*story).clone() else {
        return html! {
            <div class="text-center py-12">
                <p class="text-gray-500">{"Story not found."}</p>
                <button
                    onclick={go_back}
                    class="mt-4 bg-blue-600 text-white px-4 py-2 rounded-md hover:bg-blue-700"
                >
                    {"Back to Stories"}
                </button>
            </div>
        };
    };

    html! {
        <div class="space-y-6">
            <div class="bg-white rounded-lg shadow-sm p-6">
                <div class="flex items-center justify-between">
                    <button
                        onclick={go_back}
                        class="flex items-center text-gray-600 hover:text-gray-900"
                    >
                        {"← Back to Stories"}
                    </button>
                    <button
                        onclick={open_flag_modal}
                        class="p-2 text-gray-400 hover:text-gray-600 hover:bg-gray-100 rounded-md"
                        title="Flag Story"
                    >
                        {"⚑"}
                    </button>
                </div>
            </div>

            <div class="bg-white rounded-lg shadow-sm p-6">
                <h1 class="text-3xl font-bold text-gray-900 mb-4">{&current.title}</h1>

                <div class="flex items-center justify-between mb-4">
                    <div class="flex items-center space-x-4">
                        <span class={format!("inline-flex items-center px-3 py-1 rounded-full text-sm font-medium {}", category_color(&current.category))}>
                            {&current.category}
                        </span>
                        if let Some(created_at) = current.created_at {
                            <span class="text-sm text-gray-500">{time_ago(created_at, Utc::now())}</span>
                        }
                    </div>

                    <button
                        onclick={on_like}
                        class={if current.user_liked { "flex items-center px-3 py-2 rounded-md text-red-600 bg-red-50" } else { "flex items-center px-3 py-2 rounded-md text-gray-500 hover:text-red-600 hover:bg-gray-50" }}
                    >
                        {if current.user_liked { "♥ " } else { "♡ " }}
                        {format!("{} {}", current.likes, if current.likes == 1 { "like" } else { "likes" })}
                    </button>
                </div>

                if !current.tags.is_empty() {
                    <div class="flex flex-wrap gap-2 mb-6">
                        {for current.tags.iter().map(|tag| html! {
                            <span key={tag.clone()} class="inline-block bg-gray-100 text-gray-700 text-sm px-3 py-1 rounded-full">
                                {tag}
                            </span>
                        })}
                    </div>
                }

                <div class="text-gray-900 leading-relaxed whitespace-pre-wrap">
                    {current.content.clone().unwrap_or_default()}
                </div>
            </div>

            if *show_flag_modal {
                <div class="fixed inset-0 bg-black bg-opacity-50 flex items-center justify-center z-50">
                    <div class="bg-white rounded-lg p-6 max-w-md w-full mx-4">
                        <h3 class="text-lg font-semibold text-gray-900 mb-4">{"Flag Story"}</h3>
                        <p class="text-gray-600 mb-4">{"Please select a reason for flagging this story:"}</p>

                        <div class="space-y-2 mb-4">
                            {for FLAG_REASONS.iter().map(|reason| {
                                let flag_reason = flag_reason.clone();
                                let value = *reason;
                                let on_pick = {
                                    let flag_reason = flag_reason.clone();
                                    Callback::from(move |_: Event| flag_reason.set(value.to_string()))
                                };
                                html! {
                                    <label key={value} class="flex items-center">
                                        <input
                                            type="radio"
                                            name="flagReason"
                                            value={value}
                                            checked={*flag_reason == value}
                                            onchange={on_pick}
                                            class="mr-2"
                                        />
                                        <span class="capitalize">{value}</span>
                                    </label>
                                }
                            })}
                        </div>

                        <div class="flex space-x-3">
                            <button
                                onclick={close_flag_modal}
                                class="flex-1 px-4 py-2 text-gray-700 bg-gray-100 rounded-md hover:bg-gray-200"
                            >
                                {"Cancel"}
                            </button>
                            <button
                                onclick={on_flag}
                                class="flex-1 px-4 py-2 text-white bg-red-600 rounded-md hover:bg-red-700"
                            >
                                {"Flag Story"}
                            </button>
                        </div>
                    </div>
                </div>
            }
        </div>
    }
}

use moodlog_frontend_common::config::AppConfig;
use moodlog_frontend_common::services::StoryService;
use moodlog_frontend_common::use_toasts;
use moodlog_http::types::CreateStoryRequest;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;

#[function_component(NewStoryPage)]
pub fn new_story_page() -> Html {
    let navigator = use_navigator().expect("navigator not available");
    let toasts = use_toasts();

    let saving = use_state(|| false);
    let categories = use_state(Vec::<String>::new);
    let title = use_state(String::new);
    let content = use_state(String::new);
    let category = use_state(String::new);
    let tags = use_state(Vec::<String>::new);
    let tag_input = use_state(String::new);

    {
        let categories = categories.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match StoryService::new().categories().await {
                    Ok(found) => categories.set(found),
                    Err(error) => tracing::debug!(%error, "failed to load story categories"),
                }
            });
        });
    }

    let on_title = {
        let title = title.clone();
        Callback::from(move |e: InputEvent| {
            title.set(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };
    let on_content = {
        let content = content.clone();
        Callback::from(move |e: InputEvent| {
            content.set(e.target_unchecked_into::<HtmlTextAreaElement>().value());
        })
    };
    let on_category = {
        let category = category.clone();
        Callback::from(move |e: Event| {
            category.set(e.target_unchecked_into::<HtmlSelectElement>().value());
        })
    };
    let on_tag_input = {
        let tag_input = tag_input.clone();
        Callback::from(move |e: InputEvent| {
            tag_input.set(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };

    // Enter adds a tag, capped at MAX_STORY_TAGS with duplicates ignored.
    let on_tag_keydown = {
        let tags = tags.clone();
        let tag_input = tag_input.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                e.prevent_default();
                let candidate = tag_input.trim().to_string();
                if candidate.is_empty() {
                    return;
                }
                let mut next = (*tags).clone();
                if !next.contains(&candidate) && next.len() < AppConfig::MAX_STORY_TAGS {
                    next.push(candidate);
                    tags.set(next);
                }
                tag_input.set(String::new());
            }
        })
    };

    let remove_tag = {
        let tags = tags.clone();
        move |target: String| {
            let tags = tags.clone();
            Callback::from(move |_: MouseEvent| {
                let next = tags.iter().filter(|tag| **tag != target).cloned().collect();
                tags.set(next);
            })
        }
    };

    let go_back = {
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| navigator.push(&Route::Stories))
    };

    let on_submit = {
        let toasts = toasts.clone();
        let navigator = navigator.clone();
        let saving = saving.clone();
        let title = title.clone();
        let content = content.clone();
        let category = category.clone();
        let tags = tags.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if title.trim().is_empty() || content.trim().is_empty() || category.is_empty() {
                toasts.error("Please fill in all required fields");
                return;
            }
            saving.set(true);

            let toasts = toasts.clone();
            let navigator = navigator.clone();
            let saving = saving.clone();
            let request = CreateStoryRequest {
                title: title.trim().to_string(),
                content: (*content).clone(),
                category: (*category).clone(),
                tags: (*tags).clone(),
            };
            wasm_bindgen_futures::spawn_local(async move {
                match StoryService::new().create(&request).await {
                    Ok(_) => {
                        toasts.success("Story shared successfully!");
                        navigator.push(&Route::Stories);
                    }
                    Err(error) => toasts.api_error(&error),
                }
                saving.set(false);
            });
        })
    };

    html! {
        <div class="max-w-4xl mx-auto space-y-4">
            <div class="bg-white rounded-lg shadow-sm p-4">
                <div class="flex items-center space-x-3">
                    <button
                        onclick={go_back}
                        class="p-1.5 text-gray-400 hover:text-gray-600 hover:bg-gray-100 rounded-md"
                    >
                        {"←"}
                    </button>
                    <div>
                        <h1 class="text-xl font-bold text-gray-900">{"Share Your Story"}</h1>
                        <p class="text-sm text-gray-600 mt-1">
                            {"Share your experience anonymously to help others"}
                        </p>
                    </div>
                </div>
            </div>

            <div class="bg-white rounded-lg shadow-sm p-4">
                <form onsubmit={on_submit} class="space-y-4">
                    <div>
                        <label for="title" class="block text-sm font-medium text-gray-700 mb-1.5">
                            {"Title *"}
                        </label>
                        <input
                            id="title"
                            type="text"
                            value={(*title).clone()}
                            oninput={on_title}
                            maxlength="120"
                            class="block w-full border border-gray-300 rounded-md px-3 py-2 focus:outline-none focus:ring-blue-500 focus:border-blue-500"
                            placeholder="Give your story a title"
                        />
                    </div>

                    <div>
                        <label for="category" class="block text-sm font-medium text-gray-700 mb-1.5">
                            {"Category *"}
                        </label>
                        <select
                            id="category"
                            onchange={on_category}
                            class="block w-full border border-gray-300 rounded-md px-3 py-2 focus:outline-none focus:ring-blue-500 focus:border-blue-500"
                        >
                            <option value="" selected={category.is_empty()}>{"Choose a category"}</option>
                            {for categories.iter().map(|option| html! {
                                <option
                                    key={option.clone()}
                                    value={option.clone()}
                                    selected={*category == *option}
                                >
                                    {option}
                                </option>
                            })}
                        </select>
                    </div>

                    <div>
                        <label for="story-content" class="block text-sm font-medium text-gray-700 mb-1.5">
                            {"Your Story *"}
                        </label>
                        <textarea
                            id="story-content"
                            value={(*content).clone()}
                            oninput={on_content}
                            rows="10"
                            class="block w-full border border-gray-300 rounded-md px-3 py-2 focus:outline-none focus:ring-blue-500 focus:border-blue-500 resize-none"
                            placeholder="Share your experience, what helped you, and what you learned..."
                        />
                    </div>

                    <div>
                        <label for="tags" class="block text-sm font-medium text-gray-700 mb-1.5">
                            {format!("Tags (up to {}, press Enter to add)", AppConfig::MAX_STORY_TAGS)}
                        </label>
                        <input
                            id="tags"
                            type="text"
                            value={(*tag_input).clone()}
                            oninput={on_tag_input}
                            onkeydown={on_tag_keydown}
                            class="block w-full border border-gray-300 rounded-md px-3 py-2 focus:outline-none focus:ring-blue-500 focus:border-blue-500"
                            placeholder="e.g. therapy, mindfulness"
                        />
                        if !tags.is_empty() {
                            <div class="flex flex-wrap gap-2 mt-2">
                                {for tags.iter().map(|tag| html! {
                                    <span
                                        key={tag.clone()}
                                        class="inline-flex items-center bg-blue-100 text-blue-800 text-xs px-2 py-1 rounded-full"
                                    >
                                        {tag}
                                        <button
                                            type="button"
                                            onclick={remove_tag(tag.clone())}
                                            class="ml-1.5 text-blue-600 hover:text-blue-900"
                                        >
                                            {"✕"}
                                        </button>
                                    </span>
                                })}
                            </div>
                        }
                    </div>

                    <button
                        type="submit"
                        disabled={*saving}
                        class="w-full bg-blue-600 text-white py-2.5 px-4 rounded-md hover:bg-blue-700 disabled:opacity-50 disabled:cursor-not-allowed font-medium"
                    >
                        {if *saving { "Sharing..." } else { "Share Story" }}
                    </button>
                </form>
            </div>
        </div>
    }
}

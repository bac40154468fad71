use chrono::{Days, Local, NaiveDate};
use moodlog_frontend_common::config::AppConfig;
use moodlog_frontend_common::mood;
use moodlog_frontend_common::services::JournalService;
use moodlog_frontend_common::{Spinner, use_toasts};
use moodlog_http::types::JournalEntry;
use serde::{Deserialize, Serialize};
use web_sys::HtmlTextAreaElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::components::MoodPicker;

/// `?date=YYYY-MM-DD` deep link into a specific day.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct JournalQuery {
    pub date: Option<String>,
}

#[function_component(JournalPage)]
pub fn journal_page() -> Html {
    let navigator = use_navigator().expect("navigator not available");
    let location = use_location().expect("location not available");
    let toasts = use_toasts();

    let current_date = {
        let query = location.query::<JournalQuery>().ok();
        let from_query = query
            .and_then(|q| q.date)
            .and_then(|raw| NaiveDate::parse_from_str(&raw, "%Y-%m-%d").ok());
        from_query.unwrap_or_else(|| Local::now().date_naive())
    };

    let loading = use_state(|| true);
    let saving = use_state(|| false);
    let deleting = use_state(|| false);
    let editing = use_state(|| false);
    let entry = use_state(|| Option::<JournalEntry>::None);
    let content = use_state(String::new);
    let selected_mood = use_state(|| mood::DEFAULT_MOOD);

    {
        let loading = loading.clone();
        let editing = editing.clone();
        let entry = entry.clone();
        let content = content.clone();
        let selected_mood = selected_mood.clone();
        let toasts = toasts.clone();
        use_effect_with(current_date, move |date| {
            let date = *date;
            loading.set(true);
            editing.set(false);
            wasm_bindgen_futures::spawn_local(async move {
                match JournalService::new().entry(date).await {
                    Ok(found) => {
                        content.set(found.content.clone());
                        selected_mood.set(found.mood);
                        entry.set(Some(found));
                    }
                    Err(error) => {
                        if error.status() != Some(404) {
                            toasts.error("Failed to load journal entry");
                        }
                        content.set(String::new());
                        selected_mood.set(mood::DEFAULT_MOOD);
                        entry.set(None);
                    }
                }
                loading.set(false);
            });
        });
    }

    let navigate_days = {
        let navigator = navigator.clone();
        move |from: NaiveDate, forward: bool| {
            Callback::from({
                let navigator = navigator.clone();
                move |_: MouseEvent| {
                    let next = if forward {
                        from.checked_add_days(Days::new(1))
                    } else {
                        from.checked_sub_days(Days::new(1))
                    };
                    if let Some(next) = next {
                        let query = JournalQuery {
                            date: Some(next.to_string()),
                        };
                        let _ = navigator.push_with_query(&Route::Journal, &query);
                    }
                }
            })
        }
    };

    let on_mood = {
        let selected_mood = selected_mood.clone();
        Callback::from(move |value: u8| selected_mood.set(value))
    };

    let on_content = {
        let content = content.clone();
        Callback::from(move |e: InputEvent| {
            content.set(e.target_unchecked_into::<HtmlTextAreaElement>().value());
        })
    };

    let start_editing = {
        let editing = editing.clone();
        Callback::from(move |_: MouseEvent| editing.set(true))
    };

    let cancel_editing = {
        let editing = editing.clone();
        let entry = entry.clone();
        let content = content.clone();
        let selected_mood = selected_mood.clone();
        Callback::from(move |_: MouseEvent| {
            editing.set(false);
            match entry.as_ref() {
                Some(existing) => {
                    content.set(existing.content.clone());
                    selected_mood.set(existing.mood);
                }
                None => {
                    content.set(String::new());
                    selected_mood.set(mood::DEFAULT_MOOD);
                }
            }
        })
    };

    let on_submit = {
        let toasts = toasts.clone();
        let saving = saving.clone();
        let editing = editing.clone();
        let entry = entry.clone();
        let content = content.clone();
        let selected_mood = selected_mood.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if content.trim().is_empty() {
                toasts.error("Please write something in your journal entry");
                return;
            }
            saving.set(true);

            let toasts = toasts.clone();
            let saving = saving.clone();
            let editing = editing.clone();
            let entry = entry.clone();
            let text = (*content).clone();
            let score = *selected_mood;
            wasm_bindgen_futures::spawn_local(async move {
                match JournalService::new().save(&text, score, mood::emoji(score)).await {
                    Ok(saved) => {
                        entry.set(Some(saved.entry));
                        editing.set(false);
                        toasts.success(saved.message.unwrap_or_else(|| "Journal entry saved".into()));
                    }
                    Err(error) => {
                        tracing::debug!(%error, "failed to save journal entry");
                        toasts.error("Failed to save journal entry");
                    }
                }
                saving.set(false);
            });
        })
    };

    let on_delete = {
        let toasts = toasts.clone();
        let deleting = deleting.clone();
        let entry = entry.clone();
        let content = content.clone();
        let selected_mood = selected_mood.clone();
        let date = current_date;
        Callback::from(move |_: MouseEvent| {
            let confirmed = web_sys::window()
                .and_then(|window| {
                    window
                        .confirm_with_message(
                            "Are you sure you want to delete this entry? This action cannot be undone.",
                        )
                        .ok()
                })
                .unwrap_or(false);
            if !confirmed {
                return;
            }
            deleting.set(true);

            let toasts = toasts.clone();
            let deleting = deleting.clone();
            let entry = entry.clone();
            let content = content.clone();
            let selected_mood = selected_mood.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match JournalService::new().delete(date).await {
                    Ok(()) => {
                        entry.set(None);
                        content.set(String::new());
                        selected_mood.set(mood::DEFAULT_MOOD);
                        toasts.success("Journal entry deleted successfully");
                    }
                    Err(error) => {
                        tracing::debug!(%error, "failed to delete journal entry");
                        toasts.error("Failed to delete journal entry");
                    }
                }
                deleting.set(false);
            });
        })
    };

    if *loading {
        return html! { <Spinner /> };
    }

    let is_today = current_date == Local::now().date_naive();

    html! {
        <div class="space-y-6">
            <div class="bg-white rounded-lg shadow-sm p-6">
                <h1 class="text-2xl font-bold text-gray-900">{"Journal"}</h1>
                <p class="text-gray-600 mt-1">{"Reflect on your thoughts and feelings"}</p>
            </div>

            <div class="bg-white rounded-lg shadow-sm p-6">
                <div class="flex items-center justify-between">
                    <button
                        onclick={navigate_days(current_date, false)}
                        class="p-2 rounded-md text-gray-400 hover:text-gray-600 hover:bg-gray-100"
                    >
                        {"‹"}
                    </button>
                    <div class="text-center">
                        <h2 class="text-lg font-semibold text-gray-900">
                            {current_date.format("%A, %B %-d, %Y").to_string()}
                        </h2>
                        if is_today {
                            <span class="inline-block bg-blue-100 text-blue-800 text-xs px-2 py-1 rounded-full mt-1">
                                {"Today"}
                            </span>
                        }
                    </div>
                    <button
                        onclick={navigate_days(current_date, true)}
                        class="p-2 rounded-md text-gray-400 hover:text-gray-600 hover:bg-gray-100"
                    >
                        {"›"}
                    </button>
                </div>
            </div>

            <div class="bg-white rounded-lg shadow-sm p-6">
                if !*editing {
                    <div>
                        <div class="flex items-center justify-between mb-6">
                            <h3 class="text-lg font-semibold text-gray-900">
                                {if entry.is_some() { "Journal Entry" } else { "No Entry for This Date" }}
                            </h3>
                            if entry.is_some() {
                                <div class="flex space-x-2">
                                    <button
                                        onclick={start_editing.clone()}
                                        class="flex items-center px-3 py-2 text-sm font-medium text-blue-600 bg-blue-50 rounded-md hover:bg-blue-100"
                                    >
                                        {"Edit"}
                                    </button>
                                    <button
                                        onclick={on_delete}
                                        disabled={*deleting}
                                        class="flex items-center px-3 py-2 text-sm font-medium text-red-600 bg-red-50 rounded-md hover:bg-red-100 disabled:opacity-50"
                                    >
                                        {if *deleting { "Deleting..." } else { "Delete" }}
                                    </button>
                                </div>
                            }
                        </div>

                        if let Some(existing) = entry.as_ref() {
                            <div class="space-y-4">
                                <div class="flex items-center space-x-3">
                                    <span class="text-3xl">
                                        {existing.mood_emoji.clone().unwrap_or_else(|| mood::emoji(existing.mood).to_string())}
                                    </span>
                                    <div>
                                        <p class="text-sm text-gray-600">{"Mood"}</p>
                                        <p class="font-medium text-gray-900">{mood::label(existing.mood)}</p>
                                    </div>
                                </div>

                                <div>
                                    <p class="text-sm text-gray-600 mb-2">{"Entry"}</p>
                                    <div class="bg-gray-50 rounded-lg p-4">
                                        <p class="text-gray-900 whitespace-pre-wrap">{&existing.content}</p>
                                    </div>
                                </div>

                                if !existing.tags.is_empty() {
                                    <div>
                                        <p class="text-sm text-gray-600 mb-2">{"Tags"}</p>
                                        <div class="flex flex-wrap gap-2">
                                            {for existing.tags.iter().map(|tag| html! {
                                                <span key={tag.clone()} class="inline-block bg-blue-100 text-blue-800 text-xs px-2 py-1 rounded-full">
                                                    {tag}
                                                </span>
                                            })}
                                        </div>
                                    </div>
                                }

                                if let Some(updated_at) = existing.updated_at {
                                    <div class="text-xs text-gray-500 pt-4 border-t border-gray-200">
                                        {if existing.is_edited { "Last edited: " } else { "Created: " }}
                                        {updated_at.with_timezone(&Local).format("%-m/%-d/%Y, %H:%M").to_string()}
                                    </div>
                                }
                            </div>
                        } else {
                            <div class="text-center py-12">
                                <p class="text-gray-500 mb-4">{"No journal entry for this date."}</p>
                                <button
                                    onclick={start_editing}
                                    class="bg-blue-600 text-white px-4 py-2 rounded-md hover:bg-blue-700"
                                >
                                    {"Write an Entry"}
                                </button>
                            </div>
                        }
                    </div>
                } else {
                    <div>
                        <div class="flex items-center justify-between mb-6">
                            <h3 class="text-lg font-semibold text-gray-900">
                                {if entry.is_some() { "Edit Entry" } else { "New Entry" }}
                            </h3>
                            <button
                                onclick={cancel_editing}
                                class="p-2 text-gray-400 hover:text-gray-600 hover:bg-gray-100 rounded-md"
                            >
                                {"✕"}
                            </button>
                        </div>

                        <form onsubmit={on_submit} class="space-y-4">
                            <div>
                                <label class="block text-sm font-medium text-gray-700 mb-2">
                                    {"How are you feeling today?"}
                                </label>
                                <MoodPicker selected={*selected_mood} on_select={on_mood} />
                            </div>

                            <div>
                                <label for="content" class="block text-sm font-medium text-gray-700 mb-2">
                                    {"What's on your mind?"}
                                </label>
                                <textarea
                                    id="content"
                                    value={(*content).clone()}
                                    oninput={on_content}
                                    rows="8"
                                    maxlength={AppConfig::ENTRY_MAX_CHARS.to_string()}
                                    class="block w-full border border-gray-300 rounded-md px-3 py-2 focus:outline-none focus:ring-blue-500 focus:border-blue-500 resize-none"
                                    placeholder="Write about your day, your thoughts, or anything you'd like to reflect on..."
                                />
                                <div class="text-xs text-gray-500 mt-1 text-right">
                                    {format!("{}/{}", content.len(), AppConfig::ENTRY_MAX_CHARS)}
                                </div>
                            </div>

                            <div class="flex space-x-3 pt-4">
                                <button
                                    type="submit"
                                    disabled={*saving || content.trim().is_empty()}
                                    class="flex-1 bg-blue-600 text-white py-2 px-4 rounded-md hover:bg-blue-700 disabled:opacity-50 disabled:cursor-not-allowed"
                                >
                                    {if *saving { "Saving..." } else { "Save Entry" }}
                                </button>
                            </div>
                        </form>
                    </div>
                }
            </div>
        </div>
    }
}

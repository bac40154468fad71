use chrono::{Local, NaiveDate, Timelike};
use moodlog_frontend_common::auth::use_auth;
use moodlog_frontend_common::config::AppConfig;
use moodlog_frontend_common::mood;
use moodlog_frontend_common::services::{AiService, JournalService};
use moodlog_frontend_common::{Spinner, use_toasts};
use moodlog_http::types::JournalEntry;
use web_sys::HtmlTextAreaElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::components::MoodPicker;

#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let auth = use_auth();
    let navigator = use_navigator().expect("navigator not available");
    let toasts = use_toasts();

    let loading = use_state(|| true);
    let saving = use_state(|| false);
    let recent = use_state(Vec::<JournalEntry>::new);
    let today_entry = use_state(|| Option::<JournalEntry>::None);
    let content = use_state(String::new);
    let selected_mood = use_state(|| mood::DEFAULT_MOOD);

    {
        let loading = loading.clone();
        let recent = recent.clone();
        let today_entry = today_entry.clone();
        let content = content.clone();
        let selected_mood = selected_mood.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                let service = JournalService::new();

                match service.recent(AppConfig::RECENT_ENTRIES_LIMIT).await {
                    Ok(entries) => recent.set(entries),
                    Err(error) => {
                        tracing::debug!(%error, "recent entries not available");
                        recent.set(Vec::new());
                    }
                }

                match service.entry(Local::now().date_naive()).await {
                    Ok(entry) => {
                        content.set(entry.content.clone());
                        selected_mood.set(entry.mood);
                        today_entry.set(Some(entry));
                    }
                    Err(error) => {
                        if error.status() != Some(404) {
                            tracing::debug!(%error, "could not load today's entry");
                        }
                        today_entry.set(None);
                    }
                }

                loading.set(false);
            });
        });
    }

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

    let on_submit = {
        let toasts = toasts.clone();
        let saving = saving.clone();
        let recent = recent.clone();
        let today_entry = today_entry.clone();
        let content = content.clone();
        let selected_mood = selected_mood.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if content.trim().is_empty() {
                toasts.error("Please write something in your journal entry");
                return;
            }
            if *saving {
                return;
            }
            saving.set(true);

            let toasts = toasts.clone();
            let saving = saving.clone();
            let recent = recent.clone();
            let today_entry = today_entry.clone();
            let selected_mood = selected_mood.clone();
            let text = (*content).clone();
            wasm_bindgen_futures::spawn_local(async move {
                let journal = JournalService::new();

                // Let the assistant pick the score; keep the manual choice
                // when the analysis is unavailable.
                let final_mood = match AiService::new().analyze_mood(&text).await {
                    Ok(suggested) => suggested,
                    Err(error) => {
                        tracing::debug!(%error, "mood analysis failed, using manual selection");
                        *selected_mood
                    }
                };

                match journal.save(&text, final_mood, mood::emoji(final_mood)).await {
                    Ok(saved) => {
                        selected_mood.set(saved.entry.mood);
                        today_entry.set(Some(saved.entry));
                        toasts.success(saved.message.unwrap_or_else(|| "Journal entry saved".into()));
                        if let Ok(entries) = journal.recent(AppConfig::RECENT_ENTRIES_LIMIT).await {
                            recent.set(entries);
                        }
                    }
                    Err(error) => {
                        tracing::debug!(%error, "failed to save journal entry");
                        toasts.error("Failed to save journal entry. Please try again.");
                    }
                }
                saving.set(false);
            });
        })
    };

    if *loading {
        return html! { <Spinner text="Loading your dashboard..." /> };
    }

    let user_label = auth
        .user
        .as_ref()
        .map(|user| user.label().to_string())
        .unwrap_or_default();
    let today = Local::now().date_naive();

    let quick_action = |label: &'static str, description: &'static str, target: Route| {
        let navigator = navigator.clone();
        let on_click = Callback::from(move |_: MouseEvent| navigator.push(&target));
        html! {
            <button
                onclick={on_click}
                class="w-full flex flex-col p-3 text-left rounded-lg border border-gray-200 hover:bg-blue-50 hover:border-blue-300 transition-all"
            >
                <span class="font-semibold text-gray-900 text-sm">{label}</span>
                <span class="text-xs text-gray-500">{description}</span>
            </button>
        }
    };

    html! {
        <div class="max-w-6xl mx-auto">
            <div class="mb-6">
                <h1 class="text-2xl lg:text-3xl font-bold text-gray-900 mb-1">
                    {format!("{}, {}! 👋", greeting(Local::now().hour()), user_label)}
                </h1>
                <p class="text-sm lg:text-base text-gray-600">
                    {"How are you feeling today? Take a moment to reflect and journal your thoughts."}
                </p>
            </div>

            <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-3 mb-6">
                <div class="bg-white rounded-lg p-3 shadow-sm border border-gray-200">
                    <p class="text-xs text-gray-500">{"Recent Entries"}</p>
                    <p class="text-lg font-bold text-gray-900">{recent.len()}</p>
                </div>
                <div class="bg-white rounded-lg p-3 shadow-sm border border-gray-200">
                    <p class="text-xs text-gray-500">{"Last Entry"}</p>
                    <p class="text-lg font-bold text-gray-900">
                        {recent.first().map(|entry| relative_date(&entry.date, today)).unwrap_or_else(|| "None".into())}
                    </p>
                </div>
                <div class="bg-white rounded-lg p-3 shadow-sm border border-gray-200 sm:col-span-2 lg:col-span-1">
                    <p class="text-xs text-gray-500">{"Current Streak"}</p>
                    <p class="text-lg font-bold text-gray-900">
                        {if recent.is_empty() { "Start Today" } else { "Active" }}
                    </p>
                </div>
            </div>

            <div class="grid grid-cols-1 lg:grid-cols-3 gap-4 lg:gap-6">
                <div class="lg:col-span-2">
                    <div class="bg-white rounded-xl shadow-sm border border-gray-200 p-4 lg:p-6">
                        <div class="mb-4">
                            <h2 class="text-lg lg:text-xl font-bold text-gray-900 mb-1">
                                {if today_entry.is_some() { "Edit Today's Entry" } else { "Today's Journal Entry" }}
                            </h2>
                            <p class="text-sm text-gray-600">
                                {if today_entry.is_some() { "Update your thoughts and feelings" } else { "Start your daily reflection" }}
                            </p>
                        </div>

                        <form onsubmit={on_submit} class="space-y-4">
                            <div>
                                <label class="block text-sm font-semibold text-gray-900 mb-3">
                                    {"How are you feeling today?"}
                                </label>
                                <MoodPicker selected={*selected_mood} on_select={on_mood} />
                            </div>

                            <div>
                                <label for="content" class="block text-sm font-semibold text-gray-900 mb-3">
                                    {"What's on your mind? "}
                                    <span class="text-purple-600 text-xs">{"(AI will auto-detect mood)"}</span>
                                </label>
                                <textarea
                                    id="content"
                                    value={(*content).clone()}
                                    oninput={on_content}
                                    rows="6"
                                    maxlength={AppConfig::ENTRY_MAX_CHARS.to_string()}
                                    class="block w-full border border-gray-300 rounded-lg px-3 py-2.5 focus:outline-none focus:ring-2 focus:ring-blue-500 focus:border-blue-500 resize-none text-gray-900 text-sm leading-relaxed"
                                    placeholder="Write about your day, your thoughts, feelings, or anything you'd like to reflect on..."
                                />
                                <div class="text-xs text-gray-500 mt-2 text-right">
                                    {format!("{}/{} characters", content.len(), AppConfig::ENTRY_MAX_CHARS)}
                                </div>
                            </div>

                            <button
                                type="submit"
                                disabled={*saving || content.trim().is_empty()}
                                class="w-full bg-gradient-to-r from-blue-600 to-indigo-600 text-white py-2.5 px-4 rounded-lg hover:from-blue-700 hover:to-indigo-700 disabled:opacity-50 disabled:cursor-not-allowed font-semibold text-sm shadow-md"
                            >
                                {match (*saving, today_entry.is_some()) {
                                    (true, _) => "Saving...",
                                    (false, true) => "Update Entry",
                                    (false, false) => "Save Entry",
                                }}
                            </button>
                        </form>
                    </div>
                </div>

                <div class="space-y-4">
                    <div class="bg-white rounded-lg shadow-sm border border-gray-200 p-4">
                        <h3 class="text-base font-bold text-gray-900 mb-4">{"Quick Actions"}</h3>
                        <div class="space-y-3">
                            {quick_action("View All Entries", "Browse your journal history", Route::Journal)}
                            {quick_action("Mood Trends", "See your mood patterns", Route::MoodTrends)}
                            {quick_action("Community", "Read and share stories", Route::Stories)}
                            {quick_action("AI Health Journalist", "Your ultimate health assistance", Route::AiHealth)}
                        </div>
                    </div>

                    <div class="bg-white rounded-lg shadow-sm border border-gray-200 p-4">
                        <h3 class="text-base font-bold text-gray-900 mb-4">{"Recent Entries"}</h3>
                        if recent.is_empty() {
                            <div class="text-center py-6">
                                <div class="text-4xl mb-3">{"📝"}</div>
                                <p class="text-gray-500 text-sm font-medium mb-1.5">{"No recent entries yet."}</p>
                                <p class="text-gray-400 text-xs">{"Start journaling to see your entries here!"}</p>
                            </div>
                        } else {
                            <div class="space-y-3">
                                {for recent.iter().map(|entry| {
                                    let navigator = navigator.clone();
                                    let date = entry.date.chars().take(10).collect::<String>();
                                    let on_click = Callback::from(move |_: MouseEvent| {
                                        let query = crate::pages::JournalQuery { date: Some(date.clone()) };
                                        let _ = navigator.push_with_query(&Route::Journal, &query);
                                    });
                                    html! {
                                        <div
                                            key={entry.date.clone()}
                                            onclick={on_click}
                                            class="p-3 rounded-lg border border-gray-200 hover:bg-gray-50 cursor-pointer transition-all"
                                        >
                                            <div class="flex items-start justify-between">
                                                <div class="flex-1 min-w-0">
                                                    <p class="text-xs text-gray-900 line-clamp-2 leading-relaxed font-medium">
                                                        {&entry.content}
                                                    </p>
                                                    <p class="text-xs text-gray-500 mt-1.5 font-medium">
                                                        {relative_date(&entry.date, today)}
                                                    </p>
                                                </div>
                                                <span class="text-xl ml-2.5 flex-shrink-0">
                                                    {mood::emoji(entry.mood)}
                                                </span>
                                            </div>
                                        </div>
                                    }
                                })}
                            </div>
                        }
                    </div>
                </div>
            </div>
        </div>
    }
}

fn greeting(hour: u32) -> &'static str {
    if hour < 12 {
        "Good morning"
    } else if hour < 17 {
        "Good afternoon"
    } else {
        "Good evening"
    }
}

/// "Today", "Yesterday", or the plain calendar date.
fn relative_date(date_iso: &str, today: NaiveDate) -> String {
    let day: String = date_iso.chars().take(10).collect();
    match NaiveDate::parse_from_str(&day, "%Y-%m-%d") {
        Ok(date) if date == today => "Today".into(),
        Ok(date) if today.pred_opt() == Some(date) => "Yesterday".into(),
        Ok(date) => date.format("%-m/%-d/%Y").to_string(),
        Err(_) => date_iso.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greeting_follows_the_clock() {
        assert_eq!(greeting(8), "Good morning");
        assert_eq!(greeting(13), "Good afternoon");
        assert_eq!(greeting(21), "Good evening");
    }

    #[test]
    fn relative_date_names_today_and_yesterday() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 10).unwrap();
        assert_eq!(relative_date("2025-06-10T00:00:00.000Z", today), "Today");
        assert_eq!(relative_date("2025-06-09T12:30:00.000Z", today), "Yesterday");
        assert_eq!(relative_date("2025-06-01T00:00:00.000Z", today), "6/1/2025");
    }

    #[test]
    fn relative_date_passes_through_unparseable_input() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 10).unwrap();
        assert_eq!(relative_date("soon", today), "soon");
    }
}

use chrono::Local;
use moodlog_frontend_common::auth::{AuthAction, use_auth};
use moodlog_frontend_common::services::{AuthService, JournalService, StoryService};
use moodlog_frontend_common::use_toasts;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Default)]
struct ActivityStats {
    journal_entries: u32,
    average_mood: f64,
    stories_count: u32,
}

#[function_component(ProfilePage)]
pub fn profile_page() -> Html {
    let auth = use_auth();
    let toasts = use_toasts();

    let editing = use_state(|| false);
    let saving = use_state(|| false);
    let stats = use_state(|| Option::<ActivityStats>::None);
    let display_name = use_state(|| {
        auth.user
            .as_ref()
            .and_then(|user| user.display_name.clone())
            .unwrap_or_default()
    });

    {
        let stats = stats.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                let trends = JournalService::new().mood_trends(30).await;
                let stories = StoryService::new().my_stories(1).await;
                match (trends, stories) {
                    (Ok(trends), Ok(stories)) => stats.set(Some(ActivityStats {
                        journal_entries: trends.statistics.total_entries,
                        average_mood: trends.statistics.average_mood,
                        stories_count: stories.pagination.total_stories,
                    })),
                    (trends, stories) => {
                        if let Err(error) = trends {
                            tracing::debug!(%error, "failed to load journal stats");
                        }
                        if let Err(error) = stories {
                            tracing::debug!(%error, "failed to load story stats");
                        }
                    }
                }
            });
        });
    }

    let start_editing = {
        let editing = editing.clone();
        Callback::from(move |_: MouseEvent| editing.set(true))
    };

    let cancel_editing = {
        let editing = editing.clone();
        let display_name = display_name.clone();
        let current = auth
            .user
            .as_ref()
            .and_then(|user| user.display_name.clone())
            .unwrap_or_default();
        Callback::from(move |_: MouseEvent| {
            editing.set(false);
            display_name.set(current.clone());
        })
    };

    let on_name = {
        let display_name = display_name.clone();
        Callback::from(move |e: InputEvent| {
            display_name.set(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };

    let on_submit = {
        let auth = auth.clone();
        let toasts = toasts.clone();
        let editing = editing.clone();
        let saving = saving.clone();
        let display_name = display_name.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let name = display_name.trim().to_string();
            if name.is_empty() {
                toasts.error("Display name cannot be empty");
                return;
            }
            saving.set(true);

            let auth = auth.clone();
            let toasts = toasts.clone();
            let editing = editing.clone();
            let saving = saving.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match AuthService::new().update_profile(&name).await {
                    Ok(user) => {
                        auth.dispatch(AuthAction::SignedIn(user));
                        toasts.success("Profile updated successfully!");
                        editing.set(false);
                    }
                    Err(error) => toasts.api_error(&error),
                }
                saving.set(false);
            });
        })
    };

    let Some(user) = auth.user.clone() else {
        return html! {
            <div class="text-center py-12">
                <p class="text-gray-500">{"Loading profile..."}</p>
            </div>
        };
    };

    html! {
        <div class="space-y-6">
            <div class="bg-white rounded-lg shadow-sm p-6">
                <h1 class="text-2xl font-bold text-gray-900">{"Profile"}</h1>
                <p class="text-gray-600 mt-1">{"Manage your account and view your activity"}</p>
            </div>

            <div class="grid grid-cols-1 lg:grid-cols-3 gap-6">
                <div class="lg:col-span-2">
                    <div class="bg-white rounded-lg shadow-sm p-6">
                        <div class="flex items-center justify-between mb-6">
                            <h2 class="text-lg font-semibold text-gray-900">{"Account Information"}</h2>
                            if !*editing {
                                <button
                                    onclick={start_editing}
                                    class="flex items-center px-3 py-2 text-sm font-medium text-blue-600 bg-blue-50 rounded-md hover:bg-blue-100"
                                >
                                    {"Edit"}
                                </button>
                            }
                        </div>

                        if *editing {
                            <form onsubmit={on_submit} class="space-y-4">
                                <div>
                                    <label class="block text-sm font-medium text-gray-700 mb-1">
                                        {"Display name"}
                                    </label>
                                    <input
                                        type="text"
                                        value={(*display_name).clone()}
                                        oninput={on_name}
                                        class="block w-full border border-gray-300 rounded-md px-3 py-2 focus:outline-none focus:ring-blue-500 focus:border-blue-500"
                                    />
                                </div>
                                <div class="flex space-x-3">
                                    <button
                                        type="submit"
                                        disabled={*saving}
                                        class="px-4 py-2 bg-blue-600 text-white rounded-md hover:bg-blue-700 disabled:opacity-50"
                                    >
                                        {if *saving { "Saving..." } else { "Save" }}
                                    </button>
                                    <button
                                        type="button"
                                        onclick={cancel_editing}
                                        class="px-4 py-2 text-gray-700 bg-gray-100 rounded-md hover:bg-gray-200"
                                    >
                                        {"Cancel"}
                                    </button>
                                </div>
                            </form>
                        } else {
                            <dl class="space-y-4">
                                <div>
                                    <dt class="text-sm text-gray-600">{"Display name"}</dt>
                                    <dd class="font-medium text-gray-900">{user.label()}</dd>
                                </div>
                                if let Some(username) = &user.username {
                                    <div>
                                        <dt class="text-sm text-gray-600">{"Username"}</dt>
                                        <dd class="font-medium text-gray-900">{username}</dd>
                                    </div>
                                }
                                if user.is_anonymous {
                                    <div>
                                        <dt class="text-sm text-gray-600">{"Account type"}</dt>
                                        <dd class="font-medium text-gray-900">{"Anonymous"}</dd>
                                    </div>
                                }
                                if let Some(created_at) = user.created_at {
                                    <div>
                                        <dt class="text-sm text-gray-600">{"Member since"}</dt>
                                        <dd class="font-medium text-gray-900">
                                            {created_at.with_timezone(&Local).format("%B %-d, %Y").to_string()}
                                        </dd>
                                    </div>
                                }
                            </dl>
                        }
                    </div>
                </div>

                <div class="bg-white rounded-lg shadow-sm p-6">
                    <h2 class="text-lg font-semibold text-gray-900 mb-4">{"Last 30 Days"}</h2>
                    if let Some(stats) = *stats {
                        <dl class="space-y-4">
                            <div class="flex items-center justify-between">
                                <dt class="text-sm text-gray-600">{"Journal entries"}</dt>
                                <dd class="text-lg font-bold text-gray-900">{stats.journal_entries}</dd>
                            </div>
                            <div class="flex items-center justify-between">
                                <dt class="text-sm text-gray-600">{"Average mood"}</dt>
                                <dd class="text-lg font-bold text-gray-900">{format!("{:.1}", stats.average_mood)}</dd>
                            </div>
                            <div class="flex items-center justify-between">
                                <dt class="text-sm text-gray-600">{"Stories shared"}</dt>
                                <dd class="text-lg font-bold text-gray-900">{stats.stories_count}</dd>
                            </div>
                        </dl>
                    } else {
                        <p class="text-sm text-gray-400">{"Activity stats are not available yet."}</p>
                    }
                </div>
            </div>
        </div>
    }
}

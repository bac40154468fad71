use chrono::{DateTime, Utc};
use moodlog_frontend_common::services::StoryService;
use moodlog_frontend_common::{Spinner, use_toasts};
use moodlog_http::types::{Pagination, Story, StoryFilter, StorySort};
use web_sys::HtmlSelectElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;

pub(super) fn category_color(category: &str) -> &'static str {
    match category {
        "Anxiety" => "bg-red-100 text-red-800",
        "Depression" => "bg-blue-100 text-blue-800",
        "Recovery" => "bg-green-100 text-green-800",
        "Coping" => "bg-yellow-100 text-yellow-800",
        "Hope" => "bg-purple-100 text-purple-800",
        "Gratitude" => "bg-pink-100 text-pink-800",
        _ => "bg-gray-100 text-gray-800",
    }
}

/// "Yesterday", "4 days ago", or the plain date for older stories.
pub(super) fn time_ago(created: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let days = (now - created).num_days();
    match days {
        0 => "Today".into(),
        1 => "Yesterday".into(),
        2..=6 => format!("{days} days ago"),
        _ => created.format("%-m/%-d/%Y").to_string(),
    }
}

fn sort_label(sort: StorySort) -> &'static str {
    match sort {
        StorySort::Newest => "Newest First",
        StorySort::Oldest => "Oldest First",
        StorySort::Popular => "Most Popular",
    }
}

#[function_component(StoriesPage)]
pub fn stories_page() -> Html {
    let navigator = use_navigator().expect("navigator not available");
    let toasts = use_toasts();

    let loading = use_state(|| true);
    let filter = use_state(StoryFilter::default);
    let categories = use_state(Vec::<String>::new);
    let stories = use_state(Vec::<Story>::new);
    let pagination = use_state(Pagination::default);
    let show_filters = use_state(|| false);

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

    {
        let loading = loading.clone();
        let stories = stories.clone();
        let pagination = pagination.clone();
        let toasts = toasts.clone();
        use_effect_with((*filter).clone(), move |filter| {
            let filter = filter.clone();
            loading.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                match StoryService::new().list(&filter).await {
                    Ok(response) => {
                        stories.set(response.stories);
                        pagination.set(response.pagination);
                    }
                    Err(error) => {
                        tracing::debug!(%error, "failed to load stories");
                        toasts.error("Failed to load stories");
                    }
                }
                loading.set(false);
            });
        });
    }

    let on_category = {
        let filter = filter.clone();
        Callback::from(move |e: Event| {
            let value = e.target_unchecked_into::<HtmlSelectElement>().value();
            let mut next = (*filter).clone();
            next.category = if value.is_empty() { None } else { Some(value) };
            next.page = 1;
            filter.set(next);
        })
    };

    let on_sort = {
        let filter = filter.clone();
        Callback::from(move |e: Event| {
            let value = e.target_unchecked_into::<HtmlSelectElement>().value();
            let mut next = (*filter).clone();
            next.sort = match value.as_str() {
                "oldest" => StorySort::Oldest,
                "popular" => StorySort::Popular,
                _ => StorySort::Newest,
            };
            next.page = 1;
            filter.set(next);
        })
    };

    let turn_page = {
        let filter = filter.clone();
        move |delta: i32| {
            let filter = filter.clone();
            Callback::from(move |_: MouseEvent| {
                let mut next = (*filter).clone();
                next.page = next.page.saturating_add_signed(delta).max(1);
                filter.set(next);
            })
        }
    };

    let on_like = {
        let stories = stories.clone();
        let toasts = toasts.clone();
        move |id: String| {
            let stories = stories.clone();
            let toasts = toasts.clone();
            Callback::from(move |e: MouseEvent| {
                e.stop_propagation();
                let stories = stories.clone();
                let toasts = toasts.clone();
                let id = id.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    match StoryService::new().like(&id).await {
                        Ok(liked) => {
                            let updated = stories
                                .iter()
                                .map(|story| {
                                    if story.id == id {
                                        let mut story = story.clone();
                                        story.likes = liked.likes;
                                        story.user_liked = liked.user_liked;
                                        story
                                    } else {
                                        story.clone()
                                    }
                                })
                                .collect();
                            stories.set(updated);
                        }
                        Err(error) => {
                            tracing::debug!(%error, "failed to like story");
                            toasts.error("Failed to like story");
                        }
                    }
                });
            })
        }
    };

    let toggle_filters = {
        let show_filters = show_filters.clone();
        Callback::from(move |_: MouseEvent| show_filters.set(!*show_filters))
    };

    let go_new_story = {
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| navigator.push(&Route::NewStory))
    };

    if *loading {
        return html! { <Spinner /> };
    }

    let now = Utc::now();

    html! {
        <div class="max-w-6xl mx-auto space-y-4">
            <div class="bg-white rounded-lg shadow-sm p-4">
                <div class="flex items-center justify-between">
                    <div>
                        <h1 class="text-xl font-bold text-gray-900">{"Community Stories"}</h1>
                        <p class="text-sm text-gray-600 mt-1">
                            {"Share and read anonymous stories of hope, recovery, and support"}
                        </p>
                    </div>
                    <div class="flex space-x-2">
                        <button
                            onclick={toggle_filters}
                            class="flex items-center px-2.5 py-1.5 text-xs font-medium text-gray-700 bg-gray-100 rounded-md hover:bg-gray-200"
                        >
                            {"Filters"}
                        </button>
                        <button
                            onclick={go_new_story.clone()}
                            class="flex items-center px-3 py-1.5 text-xs font-medium text-white bg-blue-600 rounded-md hover:bg-blue-700"
                        >
                            {"Share Story"}
                        </button>
                    </div>
                </div>
            </div>

            if *show_filters {
                <div class="bg-white rounded-lg shadow-sm p-4">
                    <div class="grid grid-cols-1 md:grid-cols-3 gap-3">
                        <div>
                            <label class="block text-xs font-medium text-gray-700 mb-1.5">{"Category"}</label>
                            <select
                                onchange={on_category}
                                class="block w-full border border-gray-300 rounded-md px-2 py-1.5 text-xs focus:outline-none focus:ring-blue-500 focus:border-blue-500"
                            >
                                <option value="" selected={filter.category.is_none()}>{"All Categories"}</option>
                                {for categories.iter().map(|category| html! {
                                    <option
                                        key={category.clone()}
                                        value={category.clone()}
                                        selected={filter.category.as_deref() == Some(category)}
                                    >
                                        {category}
                                    </option>
                                })}
                            </select>
                        </div>
                        <div>
                            <label class="block text-xs font-medium text-gray-700 mb-1.5">{"Sort By"}</label>
                            <select
                                onchange={on_sort}
                                class="block w-full border border-gray-300 rounded-md px-2 py-1.5 text-xs focus:outline-none focus:ring-blue-500 focus:border-blue-500"
                            >
                                {for StorySort::ALL.iter().map(|sort| html! {
                                    <option
                                        key={sort.as_str()}
                                        value={sort.as_str()}
                                        selected={filter.sort == *sort}
                                    >
                                        {sort_label(*sort)}
                                    </option>
                                })}
                            </select>
                        </div>
                    </div>
                </div>
            }

            <div class="space-y-3">
                if stories.is_empty() {
                    <div class="bg-white rounded-lg shadow-sm p-8 text-center">
                        <h3 class="text-base font-medium text-gray-900 mb-1.5">{"No stories found"}</h3>
                        <p class="text-sm text-gray-500 mb-3">
                            {match &filter.category {
                                Some(category) => format!("No stories in the \"{category}\" category yet."),
                                None => "No stories have been shared yet.".to_string(),
                            }}
                        </p>
                        <button
                            onclick={go_new_story}
                            class="bg-blue-600 text-white px-3 py-1.5 rounded-md hover:bg-blue-700 text-sm"
                        >
                            {"Be the first to share"}
                        </button>
                    </div>
                } else {
                    {for stories.iter().map(|story| {
                        let open_story = {
                            let navigator = navigator.clone();
                            let id = story.id.clone();
                            Callback::from(move |_: MouseEvent| {
                                navigator.push(&Route::StoryDetail { id: id.clone() });
                            })
                        };
                        html! {
                            <div
                                key={story.id.clone()}
                                onclick={open_story}
                                class="bg-white rounded-lg shadow-sm p-4 hover:shadow-md transition-shadow cursor-pointer"
                            >
                                <h3 class="text-base font-semibold text-gray-900 mb-1.5">{&story.title}</h3>
                                if let Some(excerpt) = &story.excerpt {
                                    <p class="text-sm text-gray-600 line-clamp-3 mb-2.5">{excerpt}</p>
                                }

                                <div class="flex items-center justify-between">
                                    <div class="flex items-center space-x-3">
                                        <span class={format!("inline-flex items-center px-2 py-0.5 rounded-full text-xs font-medium {}", category_color(&story.category))}>
                                            {&story.category}
                                        </span>
                                        if let Some(created_at) = story.created_at {
                                            <span class="text-xs text-gray-500">{time_ago(created_at, now)}</span>
                                        }
                                    </div>
                                    <button
                                        onclick={on_like(story.id.clone())}
                                        class={if story.user_liked { "flex items-center text-xs text-red-600" } else { "flex items-center text-xs text-gray-500 hover:text-red-600" }}
                                    >
                                        {if story.user_liked { "♥ " } else { "♡ " }}
                                        {story.likes}
                                    </button>
                                </div>

                                if !story.tags.is_empty() {
                                    <div class="flex flex-wrap items-center gap-1 mt-2.5 pt-2.5 border-t border-gray-100">
                                        {for story.tags.iter().take(3).map(|tag| html! {
                                            <span key={tag.clone()} class="inline-block bg-gray-100 text-gray-700 text-xs px-1.5 py-0.5 rounded">
                                                {tag}
                                            </span>
                                        })}
                                        if story.tags.len() > 3 {
                                            <span class="text-xs text-gray-500">{format!("+{} more", story.tags.len() - 3)}</span>
                                        }
                                    </div>
                                }
                            </div>
                        }
                    })}
                }
            </div>

            if pagination.total_pages > 1 {
                <div class="bg-white rounded-lg shadow-sm p-4">
                    <div class="flex items-center justify-between">
                        <div class="text-xs text-gray-700">
                            {format!("Showing page {} of {}", pagination.current_page, pagination.total_pages)}
                        </div>
                        <div class="flex space-x-2">
                            <button
                                onclick={turn_page(-1)}
                                disabled={!pagination.has_prev}
                                class="px-2.5 py-1.5 text-xs font-medium text-gray-500 bg-white border border-gray-300 rounded-md hover:bg-gray-50 disabled:opacity-50 disabled:cursor-not-allowed"
                            >
                                {"Previous"}
                            </button>
                            <button
                                onclick={turn_page(1)}
                                disabled={!pagination.has_next}
                                class="px-2.5 py-1.5 text-xs font-medium text-gray-500 bg-white border border-gray-300 rounded-md hover:bg-gray-50 disabled:opacity-50 disabled:cursor-not-allowed"
                            >
                                {"Next"}
                            </button>
                        </div>
                    </div>
                </div>
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn time_ago_buckets_recent_dates() {
        let now = Utc.with_ymd_and_hms(2025, 6, 10, 12, 0, 0).unwrap();
        let days = |n: i64| now - chrono::Duration::days(n);
        assert_eq!(time_ago(days(0), now), "Today");
        assert_eq!(time_ago(days(1), now), "Yesterday");
        assert_eq!(time_ago(days(4), now), "4 days ago");
        assert_eq!(time_ago(days(30), now), "5/11/2025");
    }

    #[test]
    fn unknown_categories_get_the_neutral_badge() {
        assert_eq!(category_color("Hope"), "bg-purple-100 text-purple-800");
        assert_eq!(category_color("Something Else"), "bg-gray-100 text-gray-800");
    }
}

//! Application shell: sidebar navigation around every signed-in page

use moodlog_frontend_common::auth::{AuthAction, use_auth};
use moodlog_frontend_common::services::AuthService;
use moodlog_frontend_common::use_toasts;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;

const NAV_ITEMS: [(&str, &str, Route); 6] = [
    ("Dashboard", "Your daily overview", Route::Dashboard),
    ("Journal", "Write and manage entries", Route::Journal),
    ("Mood Trends", "Track your progress", Route::MoodTrends),
    ("Community", "Share and connect", Route::Stories),
    ("AI Health", "Your ultimate health assistance", Route::AiHealth),
    ("Profile", "Account settings", Route::Profile),
];

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Children,
}

#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    let auth = use_auth();
    let navigator = use_navigator().expect("navigator not available");
    let route = use_route::<Route>();
    let sidebar_open = use_state(|| false);
    let toasts = use_toasts();

    let user_label = auth
        .user
        .as_ref()
        .map(|user| user.label().to_string())
        .unwrap_or_default();
    let initial = user_label.chars().next().unwrap_or('?').to_string();
    let is_anonymous = auth.user.as_ref().is_some_and(|user| user.is_anonymous);

    let on_logout = {
        let auth = auth.clone();
        let navigator = navigator.clone();
        let toasts = toasts.clone();
        Callback::from(move |_: MouseEvent| {
            let auth = auth.clone();
            let navigator = navigator.clone();
            let toasts = toasts.clone();
            wasm_bindgen_futures::spawn_local(async move {
                // Best effort: the stored pair is cleared even when the
                // revocation call fails.
                let _ = AuthService::new().logout().await;
                auth.dispatch(AuthAction::SignedOut);
                toasts.success("Logged out successfully");
                navigator.push(&Route::Login);
            });
        })
    };

    let close_sidebar = {
        let sidebar_open = sidebar_open.clone();
        Callback::from(move |_: MouseEvent| sidebar_open.set(false))
    };
    let open_sidebar = {
        let sidebar_open = sidebar_open.clone();
        Callback::from(move |_: MouseEvent| sidebar_open.set(true))
    };

    let sidebar_classes = if *sidebar_open {
        "fixed inset-y-0 left-0 z-50 w-64 bg-white shadow-xl flex flex-col transform transition-all duration-300 translate-x-0 lg:relative lg:translate-x-0"
    } else {
        "fixed inset-y-0 left-0 z-50 w-64 bg-white shadow-xl flex flex-col transform transition-all duration-300 -translate-x-full lg:relative lg:translate-x-0"
    };

    html! {
        <div class="min-h-screen bg-gradient-to-br from-gray-50 to-blue-50">
            if *sidebar_open {
                <div class="fixed inset-0 z-40 lg:hidden" onclick={close_sidebar.clone()}></div>
            }

            <div class="flex">
                <div class={sidebar_classes}>
                    <div class="flex items-center justify-between h-16 px-4 border-b border-gray-100 bg-gradient-to-r from-blue-600 to-indigo-600">
                        <div>
                            <h1 class="text-lg font-bold text-white">{"MoodLog"}</h1>
                            <p class="text-xs text-blue-100">{"Mental Health Journal"}</p>
                        </div>
                        <button
                            onclick={close_sidebar.clone()}
                            class="lg:hidden p-1.5 rounded-lg text-white hover:bg-white hover:bg-opacity-20 transition-colors"
                        >
                            {"✕"}
                        </button>
                    </div>

                    <nav class="flex-1 px-3 py-4 space-y-1">
                        {for NAV_ITEMS.iter().map(|(name, description, target)| {
                            let active = route.as_ref() == Some(target);
                            let item_classes = if active {
                                "group flex items-center w-full px-3 py-2.5 text-sm font-medium rounded-lg transition-all duration-200 bg-gradient-to-r from-blue-500 to-indigo-500 text-white shadow-md"
                            } else {
                                "group flex items-center w-full px-3 py-2.5 text-sm font-medium rounded-lg transition-all duration-200 text-gray-700 hover:bg-gray-50 hover:text-gray-900"
                            };
                            let on_navigate = {
                                let navigator = navigator.clone();
                                let sidebar_open = sidebar_open.clone();
                                let target = target.clone();
                                Callback::from(move |_: MouseEvent| {
                                    navigator.push(&target);
                                    sidebar_open.set(false);
                                })
                            };
                            html! {
                                <button key={*name} onclick={on_navigate} class={item_classes}>
                                    <div class="flex-1 text-left">
                                        <div class="font-medium">{name}</div>
                                        <div class={if active { "text-xs mt-0.5 text-blue-100" } else { "text-xs mt-0.5 text-gray-500 group-hover:text-gray-600" }}>
                                            {description}
                                        </div>
                                    </div>
                                    if active {
                                        <div class="w-1.5 h-1.5 bg-white rounded-full"></div>
                                    }
                                </button>
                            }
                        })}
                    </nav>

                    <div class="p-3 border-t border-gray-100 bg-gray-50">
                        <div class="flex items-center p-2.5 bg-white rounded-lg shadow-sm border border-gray-200 mb-2">
                            <div class="w-8 h-8 bg-gradient-to-br from-blue-500 to-indigo-600 rounded-full flex items-center justify-center shadow-md">
                                <span class="text-white text-xs font-semibold">{initial.clone()}</span>
                            </div>
                            <div class="flex-1 min-w-0 ml-2.5">
                                <p class="text-sm font-semibold text-gray-900 truncate">{user_label.clone()}</p>
                                if is_anonymous {
                                    <p class="text-xs text-gray-500">{"Anonymous User"}</p>
                                }
                            </div>
                        </div>
                        <button
                            onclick={on_logout}
                            class="w-full flex items-center justify-center p-2 text-sm text-gray-600 hover:text-red-600 hover:bg-red-50 rounded-lg transition-all duration-200 border border-gray-200 hover:border-red-200"
                        >
                            {"Logout"}
                        </button>
                    </div>
                </div>

                <div class="flex-1">
                    <div class="lg:hidden flex items-center justify-between h-14 px-4 bg-white border-b border-gray-200 shadow-sm">
                        <button
                            onclick={open_sidebar}
                            class="p-1.5 rounded-lg text-gray-600 hover:bg-gray-100 transition-colors"
                        >
                            {"☰"}
                        </button>
                        <h1 class="text-base font-bold text-gray-900">{"MoodLog"}</h1>
                        <div class="w-8 h-8 bg-gradient-to-br from-blue-500 to-indigo-600 rounded-full flex items-center justify-center">
                            <span class="text-white text-xs font-semibold">{initial}</span>
                        </div>
                    </div>

                    <main class="min-h-screen p-4 lg:p-6">
                        {props.children.clone()}
                    </main>
                </div>
            </div>
        </div>
    }
}

use moodlog_frontend_common::auth::{AuthAction, use_auth};
use moodlog_frontend_common::services::AuthService;
use moodlog_frontend_common::use_toasts;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mode {
    Login,
    Register,
    Anonymous,
}

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let auth = use_auth();
    let navigator = use_navigator().expect("navigator not available");
    let toasts = use_toasts();

    let mode = use_state(|| Mode::Login);
    let username = use_state(String::new);
    let password = use_state(String::new);
    let display_name = use_state(String::new);
    let show_password = use_state(|| false);
    let loading = use_state(|| false);

    // Already signed in: straight to the dashboard.
    {
        let signed_in = auth.user.is_some();
        let navigator = navigator.clone();
        use_effect_with(signed_in, move |signed_in| {
            if *signed_in {
                navigator.push(&Route::Dashboard);
            }
        });
    }

    let set_mode = {
        let mode = mode.clone();
        let username = username.clone();
        let password = password.clone();
        let display_name = display_name.clone();
        let show_password = show_password.clone();
        Callback::from(move |next: Mode| {
            mode.set(next);
            username.set(String::new());
            password.set(String::new());
            display_name.set(String::new());
            show_password.set(false);
        })
    };

    let on_submit = {
        let auth = auth.clone();
        let toasts = toasts.clone();
        let mode = mode.clone();
        let username = username.clone();
        let password = password.clone();
        let display_name = display_name.clone();
        let loading = loading.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *loading {
                return;
            }
            loading.set(true);

            let auth = auth.clone();
            let toasts = toasts.clone();
            let loading = loading.clone();
            let mode = *mode;
            let username = (*username).clone();
            let password = (*password).clone();
            let display_name = (*display_name).clone();
            wasm_bindgen_futures::spawn_local(async move {
                let service = AuthService::new();
                let result = match mode {
                    Mode::Login => service.login(&username, &password).await,
                    Mode::Register => service.register(&username, &password, &display_name).await,
                    Mode::Anonymous => service.register_anonymous(&password, &display_name).await,
                };
                match result {
                    Ok(user) => {
                        let greeting = match mode {
                            Mode::Login => "Login successful!",
                            Mode::Register => "Registration successful!",
                            Mode::Anonymous => "Anonymous account created successfully!",
                        };
                        toasts.success(greeting);
                        auth.dispatch(AuthAction::SignedIn(user));
                    }
                    Err(error) => toasts.api_error(&error),
                }
                loading.set(false);
            });
        })
    };

    let text_input = |state: &UseStateHandle<String>| {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            state.set(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };

    let mode_tab = |label: &'static str, value: Mode| {
        let classes = if *mode == value {
            "flex-1 py-2 px-4 text-sm font-medium rounded-md transition-colors bg-white text-blue-600 shadow-sm"
        } else {
            "flex-1 py-2 px-4 text-sm font-medium rounded-md transition-colors text-gray-500 hover:text-gray-700"
        };
        let set_mode = set_mode.clone();
        html! {
            <button type="button" class={classes} onclick={Callback::from(move |_| set_mode.emit(value))}>
                {label}
            </button>
        }
    };

    let toggle_password = {
        let show_password = show_password.clone();
        Callback::from(move |_: MouseEvent| show_password.set(!*show_password))
    };

    html! {
        <div class="min-h-screen flex items-center justify-center bg-gradient-to-br from-blue-50 to-indigo-100 py-12 px-4">
            <div class="max-w-md w-full space-y-8">
                <div class="text-center">
                    <div class="mx-auto h-16 w-16 bg-blue-500 rounded-full flex items-center justify-center">
                        <span class="text-3xl">{"💙"}</span>
                    </div>
                    <h2 class="mt-6 text-3xl font-extrabold text-gray-900">{"Welcome to MoodLog"}</h2>
                    <p class="mt-2 text-sm text-gray-600">{"Your personal mental health journal"}</p>
                </div>

                <div class="flex rounded-lg bg-gray-100 p-1">
                    {mode_tab("Login", Mode::Login)}
                    {mode_tab("Register", Mode::Register)}
                    {mode_tab("Anonymous", Mode::Anonymous)}
                </div>

                <form class="mt-8 space-y-6" onsubmit={on_submit}>
                    <div class="space-y-4">
                        if *mode != Mode::Anonymous {
                            <div>
                                <label class="block text-sm font-medium text-gray-700 mb-1">{"Username"}</label>
                                <input
                                    type="text"
                                    value={(*username).clone()}
                                    oninput={text_input(&username)}
                                    class="block w-full border border-gray-300 rounded-md px-3 py-2 focus:outline-none focus:ring-blue-500 focus:border-blue-500"
                                    placeholder="Your username"
                                />
                            </div>
                        }
                        if *mode != Mode::Login {
                            <div>
                                <label class="block text-sm font-medium text-gray-700 mb-1">{"Display name"}</label>
                                <input
                                    type="text"
                                    value={(*display_name).clone()}
                                    oninput={text_input(&display_name)}
                                    class="block w-full border border-gray-300 rounded-md px-3 py-2 focus:outline-none focus:ring-blue-500 focus:border-blue-500"
                                    placeholder="How should we call you?"
                                />
                            </div>
                        }
                        <div>
                            <label class="block text-sm font-medium text-gray-700 mb-1">{"Password"}</label>
                            <div class="relative">
                                <input
                                    type={if *show_password { "text" } else { "password" }}
                                    value={(*password).clone()}
                                    oninput={text_input(&password)}
                                    class="block w-full border border-gray-300 rounded-md px-3 py-2 pr-10 focus:outline-none focus:ring-blue-500 focus:border-blue-500"
                                    placeholder="Your password"
                                />
                                <button
                                    type="button"
                                    onclick={toggle_password}
                                    class="absolute inset-y-0 right-0 px-3 text-gray-400 hover:text-gray-600"
                                >
                                    {if *show_password { "🙈" } else { "👁" }}
                                </button>
                            </div>
                        </div>
                    </div>

                    if *mode == Mode::Anonymous {
                        <p class="text-xs text-gray-500">
                            {"Anonymous accounts keep your identity private. Save your password — it is the only way back in."}
                        </p>
                    }

                    <button
                        type="submit"
                        disabled={*loading}
                        class="w-full bg-blue-600 text-white py-2.5 px-4 rounded-md hover:bg-blue-700 focus:outline-none focus:ring-2 focus:ring-blue-500 focus:ring-offset-2 disabled:opacity-50 disabled:cursor-not-allowed font-medium"
                    >
                        {match (*loading, *mode) {
                            (true, _) => "Please wait...",
                            (false, Mode::Login) => "Sign in",
                            (false, Mode::Register) => "Create account",
                            (false, Mode::Anonymous) => "Start anonymously",
                        }}
                    </button>
                </form>
            </div>
        </div>
    }
}

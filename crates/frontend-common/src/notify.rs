//! Toast notification layer
//!
//! Every failure surfaces exactly one notification (or one per field error
//! on a 422); pages raise toasts through [`use_toasts`] and the provider
//! renders them in a fixed stack with auto-dismiss.

use std::rc::Rc;

use gloo::timers::callback::Timeout;
use moodlog_http::ApiError;
use yew::prelude::*;

use crate::config::AppConfig;
use crate::error_messages::describe_error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
    Info,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub level: ToastLevel,
    pub text: String,
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct ToastState {
    pub toasts: Vec<Toast>,
    next_id: u32,
}

pub enum ToastAction {
    Push(ToastLevel, String),
    Dismiss(u32),
}

impl Reducible for ToastState {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut state = (*self).clone();
        match action {
            ToastAction::Push(level, text) => {
                let id = state.next_id;
                state.next_id += 1;
                state.toasts.push(Toast { id, level, text });
            }
            ToastAction::Dismiss(id) => state.toasts.retain(|toast| toast.id != id),
        }
        Rc::new(state)
    }
}

pub type ToastContext = UseReducerHandle<ToastState>;

/// Handle pages use to raise notifications.
#[derive(Clone, PartialEq)]
pub struct Toasts {
    inner: ToastContext,
}

impl Toasts {
    pub fn success(&self, text: impl Into<String>) {
        self.inner
            .dispatch(ToastAction::Push(ToastLevel::Success, text.into()));
    }

    pub fn error(&self, text: impl Into<String>) {
        self.inner
            .dispatch(ToastAction::Push(ToastLevel::Error, text.into()));
    }

    pub fn info(&self, text: impl Into<String>) {
        self.inner
            .dispatch(ToastAction::Push(ToastLevel::Info, text.into()));
    }

    /// One notification per message the error normalizes to.
    pub fn api_error(&self, error: &ApiError) {
        for message in describe_error(error) {
            self.error(message);
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    pub children: Children,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let state = use_reducer(ToastState::default);

    html! {
        <ContextProvider<ToastContext> context={state}>
            {props.children.clone()}
            <ToastHost />
        </ContextProvider<ToastContext>>
    }
}

#[function_component(ToastHost)]
fn toast_host() -> Html {
    let state = use_context::<ToastContext>()
        .expect("ToastContext not found. Make sure to wrap your app with ToastProvider");

    // Schedule dismissal for each toast as it becomes the newest one.
    {
        let state = state.clone();
        use_effect_with(state.toasts.last().map(|toast| toast.id), move |newest| {
            if let Some(id) = *newest {
                let state = state.clone();
                Timeout::new(AppConfig::TOAST_DISMISS_MS, move || {
                    state.dispatch(ToastAction::Dismiss(id));
                })
                .forget();
            }
        });
    }

    html! {
        <div class="fixed top-4 right-4 z-50 flex flex-col gap-2 w-80">
            {for state.toasts.iter().map(|toast| {
                let accent = match toast.level {
                    ToastLevel::Success => "border-green-500",
                    ToastLevel::Error => "border-red-500",
                    ToastLevel::Info => "border-blue-500",
                };
                let on_dismiss = {
                    let state = state.clone();
                    let id = toast.id;
                    Callback::from(move |_| state.dispatch(ToastAction::Dismiss(id)))
                };
                html! {
                    <div
                        key={toast.id}
                        class={format!("bg-white rounded-lg shadow-lg border-l-4 {accent} px-4 py-3 text-sm text-gray-900 cursor-pointer")}
                        onclick={on_dismiss}
                    >
                        {&toast.text}
                    </div>
                }
            })}
        </div>
    }
}

/// Hook to raise toasts from any component under the provider.
#[hook]
pub fn use_toasts() -> Toasts {
    Toasts {
        inner: use_context::<ToastContext>()
            .expect("ToastContext not found. Make sure to wrap your app with ToastProvider"),
    }
}

//! Global authentication context and provider

use std::rc::Rc;

use moodlog_http::TokenStore;
use moodlog_http::types::User;
use yew::prelude::*;

use crate::services::AuthService;
use crate::storage::BrowserTokens;

/// Authentication context data
#[derive(Clone, Debug, PartialEq)]
pub struct AuthContextData {
    pub user: Option<User>,
    pub is_loading: bool,
}

/// Authentication context actions
pub enum AuthAction {
    SignedIn(User),
    SignedOut,
    SetLoading(bool),
}

/// Authentication context
pub type AuthContext = UseReducerHandle<AuthContextData>;

impl Default for AuthContextData {
    fn default() -> Self {
        Self {
            user: None,
            is_loading: true, // Start with loading to restore the stored session
        }
    }
}

impl Reducible for AuthContextData {
    type Action = AuthAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            AuthAction::SignedIn(user) => Rc::new(Self {
                user: Some(user),
                is_loading: false,
            }),
            AuthAction::SignedOut => Rc::new(Self {
                user: None,
                is_loading: false,
            }),
            AuthAction::SetLoading(is_loading) => Rc::new(Self {
                is_loading,
                ..(*self).clone()
            }),
        }
    }
}

/// Auth provider props
#[derive(Properties, PartialEq)]
pub struct AuthProviderProps {
    pub children: Children,
}

/// Auth provider component
#[function_component(AuthProvider)]
pub fn auth_provider(props: &AuthProviderProps) -> Html {
    let auth_state = use_reducer(AuthContextData::default);

    // The session-expired handler is the single forced-logout path; routing
    // reacts to the cleared user and sends the visitor to the login view.
    {
        let auth_state = auth_state.clone();
        use_effect_with((), move |_| {
            let handler_state = auth_state.clone();
            super::session_expired::set_session_expired_callback(Rc::new(move || {
                BrowserTokens.clear();
                handler_state.dispatch(AuthAction::SignedOut);
            }));

            // Cleanup on unmount
            move || {
                super::session_expired::clear_session_expired_callback();
            }
        });
    }

    // Restore the session from stored credentials on mount.
    {
        let auth_state = auth_state.clone();
        use_effect_with((), move |_| {
            if BrowserTokens.access_token().is_none() {
                auth_state.dispatch(AuthAction::SetLoading(false));
                return;
            }
            wasm_bindgen_futures::spawn_local(async move {
                match AuthService::new().fetch_profile().await {
                    Ok(user) => auth_state.dispatch(AuthAction::SignedIn(user)),
                    Err(error) => {
                        tracing::debug!(%error, "stored session could not be restored");
                        BrowserTokens.clear();
                        auth_state.dispatch(AuthAction::SignedOut);
                    }
                }
            });
        });
    }

    html! {
        <ContextProvider<AuthContext> context={auth_state}>
            {props.children.clone()}
        </ContextProvider<AuthContext>>
    }
}

/// Hook to use auth context
#[hook]
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>()
        .expect("AuthContext not found. Make sure to wrap your component with AuthProvider")
}

/// Hook to get the signed-in user
#[hook]
pub fn use_auth_user() -> Option<User> {
    let auth = use_auth();
    auth.user.clone()
}

/// Hook to check if authenticated
#[hook]
pub fn use_is_authenticated() -> bool {
    let auth = use_auth();
    auth.user.is_some()
}

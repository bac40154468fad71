use moodlog_frontend_common::auth::{AuthProvider, use_auth};
use moodlog_frontend_common::{Spinner, ToastProvider};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::layout::Layout;
use crate::pages::{
    AiHealthPage, DashboardPage, JournalPage, LoginPage, MoodTrendsPage, NewStoryPage,
    ProfilePage, StoriesPage, StoryDetailPage,
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/login")]
    Login,
    #[at("/")]
    Dashboard,
    #[at("/journal")]
    Journal,
    #[at("/mood-trends")]
    MoodTrends,
    #[at("/stories")]
    Stories,
    #[at("/stories/new")]
    NewStory,
    #[at("/stories/:id")]
    StoryDetail { id: String },
    #[at("/ai-health")]
    AiHealth,
    #[at("/profile")]
    Profile,
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <ToastProvider>
                <AuthProvider>
                    <Switch<Route> render={switch} />
                </AuthProvider>
            </ToastProvider>
        </BrowserRouter>
    }
}

fn switch(route: Route) -> Html {
    match route {
        Route::Login => html! { <LoginPage /> },
        Route::Dashboard => protected(html! { <DashboardPage /> }),
        Route::Journal => protected(html! { <JournalPage /> }),
        Route::MoodTrends => protected(html! { <MoodTrendsPage /> }),
        Route::Stories => protected(html! { <StoriesPage /> }),
        Route::NewStory => protected(html! { <NewStoryPage /> }),
        Route::StoryDetail { id } => protected(html! { <StoryDetailPage {id} /> }),
        Route::AiHealth => protected(html! { <AiHealthPage /> }),
        Route::Profile => protected(html! { <ProfilePage /> }),
        Route::NotFound => html! { <NotFoundPage /> },
    }
}

fn protected(page: Html) -> Html {
    html! { <Protected>{page}</Protected> }
}

#[derive(Properties, PartialEq)]
struct ProtectedProps {
    children: Children,
}

/// Gate that sends signed-out visitors to the login view. The forced-logout
/// path lands here too: the session-expired handler clears the user, and
/// this redirect performs the navigation.
#[function_component(Protected)]
fn protected_shell(props: &ProtectedProps) -> Html {
    let auth = use_auth();
    let navigator = use_navigator().expect("navigator not available");

    {
        let signed_out = !auth.is_loading && auth.user.is_none();
        use_effect_with(signed_out, move |signed_out| {
            if *signed_out {
                navigator.push(&Route::Login);
            }
        });
    }

    if auth.is_loading {
        return html! {
            <div class="min-h-screen flex items-center justify-center bg-gradient-to-br from-gray-50 to-blue-50">
                <Spinner text="Loading MoodLog..." />
            </div>
        };
    }
    if auth.user.is_none() {
        return html! {};
    }

    html! { <Layout>{props.children.clone()}</Layout> }
}

#[function_component(NotFoundPage)]
fn not_found_page() -> Html {
    html! {
        <div class="min-h-screen flex items-center justify-center bg-gradient-to-br from-gray-50 to-blue-50">
            <div class="text-center">
                <p class="text-5xl mb-4">{"🧭"}</p>
                <h1 class="text-2xl font-bold text-gray-900 mb-2">{"Page not found"}</h1>
                <Link<Route> to={Route::Dashboard} classes="text-blue-600 hover:text-blue-700">
                    {"Back to your dashboard"}
                </Link<Route>>
            </div>
        </div>
    }
}

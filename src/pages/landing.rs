use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{use_toast, ToastMsg};
use crate::hooks::use_auth;
use crate::route::Route;

const FEATURE_PILLS: [&str; 4] = [
    "Blockchain-Powered",
    "AI-Enhanced",
    "NFT Resumes",
    "Community-Driven",
];

/// Public landing view. The login button drives the whole simulated wallet
/// flow; once a session exists we move to the dashboard.
#[function_component(Landing)]
pub fn landing() -> Html {
    let auth = use_auth();
    let toast = use_toast();
    let navigator = use_navigator().expect("Landing used outside a router");

    let loading = auth.state.loading;
    let user = auth.state.user.clone();

    // Navigate once the login resolves with a session.
    {
        let navigator = navigator.clone();
        use_effect_with(user, move |user| {
            if user.is_some() {
                navigator.push(&Route::Dashboard);
            }
            || ()
        });
    }

    // Surface login failures instead of swallowing them.
    {
        let toast = toast.clone();
        let error = auth.state.error.clone();
        use_effect_with(error, move |error| {
            if let Some(err) = error {
                toast.emit(ToastMsg::new("Login failed", err.to_string()));
            }
            || ()
        });
    }

    let on_login = {
        let login = auth.login.clone();
        Callback::from(move |_: MouseEvent| {
            log::info!("🔑 Login requested");
            login.emit(());
        })
    };

    html! {
        <div class="landing gradient-bg">
            <div class="landing-content">
                <div class="landing-logo">{"🚀"}</div>

                <h1 class="landing-title gradient-text">{"EduVerse"}</h1>

                <p class="landing-tagline">
                    {"✨ Education on Blockchain ✨"}
                </p>

                <p class="landing-subtitle">
                    {"Donate items • Get AI homework help • Showcase talent • Mint NFT resume"}
                </p>

                <button
                    class="btn-login gradient-bg glow-effect"
                    onclick={on_login}
                    disabled={loading}
                >
                    if loading {
                        {"⏳ Connecting..."}
                    } else {
                        {"Login with Gmail →"}
                    }
                </button>

                <div class="feature-pills">
                    { for FEATURE_PILLS.iter().map(|pill| html! {
                        <div key={*pill} class="pill glass-card">{*pill}</div>
                    })}
                </div>
            </div>

            <footer class="landing-footer">
                <p>{"© 2025 EduVerse • Built for Grizzly Hacks 2025"}</p>
            </footer>
        </div>
    }
}

use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::Navbar;
use crate::hooks::{use_auth, use_route_guard};
use crate::route::Route;

struct Feature {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    route: Route,
}

const fn features() -> [Feature; 6] {
    [
        Feature {
            icon: "🎁",
            title: "AidFlow",
            description: "Donate items or claim what you need",
            route: Route::AidFlow,
        },
        Feature {
            icon: "❓",
            title: "HelpDesk",
            description: "Get AI & peer homework answers",
            route: Route::HelpDesk,
        },
        Feature {
            icon: "🎤",
            title: "TalentStage",
            description: "Upload & vote on talent videos",
            route: Route::TalentStage,
        },
        Feature {
            icon: "💼",
            title: "Portfolio",
            description: "Mint your dynamic NFT resume",
            route: Route::Portfolio,
        },
        Feature {
            icon: "🏆",
            title: "Opportunities",
            description: "Discover hackathons & scholarships",
            route: Route::Opportunities,
        },
        Feature {
            icon: "🎓",
            title: "Leaderboard",
            description: "See top contributors & achievers",
            route: Route::Leaderboard,
        },
    ]
}

#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    use_route_guard();

    let auth = use_auth();
    let navigator = use_navigator().expect("Dashboard used outside a router");

    let user = auth.state.user.clone();
    let name = user
        .as_ref()
        .map(|u| u.name.clone())
        .unwrap_or_else(|| "Student".to_string());

    // Logout leaves the session absent; the route guard then bounces this
    // view back to the landing page.
    let on_logout = auth.logout.clone();

    html! {
        <div class="page dashboard">
            <Navbar user={user} on_logout={on_logout} />

            <div class="hero">
                <h1 class="gradient-text">{format!("Welcome Back, {}!", name)}</h1>
                <p>{"Choose your next adventure in the EduVerse"}</p>
            </div>

            <div class="feature-grid">
                { for features().into_iter().map(|feature| {
                    let navigator = navigator.clone();
                    let route = feature.route.clone();
                    let onclick = Callback::from(move |_: MouseEvent| {
                        navigator.push(&route);
                    });
                    html! {
                        <div key={feature.title} class="feature-card glass-card" {onclick}>
                            <div class="feature-icon gradient-bg">{feature.icon}</div>
                            <h3>{feature.title}</h3>
                            <p>{feature.description}</p>
                        </div>
                    }
                })}
            </div>
        </div>
    }
}

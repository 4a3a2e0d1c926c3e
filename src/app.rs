use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::ToastProvider;
use crate::hooks::AuthProvider;
use crate::pages;
use crate::route::Route;

fn switch(route: Route) -> Html {
    match route {
        Route::Landing => html! { <pages::Landing /> },
        Route::Dashboard => html! { <pages::Dashboard /> },
        Route::AidFlow => html! { <pages::AidFlow /> },
        Route::HelpDesk => html! { <pages::HelpDesk /> },
        Route::TalentStage => html! { <pages::TalentStage /> },
        Route::Portfolio => html! { <pages::Portfolio /> },
        Route::Opportunities => html! { <pages::Opportunities /> },
        Route::Leaderboard => html! { <pages::Leaderboard /> },
        Route::NotFound => html! { <pages::NotFound /> },
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <AuthProvider>
            <ToastProvider>
                <BrowserRouter>
                    <Switch<Route> render={switch} />
                </BrowserRouter>
            </ToastProvider>
        </AuthProvider>
    }
}

use yew::prelude::*;
use yew_router::prelude::*;

use crate::route::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    let navigator = use_navigator().expect("NotFound used outside a router");

    let on_home = Callback::from(move |_: MouseEvent| {
        navigator.push(&Route::Landing);
    });

    html! {
        <div class="page not-found">
            <h1 class="gradient-text">{"404"}</h1>
            <p>{"This corner of the EduVerse doesn't exist."}</p>
            <button class="btn-home gradient-bg" onclick={on_home}>
                {"Return Home"}
            </button>
        </div>
    }
}

use yew::prelude::*;
use yew_router::prelude::*;

use crate::route::Route;

#[derive(Properties, PartialEq)]
pub struct PageHeaderProps {
    pub icon: AttrValue,
    pub title: AttrValue,
    pub blurb: AttrValue,
}

/// Shared header for feature views: back-to-dashboard button plus the
/// page's icon, title and one-line blurb.
#[function_component(PageHeader)]
pub fn page_header(props: &PageHeaderProps) -> Html {
    let navigator = use_navigator().expect("PageHeader used outside a router");

    let on_back = Callback::from(move |_: MouseEvent| {
        navigator.push(&Route::Dashboard);
    });

    html! {
        <>
            <button class="btn-back" onclick={on_back}>
                {"← Back to Dashboard"}
            </button>

            <div class="page-header">
                <div class="page-icon gradient-bg">{props.icon.clone()}</div>
                <h1 class="gradient-text">{props.title.clone()}</h1>
                <p class="page-blurb">{props.blurb.clone()}</p>
            </div>
        </>
    }
}

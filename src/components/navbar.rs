use yew::prelude::*;

use crate::auth::UserInfo;
use crate::utils::format::truncate_address;

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub user: Option<UserInfo>,
    pub on_logout: Callback<()>,
}

/// Top bar on the dashboard: brand, wallet pill, fixed $EDU/XP pills,
/// avatar and logout. The balances are display-only demo values.
#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let wallet_text = props
        .user
        .as_ref()
        .map(|u| truncate_address(&u.wallet_address))
        .unwrap_or_else(|| "0x7a9...f42e".to_string());

    html! {
        <nav class="navbar glass-card">
            <div class="navbar-brand">
                <div class="brand-icon gradient-bg">{"🎓"}</div>
                <span class="brand-name gradient-text">{"EduVerse"}</span>
            </div>

            <div class="navbar-pills">
                <div class="pill glass-card">
                    <span class="pill-icon">{"👛"}</span>
                    <span class="pill-mono">{wallet_text}</span>
                </div>
                <div class="pill glass-card">
                    <span class="pill-icon">{"🪙"}</span>
                    <span class="pill-bold">{"250 $EDU"}</span>
                </div>
                <div class="pill glass-card">
                    <span class="pill-icon">{"⚡"}</span>
                    <span class="pill-bold">{"1,850 XP"}</span>
                </div>

                if let Some(user) = &props.user {
                    <div class="navbar-user">
                        <div class="avatar" title={user.name.clone()}>
                            if user.profile_image.is_empty() {
                                <span class="avatar-fallback">{user.initial()}</span>
                            } else {
                                <img src={user.profile_image.clone()} alt={user.name.clone()} />
                            }
                        </div>
                        <button
                            class="btn-logout"
                            onclick={props.on_logout.reform(|_| ())}
                        >
                            {"Logout"}
                        </button>
                    </div>
                }
            </div>
        </nav>
    }
}

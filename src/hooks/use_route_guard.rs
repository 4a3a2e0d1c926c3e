use yew::prelude::*;
use yew_router::prelude::*;

use crate::auth::UserInfo;
use crate::hooks::use_auth::use_auth;
use crate::route::Route;

/// Redirect decision: only when the store is settled and nobody is logged
/// in. Never redirects mid-login.
pub fn should_redirect(loading: bool, user: Option<&UserInfo>) -> bool {
    !loading && user.is_none()
}

/// Guards a protected view. Runs on mount and whenever the session or
/// loading flag changes; its only side effect is a navigation request.
#[hook]
pub fn use_route_guard() {
    let auth = use_auth();
    let navigator = use_navigator().expect("route guard used outside a router");

    let loading = auth.state.loading;
    let user = auth.state.user.clone();

    use_effect_with((loading, user), move |(loading, user)| {
        if should_redirect(*loading, user.as_ref()) {
            log::info!("🔒 No session, redirecting to landing");
            navigator.push(&Route::Landing);
        }
        || ()
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo_user() -> UserInfo {
        UserInfo {
            name: "Demo User".to_string(),
            email: "demo@eduverse.app".to_string(),
            profile_image: String::new(),
            wallet_address: "0x0000000000000000000000000000000000000000".to_string(),
        }
    }

    #[test]
    fn redirects_when_settled_and_logged_out() {
        assert!(should_redirect(false, None));
    }

    #[test]
    fn never_redirects_while_loading() {
        assert!(!should_redirect(true, None));
        assert!(!should_redirect(true, Some(&demo_user())));
    }

    #[test]
    fn never_redirects_with_session() {
        assert!(!should_redirect(false, Some(&demo_user())));
    }
}

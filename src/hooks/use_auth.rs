use yew::prelude::*;

use crate::auth::{AuthStore, DemoAuthProvider, GlooDelay};

/// Session store handle shared through the auth context: current state plus
/// the login/logout callbacks. The store has exactly one writer role (these
/// two callbacks); every view is a reader.
#[derive(Clone, PartialEq)]
pub struct UseAuthHandle {
    pub state: UseStateHandle<AuthStore>,
    pub login: Callback<()>,
    pub logout: Callback<()>,
}

/// Creates the session store. Called once by `AuthProvider`; everything
/// below it reads through [`use_auth`].
#[hook]
pub fn use_auth_state() -> UseAuthHandle {
    let state = use_state(AuthStore::default);

    // Login callback: flip to AUTHENTICATING, then resolve the simulated
    // provider connect off the handler. Last completion wins.
    let login = {
        let state = state.clone();
        Callback::from(move |_| {
            let mut next = (*state).clone();
            next.begin_login();
            state.set(next);

            let state = state.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let result = DemoAuthProvider::connect(&GlooDelay).await;
                match &result {
                    Ok(user) => log::info!("✅ Login: {}", user.wallet_address),
                    Err(e) => log::error!("❌ Login failed: {}", e),
                }
                let mut next = (*state).clone();
                next.complete_login(result);
                state.set(next);
            });
        })
    };

    // Logout callback: synchronous, unconditional.
    let logout = {
        let state = state.clone();
        Callback::from(move |_| {
            log::info!("👋 Logout");
            let mut next = (*state).clone();
            next.logout();
            state.set(next);
        })
    };

    UseAuthHandle {
        state,
        login,
        logout,
    }
}

/// Reads the shared session store from context.
#[hook]
pub fn use_auth() -> UseAuthHandle {
    use_context::<UseAuthHandle>().expect("use_auth called outside AuthProvider")
}

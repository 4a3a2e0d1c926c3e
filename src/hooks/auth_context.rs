// ============================================================================
// AUTH CONTEXT - share the session store between views
// ============================================================================

use yew::prelude::*;

use crate::hooks::use_auth::{use_auth_state, UseAuthHandle};

#[derive(Properties, PartialEq)]
pub struct AuthProviderProps {
    pub children: Children,
}

/// Provider component that wraps the app and owns the session store.
#[function_component(AuthProvider)]
pub fn auth_provider(props: &AuthProviderProps) -> Html {
    let auth_handle = use_auth_state();

    html! {
        <ContextProvider<UseAuthHandle> context={auth_handle}>
            {props.children.clone()}
        </ContextProvider<UseAuthHandle>>
    }
}

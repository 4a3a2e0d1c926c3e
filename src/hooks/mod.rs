pub mod auth_context;
pub mod use_auth;
pub mod use_route_guard;

pub use auth_context::AuthProvider;
pub use use_auth::{use_auth, use_auth_state, UseAuthHandle};
pub use use_route_guard::use_route_guard;

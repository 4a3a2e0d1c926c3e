// ============================================================================
// EDUVERSE - GAMIFIED EDUCATION DEMO (YEW + WASM)
// ============================================================================
// Demo SPA: simulated wallet login, mock feature views, no backend.
// - auth: session store + demo wallet provider
// - hooks: auth context + route guard
// - pages: one component per feature view
// - components: navbar, toasts, shared chrome
// ============================================================================

pub mod app;
pub mod auth;
pub mod components;
pub mod config;
pub mod hooks;
pub mod models;
pub mod pages;
pub mod route;
pub mod utils;

pub use app::App;

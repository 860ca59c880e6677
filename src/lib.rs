//! Vitrina web front end: a Leptos single-page app with a landing page,
//! signup and login. The auth and session logic is framework-independent and
//! builds on every target; the view layer only builds for `wasm32`.

#[cfg(target_arch = "wasm32")]
pub mod app;
#[path = "lib/mod.rs"]
pub mod app_lib;
#[cfg(target_arch = "wasm32")]
pub mod components;
pub mod features;
pub mod paths;
#[cfg(target_arch = "wasm32")]
pub mod routes;

//! Auth feature: the session token store, the API client, the signup and login
//! forms and session upkeep. This module handles passwords and tokens and must
//! never log either.
//!
//! Flow Overview: a form validates its input locally, posts it through
//! [`client::AuthApi`] and on success writes the issued tokens into the
//! [`session::Session`] before notifying the user and navigating home. The
//! profile is fetched last. A rejected access token is refreshed once.
//! Everything except `state` is framework-independent and runs on the host in
//! tests.

pub mod client;
pub mod form;
pub mod lifecycle;
pub mod login;
pub mod session;
pub mod signup;
#[cfg(target_arch = "wasm32")]
pub mod state;
pub mod storage;
pub mod types;
pub mod validation;

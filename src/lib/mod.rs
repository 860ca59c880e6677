//! Shared frontend utilities for API access, configuration, errors, and build
//! metadata.
//!
//! ## Session Flow
//!
//! 1. **Acquire:** Signup or login POSTs credentials and receives an access
//!    token, a refresh token and the user id.
//! 2. **Use:** Authenticated calls send the access token in the `x-auth`
//!    header.
//! 3. **Renew:** A 401 triggers one `/refresh` exchange using the refresh
//!    token; a failed refresh clears the session.
//! 4. **Leave:** Logout posts the refresh token and clears local state
//!    whatever the server answers.
//!
//! Centralizing these helpers keeps network behavior consistent and avoids
//! duplicated logic in routes and features. Callers must avoid logging token
//! material.

pub mod api;
pub mod build_info;
pub mod config;
pub mod errors;

pub use api::ApiClient;
pub use config::AppConfig;
pub use errors::AppError;

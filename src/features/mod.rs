//! Domain-level frontend features. Routes import these modules to keep view
//! code focused on markup.

pub mod auth;

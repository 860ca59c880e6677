#[cfg(target_arch = "wasm32")]
use leptos::prelude::mount_to_body;
#[cfg(target_arch = "wasm32")]
use vitrina_web::{app::App, app_lib::build_info};

#[cfg(target_arch = "wasm32")]
pub fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    tracing::info!(commit = build_info::git_commit_hash(), "starting vitrina-web");

    mount_to_body(App);
}

#[cfg(not(target_arch = "wasm32"))]
pub fn main() {}

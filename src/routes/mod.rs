mod login;
mod main_page;
mod not_found;
mod signup;

pub use login::LoginPage;
pub use main_page::MainPage;
pub use not_found::NotFoundPage;
pub use signup::SignupPage;

use leptos::prelude::*;
use leptos_router::components::{Route, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <NotFoundPage /> }>
            <Route path=path!("/") view=MainPage />
            <Route path=path!("/login") view=LoginPage />
            <Route path=path!("/signup") view=SignupPage />
            <Route path=path!("/*any") view=NotFoundPage />
        </Routes>
    }
}

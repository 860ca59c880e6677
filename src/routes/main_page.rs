//! Landing page. Presentation only; greets the user once the profile is
//! loaded.

use crate::features::auth::state::use_auth;
use crate::paths;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn MainPage() -> impl IntoView {
    let auth = use_auth();
    let title = move || match auth.user.get() {
        Some(user) if !user.name.is_empty() => format!("Здравствуйте, {}!", user.name),
        _ => "Витрина".to_string(),
    };

    view! {
        <section class="mx-auto max-w-3xl space-y-6 px-6 py-16 text-center">
            <h1 class="text-4xl font-bold text-slate-900">{title}</h1>
            <p class="text-lg text-slate-500">
                "Товары и предложения, собранные в одном месте."
            </p>
            <Show when=move || !auth.is_logged.get()>
                <A href=paths::SIGNUP {..} class="inline-block rounded-full bg-sky-600 px-8 py-3 text-white">
                    "Зарегистрироваться"
                </A>
            </Show>
        </section>
    }
}

use crate::paths;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="flex min-h-[50vh] flex-col items-center justify-center gap-6 text-center">
            <h1 class="text-8xl font-black text-slate-200">"404"</h1>
            <p class="text-slate-500">"Страница не найдена"</p>
            <A href=paths::HOME {..} class="text-sky-700">
                "На главную"
            </A>
        </div>
    }
}

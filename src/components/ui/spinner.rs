use leptos::prelude::*;

#[component]
pub fn Spinner() -> impl IntoView {
    view! {
        <div
            class="mx-auto h-6 w-6 animate-spin rounded-full border-4 border-sky-100 border-t-sky-600"
            role="status"
            aria-label="Загрузка"
        ></div>
    }
}

//! Page frame: header with account links, the routed content and the snackbar.

use crate::components::ui::{Snackbar, use_toast};
use crate::features::auth::form::AuthFlow;
use crate::features::auth::lifecycle;
use crate::features::auth::state::{use_auth, use_session_navigator};
use crate::paths;
use leptos::{prelude::*, task::spawn_local};
use leptos_router::components::A;

#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    let auth = use_auth();
    let toast = use_toast();
    let navigate = use_session_navigator();

    let on_logout = move |_| {
        spawn_local(async move {
            let api = match auth.api() {
                Ok(api) => api,
                Err(err) => {
                    tracing::error!(error = %err, "cannot reach the auth API");
                    lifecycle::sign_out_locally(&auth.session(), &toast, &navigate);
                    return;
                }
            };
            let session = auth.session();
            let flow = AuthFlow {
                api: &api,
                session: &session,
                notifier: &toast,
                navigator: &navigate,
            };
            lifecycle::logout(&flow).await;
        });
    };

    let greeting = move || {
        auth.user
            .get()
            .map(|user| user.name)
            .filter(|name| !name.is_empty())
    };

    view! {
        <div class="min-h-screen flex flex-col">
            <header class="border-b border-slate-100">
                <nav class="mx-auto flex max-w-screen-xl items-center justify-between p-4">
                    <A href=paths::HOME {..} class="text-xl font-bold text-slate-900">
                        "Витрина"
                    </A>
                    <Show
                        when=move || auth.is_logged.get()
                        fallback=|| {
                            view! {
                                <div class="flex gap-6 text-sm">
                                    <A href=paths::LOGIN>"Вход"</A>
                                    <A href=paths::SIGNUP>"Регистрация"</A>
                                </div>
                            }
                        }
                    >
                        <div class="flex items-center gap-6 text-sm">
                            {greeting}
                            <button type="button" class="text-sky-700" on:click=on_logout>
                                "Выйти"
                            </button>
                        </div>
                    </Show>
                </nav>
            </header>
            <main class="flex-1">{children()}</main>
            <Snackbar />
        </div>
    }
}

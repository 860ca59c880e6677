//! Single-line transient notifications. A new message replaces the visible one
//! and each message hides itself after a few seconds. Messages are rendered
//! as text and must never include tokens.

use crate::features::auth::form::Notifier;
use gloo_timers::callback::Timeout;
use leptos::prelude::*;

const VISIBLE_FOR_MS: u32 = 4_000;

#[derive(Clone, Copy)]
pub struct ToastContext {
    message: RwSignal<Option<String>>,
    shown: RwSignal<u64>,
}

impl ToastContext {
    fn new() -> Self {
        Self {
            message: RwSignal::new(None),
            shown: RwSignal::new(0),
        }
    }

    pub fn dismiss(&self) {
        self.message.try_set(None);
    }
}

impl Notifier for ToastContext {
    fn notify(&self, message: &str) {
        let Some(ticket) = self.shown.try_update(|shown| {
            *shown += 1;
            *shown
        }) else {
            return;
        };
        self.message.try_set(Some(message.to_string()));

        let toast = *self;
        Timeout::new(VISIBLE_FOR_MS, move || {
            // A newer message owns the surface now.
            if toast.shown.try_get_untracked() == Some(ticket) {
                toast.dismiss();
            }
        })
        .forget();
    }
}

#[component]
pub fn ToastProvider(children: Children) -> impl IntoView {
    provide_context(ToastContext::new());
    view! { {children()} }
}

pub fn use_toast() -> ToastContext {
    use_context::<ToastContext>().unwrap_or_else(ToastContext::new)
}

#[component]
pub fn Snackbar() -> impl IntoView {
    let toast = use_toast();

    move || {
        toast.message.get().map(|message| {
            view! {
                <div
                    class="fixed bottom-6 left-1/2 -translate-x-1/2 rounded-md bg-slate-800 px-6 py-3 text-sm text-white shadow-lg"
                    role="status"
                    aria-live="polite"
                    on:click=move |_| toast.dismiss()
                >
                    {message}
                </div>
            }
        })
    }
}

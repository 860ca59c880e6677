use crate::components::{Button, Spinner, use_toast};
use crate::features::auth::login::LoginForm;
use crate::features::auth::state::{
    submit_form, use_auth, use_form_controller, use_session_navigator,
};
use crate::paths;
use leptos::{ev::SubmitEvent, prelude::*};
use leptos_router::components::A;
use secrecy::SecretString;

const INPUT_CLASS: &str = "w-full rounded-lg border border-slate-200 bg-slate-50 px-4 py-3 text-sm text-slate-900 focus:border-sky-400 focus:ring-2 focus:ring-sky-100";

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let toast = use_toast();
    let navigator = use_session_navigator();
    let controller = use_form_controller::<LoginForm>();

    let submitting = Signal::derive(move || controller.with(|form| form.is_submitting()));
    let email_error = move || controller.with(|form| form.errors().email);
    let password_error = move || controller.with(|form| form.errors().password);

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        submit_form(auth, controller, toast, navigator);
    };

    view! {
        <div class="flex min-h-[70vh] items-center justify-center px-6 py-10">
            <form class="w-full max-w-md space-y-5" on:submit=on_submit novalidate>
                <h1 class="text-2xl font-semibold text-slate-900">"Вход"</h1>
                <div>
                    <input
                        class=INPUT_CLASS
                        type="email"
                        placeholder="E-mail"
                        autocomplete="email"
                        on:input=move |event| {
                            controller.update(|form| form.form.email = event_target_value(&event))
                        }
                    />
                    {move || {
                        email_error()
                            .map(|error| {
                                view! { <p class="mt-1 text-xs text-red-600">{error.to_string()}</p> }
                            })
                    }}
                </div>
                <div>
                    <input
                        class=INPUT_CLASS
                        type=move || {
                            if controller.with(|form| form.password_visible()) {
                                "text"
                            } else {
                                "password"
                            }
                        }
                        placeholder="Пароль"
                        autocomplete="current-password"
                        on:input=move |event| {
                            let value = SecretString::from(event_target_value(&event));
                            controller.update(|form| form.form.password = value)
                        }
                    />
                    {move || {
                        password_error()
                            .map(|error| {
                                view! { <p class="mt-1 text-xs text-red-600">{error.to_string()}</p> }
                            })
                    }}
                </div>
                <div class="flex items-center justify-between text-sm text-slate-600">
                    <label class="flex items-center gap-2">
                        <input
                            type="checkbox"
                            on:change=move |event| {
                                controller
                                    .update(|form| {
                                        form.form.remember_me = event_target_checked(&event)
                                    })
                            }
                        />
                        "Запомнить меня"
                    </label>
                    <button
                        type="button"
                        class="text-xs text-slate-500"
                        on:click=move |_| {
                            controller.update(|form| {
                                form.toggle_password_visibility();
                            })
                        }
                    >
                        "Показать пароль"
                    </button>
                </div>
                <Button button_type="submit" disabled=submitting>
                    "Войти"
                </Button>
                {move || submitting.get().then(|| view! { <Spinner /> })}
                <p class="text-center text-sm text-slate-500">
                    "Нет аккаунта? "
                    <A href=paths::SIGNUP {..} class="text-sky-700">
                        "Зарегистрироваться"
                    </A>
                </p>
            </form>
        </div>
    }
}

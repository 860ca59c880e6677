//! Signup route. Field errors appear once a submit has been attempted; the
//! request is only sent when every field passes.

use crate::components::{Button, Spinner, use_toast};
use crate::features::auth::signup::SignupForm;
use crate::features::auth::state::{
    submit_form, use_auth, use_form_controller, use_session_navigator,
};
use crate::features::auth::validation::FieldError;
use crate::paths;
use leptos::{ev::SubmitEvent, prelude::*};
use leptos_router::components::A;
use secrecy::SecretString;

const INPUT_CLASS: &str = "w-full rounded-lg border border-slate-200 bg-slate-50 px-4 py-3 text-sm text-slate-900 focus:border-sky-400 focus:ring-2 focus:ring-sky-100";

fn field_error(error: Option<FieldError>) -> Option<impl IntoView> {
    error.map(|error| view! { <p class="mt-1 text-xs text-red-600">{error.to_string()}</p> })
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let auth = use_auth();
    let toast = use_toast();
    let navigator = use_session_navigator();
    let controller = use_form_controller::<SignupForm>();

    let submitting = Signal::derive(move || controller.with(|form| form.is_submitting()));
    let errors = move || controller.with(|form| *form.errors());
    let password_type = move || {
        if controller.with(|form| form.password_visible()) {
            "text"
        } else {
            "password"
        }
    };

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        submit_form(auth, controller, toast, navigator);
    };

    view! {
        <div class="flex min-h-[70vh] items-center justify-center px-6 py-10">
            <form class="w-full max-w-md space-y-5" on:submit=on_submit novalidate>
                <h1 class="text-2xl font-semibold text-slate-900">"Регистрация"</h1>
                <div>
                    <input
                        class=INPUT_CLASS
                        type="text"
                        placeholder="Имя"
                        autocomplete="given-name"
                        on:input=move |event| {
                            controller.update(|form| form.form.name = event_target_value(&event))
                        }
                    />
                    {move || field_error(errors().name)}
                </div>
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
                    {move || field_error(errors().email)}
                </div>
                <div>
                    <div class="relative">
                        <input
                            class=INPUT_CLASS
                            type=password_type
                            placeholder="Пароль"
                            autocomplete="new-password"
                            on:input=move |event| {
                                let value = SecretString::from(event_target_value(&event));
                                controller.update(|form| form.form.password = value)
                            }
                        />
                        <button
                            type="button"
                            class="absolute right-3 top-3 text-xs text-slate-500"
                            on:click=move |_| {
                                controller.update(|form| {
                                    form.toggle_password_visibility();
                                })
                            }
                        >
                            {move || if password_type() == "text" { "Скрыть" } else { "Показать" }}
                        </button>
                    </div>
                    {move || field_error(errors().password)}
                </div>
                <label class="flex items-center gap-2 text-sm text-slate-600">
                    <input
                        type="checkbox"
                        on:change=move |event| {
                            controller.update(|form| form.form.agree = event_target_checked(&event))
                        }
                    />
                    "Я согласен с условиями обработки персональных данных"
                </label>
                {move || field_error(errors().agree)}
                <Button button_type="submit" disabled=submitting>
                    "Зарегистрироваться"
                </Button>
                {move || submitting.get().then(|| view! { <Spinner /> })}
                <p class="text-center text-sm text-slate-500">
                    "Уже есть аккаунт? "
                    <A href=paths::LOGIN {..} class="text-sky-700">
                        "Войти"
                    </A>
                </p>
            </form>
        </div>
    }
}

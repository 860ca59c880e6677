//! Auth context for the view layer. The provider restores the session from
//! `localStorage` on mount and fetches the profile once if tokens were found.
//! Signals mirror the session so views re-render on sign-in and sign-out; the
//! tokens themselves stay inside [`Session`] and are never put in a signal.

use crate::app_lib::{AppConfig, AppError};
use crate::features::auth::client::HttpAuthClient;
use crate::features::auth::form::{
    AuthFlow, AuthForm, AuthSubmission, FormController, Navigator, Notifier, SubmitOutcome,
};
use crate::features::auth::lifecycle;
use crate::features::auth::session::Session;
use crate::features::auth::types::UserInfo;
use leptos::{prelude::*, task::spawn_local};
use leptos_router::hooks::use_navigate;

/// Auth state shared through Leptos.
#[derive(Clone, Copy)]
pub struct AuthContext {
    session: StoredValue<Session>,
    api: StoredValue<Result<HttpAuthClient, AppError>, LocalStorage>,
    pub user: RwSignal<Option<UserInfo>>,
    pub is_logged: RwSignal<bool>,
}

impl AuthContext {
    fn new(session: Session, api: Result<HttpAuthClient, AppError>) -> Self {
        let auth = Self {
            session: StoredValue::new(session),
            api: StoredValue::new_local(api),
            user: RwSignal::new(None),
            is_logged: RwSignal::new(false),
        };
        auth.sync();
        auth
    }

    /// Handle to the session; clones share state.
    pub fn session(&self) -> Session {
        self.session.get_value()
    }

    pub fn api(&self) -> Result<HttpAuthClient, AppError> {
        self.api.with_value(Clone::clone)
    }

    /// Copies the session's sign-in state and profile into the signals.
    pub fn sync(&self) {
        let Some(session) = self.session.try_get_value() else {
            return;
        };
        self.is_logged.try_set(session.is_logged());
        self.user.try_set(session.user_info());
    }
}

/// Provides auth context and restores a stored session.
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let api = HttpAuthClient::from_config(&AppConfig::load());
    if let Err(err) = &api {
        tracing::error!(error = %err, "auth client unavailable");
    }
    let auth = AuthContext::new(Session::browser(), api);
    provide_context(auth);

    if auth.is_logged.get_untracked() {
        spawn_local(async move {
            if let Ok(api) = auth.api() {
                lifecycle::load_user_info(&api, &auth.session()).await;
            }
            auth.sync();
        });
    }

    view! { {children()} }
}

/// Returns the current auth context or a detached, signed-out one.
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| {
        AuthContext::new(
            Session::in_memory(),
            HttpAuthClient::from_config(&AppConfig::default()),
        )
    })
}

/// Router handle for flows. Publishes the session to the signals before
/// navigating, so the destination renders with the current sign-in state.
#[derive(Clone, Copy)]
pub struct SessionNavigator {
    auth: AuthContext,
    target: RwSignal<Option<String>>,
}

impl Navigator for SessionNavigator {
    fn navigate(&self, path: &str) {
        self.auth.sync();
        self.target.try_set(Some(path.to_string()));
    }
}

pub fn use_session_navigator() -> SessionNavigator {
    let auth = use_auth();
    let target = RwSignal::new(None::<String>);
    let navigate = use_navigate();

    Effect::new(move |_| {
        if let Some(path) = target.get() {
            navigate(&path, Default::default());
        }
    });

    SessionNavigator { auth, target }
}

/// Form controller scoped to the current view. Leaving the view aborts the
/// request it has in flight.
pub fn use_form_controller<F>() -> RwSignal<FormController<F>>
where
    F: AuthForm + Default + Send + Sync + 'static,
    F::Errors: Send + Sync,
{
    let controller = RwSignal::new(FormController::new(F::default()));
    on_cleanup(move || {
        controller.try_update(FormController::teardown);
    });
    controller
}

/// Validates the form and, if it passes, sends it and settles the response
/// against the shared session. Invalid input only updates the field errors.
pub fn submit_form<F, N>(
    auth: AuthContext,
    controller: RwSignal<FormController<F>>,
    notifier: N,
    navigator: SessionNavigator,
) where
    F: AuthForm + Send + Sync + 'static,
    F::Errors: Send + Sync,
    F::Request: 'static,
    N: Notifier + 'static,
{
    let Some(task) = controller.try_update(FormController::submit).flatten() else {
        return;
    };

    let api = match auth.api() {
        Ok(api) => api,
        Err(err) => {
            tracing::error!(error = %err, "cannot reach the auth API");
            let message = <F::Request as AuthSubmission>::MESSAGES.failure;
            notifier.notify(message);
            controller.try_update(|form| form.finish(&SubmitOutcome::Rejected(message.to_string())));
            return;
        }
    };

    spawn_local(async move {
        let session = auth.session();
        let flow = AuthFlow {
            api: &api,
            session: &session,
            notifier: &notifier,
            navigator: &navigator,
        };
        let outcome = task.run(&flow).await;
        auth.sync();
        controller.try_update(|form| form.finish(&outcome));
    });
}

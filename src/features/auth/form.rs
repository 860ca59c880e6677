//! Submission machinery shared by the signup and login forms.
//!
//! A [`FormController`] owns the form state and the abort handle of the one
//! request it may have in flight. `submit` validates and hands back a
//! [`SubmitTask`]; the view spawns it against an [`AuthFlow`] and reports the
//! outcome back through `finish`. Tearing the controller down (or dropping it)
//! aborts the task, so a late response has no effect at all.

use crate::app_lib::AppError;
use crate::features::auth::client::AuthApi;
use crate::features::auth::lifecycle;
use crate::features::auth::session::Session;
use crate::features::auth::types::{AuthResponse, LoginRequest, SignupRequest};
use crate::paths;
use futures::future::{AbortHandle, AbortRegistration, Abortable};
use std::fmt;
use std::future::Future;
use tracing::{debug, warn};

/// Shown when a 2xx answer lacks one of the session fields.
pub const MALFORMED_RESPONSE: &str = "Ошибка при авторизации";

/// Transient user-facing messages (the snackbar).
pub trait Notifier {
    fn notify(&self, message: &str);
}

impl<F: Fn(&str)> Notifier for F {
    fn notify(&self, message: &str) {
        self(message);
    }
}

/// Client-side router.
pub trait Navigator {
    fn navigate(&self, path: &str);
}

impl<F: Fn(&str)> Navigator for F {
    fn navigate(&self, path: &str) {
        self(path);
    }
}

/// Everything a settled submission may touch.
pub struct AuthFlow<'a, A, N, R> {
    pub api: &'a A,
    pub session: &'a Session,
    pub notifier: &'a N,
    pub navigator: &'a R,
}

impl<A: AuthApi, N: Notifier, R: Navigator> AuthFlow<'_, A, N, R> {
    /// Applies the side effects of an auth response.
    ///
    /// On success the session is written first, then the user is told and
    /// sent home, and only then is the profile fetched.
    pub async fn settle(
        &self,
        response: Result<AuthResponse, AppError>,
        messages: &FlowMessages,
    ) -> SubmitOutcome {
        match response {
            Ok(AuthResponse::Authenticated(tokens)) => {
                self.session.sign_in(tokens);
                self.notifier.notify(messages.success);
                self.navigator.navigate(paths::HOME);
                lifecycle::load_user_info(self.api, self.session).await;
                SubmitOutcome::SignedIn
            }
            Ok(AuthResponse::Rejected(message)) => self.reject(message),
            Ok(AuthResponse::Malformed) => {
                warn!("auth response is missing session fields");
                self.reject(MALFORMED_RESPONSE.to_string())
            }
            Err(err) => {
                warn!(error = %err, "auth request failed");
                let message = err.server_message().unwrap_or(messages.failure);
                self.reject(message.to_string())
            }
        }
    }

    fn reject(&self, message: String) -> SubmitOutcome {
        self.notifier.notify(&message);
        SubmitOutcome::Rejected(message)
    }
}

/// Messages a flow shows on success and on a transport failure without a
/// server-supplied message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FlowMessages {
    pub success: &'static str,
    pub failure: &'static str,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormPhase {
    #[default]
    Editing,
    Submitting,
    Completed,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    SignedIn,
    /// The message that was shown to the user.
    Rejected(String),
    /// The controller went away before the response arrived.
    Cancelled,
}

/// Abort handle of the in-flight request. Aborts on release and on drop.
#[derive(Debug, Default)]
pub struct PendingRequest {
    handle: Option<AbortHandle>,
}

impl PendingRequest {
    /// Registers a new request, aborting any previous one.
    pub fn arm(&mut self) -> AbortRegistration {
        self.release();
        let (handle, registration) = AbortHandle::new_pair();
        self.handle = Some(handle);
        registration
    }

    pub fn is_armed(&self) -> bool {
        self.handle.is_some()
    }

    /// Forgets a request that has completed.
    pub fn clear(&mut self) {
        self.handle = None;
    }

    /// Aborts the request if one is still pending.
    pub fn release(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

impl Drop for PendingRequest {
    fn drop(&mut self) {
        self.release();
    }
}

/// A validated request that knows which endpoint it goes to.
pub trait AuthSubmission {
    const MESSAGES: FlowMessages;

    fn send<A: AuthApi>(&self, api: &A) -> impl Future<Output = Result<AuthResponse, AppError>>;
}

impl AuthSubmission for SignupRequest {
    const MESSAGES: FlowMessages = FlowMessages {
        success: "Вы успешно зарегистрировались",
        failure: "Ошибка регистрации",
    };

    fn send<A: AuthApi>(&self, api: &A) -> impl Future<Output = Result<AuthResponse, AppError>> {
        api.signup(self)
    }
}

impl AuthSubmission for LoginRequest {
    const MESSAGES: FlowMessages = FlowMessages {
        success: "Вы успешно авторизовались",
        failure: "Ошибка авторизации",
    };

    fn send<A: AuthApi>(&self, api: &A) -> impl Future<Output = Result<AuthResponse, AppError>> {
        api.login(self)
    }
}

/// One submission, detached from the controller that produced it.
#[derive(Debug)]
pub struct SubmitTask<S> {
    request: S,
    registration: AbortRegistration,
}

impl<S: AuthSubmission> SubmitTask<S> {
    /// Sends the request and settles the response, unless the owning
    /// controller aborts first.
    pub async fn run<A, N, R>(self, flow: &AuthFlow<'_, A, N, R>) -> SubmitOutcome
    where
        A: AuthApi,
        N: Notifier,
        R: Navigator,
    {
        let Self {
            request,
            registration,
        } = self;

        match Abortable::new(request.send(flow.api), registration).await {
            Ok(response) => flow.settle(response, &S::MESSAGES).await,
            Err(_aborted) => {
                debug!("submission aborted before the response arrived");
                SubmitOutcome::Cancelled
            }
        }
    }
}

/// Form input that can be checked and turned into a request.
pub trait AuthForm {
    type Request: AuthSubmission;
    type Errors: Clone + fmt::Debug + Default;

    fn validate(&self) -> Result<Self::Request, Self::Errors>;
}

/// State of one form view: its input, phase and pending request.
#[derive(Debug, Default)]
pub struct FormController<F: AuthForm> {
    pub form: F,
    phase: FormPhase,
    errors: F::Errors,
    pending: PendingRequest,
    password_visible: bool,
}

impl<F: AuthForm> FormController<F> {
    pub fn new(form: F) -> Self {
        Self {
            form,
            phase: FormPhase::Editing,
            errors: F::Errors::default(),
            pending: PendingRequest::default(),
            password_visible: false,
        }
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == FormPhase::Submitting
    }

    /// Per-field errors from the last submit attempt.
    pub fn errors(&self) -> &F::Errors {
        &self.errors
    }

    pub fn password_visible(&self) -> bool {
        self.password_visible
    }

    pub fn toggle_password_visibility(&mut self) -> bool {
        self.password_visible = !self.password_visible;
        self.password_visible
    }

    /// Starts a submission. Returns `None` when the input is invalid or a
    /// request is already in flight; neither case reaches the network.
    pub fn submit(&mut self) -> Option<SubmitTask<F::Request>> {
        if self.is_submitting() {
            debug!("submit ignored while a request is in flight");
            return None;
        }

        match self.form.validate() {
            Ok(request) => {
                self.errors = F::Errors::default();
                self.phase = FormPhase::Submitting;
                Some(SubmitTask {
                    request,
                    registration: self.pending.arm(),
                })
            }
            Err(errors) => {
                self.errors = errors;
                None
            }
        }
    }

    /// Records how the last submission ended.
    pub fn finish(&mut self, outcome: &SubmitOutcome) {
        self.pending.clear();
        self.phase = match outcome {
            SubmitOutcome::SignedIn => FormPhase::Completed,
            SubmitOutcome::Rejected(_) | SubmitOutcome::Cancelled => FormPhase::Editing,
        };
    }

    /// Aborts the pending request. Called when the view goes away.
    pub fn teardown(&mut self) {
        if self.pending.is_armed() {
            debug!("form torn down with a request in flight");
        }
        self.pending.release();
        self.phase = FormPhase::Editing;
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::features::auth::types::{DefaultResponse, UserInfo};
    use futures::channel::oneshot;
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use std::rc::Rc;

    /// Ordered record of every call and side effect in a test.
    pub(crate) type EventLog = Rc<RefCell<Vec<String>>>;

    pub(crate) fn events(log: &EventLog) -> Vec<String> {
        log.borrow().clone()
    }

    pub(crate) fn notifier(log: &EventLog) -> impl Fn(&str) {
        let log = Rc::clone(log);
        move |message: &str| log.borrow_mut().push(format!("notify {message}"))
    }

    pub(crate) fn navigator(log: &EventLog) -> impl Fn(&str) {
        let log = Rc::clone(log);
        move |path: &str| log.borrow_mut().push(format!("navigate {path}"))
    }

    /// `AuthApi` double answering from queued responses. An empty queue
    /// answers with a network error.
    #[derive(Default)]
    pub(crate) struct ScriptedApi {
        pub log: EventLog,
        auth: RefCell<VecDeque<Result<AuthResponse, AppError>>>,
        refresh: RefCell<VecDeque<Result<AuthResponse, AppError>>>,
        logout: RefCell<VecDeque<Result<DefaultResponse, AppError>>>,
        user_info: RefCell<VecDeque<Result<UserInfo, AppError>>>,
        gate: RefCell<Option<oneshot::Receiver<()>>>,
    }

    fn next<T>(queue: &RefCell<VecDeque<Result<T, AppError>>>) -> Result<T, AppError> {
        queue
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(AppError::Network("no scripted response".to_string())))
    }

    impl ScriptedApi {
        pub(crate) fn new(log: &EventLog) -> Self {
            Self {
                log: Rc::clone(log),
                ..Self::default()
            }
        }

        pub(crate) fn answer(self, response: Result<AuthResponse, AppError>) -> Self {
            self.auth.borrow_mut().push_back(response);
            self
        }

        pub(crate) fn answer_refresh(self, response: Result<AuthResponse, AppError>) -> Self {
            self.refresh.borrow_mut().push_back(response);
            self
        }

        pub(crate) fn answer_logout(self, response: Result<DefaultResponse, AppError>) -> Self {
            self.logout.borrow_mut().push_back(response);
            self
        }

        pub(crate) fn answer_user_info(self, response: Result<UserInfo, AppError>) -> Self {
            self.user_info.borrow_mut().push_back(response);
            self
        }

        /// Holds signup and login calls until the returned sender fires.
        pub(crate) fn gated(self) -> (Self, oneshot::Sender<()>) {
            let (sender, receiver) = oneshot::channel();
            *self.gate.borrow_mut() = Some(receiver);
            (self, sender)
        }

        fn record(&self, event: String) {
            self.log.borrow_mut().push(event);
        }

        async fn wait_for_gate(&self) {
            let gate = self.gate.borrow_mut().take();
            if let Some(gate) = gate {
                let _ = gate.await;
            }
        }
    }

    impl AuthApi for ScriptedApi {
        async fn signup(&self, request: &SignupRequest) -> Result<AuthResponse, AppError> {
            self.record(format!("signup {}", request.email));
            self.wait_for_gate().await;
            next(&self.auth)
        }

        async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, AppError> {
            self.record(format!("login {}", request.email));
            self.wait_for_gate().await;
            next(&self.auth)
        }

        async fn refresh(&self, refresh_token: &str) -> Result<AuthResponse, AppError> {
            self.record(format!("refresh {refresh_token}"));
            next(&self.refresh)
        }

        async fn logout(&self, refresh_token: &str) -> Result<DefaultResponse, AppError> {
            self.record(format!("logout {refresh_token}"));
            next(&self.logout)
        }

        async fn user_info(&self, access_token: &str) -> Result<UserInfo, AppError> {
            self.record(format!("user_info {access_token}"));
            next(&self.user_info)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::{EventLog, ScriptedApi, events, navigator, notifier};
    use super::*;
    use crate::features::auth::types::SessionTokens;
    use secrecy::SecretString;

    fn login_request() -> LoginRequest {
        LoginRequest {
            email: "a@b.com".to_string(),
            password: SecretString::from("Abcdef12".to_string()),
            remember_me: false,
        }
    }

    #[tokio::test]
    async fn transport_error_prefers_server_message() {
        let log = EventLog::default();
        let api = ScriptedApi::new(&log);
        let session = Session::in_memory();
        let (notify, navigate) = (notifier(&log), navigator(&log));
        let flow = AuthFlow {
            api: &api,
            session: &session,
            notifier: &notify,
            navigator: &navigate,
        };

        let with_message = Err(AppError::Http {
            status: 409,
            message: Some("Email занят".to_string()),
        });
        let without_message = Err(AppError::Http {
            status: 500,
            message: None,
        });

        assert_eq!(
            flow.settle(with_message, &SignupRequest::MESSAGES).await,
            SubmitOutcome::Rejected("Email занят".to_string())
        );
        assert_eq!(
            flow.settle(without_message, &LoginRequest::MESSAGES).await,
            SubmitOutcome::Rejected("Ошибка авторизации".to_string())
        );
        assert_eq!(
            events(&log),
            vec!["notify Email занят", "notify Ошибка авторизации"]
        );
        assert!(!session.is_logged());
    }

    #[tokio::test]
    async fn rejected_response_leaves_session_alone() {
        let log = EventLog::default();
        let api = ScriptedApi::new(&log);
        let session = Session::in_memory();
        let (notify, navigate) = (notifier(&log), navigator(&log));
        let flow = AuthFlow {
            api: &api,
            session: &session,
            notifier: &notify,
            navigator: &navigate,
        };

        let outcome = flow
            .settle(
                Ok(AuthResponse::Rejected("Подтвердите email".to_string())),
                &LoginRequest::MESSAGES,
            )
            .await;

        assert_eq!(outcome, SubmitOutcome::Rejected("Подтвердите email".to_string()));
        assert_eq!(events(&log), vec!["notify Подтвердите email"]);
        assert!(!session.is_logged());
    }

    #[tokio::test]
    async fn success_writes_session_before_navigating() {
        let log = EventLog::default();
        let api = ScriptedApi::new(&log).answer_user_info(Ok(Default::default()));
        let session = Session::in_memory();
        let session_probe = session.clone();
        let probe_log = log.clone();
        let navigate = move |path: &str| {
            let logged = session_probe.is_logged();
            probe_log
                .borrow_mut()
                .push(format!("navigate {path} logged={logged}"));
        };
        let notify = notifier(&log);
        let flow = AuthFlow {
            api: &api,
            session: &session,
            notifier: &notify,
            navigator: &navigate,
        };

        let outcome = flow
            .settle(
                Ok(AuthResponse::Authenticated(SessionTokens::new("t1", "t2", "u1"))),
                &LoginRequest::MESSAGES,
            )
            .await;

        assert_eq!(outcome, SubmitOutcome::SignedIn);
        assert_eq!(
            events(&log),
            vec![
                "notify Вы успешно авторизовались",
                "navigate / logged=true",
                "user_info t1",
            ]
        );
    }

    #[test]
    fn pending_request_aborts_on_drop() {
        let mut pending = PendingRequest::default();
        let registration = pending.arm();
        let task = Abortable::new(futures::future::pending::<()>(), registration);
        drop(pending);

        assert_eq!(
            futures::executor::block_on(task),
            Err(futures::future::Aborted)
        );
    }

    #[test]
    fn cleared_request_is_not_aborted() {
        let mut pending = PendingRequest::default();
        let registration = pending.arm();
        let task = Abortable::new(futures::future::ready(7), registration);
        pending.clear();
        drop(pending);

        assert_eq!(futures::executor::block_on(task), Ok(7));
    }

    #[tokio::test]
    async fn aborted_task_reports_cancelled_without_side_effects() {
        let log = EventLog::default();
        let api = ScriptedApi::new(&log).answer(Ok(AuthResponse::Authenticated(
            SessionTokens::new("t1", "t2", "u1"),
        )));
        let session = Session::in_memory();
        let (notify, navigate) = (notifier(&log), navigator(&log));
        let flow = AuthFlow {
            api: &api,
            session: &session,
            notifier: &notify,
            navigator: &navigate,
        };

        let mut pending = PendingRequest::default();
        let task = SubmitTask {
            request: login_request(),
            registration: pending.arm(),
        };
        pending.release();

        assert_eq!(task.run(&flow).await, SubmitOutcome::Cancelled);
        assert!(!session.is_logged());
        assert!(events(&log).is_empty());
    }
}

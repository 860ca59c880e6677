//! Session upkeep after sign-in: profile loading, token refresh and logout.

use crate::app_lib::AppError;
use crate::features::auth::client::AuthApi;
use crate::features::auth::form::{AuthFlow, Navigator, Notifier};
use crate::features::auth::session::Session;
use crate::features::auth::types::{AuthResponse, UserInfo};
use crate::paths;
use secrecy::ExposeSecret;
use tracing::{debug, warn};

pub const LOGOUT_MESSAGE: &str = "Вы вышли из системы";

/// Fetches and caches the signed-in user's profile. Failures are logged and
/// leave the session as it was.
pub async fn load_user_info<A: AuthApi>(api: &A, session: &Session) -> Option<UserInfo> {
    match fetch_user_info(api, session).await {
        Ok(info) => info,
        Err(err) => {
            warn!(error = %err, "failed to load user info");
            None
        }
    }
}

async fn fetch_user_info<A: AuthApi>(
    api: &A,
    session: &Session,
) -> Result<Option<UserInfo>, AppError> {
    let Some(access_token) = session.access_token() else {
        return Ok(None);
    };

    let info = match api.user_info(access_token.expose_secret()).await {
        Err(err) if err.is_unauthorized() => {
            debug!("access token rejected, refreshing once");
            refresh_tokens(api, session).await?;
            let access_token = session.access_token().ok_or(AppError::Unauthenticated)?;
            api.user_info(access_token.expose_secret()).await?
        }
        result => result?,
    };

    session.set_user_info(Some(info.clone()));
    Ok(Some(info))
}

/// Exchanges the stored refresh token for a new pair.
///
/// # Errors
/// `AppError::Unauthenticated` without a refresh token. Any failed exchange
/// clears the session before the error is returned.
pub async fn refresh_tokens<A: AuthApi>(api: &A, session: &Session) -> Result<(), AppError> {
    let refresh_token = session.refresh_token().ok_or(AppError::Unauthenticated)?;

    let result = match api.refresh(refresh_token.expose_secret()).await {
        Ok(AuthResponse::Authenticated(tokens)) => {
            session.sign_in(tokens);
            return Ok(());
        }
        Ok(AuthResponse::Rejected(message)) => Err(AppError::Http {
            status: 401,
            message: Some(message),
        }),
        Ok(AuthResponse::Malformed) => Err(AppError::Parse(
            "refresh response is missing session fields".to_string(),
        )),
        Err(err) => Err(err),
    };

    warn!("token refresh failed, clearing session");
    session.clear();
    result
}

/// Signs out locally whatever the server answers.
pub async fn logout<A, N, R>(flow: &AuthFlow<'_, A, N, R>)
where
    A: AuthApi,
    N: Notifier,
    R: Navigator,
{
    if let Some(refresh_token) = flow.session.refresh_token() {
        if let Err(err) = flow.api.logout(refresh_token.expose_secret()).await {
            warn!(error = %err, "logout request failed");
        }
    }

    sign_out_locally(flow.session, flow.notifier, flow.navigator);
}

/// Drops the local session, tells the user and returns to the landing page.
/// Used on its own when the API cannot be reached at all.
pub fn sign_out_locally<N, R>(session: &Session, notifier: &N, navigator: &R)
where
    N: Notifier,
    R: Navigator,
{
    session.clear();
    notifier.notify(LOGOUT_MESSAGE);
    navigator.navigate(paths::HOME);
}

//! Request and response types for auth-related API calls. Requests carry
//! passwords and responses carry tokens, so none of these may be logged; secret
//! fields are wrapped in `SecretString` to keep them out of `Debug` output.

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

/// Credentials for `POST /signup`, built only from a validated form.
#[derive(Debug)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: SecretString,
}

/// Credentials for `POST /login`.
#[derive(Debug)]
pub struct LoginRequest {
    pub email: String,
    pub password: SecretString,
    pub remember_me: bool,
}

/// Wire shape of a signup request.
#[derive(Serialize)]
pub(crate) struct SignupPayload<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

impl<'a> From<&'a SignupRequest> for SignupPayload<'a> {
    fn from(request: &'a SignupRequest) -> Self {
        Self {
            name: &request.name,
            email: &request.email,
            password: request.password.expose_secret(),
        }
    }
}

/// Wire shape of a login request.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct LoginPayload<'a> {
    pub email: &'a str,
    pub password: &'a str,
    pub remember_me: bool,
}

impl<'a> From<&'a LoginRequest> for LoginPayload<'a> {
    fn from(request: &'a LoginRequest) -> Self {
        Self {
            email: &request.email,
            password: request.password.expose_secret(),
            remember_me: request.remember_me,
        }
    }
}

/// Wire shape of refresh and logout requests.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RefreshTokenPayload<'a> {
    pub refresh_token: &'a str,
}

/// Token pair and owner issued by signup, login and refresh.
#[derive(Debug)]
pub struct SessionTokens {
    pub access_token: SecretString,
    pub refresh_token: SecretString,
    pub user_id: String,
}

impl SessionTokens {
    pub fn new(
        access_token: impl Into<String>,
        refresh_token: impl Into<String>,
        user_id: impl Into<String>,
    ) -> Self {
        Self {
            access_token: SecretString::from(access_token.into()),
            refresh_token: SecretString::from(refresh_token.into()),
            user_id: user_id.into(),
        }
    }
}

/// Outcome of an auth call that reached the server and got a 2xx answer.
///
/// The variant is decided once when the body is decoded; downstream code
/// matches on it instead of re-inspecting fields.
#[derive(Debug)]
pub enum AuthResponse {
    Authenticated(SessionTokens),
    /// The server answered with a message of its own instead of a session.
    Rejected(String),
    /// One of `accessToken`, `refreshToken` or `userId` is missing or empty.
    Malformed,
}

/// Undecided wire shape shared by signup, login and refresh responses.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawAuthResponse {
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl From<RawAuthResponse> for AuthResponse {
    fn from(raw: RawAuthResponse) -> Self {
        let message = raw.message.filter(|message| !message.is_empty());
        let fields = (
            raw.access_token.filter(|value| !value.is_empty()),
            raw.refresh_token.filter(|value| !value.is_empty()),
            raw.user_id.filter(|value| !value.is_empty()),
        );

        // A missing field wins over a carried message.
        match (fields, message) {
            ((Some(_), Some(_), Some(_)), Some(message)) => AuthResponse::Rejected(message),
            ((Some(access), Some(refresh), Some(user_id)), None) => {
                AuthResponse::Authenticated(SessionTokens::new(access, refresh, user_id))
            }
            _ => AuthResponse::Malformed,
        }
    }
}

/// Generic `{error, message}` answer, returned by logout.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefaultResponse {
    #[serde(default)]
    pub error: bool,
    #[serde(default)]
    pub message: String,
}

/// Profile of the signed-in user as returned by `GET /users`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use serde_json::json;

    fn decode(value: serde_json::Value) -> Result<AuthResponse> {
        let raw: RawAuthResponse = serde_json::from_value(value)?;
        Ok(AuthResponse::from(raw))
    }

    #[test]
    fn full_token_set_is_authenticated() -> Result<()> {
        let response = decode(json!({
            "accessToken": "t1",
            "refreshToken": "t2",
            "userId": "u1"
        }))?;
        let AuthResponse::Authenticated(tokens) = response else {
            panic!("expected authenticated response, got {response:?}");
        };
        assert_eq!(tokens.access_token.expose_secret(), "t1");
        assert_eq!(tokens.refresh_token.expose_secret(), "t2");
        assert_eq!(tokens.user_id, "u1");
        Ok(())
    }

    #[test]
    fn message_only_body_is_malformed() -> Result<()> {
        let response = decode(json!({ "error": true, "message": "Неверные данные" }))?;
        assert!(matches!(response, AuthResponse::Malformed));
        Ok(())
    }

    #[test]
    fn message_alongside_tokens_is_rejected() -> Result<()> {
        let response = decode(json!({
            "accessToken": "t1",
            "refreshToken": "t2",
            "userId": "u1",
            "message": "Подтвердите email"
        }))?;
        match response {
            AuthResponse::Rejected(message) => assert_eq!(message, "Подтвердите email"),
            other => panic!("expected rejection, got {other:?}"),
        }
        Ok(())
    }

    #[test]
    fn empty_message_does_not_reject() -> Result<()> {
        let response = decode(json!({
            "accessToken": "t1",
            "refreshToken": "t2",
            "userId": "u1",
            "message": ""
        }))?;
        assert!(matches!(response, AuthResponse::Authenticated(_)));
        Ok(())
    }

    #[test]
    fn any_missing_or_empty_field_is_malformed() -> Result<()> {
        for body in [
            json!({ "refreshToken": "t2", "userId": "u1" }),
            json!({ "accessToken": "t1", "userId": "u1" }),
            json!({ "accessToken": "t1", "refreshToken": "t2" }),
            json!({ "accessToken": "", "refreshToken": "t2", "userId": "u1" }),
            json!({}),
        ] {
            let response = decode(body)?;
            assert!(matches!(response, AuthResponse::Malformed));
        }
        Ok(())
    }

    #[test]
    fn tokens_never_show_in_debug_output() {
        let tokens = SessionTokens::new("secret-access", "secret-refresh", "u1");
        let rendered = format!("{tokens:?}");
        assert!(!rendered.contains("secret-access"));
        assert!(!rendered.contains("secret-refresh"));
        assert!(rendered.contains("u1"));
    }

    #[test]
    fn login_payload_uses_camel_case() -> Result<()> {
        let request = LoginRequest {
            email: "a@b.com".to_string(),
            password: SecretString::from("Abcdef12".to_string()),
            remember_me: true,
        };
        let value = serde_json::to_value(LoginPayload::from(&request))?;
        assert_eq!(
            value,
            json!({ "email": "a@b.com", "password": "Abcdef12", "rememberMe": true })
        );
        Ok(())
    }
}

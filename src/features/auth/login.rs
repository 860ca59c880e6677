//! Login form: email, password and the remember-me flag.

use crate::features::auth::form::{AuthForm, FormController};
use crate::features::auth::types::LoginRequest;
use crate::features::auth::validation::{FieldError, validate_email, validate_required};
use secrecy::{ExposeSecret, SecretString};

#[derive(Debug)]
pub struct LoginForm {
    pub email: String,
    pub password: SecretString,
    pub remember_me: bool,
}

impl Default for LoginForm {
    fn default() -> Self {
        Self {
            email: String::new(),
            password: SecretString::from(String::new()),
            remember_me: false,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoginErrors {
    pub email: Option<FieldError>,
    pub password: Option<FieldError>,
}

impl AuthForm for LoginForm {
    type Request = LoginRequest;
    type Errors = LoginErrors;

    fn validate(&self) -> Result<LoginRequest, LoginErrors> {
        let errors = LoginErrors {
            email: validate_email(&self.email).err(),
            password: validate_required(self.password.expose_secret()).err(),
        };
        if errors != LoginErrors::default() {
            return Err(errors);
        }

        Ok(LoginRequest {
            email: self.email.clone(),
            password: SecretString::from(self.password.expose_secret().to_owned()),
            remember_me: self.remember_me,
        })
    }
}

pub type LoginController = FormController<LoginForm>;

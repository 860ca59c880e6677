//! Signup form: name, email, password and the consent checkbox.

use crate::features::auth::form::{AuthForm, FormController};
use crate::features::auth::types::SignupRequest;
use crate::features::auth::validation::{
    FieldError, validate_consent, validate_email, validate_name, validate_password,
};
use secrecy::{ExposeSecret, SecretString};

#[derive(Debug)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: SecretString,
    pub agree: bool,
}

impl Default for SignupForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            password: SecretString::from(String::new()),
            agree: false,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SignupErrors {
    pub name: Option<FieldError>,
    pub email: Option<FieldError>,
    pub password: Option<FieldError>,
    pub agree: Option<FieldError>,
}

impl SignupErrors {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl AuthForm for SignupForm {
    type Request = SignupRequest;
    type Errors = SignupErrors;

    fn validate(&self) -> Result<SignupRequest, SignupErrors> {
        let errors = SignupErrors {
            name: validate_name(&self.name).err(),
            email: validate_email(&self.email).err(),
            password: validate_password(self.password.expose_secret()).err(),
            agree: validate_consent(self.agree).err(),
        };
        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(SignupRequest {
            name: self.name.trim_end().to_string(),
            email: self.email.clone(),
            password: SecretString::from(self.password.expose_secret().to_owned()),
        })
    }
}

pub type SignupController = FormController<SignupForm>;

use std::sync::Arc;

use thiserror::Error;
use tracing::{info, warn};
use validator::{Validate, ValidationErrors};

use crate::usecase::ports::adoption_api::{AdoptionApi, ApiError, Credentials};

#[derive(Debug, Error)]
pub enum LoginError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("login failed: {0}")]
    Api(#[from] ApiError),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Validate)]
pub struct LoginForm {
    #[validate(length(min = 2, message = "Name must be at least 2 characters."))]
    pub name: String,
    #[validate(email(message = "Please enter a valid email address."))]
    pub email: String,
}

impl LoginForm {
    pub fn new(name: &str, email: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
        }
    }

    /// Message for the first invalid field, if any.
    pub fn field_error(errors: &ValidationErrors, field: &str) -> Option<String> {
        errors
            .field_errors()
            .get(field)
            .and_then(|list| list.first())
            .map(|err| {
                err.message
                    .as_ref()
                    .map(|message| message.to_string())
                    .unwrap_or_else(|| format!("invalid {field}"))
            })
    }
}

#[derive(Clone)]
pub struct SessionService {
    api: Arc<dyn AdoptionApi>,
}

impl SessionService {
    pub fn new(api: Arc<dyn AdoptionApi>) -> Self {
        Self { api }
    }

    /// Validates the form locally; an invalid form is never sent.
    pub async fn login(&self, form: &LoginForm) -> Result<(), LoginError> {
        form.validate()?;
        let credentials = Credentials {
            name: form.name.clone(),
            email: form.email.clone(),
        };
        match self.api.login(&credentials).await {
            Ok(()) => {
                info!(name = %form.name, "logged in");
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "login rejected");
                Err(err.into())
            }
        }
    }

    pub async fn logout(&self) -> Result<(), ApiError> {
        self.api.logout().await?;
        info!("logged out");
        Ok(())
    }
}

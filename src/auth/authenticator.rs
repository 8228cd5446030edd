//! Mock authentication flows
//!
//! Login checks credentials against a caller-supplied user list after a
//! simulated network delay; sign-up validates the form, registers the user and
//! signs them in. Both persist the token and the sanitized user.

use log::{debug, info};
use std::sync::Arc;

use super::credentials::{Credentials, UserRecord};
use super::results::LoginResult;
use super::token::{current_time_millis, generate_token};
use crate::config::AuthConfig;
use crate::error::AuthError;
use crate::error::handlers::handle_error;
use crate::storage::SecureStore;
use crate::users::UserRegistry;
use crate::validation::SignupForm;
use crate::validation::fields::trim_input;

pub struct Authenticator {
    pub(super) store: Arc<dyn SecureStore>,
    pub(super) config: AuthConfig,
}

impl Authenticator {
    pub fn new(store: Arc<dyn SecureStore>, config: AuthConfig) -> Self {
        Self { store, config }
    }

    pub fn config(&self) -> &AuthConfig {
        &self.config
    }

    /// Stand-in for a backend round trip. Cannot be cancelled once started.
    async fn simulate_latency(&self) {
        tokio::time::sleep(self.config.login_delay()).await;
    }

    /// Signs in against whatever `get_users` returns after the delay.
    ///
    /// Any mismatch yields [`AuthError::InvalidCredentials`] without saying
    /// whether the email or the password was wrong.
    pub async fn login<F>(
        &self,
        credentials: &Credentials,
        get_users: F,
    ) -> Result<LoginResult, AuthError>
    where
        F: FnOnce() -> Vec<UserRecord>,
    {
        self.simulate_latency().await;

        let users = get_users();
        let Some(record) = users.iter().find(|u| u.matches(credentials)) else {
            debug!("No user matched login for {}", credentials.email);
            let err = AuthError::InvalidCredentials;
            handle_error(&err);
            return Err(err);
        };

        let result = self.issue_session(record).await?;
        info!("User {} logged in", result.user.id);
        Ok(result)
    }

    /// Registers a new account from a sign-up form and signs it in.
    pub async fn signup(
        &self,
        form: &SignupForm,
        registry: &UserRegistry,
    ) -> Result<LoginResult, AuthError> {
        let errors = form.validate();
        if !errors.is_valid() {
            let err = AuthError::Validation(errors);
            handle_error(&err);
            return Err(err);
        }

        if registry.email_exists(&form.email) {
            let err = AuthError::EmailTaken(form.email.clone());
            handle_error(&err);
            return Err(err);
        }

        let first_name = trim_input(&form.first_name);
        let last_name = trim_input(&form.last_name);
        let record = UserRecord {
            first_name: Some(first_name.to_string()),
            last_name: Some(last_name.to_string()),
            phone_number: Some(trim_input(&form.phone_number).to_string()),
            country_code: form.country_code.clone(),
            ..UserRecord::new(
                current_time_millis().to_string(),
                trim_input(&form.email),
                form.password.clone(),
                format!("{} {}", first_name, last_name),
            )
        };
        registry.add(record.clone());

        self.simulate_latency().await;

        let result = self.issue_session(&record).await?;
        info!("User {} signed up", result.user.id);
        Ok(result)
    }

    async fn issue_session(&self, record: &UserRecord) -> Result<LoginResult, AuthError> {
        let token = generate_token(&record.id);
        let user = record.sanitized();

        self.store_token(&token).await?;
        self.store_user(&user).await?;

        Ok(LoginResult { token, user })
    }
}

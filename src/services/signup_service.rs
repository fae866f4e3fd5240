//! Signup service - turns a validated signup form into a registration or a
//! rejection.
//!
//! Check order is fixed and the first failing check decides the outcome:
//! password confirmation, then email, then username.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::signup::{first_conflict, screen};
use crate::domain::{SignupForm, SignupOutcome};
use crate::errors::AppResult;
use crate::infra::UserStore;

/// Signup service trait for dependency injection.
#[async_trait]
pub trait SignupService: Send + Sync {
    /// Process a signup submission.
    ///
    /// Rejections are `Ok(SignupOutcome::Rejected(_))`; `Err` means storage
    /// failed or lost a uniqueness race.
    async fn signup(&self, form: SignupForm) -> AppResult<SignupOutcome>;
}

/// Concrete implementation of SignupService over any user directory.
pub struct Registrar {
    users: Arc<dyn UserStore>,
}

impl Registrar {
    pub fn new(users: Arc<dyn UserStore>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl SignupService for Registrar {
    async fn signup(&self, form: SignupForm) -> AppResult<SignupOutcome> {
        if let Some(reason) = screen(&form) {
            tracing::debug!(username = %form.username, "Signup rejected: {}", reason);
            return Ok(SignupOutcome::Rejected(reason));
        }

        // Username is only consulted once the email is known to be free.
        let email_taken = self.users.email_taken(&form.email).await?;
        let username_taken = !email_taken && self.users.username_taken(&form.username).await?;

        if let Some(reason) = first_conflict(email_taken, username_taken) {
            tracing::debug!(username = %form.username, "Signup rejected: {}", reason);
            return Ok(SignupOutcome::Rejected(reason));
        }

        let (new_user, new_profile) = form.into_records()?;
        let registration = self.users.register(new_user, new_profile).await?;

        tracing::info!(
            user_id = %registration.user.id,
            username = %registration.user.username,
            "User registered"
        );

        Ok(SignupOutcome::Registered(registration))
    }
}

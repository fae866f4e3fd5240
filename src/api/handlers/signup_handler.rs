//! Signup handlers.
//!
//! The service decides; this layer only turns the outcome into a redirect
//! and, for rejections, a flash notice.

use axum::{
    extract::State,
    response::{Html, IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::CookieJar;

use crate::api::extractors::ValidatedForm;
use crate::api::{flash, views, AppState};
use crate::config::{PATH_LOGIN, PATH_SIGNUP};
use crate::domain::{SignupForm, SignupOutcome};
use crate::errors::AppResult;

/// Render the signup form, consuming any pending notice
pub async fn signup_form(jar: CookieJar) -> (CookieJar, Html<String>) {
    let (jar, notice) = flash::take(jar);
    (jar, Html(views::signup(notice)))
}

/// Process a signup submission
pub async fn signup(
    State(state): State<AppState>,
    jar: CookieJar,
    ValidatedForm(form): ValidatedForm<SignupForm>,
) -> AppResult<Response> {
    let outcome = state.signup_service.signup(form).await?;

    let response = match outcome {
        SignupOutcome::Registered(_) => Redirect::to(PATH_LOGIN).into_response(),
        SignupOutcome::Rejected(reason) => {
            (flash::push(jar, reason), Redirect::to(PATH_SIGNUP)).into_response()
        }
    };

    Ok(response)
}

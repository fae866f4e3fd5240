//! Signup submission, its possible rejections, and the ordering rules
//! that decide which rejection a submission gets.
//!
//! Everything here is free of I/O. The signup service performs the
//! directory lookups between [`screen`] and [`first_conflict`].

use std::str::FromStr;

use serde::Deserialize;
use validator::Validate;

use super::{NewProfile, NewUser, Password, Profile, User};
use crate::errors::AppResult;

/// Signup form as posted by the signup page.
#[derive(Clone, Deserialize, Validate)]
pub struct SignupForm {
    /// Display name
    #[serde(rename = "uname")]
    #[validate(length(min = 1, max = 20, message = "Name must be 1 to 20 characters"))]
    pub name: String,
    /// Login name
    #[serde(rename = "uid")]
    #[validate(length(min = 1, max = 150, message = "Username must be 1 to 150 characters"))]
    pub username: String,
    #[serde(rename = "uemail")]
    #[validate(
        email(message = "Invalid email format"),
        length(max = 50, message = "Email must be at most 50 characters")
    )]
    pub email: String,
    #[serde(rename = "psw1")]
    #[validate(length(min = 1, max = 20, message = "Password must be 1 to 20 characters"))]
    pub password: String,
    #[serde(rename = "psw2")]
    pub password_confirmation: String,
}

impl std::fmt::Debug for SignupForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignupForm")
            .field("name", &self.name)
            .field("username", &self.username)
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

impl SignupForm {
    /// Split the form into the directory entry and the profile to create.
    ///
    /// Hashes the password, so only call this once the form has been accepted.
    pub fn into_records(self) -> AppResult<(NewUser, NewProfile)> {
        let hashed = Password::new(&self.password)?;

        let user = NewUser {
            username: self.username,
            email: self.email.clone(),
            password: hashed,
            first_name: self.name.clone(),
        };
        let profile = NewProfile {
            name: self.name,
            password: self.password,
            email: self.email,
        };

        Ok((user, profile))
    }
}

/// Why a signup was turned away. Shown to the user as a one-line notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignupRejection {
    PasswordMismatch,
    EmailTaken,
    UsernameTaken,
}

impl SignupRejection {
    /// Notice text shown on the signup page
    pub fn message(&self) -> &'static str {
        match self {
            SignupRejection::PasswordMismatch => "Passwords do not match",
            SignupRejection::EmailTaken => "Email already exists",
            SignupRejection::UsernameTaken => "Username already exists",
        }
    }

    /// Stable token used to carry the rejection across a redirect
    pub fn code(&self) -> &'static str {
        match self {
            SignupRejection::PasswordMismatch => "password_mismatch",
            SignupRejection::EmailTaken => "email_taken",
            SignupRejection::UsernameTaken => "username_taken",
        }
    }
}

impl std::fmt::Display for SignupRejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

/// Unknown rejection code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownRejection(pub String);

impl FromStr for SignupRejection {
    type Err = UnknownRejection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "password_mismatch" => Ok(SignupRejection::PasswordMismatch),
            "email_taken" => Ok(SignupRejection::EmailTaken),
            "username_taken" => Ok(SignupRejection::UsernameTaken),
            other => Err(UnknownRejection(other.to_string())),
        }
    }
}

/// The user and profile created by a successful signup
#[derive(Debug, Clone)]
pub struct Registration {
    pub user: User,
    pub profile: Profile,
}

/// Result of processing a signup submission
#[derive(Debug, Clone)]
pub enum SignupOutcome {
    Registered(Registration),
    Rejected(SignupRejection),
}

impl SignupOutcome {
    pub fn rejection(&self) -> Option<SignupRejection> {
        match self {
            SignupOutcome::Rejected(reason) => Some(*reason),
            SignupOutcome::Registered(_) => None,
        }
    }
}

/// Checks that need no storage. Runs before any directory lookup.
pub fn screen(form: &SignupForm) -> Option<SignupRejection> {
    if form.password != form.password_confirmation {
        return Some(SignupRejection::PasswordMismatch);
    }
    None
}

/// Pick the rejection for the directory facts found. Email wins over username.
pub fn first_conflict(email_taken: bool, username_taken: bool) -> Option<SignupRejection> {
    if email_taken {
        Some(SignupRejection::EmailTaken)
    } else if username_taken {
        Some(SignupRejection::UsernameTaken)
    } else {
        None
    }
}

//! Domain layer - Core business entities and logic
//!
//! The user directory entry, the profile it owns, the password value
//! object, and the signup rules. No infrastructure concerns live here.

pub mod password;
pub mod profile;
pub mod signup;
pub mod user;

pub use password::Password;
pub use profile::{NewProfile, Profile};
pub use signup::{Registration, SignupForm, SignupOutcome, SignupRejection};
pub use user::{NewUser, User};

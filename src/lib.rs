//! Bookshelf - a small book search and shelf site with user signup.
//!
//! Four pages (home, shelf, login, signup) served by axum. Signup checks a
//! form against the user directory and creates the user together with its
//! profile.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Users, profiles, passwords and the signup rules
//! - **services**: The signup use case
//! - **infra**: Database, migrations, user directory implementations
//! - **api**: HTTP handlers, views, flash notices and routes
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Start without a database
//! cargo run -- serve --in-memory
//!
//! # Run migrations
//! cargo run -- migrate up
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{Password, Profile, SignupForm, SignupOutcome, SignupRejection, User};
pub use errors::{AppError, AppResult};

//! API layer - HTTP handlers and routing
//!
//! - Page and signup handlers
//! - Form extractor and flash notices
//! - HTML views
//! - Route definitions

pub mod extractors;
pub mod flash;
pub mod handlers;
pub mod routes;
pub mod state;
pub mod views;

pub use routes::create_router;
pub use state::AppState;

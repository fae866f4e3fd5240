//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and infrastructure to fulfill
//! application use cases. They depend on abstractions (traits) for
//! dependency inversion.

pub mod container;
mod signup_service;

pub use container::{ServiceContainer, Services};
pub use signup_service::{Registrar, SignupService};

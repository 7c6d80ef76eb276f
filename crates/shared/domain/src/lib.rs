//! Domain layer - Core directory entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.
//! The directory service and any future backing store share these types.

pub mod constants;
pub mod error;
pub mod user;

pub use constants::*;
pub use error::{DomainError, DomainResult};
pub use user::{User, UserStatus};

//! Directory Service Library
//!
//! This crate provides an identity-keyed directory of user records behind
//! the [`DirectoryService`] capability set, with an in-memory backing store.
//! It is embedded as a library; there is no network surface.

pub mod config;
pub mod repository;
pub mod service;

pub use config::DirectoryConfig;
pub use repository::{InMemoryUserStore, UserRepository};
pub use service::{DirectoryService, UserDirectory};

/// Load configuration from the environment, install tracing and build an
/// in-memory directory.
///
/// A tracing subscriber that is already installed is left in place.
pub fn bootstrap() -> UserDirectory {
    let config = DirectoryConfig::from_env();
    if common::telemetry::init_tracing(&config.log_level).is_err() {
        tracing::debug!("Tracing subscriber already installed");
    }
    UserDirectory::from_config(&config)
}

//! Service layer - the directory capability set.

mod directory_service;

pub use directory_service::{DirectoryService, UserDirectory};

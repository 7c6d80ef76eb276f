//! Common utilities shared across the directory crates.
//!
//! This crate provides:
//! - Unified error handling for directory operations
//! - Configuration structures
//! - Tracing subscriber setup

pub mod config;
pub mod error;
pub mod telemetry;

pub use config::*;
pub use error::{AppError, AppResult, OptionExt};

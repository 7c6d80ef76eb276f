//! Domain-level constants.
//!
//! These constants define the lifecycle vocabulary and validation rules.

// =============================================================================
// Lifecycle Status
// =============================================================================

/// Status of a record that is in normal use (default for new records)
pub const STATUS_ACTIVE: &str = "ACTIVE";

/// Status of a record that has been switched off
pub const STATUS_INACTIVE: &str = "INACTIVE";

/// Status of a record awaiting activation
pub const STATUS_PENDING: &str = "PENDING";

/// All valid status values
pub const VALID_STATUSES: &[&str] = &[STATUS_ACTIVE, STATUS_INACTIVE, STATUS_PENDING];

/// Check if a status value is valid (case-insensitive)
pub fn is_valid_status(status: &str) -> bool {
    VALID_STATUSES
        .iter()
        .any(|s| s.eq_ignore_ascii_case(status.trim()))
}

// =============================================================================
// Validation
// =============================================================================

/// Minimum identity length after trimming
pub const MIN_ID_LENGTH: usize = 1;

/// Minimum name length after trimming
pub const MIN_NAME_LENGTH: usize = 1;

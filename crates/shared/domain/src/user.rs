//! User domain entity and related types.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::{MIN_ID_LENGTH, MIN_NAME_LENGTH, STATUS_ACTIVE, STATUS_INACTIVE, STATUS_PENDING};
use crate::error::{DomainError, DomainResult};

/// Lifecycle status enumeration.
///
/// Any status may move to any other; no transition table is enforced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum UserStatus {
    #[default]
    Active,
    Inactive,
    Pending,
}

impl UserStatus {
    /// Every member of the closed status set
    pub const ALL: [UserStatus; 3] = [UserStatus::Active, UserStatus::Inactive, UserStatus::Pending];

    /// Canonical uppercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            UserStatus::Active => STATUS_ACTIVE,
            UserStatus::Inactive => STATUS_INACTIVE,
            UserStatus::Pending => STATUS_PENDING,
        }
    }
}

impl FromStr for UserStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        UserStatus::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| DomainError::invalid_argument(format!("unknown status '{}'", s)))
    }
}

impl From<UserStatus> for String {
    fn from(status: UserStatus) -> Self {
        status.as_str().to_string()
    }
}

impl std::fmt::Display for UserStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User domain entity.
///
/// The identity is fixed at construction; the only in-place mutation is the
/// lifecycle status. Records handed out by the directory are owned copies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "UserRecord")]
pub struct User {
    id: String,
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    email: Option<String>,
    status: UserStatus,
}

/// Unvalidated wire shape; turned into a [`User`] through [`User::new`].
#[derive(Deserialize)]
struct UserRecord {
    id: String,
    name: String,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    status: UserStatus,
}

impl TryFrom<UserRecord> for User {
    type Error = DomainError;

    fn try_from(record: UserRecord) -> Result<Self, Self::Error> {
        let mut user = User::new(record.id, record.name)?;
        if let Some(email) = record.email {
            user = user.with_email(email);
        }
        user.set_status(record.status);
        Ok(user)
    }
}

impl User {
    /// Create a new user with `ACTIVE` status and no email.
    ///
    /// Fails with [`DomainError::InvalidArgument`] when `id` or `name` is blank.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> DomainResult<Self> {
        let id = id.into();
        let name = name.into();

        if id.trim().len() < MIN_ID_LENGTH {
            return Err(DomainError::invalid_argument("user id must not be empty"));
        }
        if name.trim().len() < MIN_NAME_LENGTH {
            return Err(DomainError::invalid_argument("user name must not be empty"));
        }

        Ok(Self {
            id,
            name,
            email: None,
            status: UserStatus::default(),
        })
    }

    /// Generate a fresh random identity for callers without a natural key
    pub fn generate_id() -> String {
        Uuid::new_v4().to_string()
    }

    /// Attach a contact address while building the record.
    ///
    /// A blank address leaves the email unset.
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        let email = email.into();
        self.email = if email.trim().is_empty() { None } else { Some(email) };
        self
    }

    /// Identity of this record
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Contact address, if any
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    /// Current lifecycle status
    pub fn status(&self) -> UserStatus {
        self.status
    }

    /// Replace the lifecycle status unconditionally
    pub fn set_status(&mut self, status: UserStatus) {
        self.status = status;
    }

    /// Check if user is in the `ACTIVE` state
    pub fn is_active(&self) -> bool {
        self.status == UserStatus::Active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_defaults() {
        let user = User::new("u1", "Alice").unwrap();

        assert_eq!(user.id(), "u1");
        assert_eq!(user.name(), "Alice");
        assert_eq!(user.email(), None);
        assert_eq!(user.status(), UserStatus::Active);
        assert!(user.is_active());
    }

    #[test]
    fn test_new_user_rejects_blank_fields() {
        assert!(matches!(User::new("", "Alice"), Err(DomainError::InvalidArgument(_))));
        assert!(matches!(User::new("   ", "Alice"), Err(DomainError::InvalidArgument(_))));
        assert!(matches!(User::new("u1", ""), Err(DomainError::InvalidArgument(_))));
    }

    #[test]
    fn test_set_status_any_transition() {
        let mut user = User::new("u1", "Alice").unwrap();

        user.set_status(UserStatus::Pending);
        assert_eq!(user.status(), UserStatus::Pending);

        // Same-state and backwards moves are allowed
        user.set_status(UserStatus::Pending);
        assert_eq!(user.status(), UserStatus::Pending);
        user.set_status(UserStatus::Inactive);
        user.set_status(UserStatus::Active);
        assert!(user.is_active());
    }

    #[test]
    fn test_with_email() {
        let user = User::new("u1", "Alice").unwrap().with_email("alice@example.com");
        assert_eq!(user.email(), Some("alice@example.com"));

        let blank = User::new("u2", "Bob").unwrap().with_email("  ");
        assert_eq!(blank.email(), None);
    }

    #[test]
    fn test_generate_id_is_unique() {
        let a = User::generate_id();
        let b = User::generate_id();

        assert_ne!(a, b);
        assert!(User::new(a, "Alice").is_ok());
    }

    #[test]
    fn test_status_parse() {
        assert_eq!("ACTIVE".parse::<UserStatus>().unwrap(), UserStatus::Active);
        assert_eq!(" pending ".parse::<UserStatus>().unwrap(), UserStatus::Pending);
        assert_eq!("Inactive".parse::<UserStatus>().unwrap(), UserStatus::Inactive);
        assert!("DELETED".parse::<UserStatus>().is_err());
    }

    #[test]
    fn test_status_display_roundtrip() {
        for status in UserStatus::ALL {
            assert_eq!(status.to_string().parse::<UserStatus>().unwrap(), status);
            assert!(crate::is_valid_status(&String::from(status)));
        }
    }

    #[test]
    fn test_user_serde() {
        let mut user = User::new("u1", "Alice").unwrap().with_email("alice@example.com");
        user.set_status(UserStatus::Inactive);

        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["status"], "INACTIVE");
        assert_eq!(json["email"], "alice@example.com");

        let restored: User = serde_json::from_value(json).unwrap();
        assert_eq!(restored, user);
    }

    #[test]
    fn test_deserialize_defaults_and_validation() {
        let user: User = serde_json::from_str(r#"{"id":"u1","name":"Alice"}"#).unwrap();
        assert_eq!(user.status(), UserStatus::Active);
        assert_eq!(user.email(), None);

        let bad = serde_json::from_str::<User>(r#"{"id":"","name":"Alice"}"#);
        assert!(bad.is_err());
    }
}

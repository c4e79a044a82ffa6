use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use super::ids::UserId;

/// The two audiences the training program is offered to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    #[default]
    Student,
    Staff,
}

impl Role {
    pub const ALL: [Role; 2] = [Role::Student, Role::Staff];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Staff => "staff",
        }
    }

    /// Label used by the role selector.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Role::Student => "Student",
            Role::Staff => "Staff",
        }
    }

    /// Label used by the dashboard badge.
    #[must_use]
    pub fn badge(self) -> &'static str {
        match self {
            Role::Student => "Student",
            Role::Staff => "Staff Member",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = UserError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "student" => Ok(Role::Student),
            "staff" => Ok(Role::Staff),
            _ => Err(UserError::UnknownRole(s.to_owned())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum UserError {
    #[error("name cannot be empty")]
    EmptyName,
    #[error("unknown role: {0}")]
    UnknownRole(String),
}

/// Identity record issued by the remote service.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Unvalidated form input from the landing screen.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UserDraft {
    pub name: String,
    pub role: Role,
}

impl UserDraft {
    #[must_use]
    pub fn new(name: impl Into<String>, role: Role) -> Self {
        Self {
            name: name.into(),
            role,
        }
    }

    /// Trim and validate the draft.
    ///
    /// # Errors
    ///
    /// Returns `UserError::EmptyName` if the name is blank after trimming.
    pub fn validate(self) -> Result<NewUser, UserError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(UserError::EmptyName);
        }
        Ok(NewUser {
            name: name.to_owned(),
            role: self.role,
        })
    }
}

/// Payload for the create-user call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewUser {
    name: String,
    role: Role,
}

impl NewUser {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn role(&self) -> Role {
        self.role
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_trims_name() {
        let user = UserDraft::new("  Asha  ", Role::Student).validate().unwrap();
        assert_eq!(user.name(), "Asha");
        assert_eq!(user.role(), Role::Student);
    }

    #[test]
    fn draft_rejects_whitespace_only_name() {
        let err = UserDraft::new(" \t\n ", Role::Staff).validate().unwrap_err();
        assert_eq!(err, UserError::EmptyName);
    }

    #[test]
    fn role_parses_only_known_values() {
        assert_eq!("student".parse::<Role>().unwrap(), Role::Student);
        assert_eq!(" Staff ".parse::<Role>().unwrap(), Role::Staff);
        assert!("admin".parse::<Role>().is_err());
        assert!("".parse::<Role>().is_err());
    }

    #[test]
    fn role_serializes_lowercase() {
        let json = serde_json::to_string(&Role::Staff).unwrap();
        assert_eq!(json, "\"staff\"");
    }

    #[test]
    fn user_deserializes_server_record() {
        let json = r#"{"id":"u-1","name":"Asha","role":"student","created_at":"2024-01-01T00:00:00Z"}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.name, "Asha");
        assert_eq!(user.role, Role::Student);
        assert!(user.created_at.is_some());
    }

    #[test]
    fn user_tolerates_missing_created_at() {
        let user: User = serde_json::from_str(r#"{"id":"u-2","name":"Omar","role":"staff"}"#).unwrap();
        assert_eq!(user.created_at, None);
        assert_eq!(user.role.badge(), "Staff Member");
    }
}

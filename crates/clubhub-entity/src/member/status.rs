//! Member status enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Enrollment status of a member within a club.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "member_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum MemberStatus {
    /// Actively enrolled and attending.
    Active,
    /// Waiting for a class spot.
    Waitlisted,
    /// No longer attending.
    Inactive,
}

impl MemberStatus {
    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Waitlisted => "waitlisted",
            Self::Inactive => "inactive",
        }
    }
}

impl fmt::Display for MemberStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for MemberStatus {
    type Err = clubhub_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(Self::Active),
            "waitlisted" => Ok(Self::Waitlisted),
            "inactive" => Ok(Self::Inactive),
            _ => Err(clubhub_core::AppError::validation(format!(
                "Invalid member status: '{s}'. Expected one of: active, waitlisted, inactive"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!(
            "active".parse::<MemberStatus>().unwrap(),
            MemberStatus::Active
        );
        assert_eq!(
            "WAITLISTED".parse::<MemberStatus>().unwrap(),
            MemberStatus::Waitlisted
        );
        assert!("enrolled".parse::<MemberStatus>().is_err());
    }
}

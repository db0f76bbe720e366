use core::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// User role for the GES system.
///
/// Roles form a strict ladder (`Staff` < `Manager` < `Admin`): each higher
/// role carries every lower role's capabilities. Call sites should gate on
/// [`Role::at_least`] rather than matching individual variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Staff,
    Manager,
    Admin,
}

/// A role string outside the three known values.
///
/// Callers that only need display gating should treat this as "no elevated
/// capability". The backend, not this layer, rejects bad roles for real.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown role: {0}")]
pub struct UnknownRole(pub String);

impl Role {
    /// Position on the ladder; higher rank sees more.
    pub fn rank(self) -> u8 {
        match self {
            Role::Staff => 0,
            Role::Manager => 1,
            Role::Admin => 2,
        }
    }

    /// Meets-minimum predicate: does this role have at least `min`'s tier?
    pub fn at_least(self, min: Role) -> bool {
        self.rank() >= min.rank()
    }

    /// Wire form used by the backend (`STAFF`, `MANAGER`, `ADMIN`).
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Staff => "STAFF",
            Role::Manager => "MANAGER",
            Role::Admin => "ADMIN",
        }
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "STAFF" => Ok(Role::Staff),
            "MANAGER" => Ok(Role::Manager),
            "ADMIN" => Ok(Role::Admin),
            other => Err(UnknownRole(other.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ladder_is_cumulative() {
        assert!(Role::Admin.at_least(Role::Staff));
        assert!(Role::Admin.at_least(Role::Manager));
        assert!(Role::Manager.at_least(Role::Staff));
        assert!(!Role::Manager.at_least(Role::Admin));
        assert!(!Role::Staff.at_least(Role::Manager));
        assert!(Role::Staff.at_least(Role::Staff));
    }

    #[test]
    fn ordering_matches_rank() {
        assert!(Role::Staff < Role::Manager);
        assert!(Role::Manager < Role::Admin);
    }

    #[test]
    fn parses_wire_strings() {
        assert_eq!("ADMIN".parse::<Role>().unwrap(), Role::Admin);
        assert_eq!("MANAGER".parse::<Role>().unwrap(), Role::Manager);
        assert_eq!("STAFF".parse::<Role>().unwrap(), Role::Staff);
    }

    #[test]
    fn unknown_and_lowercase_are_rejected() {
        assert!("OWNER".parse::<Role>().is_err());
        assert!("admin".parse::<Role>().is_err());
        assert!("".parse::<Role>().is_err());
    }

    #[test]
    fn serde_uses_screaming_snake() {
        assert_eq!(serde_json::to_string(&Role::Manager).unwrap(), "\"MANAGER\"");
        let role: Role = serde_json::from_str("\"ADMIN\"").unwrap();
        assert_eq!(role, Role::Admin);
    }
}

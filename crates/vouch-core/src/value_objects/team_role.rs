//! Team role value object

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Staff roles as shown on the public roster.
///
/// The ingest bot historically sent both display labels (`"Girl Owner"`) and
/// snake_case labels (`"early_supporter"`); parsing accepts either, storage
/// always uses the display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TeamRole {
    Founder,
    Owner,
    GirlOwner,
    Manager,
    EarlySupporter,
}

impl TeamRole {
    /// Canonical label, as stored and rendered
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Founder => "Founder",
            Self::Owner => "Owner",
            Self::GirlOwner => "Girl Owner",
            Self::Manager => "Manager",
            Self::EarlySupporter => "Early Support",
        }
    }

    /// All roles in roster display order
    #[must_use]
    pub fn ordered() -> [Self; 5] {
        [
            Self::Founder,
            Self::Owner,
            Self::GirlOwner,
            Self::Manager,
            Self::EarlySupporter,
        ]
    }
}

impl fmt::Display for TeamRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a role label is not recognized
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown team role: {0}")]
pub struct TeamRoleParseError(pub String);

impl FromStr for TeamRole {
    type Err = TeamRoleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "founder" => Ok(Self::Founder),
            "owner" => Ok(Self::Owner),
            "girl owner" | "girl_owner" => Ok(Self::GirlOwner),
            "manager" => Ok(Self::Manager),
            "early support" | "early_support" | "early supporter" | "early_supporter" => {
                Ok(Self::EarlySupporter)
            }
            _ => Err(TeamRoleParseError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_display_labels() {
        assert_eq!("Founder".parse::<TeamRole>().unwrap(), TeamRole::Founder);
        assert_eq!("Girl Owner".parse::<TeamRole>().unwrap(), TeamRole::GirlOwner);
        assert_eq!("Early Support".parse::<TeamRole>().unwrap(), TeamRole::EarlySupporter);
    }

    #[test]
    fn test_parse_bot_labels() {
        assert_eq!(
            "early_supporter".parse::<TeamRole>().unwrap(),
            TeamRole::EarlySupporter
        );
        assert_eq!("girl_owner".parse::<TeamRole>().unwrap(), TeamRole::GirlOwner);
    }

    #[test]
    fn test_parse_unknown_role() {
        let err = "Janitor".parse::<TeamRole>().unwrap_err();
        assert_eq!(err, TeamRoleParseError("Janitor".to_string()));
    }

    #[test]
    fn test_round_trip() {
        for role in TeamRole::ordered() {
            assert_eq!(role.as_str().parse::<TeamRole>().unwrap(), role);
        }
    }
}

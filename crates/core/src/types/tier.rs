//! Permission tiers.

use serde::{Deserialize, Serialize};

/// Caller permission tier, strictly ordered `Operator > Admin > User`.
///
/// Every command declares a minimum tier; a caller may run it iff their
/// resolved tier is at least that minimum. The derived `Ord` follows the
/// variant order, so `Tier::Operator > Tier::Admin > Tier::User` holds.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    /// Any caller; no elevated privilege.
    #[default]
    User,
    /// Member of the admin set; may moderate glossary content.
    Admin,
    /// The single fixed operator identity; may manage the admin set.
    Operator,
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::User => write!(f, "user"),
            Self::Admin => write!(f, "admin"),
            Self::Operator => write!(f, "operator"),
        }
    }
}

impl std::str::FromStr for Tier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(Self::User),
            "admin" => Ok(Self::Admin),
            "operator" => Ok(Self::Operator),
            _ => Err(format!("invalid tier: {s}")),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering() {
        assert!(Tier::Operator > Tier::Admin);
        assert!(Tier::Admin > Tier::User);
        assert!(Tier::Operator > Tier::User);
    }

    #[test]
    fn test_operator_meets_admin_requirement() {
        // The operator is always privileged at or above the admin tier.
        assert!(Tier::Operator >= Tier::Admin);
        assert!(Tier::Admin >= Tier::Admin);
        assert!(Tier::User < Tier::Admin);
    }

    #[test]
    fn test_display_from_str_roundtrip() {
        for tier in [Tier::User, Tier::Admin, Tier::Operator] {
            let parsed: Tier = tier.to_string().parse().unwrap();
            assert_eq!(parsed, tier);
        }
    }

    #[test]
    fn test_from_str_invalid() {
        assert!("superuser".parse::<Tier>().is_err());
    }
}

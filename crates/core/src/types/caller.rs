//! External caller identity.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`CallerId`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum CallerIdError {
    /// The input is not a valid signed 64-bit integer.
    #[error("caller id must be an integer: {0}")]
    NotAnInteger(String),
}

/// The identity of a caller, as issued by the external identity system.
///
/// Callers are identified by the numeric account identifier the transport
/// layer resolves for each inbound message. The same type identifies the
/// operator (configuration) and admins (stored in the admin set).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlite", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlite", sqlx(transparent))]
#[serde(transparent)]
pub struct CallerId(i64);

impl CallerId {
    /// Create a caller identity from its numeric value.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the underlying i64 value.
    #[must_use]
    pub const fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for CallerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for CallerId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<CallerId> for i64 {
    fn from(id: CallerId) -> Self {
        id.0
    }
}

impl std::str::FromStr for CallerId {
    type Err = CallerIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i64>()
            .map(Self)
            .map_err(|_| CallerIdError::NotAnInteger(s.to_owned()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_valid() {
        let id: CallerId = "555".parse().unwrap();
        assert_eq!(id, CallerId::new(555));

        let id: CallerId = " 2040196277 ".parse().unwrap();
        assert_eq!(id.as_i64(), 2_040_196_277);
    }

    #[test]
    fn test_from_str_negative() {
        let id: CallerId = "-7".parse().unwrap();
        assert_eq!(id.as_i64(), -7);
    }

    #[test]
    fn test_from_str_invalid() {
        assert!(matches!(
            "abc".parse::<CallerId>(),
            Err(CallerIdError::NotAnInteger(_))
        ));
        assert!("12.5".parse::<CallerId>().is_err());
        assert!("".parse::<CallerId>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(CallerId::new(42).to_string(), "42");
    }
}

//! Command outcomes returned to the transport layer.

use serde::{Deserialize, Serialize};

/// The result of handling one command.
///
/// This is the single value the engine hands back to its transport
/// collaborator, which is responsible for rendering it to the user
/// (including any localization). Storage faults deliberately carry no
/// detail here; the engine logs them instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Outcome {
    /// The command succeeded; the payload is ready to render.
    Ok {
        /// Text payload describing the result.
        text: String,
    },
    /// The caller's tier is below the command's minimum tier.
    PermissionDenied,
    /// Too few argument tokens were supplied.
    MissingArguments {
        /// Usage hint for the command.
        usage: String,
    },
    /// An argument token was present but malformed.
    InvalidArgument {
        /// What was wrong with the argument.
        detail: String,
    },
    /// A well-formed query matched no word or meaning.
    NotFound,
    /// The underlying store failed; details are logged, not exposed.
    StorageError,
}

impl Outcome {
    /// Convenience constructor for a success payload.
    #[must_use]
    pub fn ok(text: impl Into<String>) -> Self {
        Self::Ok { text: text.into() }
    }

    /// Whether this outcome represents a success.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Ok { .. })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_is_ok() {
        assert!(Outcome::ok("done").is_ok());
        assert!(!Outcome::PermissionDenied.is_ok());
        assert!(!Outcome::NotFound.is_ok());
    }

    #[test]
    fn test_serialize_tagged() {
        let json = serde_json::to_string(&Outcome::PermissionDenied).unwrap();
        assert_eq!(json, r#"{"kind":"permission_denied"}"#);

        let json = serde_json::to_string(&Outcome::ok("hi")).unwrap();
        assert_eq!(json, r#"{"kind":"ok","text":"hi"}"#);
    }
}

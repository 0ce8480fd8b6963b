use serde::{Deserialize, Serialize};
use std::fmt;

/// Output severity recorded on each forwarded event.
///
/// This is distinct from the tracing verbosity level used to configure the
/// bridge's own diagnostics. `Severity` classifies the forwarded entries
/// themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Information,
    Warning,
    Error,
}

impl Severity {
    /// Map a raw `level=` token to an output severity.
    ///
    /// The mapping is exact and case-sensitive: `"warning"` and `"error"`
    /// select their severity, every other token (including `"WARNING"`,
    /// `"warn"`, or an empty capture) falls back to `Information`.
    pub fn from_level_token(token: &str) -> Self {
        match token {
            "warning" => Severity::Warning,
            "error" => Severity::Error,
            _ => Severity::Information,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Information => write!(f, "Information"),
            Severity::Warning => write!(f, "Warning"),
            Severity::Error => write!(f, "Error"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_tokens_map_exactly() {
        assert_eq!(Severity::from_level_token("warning"), Severity::Warning);
        assert_eq!(Severity::from_level_token("error"), Severity::Error);
    }

    #[test]
    fn test_unknown_tokens_default_to_information() {
        assert_eq!(Severity::from_level_token("info"), Severity::Information);
        assert_eq!(Severity::from_level_token("debug"), Severity::Information);
        assert_eq!(Severity::from_level_token(""), Severity::Information);
        assert_eq!(Severity::from_level_token("fatal"), Severity::Information);
    }

    #[test]
    fn test_mapping_is_case_sensitive() {
        assert_eq!(Severity::from_level_token("WARNING"), Severity::Information);
        assert_eq!(Severity::from_level_token("Error"), Severity::Information);
        assert_eq!(Severity::from_level_token("warn"), Severity::Information);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(Severity::Information.to_string(), "Information");
        assert_eq!(Severity::Warning.to_string(), "Warning");
        assert_eq!(Severity::Error.to_string(), "Error");
    }
}

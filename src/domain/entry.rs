use super::severity::Severity;
use serde::Serialize;

/// One structured record extracted from a single engine log line.
///
/// All fields are verbatim captures; the timestamp in particular is not
/// parsed or validated. An entry exists only for the duration of the single
/// forwarding call it feeds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedEntry {
    pub timestamp: String,
    pub component: String,
    /// Single-character severity short code from the bracket header.
    /// Informational only; severity is selected from `severity_level`.
    pub severity_short: char,
    pub severity_level: String,
    pub message: String,
}

impl ParsedEntry {
    /// Output severity for this entry, derived from the raw `level=` token.
    pub fn severity(&self) -> Severity {
        Severity::from_level_token(&self.severity_level)
    }

    /// The forwarded message text. The grammar's `source` field is rendered
    /// under the `Source` label.
    pub fn formatted_message(&self) -> String {
        format!(
            "Timestamp: {} | Source: {} | Message: {}",
            self.timestamp, self.component, self.message
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(level: &str) -> ParsedEntry {
        ParsedEntry {
            timestamp: "2023-10-01T12:00:00Z".to_string(),
            component: "engine".to_string(),
            severity_short: 'W',
            severity_level: level.to_string(),
            message: "disk space low".to_string(),
        }
    }

    #[test]
    fn test_formatted_message_composition() {
        assert_eq!(
            entry("warning").formatted_message(),
            "Timestamp: 2023-10-01T12:00:00Z | Source: engine | Message: disk space low"
        );
    }

    #[test]
    fn test_severity_ignores_short_code() {
        // The bracket short code is 'W' but the level token wins.
        assert_eq!(entry("error").severity(), Severity::Error);
        assert_eq!(entry("info").severity(), Severity::Information);
    }
}

//! Pattern extraction for Docker engine backend log lines.
//!
//! Recognized lines look like:
//!
//! ```text
//! [2023-10-01T12:00:00Z][engine][W] time="2023-10-01T12:00:00Z" level=warning msg="disk space low"
//! ```
//!
//! Everything else (stack traces, blank lines, continuation output) is
//! skipped without any signal.

use crate::domain::ParsedEntry;
use regex::Regex;
use std::sync::OnceLock;

// Lazy quantifiers bound the bracket and quote groups; the final `msg` group
// is greedy so unescaped quotes inside the payload stay part of the message.
// Keep in sync with LINE_PATTERN in build.rs, which validates it at build time.
const LINE_PATTERN: &str = r#"^\[(?P<timestamp>.*?)\]\[(?P<source>.*?)\]\[(?P<sev_short>.)\] time=".*?" level=(?P<severity>.*?) msg="(?P<message>.*)""#;

fn line_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    // Compilation is checked by build.rs; a failure here cannot reach a
    // released binary.
    PATTERN.get_or_init(|| Regex::new(LINE_PATTERN).expect("grammar validated by build.rs"))
}

/// Parser for the fixed engine line grammar.
pub struct EngineLogParser;

impl Default for EngineLogParser {
    fn default() -> Self {
        Self::new()
    }
}

impl EngineLogParser {
    pub fn new() -> Self {
        Self
    }

    /// Attempt extraction against the line grammar.
    ///
    /// Returns `Some` with all fields captured verbatim iff the line matches;
    /// `None` otherwise. The grammar is all-or-nothing: there is no partial
    /// match with missing fields.
    pub fn parse_line(&self, line: &str) -> Option<ParsedEntry> {
        let caps = line_pattern().captures(line)?;

        Some(ParsedEntry {
            timestamp: caps["timestamp"].to_string(),
            component: caps["source"].to_string(),
            severity_short: caps["sev_short"].chars().next()?,
            severity_level: caps["severity"].to_string(),
            message: caps["message"].to_string(),
        })
    }
}

//! The forwarding loop: parse → map severity → write to the sink.

use crate::parser::EngineLogParser;
use crate::sink::EventSink;
use tracing::warn;

/// Forward every grammar-matching line to the sink, in file order.
///
/// Unmatched lines are expected (stack traces, blank lines) and are skipped
/// with no signal of any kind. Each matched line produces exactly one
/// synchronous sink write; there is no batching and no end-of-run summary.
///
/// Delivery is fire-and-forget per entry: a rejected write is logged at WARN
/// and the remaining lines are still processed.
pub fn forward_lines<S: EventSink>(parser: &EngineLogParser, lines: &[String], sink: &mut S) {
    for line in lines {
        let Some(entry) = parser.parse_line(line) else {
            continue;
        };

        let severity = entry.severity();
        let message = entry.formatted_message();
        if let Err(e) = sink.write(&message, severity) {
            warn!(severity = %severity, "failed to forward entry: {e}");
        }
    }
}

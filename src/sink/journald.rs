//! systemd-journald event sink.
//!
//! journald is the persistent host log store on unix systems. There is no
//! source pre-registration step; registration here connects to the journal
//! socket and fixes `SYSLOG_IDENTIFIER` to the source name. The log category
//! is attached to every entry as a structured `LOG_NAME` field.

use super::{EventSink, SinkError};
use crate::domain::Severity;
use tracing::dispatcher;
use tracing_subscriber::prelude::*;

pub struct JournaldSink {
    registered: Option<Registration>,
}

struct Registration {
    dispatch: tracing::Dispatch,
    log_name: String,
}

impl JournaldSink {
    pub fn new() -> Self {
        Self { registered: None }
    }
}

impl Default for JournaldSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for JournaldSink {
    fn ensure_source_registered(
        &mut self,
        source_name: &str,
        log_name: &str,
    ) -> Result<(), SinkError> {
        if self.registered.is_some() {
            return Ok(());
        }

        let layer = tracing_journald::layer()
            .map_err(SinkError::Unavailable)?
            .with_syslog_identifier(source_name.to_string());
        let subscriber = tracing_subscriber::registry().with(layer);

        self.registered = Some(Registration {
            dispatch: tracing::Dispatch::new(subscriber),
            log_name: log_name.to_string(),
        });
        Ok(())
    }

    fn write(&mut self, message: &str, severity: Severity) -> Result<(), SinkError> {
        let registration = self.registered.as_ref().ok_or(SinkError::NotRegistered)?;
        let log_name = registration.log_name.as_str();

        // Events are emitted through a scoped dispatch so the bridge's own
        // stderr diagnostics never end up in the journal.
        dispatcher::with_default(&registration.dispatch, || match severity {
            Severity::Information => tracing::info!(target: "event", log_name, "{message}"),
            Severity::Warning => tracing::warn!(target: "event", log_name, "{message}"),
            Severity::Error => tracing::error!(target: "event", log_name, "{message}"),
        });
        Ok(())
    }
}

//! Host event sink abstraction.
//!
//! The host log store is ambient process-wide state, so the pipeline talks to
//! it through this trait and stays testable with injected fakes.

#[cfg(unix)]
pub mod journald;

#[cfg(unix)]
pub use journald::JournaldSink;

use crate::domain::Severity;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SinkError {
    /// The host log store could not be reached.
    #[error("event sink unavailable: {0}")]
    Unavailable(#[from] std::io::Error),

    /// `write` was called before `ensure_source_registered`.
    #[error("event source is not registered")]
    NotRegistered,

    /// The sink refused the entry.
    #[error("entry rejected: {0}")]
    Rejected(String),
}

/// A durable event store that accepts (message, severity) pairs.
///
/// `ensure_source_registered` is idempotent and must be called once before
/// any `write`. Each accepted `write` durably records exactly one entry,
/// synchronously from the caller's perspective.
#[cfg_attr(test, mockall::automock)]
pub trait EventSink {
    fn ensure_source_registered(
        &mut self,
        source_name: &str,
        log_name: &str,
    ) -> Result<(), SinkError>;

    fn write(&mut self, message: &str, severity: Severity) -> Result<(), SinkError>;
}

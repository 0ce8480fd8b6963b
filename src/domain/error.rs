use crate::sink::SinkError;
use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for the bridge.
///
/// Only whole-run-aborting conditions live here. A line that does not match
/// the grammar is not an error and has no representation in this type.
#[derive(Error, Debug)]
pub enum BridgeError {
    /// The input file could not be opened or read. Nothing is forwarded.
    #[error("cannot read log file {path}: {source}")]
    InputUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The host event sink rejected source registration.
    #[error("event sink error: {0}")]
    Sink(#[from] SinkError),

    /// No host event sink exists for this platform.
    #[error("no host event sink is available on this platform")]
    UnsupportedPlatform,
}

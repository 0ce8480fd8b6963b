//! Domain layer for docker-log-bridge.
//!
//! Contains the canonical types shared across all modules:
//! - `ParsedEntry`: One structured record extracted from a log line
//! - `Severity`: The three-valued output classification (Information/Warning/Error)
//! - `BridgeError`: Top-level error type

pub mod entry;
pub mod error;
pub mod severity;

pub use entry::ParsedEntry;
pub use error::BridgeError;
pub use severity::Severity;

pub mod config;
pub mod logging;

pub use config::{Config, ConfigError, LogLevel};
pub use logging::init_tracing;

use crate::domain::BridgeError;
use crate::parser::EngineLogParser;
use crate::pipeline::forward_lines;
use crate::reader::read_all_lines;
use crate::sink::EventSink;
use std::process::ExitCode;
use tracing::info;

pub struct App {
    config: Config,
}

impl App {
    pub fn from_args<I, T>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let config = Config::from_args(args)?;
        Ok(Self::from_config(config))
    }

    pub fn from_config(config: Config) -> Self {
        Self { config }
    }

    /// Register the source, snapshot the file, and forward every matching
    /// line to `sink`.
    ///
    /// Registration or read failure aborts before any entry is written.
    pub fn run_with_sink<S: EventSink>(&self, sink: &mut S) -> Result<(), BridgeError> {
        info!(
            log_file = %self.config.log_file.display(),
            log_name = %self.config.log_name,
            source_name = %self.config.source_name,
            "starting docker-log-bridge v{}",
            crate::VERSION
        );

        sink.ensure_source_registered(&self.config.source_name, &self.config.log_name)?;

        let lines = read_all_lines(&self.config.log_file)?;
        forward_lines(&EngineLogParser::new(), &lines, sink);
        Ok(())
    }

    /// Run against the host event sink for this platform.
    #[cfg(unix)]
    pub fn run(&self) -> Result<(), BridgeError> {
        let mut sink = crate::sink::JournaldSink::new();
        self.run_with_sink(&mut sink)
    }

    #[cfg(not(unix))]
    pub fn run(&self) -> Result<(), BridgeError> {
        Err(BridgeError::UnsupportedPlatform)
    }
}

/// Binary entry point. Fatal conditions (bad arguments, unreadable input,
/// sink registration failure) print one human-readable message to stdout and
/// exit with failure, with no entries forwarded.
pub fn main() -> ExitCode {
    let config = match Config::from_args(std::env::args_os()) {
        Ok(config) => config,
        Err(e) => {
            // For arity and flag errors this renders clap's usage text.
            println!("{e}");
            return ExitCode::FAILURE;
        }
    };

    init_tracing(config.log_level);

    match App::from_config(config).run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            println!("{e}");
            ExitCode::FAILURE
        }
    }
}

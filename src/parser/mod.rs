pub mod engine;

pub use engine::EngineLogParser;

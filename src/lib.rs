pub mod adapters;
pub mod app;
#[cfg(feature = "cli")]
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{ConsoleSink, MemorySink, WriterSink};
pub use app::{run_demo, Demo};
pub use crate::core::{engine::PipelineEngine, Pipeline, Sink};
pub use utils::error::{PipelineError, Result};

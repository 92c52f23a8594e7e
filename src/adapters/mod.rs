// Adapters layer: concrete sinks behind the `Sink` port.

pub mod sink;

pub use sink::{ConsoleSink, MemorySink, WriterSink};

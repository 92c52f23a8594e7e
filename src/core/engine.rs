use crate::core::{Pipeline, RunSummary, Sink};
use crate::utils::error::Result;

pub struct PipelineEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> PipelineEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn run(&self, sink: &mut dyn Sink) -> Result<RunSummary> {
        let name = self.pipeline.name();
        tracing::info!("Starting pipeline: {}", name);

        let items = self.pipeline.extract()?;
        let extracted = items.len();
        tracing::debug!("Extracted {} records", extracted);

        let items = self.pipeline.transform(items)?;
        let retained = items.len();
        tracing::debug!("Transformed to {} records", retained);

        let lines_written = self.pipeline.load(&items, sink)?;
        sink.flush()?;
        tracing::debug!("Wrote {} lines", lines_written);

        let summary = RunSummary {
            pipeline: name.to_string(),
            extracted,
            retained,
            lines_written,
        };
        tracing::info!("Pipeline finished: {}", serde_json::to_string(&summary)?);

        Ok(summary)
    }
}

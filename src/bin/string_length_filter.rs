use anyhow::Context;
use collection_pipeline::app::pipelines::StringLengthPipeline;
use collection_pipeline::utils::logger;
use collection_pipeline::{ConsoleSink, PipelineEngine};

fn main() -> anyhow::Result<()> {
    logger::init_cli_logger(false);

    let engine = PipelineEngine::new(StringLengthPipeline::new());
    let mut sink = ConsoleSink::new();
    if let Err(e) = engine.run(&mut sink) {
        tracing::error!("Pipeline failed: {}", e);
        return Err(e).context("string-length filter failed");
    }

    Ok(())
}

use anyhow::Context;
use collection_pipeline::app::pipelines::AgeSortPipeline;
use collection_pipeline::utils::logger;
use collection_pipeline::{ConsoleSink, PipelineEngine};

fn main() -> anyhow::Result<()> {
    logger::init_cli_logger(false);

    let engine = PipelineEngine::new(AgeSortPipeline::new());
    let mut sink = ConsoleSink::new();
    if let Err(e) = engine.run(&mut sink) {
        tracing::error!("Pipeline failed: {}", e);
        return Err(e).context("age sort failed");
    }

    Ok(())
}

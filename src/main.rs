use clap::Parser;
use collection_pipeline::utils::logger;
use collection_pipeline::{run_demo, CliConfig, ConsoleSink};

fn main() {
    let config = CliConfig::parse();

    if config.json_logs {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting collection-pipeline");
    tracing::debug!("CLI config: {:?}", config);

    let mut sink = ConsoleSink::new();
    match run_demo(config.demo, &mut sink) {
        Ok(summaries) => {
            tracing::info!("Completed {} pipeline(s)", summaries.len());
        }
        Err(e) => {
            tracing::error!("Pipeline failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }
}

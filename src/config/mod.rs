use crate::app::Demo;
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "collection-pipeline")]
#[command(about = "Filter and sort demonstration pipelines")]
pub struct CliConfig {
    /// Which demo to run
    #[arg(long, value_enum, default_value_t = Demo::All)]
    pub demo: Demo,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON on stderr")]
    pub json_logs: bool,
}

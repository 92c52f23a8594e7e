pub mod pipelines;

use crate::core::engine::PipelineEngine;
use crate::core::{RunSummary, Sink};
use crate::utils::error::Result;
use pipelines::{AgeSortPipeline, EvenNumberPipeline, StringLengthPipeline};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Selects which demonstration pipeline to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum Demo {
    StringLength,
    AgeSort,
    EvenNumbers,
    All,
}

impl Demo {
    pub const ORDERED: [Demo; 3] = [Demo::StringLength, Demo::AgeSort, Demo::EvenNumbers];

    pub fn as_str(&self) -> &'static str {
        match self {
            Demo::StringLength => "string-length",
            Demo::AgeSort => "age-sort",
            Demo::EvenNumbers => "even-numbers",
            Demo::All => "all",
        }
    }
}

impl fmt::Display for Demo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Runs the selected demo (or all of them, in order) against `sink`.
pub fn run_demo(demo: Demo, sink: &mut dyn Sink) -> Result<Vec<RunSummary>> {
    let summary = match demo {
        Demo::StringLength => PipelineEngine::new(StringLengthPipeline::new()).run(sink)?,
        Demo::AgeSort => PipelineEngine::new(AgeSortPipeline::new()).run(sink)?,
        Demo::EvenNumbers => PipelineEngine::new(EvenNumberPipeline::new()).run(sink)?,
        Demo::All => {
            let mut summaries = Vec::with_capacity(Demo::ORDERED.len());
            for single in Demo::ORDERED {
                summaries.extend(run_demo(single, sink)?);
            }
            return Ok(summaries);
        }
    };
    Ok(vec![summary])
}

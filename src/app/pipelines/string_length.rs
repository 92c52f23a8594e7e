use crate::core::collection::{filter, render};
use crate::core::predicates::is_longer_than_three;
use crate::core::{emit_all, Language, Pipeline, Sink};
use crate::utils::error::Result;

pub const LANGUAGES: [&str; 4] = ["Java", "Python", "JavaScript", "C++"];

/// Keeps language names longer than three characters.
#[derive(Debug, Clone, Default)]
pub struct StringLengthPipeline;

impl StringLengthPipeline {
    pub fn new() -> Self {
        Self
    }
}

impl Pipeline for StringLengthPipeline {
    type Item = Language;

    fn name(&self) -> &'static str {
        "string-length"
    }

    fn extract(&self) -> Result<Vec<Language>> {
        Ok(LANGUAGES.iter().map(|name| Language::new(*name)).collect())
    }

    fn transform(&self, items: Vec<Language>) -> Result<Vec<Language>> {
        let kept = filter(&items, is_longer_than_three);
        tracing::debug!("Dropped {} short names", items.len() - kept.len());
        Ok(kept)
    }

    fn load(&self, items: &[Language], sink: &mut dyn Sink) -> Result<usize> {
        emit_all(sink, render(items, |language| language.to_string()))
    }
}

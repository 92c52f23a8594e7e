use crate::core::collection::{filter, render_collection};
use crate::core::predicates::is_even;
use crate::core::{emit_all, Pipeline, Sink};
use crate::utils::error::Result;

pub const NUMBERS: std::ops::RangeInclusive<i32> = 1..=13;

/// Keeps even numbers and prints them as a single list line.
#[derive(Debug, Clone, Default)]
pub struct EvenNumberPipeline;

impl EvenNumberPipeline {
    pub fn new() -> Self {
        Self
    }
}

impl Pipeline for EvenNumberPipeline {
    type Item = i32;

    fn name(&self) -> &'static str {
        "even-numbers"
    }

    fn extract(&self) -> Result<Vec<i32>> {
        Ok(NUMBERS.collect())
    }

    fn transform(&self, items: Vec<i32>) -> Result<Vec<i32>> {
        Ok(filter(&items, is_even))
    }

    fn load(&self, items: &[i32], sink: &mut dyn Sink) -> Result<usize> {
        emit_all(sink, [render_collection(items)])
    }
}

pub mod collection;
pub mod engine;
pub mod predicates;

pub use crate::domain::model::{Language, Person, RunSummary};
pub use crate::domain::ports::{emit_all, Pipeline, Sink};
pub use crate::utils::error::Result;

pub mod age_sort;
pub mod even_numbers;
pub mod string_length;

pub use age_sort::AgeSortPipeline;
pub use even_numbers::EvenNumberPipeline;
pub use string_length::StringLengthPipeline;

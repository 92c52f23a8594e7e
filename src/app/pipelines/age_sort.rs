use crate::core::collection::{render, sort_by};
use crate::core::predicates::by_age_ascending;
use crate::core::{emit_all, Person, Pipeline, Sink};
use crate::utils::error::Result;

pub const PEOPLE: [(&str, u32); 5] = [
    ("Ram", 28),
    ("Shyam", 35),
    ("Raghavan", 21),
    ("Shiva", 24),
    ("Vishnu", 20),
];

/// Orders people by ascending age.
#[derive(Debug, Clone, Default)]
pub struct AgeSortPipeline;

impl AgeSortPipeline {
    pub fn new() -> Self {
        Self
    }
}

impl Pipeline for AgeSortPipeline {
    type Item = Person;

    fn name(&self) -> &'static str {
        "age-sort"
    }

    fn extract(&self) -> Result<Vec<Person>> {
        Ok(PEOPLE
            .iter()
            .map(|(name, age)| Person::new(*name, *age))
            .collect())
    }

    fn transform(&self, items: Vec<Person>) -> Result<Vec<Person>> {
        Ok(sort_by(&items, by_age_ascending))
    }

    fn load(&self, items: &[Person], sink: &mut dyn Sink) -> Result<usize> {
        emit_all(sink, render(items, |person| person.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MemorySink;

    #[test]
    fn test_transform_orders_by_age() {
        let pipeline = AgeSortPipeline::new();
        let sorted = pipeline.transform(pipeline.extract().unwrap()).unwrap();
        let order: Vec<(&str, u32)> = sorted.iter().map(|p| (p.name.as_str(), p.age)).collect();
        assert_eq!(
            order,
            vec![
                ("Vishnu", 20),
                ("Raghavan", 21),
                ("Shiva", 24),
                ("Ram", 28),
                ("Shyam", 35),
            ]
        );
    }

    #[test]
    fn test_transform_keeps_equal_ages_in_input_order() {
        let pipeline = AgeSortPipeline::new();
        let people = vec![
            Person::new("B", 30),
            Person::new("A", 20),
            Person::new("C", 30),
        ];
        let sorted = pipeline.transform(people).unwrap();
        let names: Vec<&str> = sorted.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_load_uses_person_display() {
        let pipeline = AgeSortPipeline::new();
        let mut sink = MemorySink::new();
        pipeline
            .load(&[Person::new("Shiva", 24)], &mut sink)
            .unwrap();
        assert_eq!(sink.lines(), ["Name : Shiva  ,  Age : 24"]);
    }
}

use collection_pipeline::app::pipelines::{AgeSortPipeline, EvenNumberPipeline, StringLengthPipeline};
use collection_pipeline::core::collection::{filter, sort_by};
use collection_pipeline::core::predicates::{by_age_ascending, is_even, is_longer_than_three};
use collection_pipeline::core::Person;
use collection_pipeline::{run_demo, Demo, MemorySink, PipelineEngine, WriterSink};

#[test]
fn test_string_length_scenario() {
    let languages = ["Java", "Python", "JavaScript", "C++"];
    assert_eq!(
        filter(&languages, is_longer_than_three),
        vec!["Java", "Python", "JavaScript"]
    );

    let mut sink = MemorySink::new();
    let summary = PipelineEngine::new(StringLengthPipeline::new())
        .run(&mut sink)
        .unwrap();

    assert_eq!(summary.extracted, 4);
    assert_eq!(summary.retained, 3);
    assert_eq!(sink.into_lines(), vec!["Java", "Python", "JavaScript"]);
}

#[test]
fn test_age_sort_scenario() {
    let people = vec![
        Person::new("Ram", 28),
        Person::new("Shyam", 35),
        Person::new("Raghavan", 21),
        Person::new("Shiva", 24),
        Person::new("Vishnu", 20),
    ];
    let sorted = sort_by(&people, by_age_ascending);
    assert_eq!(sorted[0], Person::new("Vishnu", 20));
    assert_eq!(sorted[4], Person::new("Shyam", 35));
    // input untouched
    assert_eq!(people[0], Person::new("Ram", 28));

    let mut sink = MemorySink::new();
    PipelineEngine::new(AgeSortPipeline::new())
        .run(&mut sink)
        .unwrap();

    assert_eq!(
        sink.lines(),
        [
            "Name : Vishnu  ,  Age : 20",
            "Name : Raghavan  ,  Age : 21",
            "Name : Shiva  ,  Age : 24",
            "Name : Ram  ,  Age : 28",
            "Name : Shyam  ,  Age : 35",
        ]
    );
}

#[test]
fn test_even_number_scenario() {
    let numbers: Vec<i32> = (1..=13).collect();
    assert_eq!(filter(&numbers, is_even), vec![2, 4, 6, 8, 10, 12]);

    let mut sink = WriterSink::new(Vec::new());
    let summary = PipelineEngine::new(EvenNumberPipeline::new())
        .run(&mut sink)
        .unwrap();

    assert_eq!(summary.lines_written, 1);
    let output = String::from_utf8(sink.into_inner()).unwrap();
    assert_eq!(output, "[2, 4, 6, 8, 10, 12]\n");
}

#[test]
fn test_all_demos_through_writer() {
    let mut sink = WriterSink::new(Vec::new());
    let summaries = run_demo(Demo::All, &mut sink).unwrap();
    assert_eq!(summaries.len(), 3);

    let output = String::from_utf8(sink.into_inner()).unwrap();
    let expected = "\
Java
Python
JavaScript
Name : Vishnu  ,  Age : 20
Name : Raghavan  ,  Age : 21
Name : Shiva  ,  Age : 24
Name : Ram  ,  Age : 28
Name : Shyam  ,  Age : 35
[2, 4, 6, 8, 10, 12]
";
    assert_eq!(output, expected);
}

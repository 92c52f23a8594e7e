//! Filter, sort and render operations over in-memory sequences.
//!
//! Every operation borrows its input and returns a fresh sequence, so the
//! caller's collection is never reordered or truncated in place.

use std::cmp::Ordering;
use std::fmt::Display;

/// Keeps the items accepted by `predicate`, in their original order.
pub fn filter<T, P>(items: &[T], predicate: P) -> Vec<T>
where
    T: Clone,
    P: Fn(&T) -> bool,
{
    items.iter().filter(|item| predicate(item)).cloned().collect()
}

/// Stable sort into a new vector; ties keep their input order.
pub fn sort_by<T, C>(items: &[T], comparator: C) -> Vec<T>
where
    T: Clone,
    C: Fn(&T, &T) -> Ordering,
{
    let mut sorted = items.to_vec();
    sorted.sort_by(|a, b| comparator(a, b));
    sorted
}

/// Maps a signed difference (negative, zero, positive) onto an [`Ordering`].
pub fn ordering_from_signed(difference: i64) -> Ordering {
    difference.cmp(&0)
}

/// Lazily formats items one line at a time. Consumed by iteration.
pub struct Render<'a, T, F> {
    items: std::slice::Iter<'a, T>,
    formatter: F,
}

impl<T, F> Iterator for Render<'_, T, F>
where
    F: FnMut(&T) -> String,
{
    type Item = String;

    fn next(&mut self) -> Option<String> {
        self.items.next().map(&mut self.formatter)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.items.size_hint()
    }
}

impl<T, F> ExactSizeIterator for Render<'_, T, F> where F: FnMut(&T) -> String {}

pub fn render<T, F>(items: &[T], formatter: F) -> Render<'_, T, F>
where
    F: FnMut(&T) -> String,
{
    Render {
        items: items.iter(),
        formatter,
    }
}

/// Renders the whole sequence as one line, e.g. `[2, 4, 6]`.
pub fn render_collection<T: Display>(items: &[T]) -> String {
    let parts: Vec<String> = items.iter().map(|item| item.to_string()).collect();
    format!("[{}]", parts.join(", "))
}

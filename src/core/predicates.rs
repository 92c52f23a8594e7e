use crate::core::collection::ordering_from_signed;
use crate::domain::model::Person;
use std::cmp::Ordering;

/// Text longer than `min` UTF-16 code units.
pub fn longer_than<T: AsRef<str> + ?Sized>(min: usize) -> impl Fn(&T) -> bool {
    move |value: &T| value.as_ref().encode_utf16().count() > min
}

pub fn is_longer_than_three<T: AsRef<str> + ?Sized>(value: &T) -> bool {
    longer_than(3)(value)
}

pub fn is_even(value: &i32) -> bool {
    value % 2 == 0
}

pub fn by_age_ascending(left: &Person, right: &Person) -> Ordering {
    ordering_from_signed(i64::from(left.age) - i64::from(right.age))
}

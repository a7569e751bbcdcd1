
use std::cmp::Ordering;

pub(crate) fn compare_ints(first: &i32, second: &i32) -> Ordering {
    first.cmp(second)
}

pub(crate) fn is_even(value: &i32) -> bool {
    value % 2 == 0
}

//! Integration tests for max, min, max_by and min_by.

use rstest::rstest;
use std::cmp::Ordering;
use zeroset::{Set, max, max_by, min, min_by, set};

#[rstest]
fn test_max_and_min_of_integers() {
    let set = set![5, 1, 9, 3];
    assert_eq!(*max(&set), 9);
    assert_eq!(*min(&set), 1);
}

#[rstest]
fn test_max_and_min_of_strings() {
    let set = set!["pear", "apple", "zucchini"];
    assert_eq!(*max(&set), "zucchini");
    assert_eq!(*min(&set), "apple");
}

#[rstest]
fn test_by_key_length() {
    let set = set!["a", "abc", "ab"];
    let by_length = |a: &&str, b: &&str| a.len().cmp(&b.len());
    assert_eq!(*max_by(&set, by_length), "abc");
    assert_eq!(*min_by(&set, by_length), "a");
}

#[rstest]
fn test_ties_return_some_extremal_element() {
    let set = set![10, 20, 11, 21];
    let by_tens = |a: &i32, b: &i32| (a / 10).cmp(&(b / 10));

    let largest = *max_by(&set, by_tens);
    assert!(largest == 20 || largest == 21);

    let smallest = *min_by(&set, by_tens);
    assert!(smallest == 10 || smallest == 11);
}

#[rstest]
fn test_comparator_always_equal_returns_a_member() {
    let set = set![4, 5, 6];
    let chosen = *max_by(&set, |_, _| Ordering::Equal);
    assert!(set.contains(&chosen));
}

#[rstest]
#[should_panic(expected = "max: empty set")]
fn test_max_of_allocated_empty_set_panics() {
    let set: Set<i32> = set![];
    let _ = max(&set);
}

#[rstest]
#[should_panic(expected = "min: empty set")]
fn test_min_of_zero_set_panics() {
    let set: Set<i32> = Set::new();
    let _ = min(&set);
}

#[rstest]
#[should_panic(expected = "max_by: empty set")]
fn test_max_by_of_empty_set_panics() {
    let set: Set<i32> = Set::new();
    let _ = max_by(&set, i32::cmp);
}

// lowline-core - Sequence operation integration tests
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Integration tests for first, last, index_of, uniq, and flatten.

mod common;

use common::*;
use lowline_core::{first, flatten, index_of, last, uniq};

// =============================================================================
// first / last
// =============================================================================

#[test]
fn first_without_n_is_the_first_element() {
    assert_eq!(first(&int_seq(&[1, 2, 3]), None).unwrap(), int(1));
    assert!(first(&Value::empty_seq(), None).unwrap().is_nil());
}

#[test]
fn first_with_n_is_a_prefix_clamped_to_length() {
    let coll = int_seq(&[1, 2, 3]);
    assert_eq!(first(&coll, Some(2)).unwrap(), int_seq(&[1, 2]));
    assert_eq!(first(&coll, Some(0)).unwrap(), Value::empty_seq());
    assert_eq!(first(&coll, Some(9)).unwrap(), coll);
}

#[test]
fn last_without_n_is_the_last_element() {
    assert_eq!(last(&int_seq(&[1, 2, 3]), None).unwrap(), int(3));
    assert!(last(&Value::empty_seq(), None).unwrap().is_nil());
}

#[test]
fn last_with_n_is_a_suffix_clamped_to_length() {
    let coll = int_seq(&[1, 2, 3]);
    assert_eq!(last(&coll, Some(2)).unwrap(), int_seq(&[2, 3]));
    assert_eq!(last(&coll, Some(0)).unwrap(), Value::empty_seq());
    assert_eq!(last(&coll, Some(9)).unwrap(), coll);
}

#[test]
fn first_and_last_reject_non_sequences() {
    assert!(first(&Value::empty_map(), None).is_err());
    assert!(last(&int(1), Some(2)).is_err());
}

// =============================================================================
// index_of
// =============================================================================

#[test]
fn index_of_finds_the_first_match() {
    let coll = int_seq(&[5, 3, 5, 7]);
    assert_eq!(index_of(&coll, &int(5)).unwrap(), 0);
    assert_eq!(index_of(&coll, &int(7)).unwrap(), 3);
}

#[test]
fn index_of_is_minus_one_when_absent() {
    assert_eq!(index_of(&int_seq(&[1, 2]), &int(9)).unwrap(), -1);
    assert_eq!(index_of(&Value::empty_seq(), &int(1)).unwrap(), -1);
}

#[test]
fn index_of_compares_structurally() {
    let coll = Value::seq(vec![Value::seq(vec![int(1)]), Value::seq(vec![int(2)])]);
    assert_eq!(index_of(&coll, &Value::seq(vec![int(2)])).unwrap(), 1);
}

// =============================================================================
// uniq
// =============================================================================

#[test]
fn uniq_keeps_first_occurrences_in_order() {
    assert_eq!(uniq(&int_seq(&[1, 2, 1, 3, 1, 4])).unwrap(), int_seq(&[1, 2, 3, 4]));
}

#[test]
fn uniq_is_idempotent() {
    let once = uniq(&int_seq(&[2, 2, 4, 4, 4, 6])).unwrap();
    assert_eq!(uniq(&once).unwrap(), once);
}

#[test]
fn uniq_treats_equal_numbers_as_duplicates() {
    let coll = Value::seq(vec![int(1), Value::float(1.0), int(2)]);
    assert_eq!(uniq(&coll).unwrap(), Value::seq(vec![int(1), int(2)]));
}

#[test]
fn uniq_on_empty_is_empty() {
    assert_eq!(uniq(&Value::empty_seq()).unwrap(), Value::empty_seq());
}

// =============================================================================
// flatten
// =============================================================================

#[test]
fn flatten_descends_depth_first_left_to_right() {
    let nested = Value::seq(vec![
        int(1),
        Value::seq(vec![int(2), Value::seq(vec![int(3), Value::seq(vec![int(4)])])]),
        int(5),
    ]);
    assert_eq!(flatten(&nested).unwrap(), int_seq(&[1, 2, 3, 4, 5]));
}

#[test]
fn flatten_on_flat_input_is_identity() {
    let flat = int_seq(&[1, 2, 3]);
    assert_eq!(flatten(&flat).unwrap(), flat);
}

#[test]
fn flatten_drops_empty_inner_sequences() {
    let nested = Value::seq(vec![Value::empty_seq(), int(1), Value::seq(vec![Value::empty_seq()])]);
    assert_eq!(flatten(&nested).unwrap(), int_seq(&[1]));
}

#[test]
fn flatten_keeps_non_sequence_leaves_as_is() {
    let inner_map = Value::map(vec![("a", int(1))]);
    let nested = Value::seq(vec![Value::seq(vec![inner_map.clone()]), string("x")]);
    assert_eq!(
        flatten(&nested).unwrap(),
        Value::seq(vec![inner_map, string("x")])
    );
}

#[test]
fn flatten_does_not_mutate_the_input() {
    let nested = Value::seq(vec![Value::seq(vec![int(1)]), int(2)]);
    let before = nested.clone();

    flatten(&nested).unwrap();

    assert_eq!(nested, before);
}

#[test]
fn flatten_rejects_non_sequences() {
    assert!(flatten(&int(1)).is_err());
    assert!(flatten(&Value::empty_map()).is_err());
}

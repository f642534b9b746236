// lowline-core - Multi-sequence operations
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Multi-sequence combinators: zip, intersection, difference.
//!
//! Each takes one pivot sequence plus a slice of further sequences. The
//! pivot's order and duplicates always survive into the result, and
//! membership tests are linear scans — the quadratic cost is part of the
//! contract.

use lowline_value::Value;

use crate::error::Result;

use super::as_seq;
use super::sequences::index_of;
use super::traversal::visit_entries;

/// Combine sequences element-wise into rows.
///
/// Row `i` holds the `i`-th element of every input. The row count matches
/// the longest input; shorter inputs pad their columns with nil.
pub fn zip(seq: &Value, rest: &[Value]) -> Result<Value> {
    let mut columns = vec![as_seq("zip", seq)?];
    for other in rest {
        columns.push(as_seq("zip", other)?);
    }
    let longest = columns.iter().map(|c| c.len()).max().unwrap_or(0);

    let mut rows = Vec::with_capacity(longest);
    for index in 0..longest {
        let row: Vec<Value> = columns
            .iter()
            .map(|c| c.get(index).cloned().unwrap_or(Value::Nil))
            .collect();
        rows.push(Value::seq(row));
    }
    Ok(Value::seq(rows))
}

/// The elements of the pivot present in every other sequence.
///
/// With no other sequences the condition holds vacuously and the whole
/// pivot comes back.
pub fn intersection(seq: &Value, rest: &[Value]) -> Result<Value> {
    as_seq("intersection", seq)?;
    let mut shared = Vec::new();
    visit_entries("intersection", seq, |value, _key| {
        let mut everywhere = true;
        for other in rest {
            if index_of(other, value)? == -1 {
                everywhere = false;
                break;
            }
        }
        if everywhere {
            shared.push(value.clone());
        }
        Ok(())
    })?;
    Ok(Value::seq(shared))
}

/// The elements of the pivot present in none of the other sequences.
///
/// With no other sequences the condition holds vacuously and the whole
/// pivot comes back.
pub fn difference(seq: &Value, rest: &[Value]) -> Result<Value> {
    as_seq("difference", seq)?;
    let mut only = Vec::new();
    visit_entries("difference", seq, |value, _key| {
        let mut anywhere = false;
        for other in rest {
            if index_of(other, value)? != -1 {
                anywhere = true;
                break;
            }
        }
        if !anywhere {
            only.push(value.clone());
        }
        Ok(())
    })?;
    Ok(Value::seq(only))
}

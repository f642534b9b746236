// lowline-core - Sequence operations
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Sequence-only operations: first, last, index_of, uniq, flatten.

use lowline_value::Value;

use crate::error::Result;

use super::as_seq;
use super::traversal::visit_entries;

/// The first element (nil on empty), or with `n` the first `n` elements as
/// a sequence, clamped to the input length.
pub fn first(seq: &Value, n: Option<usize>) -> Result<Value> {
    let items = as_seq("first", seq)?;
    match n {
        None => Ok(items.front().cloned().unwrap_or(Value::Nil)),
        Some(n) => Ok(Value::Seq(items.take(n.min(items.len())))),
    }
}

/// The last element (nil on empty), or with `n` the last `n` elements;
/// `n = 0` is the empty sequence.
pub fn last(seq: &Value, n: Option<usize>) -> Result<Value> {
    let items = as_seq("last", seq)?;
    match n {
        None => Ok(items.back().cloned().unwrap_or(Value::Nil)),
        Some(n) => {
            let n = n.min(items.len());
            Ok(Value::Seq(items.skip(items.len() - n)))
        }
    }
}

/// Index of the first element structurally equal to `target`, or -1.
pub fn index_of(seq: &Value, target: &Value) -> Result<i64> {
    as_seq("index_of", seq)?;
    let mut found = -1;
    visit_entries("index_of", seq, |value, key| {
        if found == -1
            && value == target
            && let Value::Int(index) = key
        {
            found = index;
        }
        Ok(())
    })?;
    Ok(found)
}

/// A duplicate-free copy of a sequence.
///
/// For each value only the first occurrence (by structural equality)
/// survives, in traversal order. Membership is a linear [`index_of`] scan
/// per element; the quadratic cost is part of the contract.
pub fn uniq(seq: &Value) -> Result<Value> {
    as_seq("uniq", seq)?;
    let mut kept = Vec::new();
    visit_entries("uniq", seq, |value, key| {
        if let Value::Int(index) = key
            && index_of(seq, value)? == index
        {
            kept.push(value.clone());
        }
        Ok(())
    })?;
    Ok(Value::seq(kept))
}

/// Flatten arbitrarily nested sequences into one flat sequence.
///
/// Depth-first, left to right; non-sequence leaves append as-is. Nesting
/// depth is bounded only by the call stack. The input is never mutated.
pub fn flatten(nested: &Value) -> Result<Value> {
    let mut flat = Vec::new();
    flatten_into(nested, &mut flat)?;
    Ok(Value::seq(flat))
}

fn flatten_into(seq: &Value, flat: &mut Vec<Value>) -> Result<()> {
    as_seq("flatten", seq)?;
    visit_entries("flatten", seq, |value, _key| match value {
        Value::Seq(_) => flatten_into(value, flat),
        leaf => {
            flat.push(leaf.clone());
            Ok(())
        }
    })
}

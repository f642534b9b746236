// lowline-core - Traversal and reduction
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! The traversal primitive, and the reduction derived from it.

use lowline_value::Value;

use crate::apply::apply;
use crate::error::Result;

use super::{Container, as_container};

/// Visit every entry of a container in traversal order.
///
/// Sequences visit in index order with integer keys; mappings visit each
/// entry with its string key, in the mapping's enumeration order. This is
/// the single iteration primitive: every other operation funnels through
/// it (directly or via [`reduce`]) instead of iterating on its own.
pub(crate) fn visit_entries<F>(context: &'static str, coll: &Value, mut visit: F) -> Result<()>
where
    F: FnMut(&Value, Value) -> Result<()>,
{
    match as_container(context, coll)? {
        Container::Seq(items) => {
            for (index, item) in items.iter().enumerate() {
                visit(item, Value::int(index as i64))?;
            }
        }
        Container::Map(entries) => {
            for (key, value) in entries.iter() {
                visit(value, Value::Str(key.clone()))?;
            }
        }
    }
    Ok(())
}

/// Call `visit` with `(value, key_or_index, container)` for each entry.
///
/// Runs purely for its side effects: sequences are visited in index order,
/// mappings per key. An empty container means zero visits. Passing neither
/// container shape is a precondition violation and reports a type error.
pub fn each(coll: &Value, visit: &Value) -> Result<()> {
    visit_entries("each", coll, |value, key| {
        apply(visit, &[value.clone(), key, coll.clone()])?;
        Ok(())
    })
}

/// Fold a container to a single value with `combine(accumulator, element)`.
///
/// With a seed, folding starts there and covers every element in traversal
/// order. Without one, the first element becomes the accumulator and
/// `combine` starts from the second: a one-element container comes back
/// as-is without invoking `combine`, and an empty container yields nil —
/// callers that cannot rule out empty input must check for it.
pub fn reduce(coll: &Value, combine: &Value, seed: Option<Value>) -> Result<Value> {
    let mut acc = seed;
    visit_entries("reduce", coll, |value, _key| {
        acc = Some(match acc.take() {
            Some(current) => apply(combine, &[current, value.clone()])?,
            None => value.clone(),
        });
        Ok(())
    })?;
    Ok(acc.unwrap_or(Value::Nil))
}

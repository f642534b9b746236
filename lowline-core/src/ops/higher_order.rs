// lowline-core - Higher-order operations
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Predicate and transform operations: filter, reject, every, some,
//! contains, map, pluck, invoke, identity.

use std::slice;

use lowline_value::Value;

use crate::apply::apply;
use crate::error::Result;

use super::field_of;
use super::traversal::visit_entries;

/// Return the argument unchanged.
///
/// Handy where an iteratee is expected and the caller has none.
pub fn identity(val: &Value) -> Value {
    val.clone()
}

/// The elements for which `test` is truthy, in traversal order.
pub fn filter(coll: &Value, test: &Value) -> Result<Value> {
    let mut kept = Vec::new();
    visit_entries("filter", coll, |value, _key| {
        if apply(test, slice::from_ref(value))?.is_truthy() {
            kept.push(value.clone());
        }
        Ok(())
    })?;
    Ok(Value::seq(kept))
}

/// The elements for which `test` is falsy - the complement of [`filter`].
pub fn reject(coll: &Value, test: &Value) -> Result<Value> {
    let mut kept = Vec::new();
    visit_entries("reject", coll, |value, _key| {
        if !apply(test, slice::from_ref(value))?.is_truthy() {
            kept.push(value.clone());
        }
        Ok(())
    })?;
    Ok(Value::seq(kept))
}

/// True when `test` is truthy for every element; vacuously true on empty.
///
/// With no test, each element's own truthiness is used. The test is
/// invoked once per element even after the outcome is settled.
pub fn every(coll: &Value, test: Option<&Value>) -> Result<bool> {
    let mut all = true;
    visit_entries("every", coll, |value, _key| {
        let outcome = match test {
            Some(f) => apply(f, slice::from_ref(value))?.is_truthy(),
            None => value.is_truthy(),
        };
        if !outcome {
            all = false;
        }
        Ok(())
    })?;
    Ok(all)
}

/// True when `test` is truthy for at least one element; vacuously false on
/// empty. Same default test and full-scan behavior as [`every`].
pub fn some(coll: &Value, test: Option<&Value>) -> Result<bool> {
    let mut any = false;
    visit_entries("some", coll, |value, _key| {
        let outcome = match test {
            Some(f) => apply(f, slice::from_ref(value))?.is_truthy(),
            None => value.is_truthy(),
        };
        if outcome {
            any = true;
        }
        Ok(())
    })?;
    Ok(any)
}

/// True when some element is structurally equal to `target`.
pub fn contains(coll: &Value, target: &Value) -> Result<bool> {
    let mut found = false;
    visit_entries("contains", coll, |value, _key| {
        if value == target {
            found = true;
        }
        Ok(())
    })?;
    Ok(found)
}

/// Transform every element, returning the results in traversal order.
///
/// The result always has as many elements as the input; mapping inputs
/// become a sequence of per-value results, dropping the keys.
pub fn map(coll: &Value, transform: &Value) -> Result<Value> {
    let mut results = Vec::new();
    visit_entries("map", coll, |value, _key| {
        results.push(apply(transform, slice::from_ref(value))?);
        Ok(())
    })?;
    Ok(Value::seq(results))
}

/// [`map`] specialized to a field read: collect `element[field]` for every
/// element. Elements without the field contribute nil.
pub fn pluck(coll: &Value, field: &str) -> Result<Value> {
    let mut results = Vec::new();
    visit_entries("pluck", coll, |value, _key| {
        results.push(field_of(value, field));
        Ok(())
    })?;
    Ok(Value::seq(results))
}

/// Call a method on every element, collecting the results.
///
/// `method` is either a callable, or a field name under which each element
/// stores its own callable; either way the element is passed as the sole
/// argument.
pub fn invoke(coll: &Value, method: &Value) -> Result<Value> {
    let mut results = Vec::new();
    visit_entries("invoke", coll, |value, _key| {
        let callable = match method {
            Value::Str(name) => field_of(value, name.as_ref()),
            other => other.clone(),
        };
        results.push(apply(&callable, slice::from_ref(value))?);
        Ok(())
    })?;
    Ok(Value::seq(results))
}

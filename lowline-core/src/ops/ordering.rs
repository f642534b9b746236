// lowline-core - Ordering
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Selection-based ordering: sort_by and the iteratee it sorts with.

use std::rc::Rc;
use std::slice;

use lowline_value::Value;

use crate::apply::apply;
use crate::error::{Error, Result};

use super::{as_seq, field_of};

/// The key extractor for [`sort_by`]: a field name read from each element,
/// or a callable applied to each element.
#[derive(Clone)]
pub enum Iteratee {
    /// Read this field from each element
    Field(Rc<str>),
    /// Apply this callable to each element
    Extractor(Value),
}

impl Iteratee {
    /// Build an iteratee from a dynamic value: a string names a field, a
    /// callable extracts.
    pub fn from_value(val: &Value) -> Result<Self> {
        match val {
            Value::Str(name) => Ok(Iteratee::Field(name.clone())),
            Value::NativeFn(_) => Ok(Iteratee::Extractor(val.clone())),
            other => Err(Error::type_error_in(
                "sort_by",
                "field name or function",
                other.type_name(),
            )),
        }
    }

    /// The sort key for one element. A nil key counts as undefined.
    fn key_of(&self, el: &Value) -> Result<Value> {
        match self {
            Iteratee::Field(name) => Ok(field_of(el, name.as_ref())),
            Iteratee::Extractor(f) => apply(f, slice::from_ref(el)),
        }
    }
}

/// Sort a sequence by the iteratee's key, selection style.
///
/// Each round recomputes the remaining elements' keys and moves the
/// minimum — by `<` on the raw key values, first occurrence winning ties —
/// into the result. Once no remaining element has a defined key, the
/// remainder is appended in its current relative order and the scan ends.
/// The input is never mutated.
pub fn sort_by(seq: &Value, iteratee: &Iteratee) -> Result<Value> {
    let items = as_seq("sort_by", seq)?;
    let mut remaining: Vec<Value> = items.iter().cloned().collect();
    let mut sorted = Vec::with_capacity(remaining.len());

    while !remaining.is_empty() {
        let mut keys = Vec::with_capacity(remaining.len());
        for el in &remaining {
            keys.push(iteratee.key_of(el)?);
        }

        let mut low: Option<usize> = None;
        for (index, key) in keys.iter().enumerate() {
            if key.is_nil() {
                continue;
            }
            let lower = match low {
                None => true,
                Some(at) => key < &keys[at],
            };
            if lower {
                low = Some(index);
            }
        }

        match low {
            Some(index) => sorted.push(remaining.remove(index)),
            // No remaining element has a defined key: keep their order.
            None => sorted.append(&mut remaining),
        }
    }

    Ok(Value::seq(sorted))
}

// lowline-core - Operations
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Operations over Lowline containers.
//!
//! Every operation works generically over the two container shapes. The
//! [`Container`] classifier performs the sequence-vs-mapping branch in one
//! place, and [`traversal::visit_entries`] is the only code that iterates;
//! everything else funnels through it.

pub mod collection_utils;
pub mod higher_order;
pub mod memoize;
pub mod ordering;
pub mod random;
pub mod sequences;
pub mod set_ops;
pub mod traversal;

use std::rc::Rc;

use lowline_value::{OrdMap, Value, Vector};

use crate::error::{Error, Result};

/// A container viewed by shape: ordered sequence or string-keyed mapping.
pub(crate) enum Container<'a> {
    Seq(&'a Vector<Value>),
    Map(&'a OrdMap<Rc<str>, Value>),
}

/// Classify a value as a container, or report a precondition violation.
pub(crate) fn as_container<'a>(context: &'static str, val: &'a Value) -> Result<Container<'a>> {
    match val {
        Value::Seq(items) => Ok(Container::Seq(items)),
        Value::Map(entries) => Ok(Container::Map(entries)),
        other => Err(Error::type_error_in(
            context,
            "sequence or mapping",
            other.type_name(),
        )),
    }
}

/// Borrow a value's sequence contents, or report a precondition violation.
pub(crate) fn as_seq<'a>(context: &'static str, val: &'a Value) -> Result<&'a Vector<Value>> {
    match val {
        Value::Seq(items) => Ok(items),
        other => Err(Error::type_error_in(context, "sequence", other.type_name())),
    }
}

/// Borrow a value's mapping contents, or report a precondition violation.
pub(crate) fn as_map<'a>(
    context: &'static str,
    val: &'a Value,
) -> Result<&'a OrdMap<Rc<str>, Value>> {
    match val {
        Value::Map(entries) => Ok(entries),
        other => Err(Error::type_error_in(context, "mapping", other.type_name())),
    }
}

/// Read a named field from an element.
///
/// Missing fields and non-mapping elements read as nil.
pub(crate) fn field_of(el: &Value, field: &str) -> Value {
    match el {
        Value::Map(entries) => entries.get(field).cloned().unwrap_or(Value::Nil),
        _ => Value::Nil,
    }
}

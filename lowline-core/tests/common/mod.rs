// lowline-core - Common test utilities
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Shared helpers for Lowline integration tests.
//!
//! # Usage
//!
//! In your test file, add:
//! ```ignore
//! mod common;
//! use common::*;
//! ```
//!
//! # Available Helpers
//!
//! - [`int`] / [`string`] / [`int_seq`] - value construction shorthand
//! - [`native`] - wrap a Rust closure as a callable value
//! - [`counting_identity`] - a callable that counts its invocations
//! - [`add_fn`] / [`sub_fn`] / [`double_fn`] / [`is_even_fn`] - small
//!   arithmetic callables
//! - [`sorted_elements`] - sequence contents, sorted, for multiset checks

// Not every test binary uses every helper.
#![allow(dead_code)]

use std::cell::Cell;
use std::rc::Rc;

#[allow(unused_imports)]
pub use lowline_core::{Error, Result, Value, apply, make_native_fn};

/// Shorthand for an integer value.
pub fn int(n: i64) -> Value {
    Value::int(n)
}

/// Shorthand for a string value.
pub fn string(s: &str) -> Value {
    Value::string(s)
}

/// Build a sequence of integers.
pub fn int_seq(ns: &[i64]) -> Value {
    Value::seq(ns.iter().copied().map(Value::int).collect())
}

/// Wrap a Rust closure as a callable value.
pub fn native(name: &'static str, f: impl Fn(&[Value]) -> Result<Value> + 'static) -> Value {
    Value::NativeFn(make_native_fn(name, f))
}

/// A callable returning its first argument, counting invocations through
/// the shared cell.
pub fn counting_identity(counter: &Rc<Cell<usize>>) -> Value {
    let counter = Rc::clone(counter);
    native("counting-identity", move |args| {
        counter.set(counter.get() + 1);
        Ok(args.first().cloned().unwrap_or(Value::Nil))
    })
}

/// A callable adding two integer arguments.
pub fn add_fn() -> Value {
    native("add", |args| match (&args[0], &args[1]) {
        (Value::Int(a), Value::Int(b)) => Ok(Value::int(a + b)),
        _ => Err(Error::Message("add: expected two ints".into())),
    })
}

/// A callable subtracting its second integer argument from its first.
/// Useful for pinning fold order.
pub fn sub_fn() -> Value {
    native("sub", |args| match (&args[0], &args[1]) {
        (Value::Int(a), Value::Int(b)) => Ok(Value::int(a - b)),
        _ => Err(Error::Message("sub: expected two ints".into())),
    })
}

/// A callable doubling an integer argument.
pub fn double_fn() -> Value {
    native("double", |args| match &args[0] {
        Value::Int(n) => Ok(Value::int(n * 2)),
        _ => Err(Error::Message("double: expected an int".into())),
    })
}

/// A callable testing integer evenness.
pub fn is_even_fn() -> Value {
    native("is-even", |args| match &args[0] {
        Value::Int(n) => Ok(Value::bool(n % 2 == 0)),
        _ => Err(Error::Message("is-even: expected an int".into())),
    })
}

/// The contents of a sequence, sorted, for order-insensitive comparison.
pub fn sorted_elements(seq: &Value) -> Vec<Value> {
    match seq {
        Value::Seq(items) => {
            let mut elements: Vec<Value> = items.iter().cloned().collect();
            elements.sort();
            elements
        }
        other => panic!("expected a sequence, got {}", other),
    }
}

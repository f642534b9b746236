// lowline-core - Function wrappers
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Call-result caching: memoize, and the single-invocation guard once.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use lowline_value::Value;

use crate::apply::{apply, make_native_fn};
use crate::error::{Error, Result};

/// A memoized wrapper around a callable.
///
/// # Cache Key Limitation
///
/// The cache key is derived from the final argument of each call only:
/// two calls whose argument lists differ anywhere before the last slot
/// still share one cache entry. Existing callers rely on this behavior, so
/// it is kept as-is. Treat the wrapper as sound for single-argument
/// functions, and make final arguments distinct otherwise.
struct MemoizedFn {
    /// The original function
    f: Value,
    /// Cache: final argument -> result
    cache: RefCell<HashMap<Value, Value>>,
}

impl MemoizedFn {
    fn new(f: Value) -> Self {
        MemoizedFn {
            f,
            cache: RefCell::new(HashMap::new()),
        }
    }

    fn call(&self, args: &[Value]) -> Result<Value> {
        let key = args.last().cloned().unwrap_or(Value::Nil);

        // Check cache first
        if let Some(cached) = self.cache.borrow().get(&key) {
            return Ok(cached.clone());
        }

        // Call the original function with the full argument list
        let result = apply(&self.f, args)?;

        // Cache the result
        self.cache.borrow_mut().insert(key, result.clone());

        Ok(result)
    }
}

/// Wrap `f` in a private, unbounded result cache.
///
/// A cache hit returns the stored result without invoking `f`, so side
/// effects run only on the first call for each key. Every wrapper owns its
/// own cache; two wrappers never share entries, and the cache lives as
/// long as the wrapper with no eviction.
pub fn memoize(f: &Value) -> Result<Value> {
    match f {
        Value::NativeFn(_) => {
            let memo = Rc::new(MemoizedFn::new(f.clone()));

            let closure = move |call_args: &[Value]| -> Result<Value> { memo.call(call_args) };
            Ok(Value::NativeFn(make_native_fn("memoized-fn", closure)))
        }
        other => Err(Error::type_error_in("memoize", "function", other.type_name())),
    }
}

/// State for a function that may only ever run once.
struct OnceFn {
    /// The original function
    f: Value,
    called: Cell<bool>,
    result: RefCell<Value>,
}

impl OnceFn {
    fn new(f: Value) -> Self {
        OnceFn {
            f,
            called: Cell::new(false),
            result: RefCell::new(Value::Nil),
        }
    }

    fn call(&self, args: &[Value]) -> Result<Value> {
        if !self.called.get() {
            let result = apply(&self.f, args)?;
            *self.result.borrow_mut() = result;
            self.called.set(true);
        }
        Ok(self.result.borrow().clone())
    }
}

/// Wrap `f` so it runs at most once.
///
/// The first call's result is replayed by every later call, whatever the
/// later arguments are. A first call that fails does not count: the guard
/// stays unarmed and the next call tries again.
pub fn once(f: &Value) -> Result<Value> {
    match f {
        Value::NativeFn(_) => {
            let guard = Rc::new(OnceFn::new(f.clone()));

            let closure = move |call_args: &[Value]| -> Result<Value> { guard.call(call_args) };
            Ok(Value::NativeFn(make_native_fn("once-fn", closure)))
        }
        other => Err(Error::type_error_in("once", "function", other.type_name())),
    }
}

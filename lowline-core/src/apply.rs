// lowline-core - Function application
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Applying callable values to argument lists.

use std::any::Any;
use std::rc::Rc;

use lowline_value::{NativeFn, Value};

use crate::error::{Error, Result};

/// The concrete type of a native function implementation.
pub type NativeFnImpl = dyn Fn(&[Value]) -> Result<Value>;

/// Apply a callable value to arguments.
pub fn apply(func: &Value, args: &[Value]) -> Result<Value> {
    match func {
        Value::NativeFn(f) => apply_native(f, args),
        other => Err(Error::NotCallable(other.to_string())),
    }
}

/// Apply a native (Rust) function.
pub(crate) fn apply_native(func: &NativeFn, args: &[Value]) -> Result<Value> {
    // Downcast the function
    let f = func
        .func()
        .downcast_ref::<Rc<NativeFnImpl>>()
        .ok_or_else(|| Error::Internal("Native function has invalid type".into()))?;
    f(args)
}

/// Create a native function value.
pub fn make_native_fn(
    name: &'static str,
    func: impl Fn(&[Value]) -> Result<Value> + 'static,
) -> NativeFn {
    let func_rc: Rc<NativeFnImpl> = Rc::new(func);
    let func_any: Rc<dyn Any> = Rc::new(func_rc);
    NativeFn::new(name, func_any)
}

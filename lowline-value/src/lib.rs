// lowline-value - Value model for the Lowline utility toolkit
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! # lowline-value
//!
//! Dynamic value model for the Lowline utility toolkit.
//! Provides [`Value`], the enum every Lowline operation consumes and
//! produces, together with the persistent containers it is built on.

pub mod value;

pub use im::{OrdMap, Vector};
pub use value::{NativeFn, Value};

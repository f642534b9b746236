// lowline-core - Operations for the Lowline utility toolkit
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! # lowline-core
//!
//! Eager, generic operations over Lowline's two container shapes: ordered
//! sequences and string-keyed mappings. Everything is layered on a single
//! traversal primitive — reduction is derived from traversal, and the
//! predicate, transform, ordering, set-algebra, and flattening operations
//! are expressed in terms of those two. Function wrappers (memoize, once)
//! keep their state in closures owned by the returned callable.

pub mod apply;
pub mod error;
pub mod ops;

pub use apply::{NativeFnImpl, apply, make_native_fn};
pub use error::{Error, Result};
pub use ops::collection_utils::{defaults, extend};
pub use ops::higher_order::{contains, every, filter, identity, invoke, map, pluck, reject, some};
pub use ops::memoize::{memoize, once};
pub use ops::ordering::{Iteratee, sort_by};
pub use ops::random::shuffle;
pub use ops::sequences::{first, flatten, index_of, last, uniq};
pub use ops::set_ops::{difference, intersection, zip};
pub use ops::traversal::{each, reduce};

// Re-export value types for convenience
pub use lowline_value::{NativeFn, OrdMap, Value, Vector};

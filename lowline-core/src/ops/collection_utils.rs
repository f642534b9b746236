// lowline-core - Mapping utilities
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Key/value merging across mappings: extend and defaults.

use lowline_value::Value;

use crate::error::Result;

use super::as_map;

/// Merge every source mapping into a copy of the target; later sources
/// overwrite earlier ones. Non-mutating: the result is a new mapping.
pub fn extend(target: &Value, sources: &[Value]) -> Result<Value> {
    let mut merged = as_map("extend", target)?.clone();
    for source in sources {
        for (key, value) in as_map("extend", source)?.iter() {
            merged.insert(key.clone(), value.clone());
        }
    }
    Ok(Value::Map(merged))
}

/// Like [`extend`], but never overwrites a key the target already has: only
/// missing keys are filled, and the first source providing a key wins.
pub fn defaults(target: &Value, sources: &[Value]) -> Result<Value> {
    let mut merged = as_map("defaults", target)?.clone();
    for source in sources {
        for (key, value) in as_map("defaults", source)?.iter() {
            if !merged.contains_key(key) {
                merged.insert(key.clone(), value.clone());
            }
        }
    }
    Ok(Value::Map(merged))
}

// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Helpers over list payloads used by generated code.

use crate::{AnyValue, Result, RuntimeError, TypeDescriptor};

fn items(list: &AnyValue) -> Result<&[AnyValue]> {
    list.as_list()
        .ok_or_else(|| RuntimeError::NotAList(list.type_descriptor().to_string()))
}

/// Number of elements in a list value.
pub fn list_len(list: &AnyValue) -> Result<i64> {
    Ok(items(list)?.len() as i64)
}

/// Element at `index`. Negative or out-of-range indices are errors.
pub fn list_index(list: &AnyValue, index: i64) -> Result<&AnyValue> {
    let items = items(list)?;
    usize::try_from(index)
        .ok()
        .and_then(|i| items.get(i))
        .ok_or(RuntimeError::IndexOutOfBounds {
            index,
            length: items.len(),
        })
}

/// Whether the list holds an element of kind `element_type` whose payload
/// equals `needle`'s.
pub fn list_contains(
    list: &AnyValue,
    element_type: &TypeDescriptor,
    needle: &AnyValue,
) -> Result<bool> {
    let kind = element_type.kind();
    Ok(items(list)?
        .iter()
        .any(|item| item.kind() == kind && item.payload() == needle.payload()))
}

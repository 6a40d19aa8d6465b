// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Fatal entry points: JSON parsing, JSON marshaling and runtime casts.
//!
//! These calls have no error return. On failure they print one of
//!
//! ```text
//! Runtime JSON parse error: `<parser message>`
//! Runtime error: Unsupported cast: Cannot cast value of type `<from>` to `<as>`
//! ```
//!
//! on stdout and terminate the process.

use std::ffi::CStr;
use std::os::raw::c_char;

use hpi_dynamic::{marshal, parse_to_any, AnyValue, Result, RuntimeError, TypeDescriptor};

use super::runtime::{config, die};
use super::{string_into_raw, type_ref, value_into_raw, value_ref, HpiAnyValue, HpiTypeDescriptor};

unsafe fn parse_json(input: *const c_char) -> Result<AnyValue> {
    if input.is_null() {
        return Err(RuntimeError::JsonParse("input is NULL".into()));
    }
    let text = CStr::from_ptr(input)
        .to_str()
        .map_err(|e| RuntimeError::JsonParse(e.to_string()))?;
    parse_to_any(text)
}

/// Parse JSON text into a new value.
///
/// Terminates the process on malformed input.
///
/// # Safety
/// - `input` must be a valid null-terminated C string.
#[no_mangle]
pub unsafe extern "C" fn hpi_parse_json(input: *const c_char) -> *mut HpiAnyValue {
    match parse_json(input) {
        Ok(value) => value_into_raw(value),
        Err(e) => die(&e),
    }
}

unsafe fn marshal_json(
    type_desc: *const HpiTypeDescriptor,
    value: *const HpiAnyValue,
) -> Result<String> {
    let (Some(type_desc), Some(value)) = (type_ref(type_desc), value_ref(value)) else {
        return Err(RuntimeError::Marshal("type or value is NULL".into()));
    };
    // serde_json escapes U+0000, so the text always fits a C string.
    marshal(type_desc, value)
}

/// Serialize `value` as JSON text directed by `type_desc`.
///
/// The returned string must be released with `hpi_string_free`. Terminates
/// the process if the value does not fit the descriptor.
///
/// # Safety
/// - `type_desc` and `value` must be valid handles.
#[no_mangle]
pub unsafe extern "C" fn hpi_marshal_json(
    type_desc: *const HpiTypeDescriptor,
    value: *const HpiAnyValue,
) -> *mut c_char {
    match marshal_json(type_desc, value) {
        Ok(text) => string_into_raw(text),
        Err(e) => die(&e),
    }
}

/// Check that a value described by `from_type` may be used as `as_type`.
///
/// Uses the configured cast policy. Terminates the process on rejection.
///
/// # Safety
/// - `as_type` and `from_type` must be valid descriptor handles.
#[no_mangle]
pub unsafe extern "C" fn hpi_validate_runtime_cast(
    as_type: *const HpiTypeDescriptor,
    from_type: *const HpiTypeDescriptor,
) {
    let none = TypeDescriptor::none();
    let as_type = type_ref(as_type).unwrap_or(&none);
    let from_type = type_ref(from_type).unwrap_or(&none);
    if let Err(e) = config().cast_validator().validate(as_type, from_type) {
        die(&e);
    }
}

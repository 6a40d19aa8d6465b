// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Dynamic record C FFI bindings.
//!
//! # Usage from C
//!
//! ```c
//! HpiAnyObject* obj = hpi_anyobj_new();
//! hpi_anyobj_insert(obj, "x", hpi_any_value_int(1));
//!
//! HpiAnyValue* x = hpi_anyobj_take(obj, "x");     // copy, obj keeps its field
//! HpiAnyValue* y = hpi_anyobj_take(obj, "y");     // HPI_TYPE_NONE
//!
//! HpiStringList* keys = hpi_anyobj_keys(obj);
//! for (size_t i = 0; i < hpi_string_list_len(keys); i++) {
//!     puts(hpi_string_list_at(keys, i));
//! }
//!
//! hpi_string_list_destroy(keys);
//! hpi_any_value_destroy(x);
//! hpi_any_value_destroy(y);
//! hpi_anyobj_destroy(obj);
//! ```

use std::ffi::CString;
use std::os::raw::c_char;
use std::ptr;

use hpi_dynamic::{AnyObject, AnyValue};

use super::{
    object_into_raw, object_mut, object_ref, object_take, str_arg, value_into_raw, value_take,
    HpiAnyObject, HpiAnyValue, HpiError, HpiStringList,
};

/// Create an empty record.
///
/// # Safety
/// Always safe to call; the result must be destroyed by the caller.
#[no_mangle]
pub unsafe extern "C" fn hpi_anyobj_new() -> *mut HpiAnyObject {
    object_into_raw(AnyObject::new())
}

/// Store `value` under `key`, consuming `value`.
///
/// A value already stored under `key` is released.
///
/// # Safety
/// - `obj` must be a valid record handle. `key` must be null-terminated.
/// - `value` must be a valid value handle; it is consumed even on error.
#[no_mangle]
pub unsafe extern "C" fn hpi_anyobj_insert(
    obj: *mut HpiAnyObject,
    key: *const c_char,
    value: *mut HpiAnyValue,
) -> HpiError {
    let Some(value) = value_take(value) else {
        return HpiError::HpiInvalidArgument;
    };
    let (Some(obj), Some(key)) = (object_mut(obj), str_arg(key)) else {
        return HpiError::HpiInvalidArgument;
    };
    obj.insert(key, value);
    HpiError::HpiOk
}

/// Copy of the value stored under `key`; a `Nichts` value if there is none.
///
/// Returns NULL only for invalid arguments.
///
/// # Safety
/// - `obj` must be a valid record handle. `key` must be null-terminated.
#[no_mangle]
pub unsafe extern "C" fn hpi_anyobj_take(
    obj: *const HpiAnyObject,
    key: *const c_char,
) -> *mut HpiAnyValue {
    match (object_ref(obj), str_arg(key)) {
        (Some(obj), Some(key)) => value_into_raw(obj.take(key)),
        _ => ptr::null_mut(),
    }
}

/// Number of fields.
///
/// # Safety
/// - `obj` must be a valid record handle or NULL.
#[no_mangle]
pub unsafe extern "C" fn hpi_anyobj_len(obj: *const HpiAnyObject) -> usize {
    object_ref(obj).map_or(0, AnyObject::len)
}

/// Field names of a record.
///
/// Names containing a NUL character (JSON allows `"a\u0000b"`) cannot be
/// represented as C strings and are left out, so the list can be shorter
/// than `hpi_anyobj_len`. Such fields stay reachable only from Rust.
///
/// # Safety
/// - `obj` must be a valid record handle.
#[no_mangle]
pub unsafe extern "C" fn hpi_anyobj_keys(obj: *const HpiAnyObject) -> *mut HpiStringList {
    let Some(obj) = object_ref(obj) else {
        return ptr::null_mut();
    };
    let keys: Vec<CString> = obj
        .keys()
        .into_iter()
        .filter_map(|k| match CString::new(k) {
            Ok(key) => Some(key),
            Err(e) => {
                log::debug!("[ffi] hpi_anyobj_keys: skipping field name with NUL: {}", e);
                None
            }
        })
        .collect();
    Box::into_raw(Box::new(keys)).cast::<HpiStringList>()
}

/// Box a record into a `Speicherbox` value, consuming `obj`.
///
/// # Safety
/// - `obj` must be a valid record handle; it is consumed.
#[no_mangle]
pub unsafe extern "C" fn hpi_anyobj_into_value(obj: *mut HpiAnyObject) -> *mut HpiAnyValue {
    match object_take(obj) {
        Some(obj) => value_into_raw(AnyValue::object(obj)),
        None => ptr::null_mut(),
    }
}

/// Destroy a record and every value it owns.
///
/// # Safety
/// - `obj` must be a valid record handle or NULL.
#[no_mangle]
pub unsafe extern "C" fn hpi_anyobj_destroy(obj: *mut HpiAnyObject) {
    drop(object_take(obj));
}

// =============================================================================
// String lists
// =============================================================================

unsafe fn string_list_ref<'a>(list: *const HpiStringList) -> Option<&'a Vec<CString>> {
    list.cast::<Vec<CString>>().as_ref()
}

/// Number of strings in the list.
///
/// # Safety
/// - `list` must be a valid string list or NULL.
#[no_mangle]
pub unsafe extern "C" fn hpi_string_list_len(list: *const HpiStringList) -> usize {
    string_list_ref(list).map_or(0, Vec::len)
}

/// String at `index`, borrowed from the list. NULL if out of range.
///
/// # Safety
/// - `list` must be a valid string list; the result lives as long as `list`.
#[no_mangle]
pub unsafe extern "C" fn hpi_string_list_at(
    list: *const HpiStringList,
    index: usize,
) -> *const c_char {
    string_list_ref(list)
        .and_then(|l| l.get(index))
        .map_or(ptr::null(), |s| s.as_ptr())
}

/// Destroy a string list.
///
/// # Safety
/// - `list` must be a valid string list or NULL.
#[no_mangle]
pub unsafe extern "C" fn hpi_string_list_destroy(list: *mut HpiStringList) {
    if !list.is_null() {
        drop(Box::from_raw(list.cast::<Vec<CString>>()));
    }
}

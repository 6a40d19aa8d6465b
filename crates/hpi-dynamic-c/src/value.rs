// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Dynamic value C FFI bindings.

use std::os::raw::c_char;
use std::ptr;

use hpi_dynamic::{list_contains, list_index, list_len, AnyValue, RuntimeError, TypeKind};

use super::{
    object_into_raw, str_arg, string_into_raw, type_into_raw, type_ref, value_into_raw,
    value_ref, value_take, HpiAnyObject, HpiAnyValue, HpiError, HpiTypeDescriptor, HpiTypeKind,
};

// =============================================================================
// Constructors
// =============================================================================

/// Create the `Nichts` value.
///
/// # Safety
/// Always safe to call; the result must be destroyed by the caller.
#[no_mangle]
pub unsafe extern "C" fn hpi_any_value_none() -> *mut HpiAnyValue {
    value_into_raw(AnyValue::none())
}

/// Create an integer value.
///
/// # Safety
/// Always safe to call; the result must be destroyed by the caller.
#[no_mangle]
pub unsafe extern "C" fn hpi_any_value_int(v: i64) -> *mut HpiAnyValue {
    value_into_raw(AnyValue::int(v))
}

/// Create a floating-point value.
///
/// # Safety
/// Always safe to call; the result must be destroyed by the caller.
#[no_mangle]
pub unsafe extern "C" fn hpi_any_value_float(v: f64) -> *mut HpiAnyValue {
    value_into_raw(AnyValue::float(v))
}

/// Create a character value.
///
/// # Safety
/// Always safe to call; the result must be destroyed by the caller.
#[no_mangle]
pub unsafe extern "C" fn hpi_any_value_char(v: u8) -> *mut HpiAnyValue {
    value_into_raw(AnyValue::char(v))
}

/// Create a boolean value.
///
/// # Safety
/// Always safe to call; the result must be destroyed by the caller.
#[no_mangle]
pub unsafe extern "C" fn hpi_any_value_bool(v: bool) -> *mut HpiAnyValue {
    value_into_raw(AnyValue::bool(v))
}

/// Create a string value from a copy of `s`.
///
/// # Safety
/// - `s` must be a valid null-terminated UTF-8 C string.
#[no_mangle]
pub unsafe extern "C" fn hpi_any_value_string(s: *const c_char) -> *mut HpiAnyValue {
    match str_arg(s) {
        Some(s) => value_into_raw(AnyValue::string(s)),
        None => ptr::null_mut(),
    }
}

/// Destroy a value and everything it owns.
///
/// # Safety
/// - `value` must be a valid value handle or NULL.
#[no_mangle]
pub unsafe extern "C" fn hpi_any_value_destroy(value: *mut HpiAnyValue) {
    drop(value_take(value));
}

// =============================================================================
// Accessors
// =============================================================================

/// Kind of a value. `HPI_TYPE_NONE` for NULL.
///
/// # Safety
/// - `value` must be a valid value handle or NULL.
#[no_mangle]
pub unsafe extern "C" fn hpi_any_value_kind(value: *const HpiAnyValue) -> HpiTypeKind {
    value_ref(value).map_or(TypeKind::None, AnyValue::kind).into()
}

/// Copy of a value's descriptor.
///
/// # Safety
/// - `value` must be a valid value handle.
#[no_mangle]
pub unsafe extern "C" fn hpi_any_value_type(value: *const HpiAnyValue) -> *mut HpiTypeDescriptor {
    match value_ref(value) {
        Some(v) => type_into_raw(v.type_descriptor().clone()),
        None => ptr::null_mut(),
    }
}

macro_rules! scalar_getter {
    ($name:ident, $ty:ty, $accessor:ident) => {
        /// Read a scalar payload into `out`.
        ///
        /// # Safety
        /// - `value` must be a valid value handle; `out` must be writable.
        #[no_mangle]
        pub unsafe extern "C" fn $name(value: *const HpiAnyValue, out: *mut $ty) -> HpiError {
            let Some(v) = value_ref(value) else {
                return HpiError::HpiInvalidArgument;
            };
            if out.is_null() {
                return HpiError::HpiInvalidArgument;
            }
            match v.$accessor() {
                Some(x) => {
                    *out = x;
                    HpiError::HpiOk
                }
                None => HpiError::HpiTypeMismatch,
            }
        }
    };
}

scalar_getter!(hpi_any_value_as_int, i64, as_int);
scalar_getter!(hpi_any_value_as_float, f64, as_float);
scalar_getter!(hpi_any_value_as_char, u8, as_char);
scalar_getter!(hpi_any_value_as_bool, bool, as_bool);

/// Copy of a string payload. NULL if the value is not a string.
///
/// The returned string must be released with `hpi_string_free`.
///
/// # Safety
/// - `value` must be a valid value handle.
#[no_mangle]
pub unsafe extern "C" fn hpi_any_value_as_string(value: *const HpiAnyValue) -> *mut c_char {
    match value_ref(value).and_then(AnyValue::as_str) {
        Some(s) => string_into_raw(s),
        None => ptr::null_mut(),
    }
}

/// Copy of a record payload. NULL if the value is not a `Speicherbox`.
///
/// # Safety
/// - `value` must be a valid value handle.
#[no_mangle]
pub unsafe extern "C" fn hpi_any_value_as_object(value: *const HpiAnyValue) -> *mut HpiAnyObject {
    match value_ref(value).and_then(AnyValue::as_object) {
        Some(obj) => object_into_raw(obj.clone()),
        None => ptr::null_mut(),
    }
}

// =============================================================================
// Lists
// =============================================================================

fn status_of(err: &RuntimeError) -> HpiError {
    match err {
        RuntimeError::NotAList(_) => HpiError::HpiTypeMismatch,
        RuntimeError::IndexOutOfBounds { .. } => HpiError::HpiIndexOutOfBounds,
        _ => HpiError::HpiOperationFailed,
    }
}

/// Number of elements of a list value, or -1 if it is not a list.
///
/// # Safety
/// - `list` must be a valid value handle.
#[no_mangle]
pub unsafe extern "C" fn hpi_list_len(list: *const HpiAnyValue) -> i64 {
    value_ref(list)
        .and_then(|l| list_len(l).ok())
        .unwrap_or(-1)
}

/// Copy of the element at `index`. NULL if out of range or not a list.
///
/// # Safety
/// - `list` must be a valid value handle.
#[no_mangle]
pub unsafe extern "C" fn hpi_list_index(list: *const HpiAnyValue, index: i64) -> *mut HpiAnyValue {
    let Some(list) = value_ref(list) else {
        return ptr::null_mut();
    };
    match list_index(list, index) {
        Ok(item) => value_into_raw(item.clone()),
        Err(e) => {
            log::debug!("[ffi] hpi_list_index: {}", e);
            ptr::null_mut()
        }
    }
}

/// Whether `list` holds an element of kind `element_type` equal to `needle`.
///
/// # Safety
/// - `list`, `element_type` and `needle` must be valid handles; `out` must be
///   writable.
#[no_mangle]
pub unsafe extern "C" fn hpi_list_contains(
    list: *const HpiAnyValue,
    element_type: *const HpiTypeDescriptor,
    needle: *const HpiAnyValue,
    out: *mut bool,
) -> HpiError {
    let (Some(list), Some(element_type), Some(needle)) =
        (value_ref(list), type_ref(element_type), value_ref(needle))
    else {
        return HpiError::HpiInvalidArgument;
    };
    if out.is_null() {
        return HpiError::HpiInvalidArgument;
    }
    match list_contains(list, element_type, needle) {
        Ok(found) => {
            *out = found;
            HpiError::HpiOk
        }
        Err(e) => status_of(&e),
    }
}

/// Build a list value from `count` values, consuming them.
///
/// The element type is taken from the last value, as for JSON arrays.
///
/// # Safety
/// - `items` must point to `count` valid value handles (or be NULL when
///   `count` is 0); every handle is consumed.
#[no_mangle]
pub unsafe extern "C" fn hpi_list_from_values(
    items: *const *mut HpiAnyValue,
    count: usize,
) -> *mut HpiAnyValue {
    if items.is_null() && count > 0 {
        return ptr::null_mut();
    }
    let handles = if count == 0 {
        &[][..]
    } else {
        std::slice::from_raw_parts(items, count)
    };
    // Take every handle before checking, so none is left behind.
    let taken: Vec<Option<AnyValue>> = handles.iter().map(|&h| value_take(h)).collect();
    match taken.into_iter().collect::<Option<Vec<_>>>() {
        Some(values) => value_into_raw(AnyValue::list_inferred(values)),
        None => ptr::null_mut(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{hpi_anyobj_destroy, hpi_anyobj_len, hpi_string_free, hpi_type_destroy, hpi_type_new};
    use std::ffi::{CStr, CString};

    #[test]
    fn test_scalar_getters() {
        unsafe {
            let v = hpi_any_value_float(2.5);
            let mut f = 0.0f64;
            assert_eq!(hpi_any_value_as_float(v, &mut f), HpiError::HpiOk);
            assert!((f - 2.5).abs() < f64::EPSILON);

            let mut i = 0i64;
            assert_eq!(hpi_any_value_as_int(v, &mut i), HpiError::HpiTypeMismatch);
            assert_eq!(hpi_any_value_as_int(v, ptr::null_mut()), HpiError::HpiInvalidArgument);
            hpi_any_value_destroy(v);

            let c = hpi_any_value_char(b'z');
            let mut out = 0u8;
            assert_eq!(hpi_any_value_as_char(c, &mut out), HpiError::HpiOk);
            assert_eq!(out, b'z');
            assert_eq!(hpi_any_value_kind(c), HpiTypeKind::HpiTypeChar);
            hpi_any_value_destroy(c);
        }
    }

    #[test]
    fn test_string_copy_out() {
        unsafe {
            let input = CString::new("Grüße").unwrap();
            let v = hpi_any_value_string(input.as_ptr());
            let s = hpi_any_value_as_string(v);
            assert_eq!(CStr::from_ptr(s).to_str().unwrap(), "Grüße");
            hpi_string_free(s);

            assert!(hpi_any_value_as_object(v).is_null());
            hpi_any_value_destroy(v);
        }
    }

    #[test]
    fn test_list_operations() {
        unsafe {
            let mut items = [hpi_any_value_int(4), hpi_any_value_int(8), hpi_any_value_int(15)];
            let list = hpi_list_from_values(items.as_mut_ptr(), items.len());
            assert_eq!(hpi_list_len(list), 3);

            let second = hpi_list_index(list, 1);
            let mut out = 0i64;
            hpi_any_value_as_int(second, &mut out);
            assert_eq!(out, 8);
            hpi_any_value_destroy(second);

            assert!(hpi_list_index(list, 3).is_null());
            assert!(hpi_list_index(list, -1).is_null());

            let ty = hpi_type_new(HpiTypeKind::HpiTypeInt, 0);
            let needle = hpi_any_value_int(15);
            let mut found = false;
            assert_eq!(hpi_list_contains(list, ty, needle, &mut found), HpiError::HpiOk);
            assert!(found);
            hpi_any_value_destroy(needle);

            let needle = hpi_any_value_int(16);
            assert_eq!(hpi_list_contains(list, ty, needle, &mut found), HpiError::HpiOk);
            assert!(!found);
            hpi_any_value_destroy(needle);

            hpi_type_destroy(ty);
            hpi_any_value_destroy(list);
        }
    }

    #[test]
    fn test_list_operations_on_non_list() {
        unsafe {
            let v = hpi_any_value_bool(true);
            assert_eq!(hpi_list_len(v), -1);
            assert!(hpi_list_index(v, 0).is_null());

            let ty = hpi_type_new(HpiTypeKind::HpiTypeBool, 0);
            let mut found = false;
            assert_eq!(hpi_list_contains(v, ty, v, &mut found), HpiError::HpiTypeMismatch);
            hpi_type_destroy(ty);
            hpi_any_value_destroy(v);
        }
    }

    #[test]
    fn test_empty_list() {
        unsafe {
            let list = hpi_list_from_values(ptr::null(), 0);
            assert_eq!(hpi_list_len(list), 0);
            assert!(hpi_list_index(list, 0).is_null());
            hpi_any_value_destroy(list);
        }
    }

    #[test]
    fn test_object_payload_copy() {
        unsafe {
            let obj = crate::hpi_anyobj_new();
            let v = crate::hpi_anyobj_into_value(obj);
            let copy = hpi_any_value_as_object(v);
            assert!(!copy.is_null());
            assert_eq!(hpi_anyobj_len(copy), 0);
            hpi_anyobj_destroy(copy);
            hpi_any_value_destroy(v);
        }
    }
}

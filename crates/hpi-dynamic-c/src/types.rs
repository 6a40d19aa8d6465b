// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Type descriptor C FFI bindings.
//!
//! # Usage from C
//!
//! ```c
//! // Objekt {Zahl id, Liste von Zeichenkette tags}
//! HpiTypeDescriptor* ty = hpi_type_object_new(0);
//! hpi_type_object_add_field(ty, "id", hpi_type_new(HPI_TYPE_INT, 0));
//! hpi_type_object_add_field(ty, "tags",
//!     hpi_type_list_of(hpi_type_new(HPI_TYPE_STRING, 0), 0));
//!
//! char* name = hpi_type_display(ty);
//! hpi_string_free(name);
//! hpi_type_destroy(ty);
//! ```

use std::os::raw::c_char;
use std::ptr;

use hpi_dynamic::{display_type, ObjectFields, TypeDescriptor, TypeKind};

use super::{
    str_arg, string_into_raw, type_into_raw, type_ref, type_take, HpiError, HpiTypeDescriptor,
    HpiTypeKind,
};

/// Create a descriptor of a kind without nested structure.
///
/// Returns NULL for `HPI_TYPE_LIST` and `HPI_TYPE_OBJECT`; use
/// [`hpi_type_list_of`] and [`hpi_type_object_new`] for those.
///
/// # Safety
/// Always safe to call; the result must be destroyed by the caller.
#[no_mangle]
pub unsafe extern "C" fn hpi_type_new(kind: HpiTypeKind, ptr_count: u32) -> *mut HpiTypeDescriptor {
    match TypeDescriptor::scalar(kind.into()) {
        Some(desc) => type_into_raw(desc.with_ptr_count(ptr_count)),
        None => ptr::null_mut(),
    }
}

/// Create a list descriptor, consuming `inner`.
///
/// # Safety
/// - `inner` must be a valid descriptor handle; it is consumed.
#[no_mangle]
pub unsafe extern "C" fn hpi_type_list_of(
    inner: *mut HpiTypeDescriptor,
    ptr_count: u32,
) -> *mut HpiTypeDescriptor {
    let Some(inner) = type_take(inner) else {
        return ptr::null_mut();
    };
    type_into_raw(TypeDescriptor::list_of(inner).with_ptr_count(ptr_count))
}

/// Create a record descriptor without fields.
///
/// # Safety
/// Always safe to call; the result must be destroyed by the caller.
#[no_mangle]
pub unsafe extern "C" fn hpi_type_object_new(ptr_count: u32) -> *mut HpiTypeDescriptor {
    type_into_raw(TypeDescriptor::object(ObjectFields::new()).with_ptr_count(ptr_count))
}

/// Add a field to a record descriptor, consuming `field_type`.
///
/// # Safety
/// - `desc` must be a valid record descriptor. `name` must be null-terminated.
/// - `field_type` must be a valid descriptor handle; it is consumed even on
///   error.
#[no_mangle]
pub unsafe extern "C" fn hpi_type_object_add_field(
    desc: *mut HpiTypeDescriptor,
    name: *const c_char,
    field_type: *mut HpiTypeDescriptor,
) -> HpiError {
    let Some(field_type) = type_take(field_type) else {
        return HpiError::HpiInvalidArgument;
    };
    let Some(name) = str_arg(name) else {
        return HpiError::HpiInvalidArgument;
    };
    let Some(desc) = desc.cast::<TypeDescriptor>().as_mut() else {
        return HpiError::HpiInvalidArgument;
    };
    let Some(fields) = desc.obj_fields_mut() else {
        return HpiError::HpiTypeMismatch;
    };
    fields.insert(name.to_string(), field_type);
    HpiError::HpiOk
}

/// Kind of a descriptor. `HPI_TYPE_NONE` for NULL.
///
/// # Safety
/// - `desc` must be a valid descriptor handle or NULL.
#[no_mangle]
pub unsafe extern "C" fn hpi_type_kind(desc: *const HpiTypeDescriptor) -> HpiTypeKind {
    type_ref(desc).map_or(TypeKind::None, TypeDescriptor::kind).into()
}

/// Indirection depth of a descriptor. 0 for NULL.
///
/// # Safety
/// - `desc` must be a valid descriptor handle or NULL.
#[no_mangle]
pub unsafe extern "C" fn hpi_type_ptr_count(desc: *const HpiTypeDescriptor) -> u32 {
    type_ref(desc).map_or(0, TypeDescriptor::ptr_count)
}

/// Element type of a list descriptor, as a new handle. NULL otherwise.
///
/// # Safety
/// - `desc` must be a valid descriptor handle or NULL.
#[no_mangle]
pub unsafe extern "C" fn hpi_type_list_inner(
    desc: *const HpiTypeDescriptor,
) -> *mut HpiTypeDescriptor {
    match type_ref(desc).and_then(TypeDescriptor::list_inner) {
        Some(inner) => type_into_raw(inner.clone()),
        None => ptr::null_mut(),
    }
}

/// Human-readable name of a descriptor, e.g. `Liste von Zahl`.
///
/// The returned string must be released with `hpi_string_free`.
///
/// # Safety
/// - `desc` must be a valid descriptor handle.
#[no_mangle]
pub unsafe extern "C" fn hpi_type_display(desc: *const HpiTypeDescriptor) -> *mut c_char {
    match type_ref(desc) {
        Some(desc) => string_into_raw(display_type(desc)),
        None => ptr::null_mut(),
    }
}

/// Deep copy of a descriptor.
///
/// # Safety
/// - `desc` must be a valid descriptor handle or NULL.
#[no_mangle]
pub unsafe extern "C" fn hpi_type_clone(desc: *const HpiTypeDescriptor) -> *mut HpiTypeDescriptor {
    match type_ref(desc) {
        Some(desc) => type_into_raw(desc.clone()),
        None => ptr::null_mut(),
    }
}

/// Destroy a descriptor.
///
/// # Safety
/// - `desc` must be a valid descriptor handle or NULL.
#[no_mangle]
pub unsafe extern "C" fn hpi_type_destroy(desc: *mut HpiTypeDescriptor) {
    drop(type_take(desc));
}

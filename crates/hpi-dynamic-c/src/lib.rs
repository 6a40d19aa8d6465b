// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! # hpi-dynamic C FFI Bindings
//!
//! C-compatible entry points of the dynamic value runtime, called by code
//! that the transpiler emits.
//!
//! # Ownership
//!
//! Every handle returned by a function of this crate is owned by the caller
//! and must be released with the matching `*_destroy` function (strings with
//! [`hpi_string_free`]). Functions documented as *consuming* an argument take
//! ownership of it; the caller must not use or destroy it afterwards.
//!
//! # Fatal entry points
//!
//! [`hpi_parse_json`], [`hpi_marshal_json`] and [`hpi_validate_runtime_cast`]
//! never report failure to the caller: they print the runtime diagnostic on
//! stdout and terminate the process with the configured exit status.
//!
//! # Safety
//!
//! All public functions are `unsafe` and require the caller to uphold the
//! invariants documented in each function's safety comment.

mod boundary;
mod logging;
mod object;
mod runtime;
mod types;
mod value;

pub use boundary::*;
pub use logging::*;
pub use object::*;
pub use runtime::*;
pub use types::*;
pub use value::*;

use std::ffi::{CStr, CString};
use std::os::raw::c_char;
use std::ptr;

use hpi_dynamic::{AnyObject, AnyValue, TypeDescriptor, TypeKind};

/// Error codes returned by non-fatal entry points.
///
/// # Error Code Categories
///
/// - **0-9**: Generic errors
/// - **10-19**: Configuration errors
/// - **20-29**: Value and type errors
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HpiError {
    /// Operation completed successfully
    HpiOk = 0,
    /// Invalid argument provided (null pointer, invalid UTF-8, interior NUL)
    HpiInvalidArgument = 1,
    /// Requested field not found
    HpiNotFound = 2,
    /// Generic operation failure
    HpiOperationFailed = 3,

    // === Configuration errors (10-19) ===
    /// Configuration file could not be read or parsed
    HpiConfigError = 10,
    /// Runtime already configured
    HpiAlreadyInitialized = 11,

    // === Value and type errors (20-29) ===
    /// Value does not have the requested kind
    HpiTypeMismatch = 20,
    /// List index negative or past the end
    HpiIndexOutOfBounds = 21,
}

/// Type kinds, with the discriminants generated code uses.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HpiTypeKind {
    HpiTypeNone = 0,
    HpiTypeInt = 1,
    HpiTypeFloat = 2,
    HpiTypeChar = 3,
    HpiTypeBool = 4,
    HpiTypeList = 5,
    HpiTypeObject = 6,
    HpiTypeAnyObject = 7,
    HpiTypeString = 8,
}

impl From<HpiTypeKind> for TypeKind {
    fn from(kind: HpiTypeKind) -> Self {
        match kind {
            HpiTypeKind::HpiTypeNone => TypeKind::None,
            HpiTypeKind::HpiTypeInt => TypeKind::Int,
            HpiTypeKind::HpiTypeFloat => TypeKind::Float,
            HpiTypeKind::HpiTypeChar => TypeKind::Char,
            HpiTypeKind::HpiTypeBool => TypeKind::Bool,
            HpiTypeKind::HpiTypeList => TypeKind::List,
            HpiTypeKind::HpiTypeObject => TypeKind::Object,
            HpiTypeKind::HpiTypeAnyObject => TypeKind::AnyObjectBox,
            HpiTypeKind::HpiTypeString => TypeKind::String,
        }
    }
}

impl From<TypeKind> for HpiTypeKind {
    fn from(kind: TypeKind) -> Self {
        match kind {
            TypeKind::None => HpiTypeKind::HpiTypeNone,
            TypeKind::Int => HpiTypeKind::HpiTypeInt,
            TypeKind::Float => HpiTypeKind::HpiTypeFloat,
            TypeKind::Char => HpiTypeKind::HpiTypeChar,
            TypeKind::Bool => HpiTypeKind::HpiTypeBool,
            TypeKind::List => HpiTypeKind::HpiTypeList,
            TypeKind::Object => HpiTypeKind::HpiTypeObject,
            TypeKind::AnyObjectBox => HpiTypeKind::HpiTypeAnyObject,
            TypeKind::String => HpiTypeKind::HpiTypeString,
        }
    }
}

/// Opaque handle to a type descriptor
#[repr(C)]
pub struct HpiTypeDescriptor {
    _private: [u8; 0],
}

/// Opaque handle to a dynamic value
#[repr(C)]
pub struct HpiAnyValue {
    _private: [u8; 0],
}

/// Opaque handle to a dynamic record
#[repr(C)]
pub struct HpiAnyObject {
    _private: [u8; 0],
}

/// Opaque handle to an owned list of field names
#[repr(C)]
pub struct HpiStringList {
    _private: [u8; 0],
}

// =============================================================================
// Handle conversions
// =============================================================================

pub(crate) fn type_into_raw(desc: TypeDescriptor) -> *mut HpiTypeDescriptor {
    Box::into_raw(Box::new(desc)).cast::<HpiTypeDescriptor>()
}

pub(crate) fn value_into_raw(value: AnyValue) -> *mut HpiAnyValue {
    Box::into_raw(Box::new(value)).cast::<HpiAnyValue>()
}

pub(crate) fn object_into_raw(obj: AnyObject) -> *mut HpiAnyObject {
    Box::into_raw(Box::new(obj)).cast::<HpiAnyObject>()
}

/// # Safety
/// `handle` must be NULL or a live handle from this crate.
pub(crate) unsafe fn type_ref<'a>(handle: *const HpiTypeDescriptor) -> Option<&'a TypeDescriptor> {
    handle.cast::<TypeDescriptor>().as_ref()
}

/// # Safety
/// `handle` must be NULL or a live handle from this crate.
pub(crate) unsafe fn value_ref<'a>(handle: *const HpiAnyValue) -> Option<&'a AnyValue> {
    handle.cast::<AnyValue>().as_ref()
}

/// # Safety
/// `handle` must be NULL or a live handle from this crate.
pub(crate) unsafe fn object_ref<'a>(handle: *const HpiAnyObject) -> Option<&'a AnyObject> {
    handle.cast::<AnyObject>().as_ref()
}

/// # Safety
/// `handle` must be NULL or a live handle from this crate, not aliased.
pub(crate) unsafe fn object_mut<'a>(handle: *mut HpiAnyObject) -> Option<&'a mut AnyObject> {
    handle.cast::<AnyObject>().as_mut()
}

/// Take back ownership of a type handle.
///
/// # Safety
/// `handle` must be NULL or a live handle from this crate; it is invalid after
/// this call.
pub(crate) unsafe fn type_take(handle: *mut HpiTypeDescriptor) -> Option<TypeDescriptor> {
    if handle.is_null() {
        return None;
    }
    Some(*Box::from_raw(handle.cast::<TypeDescriptor>()))
}

/// Take back ownership of a value handle.
///
/// # Safety
/// `handle` must be NULL or a live handle from this crate; it is invalid after
/// this call.
pub(crate) unsafe fn value_take(handle: *mut HpiAnyValue) -> Option<AnyValue> {
    if handle.is_null() {
        return None;
    }
    Some(*Box::from_raw(handle.cast::<AnyValue>()))
}

/// Take back ownership of a record handle.
///
/// # Safety
/// `handle` must be NULL or a live handle from this crate; it is invalid after
/// this call.
pub(crate) unsafe fn object_take(handle: *mut HpiAnyObject) -> Option<AnyObject> {
    if handle.is_null() {
        return None;
    }
    Some(*Box::from_raw(handle.cast::<AnyObject>()))
}

/// Borrow a C string argument as UTF-8.
///
/// # Safety
/// `s` must be NULL or a valid null-terminated C string.
pub(crate) unsafe fn str_arg<'a>(s: *const c_char) -> Option<&'a str> {
    if s.is_null() {
        return None;
    }
    CStr::from_ptr(s).to_str().ok()
}

/// Hand a Rust string to C. NULL if it contains an interior NUL.
pub(crate) fn string_into_raw(s: impl Into<Vec<u8>>) -> *mut c_char {
    match CString::new(s) {
        Ok(c) => c.into_raw(),
        Err(_) => {
            log::debug!("[ffi] string with interior NUL cannot cross the C boundary");
            ptr::null_mut()
        }
    }
}

/// Free a string returned by this library.
///
/// # Safety
/// - `s` must be NULL or a pointer returned by this library, freed only once.
#[no_mangle]
pub unsafe extern "C" fn hpi_string_free(s: *mut c_char) {
    if !s.is_null() {
        drop(CString::from_raw(s));
    }
}

// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Runtime errors.
//!
//! The `Display` text of each variant is the exact diagnostic line that
//! generated programs print before terminating (without the trailing newline).

use crate::TypeKind;
use thiserror::Error;

/// Result alias for runtime operations.
pub type Result<T> = std::result::Result<T, RuntimeError>;

/// Errors raised by the dynamic value runtime.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RuntimeError {
    /// The JSON parser rejected the input text.
    #[error("Runtime JSON parse error: `{0}`")]
    JsonParse(String),

    /// A dynamic value's descriptor cannot be reinterpreted as the target type.
    #[error("Runtime error: Unsupported cast: Cannot cast value of type `{from}` to `{to}`")]
    UnsupportedCast { from: String, to: String },

    /// A value cannot be serialized under the requested descriptor.
    #[error("Runtime JSON marshal error: {0}")]
    Marshal(String),

    /// A payload does not match the kind of its descriptor.
    #[error("Runtime error: payload of kind `{payload}` does not match type `{expected}`")]
    PayloadMismatch { expected: String, payload: TypeKind },

    /// A list operation was applied to a value that is not a list.
    #[error("Runtime error: expected a list, got `{0}`")]
    NotAList(String),

    /// List index below zero or past the end.
    #[error("Illegale Indizierung mittels Index: `{index}`")]
    IndexOutOfBounds { index: i64, length: usize },
}

// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Runtime cast validation.
//!
//! Generated code calls the validator right before it treats a dynamic value
//! as a value of a static type.

use crate::{AnyValue, Result, RuntimeError, TypeDescriptor};
use serde::{Deserialize, Serialize};

/// Decision procedure used by the [`CastValidator`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CastPolicy {
    /// Compatibility mode: identical top-level kinds always pass, and
    /// differing kinds are only rejected when their `ptr_count` differs.
    /// Nested list and record types are never inspected.
    #[default]
    Reference,
    /// Full structural equality of both descriptors, `ptr_count` included.
    Structural,
}

/// Cast validator with a fixed policy.
#[derive(Debug, Clone, Copy, Default)]
pub struct CastValidator {
    policy: CastPolicy,
}

impl CastValidator {
    pub fn new(policy: CastPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> CastPolicy {
        self.policy
    }

    /// Check that a value described by `from_type` may be used as `as_type`.
    pub fn validate(&self, as_type: &TypeDescriptor, from_type: &TypeDescriptor) -> Result<()> {
        let accepted = match self.policy {
            CastPolicy::Reference => reference_accepts(as_type, from_type),
            CastPolicy::Structural => as_type == from_type,
        };

        if accepted {
            return Ok(());
        }

        log::debug!(
            "[cast] rejected {} (ptr {}) -> {} (ptr {}) under {:?}",
            from_type,
            from_type.ptr_count(),
            as_type,
            as_type.ptr_count(),
            self.policy
        );
        Err(RuntimeError::UnsupportedCast {
            from: from_type.to_string(),
            to: as_type.to_string(),
        })
    }

    /// Check a value's own descriptor against `as_type`.
    pub fn validate_value(&self, as_type: &TypeDescriptor, value: &AnyValue) -> Result<()> {
        self.validate(as_type, value.type_descriptor())
    }
}

fn reference_accepts(as_type: &TypeDescriptor, from_type: &TypeDescriptor) -> bool {
    if as_type.kind() == from_type.kind() {
        return true;
    }

    // Differing kinds pass at equal depth; list and record shapes are not
    // inspected.
    as_type.ptr_count() == from_type.ptr_count()
}

/// Validate a cast under [`CastPolicy::Reference`].
pub fn validate_cast(as_type: &TypeDescriptor, from_type: &TypeDescriptor) -> Result<()> {
    CastValidator::default().validate(as_type, from_type)
}

/// Validate that `value` may be used as `as_type` under [`CastPolicy::Reference`].
pub fn validate_value_cast(as_type: &TypeDescriptor, value: &AnyValue) -> Result<()> {
    CastValidator::default().validate_value(as_type, value)
}

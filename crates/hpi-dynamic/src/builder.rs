// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Fluent builder API for record descriptors.

use crate::{ObjectFields, TypeDescriptor, TypeKind};

/// Builder for `Objekt` type descriptors.
#[derive(Debug, Default)]
pub struct ObjectTypeBuilder {
    fields: ObjectFields,
    ptr_count: u32,
}

impl ObjectTypeBuilder {
    /// Create a new builder for a record type.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field with a type descriptor. A repeated name replaces the
    /// earlier field type.
    pub fn field(mut self, name: impl Into<String>, type_desc: TypeDescriptor) -> Self {
        self.fields.insert(name.into(), type_desc);
        self
    }

    /// Add a field of a scalar kind.
    ///
    /// `List` and `Object` have no scalar form; they are logged and fall back
    /// to `Nichts`. Use [`Self::list_field`] or [`Self::field`] for those.
    pub fn scalar_field(self, name: impl Into<String>, kind: TypeKind) -> Self {
        let name = name.into();
        let type_desc = TypeDescriptor::scalar(kind).unwrap_or_else(|| {
            log::warn!(
                "[builder] field `{}`: {} needs a nested type, using {}",
                name,
                kind,
                TypeKind::None
            );
            TypeDescriptor::none()
        });
        self.field(name, type_desc)
    }

    /// Add a list field.
    pub fn list_field(self, name: impl Into<String>, element: TypeDescriptor) -> Self {
        self.field(name, TypeDescriptor::list_of(element))
    }

    /// Set the indirection depth of the built descriptor.
    pub fn ptr_count(mut self, ptr_count: u32) -> Self {
        self.ptr_count = ptr_count;
        self
    }

    /// Build the TypeDescriptor.
    pub fn build(self) -> TypeDescriptor {
        TypeDescriptor::object(self.fields).with_ptr_count(self.ptr_count)
    }
}

// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Type descriptors for runtime type information.

use std::collections::BTreeMap;

/// Field map of an `Objekt` descriptor, keyed by field name.
pub type ObjectFields = BTreeMap<String, TypeDescriptor>;

/// Type kind enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKind {
    None = 0,
    Int = 1,
    Float = 2,
    Char = 3,
    Bool = 4,
    List = 5,
    Object = 6,
    AnyObjectBox = 7,
    String = 8,
}

impl TypeKind {
    /// Localized name of the kind, as used in diagnostics.
    ///
    /// For `List` and `Object` this is only the prefix; the full name needs the
    /// descriptor (see [`crate::display_type`]).
    pub fn name(self) -> &'static str {
        match self {
            Self::None => "Nichts",
            Self::Int => "Zahl",
            Self::Float => "Fließkommazahl",
            Self::Char => "Zeichen",
            Self::Bool => "Wahrheitswert",
            Self::List => "Liste",
            Self::Object => "Objekt",
            Self::AnyObjectBox => "Speicherbox",
            Self::String => "Zeichenkette",
        }
    }

    /// Kinds that need no nested descriptor.
    pub fn is_scalar(self) -> bool {
        !matches!(self, Self::List | Self::Object)
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Shape {
    Scalar(TypeKind),
    List(Box<TypeDescriptor>),
    Object(ObjectFields),
}

/// A complete type descriptor.
///
/// `list_inner` exists only for lists and `obj_fields` only for objects; both
/// hold by construction. `ptr_count` is the indirection depth on top of the
/// base kind.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeDescriptor {
    shape: Shape,
    ptr_count: u32,
}

impl Default for TypeDescriptor {
    fn default() -> Self {
        Self::none()
    }
}

impl TypeDescriptor {
    /// Create a descriptor for a kind without nested structure.
    ///
    /// Returns `None` for `List` and `Object`, which need [`Self::list_of`]
    /// and [`Self::object`].
    pub fn scalar(kind: TypeKind) -> Option<Self> {
        kind.is_scalar().then_some(Self {
            shape: Shape::Scalar(kind),
            ptr_count: 0,
        })
    }

    fn of(kind: TypeKind) -> Self {
        Self {
            shape: Shape::Scalar(kind),
            ptr_count: 0,
        }
    }

    pub fn none() -> Self {
        Self::of(TypeKind::None)
    }

    pub fn int() -> Self {
        Self::of(TypeKind::Int)
    }

    pub fn float() -> Self {
        Self::of(TypeKind::Float)
    }

    pub fn char() -> Self {
        Self::of(TypeKind::Char)
    }

    pub fn bool() -> Self {
        Self::of(TypeKind::Bool)
    }

    pub fn string() -> Self {
        Self::of(TypeKind::String)
    }

    pub fn any_object() -> Self {
        Self::of(TypeKind::AnyObjectBox)
    }

    /// Create a list descriptor with the given element type.
    pub fn list_of(inner: TypeDescriptor) -> Self {
        Self {
            shape: Shape::List(Box::new(inner)),
            ptr_count: 0,
        }
    }

    /// Create a record descriptor with a static field layout.
    pub fn object(fields: ObjectFields) -> Self {
        Self {
            shape: Shape::Object(fields),
            ptr_count: 0,
        }
    }

    /// Set the indirection depth.
    pub fn with_ptr_count(mut self, ptr_count: u32) -> Self {
        self.ptr_count = ptr_count;
        self
    }

    pub fn kind(&self) -> TypeKind {
        match &self.shape {
            Shape::Scalar(kind) => *kind,
            Shape::List(_) => TypeKind::List,
            Shape::Object(_) => TypeKind::Object,
        }
    }

    pub fn ptr_count(&self) -> u32 {
        self.ptr_count
    }

    /// Element type if this is a list.
    pub fn list_inner(&self) -> Option<&TypeDescriptor> {
        match &self.shape {
            Shape::List(inner) => Some(inner),
            _ => None,
        }
    }

    /// Field types if this is an object.
    pub fn obj_fields(&self) -> Option<&ObjectFields> {
        match &self.shape {
            Shape::Object(fields) => Some(fields),
            _ => None,
        }
    }

    /// Mutable field types if this is an object.
    pub fn obj_fields_mut(&mut self) -> Option<&mut ObjectFields> {
        match &mut self.shape {
            Shape::Object(fields) => Some(fields),
            _ => None,
        }
    }

    /// Get field type by name.
    pub fn field(&self, name: &str) -> Option<&TypeDescriptor> {
        self.obj_fields()?.get(name)
    }

    pub fn is_list(&self) -> bool {
        matches!(self.shape, Shape::List(_))
    }

    pub fn is_object(&self) -> bool {
        matches!(self.shape, Shape::Object(_))
    }
}

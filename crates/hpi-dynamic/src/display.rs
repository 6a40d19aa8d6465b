// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Human-readable type names for diagnostics.

use crate::{TypeDescriptor, TypeKind};
use std::fmt;

/// Render a descriptor the way diagnostics name it, e.g.
/// `Liste von Objekt {Zahl x, Zeichenkette y}`.
///
/// `ptr_count` is not part of the rendered name.
pub fn display_type(type_desc: &TypeDescriptor) -> String {
    type_desc.to_string()
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(inner) = self.list_inner() {
            return write!(f, "Liste von {}", inner);
        }
        if let Some(fields) = self.obj_fields() {
            f.write_str("Objekt {")?;
            for (i, (name, field_type)) in fields.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{} {}", field_type, name)?;
            }
            return f.write_str("}");
        }
        f.write_str(self.kind().name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ObjectTypeBuilder;

    #[test]
    fn test_scalar_names() {
        let cases = [
            (TypeDescriptor::none(), "Nichts"),
            (TypeDescriptor::int(), "Zahl"),
            (TypeDescriptor::float(), "Fließkommazahl"),
            (TypeDescriptor::char(), "Zeichen"),
            (TypeDescriptor::bool(), "Wahrheitswert"),
            (TypeDescriptor::string(), "Zeichenkette"),
            (TypeDescriptor::any_object(), "Speicherbox"),
        ];
        for (ty, expected) in cases {
            assert_eq!(display_type(&ty), expected);
        }
    }

    #[test]
    fn test_nested_list() {
        let ty = TypeDescriptor::list_of(TypeDescriptor::list_of(TypeDescriptor::float()));
        assert_eq!(display_type(&ty), "Liste von Liste von Fließkommazahl");
    }

    #[test]
    fn test_list_of_nothing() {
        let ty = TypeDescriptor::list_of(TypeDescriptor::default());
        assert_eq!(display_type(&ty), "Liste von Nichts");
        assert_eq!(ty.list_inner().map(TypeDescriptor::kind), Some(TypeKind::None));
    }

    #[test]
    fn test_object_fields_in_map_order() {
        let ty = ObjectTypeBuilder::new()
            .scalar_field("y", TypeKind::String)
            .scalar_field("x", TypeKind::Int)
            .list_field("z", TypeDescriptor::bool())
            .build();
        assert_eq!(
            display_type(&ty),
            "Objekt {Zahl x, Zeichenkette y, Liste von Wahrheitswert z}"
        );
    }

    #[test]
    fn test_empty_object() {
        let ty = ObjectTypeBuilder::new().build();
        assert_eq!(display_type(&ty), "Objekt {}");
    }

    #[test]
    fn test_ptr_count_not_rendered() {
        let ty = TypeDescriptor::int().with_ptr_count(3);
        assert_eq!(display_type(&ty), "Zahl");
    }

    #[test]
    fn test_display_is_deterministic() {
        let ty = ObjectTypeBuilder::new()
            .scalar_field("b", TypeKind::Char)
            .scalar_field("a", TypeKind::AnyObjectBox)
            .build();
        assert_eq!(display_type(&ty), display_type(&ty));
    }
}

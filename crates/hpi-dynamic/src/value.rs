// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Self-describing dynamic values.

use crate::{AnyObject, Result, RuntimeError, TypeDescriptor, TypeKind};

/// Owned payload of an [`AnyValue`].
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    None,
    Int(i64),
    Float(f64),
    Char(u8),
    Bool(bool),
    String(String),
    List(Vec<AnyValue>),
    Object(Box<AnyObject>),
}

impl Payload {
    /// Descriptor kind this payload belongs to.
    pub fn kind(&self) -> TypeKind {
        match self {
            Self::None => TypeKind::None,
            Self::Int(_) => TypeKind::Int,
            Self::Float(_) => TypeKind::Float,
            Self::Char(_) => TypeKind::Char,
            Self::Bool(_) => TypeKind::Bool,
            Self::String(_) => TypeKind::String,
            Self::List(_) => TypeKind::List,
            Self::Object(_) => TypeKind::AnyObjectBox,
        }
    }
}

/// A dynamic value: a descriptor paired with an owned payload.
///
/// The payload always matches `type_descriptor().kind()`; a value of kind
/// `Nichts` carries no payload.
#[derive(Debug, Clone, PartialEq)]
pub struct AnyValue {
    type_desc: TypeDescriptor,
    payload: Payload,
}

impl Default for AnyValue {
    fn default() -> Self {
        Self::none()
    }
}

impl AnyValue {
    /// Assemble a value from a descriptor and a payload.
    ///
    /// Fails when the payload does not belong to the descriptor's kind. An
    /// `Objekt` descriptor never has a runtime payload; records are
    /// `Speicherbox` values.
    pub fn from_parts(type_desc: TypeDescriptor, payload: Payload) -> Result<Self> {
        if payload.kind() != type_desc.kind() {
            return Err(RuntimeError::PayloadMismatch {
                expected: type_desc.to_string(),
                payload: payload.kind(),
            });
        }
        Ok(Self { type_desc, payload })
    }

    fn scalar(type_desc: TypeDescriptor, payload: Payload) -> Self {
        debug_assert_eq!(type_desc.kind(), payload.kind());
        Self { type_desc, payload }
    }

    /// The `Nichts` value, also returned for missing record fields.
    pub fn none() -> Self {
        Self::scalar(TypeDescriptor::none(), Payload::None)
    }

    pub fn int(v: i64) -> Self {
        Self::scalar(TypeDescriptor::int(), Payload::Int(v))
    }

    pub fn float(v: f64) -> Self {
        Self::scalar(TypeDescriptor::float(), Payload::Float(v))
    }

    pub fn char(v: u8) -> Self {
        Self::scalar(TypeDescriptor::char(), Payload::Char(v))
    }

    pub fn bool(v: bool) -> Self {
        Self::scalar(TypeDescriptor::bool(), Payload::Bool(v))
    }

    pub fn string(v: impl Into<String>) -> Self {
        Self::scalar(TypeDescriptor::string(), Payload::String(v.into()))
    }

    /// Box a record.
    pub fn object(obj: AnyObject) -> Self {
        Self::scalar(TypeDescriptor::any_object(), Payload::Object(Box::new(obj)))
    }

    /// Create a list with an explicit element type.
    pub fn list(inner: TypeDescriptor, items: Vec<AnyValue>) -> Self {
        Self::scalar(TypeDescriptor::list_of(inner), Payload::List(items))
    }

    /// Create a list whose element type is taken from the last item.
    ///
    /// This matches JSON ingestion: heterogeneous items are not unified, and
    /// an empty list gets a `Nichts` element type.
    pub fn list_inferred(items: Vec<AnyValue>) -> Self {
        let inner = items
            .last()
            .map(|item| item.type_desc.clone())
            .unwrap_or_default();
        Self::list(inner, items)
    }

    pub fn type_descriptor(&self) -> &TypeDescriptor {
        &self.type_desc
    }

    pub fn kind(&self) -> TypeKind {
        self.type_desc.kind()
    }

    pub fn payload(&self) -> &Payload {
        &self.payload
    }

    pub fn into_parts(self) -> (TypeDescriptor, Payload) {
        (self.type_desc, self.payload)
    }

    /// Check if value is `Nichts`.
    pub fn is_none(&self) -> bool {
        matches!(self.payload, Payload::None)
    }

    pub fn as_int(&self) -> Option<i64> {
        match self.payload {
            Payload::Int(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self.payload {
            Payload::Float(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_char(&self) -> Option<u8> {
        match self.payload {
            Payload::Char(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self.payload {
            Payload::Bool(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match &self.payload {
            Payload::String(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[AnyValue]> {
        match &self.payload {
            Payload::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&AnyObject> {
        match &self.payload {
            Payload::Object(obj) => Some(obj),
            _ => None,
        }
    }

    pub fn as_object_mut(&mut self) -> Option<&mut AnyObject> {
        match &mut self.payload {
            Payload::Object(obj) => Some(obj),
            _ => None,
        }
    }

    /// Unbox a record value.
    pub fn into_object(self) -> Option<AnyObject> {
        match self.payload {
            Payload::Object(obj) => Some(*obj),
            _ => None,
        }
    }
}

impl From<i64> for AnyValue {
    fn from(v: i64) -> Self {
        Self::int(v)
    }
}

impl From<f64> for AnyValue {
    fn from(v: f64) -> Self {
        Self::float(v)
    }
}

impl From<bool> for AnyValue {
    fn from(v: bool) -> Self {
        Self::bool(v)
    }
}

impl From<String> for AnyValue {
    fn from(v: String) -> Self {
        Self::string(v)
    }
}

impl From<&str> for AnyValue {
    fn from(v: &str) -> Self {
        Self::string(v)
    }
}

impl From<AnyObject> for AnyValue {
    fn from(v: AnyObject) -> Self {
        Self::object(v)
    }
}

impl From<Vec<AnyValue>> for AnyValue {
    fn from(items: Vec<AnyValue>) -> Self {
        Self::list_inferred(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primitive_values() {
        let v = AnyValue::from(42i64);
        assert_eq!(v.kind(), TypeKind::Int);
        assert_eq!(v.as_int(), Some(42));
        assert_eq!(v.as_float(), None);

        let v = AnyValue::from(std::f64::consts::PI);
        assert_eq!(v.as_float(), Some(std::f64::consts::PI));

        let v = AnyValue::from("hallo");
        assert_eq!(v.as_str(), Some("hallo"));

        let v = AnyValue::char(b'a');
        assert_eq!(v.kind(), TypeKind::Char);
        assert_eq!(v.as_char(), Some(b'a'));
    }

    #[test]
    fn test_none_has_no_payload() {
        let v = AnyValue::none();
        assert!(v.is_none());
        assert_eq!(v.kind(), TypeKind::None);
        assert_eq!(v.payload(), &Payload::None);
        assert_eq!(AnyValue::default(), v);
    }

    #[test]
    fn test_from_parts_checks_kind() {
        assert!(AnyValue::from_parts(TypeDescriptor::int(), Payload::Int(1)).is_ok());
        assert!(AnyValue::from_parts(TypeDescriptor::int(), Payload::None).is_err());
        assert!(AnyValue::from_parts(TypeDescriptor::none(), Payload::Bool(true)).is_err());

        let err = AnyValue::from_parts(TypeDescriptor::float(), Payload::String("x".into()))
            .expect_err("mismatch");
        assert_eq!(
            err,
            RuntimeError::PayloadMismatch {
                expected: "Fließkommazahl".into(),
                payload: TypeKind::String,
            }
        );
    }

    #[test]
    fn test_object_descriptor_has_no_payload_form() {
        let ty = crate::ObjectTypeBuilder::new()
            .scalar_field("x", TypeKind::Int)
            .build();
        let payload = Payload::Object(Box::default());
        assert!(AnyValue::from_parts(ty, payload).is_err());
    }

    #[test]
    fn test_from_parts_keeps_ptr_count() {
        let v = AnyValue::from_parts(TypeDescriptor::int().with_ptr_count(1), Payload::Int(7))
            .expect("valid parts");
        assert_eq!(v.type_descriptor().ptr_count(), 1);
        assert_eq!(v.as_int(), Some(7));
    }

    #[test]
    fn test_list_inferred_uses_last_item() {
        let v = AnyValue::from(vec![AnyValue::int(1), AnyValue::float(2.5)]);
        assert_eq!(
            v.type_descriptor().list_inner().map(|t| t.kind()),
            Some(TypeKind::Float)
        );
        assert_eq!(v.as_list().map(<[AnyValue]>::len), Some(2));

        let empty = AnyValue::list_inferred(Vec::new());
        assert_eq!(
            empty.type_descriptor().list_inner().map(|t| t.kind()),
            Some(TypeKind::None)
        );
    }

    #[test]
    fn test_object_roundtrip() {
        let mut obj = AnyObject::new();
        obj.insert("a", AnyValue::int(1));
        let v = AnyValue::from(obj);
        assert_eq!(v.kind(), TypeKind::AnyObjectBox);
        assert_eq!(v.as_object().map(AnyObject::len), Some(1));
        let obj = v.into_object().expect("object payload");
        assert_eq!(obj.take("a").as_int(), Some(1));
    }
}

// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! # hpi-dynamic - dynamic values for generated code
//!
//! Runtime support for programs that need an escape hatch from static types
//! into self-describing values ("Speicherbox" values).
//!
//! ## Quick Start
//!
//! ```rust
//! use hpi_dynamic::{parse_to_any, validate_cast, TypeDescriptor, TypeKind};
//!
//! let value = parse_to_any(r#"{"x": 1, "y": [1, 2, 3]}"#).unwrap();
//! let record = value.as_object().unwrap();
//!
//! let x = record.take("x");
//! validate_cast(&TypeDescriptor::int(), x.type_descriptor()).unwrap();
//! assert_eq!(x.as_int(), Some(1));
//!
//! let y = record.take("y");
//! assert_eq!(y.kind(), TypeKind::List);
//! assert_eq!(y.type_descriptor().to_string(), "Liste von Zahl");
//! ```
//!
//! ## Architecture
//!
//! ```text
//! +---------------------------------------------------------------+
//! |  fatal (print + exit)          |  hpi-dynamic-c (C ABI)        |
//! +---------------------------------------------------------------+
//! |  json (from_json / parse_to_any / marshal)  |  cast  |  list   |
//! +---------------------------------------------------------------+
//! |  AnyObject (record store)  <->  AnyValue (descriptor+payload)  |
//! +---------------------------------------------------------------+
//! |  TypeDescriptor + display                                      |
//! +---------------------------------------------------------------+
//! ```
//!
//! Every failure is a [`RuntimeError`]. Code that needs the observable
//! behaviour of generated programs (diagnostic on stdout, then process exit)
//! goes through [`fatal::OrExit`].

mod any_object;
mod builder;
mod cast;
pub mod config;
mod display;
mod error;
pub mod fatal;
mod json;
mod list;
mod type_descriptor;
mod value;

pub use any_object::AnyObject;
pub use builder::ObjectTypeBuilder;
pub use cast::{validate_cast, validate_value_cast, CastPolicy, CastValidator};
pub use config::{ConfigError, RuntimeConfig};
pub use display::display_type;
pub use error::{Result, RuntimeError};
pub use json::{from_json, marshal, parse_to_any};
pub use list::{list_contains, list_index, list_len};
pub use type_descriptor::{ObjectFields, TypeDescriptor, TypeKind};
pub use value::{AnyValue, Payload};

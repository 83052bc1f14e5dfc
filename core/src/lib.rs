//! Structural-type descriptor combinators.
//!
//! This crate derives new schemas from descriptions of record shapes, and
//! extracts facts about them, entirely at analysis time — there is no
//! runtime component, no I/O, and no state. The foundational types are:
//!
//! - [`Descriptor`] — a value's shape: atomic primitives, literal text,
//!   optionals, unions, structural records, and callables.
//! - [`CallableDescriptor`] — an invocable operation (arguments + return).
//! - [`Schema`] — a structural descriptor: named fields mapping to
//!   descriptors.
//!
//! Introspection ([`keys`], [`value_union`], [`callable_field_names`],
//! [`data_field_names`], [`fields_matching`], [`method_signature`],
//! [`method_name`]) extracts facts about a schema.
//!
//! Transformation ([`deep_optional`], [`override_fields`], [`extend`],
//! [`enum_keys`]) derives new schemas, rejecting ill-formed requests with
//! [`DeriveError`].
//!
//! Literal text normalization ([`trim`], [`trim_left`], [`trim_right`],
//! [`trim_literal`]) trims ASCII spaces from statically known text values.
//!
//! # Example
//!
//! ```
//! use type_schema_core::*;
//!
//! let schema = Schema::new()
//!     .with_field("name", Descriptor::Text)
//!     .with_field("greet", Descriptor::callable(vec![Descriptor::Text], Descriptor::Text));
//!
//! // Partition fields by callability.
//! assert_eq!(callable_field_names(&schema), vec!["greet"]);
//! assert_eq!(data_field_names(&schema), vec!["name"]);
//!
//! // Look up a method signature; data fields are rejected.
//! assert!(method_signature(&schema, "greet").is_ok());
//! assert!(method_signature(&schema, "name").is_err());
//!
//! // Derive a deep-optional variant.
//! let partial = deep_optional(&schema);
//! assert!(matches!(partial.get("name"), Some(Descriptor::Optional(_))));
//! ```

mod error;
mod introspect;
mod text;
mod transform;
mod types;

pub use error::{DeriveError, Result};
pub use introspect::{
    callable_field_names, data_field_names, fields_matching, keys, method_name, method_signature,
    value_union,
};
pub use text::{trim, trim_left, trim_right, trim_literal};
pub use transform::{deep_optional, enum_keys, extend, override_fields};
pub use types::{CallableDescriptor, Descriptor, Schema};

//! Schema transformation derivations.
//!
//! Derives new schemas from existing ones: a deep-optional projection,
//! field override, collision-free extension, and enum-key projection.
//! Override and extend are deliberately distinct: override replaces fields
//! that must already exist, extend adds fields that must not.
//!
//! # Examples
//!
//! ```
//! use type_schema_core::*;
//!
//! let base = Schema::new()
//!     .with_field("host", Descriptor::Text)
//!     .with_field("port", Descriptor::Number);
//!
//! // Replace an existing field.
//! let changes = Schema::new().with_field("port", Descriptor::Text);
//! let overridden = override_fields(&base, &changes).unwrap();
//! assert_eq!(overridden.get("port"), Some(&Descriptor::Text));
//!
//! // Add a new, non-colliding field.
//! let addition = Schema::new().with_field("secure", Descriptor::Boolean);
//! let extended = extend(&base, &addition).unwrap();
//! assert_eq!(extended.len(), 3);
//! ```

use std::collections::BTreeMap;

use crate::{Descriptor, DeriveError, Result, Schema, introspect};

/// Projects a schema so every field, at every nesting depth, is optional.
///
/// Field names are unchanged. Structural fields recurse all the way down;
/// atomic leaves are left as-is aside from being marked optional at their
/// own level. Already-optional fields are not wrapped again, so the
/// projection is idempotent.
///
/// # Examples
///
/// ```
/// use type_schema_core::*;
///
/// let inner = Schema::new().with_field("city", Descriptor::Text);
/// let schema = Schema::new()
///     .with_field("name", Descriptor::Text)
///     .with_field("address", Descriptor::Structural(inner));
///
/// let projected = deep_optional(&schema);
/// assert!(matches!(projected.get("name"), Some(Descriptor::Optional(_))));
/// assert_eq!(deep_optional(&projected), projected);
/// ```
pub fn deep_optional(schema: &Schema) -> Schema {
    let mut fields = BTreeMap::new();
    for (name, descriptor) in &schema.fields {
        fields.insert(name.clone(), optionalize(descriptor));
    }
    Schema { fields }
}

fn optionalize(descriptor: &Descriptor) -> Descriptor {
    // Unwrap an existing Optional so the projection never double-wraps.
    let inner = match descriptor {
        Descriptor::Optional(inner) => inner.as_ref(),
        other => other,
    };
    let projected = match inner {
        Descriptor::Structural(schema) => Descriptor::Structural(deep_optional(schema)),
        other => other.clone(),
    };
    Descriptor::Optional(Box::new(projected))
}

/// Replaces fields of `base` with the descriptors in `changes`.
///
/// The result contains every field of `base` except those named in
/// `changes`, plus every field of `changes`, with `changes` winning.
/// Override replaces, it does not introduce: a `changes` field name absent
/// from `base` is rejected with [`DeriveError::UnknownField`].
///
/// # Examples
///
/// ```
/// use type_schema_core::*;
///
/// let base = Schema::new().with_field("retries", Descriptor::Number);
///
/// let unknown = Schema::new().with_field("timeout", Descriptor::Number);
/// assert_eq!(
///     override_fields(&base, &unknown),
///     Err(DeriveError::UnknownField("timeout".to_string()))
/// );
/// ```
pub fn override_fields(base: &Schema, changes: &Schema) -> Result<Schema> {
    for name in changes.fields.keys() {
        if !base.contains(name) {
            return Err(DeriveError::UnknownField(name.clone()));
        }
    }

    let mut merged = base.clone();
    for (name, descriptor) in &changes.fields {
        merged.fields.insert(name.clone(), descriptor.clone());
    }
    Ok(merged)
}

/// Concatenates two schemas with disjoint key sets.
///
/// Defined only when no field name appears in both schemas. A shared name
/// is rejected with [`DeriveError::OverlappingField`] rather than silently
/// favoring one side. Overlap is literal key-name membership in both key
/// sets, not structural equivalence.
///
/// # Examples
///
/// ```
/// use type_schema_core::*;
///
/// let base = Schema::new().with_field("host", Descriptor::Text);
///
/// let clash = Schema::new().with_field("host", Descriptor::Number);
/// assert_eq!(
///     extend(&base, &clash),
///     Err(DeriveError::OverlappingField("host".to_string()))
/// );
/// ```
pub fn extend(base: &Schema, addition: &Schema) -> Result<Schema> {
    // Overlap is checked over the addition's keys only.
    for name in addition.fields.keys() {
        if base.contains(name) {
            return Err(DeriveError::OverlappingField(name.clone()));
        }
    }

    let mut extended = base.clone();
    for (name, descriptor) in &addition.fields {
        extended.fields.insert(name.clone(), descriptor.clone());
    }
    Ok(extended)
}

/// Projects the names of fields whose descriptor is assignable to `target`.
///
/// Used to isolate "fields of kind X" out of a larger schema, e.g. fields
/// whose value is one of a fixed set of tag-like constants.
///
/// # Examples
///
/// ```
/// use type_schema_core::*;
///
/// let schema = Schema::new()
///     .with_field("level", Descriptor::literal("warn"))
///     .with_field("format", Descriptor::literal("json"))
///     .with_field("count", Descriptor::Number);
///
/// let tags = Descriptor::Union(vec![
///     Descriptor::literal("warn"),
///     Descriptor::literal("json"),
/// ]);
/// assert_eq!(enum_keys(&schema, &tags), vec!["format", "level"]);
/// ```
pub fn enum_keys<'a>(schema: &'a Schema, target: &Descriptor) -> Vec<&'a str> {
    introspect::fields_matching(schema, target)
}

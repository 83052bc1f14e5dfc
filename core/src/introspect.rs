//! Schema introspection derivations.
//!
//! Extracts facts about a schema without changing it: its key set, the
//! union of its field descriptors, the callable/data partition of its
//! fields, and method lookups. All functions are pure; the empty schema
//! yields empty results everywhere and is never an error.
//!
//! # Examples
//!
//! ```
//! use type_schema_core::*;
//!
//! let schema = Schema::new()
//!     .with_field("name", Descriptor::Text)
//!     .with_field("greet", Descriptor::callable(vec![Descriptor::Text], Descriptor::Text));
//!
//! assert_eq!(keys(&schema), vec!["greet", "name"]);
//! assert_eq!(callable_field_names(&schema), vec!["greet"]);
//! assert_eq!(data_field_names(&schema), vec!["name"]);
//! ```

use crate::{CallableDescriptor, Descriptor, DeriveError, Result, Schema};

/// Returns the field names of a schema.
///
/// Exactly one entry per field, no duplicates; the order is the map's
/// deterministic key order and carries no meaning.
pub fn keys(schema: &Schema) -> Vec<&str> {
    schema.fields.keys().map(String::as_str).collect()
}

/// Returns the union of all top-level field descriptors.
///
/// Not recursive into nested schemas. Duplicate descriptors are collapsed.
/// A single distinct descriptor is returned unwrapped; the empty schema
/// yields the empty (uninhabited) union.
///
/// # Examples
///
/// ```
/// use type_schema_core::*;
///
/// let schema = Schema::new()
///     .with_field("host", Descriptor::Text)
///     .with_field("alias", Descriptor::Text)
///     .with_field("port", Descriptor::Number);
///
/// assert_eq!(
///     value_union(&schema),
///     Descriptor::Union(vec![Descriptor::Text, Descriptor::Number])
/// );
///
/// assert_eq!(value_union(&Schema::new()), Descriptor::Union(vec![]));
/// ```
pub fn value_union(schema: &Schema) -> Descriptor {
    let mut members: Vec<Descriptor> = Vec::new();
    for descriptor in schema.fields.values() {
        if !members.contains(descriptor) {
            members.push(descriptor.clone());
        }
    }
    match members.len() {
        1 => members.remove(0),
        _ => Descriptor::Union(members),
    }
}

/// Returns the names of fields whose descriptor is callable.
///
/// Classification uses [`Descriptor::is_callable`] alone, so together with
/// [`data_field_names`] this partitions [`keys`] exactly: the union is the
/// full key set and the intersection is empty. A union that merely
/// contains callables is a data field.
pub fn callable_field_names(schema: &Schema) -> Vec<&str> {
    schema
        .fields
        .iter()
        .filter(|(_, descriptor)| descriptor.is_callable())
        .map(|(name, _)| name.as_str())
        .collect()
}

/// Returns the names of fields whose descriptor is not callable.
pub fn data_field_names(schema: &Schema) -> Vec<&str> {
    schema
        .fields
        .iter()
        .filter(|(_, descriptor)| !descriptor.is_callable())
        .map(|(name, _)| name.as_str())
        .collect()
}

/// Returns the names of fields whose descriptor is assignable to `target`.
///
/// Generalizes [`callable_field_names`] to an arbitrary target descriptor.
///
/// # Examples
///
/// ```
/// use type_schema_core::*;
///
/// let schema = Schema::new()
///     .with_field("format", Descriptor::literal("json"))
///     .with_field("verbose", Descriptor::Boolean);
///
/// assert_eq!(fields_matching(&schema, &Descriptor::Text), vec!["format"]);
/// assert_eq!(fields_matching(&schema, &Descriptor::Number), Vec::<&str>::new());
/// ```
pub fn fields_matching<'a>(schema: &'a Schema, target: &Descriptor) -> Vec<&'a str> {
    schema
        .fields
        .iter()
        .filter(|(_, descriptor)| descriptor.is_assignable_to(target))
        .map(|(name, _)| name.as_str())
        .collect()
}

/// Returns the callable descriptor stored at `name`.
///
/// Rejected with [`DeriveError::UnknownField`] when the field does not
/// exist and [`DeriveError::NotAMethod`] when it exists but is not
/// callable.
///
/// # Examples
///
/// ```
/// use type_schema_core::*;
///
/// let schema = Schema::new()
///     .with_field("name", Descriptor::Text)
///     .with_field("greet", Descriptor::callable(vec![Descriptor::Text], Descriptor::Text));
///
/// let signature = method_signature(&schema, "greet").unwrap();
/// assert_eq!(signature.args, vec![Descriptor::Text]);
///
/// assert_eq!(
///     method_signature(&schema, "name"),
///     Err(DeriveError::NotAMethod("name".to_string()))
/// );
/// ```
pub fn method_signature<'a>(schema: &'a Schema, name: &str) -> Result<&'a CallableDescriptor> {
    match schema.get(name) {
        Some(Descriptor::Callable(signature)) => Ok(signature),
        Some(_) => Err(DeriveError::NotAMethod(name.to_string())),
        None => Err(DeriveError::UnknownField(name.to_string())),
    }
}

/// Returns `name` unchanged iff the field at `name` is callable.
///
/// `None` is the uninhabited result signaling "not a method"; it covers
/// both a missing field and a data field.
///
/// # Examples
///
/// ```
/// use type_schema_core::*;
///
/// let schema = Schema::new()
///     .with_field("name", Descriptor::Text)
///     .with_field("greet", Descriptor::callable(vec![Descriptor::Text], Descriptor::Text));
///
/// assert_eq!(method_name(&schema, "greet"), Some("greet"));
/// assert_eq!(method_name(&schema, "name"), None);
/// assert_eq!(method_name(&schema, "missing"), None);
/// ```
pub fn method_name<'a>(schema: &Schema, name: &'a str) -> Option<&'a str> {
    match schema.get(name) {
        Some(descriptor) if descriptor.is_callable() => Some(name),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn greeter() -> Schema {
        Schema::new()
            .with_field("name", Descriptor::Text)
            .with_field(
                "greet",
                Descriptor::callable(vec![Descriptor::Text], Descriptor::Text),
            )
    }

    #[test]
    fn test_keys_has_one_entry_per_field() {
        let schema = greeter();
        let mut names = keys(&schema);
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), schema.len());
    }

    #[test]
    fn test_partition_is_total_and_disjoint() {
        let schema = greeter();
        let callables = callable_field_names(&schema);
        let data = data_field_names(&schema);

        assert_eq!(callables, vec!["greet"]);
        assert_eq!(data, vec!["name"]);
        assert_eq!(callables.len() + data.len(), schema.len());
        assert!(callables.iter().all(|name| !data.contains(name)));
    }

    #[test]
    fn test_union_fields_are_data_fields() {
        // A union is not a callable descriptor, even when every member is,
        // and the empty union is not one either.
        let schema = Schema::new()
            .with_field(
                "hook",
                Descriptor::Union(vec![Descriptor::callable(Vec::new(), Descriptor::Null)]),
            )
            .with_field("empty", Descriptor::Union(Vec::new()));

        assert!(callable_field_names(&schema).is_empty());
        assert_eq!(data_field_names(&schema), vec!["empty", "hook"]);
    }

    #[test]
    fn test_empty_schema_yields_empty_sets() {
        let empty = Schema::new();
        assert!(keys(&empty).is_empty());
        assert!(callable_field_names(&empty).is_empty());
        assert!(data_field_names(&empty).is_empty());
        assert!(fields_matching(&empty, &Descriptor::Any).is_empty());
        assert_eq!(value_union(&empty), Descriptor::Union(Vec::new()));
    }

    #[test]
    fn test_value_union_collapses_duplicates() {
        let schema = Schema::new()
            .with_field("first", Descriptor::Text)
            .with_field("second", Descriptor::Text);
        assert_eq!(value_union(&schema), Descriptor::Text);
    }

    #[test]
    fn test_value_union_is_not_recursive() {
        let nested = Schema::new().with_field("inner", Descriptor::Number);
        let schema = Schema::new().with_field("nested", Descriptor::Structural(nested.clone()));
        assert_eq!(value_union(&schema), Descriptor::Structural(nested));
    }

    #[test]
    fn test_method_signature_scenario() {
        let schema = greeter();

        let signature = method_signature(&schema, "greet").unwrap();
        assert_eq!(signature.args, vec![Descriptor::Text]);
        assert_eq!(*signature.returns, Descriptor::Text);

        assert_eq!(
            method_signature(&schema, "name"),
            Err(DeriveError::NotAMethod("name".to_string()))
        );
        assert_eq!(
            method_signature(&schema, "missing"),
            Err(DeriveError::UnknownField("missing".to_string()))
        );
    }

    #[test]
    fn test_method_name_only_for_callables() {
        let schema = greeter();
        assert_eq!(method_name(&schema, "greet"), Some("greet"));
        assert_eq!(method_name(&schema, "name"), None);
        assert_eq!(method_name(&schema, "missing"), None);
    }

    #[test]
    fn test_fields_matching_callable_target_by_signature() {
        let schema = Schema::new()
            .with_field(
                "greet",
                Descriptor::callable(vec![Descriptor::Text], Descriptor::Text),
            )
            .with_field(
                "reset",
                Descriptor::callable(Vec::new(), Descriptor::Null),
            );

        let exact = Descriptor::callable(vec![Descriptor::Text], Descriptor::Text);
        assert_eq!(fields_matching(&schema, &exact), vec!["greet"]);

        let wildcard = Descriptor::Callable(CallableDescriptor::wildcard());
        assert_eq!(fields_matching(&schema, &wildcard), vec!["greet", "reset"]);
    }
}

//! Descriptor type definitions for structural shape modeling.
//!
//! This module defines the core data model used to represent value shapes
//! at analysis time. Descriptors are plain immutable values with [`serde`]
//! derives; every derivation in this crate is a pure function over them.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Compile-time representation of a value's shape.
///
/// Primitive descriptors (`Text`, `Number`, ...) are atomic. `Structural`
/// descriptors map field names to nested descriptors, and `Callable`
/// descriptors carry an argument list and a return descriptor. A
/// `TextLiteral` denotes one exact, statically known character sequence,
/// not "any text".
///
/// # Examples
///
/// ```
/// use type_schema_core::{Descriptor, Schema};
///
/// let shape = Descriptor::Structural(
///     Schema::new()
///         .with_field("name", Descriptor::Text)
///         .with_field("retries", Descriptor::Number),
/// );
/// assert!(shape.is_structural());
/// assert!(!shape.is_callable());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Descriptor {
    /// Any text value.
    Text,
    /// Numeric value.
    Number,
    /// Boolean value.
    Boolean,
    /// The null value.
    Null,
    /// One exact, statically known character sequence.
    TextLiteral(String),
    /// A value that may be absent.
    Optional(Box<Descriptor>),
    /// Any one of the member shapes. The empty union is uninhabited.
    Union(Vec<Descriptor>),
    /// Named fields mapping to descriptors.
    Structural(Schema),
    /// An invocable operation: arguments plus a return descriptor.
    Callable(CallableDescriptor),
    /// Unknown/any shape (the default).
    #[default]
    Any,
}

impl Descriptor {
    /// Shorthand for a literal text descriptor.
    ///
    /// # Examples
    ///
    /// ```
    /// use type_schema_core::Descriptor;
    ///
    /// let tag = Descriptor::literal("json");
    /// assert_eq!(tag, Descriptor::TextLiteral("json".to_string()));
    /// ```
    pub fn literal(value: &str) -> Self {
        Descriptor::TextLiteral(value.to_string())
    }

    /// Wraps a descriptor as optional.
    pub fn optional(inner: Descriptor) -> Self {
        Descriptor::Optional(Box::new(inner))
    }

    /// Builds a callable descriptor from arguments and a return shape.
    ///
    /// # Examples
    ///
    /// ```
    /// use type_schema_core::Descriptor;
    ///
    /// let greet = Descriptor::callable(vec![Descriptor::Text], Descriptor::Text);
    /// assert!(greet.is_callable());
    /// ```
    pub fn callable(args: Vec<Descriptor>, returns: Descriptor) -> Self {
        Descriptor::Callable(CallableDescriptor::new(args, returns))
    }

    /// Returns true for callable descriptors.
    ///
    /// Every field of a schema is exactly one of {callable, data}, decided
    /// solely by this predicate.
    pub fn is_callable(&self) -> bool {
        matches!(self, Descriptor::Callable(_))
    }

    /// Returns true for structural (field-bearing) descriptors.
    ///
    /// # Examples
    ///
    /// ```
    /// use type_schema_core::{Descriptor, Schema};
    ///
    /// assert!(Descriptor::Structural(Schema::new()).is_structural());
    /// assert!(!Descriptor::Text.is_structural());
    /// ```
    pub fn is_structural(&self) -> bool {
        matches!(self, Descriptor::Structural(_))
    }

    /// Checks whether this descriptor is assignable to `target`.
    ///
    /// The relation used by field-membership derivations:
    ///
    /// - `Any` as target accepts everything;
    /// - a `Union` source is assignable when every member is; a `Union`
    ///   target accepts a descriptor any member accepts;
    /// - a `TextLiteral` widens to `Text`;
    /// - a descriptor is assignable to its `Optional`;
    /// - callables compare by signature, with the wildcard callable
    ///   accepting any callable (see [`CallableDescriptor::wildcard`]);
    /// - structural targets use width subtyping: every target field must
    ///   exist in the source with an assignable descriptor, except
    ///   `Optional` target fields, which may be absent;
    /// - otherwise descriptors must be equal.
    ///
    /// # Examples
    ///
    /// ```
    /// use type_schema_core::Descriptor;
    ///
    /// assert!(Descriptor::literal("yaml").is_assignable_to(&Descriptor::Text));
    /// assert!(Descriptor::Number.is_assignable_to(&Descriptor::Any));
    /// assert!(!Descriptor::Text.is_assignable_to(&Descriptor::Number));
    /// ```
    pub fn is_assignable_to(&self, target: &Descriptor) -> bool {
        match (self, target) {
            (_, Descriptor::Any) => true,
            (Descriptor::Union(members), _) => {
                members.iter().all(|member| member.is_assignable_to(target))
            }
            (_, Descriptor::Union(members)) => {
                members.iter().any(|member| self.is_assignable_to(member))
            }
            (Descriptor::TextLiteral(_), Descriptor::Text) => true,
            (Descriptor::Optional(inner), Descriptor::Optional(target_inner)) => {
                inner.is_assignable_to(target_inner)
            }
            (_, Descriptor::Optional(target_inner)) => self.is_assignable_to(target_inner),
            (Descriptor::Callable(signature), Descriptor::Callable(target_signature)) => {
                signature.is_assignable_to(target_signature)
            }
            (Descriptor::Structural(schema), Descriptor::Structural(target_schema)) => {
                target_schema
                    .fields
                    .iter()
                    .all(|(name, target_field)| match schema.get(name) {
                        Some(field) => field.is_assignable_to(target_field),
                        // An optional field may be absent from the source.
                        None => matches!(target_field, Descriptor::Optional(_)),
                    })
            }
            (a, b) => a == b,
        }
    }
}

/// Descriptor for an invocable operation.
///
/// Carries the argument descriptors in order and the return descriptor.
///
/// # Examples
///
/// ```
/// use type_schema_core::{CallableDescriptor, Descriptor};
///
/// let signature = CallableDescriptor::new(vec![Descriptor::Text], Descriptor::Boolean);
/// assert_eq!(signature.args.len(), 1);
/// assert_eq!(*signature.returns, Descriptor::Boolean);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallableDescriptor {
    /// Argument descriptors, in call order.
    pub args: Vec<Descriptor>,
    /// Return descriptor.
    pub returns: Box<Descriptor>,
}

impl CallableDescriptor {
    /// Creates a callable descriptor.
    pub fn new(args: Vec<Descriptor>, returns: Descriptor) -> Self {
        Self {
            args,
            returns: Box::new(returns),
        }
    }

    /// The wildcard callable: no declared arguments, returns `Any`.
    ///
    /// Used as the membership target that matches every callable field,
    /// regardless of signature.
    ///
    /// # Examples
    ///
    /// ```
    /// use type_schema_core::{CallableDescriptor, Descriptor};
    ///
    /// let greet = CallableDescriptor::new(vec![Descriptor::Text], Descriptor::Text);
    /// assert!(greet.is_assignable_to(&CallableDescriptor::wildcard()));
    /// ```
    pub fn wildcard() -> Self {
        Self::new(Vec::new(), Descriptor::Any)
    }

    /// Appends an argument descriptor.
    pub fn with_arg(mut self, arg: Descriptor) -> Self {
        self.args.push(arg);
        self
    }

    /// Returns true for the wildcard signature.
    pub fn is_wildcard(&self) -> bool {
        self.args.is_empty() && *self.returns == Descriptor::Any
    }

    /// Checks signature assignability.
    ///
    /// The wildcard target accepts any callable. Otherwise arities must be
    /// equal, arguments pairwise assignable, and the return descriptor
    /// assignable.
    pub fn is_assignable_to(&self, target: &CallableDescriptor) -> bool {
        if target.is_wildcard() {
            return true;
        }
        self.args.len() == target.args.len()
            && self
                .args
                .iter()
                .zip(target.args.iter())
                .all(|(arg, target_arg)| arg.is_assignable_to(target_arg))
            && self.returns.is_assignable_to(&target.returns)
    }
}

/// A structural descriptor: named fields mapping to descriptors.
///
/// Keys are unique and carry no significant order; the map is a `BTreeMap`
/// so iteration is deterministic. This is the primary input type of every
/// derivation in the crate.
///
/// # Examples
///
/// ```
/// use type_schema_core::{Descriptor, Schema};
///
/// let schema = Schema::new()
///     .with_field("name", Descriptor::Text)
///     .with_field("greet", Descriptor::callable(vec![Descriptor::Text], Descriptor::Text));
///
/// assert_eq!(schema.len(), 2);
/// assert!(schema.contains("greet"));
/// assert!(schema.get("missing").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Schema {
    /// Field name to descriptor map.
    pub fields: BTreeMap<String, Descriptor>,
}

impl Schema {
    /// Creates an empty schema.
    ///
    /// The empty schema is a valid input everywhere: every derivation
    /// yields empty results for it, never an error.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a field, replacing any previous descriptor under that name.
    pub fn with_field(mut self, name: &str, descriptor: Descriptor) -> Self {
        self.fields.insert(name.to_string(), descriptor);
        self
    }

    /// Looks up a field descriptor by name.
    pub fn get(&self, name: &str) -> Option<&Descriptor> {
        self.fields.get(name)
    }

    /// Checks field membership by literal name.
    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Returns the number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true when the schema has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

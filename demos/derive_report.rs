//! Schema derivation walkthrough.
//!
//! Builds a small service schema, partitions its fields by callability,
//! looks up a method signature, and derives override/extend/deep-optional
//! variants.
//!
//! # Usage
//!
//! ```bash
//! cargo run -p type-schema-demos --example derive_report
//! ```

use type_schema_core::*;

fn main() {
    let limits = Schema::new()
        .with_field("max_depth", Descriptor::Number)
        .with_field("max_width", Descriptor::Number);
    let schema = Schema::new()
        .with_field("host", Descriptor::Text)
        .with_field("port", Descriptor::Number)
        .with_field("format", Descriptor::literal("json"))
        .with_field("limits", Descriptor::Structural(limits))
        .with_field(
            "reload",
            Descriptor::callable(Vec::new(), Descriptor::Boolean),
        );

    println!("=== Introspection ===");
    println!("keys:      {:?}", keys(&schema));
    println!("callables: {:?}", callable_field_names(&schema));
    println!("data:      {:?}", data_field_names(&schema));
    println!("text-like: {:?}", fields_matching(&schema, &Descriptor::Text));

    match method_signature(&schema, "reload") {
        Ok(signature) => println!("reload signature: {signature:?}"),
        Err(e) => println!("reload rejected: {e}"),
    }
    match method_signature(&schema, "host") {
        Ok(signature) => println!("host signature: {signature:?}"),
        Err(e) => println!("host rejected: {e}"),
    }

    println!();
    println!("=== Override ===");
    let changes = Schema::new().with_field("port", Descriptor::Text);
    match override_fields(&schema, &changes) {
        Ok(merged) => println!("port now: {:?}", merged.get("port")),
        Err(e) => println!("override rejected: {e}"),
    }

    println!();
    println!("=== Extend ===");
    let addition = Schema::new().with_field("secure", Descriptor::Boolean);
    match extend(&schema, &addition) {
        Ok(extended) => println!("extended to {} fields", extended.len()),
        Err(e) => println!("extend rejected: {e}"),
    }
    let clash = Schema::new().with_field("port", Descriptor::Boolean);
    match extend(&schema, &clash) {
        Ok(extended) => println!("extended to {} fields", extended.len()),
        Err(e) => println!("extend rejected: {e}"),
    }

    println!();
    println!("=== Deep optional ===");
    let partial = deep_optional(&schema);
    match serde_json::to_string_pretty(&partial) {
        Ok(json) => println!("{json}"),
        Err(e) => println!("failed to render: {e}"),
    }
}

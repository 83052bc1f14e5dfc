//! Literal text normalization walkthrough.
//!
//! Shows the one-character-at-a-time trimming rule over literal text
//! descriptors, including the cases it deliberately leaves alone (tabs,
//! newlines, interior spaces).
//!
//! # Usage
//!
//! ```bash
//! cargo run -p type-schema-demos --example trim_literals
//! ```

use type_schema_core::*;

fn main() {
    let samples = [
        "  a",
        "a  ",
        "  a b  ",
        "\ta",
        "a\n",
        "   ",
        "",
    ];

    println!("=== str-level trimming ===");
    for sample in samples {
        println!(
            "{:12} -> left {:10} right {:10} both {:?}",
            format!("{sample:?}"),
            format!("{:?}", trim_left(sample)),
            format!("{:?}", trim_right(sample)),
            trim(sample),
        );
    }

    println!();
    println!("=== descriptor-level trimming ===");
    let padded = Descriptor::literal("  release  ");
    match trim_literal(&padded) {
        Ok(trimmed) => println!("{padded:?} -> {trimmed:?}"),
        Err(e) => println!("rejected: {e}"),
    }

    // Only exact, statically known text can be normalized.
    match trim_literal(&Descriptor::Text) {
        Ok(trimmed) => println!("unexpected: {trimmed:?}"),
        Err(e) => println!("Descriptor::Text rejected: {e}"),
    }
}

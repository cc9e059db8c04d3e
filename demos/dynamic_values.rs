//! Working with decoded documents at runtime.
//!
//! Run with: cargo run --example dynamic_values

use serde::{Deserialize, Serialize};
use serde_ini::{decode, from_value, to_value, IniMap, Value};
use std::error::Error;

#[derive(Debug, Serialize, Deserialize)]
struct Limits {
    max_connections: u32,
    timeout: f64,
    strict: bool,
}

fn describe(map: &IniMap, depth: usize) {
    for (key, value) in map {
        let indent = "  ".repeat(depth);
        match value {
            Value::Section(section) => {
                println!("{}[{}]", indent, key);
                describe(section, depth + 1);
            }
            Value::Array(items) => println!("{}{} = {} item(s)", indent, key, items.len()),
            other => println!("{}{} = {} ({})", indent, key, other, other.type_name()),
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let doc = decode(
        "verbose\nowner = null\nplugins[] = auth\nplugins[] = cache\n\
         [limits]\nmax_connections = 100\ntimeout = 2.5\nstrict = false\n",
    );

    // Walk the document without knowing its shape
    describe(&doc, 0);

    // Values decode as text, booleans and null; typed reads parse on demand
    let limits_value = doc.get("limits").cloned().ok_or("missing [limits]")?;
    let limits: Limits = from_value(limits_value)?;
    println!("\nParsed limits: {:?}", limits);

    // Typed values convert back into a section
    let value = to_value(&limits)?;
    println!("As value: {}", value);

    Ok(())
}

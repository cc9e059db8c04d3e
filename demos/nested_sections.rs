//! Dotted section names and escaped dots.
//!
//! Run with: cargo run --example nested_sections

use serde_ini::{decode, encode_default, Value};
use std::error::Error;

const INPUT: &str = r#"
; top-level entries come first
name = cluster

[servers.alpha]
ip = 10.0.0.1

[servers.beta]
ip = 10.0.0.2

; a literal dot in a section name
[example\.com]
owner = ops
"#;

fn main() -> Result<(), Box<dyn Error>> {
    let doc = decode(INPUT);

    let servers = doc
        .get("servers")
        .and_then(Value::as_section)
        .ok_or("missing [servers]")?;
    for (name, server) in servers {
        let ip = server
            .as_section()
            .and_then(|s| s.get("ip"))
            .and_then(Value::as_str)
            .unwrap_or("?");
        println!("server {}: {}", name, ip);
    }

    // `[example\.com]` stays a single key
    assert!(doc.contains_key("example.com"));
    println!("literal key: {}\n", doc["example.com"]);

    // Encoding restores the dotted headers
    println!("Re-encoded:\n{}", encode_default(&doc));

    Ok(())
}

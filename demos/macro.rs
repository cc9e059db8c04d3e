//! Building INI documents with the ini! macro.
//!
//! Run with: cargo run --example macro

use serde_ini::{encode_default, ini, Value};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    // Scalars
    println!("Scalars: {} {} {} {}", ini!(null), ini!(true), ini!(42), ini!("text"));

    // Arrays become repeated `key[]=item` lines
    let hosts = ini!(["alpha", "beta"]);
    println!("Array: {}\n", hosts);

    // Variables and expressions work anywhere a value is expected
    let port = 8080;
    let doc = ini!({
        "name": "gateway",
        "hosts": ["alpha", "beta"],
        "listen": {
            "port": port,
            "tls": {
                "enabled": true,
                "cert": "/etc/ssl/gateway.pem"
            }
        }
    });

    let Value::Section(doc) = doc else {
        return Err("ini!({..}) always builds a section".into());
    };
    println!("Document:\n{}", encode_default(&doc));

    Ok(())
}

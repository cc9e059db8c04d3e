//! Basic INI serialization and deserialization.
//!
//! Run with: cargo run --example simple

use serde::{Deserialize, Serialize};
use serde_ini::{from_str, to_string};
use std::error::Error;

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct Database {
    user: String,
    password: String,
    database: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct Config {
    scope: String,
    database: Database,
    paths: Vec<String>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let config = Config {
        scope: "global".to_string(),
        database: Database {
            user: "dbuser".to_string(),
            password: "dbpassword".to_string(),
            database: "use_this_database".to_string(),
        },
        paths: vec!["/usr/bin".to_string(), "/usr/local/bin".to_string()],
    };

    // Serialize to INI
    let text = to_string(&config)?;
    println!("INI output:\n{}", text);

    // Deserialize back to struct
    let config_back: Config = from_str(&text)?;
    assert_eq!(config, config_back);
    println!("✓ Round-trip successful");

    Ok(())
}

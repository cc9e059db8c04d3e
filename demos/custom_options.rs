//! Customizing INI output with EncodeOptions and DecodeOptions.
//!
//! Run with: cargo run --example custom_options

use serde::{Deserialize, Serialize};
use serde_ini::{
    from_str_with_options, to_string, to_string_with_options, DecodeOptions, EncodeOptions,
    LineEnding,
};
use std::error::Error;

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct Config {
    name: String,
    motd: String,
    debug: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    let config = Config {
        name: "MyApp".to_string(),
        motd: "50% off; today only #sale".to_string(),
        debug: true,
    };

    // Default format
    println!("Default:");
    println!("{}", to_string(&config)?);

    // Spaces around `=` and a wrapping section
    println!("Whitespace and section:");
    let options = EncodeOptions::new()
        .with_whitespace(true)
        .with_section("app");
    println!("{}", to_string_with_options(&config, options)?);

    // Only `%` starts a comment; `;` and `#` are plain text
    println!("Custom comment delimiter:");
    let options = EncodeOptions::new().with_comment_delimiters(['%']);
    let text = to_string_with_options(&config, options)?;
    println!("{}", text);

    let decode_options = DecodeOptions::new().with_comment_delimiters(['%']);
    let back: Config = from_str_with_options(&text, &decode_options)?;
    assert_eq!(config, back);

    // Windows line endings regardless of platform
    let options = EncodeOptions::new().with_line_ending(LineEnding::CrLf);
    let text = to_string_with_options(&config, options)?;
    println!("CRLF output is {} bytes", text.len());

    Ok(())
}

//! Decoding only the entries marked by a comment.
//!
//! Run with: cargo run --example comment_filter

use serde_ini::{decode, decode_with_options, encode_default, DecodeOptions};
use std::error::Error;

const INPUT: &str = "\
[notAtAllImportant]
notImportant = yeah1
# IMPORTANT
important = yeah2

# IMPORTANT
[everythingImportant]
notLabeled = yeah3

[absolutelyUnimportant]
notInteresting = no
";

fn main() -> Result<(), Box<dyn Error>> {
    println!("Everything:\n{}", encode_default(&decode(INPUT)));

    let options = DecodeOptions::new().with_filter_comment("IMPORTANT");
    let filtered = decode_with_options(INPUT, &options);
    println!("Marked with `# IMPORTANT`:\n{}", encode_default(&filtered));

    assert!(!filtered.contains_key("absolutelyUnimportant"));
    Ok(())
}

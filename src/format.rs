//! INI Format Description
//!
//! This module documents the INI dialect read and written by this library.
//!
//! # Overview
//!
//! A file is a sequence of lines. Line breaks are any run of `\r` and `\n`
//! characters, so empty lines never carry meaning. Each line is one of:
//!
//! | Line | Meaning |
//! |------|---------|
//! | `; text` or `# text` | Comment |
//! | `[name]` | Start of section `name` |
//! | `key=value` | Entry |
//! | `key` | Entry with value `true` |
//!
//! Anything else (such as `=value` with no key) is dropped. A line of only
//! spaces or tabs is a key that trims to `""`, so it stores `"" = true`.
//!
//! # Entries
//!
//! The key is everything before the first `=`, the value everything after it.
//! Both are trimmed, so `key = value` and `key=value` are the same entry.
//!
//! ```text
//! name = demo
//! path = /usr/local ; trailing comments are cut off
//! verbose
//! ```
//!
//! decodes to `{ name: "demo", path: "/usr/local", verbose: true }`.
//!
//! The values `true`, `false` and `null` are read as literals. Everything else
//! is text; this library never guesses numbers from bare tokens.
//!
//! When a key repeats, the later value wins.
//!
//! # Arrays
//!
//! A key ending in `[]` appends to an array:
//!
//! ```text
//! tags[] = a
//! tags[] = b
//! ```
//!
//! decodes to `{ tags: ["a", "b"] }`. A scalar already stored under the key
//! becomes the first element, and a later line without `[]` still appends.
//! The key `[]` on its own is a plain key.
//!
//! # Sections
//!
//! `[name]` routes the following entries into the section `name` until the
//! next header. `[]` returns to the top level. Sections with no entries are
//! not created.
//!
//! Dotted names nest:
//!
//! ```text
//! [server.tls]
//! port = 443
//! ```
//!
//! decodes to `{ server: { tls: { port: "443" } } }`. A literal dot is written
//! `\.`, so `[a\.b]` is the single section `a.b`.
//!
//! Parent sections along the path are reused or created. The last segment
//! replaces whatever is stored under that name, sections included, so
//! `[a.b.c]` followed by `[a.b]` leaves only the entries of `[a.b]`.
//!
//! # Quoting and Escaping
//!
//! Keys, values and section names are written bare when possible. A token is
//! written as a JSON string instead when it:
//!
//! - contains `=`, `\r` or `\n`
//! - starts with `[`
//! - is already wrapped in matching `"` or `'` quotes
//! - has leading or trailing whitespace
//!
//! Non-string values are written as JSON (`null`, `true`, `5`, `[1,2]`).
//!
//! Bare tokens escape comment delimiters with a backslash (`a\;b`). On
//! decode, `\\` and an escaped delimiter lose their backslash; any other
//! backslash is kept as is.
//!
//! Quoted tokens are parsed as JSON. Single quotes are stripped first, so
//! `'"text"'` and `"text"` read the same and `'5'` reads as the number 5.
//! A quoted token that is not valid JSON is kept as text.
//!
//! # Comment Filters
//!
//! A decode filter keeps only marked entries. The marker is a comment whose
//! text (after the delimiter and at most one space) equals the filter string.
//!
//! ```text
//! [mixed]
//! dropped = 1
//! # IMPORTANT
//! kept = 2
//!
//! # IMPORTANT
//! [everything]
//! kept = 3
//! ```
//!
//! A marker above an entry keeps that entry. A marker above a header keeps the
//! whole section. Nothing else survives.
//!
//! # Encoding Layout
//!
//! Within a section, scalar entries and arrays come first, in map order.
//! Nested sections follow as their own blocks, named by dotted path and
//! separated by one empty line. A section with no direct entries gets no
//! header of its own.
//!
//! ```text
//! scope = global
//!
//! [database]
//! user = dbuser
//!
//! [database.pool]
//! size = 4
//! ```
//!
//! Lines end with the platform line ending unless
//! [`LineEnding`](crate::LineEnding) says otherwise.

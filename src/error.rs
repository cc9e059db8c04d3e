//! Error types for the Serde bridge.
//!
//! The INI codec itself never fails: [`encode`](crate::encode) and
//! [`decode`](crate::decode) degrade gracefully on malformed input. Errors only
//! surface when converting between INI documents and Rust types through Serde.
//!
//! ## Error Categories
//!
//! - **Unsupported Types**: Values that have no INI representation (e.g. a
//!   top-level sequence)
//! - **Type Mismatches**: An INI value could not be turned into the requested type
//! - **Invalid Numbers**: A string value was expected to hold a number
//! - **I/O Errors**: Reading or writing failed
//!
//! ## Examples
//!
//! ```rust
//! use serde_ini::{to_string, Error};
//!
//! let result = to_string(&vec![1, 2, 3]);
//! assert!(matches!(result, Err(Error::UnsupportedType(_))));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors of the Serde bridge.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// IO error during reading or writing
    #[error("IO error: {0}")]
    Io(String),

    /// Value has no INI representation
    #[error("Unsupported type: {0}")]
    UnsupportedType(String),

    /// Type mismatch during deserialization
    #[error("Type mismatch: expected {expected}, found {found}")]
    TypeMismatch { expected: String, found: String },

    /// A string value could not be parsed as the requested number type
    #[error("Invalid number {value:?}: expected {expected}")]
    InvalidNumber { value: String, expected: String },

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),

    /// Generic message
    #[error("{0}")]
    Message(String),
}

impl Error {
    /// Creates a type mismatch error when deserialization fails due to incompatible types.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_ini::Error;
    ///
    /// let err = Error::type_mismatch("integer", "array");
    /// assert!(err.to_string().contains("expected integer"));
    /// ```
    pub fn type_mismatch(expected: &str, found: &str) -> Self {
        Error::TypeMismatch {
            expected: expected.to_string(),
            found: found.to_string(),
        }
    }

    /// Creates an error for a string that does not parse as a number.
    pub fn invalid_number(value: &str, expected: &str) -> Self {
        Error::InvalidNumber {
            value: value.to_string(),
            expected: expected.to_string(),
        }
    }

    /// Creates an unsupported type error for values that cannot be written as INI.
    pub fn unsupported_type(msg: &str) -> Self {
        Error::UnsupportedType(msg.to_string())
    }

    /// Creates a custom error with a display message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_ini::Error;
    ///
    /// let err = Error::custom("something went wrong");
    /// assert!(err.to_string().contains("something went wrong"));
    /// ```
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Creates an I/O error for reading/writing failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

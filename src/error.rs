//! Error types for the value-construction side of the crate.
//!
//! Inspection itself never fails: throwing getters and hooks are rendered
//! inline as placeholders, and the recursion ceiling degrades output instead
//! of returning an error. The fallible surface is the serde bridge
//! ([`to_value`](crate::to_value)), which can reject Rust values that have no
//! representation in the dynamic value model.
//!
//! ## Examples
//!
//! ```rust
//! use ocular::{to_value, Error};
//!
//! let value = to_value(&vec![1, 2, 3]).unwrap();
//! let rendered = ocular::inspect(&value);
//! assert_eq!(rendered, "[ 1, 2, 3 ]");
//! ```

use std::fmt;
use thiserror::Error;

/// Errors produced while converting Rust data into inspectable values.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// The serde data model feature has no counterpart in the value model
    #[error("Unsupported type: {0}")]
    UnsupportedType(String),

    /// Generic error with a message
    #[error("{0}")]
    Custom(String),
}

impl Error {
    /// Creates an unsupported type error
    pub fn unsupported_type(type_name: impl fmt::Display) -> Self {
        Error::UnsupportedType(type_name.to_string())
    }

    /// Creates a custom error with a message
    pub fn custom(msg: impl fmt::Display) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

/// A specialized `Result` type for conversion operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::unsupported_type("tuple variants");
        assert_eq!(err.to_string(), "Unsupported type: tuple variants");

        let err = Error::custom("map keys must be strings");
        assert_eq!(err.to_string(), "map keys must be strings");
    }

    #[test]
    fn test_error_is_cloneable() {
        let err = Error::custom("boom");
        let cloned = err.clone();
        assert_eq!(err.to_string(), cloned.to_string());
    }
}

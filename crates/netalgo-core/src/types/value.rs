//! Property values that can be stored on nodes.
//!
//! This module provides the [`Value`] enum, which represents the payload
//! value types a node can carry alongside its identity label.
//!
//! # Example
//!
//! ```
//! use netalgo_core::Value;
//!
//! // Create values via From trait
//! let name: Value = "core-1".into();
//! let ports: Value = 48i64.into();
//! let load: Value = 0.73f64.into();
//! let up: Value = true.into();
//!
//! // Access typed values
//! assert_eq!(name.as_str(), Some("core-1"));
//! assert_eq!(ports.as_int(), Some(48));
//! assert_eq!(load.as_float(), Some(0.73));
//! assert_eq!(up.as_bool(), Some(true));
//! ```

use serde::{Deserialize, Serialize};

/// A value that can be stored as a property on a node.
///
/// # Supported Types
///
/// | Variant | Rust Type | Use Case |
/// |---------|-----------|----------|
/// | `Null` | - | Missing/optional values |
/// | `Bool` | `bool` | Boolean flags |
/// | `Int` | `i64` | Integers, counters, timestamps |
/// | `Float` | `f64` | Numeric measurements |
/// | `String` | `String` | Text data |
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// Null/missing value
    Null,
    /// Boolean value
    Bool(bool),
    /// 64-bit signed integer
    Int(i64),
    /// 64-bit floating point number
    Float(f64),
    /// UTF-8 string
    String(String),
}

impl Value {
    /// Returns `true` if this value is `Null`.
    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Get the boolean value, if this is a `Bool`.
    #[inline]
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Get the integer value, if this is an `Int`.
    #[inline]
    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Get the float value, if this is a `Float`.
    #[inline]
    #[must_use]
    pub const fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Get the string value, if this is a `String`.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    #[inline]
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for Value {
    #[inline]
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<i32> for Value {
    #[inline]
    fn from(i: i32) -> Self {
        Self::Int(i64::from(i))
    }
}

impl From<f64> for Value {
    #[inline]
    fn from(f: f64) -> Self {
        Self::Float(f)
    }
}

impl From<&str> for Value {
    #[inline]
    fn from(s: &str) -> Self {
        Self::String(s.to_owned())
    }
}

impl From<String> for Value {
    #[inline]
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

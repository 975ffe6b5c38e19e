//! # Canonize Core
//!
//! Value model and boundary classification for canonical encoding.
//!
//! This crate provides:
//! - A closed [`Value`] variant over primitives, sequences, mappings, and
//!   an explicit `Unsupported` fallback
//! - A [`Number`] model covering signed zero, NaN, and the infinities
//! - Deep equality (mapping key order ignored, sequence order respected)
//! - Conversion from host values into the variant before recursion begins
//!
//! ## Example
//!
//! ```rust
//! use canonize_core::Value;
//!
//! let value = Value::from_serialize(&serde_json::json!({"b": 1, "a": 2}));
//! assert!(value.is_composite());
//!
//! // Insertion order is an artifact of construction, not data
//! let reordered = Value::from_serialize(&serde_json::json!({"a": 2, "b": 1}));
//! assert_eq!(value, reordered);
//! ```

pub mod convert;
pub mod number;
pub mod value;

// Re-exports for convenience
pub use number::*;
pub use value::*;

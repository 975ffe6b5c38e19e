//! # Canonize
//!
//! Deterministic canonical text for structured values, intended as input
//! to a hash function or equality check. Deeply equal values produce
//! byte-identical output regardless of mapping key insertion order.
//!
//! This crate provides:
//! - The canonical encoder, total over the supported value space
//! - A depth-bounded variant for untrusted input
//! - SHA256 hashing of canonical text
//!
//! ## Canonical Form Rules
//!
//! 1. Mapping keys sorted ascending by code point; sequence order kept
//! 2. Every composite entry renders as `key:value;`
//! 3. Sequences wrap in `[...]`, mappings in `{...}`
//! 4. Strings wrap in double quotes; only the `"` character is escaped
//! 5. Negative zero renders as `-0`, distinct from `0`
//!
//! The output is one-way. It is not JSON and is never parsed back.
//!
//! ## Example
//!
//! ```rust
//! use canonize::{canonize, canonize_serialize};
//! use canonize_core::Value;
//!
//! let value = Value::from_serialize(&serde_json::json!({"b": 1, "a": 2}));
//! assert_eq!(canonize(&value), "{a:2;b:1;}");
//!
//! // Same result straight from any serializable value
//! assert_eq!(canonize_serialize(&serde_json::json!({"a": 2, "b": 1})), "{a:2;b:1;}");
//! ```
//!
//! ## Minimal Escaping
//!
//! Inside strings only the double quote is escaped. Backslashes, control
//! characters, and separators pass through verbatim. Distinct strings
//! still produce distinct output, which is all the equality contract
//! needs, but the canonical text must not be treated as valid JSON or as
//! injection-safe.

mod bounded;
mod canonical;
mod error;
mod hash;

pub use bounded::*;
pub use canonical::*;
pub use error::*;
pub use hash::*;

//! Depth-bounded encoding
//!
//! The core encoder recurses to the structural depth of its input, so a
//! pathologically deep value can exhaust the call stack. This wrapper is
//! the guard for untrusted input: it rejects values nested beyond a
//! caller-chosen limit before encoding. It is an extension, not part of
//! the core contract; on success the output is byte-identical to
//! [`canonize`].

use canonize_core::Value;

use crate::canonical::canonize;
use crate::error::DepthError;

/// Encode a value in canonical form, rejecting excessive nesting.
///
/// Depth counts composite levels: a primitive has depth 0, `[1]` has
/// depth 1, `[[1]]` has depth 2. The check itself recurses, so the limit
/// must be small enough for the checker's own stack; it exists to bound
/// attacker-controlled nesting, not to probe the platform's stack size.
///
/// # Errors
///
/// Returns [`DepthError::LimitExceeded`] when the value nests deeper than
/// `max_depth`.
///
/// # Example
///
/// ```rust
/// use canonize::{canonize, canonize_bounded};
/// use canonize_core::Value;
///
/// let value = Value::from_serialize(&serde_json::json!({"a": [1, 2]}));
/// let bounded = canonize_bounded(&value, 16).unwrap();
/// assert_eq!(bounded, canonize(&value));
///
/// assert!(canonize_bounded(&value, 1).is_err());
/// ```
pub fn canonize_bounded(value: &Value, max_depth: usize) -> Result<String, DepthError> {
    check_depth(value, 0, max_depth)?;
    Ok(canonize(value))
}

fn check_depth(value: &Value, depth: usize, limit: usize) -> Result<(), DepthError> {
    match value {
        Value::Sequence(items) => {
            if depth >= limit {
                return Err(DepthError::LimitExceeded { limit });
            }
            for item in items {
                check_depth(item, depth + 1, limit)?;
            }
            Ok(())
        }
        Value::Mapping(fields) => {
            if depth >= limit {
                return Err(DepthError::LimitExceeded { limit });
            }
            for child in fields.values() {
                check_depth(child, depth + 1, limit)?;
            }
            Ok(())
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_agrees_with_core_under_limit() {
        let v = Value::from_serialize(&json!({"a": {"b": [1, {"c": 2}]}}));
        assert_eq!(canonize_bounded(&v, 64).unwrap(), canonize(&v));
    }

    #[test]
    fn test_primitive_passes_any_limit() {
        assert_eq!(canonize_bounded(&Value::from(1), 0).unwrap(), "1");
    }

    #[test]
    fn test_exact_limit_accepted() {
        let v = Value::from_serialize(&json!([[1]]));
        assert_eq!(v.depth(), 2);
        assert!(canonize_bounded(&v, 2).is_ok());
    }

    #[test]
    fn test_over_limit_rejected() {
        let v = Value::from_serialize(&json!([[1]]));
        assert_eq!(
            canonize_bounded(&v, 1),
            Err(DepthError::LimitExceeded { limit: 1 })
        );
    }

    #[test]
    fn test_composite_rejected_at_limit_zero() {
        let v = Value::Sequence(vec![]);
        assert!(canonize_bounded(&v, 0).is_err());
    }
}

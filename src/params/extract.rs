//! Normalizes a field's raw argument node into positional and named args.
//!
//! YAML authors may pass arguments as a sequence (positional form), as a
//! mapping (named form), or as a mix: a sequence may carry a single-key
//! `_kwargs` mapping element, and a mapping may carry a sequence-valued
//! `_args` entry. A `_comments` entry is documentation only and is always
//! stripped before resolution.

use serde_yaml::{Mapping, Value};

use crate::error::SchemaError;
use crate::field::FieldKind;
use crate::params::type_name;

/// Marker key holding positional arguments inside a mapping entry.
pub const ARGS_KEY: &str = "_args";

/// Marker key holding named arguments inside a sequence entry.
pub const KWARGS_KEY: &str = "_kwargs";

/// Marker key holding author comments; never reaches a renderer.
pub const COMMENTS_KEY: &str = "_comments";

/// Normalized arguments for one field invocation.
///
/// Positional order is input order. Named keys retain source insertion
/// order, though lookup order is not significant.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldArgs {
    /// Positional argument values, in input order.
    pub positional: Vec<Value>,
    /// Named argument values.
    pub named: Mapping,
}

impl FieldArgs {
    /// Looks up a named argument.
    #[must_use]
    pub fn named(&self, name: &str) -> Option<&Value> {
        self.named.get(Value::from(name))
    }

    /// Overlays inherited defaults onto the named arguments.
    ///
    /// Inherited keys overwrite same-named keys already present; this is
    /// how a container's orientation forces `br` on its children and the
    /// document root suppresses the trailing break of its last field.
    pub fn apply_defaults(&mut self, defaults: &Mapping) {
        for (key, value) in defaults {
            self.named.insert(key.clone(), value.clone());
        }
    }
}

/// Extracts `(positional, named)` arguments from a field's argument entry.
///
/// - absent or null entry: both empty
/// - sequence: positional copy, minus an optional `_kwargs` marker element
/// - mapping: named copy, minus an optional `_args` entry
///
/// # Errors
///
/// Returns [`SchemaError`] when the entry is neither sequence nor mapping,
/// or when a marker entry holds a value of the wrong shape.
pub fn extract(kind: FieldKind, entry: Option<&Value>) -> Result<FieldArgs, SchemaError> {
    let mut args = match entry {
        None | Some(Value::Null) => FieldArgs::default(),
        Some(Value::Sequence(seq)) => extract_from_sequence(kind, seq)?,
        Some(Value::Mapping(map)) => extract_from_mapping(kind, map)?,
        Some(other) => {
            return Err(SchemaError::EntryShape {
                kind,
                actual: type_name(other),
            });
        }
    };

    args.named.remove(Value::from(COMMENTS_KEY));
    Ok(args)
}

fn extract_from_sequence(kind: FieldKind, seq: &[Value]) -> Result<FieldArgs, SchemaError> {
    let mut positional: Vec<Value> = seq.to_vec();
    let mut named = Mapping::new();

    if let Some(index) = positional.iter().position(is_kwargs_marker) {
        let marker = positional.remove(index);
        let value = marker
            .as_mapping()
            .and_then(|m| m.get(Value::from(KWARGS_KEY)))
            .cloned()
            .unwrap_or(Value::Null);
        named = match value {
            Value::Mapping(map) => map,
            other => {
                return Err(SchemaError::KwargsShape {
                    kind,
                    actual: type_name(&other),
                });
            }
        };
    }

    Ok(FieldArgs { positional, named })
}

fn extract_from_mapping(kind: FieldKind, map: &Mapping) -> Result<FieldArgs, SchemaError> {
    let mut named = map.clone();
    let positional = match named.remove(Value::from(ARGS_KEY)) {
        Some(Value::Sequence(seq)) => seq,
        Some(other) => {
            return Err(SchemaError::ArgsShape {
                kind,
                actual: type_name(&other),
            });
        }
        None => Vec::new(),
    };

    Ok(FieldArgs { positional, named })
}

/// A sequence element counts as the keywords marker only when it is a
/// mapping whose sole key is `_kwargs`.
fn is_kwargs_marker(value: &Value) -> bool {
    value
        .as_mapping()
        .is_some_and(|m| m.len() == 1 && m.get(Value::from(KWARGS_KEY)).is_some())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(yaml: &str) -> Value {
        serde_yaml::from_str(yaml).unwrap()
    }

    fn extract_ok(yaml: &str) -> FieldArgs {
        extract(FieldKind::Span, Some(&entry(yaml))).unwrap()
    }

    #[test]
    fn test_extract_args_from_sequence_entry() {
        let args = extract_ok("- first arg\n- second arg");
        assert_eq!(args.positional, vec![Value::from("first arg"), Value::from("second arg")]);
        assert!(args.named.is_empty());
    }

    #[test]
    fn test_extract_kwargs_from_mapping_entry() {
        let args = extract_ok("key: value\nanother key: another value");
        assert!(args.positional.is_empty());
        assert_eq!(args.named("key"), Some(&Value::from("value")));
        assert_eq!(args.named("another key"), Some(&Value::from("another value")));
    }

    #[test]
    fn test_extract_args_from_mapping_entry() {
        let args = extract_ok("key: value\n_args:\n  - first arg\n  - second arg");
        assert_eq!(args.positional, vec![Value::from("first arg"), Value::from("second arg")]);
        assert_eq!(args.named("key"), Some(&Value::from("value")));
        assert!(args.named(ARGS_KEY).is_none());
    }

    #[test]
    fn test_extract_kwargs_from_sequence_entry() {
        let args = extract_ok("- first arg\n- second arg\n- _kwargs:\n    key: value");
        assert_eq!(args.positional, vec![Value::from("first arg"), Value::from("second arg")]);
        assert_eq!(args.named("key"), Some(&Value::from("value")));
    }

    #[test]
    fn test_kwargs_marker_removed_from_middle() {
        let args = extract_ok("- first\n- _kwargs:\n    key: value\n- second");
        assert_eq!(args.positional, vec![Value::from("first"), Value::from("second")]);
        assert_eq!(args.named("key"), Some(&Value::from("value")));
    }

    #[test]
    fn test_mapping_with_extra_keys_is_not_a_marker() {
        // A two-key mapping containing _kwargs stays a positional element
        let args = extract_ok("- _kwargs:\n    key: value\n  other: 1");
        assert_eq!(args.positional.len(), 1);
        assert!(args.named.is_empty());
    }

    #[test]
    fn test_comments_stripped_from_mapping_entry() {
        let args = extract_ok("key: value\n_comments: Comments");
        assert!(args.named(COMMENTS_KEY).is_none());
        assert_eq!(args.named("key"), Some(&Value::from("value")));
    }

    #[test]
    fn test_comments_stripped_from_kwargs_marker() {
        let args = extract_ok("- _kwargs:\n    key: value\n    _comments: Comments");
        assert!(args.named(COMMENTS_KEY).is_none());
        assert_eq!(args.named("key"), Some(&Value::from("value")));
    }

    #[test]
    fn test_extract_nothing_from_absent_entry() {
        let args = extract(FieldKind::Span, None).unwrap();
        assert!(args.positional.is_empty());
        assert!(args.named.is_empty());

        let args = extract(FieldKind::Span, Some(&Value::Null)).unwrap();
        assert!(args.positional.is_empty());
        assert!(args.named.is_empty());
    }

    #[test]
    fn test_scalar_entry_fails() {
        let result = extract(FieldKind::Span, Some(&Value::from("scalar")));
        assert!(matches!(
            result,
            Err(SchemaError::EntryShape { actual: "string", .. })
        ));
    }

    #[test]
    fn test_kwargs_marker_must_hold_mapping() {
        let result = extract(FieldKind::Span, Some(&entry("- _kwargs: just a string")));
        assert!(matches!(result, Err(SchemaError::KwargsShape { .. })));
    }

    #[test]
    fn test_args_entry_must_hold_sequence() {
        let result = extract(FieldKind::Span, Some(&entry("_args: not a list")));
        assert!(matches!(result, Err(SchemaError::ArgsShape { .. })));
    }

    #[test]
    fn test_apply_defaults_overwrites_explicit_values() {
        let mut args = extract_ok("br: true\nlabel: x");
        let mut defaults = Mapping::new();
        defaults.insert(Value::from("br"), Value::Bool(false));
        args.apply_defaults(&defaults);

        assert_eq!(args.named("br"), Some(&Value::Bool(false)));
        assert_eq!(args.named("label"), Some(&Value::from("x")));
    }

    #[test]
    fn test_positional_order_preserved() {
        let args = extract_ok("- c\n- a\n- b");
        let order: Vec<_> = args.positional.iter().filter_map(Value::as_str).collect();
        assert_eq!(order, vec!["c", "a", "b"]);
    }
}

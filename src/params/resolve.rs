//! Parameter resolution against extracted field arguments.
//!
//! Each function resolves one declared parameter by name with a default.
//! Whether the value was explicitly supplied or came from the default is
//! tracked in [`Resolved`], because validation applies only to explicitly
//! supplied values: a missing optional parameter never fails its own type,
//! set, or range check. This leniency is deliberate and load-bearing.

use serde_yaml::{Mapping, Value};

use crate::error::SchemaError;
use crate::field::FieldKind;
use crate::params::{FieldArgs, type_name};

/// A resolved parameter value, tagged with its provenance.
///
/// Check combinators like [`Resolved::one_of`] and [`Resolved::within`]
/// validate only the `Explicit` branch; defaults pass unchecked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolved<T> {
    /// The value was present in the named arguments.
    Explicit(T),
    /// The parameter was absent; the declared default was used.
    Defaulted(T),
}

impl<T> Resolved<T> {
    /// Unwraps the value, discarding provenance.
    pub fn into_value(self) -> T {
        match self {
            Self::Explicit(value) | Self::Defaulted(value) => value,
        }
    }

    /// True when the value was explicitly supplied.
    pub const fn is_explicit(&self) -> bool {
        matches!(self, Self::Explicit(_))
    }
}

impl Resolved<String> {
    /// Rejects an explicitly supplied value outside `allowed`.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::NotAllowed`] for an explicit value not in the
    /// set. Defaulted values pass unchecked.
    pub fn one_of(
        self,
        kind: FieldKind,
        param: &'static str,
        allowed: &[&str],
    ) -> Result<String, SchemaError> {
        if let Self::Explicit(value) = &self
            && !allowed.contains(&value.as_str())
        {
            return Err(SchemaError::NotAllowed {
                kind,
                param,
                value: value.clone(),
                allowed: allowed.join(", "),
            });
        }
        Ok(self.into_value())
    }
}

impl Resolved<i64> {
    /// Rejects an explicitly supplied number outside `[min, max]`.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::OutOfRange`] for an explicit value out of
    /// range. Defaulted values pass unchecked.
    pub fn within(
        self,
        kind: FieldKind,
        param: &'static str,
        min: i64,
        max: i64,
    ) -> Result<i64, SchemaError> {
        if let Self::Explicit(value) = self
            && !(min..=max).contains(&value)
        {
            return Err(SchemaError::OutOfRange {
                kind,
                param,
                value,
                min,
                max,
            });
        }
        Ok(self.into_value())
    }
}

/// Resolves an optional string parameter (default: none).
///
/// # Errors
///
/// Returns [`SchemaError::TypeMismatch`] when the parameter is explicitly
/// present but not a string.
pub fn opt_string(
    kind: FieldKind,
    args: &FieldArgs,
    param: &'static str,
) -> Result<Resolved<Option<String>>, SchemaError> {
    match args.named(param) {
        None => Ok(Resolved::Defaulted(None)),
        Some(Value::String(s)) => Ok(Resolved::Explicit(Some(s.clone()))),
        Some(other) => Err(mismatch(kind, param, "string", other)),
    }
}

/// Resolves a string parameter with a default.
///
/// # Errors
///
/// Returns [`SchemaError::TypeMismatch`] when the parameter is explicitly
/// present but not a string.
pub fn string_or(
    kind: FieldKind,
    args: &FieldArgs,
    param: &'static str,
    default: &str,
) -> Result<Resolved<String>, SchemaError> {
    match args.named(param) {
        None => Ok(Resolved::Defaulted(default.to_string())),
        Some(Value::String(s)) => Ok(Resolved::Explicit(s.clone())),
        Some(other) => Err(mismatch(kind, param, "string", other)),
    }
}

/// Resolves a boolean parameter with a default.
///
/// # Errors
///
/// Returns [`SchemaError::TypeMismatch`] when the parameter is explicitly
/// present but not a bool.
pub fn bool_or(
    kind: FieldKind,
    args: &FieldArgs,
    param: &'static str,
    default: bool,
) -> Result<Resolved<bool>, SchemaError> {
    match args.named(param) {
        None => Ok(Resolved::Defaulted(default)),
        Some(Value::Bool(b)) => Ok(Resolved::Explicit(*b)),
        Some(other) => Err(mismatch(kind, param, "bool", other)),
    }
}

/// Resolves an integer parameter with a default.
///
/// # Errors
///
/// Returns [`SchemaError::TypeMismatch`] when the parameter is explicitly
/// present but not an integer.
pub fn int_or(
    kind: FieldKind,
    args: &FieldArgs,
    param: &'static str,
    default: i64,
) -> Result<Resolved<i64>, SchemaError> {
    match args.named(param) {
        None => Ok(Resolved::Defaulted(default)),
        Some(value) => value
            .as_i64()
            .map(Resolved::Explicit)
            .ok_or_else(|| mismatch(kind, param, "integer", value)),
    }
}

/// Resolves an optional sequence parameter (default: none).
///
/// Absence is not an error even for parameters the renderer requires;
/// required-ness is enforced at the point of use via [`require`].
///
/// # Errors
///
/// Returns [`SchemaError::TypeMismatch`] when the parameter is explicitly
/// present but not a sequence.
pub fn opt_sequence(
    kind: FieldKind,
    args: &FieldArgs,
    param: &'static str,
) -> Result<Option<Vec<Value>>, SchemaError> {
    match args.named(param) {
        None => Ok(None),
        Some(Value::Sequence(seq)) => Ok(Some(seq.clone())),
        Some(other) => Err(mismatch(kind, param, "sequence", other)),
    }
}

/// Resolves an optional mapping parameter (default: none).
///
/// # Errors
///
/// Returns [`SchemaError::TypeMismatch`] when the parameter is explicitly
/// present but not a mapping.
pub fn opt_mapping(
    kind: FieldKind,
    args: &FieldArgs,
    param: &'static str,
) -> Result<Option<Mapping>, SchemaError> {
    match args.named(param) {
        None => Ok(None),
        Some(Value::Mapping(map)) => Ok(Some(map.clone())),
        Some(other) => Err(mismatch(kind, param, "mapping", other)),
    }
}

/// Upgrades an absent required value to an error at the point of use.
///
/// # Errors
///
/// Returns [`SchemaError::MissingRequired`] when `value` is `None`.
pub fn require<T>(
    kind: FieldKind,
    param: &'static str,
    value: Option<T>,
) -> Result<T, SchemaError> {
    value.ok_or(SchemaError::MissingRequired { kind, param })
}

/// Validates that every positional argument is a mapping.
///
/// This is the all-args mode used only by `container`, which treats each
/// positional element as a child field node. Failures here are never
/// exempt: the values come from the author, not from a default.
///
/// # Errors
///
/// Returns [`SchemaError::ChildShape`] for the first non-mapping child.
pub fn ensure_mappings(kind: FieldKind, args: &FieldArgs) -> Result<(), SchemaError> {
    for child in &args.positional {
        if !child.is_mapping() {
            return Err(SchemaError::ChildShape {
                kind,
                actual: type_name(child),
            });
        }
    }
    Ok(())
}

fn mismatch(
    kind: FieldKind,
    param: &'static str,
    expected: &'static str,
    actual: &Value,
) -> SchemaError {
    SchemaError::TypeMismatch {
        kind,
        param,
        expected,
        actual: type_name(actual),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::extract;

    const KIND: FieldKind = FieldKind::Text;

    fn args(yaml: &str) -> FieldArgs {
        let entry: Value = serde_yaml::from_str(yaml).unwrap();
        extract(KIND, Some(&entry)).unwrap()
    }

    #[test]
    fn test_explicit_string() {
        let resolved = opt_string(KIND, &args("label: hello"), "label").unwrap();
        assert!(resolved.is_explicit());
        assert_eq!(resolved.into_value(), Some("hello".to_string()));
    }

    #[test]
    fn test_absent_string_defaults_without_error() {
        let resolved = opt_string(KIND, &args("other: 1"), "label").unwrap();
        assert!(!resolved.is_explicit());
        assert_eq!(resolved.into_value(), None);
    }

    #[test]
    fn test_explicit_wrong_type_fails() {
        let result = opt_string(KIND, &args("label: true"), "label");
        assert!(matches!(
            result,
            Err(SchemaError::TypeMismatch { param: "label", expected: "string", actual: "bool", .. })
        ));
    }

    #[test]
    fn test_explicit_null_fails_type_check() {
        // An explicit `label: null` is not the same as an absent label
        let result = opt_string(KIND, &args("label: null"), "label");
        assert!(matches!(result, Err(SchemaError::TypeMismatch { .. })));
    }

    #[test]
    fn test_bool_default() {
        let resolved = bool_or(KIND, &args("label: x"), "br", true).unwrap();
        assert!(!resolved.is_explicit());
        assert!(resolved.into_value());
    }

    #[test]
    fn test_bool_explicit() {
        let resolved = bool_or(KIND, &args("br: false"), "br", true).unwrap();
        assert!(resolved.is_explicit());
        assert!(!resolved.into_value());
    }

    #[test]
    fn test_one_of_rejects_explicit_outsider() {
        let resolved = string_or(FieldKind::Button, &args("color: purple"), "color", "blue").unwrap();
        let result = resolved.one_of(FieldKind::Button, "color", &["blue", "green"]);
        assert!(matches!(result, Err(SchemaError::NotAllowed { .. })));
    }

    #[test]
    fn test_one_of_passes_defaulted_outsider() {
        // A default outside the allowed set passes: defaults are exempt
        let resolved = string_or(FieldKind::Button, &args("other: 1"), "color", "nonesuch").unwrap();
        let value = resolved.one_of(FieldKind::Button, "color", &["blue", "green"]).unwrap();
        assert_eq!(value, "nonesuch");
    }

    #[test]
    fn test_within_rejects_explicit_out_of_range() {
        let resolved = int_or(FieldKind::Header, &args("level: 7"), "level", 1).unwrap();
        let result = resolved.within(FieldKind::Header, "level", 1, 6);
        assert!(matches!(result, Err(SchemaError::OutOfRange { value: 7, .. })));
    }

    #[test]
    fn test_within_passes_explicit_in_range() {
        let resolved = int_or(FieldKind::Header, &args("level: 3"), "level", 1).unwrap();
        assert_eq!(resolved.within(FieldKind::Header, "level", 1, 6).unwrap(), 3);
    }

    #[test]
    fn test_required_sequence_absent_resolves_to_none() {
        // Resolution never fails for an absent required parameter; only the
        // use site raises via `require`
        let resolved = opt_sequence(FieldKind::Select, &args("label: x"), "options").unwrap();
        assert!(resolved.is_none());

        let result = require(FieldKind::Select, "options", resolved);
        assert!(matches!(
            result,
            Err(SchemaError::MissingRequired { param: "options", .. })
        ));
    }

    #[test]
    fn test_sequence_explicit_wrong_type_fails() {
        let result = opt_sequence(FieldKind::Select, &args("options: nope"), "options");
        assert!(matches!(result, Err(SchemaError::TypeMismatch { .. })));
    }

    #[test]
    fn test_ensure_mappings_accepts_field_children() {
        let a = args("- check:\n- text:\n    label: x");
        assert!(ensure_mappings(FieldKind::Container, &a).is_ok());
    }

    #[test]
    fn test_ensure_mappings_rejects_scalar_child() {
        let a = args("- check:\n- just a string");
        assert!(matches!(
            ensure_mappings(FieldKind::Container, &a),
            Err(SchemaError::ChildShape { actual: "string", .. })
        ));
    }
}

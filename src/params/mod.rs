//! Field argument extraction and resolution.
//!
//! A field's raw argument node arrives either in positional (sequence) or
//! named (mapping) form; [`extract`] normalizes both into a [`FieldArgs`]
//! pair. The [`resolve`] module then resolves individual parameters against
//! the named arguments with defaults and validation, and [`kinds`] gives
//! each field kind a typed parameter struct built from those primitives.

pub mod extract;
pub mod kinds;
pub mod resolve;

pub use extract::{ARGS_KEY, COMMENTS_KEY, FieldArgs, KWARGS_KEY, extract};
pub use resolve::Resolved;

use serde_yaml::Value;

/// Human-readable type name of a YAML value, for error messages.
#[must_use]
pub const fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged value",
    }
}

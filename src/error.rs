//! Error types for mockdown.
//!
//! A schema violation anywhere in the document aborts the entire render;
//! there is no per-field recovery and no partial output contract.

use thiserror::Error;

use crate::field::FieldKind;

// ============================================================================
// Exit Codes
// ============================================================================

/// Exit codes for mockdown CLI operations, following Unix conventions.
pub struct ExitCode;

impl ExitCode {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;

    /// General error.
    pub const ERROR: i32 = 1;

    /// Schema error (invalid YAML, field argument violation).
    pub const SCHEMA_ERROR: i32 = 2;

    /// I/O error (file not found, permission denied).
    pub const IO_ERROR: i32 = 3;

    /// Usage error (invalid arguments).
    pub const USAGE_ERROR: i32 = 64;
}

// ============================================================================
// Schema Errors
// ============================================================================

/// A field's arguments violate the extraction shape or a parameter contract.
///
/// Defaulted parameter values are exempt from these checks by design: only a
/// value explicitly present in the named arguments can fail validation.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Field arguments are neither a sequence nor a mapping.
    #[error("{kind}: arguments must be a sequence or mapping, got {actual}")]
    EntryShape {
        /// Kind whose arguments were being extracted.
        kind: FieldKind,
        /// Type name of the offending value.
        actual: &'static str,
    },

    /// The `_kwargs` marker element does not hold a mapping.
    #[error("{kind}: _kwargs must hold a mapping, got {actual}")]
    KwargsShape {
        /// Kind whose arguments were being extracted.
        kind: FieldKind,
        /// Type name of the offending value.
        actual: &'static str,
    },

    /// The `_args` entry does not hold a sequence.
    #[error("{kind}: _args must hold a sequence, got {actual}")]
    ArgsShape {
        /// Kind whose arguments were being extracted.
        kind: FieldKind,
        /// Type name of the offending value.
        actual: &'static str,
    },

    /// An explicitly supplied parameter has the wrong type.
    #[error("{kind}.{param}: must be of type {expected}, got {actual}")]
    TypeMismatch {
        /// Kind being resolved.
        kind: FieldKind,
        /// Parameter name.
        param: &'static str,
        /// Expected type name.
        expected: &'static str,
        /// Actual type name.
        actual: &'static str,
    },

    /// An explicitly supplied value is outside the allowed set.
    #[error("{kind}.{param}: \"{value}\" is not one of {allowed}")]
    NotAllowed {
        /// Kind being resolved.
        kind: FieldKind,
        /// Parameter name.
        param: &'static str,
        /// The rejected value.
        value: String,
        /// Comma-separated allowed values.
        allowed: String,
    },

    /// An explicitly supplied number is outside the allowed range.
    #[error("{kind}.{param}: {value} is not between {min} and {max}")]
    OutOfRange {
        /// Kind being resolved.
        kind: FieldKind,
        /// Parameter name.
        param: &'static str,
        /// The rejected value.
        value: i64,
        /// Inclusive lower bound.
        min: i64,
        /// Inclusive upper bound.
        max: i64,
    },

    /// A required parameter is absent (or null) at the point of use.
    #[error("{kind}.{param}: can't be null")]
    MissingRequired {
        /// Kind being rendered.
        kind: FieldKind,
        /// Parameter name.
        param: &'static str,
    },

    /// A container child (positional argument) is not a field mapping.
    #[error("{kind}: every child must be a mapping, got {actual}")]
    ChildShape {
        /// Kind whose children were being validated.
        kind: FieldKind,
        /// Type name of the offending child.
        actual: &'static str,
    },

    /// A field node is not a mapping.
    #[error("field must be a mapping, got {actual}")]
    FieldShape {
        /// Type name of the offending node.
        actual: &'static str,
    },

    /// The document root is not a sequence of field nodes.
    #[error("document root must be a sequence of fields, got {actual}")]
    DocumentShape {
        /// Type name of the root value.
        actual: &'static str,
    },

    /// A table column value is not a sequence of cells.
    #[error("{kind}.columns: column \"{column}\" must hold a sequence, got {actual}")]
    ColumnShape {
        /// Kind whose table was being rendered.
        kind: FieldKind,
        /// Column name.
        column: String,
        /// Type name of the offending value.
        actual: &'static str,
    },

    /// A table column is shorter than the first column.
    #[error("{kind}.columns: column \"{column}\" has {actual} rows, expected {expected}")]
    RowLength {
        /// Kind whose table was being rendered.
        kind: FieldKind,
        /// Column name.
        column: String,
        /// Row count of the first column.
        expected: usize,
        /// Row count of the offending column.
        actual: usize,
    },
}

// ============================================================================
// Top-Level Error
// ============================================================================

/// Top-level error type for mockdown operations.
#[derive(Debug, Error)]
pub enum MockdownError {
    /// Field argument or document structure violation.
    #[error(transparent)]
    Schema(#[from] SchemaError),

    /// YAML parsing error.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON report serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Aggregate failure count from the validate command.
    #[error("{0} document(s) failed validation")]
    Validation(usize),
}

impl MockdownError {
    /// Returns the process exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Schema(_) | Self::Yaml(_) | Self::Validation(_) => ExitCode::SCHEMA_ERROR,
            Self::Io(_) => ExitCode::IO_ERROR,
            Self::Json(_) => ExitCode::ERROR,
        }
    }
}

/// Result type alias for mockdown operations.
pub type Result<T> = std::result::Result<T, MockdownError>;

// ============================================================================
// Tests
// ============================================================================

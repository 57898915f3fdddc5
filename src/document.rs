//! Wireframe document loading.
//!
//! A document is a YAML file whose root is a sequence of field nodes. The
//! loader only parses; structural checks happen in the render engine where
//! the offending node is known.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde_yaml::Value;
use tracing::debug;

use crate::error::Result;

/// Parses a wireframe document from YAML text.
///
/// An empty or all-comment document parses to YAML null and is treated as a
/// document with no fields.
///
/// # Errors
///
/// Returns [`crate::error::MockdownError::Yaml`] on malformed YAML.
pub fn from_str(text: &str) -> Result<Value> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let value: Value = serde_yaml::from_str(text)?;
    Ok(match value {
        Value::Null => Value::Sequence(Vec::new()),
        other => other,
    })
}

/// Reads and parses a wireframe document.
///
/// # Errors
///
/// Returns [`crate::error::MockdownError::Io`] on a read failure and
/// [`crate::error::MockdownError::Yaml`] on malformed YAML.
pub fn from_reader<R: Read>(mut reader: R) -> Result<Value> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    from_str(&text)
}

/// Loads a wireframe document from a file.
///
/// # Errors
///
/// Returns [`crate::error::MockdownError::Io`] when the file cannot be
/// opened or read and [`crate::error::MockdownError::Yaml`] on malformed
/// YAML.
pub fn load_path(path: &Path) -> Result<Value> {
    debug!(path = %path.display(), "loading document");
    from_reader(File::open(path)?)
}

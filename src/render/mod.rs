//! The recursive markup render engine.
//!
//! [`Renderer`] performs a depth-first, pre-order traversal of the field
//! node tree, writing HTML fragments directly to an append-only sink as it
//! descends. There is no intermediate document and no deferred evaluation;
//! re-rendering the same tree through a fresh renderer is byte-identical.
//!
//! Recursion depth is bounded only by the input tree; pathological depth is
//! the caller's responsibility.

mod table;
mod widgets;

use std::io::Write;

use serde_yaml::{Mapping, Value};
use tracing::{debug, warn};

use crate::error::{MockdownError, Result, SchemaError};
use crate::field::FieldKind;
use crate::params::kinds::{
    ButtonParams, CheckParams, ContainerParams, HeaderParams, InputParams, LinkParams,
    MultipleSelectParams, RadioParams, SelectParams, SpanParams, TableParams, TextAreaParams,
};
use crate::params::{KWARGS_KEY, extract, type_name};

/// Fixed document shell: style block plus Bootstrap stylesheet link.
pub const DOCUMENT_HEADER: &str = r#"<html>
<head>
  <meta charset="UTF-8"/>
  <style>
  table, th, td {
    border: 1px solid black;
    border-collapse: collapse;
  }

  table.disabled {
    border: 1px solid #CCC;
  }

  .disabled {
    color: #CCC;
  }
  input, select, table, textarea {
    width: 95%;
  }
  input[type=button], input[type=checkbox] {
    width: initial;
  }
  fieldset {
    padding: 15px 25px 35px 30px !important;
  }
  </style>
  <link href="https://cdn.jsdelivr.net/npm/bootstrap@5.0.0-beta1/dist/css/bootstrap.min.css" rel="stylesheet" integrity="sha384-giJF6kkoqNQ00vy+HMDP7azOuL0xtbfIcaT9wjKHr8RbDVddVHyTfAAsrekwKmP1" crossorigin="anonymous">
</head>
<body>
  <div class="container">
"#;

/// Fixed document footer closing the shell.
pub const DOCUMENT_FOOTER: &str = "
  </div>
  <br/>
</body>
</html>
";

/// Layout row shell wrapping one top-level field.
const ROW_OPEN: &str = "
    <div class=\"row\">
      <div class=\"col-md-8\">
";

/// Right-aligned variant of the layout row shell.
const ROW_OPEN_RIGHT: &str = "
    <div class=\"row\">
      <div class=\"col-md-8 justify-content-end d-flex\">
";

/// Closing markup shared by both row shell variants.
const ROW_CLOSE: &str = "      </div>
    </div><br/>
";

/// Writes wireframe markup for a field node tree to an output sink.
///
/// The sink is append-only and never read back. A schema violation anywhere
/// in the tree aborts the render with no partial-output guarantee beyond
/// what was already written.
#[derive(Debug)]
pub struct Renderer<W: Write> {
    out: W,
}

impl<W: Write> Renderer<W> {
    /// Creates a renderer writing to `out`.
    pub const fn new(out: W) -> Self {
        Self { out }
    }

    /// Consumes the renderer, returning the sink.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Renders a complete document: header, field rows, footer.
    ///
    /// # Errors
    ///
    /// Fails when the root is not a sequence, when any field violates its
    /// parameter contract, or on a sink write error.
    pub fn render_document(&mut self, document: &Value) -> Result<()> {
        let fields = document
            .as_sequence()
            .ok_or_else(|| SchemaError::DocumentShape {
                actual: type_name(document),
            })?;

        self.put(DOCUMENT_HEADER)?;
        self.render_fields(fields, true, &Mapping::new())?;
        self.put(DOCUMENT_FOOTER)?;
        Ok(())
    }

    /// Renders an ordered field list.
    ///
    /// In layout mode (document root) each field is wrapped in a row shell
    /// and the last field has `br=false` forced into its inherited
    /// defaults, suppressing the trailing break at the end of the layout.
    ///
    /// # Errors
    ///
    /// Propagates schema violations and sink write errors.
    pub fn render_fields(
        &mut self,
        fields: &[Value],
        layout: bool,
        defaults: &Mapping,
    ) -> Result<()> {
        let last = fields.len().saturating_sub(1);

        for (index, field) in fields.iter().enumerate() {
            if layout {
                if is_right_aligned(field) {
                    self.put(ROW_OPEN_RIGHT)?;
                } else {
                    self.put(ROW_OPEN)?;
                }
            }

            if layout && index == last {
                let mut defaults = defaults.clone();
                defaults.insert(Value::from("br"), Value::Bool(false));
                self.render_field(field, &defaults)?;
            } else {
                self.render_field(field, defaults)?;
            }

            if layout {
                self.put(ROW_CLOSE)?;
            }
        }

        Ok(())
    }

    /// Renders one field node: kind detection, extraction, defaults
    /// overlay, dispatch.
    ///
    /// An unrecognized field renders nothing. A field naming more than one
    /// kind renders only the first in scan order.
    ///
    /// # Errors
    ///
    /// Propagates schema violations and sink write errors.
    pub fn render_field(&mut self, field: &Value, defaults: &Mapping) -> Result<()> {
        let map = field.as_mapping().ok_or_else(|| SchemaError::FieldShape {
            actual: type_name(field),
        })?;

        let matches = FieldKind::matching(map);
        let Some(&kind) = matches.first() else {
            debug!("field has no recognized kind key, skipping");
            return Ok(());
        };
        if matches.len() > 1 {
            warn!(rendered = %kind, "field names more than one kind; rendering the first only");
        }

        let mut args = extract(kind, map.get(Value::from(kind.key())))?;
        args.apply_defaults(defaults);

        self.dispatch(kind, &args)
    }

    fn dispatch(&mut self, kind: FieldKind, args: &crate::params::FieldArgs) -> Result<()> {
        match kind {
            FieldKind::Br => Ok(()),
            FieldKind::Span => {
                let params = SpanParams::resolve(args)?;
                self.span_field(&params).map_err(MockdownError::Io)
            }
            FieldKind::Header => {
                let params = HeaderParams::resolve(args)?;
                self.header_field(&params).map_err(MockdownError::Io)
            }
            FieldKind::Text => {
                let params = InputParams::resolve(kind, args)?;
                self.text_field(&params).map_err(MockdownError::Io)
            }
            FieldKind::Finder => {
                let params = InputParams::resolve(kind, args)?;
                self.finder_field(&params).map_err(MockdownError::Io)
            }
            FieldKind::Select => {
                let params = SelectParams::resolve(args)?;
                self.select_field(&params)
            }
            FieldKind::Radio => {
                let params = RadioParams::resolve(args)?;
                self.radio_field(&params).map_err(MockdownError::Io)
            }
            FieldKind::Check => {
                let params = CheckParams::resolve(args)?;
                self.check_field(&params).map_err(MockdownError::Io)
            }
            FieldKind::MultipleSelect => {
                let params = MultipleSelectParams::resolve(args)?;
                self.multipleselect_field(&params)
            }
            FieldKind::Button => {
                let params = ButtonParams::resolve(args)?;
                self.button_field(&params)
            }
            FieldKind::Container => {
                let params = ContainerParams::resolve(args)?;
                self.container_field(&params, &args.positional)
            }
            FieldKind::TextArea => {
                let params = TextAreaParams::resolve(args)?;
                self.textarea_field(&params)
            }
            FieldKind::Table => {
                let params = TableParams::resolve(args)?;
                self.table_field(&params)
            }
            FieldKind::Link => {
                let params = LinkParams::resolve(args)?;
                self.link_field(&params).map_err(MockdownError::Io)
            }
        }
    }

    // ------------------------------------------------------------------
    // Low-level sink primitives
    // ------------------------------------------------------------------

    pub(crate) fn put(&mut self, fragment: &str) -> std::io::Result<()> {
        self.out.write_all(fragment.as_bytes())
    }

    pub(crate) fn put_line(&mut self, fragment: &str) -> std::io::Result<()> {
        self.put(fragment)?;
        self.put("\n")
    }

    pub(crate) fn put_break(&mut self, fragment: &str) -> std::io::Result<()> {
        self.put(fragment)?;
        self.put("<br/>")
    }

    pub(crate) fn put_break_line(&mut self, fragment: &str) -> std::io::Result<()> {
        self.put_break(fragment)?;
        self.put("\n")
    }
}

/// True when a top-level field is a container whose first argument element
/// carries `_kwargs.align: right`; such fields get the right-aligned row
/// shell.
fn is_right_aligned(field: &Value) -> bool {
    field
        .as_mapping()
        .and_then(|map| map.get(Value::from(FieldKind::Container.key())))
        .and_then(Value::as_sequence)
        .and_then(|children| children.first())
        .and_then(Value::as_mapping)
        .and_then(|first| first.get(Value::from(KWARGS_KEY)))
        .and_then(Value::as_mapping)
        .and_then(|kwargs| kwargs.get(Value::from("align")))
        .and_then(Value::as_str)
        == Some("right")
}

/// String form of a scalar cell or option value.
pub(crate) fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Null => String::new(),
        other => serde_yaml::to_string(other)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_default(),
    }
}

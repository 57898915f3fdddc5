//! Tabular markup shared by the `table` and `multipleselect` kinds.
//!
//! Columns arrive as a mapping from column name to a sequence of cells, in
//! author order. Row count comes from the first column; every column must
//! match it. A mapping cell is a nested field node and recurses through the
//! render engine with breaks suppressed.

use std::io::Write;

use serde_yaml::{Mapping, Value};

use crate::error::{Result, SchemaError};
use crate::field::FieldKind;
use crate::params::kinds::{MultipleSelectParams, TableParams};
use crate::params::resolve::require;
use crate::params::type_name;
use crate::render::{Renderer, scalar_text};

impl<W: Write> Renderer<W> {
    pub(crate) fn table_field(&mut self, params: &TableParams) -> Result<()> {
        let columns = require(FieldKind::Table, "columns", params.columns.as_ref())?;
        self.data_table(FieldKind::Table, columns, params.enabled, false, params.br)
    }

    /// Select-many control: label, an add-row input when enabled, then the
    /// table of current selections.
    pub(crate) fn multipleselect_field(&mut self, params: &MultipleSelectParams) -> Result<()> {
        const KIND: FieldKind = FieldKind::MultipleSelect;
        let columns = require(KIND, "columns", params.columns.as_ref())?;

        self.inline_label(params.label.as_deref(), &[], params.required, params.enabled)?;
        self.put_break_line("")?;
        if params.enabled {
            self.text_input(params.enabled, params.placeholder.as_deref())?;
            self.icon("plus")?;
            self.put_break_line("")?;
        }

        self.data_table(KIND, columns, params.enabled, params.editable, params.br)
    }

    /// Writes the table markup. An enabled table grows an Actions column
    /// with a per-row remove icon; an editable one wraps each cell in an
    /// edit affordance.
    fn data_table(
        &mut self,
        kind: FieldKind,
        columns: &Mapping,
        enabled: bool,
        editable: bool,
        br: bool,
    ) -> Result<()> {
        let cells = column_cells(kind, columns)?;

        self.put("<table")?;
        if !enabled {
            self.put(" class=\"disabled\"")?;
        }
        self.put_line(">")?;

        self.put_line("  <thead>")?;
        for (name, _) in &cells {
            self.put_line(&format!("    <td>{name}</td>"))?;
        }
        if enabled {
            self.put_line("    <td>Actions</td>")?;
        }
        self.put_line("  </thead>")?;

        let row_count = cells.first().map_or(0, |(_, cells)| cells.len());

        for row in 0..row_count {
            self.put_line("  <tr>")?;
            for (_, column) in &cells {
                let cell = &column[row];

                self.put("    <td>")?;
                if editable {
                    self.put("<div>")?;
                }
                if let Value::Mapping(_) = cell {
                    let mut defaults = Mapping::new();
                    defaults.insert(Value::from("br"), Value::Bool(false));
                    self.render_fields(std::slice::from_ref(cell), false, &defaults)?;
                } else {
                    self.put(&scalar_text(cell))?;
                }
                if editable {
                    self.icon("pencil")?;
                    self.put("</div>")?;
                }
                self.put_line("</td>")?;
            }

            if enabled {
                self.put("    <td>")?;
                self.icon("circle-x")?;
                self.put_line("</td>")?;
            }
            self.put_line("  </tr>")?;
        }

        self.put("</table>")?;
        if br {
            self.put("<br/>")?;
        }
        self.put("\n")?;
        Ok(())
    }
}

/// Checks every column holds a sequence of the same length as the first,
/// returning `(name, cells)` pairs in author order.
fn column_cells<'a>(
    kind: FieldKind,
    columns: &'a Mapping,
) -> std::result::Result<Vec<(String, &'a Vec<Value>)>, SchemaError> {
    let mut cells = Vec::with_capacity(columns.len());
    let mut expected = None;

    for (name, value) in columns {
        let name = scalar_text(name);
        let Value::Sequence(column) = value else {
            return Err(SchemaError::ColumnShape {
                kind,
                column: name,
                actual: type_name(value),
            });
        };

        match expected {
            None => expected = Some(column.len()),
            Some(expected) if expected != column.len() => {
                return Err(SchemaError::RowLength {
                    kind,
                    column: name,
                    expected,
                    actual: column.len(),
                });
            }
            Some(_) => {}
        }

        cells.push((name, column));
    }

    Ok(cells)
}

//! Per-kind widget markup.
//!
//! One method per field kind, plus the small helpers they share: the inline
//! label span, the text input control, static icon references, and optional
//! attributes. Markup is Bootstrap-flavored HTML written verbatim.

use std::io::{Result as IoResult, Write};

use serde_yaml::{Mapping, Value};

use crate::error::Result;
use crate::field::FieldKind;
use crate::params::kinds::{
    BUTTON_COLORS, ButtonParams, CheckParams, ContainerParams, Direction, HeaderParams,
    InputParams, LinkParams, RadioParams, SelectParams, SpanParams, TextAreaParams,
};
use crate::params::resolve::require;
use crate::render::{Renderer, scalar_text};

impl<W: Write> Renderer<W> {
    pub(crate) fn span_field(&mut self, params: &SpanParams) -> IoResult<()> {
        self.inline_label(params.label.as_deref(), &params.styles, false, true)?;
        if params.br {
            self.put("<br/>")?;
        }
        self.put("\n")
    }

    pub(crate) fn header_field(&mut self, params: &HeaderParams) -> IoResult<()> {
        let label = params.label.as_deref().unwrap_or_default();
        let level = params.level;
        self.put(&format!("<h{level}>{label}</h{level}>"))?;
        if params.br {
            self.put("<br/><br/>")?;
        }
        self.put("\n")
    }

    /// Single-line text input. The only kind without a trailing newline.
    pub(crate) fn text_field(&mut self, params: &InputParams) -> IoResult<()> {
        self.inline_label(params.label.as_deref(), &[], params.required, params.enabled)?;
        if params.label.as_deref().is_some_and(|label| !label.is_empty()) {
            self.put_break_line("")?;
        }
        self.put("<input")?;
        self.attr("placeholder", params.placeholder.as_deref())?;
        if !params.enabled {
            self.put(" disabled readonly")?;
        }
        self.put("/>")?;
        if params.br {
            self.put("<br/>")?;
        }
        Ok(())
    }

    pub(crate) fn finder_field(&mut self, params: &InputParams) -> IoResult<()> {
        self.inline_label(params.label.as_deref(), &[], params.required, params.enabled)?;
        self.text_input(params.enabled, params.placeholder.as_deref())?;
        self.icon("magnifying-glass")?;
        if params.br {
            self.put("<br/>")?;
        }
        self.put("\n")
    }

    pub(crate) fn select_field(&mut self, params: &SelectParams) -> Result<()> {
        let options = require(FieldKind::Select, "options", params.options.as_deref())?;

        self.inline_label(params.label.as_deref(), &[], params.required, params.enabled)?;
        self.put_break_line("")?;
        self.put("<select")?;
        if !params.enabled {
            self.put(" disabled readonly")?;
        }
        self.put_line(">")?;
        for option in options {
            self.put_line(&format!("  <option>{}</option>", scalar_text(option)))?;
        }
        self.put("</select>")?;
        if params.br {
            self.put("<br/>")?;
        }
        self.put("\n")?;
        Ok(())
    }

    pub(crate) fn radio_field(&mut self, params: &RadioParams) -> IoResult<()> {
        self.put("<label class=\"form-check-label\"><input class=\"form-check-input\" type=\"radio\" name=\"radio\"")?;
        if params.checked {
            self.put(" checked")?;
        }
        if !params.enabled {
            self.put(" disabled readonly")?;
        }
        let label = params.label.as_deref().unwrap_or_default();
        if params.required && params.enabled {
            self.put(&format!("> {label} *</label>"))?;
        } else {
            self.put(&format!("> {label}</label>"))?;
        }
        if params.br {
            self.put("<br/>")?;
        }
        self.put("\n")
    }

    pub(crate) fn check_field(&mut self, params: &CheckParams) -> IoResult<()> {
        self.put("<input type=\"checkbox\"")?;
        if params.checked {
            self.put(" checked=\"checked\"")?;
        }
        if !params.enabled {
            self.put(" disabled readonly")?;
        }
        match params.label.as_deref() {
            None | Some("") => self.put("/>")?,
            Some(label) => {
                self.put("><label")?;
                if !params.enabled {
                    self.put(" class=\"disabled\"")?;
                }
                self.put(&format!("> {label}</label></input>"))?;
            }
        }
        if params.br {
            self.put("<br/>")?;
        }
        self.put("\n")
    }

    pub(crate) fn button_field(&mut self, params: &ButtonParams) -> Result<()> {
        let text = require(FieldKind::Button, "text", params.text.as_deref())?;
        let class = BUTTON_COLORS
            .iter()
            .find(|(name, _)| *name == params.color)
            .map_or("primary", |(_, class)| class);

        self.put(&format!(
            "<input type=\"button\" value=\"{text}\" class=\"btn btn-{class}\""
        ))?;
        if !params.enabled {
            self.put(" disabled")?;
        }
        self.put("/>")?;
        if params.br {
            self.put("<br/>")?;
        }
        self.put("\n")?;
        Ok(())
    }

    /// Grouping container. Children come through the positional arguments,
    /// already validated as mappings; a vertical container forces a break
    /// after each child through the inherited defaults.
    pub(crate) fn container_field(
        &mut self,
        params: &ContainerParams,
        children: &[Value],
    ) -> Result<()> {
        let tag = if params.title.is_some() { "fieldset" } else { "div" };

        self.put(&format!("<{tag}"))?;
        if params.title.is_some() {
            self.put(" class=\"border\"")?;
        }
        if !params.enabled {
            self.put(" disabled")?;
        }
        self.put_line(">")?;
        if let Some(title) = &params.title {
            self.put_line(&format!("  <legend>{title}</legend>"))?;
        }

        let mut defaults = Mapping::new();
        defaults.insert(
            Value::from("br"),
            Value::Bool(params.direction == Direction::Vertical && params.br),
        );
        self.render_fields(children, false, &defaults)?;

        self.put(&format!("</{tag}>"))?;
        if params.br {
            self.put("<br/>")?;
        }
        self.put("\n")?;
        Ok(())
    }

    pub(crate) fn textarea_field(&mut self, params: &TextAreaParams) -> Result<()> {
        let placeholder = require(FieldKind::TextArea, "placeholder", params.placeholder.as_deref())?;

        self.inline_label(params.label.as_deref(), &[], params.required, params.enabled)?;
        self.put("<textarea rows=4 cols=50")?;
        self.attr("placeholder", Some(placeholder))?;
        if !params.enabled {
            self.put(" disabled readonly")?;
        }
        self.put("></textarea>")?;
        if params.br {
            self.put("<br/>")?;
        }
        self.put("\n")?;
        Ok(())
    }

    pub(crate) fn link_field(&mut self, params: &LinkParams) -> IoResult<()> {
        let href = params.href.as_deref().unwrap_or_default();
        self.put(&format!("<a href=\"{href}\">{href}</a>"))?;
        if params.br {
            self.put("<br/>")?;
        }
        self.put("\n")
    }

    // ------------------------------------------------------------------
    // Shared fragments
    // ------------------------------------------------------------------

    /// Inline label span. Renders nothing for an absent or empty label.
    /// A disabled control dims its label; an enabled required one gets the
    /// asterisk marker.
    pub(crate) fn inline_label(
        &mut self,
        label: Option<&str>,
        styles: &[String],
        required: bool,
        enabled: bool,
    ) -> IoResult<()> {
        let Some(label) = label.filter(|l| !l.is_empty()) else {
            return Ok(());
        };

        self.put("<span")?;
        if !styles.is_empty() {
            self.put(" style=\"")?;
            if styles.iter().any(|s| s == "overstrike") {
                self.put("text-decoration: line-through;")?;
            }
            self.put("\"")?;
        }
        if !enabled {
            self.put(" class=\"disabled\"")?;
        }
        self.put(&format!(">{label}"))?;
        if required && enabled {
            self.put(" *")?;
        }
        self.put("</span>")
    }

    pub(crate) fn text_input(&mut self, enabled: bool, placeholder: Option<&str>) -> IoResult<()> {
        self.put("<input")?;
        self.attr("placeholder", placeholder)?;
        if !enabled {
            self.put(" disabled readonly")?;
        }
        self.put("/>")
    }

    /// Optional attribute; empty values are dropped entirely.
    pub(crate) fn attr(&mut self, name: &str, value: Option<&str>) -> IoResult<()> {
        match value {
            Some(value) if !value.is_empty() => self.put(&format!(" {name}=\"{value}\"")),
            _ => Ok(()),
        }
    }

    /// Open Iconic glyph reference, matching the sketchy hand-drawn look.
    pub(crate) fn icon(&mut self, name: &str) -> IoResult<()> {
        self.put(&format!(
            " <img src=\"./open-iconic/svg/{name}.svg\" height=18 width=18/>"
        ))
    }
}

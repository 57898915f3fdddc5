//! Typed parameter structs, one per field kind.
//!
//! Each struct resolves its declared parameters from a [`FieldArgs`] pair
//! and nothing else; the render functions consume them fully resolved.
//! Parameters the renderer requires non-null are still optional here —
//! absence only becomes an error when the renderer reaches for the value.

use serde_yaml::{Mapping, Value};

use crate::error::SchemaError;
use crate::field::FieldKind;
use crate::params::FieldArgs;
use crate::params::resolve::{
    bool_or, ensure_mappings, int_or, opt_mapping, opt_sequence, opt_string, string_or,
};

/// Layout direction of a container's children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Children flow on one line; no forced breaks.
    Horizontal,
    /// Each child is followed by a forced line break.
    Vertical,
}

/// Parameters for the `span` kind.
#[derive(Debug, Clone)]
pub struct SpanParams {
    /// Visible label; nothing renders without it.
    pub label: Option<String>,
    /// Style flags parsed from a comma-separated string.
    pub styles: Vec<String>,
    /// Emit a trailing line break.
    pub br: bool,
}

impl SpanParams {
    /// Resolves span parameters.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError`] on a type violation.
    pub fn resolve(args: &FieldArgs) -> Result<Self, SchemaError> {
        const KIND: FieldKind = FieldKind::Span;
        let label = opt_string(KIND, args, "label")?.into_value();
        let styles = opt_string(KIND, args, "styles")?
            .into_value()
            .map(|s| s.split(',').map(str::to_string).collect())
            .unwrap_or_default();
        let br = bool_or(KIND, args, "br", true)?.into_value();
        Ok(Self { label, styles, br })
    }
}

/// Parameters for the `header` kind.
#[derive(Debug, Clone)]
pub struct HeaderParams {
    /// Heading level, 1 through 6.
    pub level: i64,
    /// Heading text.
    pub label: Option<String>,
    /// Emit a trailing double line break.
    pub br: bool,
}

impl HeaderParams {
    /// Resolves header parameters.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError`] on a type or range violation.
    pub fn resolve(args: &FieldArgs) -> Result<Self, SchemaError> {
        const KIND: FieldKind = FieldKind::Header;
        let level = int_or(KIND, args, "level", 1)?.within(KIND, "level", 1, 6)?;
        let label = opt_string(KIND, args, "label")?.into_value();
        let br = bool_or(KIND, args, "br", true)?.into_value();
        Ok(Self { level, label, br })
    }
}

/// Parameters shared by the `text` and `finder` kinds.
#[derive(Debug, Clone)]
pub struct InputParams {
    /// Label rendered before the input.
    pub label: Option<String>,
    /// Interactive when true; dimmed and readonly otherwise.
    pub enabled: bool,
    /// Placeholder attribute value.
    pub placeholder: Option<String>,
    /// Emit a trailing line break.
    pub br: bool,
    /// Show the required marker next to the label.
    pub required: bool,
}

impl InputParams {
    /// Resolves text/finder parameters; `kind` is used for error context.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError`] on a type violation.
    pub fn resolve(kind: FieldKind, args: &FieldArgs) -> Result<Self, SchemaError> {
        Ok(Self {
            label: opt_string(kind, args, "label")?.into_value(),
            enabled: bool_or(kind, args, "enabled", true)?.into_value(),
            placeholder: opt_string(kind, args, "placeholder")?.into_value(),
            br: bool_or(kind, args, "br", true)?.into_value(),
            required: bool_or(kind, args, "required", true)?.into_value(),
        })
    }
}

/// Parameters for the `select` kind.
#[derive(Debug, Clone)]
pub struct SelectParams {
    /// Label rendered before the choice list.
    pub label: Option<String>,
    /// Interactive when true.
    pub enabled: bool,
    /// Option values, rendered in given order. Required at render time.
    pub options: Option<Vec<Value>>,
    /// Emit a trailing line break.
    pub br: bool,
    /// Show the required marker next to the label.
    pub required: bool,
}

impl SelectParams {
    /// Resolves select parameters.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError`] on a type violation.
    pub fn resolve(args: &FieldArgs) -> Result<Self, SchemaError> {
        const KIND: FieldKind = FieldKind::Select;
        Ok(Self {
            label: opt_string(KIND, args, "label")?.into_value(),
            enabled: bool_or(KIND, args, "enabled", true)?.into_value(),
            options: opt_sequence(KIND, args, "options")?,
            br: bool_or(KIND, args, "br", true)?.into_value(),
            required: bool_or(KIND, args, "required", true)?.into_value(),
        })
    }
}

/// Parameters for the `radio` kind.
#[derive(Debug, Clone)]
pub struct RadioParams {
    /// Label rendered inside the control.
    pub label: Option<String>,
    /// Interactive when true.
    pub enabled: bool,
    /// Pre-selected state.
    pub checked: bool,
    /// Emit a trailing line break.
    pub br: bool,
    /// Show the required marker next to the label.
    pub required: bool,
}

impl RadioParams {
    /// Resolves radio parameters.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError`] on a type violation.
    pub fn resolve(args: &FieldArgs) -> Result<Self, SchemaError> {
        const KIND: FieldKind = FieldKind::Radio;
        Ok(Self {
            label: opt_string(KIND, args, "label")?.into_value(),
            enabled: bool_or(KIND, args, "enabled", true)?.into_value(),
            checked: bool_or(KIND, args, "checked", false)?.into_value(),
            br: bool_or(KIND, args, "br", true)?.into_value(),
            required: bool_or(KIND, args, "required", true)?.into_value(),
        })
    }
}

/// Parameters for the `check` kind.
#[derive(Debug, Clone)]
pub struct CheckParams {
    /// Label; a bare self-closing control renders without one.
    pub label: Option<String>,
    /// Interactive when true.
    pub enabled: bool,
    /// Pre-checked state.
    pub checked: bool,
    /// Emit a trailing line break.
    pub br: bool,
}

impl CheckParams {
    /// Resolves checkbox parameters.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError`] on a type violation.
    pub fn resolve(args: &FieldArgs) -> Result<Self, SchemaError> {
        const KIND: FieldKind = FieldKind::Check;
        Ok(Self {
            label: opt_string(KIND, args, "label")?.into_value(),
            enabled: bool_or(KIND, args, "enabled", true)?.into_value(),
            checked: bool_or(KIND, args, "checked", false)?.into_value(),
            br: bool_or(KIND, args, "br", true)?.into_value(),
        })
    }
}

/// Parameters for the `multipleselect` kind.
#[derive(Debug, Clone)]
pub struct MultipleSelectParams {
    /// Column name to cell sequence mapping. Required at render time.
    pub columns: Option<Mapping>,
    /// Label rendered before the control.
    pub label: Option<String>,
    /// Interactive when true; disables the add-row affordance otherwise.
    pub enabled: bool,
    /// Wrap cells in an edit affordance.
    pub editable: bool,
    /// Placeholder for the add-row input.
    pub placeholder: Option<String>,
    /// Emit a trailing line break after the table.
    pub br: bool,
    /// Show the required marker next to the label.
    pub required: bool,
}

impl MultipleSelectParams {
    /// Resolves multipleselect parameters.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError`] on a type violation.
    pub fn resolve(args: &FieldArgs) -> Result<Self, SchemaError> {
        const KIND: FieldKind = FieldKind::MultipleSelect;
        Ok(Self {
            columns: opt_mapping(KIND, args, "columns")?,
            label: opt_string(KIND, args, "label")?.into_value(),
            enabled: bool_or(KIND, args, "enabled", true)?.into_value(),
            editable: bool_or(KIND, args, "editable", false)?.into_value(),
            placeholder: opt_string(KIND, args, "placeholder")?.into_value(),
            br: bool_or(KIND, args, "br", true)?.into_value(),
            required: bool_or(KIND, args, "required", true)?.into_value(),
        })
    }
}

/// Button color names and their Bootstrap classes.
pub const BUTTON_COLORS: [(&str, &str); 5] = [
    ("blue", "primary"),
    ("green", "success"),
    ("yellow", "warning"),
    ("red", "danger"),
    ("gray", "secondary"),
];

/// Parameters for the `button` kind.
#[derive(Debug, Clone)]
pub struct ButtonParams {
    /// Button caption. Required at render time.
    pub text: Option<String>,
    /// Interactive when true.
    pub enabled: bool,
    /// Color name from [`BUTTON_COLORS`].
    pub color: String,
    /// Emit a trailing line break.
    pub br: bool,
}

impl ButtonParams {
    /// Resolves button parameters.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError`] on a type violation or a color outside the
    /// closed set.
    pub fn resolve(args: &FieldArgs) -> Result<Self, SchemaError> {
        const KIND: FieldKind = FieldKind::Button;
        let names: Vec<&str> = BUTTON_COLORS.iter().map(|(name, _)| *name).collect();
        Ok(Self {
            text: opt_string(KIND, args, "text")?.into_value(),
            enabled: bool_or(KIND, args, "enabled", true)?.into_value(),
            color: string_or(KIND, args, "color", "blue")?.one_of(KIND, "color", &names)?,
            br: bool_or(KIND, args, "br", true)?.into_value(),
        })
    }
}

/// Parameters for the `container` kind.
///
/// Children arrive through the positional arguments and are validated as
/// mappings here; the renderer recurses into them.
#[derive(Debug, Clone)]
pub struct ContainerParams {
    /// Child layout direction.
    pub direction: Direction,
    /// Legend text; a titled container renders as a bordered fieldset.
    pub title: Option<String>,
    /// Interactive when true.
    pub enabled: bool,
    /// Emit a trailing line break after the closing tag.
    pub br: bool,
}

impl ContainerParams {
    /// Resolves container parameters and validates every child shape.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError`] on a type violation, a direction outside the
    /// closed set, or a non-mapping child.
    pub fn resolve(args: &FieldArgs) -> Result<Self, SchemaError> {
        const KIND: FieldKind = FieldKind::Container;
        ensure_mappings(KIND, args)?;
        let direction = string_or(KIND, args, "direction", "horizontal")?.one_of(
            KIND,
            "direction",
            &["horizontal", "vertical"],
        )?;
        let direction = if direction == "vertical" {
            Direction::Vertical
        } else {
            Direction::Horizontal
        };
        Ok(Self {
            direction,
            title: opt_string(KIND, args, "title")?.into_value(),
            enabled: bool_or(KIND, args, "enabled", true)?.into_value(),
            br: bool_or(KIND, args, "br", true)?.into_value(),
        })
    }
}

/// Parameters for the `textarea` kind.
#[derive(Debug, Clone)]
pub struct TextAreaParams {
    /// Placeholder attribute value. Required at render time.
    pub placeholder: Option<String>,
    /// Label rendered before the control.
    pub label: Option<String>,
    /// Interactive when true.
    pub enabled: bool,
    /// Emit a trailing line break.
    pub br: bool,
    /// Show the required marker next to the label.
    pub required: bool,
}

impl TextAreaParams {
    /// Resolves textarea parameters.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError`] on a type violation.
    pub fn resolve(args: &FieldArgs) -> Result<Self, SchemaError> {
        const KIND: FieldKind = FieldKind::TextArea;
        Ok(Self {
            placeholder: opt_string(KIND, args, "placeholder")?.into_value(),
            label: opt_string(KIND, args, "label")?.into_value(),
            enabled: bool_or(KIND, args, "enabled", true)?.into_value(),
            br: bool_or(KIND, args, "br", true)?.into_value(),
            required: bool_or(KIND, args, "required", true)?.into_value(),
        })
    }
}

/// Parameters for the `table` kind.
#[derive(Debug, Clone)]
pub struct TableParams {
    /// Accepted and validated but not emitted by the table renderer.
    pub title: Option<String>,
    /// Interactive when true; controls the Actions column.
    pub enabled: bool,
    /// Column name to cell sequence mapping. Required at render time.
    pub columns: Option<Mapping>,
    /// Emit a trailing line break after the table.
    pub br: bool,
}

impl TableParams {
    /// Resolves table parameters.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError`] on a type violation.
    pub fn resolve(args: &FieldArgs) -> Result<Self, SchemaError> {
        const KIND: FieldKind = FieldKind::Table;
        Ok(Self {
            title: opt_string(KIND, args, "title")?.into_value(),
            enabled: bool_or(KIND, args, "enabled", true)?.into_value(),
            columns: opt_mapping(KIND, args, "columns")?,
            br: bool_or(KIND, args, "br", true)?.into_value(),
        })
    }
}

/// Parameters for the `link` kind.
#[derive(Debug, Clone)]
pub struct LinkParams {
    /// Target; also used as the visible anchor text.
    pub href: Option<String>,
    /// Emit a trailing line break.
    pub br: bool,
}

impl LinkParams {
    /// Resolves link parameters.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError`] on a type violation.
    pub fn resolve(args: &FieldArgs) -> Result<Self, SchemaError> {
        const KIND: FieldKind = FieldKind::Link;
        Ok(Self {
            href: opt_string(KIND, args, "href")?.into_value(),
            br: bool_or(KIND, args, "br", true)?.into_value(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::extract;

    fn args(kind: FieldKind, yaml: &str) -> FieldArgs {
        let entry: Value = serde_yaml::from_str(yaml).unwrap();
        extract(kind, Some(&entry)).unwrap()
    }

    #[test]
    fn test_span_defaults() {
        let p = SpanParams::resolve(&FieldArgs::default()).unwrap();
        assert_eq!(p.label, None);
        assert!(p.styles.is_empty());
        assert!(p.br);
    }

    #[test]
    fn test_span_styles_split_on_commas() {
        let p = SpanParams::resolve(&args(FieldKind::Span, "styles: overstrike,bold")).unwrap();
        assert_eq!(p.styles, vec!["overstrike", "bold"]);
    }

    #[test]
    fn test_header_level_default_and_range() {
        let p = HeaderParams::resolve(&args(FieldKind::Header, "label: Title")).unwrap();
        assert_eq!(p.level, 1);

        let err = HeaderParams::resolve(&args(FieldKind::Header, "level: 0"));
        assert!(matches!(err, Err(SchemaError::OutOfRange { .. })));
    }

    #[test]
    fn test_input_params_defaults() {
        let p = InputParams::resolve(FieldKind::Text, &FieldArgs::default()).unwrap();
        assert!(p.enabled);
        assert!(p.br);
        assert!(p.required);
        assert_eq!(p.placeholder, None);
    }

    #[test]
    fn test_select_without_options_resolves() {
        // Required non-null at render time, but resolution never raises
        let p = SelectParams::resolve(&args(FieldKind::Select, "label: L")).unwrap();
        assert!(p.options.is_none());
    }

    #[test]
    fn test_select_options_order_preserved() {
        let p = SelectParams::resolve(&args(FieldKind::Select, "options: [b, a, c]")).unwrap();
        let order: Vec<_> = p
            .options
            .unwrap()
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect();
        assert_eq!(order, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_button_color_validation() {
        let p = ButtonParams::resolve(&args(FieldKind::Button, "text: OK\ncolor: red")).unwrap();
        assert_eq!(p.color, "red");

        let err = ButtonParams::resolve(&args(FieldKind::Button, "text: OK\ncolor: purple"));
        assert!(matches!(err, Err(SchemaError::NotAllowed { .. })));
    }

    #[test]
    fn test_button_text_absent_resolves() {
        let p = ButtonParams::resolve(&FieldArgs::default()).unwrap();
        assert!(p.text.is_none());
        assert_eq!(p.color, "blue");
    }

    #[test]
    fn test_container_direction_default() {
        let p = ContainerParams::resolve(&FieldArgs::default()).unwrap();
        assert_eq!(p.direction, Direction::Horizontal);
    }

    #[test]
    fn test_container_rejects_unknown_direction() {
        let entry: Value =
            serde_yaml::from_str("- _kwargs:\n    direction: diagonal\n- check:").unwrap();
        let a = extract(FieldKind::Container, Some(&entry)).unwrap();
        assert!(matches!(
            ContainerParams::resolve(&a),
            Err(SchemaError::NotAllowed { param: "direction", .. })
        ));
    }

    #[test]
    fn test_container_rejects_scalar_child() {
        let entry: Value = serde_yaml::from_str("- not a field").unwrap();
        let a = extract(FieldKind::Container, Some(&entry)).unwrap();
        assert!(matches!(
            ContainerParams::resolve(&a),
            Err(SchemaError::ChildShape { .. })
        ));
    }

    #[test]
    fn test_multipleselect_editable_default() {
        let p = MultipleSelectParams::resolve(&args(FieldKind::MultipleSelect, "columns: {}"))
            .unwrap();
        assert!(!p.editable);
        assert!(p.columns.is_some());
    }

    #[test]
    fn test_table_columns_wrong_type_fails() {
        let err = TableParams::resolve(&args(FieldKind::Table, "columns: [a, b]"));
        assert!(matches!(
            err,
            Err(SchemaError::TypeMismatch { param: "columns", expected: "mapping", .. })
        ));
    }

    #[test]
    fn test_link_defaults() {
        let p = LinkParams::resolve(&FieldArgs::default()).unwrap();
        assert!(p.href.is_none());
        assert!(p.br);
    }
}

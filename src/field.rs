//! The closed set of wireframe field kinds.
//!
//! A field node is a YAML mapping naming exactly one rendering kind and its
//! arguments. The kind set is closed: there is no registration mechanism,
//! and dispatch is an exhaustive match over this enum.

use serde_yaml::{Mapping, Value};

/// One of the closed set of wireframe field kinds.
///
/// The variant order is load-bearing: when a field mapping carries more
/// than one recognized kind key, the first kind in [`FieldKind::ALL`] wins
/// and the rest are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// Explicit line-break placeholder; renders nothing.
    Br,
    /// Inline labeled marker, optionally struck through.
    Span,
    /// Heading of level 1-6.
    Header,
    /// Labeled single-line input.
    Text,
    /// Single-line input with a search-icon affordance.
    Finder,
    /// Choice list populated from an option sequence.
    Select,
    /// Radio input with a label.
    Radio,
    /// Checkbox, bare or labeled.
    Check,
    /// Add-row affordance plus a data table.
    MultipleSelect,
    /// Clickable control with a color class.
    Button,
    /// Grouping element that recurses into child fields.
    Container,
    /// Multi-line input.
    TextArea,
    /// Data table rendered from a column mapping.
    Table,
    /// Anchor whose visible text equals its href.
    Link,
}

impl FieldKind {
    /// Every kind, in the fixed first-match-wins scan order.
    pub const ALL: [Self; 14] = [
        Self::Br,
        Self::Span,
        Self::Header,
        Self::Text,
        Self::Finder,
        Self::Select,
        Self::Radio,
        Self::Check,
        Self::MultipleSelect,
        Self::Button,
        Self::Container,
        Self::TextArea,
        Self::Table,
        Self::Link,
    ];

    /// The YAML key naming this kind in a field mapping.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Br => "br",
            Self::Span => "span",
            Self::Header => "header",
            Self::Text => "text",
            Self::Finder => "finder",
            Self::Select => "select",
            Self::Radio => "radio",
            Self::Check => "check",
            Self::MultipleSelect => "multipleselect",
            Self::Button => "button",
            Self::Container => "container",
            Self::TextArea => "textarea",
            Self::Table => "table",
            Self::Link => "link",
        }
    }

    /// Returns every kind whose key is present in `field`, in scan order.
    ///
    /// An empty result means the field is unrecognized and renders nothing;
    /// more than one entry means the field is ambiguous and only the first
    /// is rendered.
    #[must_use]
    pub fn matching(field: &Mapping) -> Vec<Self> {
        Self::ALL
            .iter()
            .copied()
            .filter(|kind| field.get(Value::from(kind.key())).is_some())
            .collect()
    }
}

impl std::fmt::Display for FieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

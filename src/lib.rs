//! mockdown: YAML wireframe documents rendered to static HTML mockups.
//!
//! A wireframe document is a YAML sequence of field nodes. Each node names
//! one field kind (text input, select, table, container, ...) and carries
//! its arguments in positional or named form; the render engine walks the
//! tree depth-first and writes Bootstrap-flavored HTML in a single pass.
//!
//! ```no_run
//! use mockdown::render::Renderer;
//!
//! let document = mockdown::document::from_str("- header:\n    label: Pets")?;
//! let mut renderer = Renderer::new(Vec::new());
//! renderer.render_document(&document)?;
//! let html = String::from_utf8(renderer.into_inner()).unwrap();
//! # Ok::<(), mockdown::error::MockdownError>(())
//! ```

pub mod cli;
pub mod document;
pub mod error;
pub mod field;
pub mod observability;
pub mod params;
pub mod render;

pub use error::{MockdownError, Result};
pub use field::FieldKind;
pub use render::Renderer;

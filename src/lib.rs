//! javadoc-md — generate Markdown from Javadoc, PHPDoc and JSDoc comments.
//!
//! The pipeline locates `/** ... */` comments and the declaration following
//! each one, splits every comment into a description and `@tag` entries,
//! groups the tags (Parameters, Returns, ...) and assembles a Markdown
//! document:
//!
//! ```text
//! source ─▶ parser::sections ─▶ parser::{declaration, comment}
//!        ─▶ render::tags ─▶ render::markdown ─▶ Markdown
//! ```
//!
//! [`convert`] is the entry point; [`batch`] handles whole directories.

pub mod batch;
pub mod clean;
pub mod error;
pub mod language;
pub mod model;
pub mod parser;
pub mod render;

pub use error::{Error, Result};
pub use language::{convert, registry, Converter, Registry};
pub use render::tags::TagRenderer;
pub use render::types::{JsTypes, PhpTypes, TypeFormatter};

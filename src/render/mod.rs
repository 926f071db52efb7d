//! Rendering: tag groups and Markdown assembly.

pub mod markdown;
pub mod tags;
pub mod types;

/// Wrap `text` in a Markdown inline code span.
pub(crate) fn code_span(text: &str) -> String {
    format!("`{}`", text)
}

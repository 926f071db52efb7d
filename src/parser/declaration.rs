//! Reduce a declaration fragment to a single heading label.

use crate::clean::clean_single_line;

/// Text before any `{` or `;`, flattened onto one clean line.
///
/// An empty result means the section has nothing to document.
pub fn format(declaration: &str) -> String {
    let end = declaration.find(['{', ';']).unwrap_or(declaration.len());
    clean_single_line(&declaration[..end])
}

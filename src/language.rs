//! Language registry — dispatch by case-insensitive language name.

use crate::error::{Error, Result};
use crate::parser::sections;
use crate::render::markdown;
use crate::render::tags::TagRenderer;
use crate::render::types::{JsTypes, PhpTypes};
use std::collections::BTreeMap;
use std::sync::LazyLock;

static DEFAULT_REGISTRY: LazyLock<Registry> = LazyLock::new(Registry::default);

/// Runs the extraction and rendering pipeline for one doc comment flavor.
#[derive(Debug, Clone)]
pub struct Converter {
    renderer: TagRenderer,
}

impl Converter {
    pub fn new(renderer: TagRenderer) -> Self {
        Self { renderer }
    }

    pub fn renderer(&self) -> &TagRenderer {
        &self.renderer
    }

    /// Convert source code to a Markdown document.
    pub fn convert(&self, code: &str, headings_level: usize) -> String {
        let sections = sections::extract(code);
        markdown::render_document(&sections, headings_level, &self.renderer)
    }
}

/// Converters keyed by lowercase language name.
#[derive(Debug, Clone)]
pub struct Registry {
    converters: BTreeMap<String, Converter>,
}

impl Default for Registry {
    /// `javadoc`, `phpdoc` and `jsdoc`.
    fn default() -> Self {
        let mut registry = Registry::empty();
        registry.register("javadoc", Converter::new(TagRenderer::StaticTyped));
        registry.register("phpdoc", Converter::new(TagRenderer::dynamic(PhpTypes)));
        registry.register("jsdoc", Converter::new(TagRenderer::dynamic(JsTypes)));
        registry
    }
}

impl Registry {
    pub fn empty() -> Self {
        Self {
            converters: BTreeMap::new(),
        }
    }

    /// Register `converter` under `name`, replacing and returning any
    /// previous converter of that name.
    pub fn register(&mut self, name: &str, converter: Converter) -> Option<Converter> {
        self.converters.insert(name.to_lowercase(), converter)
    }

    /// Look up a converter, ignoring case.
    pub fn get(&self, language: &str) -> Result<&Converter> {
        self.converters
            .get(&language.to_lowercase())
            .ok_or_else(|| Error::UnsupportedLanguage(language.to_string()))
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.converters.keys().map(String::as_str)
    }

    pub fn convert(&self, language: &str, code: &str, headings_level: usize) -> Result<String> {
        Ok(self.get(language)?.convert(code, headings_level))
    }
}

/// The built-in registry.
pub fn registry() -> &'static Registry {
    &DEFAULT_REGISTRY
}

/// Convert `code` written with `language` doc comments to Markdown.
///
/// Fails only when `language` is not registered; malformed comments always
/// produce a best-effort document.
pub fn convert(language: &str, code: &str, headings_level: usize) -> Result<String> {
    registry().convert(language, code, headings_level)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::types::TypeFormatter;

    #[test]
    fn lookup_ignores_case() {
        let registry = Registry::default();
        let lower = registry.get("phpdoc").unwrap();
        assert!(std::ptr::eq(lower, registry.get("PHPDoc").unwrap()));
        assert!(std::ptr::eq(lower, registry.get("PHPDOC").unwrap()));
    }

    #[test]
    fn unknown_language_names_the_request() {
        let err = convert("unknownLang", "", 1).unwrap_err();
        assert!(matches!(err, Error::UnsupportedLanguage(ref name) if name == "unknownLang"));
        assert!(err.to_string().contains("unknownLang"));
    }

    #[test]
    fn default_names() {
        let names: Vec<_> = registry().names().collect();
        assert_eq!(names, vec!["javadoc", "jsdoc", "phpdoc"]);
    }

    struct Bare;

    impl TypeFormatter for Bare {
        fn format_type(&self, ty: &str) -> String {
            ty.to_string()
        }

        fn format_type_and_name(&self, ty: &str, name: &str) -> String {
            format!("{}: {}", name, ty)
        }
    }

    #[test]
    fn register_custom_language() {
        let mut registry = Registry::default();
        let previous = registry.register("TSDoc", Converter::new(TagRenderer::dynamic(Bare)));
        assert!(previous.is_none());

        let md = registry
            .convert("tsdoc", "/** @param {T} item the item */ function push(item)", 1)
            .unwrap();
        assert_eq!(
            md,
            "# Documentation\n\n## `function push(item)`\n\n * **Parameters:** item: {T} — the item\n"
        );
    }
}

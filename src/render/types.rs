//! Type annotation formatters for dynamically typed doc comment flavors.
//!
//! PHPDoc writes `@param string $name desc`, JSDoc writes
//! `@param {string} name desc`. When the expected shape is not found the
//! misplaced first token is shown as the type and the name is dropped.

use super::code_span;
use regex::Regex;
use std::sync::LazyLock;

static RE_PHP_VARIABLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\$[A-Za-z0-9_$]+$").unwrap());

static RE_JS_TYPE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\{[^{}]+\}$").unwrap());

/// Formats type tokens embedded in doc comments.
pub trait TypeFormatter: Send + Sync {
    /// Render a bare type, e.g. the type of a `@return`.
    fn format_type(&self, ty: &str) -> String;

    /// Render a `@param` type and name pair.
    fn format_type_and_name(&self, ty: &str, name: &str) -> String;
}

/// PHPDoc: `string $name`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PhpTypes;

impl TypeFormatter for PhpTypes {
    fn format_type(&self, ty: &str) -> String {
        code_span(ty)
    }

    fn format_type_and_name(&self, ty: &str, name: &str) -> String {
        if RE_PHP_VARIABLE.is_match(name) {
            format!("{} — {}", code_span(name), code_span(ty))
        } else {
            code_span(ty)
        }
    }
}

/// JSDoc: `{string} name`.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsTypes;

impl TypeFormatter for JsTypes {
    fn format_type(&self, ty: &str) -> String {
        code_span(strip_braces(ty))
    }

    fn format_type_and_name(&self, ty: &str, name: &str) -> String {
        if RE_JS_TYPE.is_match(ty) {
            format!("{} — {}", code_span(name), code_span(strip_braces(ty)))
        } else {
            code_span(ty)
        }
    }
}

fn strip_braces(ty: &str) -> &str {
    ty.strip_prefix('{')
        .and_then(|inner| inner.strip_suffix('}'))
        .unwrap_or(ty)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn php_type_and_name() {
        assert_eq!(
            PhpTypes.format_type_and_name("string", "$name"),
            "`$name` — `string`"
        );
    }

    #[test]
    fn php_missing_variable_falls_back_to_first_token() {
        assert_eq!(PhpTypes.format_type_and_name("$name", "the"), "`$name`");
    }

    #[test]
    fn js_type() {
        assert_eq!(JsTypes.format_type("{string}"), "`string`");
        assert_eq!(JsTypes.format_type("{Array.<number>}"), "`Array.<number>`");
    }

    #[test]
    fn js_type_without_braces_is_verbatim() {
        assert_eq!(JsTypes.format_type("string"), "`string`");
    }

    #[test]
    fn js_type_and_name() {
        assert_eq!(
            JsTypes.format_type_and_name("{number}", "count"),
            "`count` — `number`"
        );
    }

    #[test]
    fn js_malformed_param_falls_back_to_first_token() {
        assert_eq!(JsTypes.format_type_and_name("foo", "bar"), "`foo`");
        assert_eq!(JsTypes.format_type_and_name("{}", "bar"), "`{}`");
    }
}

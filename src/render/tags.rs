//! Map parsed tags onto named Markdown groups.

use super::code_span;
use super::types::TypeFormatter;
use crate::clean::tokenize;
use crate::model::{Entry, Tag, TagGroups};
use std::fmt;
use std::sync::Arc;

/// How tag values are turned into group entries.
#[derive(Clone)]
pub enum TagRenderer {
    /// Types live in the source, not the comment (Javadoc):
    /// `@param name description`.
    StaticTyped,
    /// The comment carries type annotations (PHPDoc, JSDoc):
    /// `@param type name description`.
    DynamicTyped(Arc<dyn TypeFormatter>),
}

impl fmt::Debug for TagRenderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TagRenderer::StaticTyped => f.write_str("StaticTyped"),
            TagRenderer::DynamicTyped(_) => f.write_str("DynamicTyped(..)"),
        }
    }
}

impl TagRenderer {
    pub fn dynamic(formatter: impl TypeFormatter + 'static) -> Self {
        TagRenderer::DynamicTyped(Arc::new(formatter))
    }

    /// Group all recognized tags; unknown keys are dropped.
    pub fn render(&self, tags: &[Tag]) -> TagGroups {
        let mut groups = TagGroups::default();
        for tag in tags {
            if let Some((group, entry)) = self.render_tag(tag) {
                groups.push(group, entry);
            }
        }
        groups
    }

    fn render_tag(&self, tag: &Tag) -> Option<(&'static str, Entry)> {
        let value = tag.value.as_str();
        let text = || Entry::Text(value.to_string());

        let rendered = match tag.key.as_str() {
            "abstract" => ("Abstract", text()),
            "access" => ("Access", text()),
            "alias" | "name" => ("Alias", text()),
            "author" => ("Author", text()),
            "constructor" => ("Constructor", Entry::Flag),
            "copyright" => ("Copyright", text()),
            "deprec" | "deprecated" => ("Deprecated", Entry::Flag),
            "example" => ("Example", text()),
            "exception" | "throws" => ("Exceptions", self.typed(value)),
            "exports" => ("Exports", text()),
            "license" => ("License", text()),
            "link" => ("Link", text()),
            "package" => ("Package", text()),
            "param" => ("Parameters", self.param(value)),
            "private" => ("Private", Entry::Flag),
            "return" | "returns" => match self {
                TagRenderer::StaticTyped => ("Returns", text()),
                TagRenderer::DynamicTyped(_) => ("Returns", self.typed(value)),
            },
            "see" => ("See also", text()),
            "since" => ("Since", text()),
            "static" => ("Static", text()),
            "subpackage" => ("Sub-package", text()),
            "this" => ("This", non_blank(value, || code_span(value))),
            "todo" => ("To-do", text()),
            "var" => match self {
                TagRenderer::StaticTyped => return None,
                TagRenderer::DynamicTyped(_) => ("Type", self.typed(value)),
            },
            "version" => ("Version", text()),
            _ => return None,
        };
        Some(rendered)
    }

    /// `type description`
    fn typed(&self, value: &str) -> Entry {
        non_blank(value, || {
            let tokens = tokenize(value, 2);
            let ty = match self {
                TagRenderer::StaticTyped => code_span(tokens[0]),
                TagRenderer::DynamicTyped(types) => types.format_type(tokens[0]),
            };
            format!("{} — {}", ty, tokens[1])
        })
    }

    /// `name description` or `type name description`
    fn param(&self, value: &str) -> Entry {
        match self {
            TagRenderer::StaticTyped => self.typed(value),
            TagRenderer::DynamicTyped(types) => non_blank(value, || {
                let tokens = tokenize(value, 3);
                format!(
                    "{} — {}",
                    types.format_type_and_name(tokens[0], tokens[1]),
                    tokens[2]
                )
            }),
        }
    }
}

fn non_blank(value: &str, render: impl FnOnce() -> String) -> Entry {
    if value.trim().is_empty() {
        Entry::Text(String::new())
    } else {
        Entry::Text(render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::types::{JsTypes, PhpTypes};

    fn tag(key: &str, value: &str) -> Tag {
        Tag {
            key: key.to_string(),
            value: value.to_string(),
        }
    }

    fn text(s: &str) -> Entry {
        Entry::Text(s.to_string())
    }

    #[test]
    fn static_param() {
        let groups = TagRenderer::StaticTyped.render(&[tag("param", "foo description text")]);
        assert_eq!(groups.get("Parameters"), Some(&[text("`foo` — description text")][..]));
    }

    #[test]
    fn static_throws_and_return() {
        let groups = TagRenderer::StaticTyped.render(&[
            tag("throws", "IOException if reading fails"),
            tag("return", "the count"),
        ]);
        assert_eq!(
            groups.get("Exceptions"),
            Some(&[text("`IOException` — if reading fails")][..])
        );
        assert_eq!(groups.get("Returns"), Some(&[text("the count")][..]));
    }

    #[test]
    fn presence_only_tags_ignore_text() {
        let groups = TagRenderer::StaticTyped.render(&[
            tag("constructor", "creates things"),
            tag("deprecated", "use bar instead"),
            tag("private", ""),
        ]);
        assert_eq!(groups.get("Constructor"), Some(&[Entry::Flag][..]));
        assert_eq!(groups.get("Deprecated"), Some(&[Entry::Flag][..]));
        assert_eq!(groups.get("Private"), Some(&[Entry::Flag][..]));
    }

    #[test]
    fn unknown_and_wrong_case_keys_are_dropped() {
        let groups = TagRenderer::StaticTyped.render(&[
            tag("inheritDoc", ""),
            tag("Param", "x y"),
            tag("var", "int count"),
        ]);
        assert!(groups.is_empty());
    }

    #[test]
    fn aliases_share_a_group() {
        let groups = TagRenderer::StaticTyped.render(&[
            tag("return", "a"),
            tag("returns", "b"),
            tag("exception", "E1 x"),
            tag("throws", "E2 y"),
        ]);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups.get("Returns"), Some(&[text("a"), text("b")][..]));
    }

    #[test]
    fn php_param_return_and_var() {
        let renderer = TagRenderer::dynamic(PhpTypes);
        let groups = renderer.render(&[
            tag("param", "int $count how many items"),
            tag("return", "bool whether it worked"),
            tag("var", "string the label"),
        ]);
        assert_eq!(
            groups.get("Parameters"),
            Some(&[text("`$count` — `int` — how many items")][..])
        );
        assert_eq!(groups.get("Returns"), Some(&[text("`bool` — whether it worked")][..]));
        assert_eq!(groups.get("Type"), Some(&[text("`string` — the label")][..]));
    }

    #[test]
    fn js_param() {
        let renderer = TagRenderer::dynamic(JsTypes);
        let groups = renderer.render(&[
            tag("param", "{string} name the user name"),
            tag("param", "foo bar baz"),
            tag("returns", "{number} the total"),
        ]);
        assert_eq!(
            groups.get("Parameters"),
            Some(&[text("`name` — `string` — the user name"), text("`foo` — baz")][..])
        );
        assert_eq!(groups.get("Returns"), Some(&[text("`number` — the total")][..]));
    }

    #[test]
    fn blank_values_render_empty() {
        let groups = TagRenderer::dynamic(JsTypes).render(&[
            tag("param", ""),
            tag("returns", "  "),
            tag("this", ""),
        ]);
        assert_eq!(groups.get("Parameters"), Some(&[text("")][..]));
        assert_eq!(groups.get("Returns"), Some(&[text("")][..]));
        assert_eq!(groups.get("This"), Some(&[text("")][..]));
    }

    #[test]
    fn this_is_code() {
        let groups = TagRenderer::StaticTyped.render(&[tag("this", "Widget")]);
        assert_eq!(groups.get("This"), Some(&[text("`Widget`")][..]));
    }
}

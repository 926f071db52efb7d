//! Split a normalized comment body into description and `@tag` blocks.
//!
//! Every meaningful line starts (after indentation) with the `*` marker.
//! Lines before the first tag form the description; lines after a tag are
//! continuation paragraphs of that tag until the next `@` line.

use crate::clean::{clean_line, clean_single_line};
use crate::model::{ParsedComment, Tag};
use regex::Regex;
use std::sync::LazyLock;

static RE_PARAGRAPH: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)</?p>").unwrap());

static RE_EXTRA_BREAKS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{3,}").unwrap());

static RE_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<code>(.*?)</code>").unwrap());

/// Joins continuation paragraphs of a tag value; the indentation matches the
/// content column of a ` * ` list item.
const TAG_CONTINUATION: &str = "\n\n   ";

const PARAGRAPH_MARKER: &str = "<p>";

enum Line<'a> {
    /// `* @key value`
    Tag { key: &'a str, value: &'a str },
    /// `* text`
    Content(&'a str),
    /// `* @` without a letter key
    Stray,
    Empty,
}

/// Parse a comment body produced by the section extractor.
pub fn parse(comment: &str) -> ParsedComment {
    let mut description: Vec<String> = Vec::new();
    let mut tags: Vec<Tag> = Vec::new();
    let mut current: Option<Tag> = None;
    let mut in_tags = false;

    for line in comment.split('\n') {
        match classify(line) {
            Line::Tag { key, value } => {
                tags.extend(current.take());
                in_tags = true;
                current = Some(Tag {
                    key: key.to_string(),
                    value: clean_single_line(value),
                });
            }
            Line::Content(text) if !in_tags => description.push(clean_line(text)),
            Line::Content(text) => {
                let Some(tag) = current.as_mut() else {
                    continue;
                };
                let text = clean_single_line(text);
                if text.is_empty() || text.eq_ignore_ascii_case(PARAGRAPH_MARKER) {
                    continue;
                }
                if tag.value.is_empty() {
                    tag.value = text;
                } else {
                    tag.value.push_str(TAG_CONTINUATION);
                    tag.value.push_str(&text);
                }
            }
            Line::Stray => {
                tags.extend(current.take());
                in_tags = true;
            }
            Line::Empty => {}
        }
    }
    tags.extend(current);

    ParsedComment {
        description: format_description(&description.join(" ")),
        tags,
    }
}

fn classify(line: &str) -> Line<'_> {
    let Some(after_marker) = line.trim_start_matches([' ', '\t']).strip_prefix('*') else {
        return Line::Empty;
    };
    let text = after_marker.trim_start_matches([' ', '\t']);

    if let Some(tag) = text.strip_prefix('@') {
        let key_len = tag
            .find(|c: char| !c.is_ascii_alphabetic())
            .unwrap_or(tag.len());
        if key_len == 0 {
            return Line::Stray;
        }
        return Line::Tag {
            key: &tag[..key_len],
            value: &tag[key_len..],
        };
    }

    // Content needs a blank after the marker, so `**` rulers are not text.
    if text.len() == after_marker.len() || text.trim().is_empty() {
        return Line::Empty;
    }
    Line::Content(text)
}

/// Turn paragraph markers into Markdown breaks and `<code>` into code spans.
fn format_description(text: &str) -> String {
    let text = RE_PARAGRAPH.replace_all(text, "\n\n");
    let text = clean_line(&text);
    let text = RE_EXTRA_BREAKS.replace_all(&text, "\n\n");
    RE_CODE.replace_all(&text, "`$1`").into_owned()
}

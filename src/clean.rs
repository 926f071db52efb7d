//! Whitespace normalization and tokenizing for extracted comment text.

use regex::Regex;
use std::sync::LazyLock;

static RE_SPACE_AFTER_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([\n\r\t]) +").unwrap());

static RE_SPACE_BEFORE_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" +([\n\r])").unwrap());

static RE_SPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r" {2,}").unwrap());

static RE_BREAK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\n\r\t]").unwrap());

/// Trim, drop spaces around line breaks and tabs, and collapse space runs.
///
/// Line breaks themselves survive, so paragraph breaks (`\n\n`) produced
/// from `<p>` markers are kept.
pub fn clean_line(line: &str) -> String {
    let line = line.trim();
    let line = RE_SPACE_AFTER_BREAK.replace_all(line, "$1");
    let line = RE_SPACE_BEFORE_BREAK.replace_all(&line, "$1");
    RE_SPACE_RUN.replace_all(&line, " ").into_owned()
}

/// Like [`clean_line`], but flattens everything onto one line.
pub fn clean_single_line(line: &str) -> String {
    clean_line(&RE_BREAK.replace_all(line, " "))
}

/// Split `text` on whitespace runs into exactly `limit` fields.
///
/// At most `limit - 1` splits are made; the last field keeps the remainder
/// verbatim, inner line breaks included. Missing fields are empty.
///
/// `tokenize("a b c d", 3)` → `["a", "b", "c d"]`
pub fn tokenize(text: &str, limit: usize) -> Vec<&str> {
    let limit = limit.max(1);
    let mut tokens = Vec::with_capacity(limit);
    let mut rest = text;

    while tokens.len() + 1 < limit {
        match rest.find(char::is_whitespace) {
            Some(pos) => {
                tokens.push(&rest[..pos]);
                rest = rest[pos..].trim_start();
            }
            None => break,
        }
    }

    tokens.push(rest);
    tokens.resize(limit, "");
    tokens
}

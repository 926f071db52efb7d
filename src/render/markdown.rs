//! Markdown assembly: document heading, one subsection per declaration.

use super::tags::TagRenderer;
use crate::model::{Entry, Section, TagGroups};
use crate::parser::{comment, declaration};

/// Render a whole document from extracted sections.
///
/// The document always ends with exactly one line break.
pub fn render_document(sections: &[Section], headings_level: usize, renderer: &TagRenderer) -> String {
    let mut output = format!("{} Documentation", "#".repeat(headings_level));

    for section in sections {
        output.push_str(&render_section(section, headings_level, renderer));
    }

    output.push('\n');
    output
}

/// Render a single declaration subsection, or nothing when the declaration
/// yields no label.
pub fn render_section(section: &Section, headings_level: usize, renderer: &TagRenderer) -> String {
    let label = declaration::format(&section.declaration);
    if label.is_empty() {
        return String::new();
    }

    let mut out = String::new();
    out.push_str("\n\n");
    out.push_str(&format!("{} `{}`", "#".repeat(headings_level + 1), label));

    let parsed = comment::parse(&section.comment);
    if !parsed.description.is_empty() {
        out.push_str("\n\n");
        out.push_str(&parsed.description);
    }

    let groups = renderer.render(&parsed.tags);
    if !groups.is_empty() {
        out.push('\n');
        out.push_str(&render_groups(&groups));
    }

    out
}

/// Render tag groups as a bullet list.
///
/// - ` * **Name**` — presence-only
/// - ` * **Name:** entry` — single entry
/// - ` * **Name:**` followed by `   * entry` lines — several entries
fn render_groups(groups: &TagGroups) -> String {
    let mut out = String::new();

    for (name, entries) in groups.iter() {
        out.push('\n');
        if entries.iter().all(|e| *e == Entry::Flag) {
            out.push_str(&format!(" * **{}**", name));
            continue;
        }

        out.push_str(&format!(" * **{}:**", name));
        match entries {
            [single] => {
                out.push(' ');
                out.push_str(entry_text(single));
            }
            _ => {
                for entry in entries {
                    out.push_str("\n   * ");
                    out.push_str(entry_text(entry));
                }
            }
        }
    }

    out
}

fn entry_text(entry: &Entry) -> &str {
    match entry {
        Entry::Text(text) => text,
        Entry::Flag => "",
    }
}

//! Locate `/** ... */` blocks and the declaration that follows each one.

use crate::model::Section;
use regex::Regex;
use std::sync::LazyLock;

static RE_IMPORT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^import\s+").unwrap());

const COMMENT_OPEN: &str = "/**";
const COMMENT_CLOSE: &str = "*/";

/// Characters that end a declaration fragment: body, statement end, or the
/// start of another comment.
const DECLARATION_END: [char; 3] = ['{', ';', '/'];

/// Extract every doc comment / declaration pair from `code`, in source order.
///
/// The scan cursor strictly advances past each closing `*/`, so the loop
/// terminates on any input.
pub fn extract(code: &str) -> Vec<Section> {
    let mut sections = Vec::new();
    let mut cursor = 0;

    while let Some(open) = code[cursor..].find(COMMENT_OPEN) {
        let body_start = cursor + open + COMMENT_OPEN.len();
        let Some(close) = code[body_start..].find(COMMENT_CLOSE) else {
            break;
        };
        let body_end = body_start + close;
        let decl_start = body_end + COMMENT_CLOSE.len();
        let decl_end = code[decl_start..]
            .find(DECLARATION_END)
            .map_or(code.len(), |pos| decl_start + pos);
        cursor = decl_end;

        let declaration = code[decl_start..decl_end].trim();
        if RE_IMPORT.is_match(declaration) {
            continue;
        }

        sections.push(Section {
            declaration: declaration.to_string(),
            comment: normalize_comment(&code[body_start..body_end]),
        });
    }

    sections
}

/// Give single-line comments a leading `*` and turn blank comment lines
/// into `<p>` paragraph markers.
fn normalize_comment(body: &str) -> String {
    let body = if body.contains('*') {
        body.to_string()
    } else {
        format!("*{}", body)
    };

    body.split('\n')
        .map(|line| {
            let marker = line.trim_start_matches([' ', '\t']);
            match marker.strip_prefix('*') {
                Some(rest) if rest.trim().is_empty() => {
                    let indent = &line[..line.len() - marker.len()];
                    format!("{}* <p>", indent)
                }
                _ => line.to_string(),
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_comment_and_declaration() {
        let code = "/**\n * Adds.\n */\npublic int add(int a, int b) {\n  return a + b;\n}\n";
        let sections = extract(code);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].declaration, "public int add(int a, int b)");
        assert_eq!(sections[0].comment, "\n * Adds.\n ");
    }

    #[test]
    fn declaration_stops_at_semicolon_and_comment() {
        let code = "/** Count. */ private int count; /** Name. */ String name // trailing\n";
        let sections = extract(code);
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].declaration, "private int count");
        assert_eq!(sections[1].declaration, "String name");
    }

    #[test]
    fn skips_import_declarations() {
        let code = "/** Imported. */\nimport foo.Bar;\n/** Kept. */\nclass Foo {}";
        let sections = extract(code);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].declaration, "class Foo");
    }

    #[test]
    fn single_line_comment_gets_marker() {
        let sections = extract("/** Short. */ int x;");
        assert_eq!(sections[0].comment, "* Short. ");
    }

    #[test]
    fn blank_lines_become_paragraph_markers() {
        let sections = extract("/**\n * One.\n *\n * Two.\n */ int x;");
        assert_eq!(sections[0].comment, "\n * One.\n * <p>\n * Two.\n ");
    }

    #[test]
    fn blank_lines_with_crlf() {
        let sections = extract("/**\r\n * One.\r\n *\r\n * Two.\r\n */ int x;");
        assert_eq!(sections[0].comment, "\r\n * One.\r\n * <p>\n * Two.\r\n ");
    }

    #[test]
    fn empty_declaration_still_recorded() {
        let sections = extract("/** Orphan. */{");
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].declaration, "");
    }

    #[test]
    fn unterminated_comment_is_ignored() {
        assert!(extract("/** never closed\nint x;").is_empty());
        assert!(extract("no comments at all").is_empty());
    }

    #[test]
    fn nested_comment_open_not_special() {
        let sections = extract("/** outer /* inner */ int x;");
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].declaration, "int x");
    }
}

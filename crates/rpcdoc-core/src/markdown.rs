//! Markdown cleaning for text that ends up inside MDX pages
//!
//! MDX treats `{`, `}`, `<` and `>` as syntax, so free text copied from API
//! definitions has to be escaped before it can be embedded in a page. Code
//! spans and fenced blocks are left untouched.
//!
//! Copyright (c) 2025 Rpcdoc Team
//! Licensed under the Apache-2.0 license

use regex::Regex;
use std::sync::OnceLock;

static WHITESPACE_RUN: OnceLock<Regex> = OnceLock::new();

/// Cleans free text for display in a generated page
pub trait MarkdownCleaner {
    /// Clean `text`; with `preserve_structure` off, paragraphs are reflowed
    /// onto single lines.
    fn clean(&self, text: &str, preserve_structure: bool) -> String;
}

/// Default cleaner producing MDX-safe markdown
#[derive(Debug, Default, Clone, Copy)]
pub struct MdxCleaner;

impl MarkdownCleaner for MdxCleaner {
    fn clean(&self, text: &str, preserve_structure: bool) -> String {
        clean_description(text, preserve_structure)
    }
}

/// Clean a description for MDX output.
pub fn clean_description(text: &str, preserve_structure: bool) -> String {
    if text.trim().is_empty() {
        return String::new();
    }

    let text = text.replace("\r\n", "\n");
    let mut lines: Vec<String> = Vec::new();
    let mut paragraph: Vec<String> = Vec::new();
    let mut in_fence = false;

    for line in text.split('\n') {
        let line = line.trim_end();

        if line.trim_start().starts_with("```") {
            flush_paragraph(&mut paragraph, &mut lines);
            in_fence = !in_fence;
            lines.push(line.to_string());
            continue;
        }

        if in_fence {
            lines.push(line.to_string());
            continue;
        }

        let escaped = escape_mdx(line);

        if preserve_structure {
            lines.push(escaped);
        } else if escaped.trim().is_empty() {
            flush_paragraph(&mut paragraph, &mut lines);
            if lines.last().is_some_and(|l| !l.is_empty()) {
                lines.push(String::new());
            }
        } else {
            paragraph.push(collapse_whitespace(escaped.trim()));
        }
    }
    flush_paragraph(&mut paragraph, &mut lines);

    lines.join("\n").trim().to_string()
}

fn flush_paragraph(paragraph: &mut Vec<String>, lines: &mut Vec<String>) {
    if !paragraph.is_empty() {
        lines.push(paragraph.join(" "));
        paragraph.clear();
    }
}

fn collapse_whitespace(line: &str) -> String {
    let pattern = WHITESPACE_RUN
        .get_or_init(|| Regex::new(r"[ \t]+").expect("whitespace pattern is valid"));
    pattern.replace_all(line, " ").into_owned()
}

/// Escape MDX-significant characters outside inline code spans.
///
/// Braces that are already preceded by a backslash are kept as they are.
pub fn escape_mdx(line: &str) -> String {
    let mut result = String::with_capacity(line.len());
    let mut in_code = false;
    let mut prev = None;

    for c in line.chars() {
        match c {
            '`' => {
                in_code = !in_code;
                result.push(c);
            }
            _ if in_code => result.push(c),
            '{' | '}' if prev != Some('\\') => {
                result.push('\\');
                result.push(c);
            }
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            _ => result.push(c),
        }
        prev = Some(c);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reflow_paragraphs() {
        let text = "Line one\nline two\n\n\nPara two";
        assert_eq!(clean_description(text, false), "Line one line two\n\nPara two");
    }

    #[test]
    fn test_preserve_structure_keeps_lines() {
        let text = "Line one\nline two\n\nPara two";
        assert_eq!(clean_description(text, true), text);
    }

    #[test]
    fn test_whitespace_is_collapsed() {
        assert_eq!(clean_description("  a   b\t c  ", false), "a b c");
    }

    #[test]
    fn test_crlf_and_trailing_space() {
        assert_eq!(clean_description("first  \r\nsecond\r\n", true), "first\nsecond");
    }

    #[test]
    fn test_escapes_mdx_characters() {
        assert_eq!(
            clean_description("Use {amt} <sat>", false),
            "Use \\{amt\\} &lt;sat&gt;"
        );
    }

    #[test]
    fn test_code_span_untouched() {
        assert_eq!(clean_description("Set `{a: <b>}` now", false), "Set `{a: <b>}` now");
    }

    #[test]
    fn test_fenced_block_verbatim() {
        let text = "Example:\n```json\n{\n    \"amt\": 1\n}\n```\nDone";
        assert_eq!(
            clean_description(text, false),
            "Example:\n```json\n{\n    \"amt\": 1\n}\n```\nDone"
        );
    }

    #[test]
    fn test_escaping_is_stable() {
        let once = clean_description("map {k: v}", false);
        assert_eq!(clean_description(&once, false), once);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(clean_description("", false), "");
        assert_eq!(clean_description("  \n \n", true), "");
    }

    #[test]
    fn test_cleaner_trait_delegates() {
        let cleaner = MdxCleaner;
        assert_eq!(cleaner.clean("a\nb", false), "a b");
    }
}

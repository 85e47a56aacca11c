use lazy_static::lazy_static;
use regex::Regex;

use super::MessageRenderer;

const BOLD_ON: &str = "\x1b[1m";
const ITALIC_ON: &str = "\x1b[3m";
const CODE_ON: &str = "\x1b[36m";
const RESET: &str = "\x1b[0m";

lazy_static! {
    static ref HEADING: Regex = Regex::new(r"^#{1,6}\s+(.*)$").unwrap();
    static ref BULLET: Regex = Regex::new(r"^(\s*)[-*]\s+(.*)$").unwrap();
    static ref BOLD: Regex = Regex::new(r"\*\*([^*]+)\*\*").unwrap();
    static ref ITALIC: Regex = Regex::new(r"\*([^*\n]+)\*").unwrap();
    static ref CODE: Regex = Regex::new("`([^`]+)`").unwrap();
}

/// Line-oriented markdown to ANSI: headings, bold, italics, inline code,
/// list bullets, and fenced code blocks. Anything it does not recognize is
/// passed through as-is.
pub struct MarkdownRenderer;

impl MarkdownRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageRenderer for MarkdownRenderer {
    fn render(&self, text: &str) -> String {
        let mut out = Vec::new();
        let mut in_fence = false;

        for line in text.lines() {
            if line.trim_start().starts_with("```") {
                // Fence markers are markup, not content.
                in_fence = !in_fence;
                continue;
            }
            if in_fence {
                out.push(format!("    {}{}{}", CODE_ON, line, RESET));
                continue;
            }
            out.push(style_inline(&style_block(line)));
        }

        out.join("\n")
    }

    fn render_sql(&self, sql: &str) -> String {
        sql.lines()
            .map(|line| format!("    {}{}{}", CODE_ON, line, RESET))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn style_block(line: &str) -> String {
    if let Some(caps) = HEADING.captures(line) {
        return format!("{}{}{}", BOLD_ON, &caps[1], RESET);
    }
    if let Some(caps) = BULLET.captures(line) {
        return format!("{}• {}", &caps[1], &caps[2]);
    }
    line.to_string()
}

fn style_inline(line: &str) -> String {
    let line = BOLD.replace_all(line, format!("{}$1{}", BOLD_ON, RESET).as_str());
    let line = ITALIC.replace_all(&line, format!("{}$1{}", ITALIC_ON, RESET).as_str());
    let line = CODE.replace_all(&line, format!("{}$1{}", CODE_ON, RESET).as_str());
    line.into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bold_and_code_get_ansi_styling() {
        let renderer = MarkdownRenderer::new();
        let out = renderer.render("a **strong** word and `code`");
        assert!(out.contains(&format!("{}strong{}", BOLD_ON, RESET)));
        assert!(out.contains(&format!("{}code{}", CODE_ON, RESET)));
    }

    #[test]
    fn headings_become_bold_lines() {
        let renderer = MarkdownRenderer::new();
        let out = renderer.render("## Tables");
        assert_eq!(out, format!("{}Tables{}", BOLD_ON, RESET));
    }

    #[test]
    fn fenced_blocks_are_indented_and_markers_dropped() {
        let renderer = MarkdownRenderer::new();
        let out = renderer.render("before\n```sql\nSELECT 1;\n```\nafter");
        assert!(out.contains("SELECT 1;"));
        assert!(!out.contains("```"));
    }

    #[test]
    fn bullets_are_replaced() {
        let renderer = MarkdownRenderer::new();
        let out = renderer.render("- one\n- two");
        assert_eq!(out, "• one\n• two");
    }

    #[test]
    fn sql_block_keeps_the_statement_text() {
        let renderer = MarkdownRenderer::new();
        let block = renderer.render_sql("SHOW TABLES;");
        assert!(block.contains("SHOW TABLES;"));
    }

    #[test]
    fn unrecognized_text_passes_through() {
        let renderer = MarkdownRenderer::new();
        assert_eq!(renderer.render("plain sentence."), "plain sentence.");
    }
}

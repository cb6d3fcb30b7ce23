//! Markdown rendering
//!
//! A small, non-compliant Markdown subset rendered by a fixed chain of regex
//! substitutions. Each rule runs over the output of the previous one, so the
//! order of [`RULES`] is part of the output format.

use lazy_static::lazy_static;
use regex::Regex;

/// One substitution step in the rendering chain
struct Rule {
    pattern: Regex,
    replacement: &'static str,
}

impl Rule {
    fn new(pattern: &str, replacement: &'static str) -> Self {
        Self {
            // Patterns are literals below; a bad one is a programming error
            pattern: Regex::new(pattern).expect("invalid markdown rule pattern"),
            replacement,
        }
    }

    fn apply(&self, input: &str) -> String {
        self.pattern
            .replace_all(input, self.replacement)
            .into_owned()
    }
}

lazy_static! {
    /// Block and inline rules, applied before paragraph splitting
    static ref RULES: Vec<Rule> = vec![
        // Line rules run in CRLF mode so `.` and `$` stop before `\r`
        // Headers
        Rule::new(r"(?mR)^### (.*)$", "<h3>${1}</h3>"),
        Rule::new(r"(?mR)^## (.*)$", "<h2>${1}</h2>"),
        Rule::new(r"(?mR)^# (.*)$", "<h1>${1}</h1>"),
        // Bold before italic
        Rule::new(r"(?R)\*\*(.*)\*\*", "<strong>${1}</strong>"),
        Rule::new(r"(?R)\*(.*)\*", "<em>${1}</em>"),
        // Images before links
        Rule::new(r"!\[([^\]]*)\]\(([^)]*)\)", r#"<img src="${2}" alt="${1}" />"#),
        Rule::new(
            r"\[([^\]]*)\]\(([^)]*)\)",
            r#"<a href="${2}" target="_blank" rel="noopener noreferrer">${1}</a>"#,
        ),
        // Fenced code before inline code
        Rule::new(r"```([^`]+)```", "<pre><code>${1}</code></pre>"),
        Rule::new(r"`([^`]+)`", "<code>${1}</code>"),
        // List items, then one <ul> per run of adjacent items
        Rule::new(r"(?mR)^- (.*)$", "<li>${1}</li>"),
        Rule::new(r"(?mR)^<li>.*</li>(?:\r?\n<li>.*</li>)*$", "<ul>${0}</ul>"),
        // Blockquotes
        Rule::new(r"(?mR)^> (.*)$", "<blockquote>${1}</blockquote>"),
    ];

    /// Paragraph cleanup, applied after wrapping
    static ref CLEANUP: Vec<Rule> = vec![
        Rule::new(r"<p></p>", ""),
        Rule::new(r"<p>(<h[1-6]>)", "${1}"),
        Rule::new(r"(</h[1-6]>)</p>", "${1}"),
        Rule::new(r"<p>(<ul>)", "${1}"),
        Rule::new(r"(</ul>)</p>", "${1}"),
        Rule::new(r"<p>(<blockquote>)", "${1}"),
        Rule::new(r"(</blockquote>)</p>", "${1}"),
        Rule::new(r"<p>(<pre>)", "${1}"),
        Rule::new(r"(</pre>)</p>", "${1}"),
    ];
}

/// Markdown to HTML renderer
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownRenderer;

impl MarkdownRenderer {
    /// Create a new markdown renderer
    pub fn new() -> Self {
        Self
    }

    /// Render markdown to HTML
    ///
    /// Never fails: any input, including an empty string, produces some
    /// output. HTML in the input is passed through unescaped.
    pub fn render(&self, markdown: &str) -> String {
        let mut html = RULES
            .iter()
            .fold(markdown.to_string(), |html, rule| rule.apply(&html));

        // Paragraphs and line breaks
        html = html.replace("\n\n", "</p><p>").replace('\n', "<br>");
        html = format!("<p>{}</p>", html);

        CLEANUP.iter().fold(html, |html, rule| rule.apply(&html))
    }
}

/// Render markdown with the default renderer
pub fn render_markdown(markdown: &str) -> String {
    MarkdownRenderer::new().render(markdown)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_headers() {
        assert_eq!(render_markdown("# Hello"), "<h1>Hello</h1>");
        assert_eq!(render_markdown("## Sub"), "<h2>Sub</h2>");
        assert_eq!(render_markdown("### Deep"), "<h3>Deep</h3>");
        // Only at line start
        assert_eq!(render_markdown("a # b"), "<p>a # b</p>");
    }

    #[test]
    fn test_render_emphasis() {
        let html = render_markdown("**bold** and *italic*");
        assert!(html.contains("<strong>bold</strong> and <em>italic</em>"));
    }

    #[test]
    fn test_bold_is_greedy_within_a_line() {
        let html = render_markdown("**a** x **b**");
        assert_eq!(html, "<p><strong>a<em>* x *</em>b</strong></p>");
    }

    #[test]
    fn test_render_link() {
        let html = render_markdown("[text](http://x.com)");
        assert_eq!(
            html,
            r#"<p><a href="http://x.com" target="_blank" rel="noopener noreferrer">text</a></p>"#
        );
    }

    #[test]
    fn test_render_image_not_shadowed_by_link() {
        let html = render_markdown("![logo](/img/logo.png)");
        assert_eq!(html, r#"<p><img src="/img/logo.png" alt="logo" /></p>"#);
    }

    #[test]
    fn test_render_code() {
        let html = render_markdown("```\nlet x = 1;\n```");
        assert_eq!(html, "<pre><code><br>let x = 1;<br></code></pre>");

        let html = render_markdown("use `cargo` here");
        assert_eq!(html, "<p>use <code>cargo</code> here</p>");
    }

    #[test]
    fn test_render_list() {
        let html = render_markdown("- a\n- b");
        assert_eq!(html, "<ul><li>a</li><br><li>b</li></ul>");
        assert_eq!(html.matches("<ul>").count(), 1);
        assert_eq!(html.matches("<li>").count(), 2);
    }

    #[test]
    fn test_separate_lists_get_separate_wrappers() {
        let html = render_markdown("- a\n\ntext\n\n- b");
        assert_eq!(html.matches("<ul>").count(), 2);
        assert!(html.contains("<p>text</p>"));
    }

    #[test]
    fn test_render_blockquote() {
        let html = render_markdown("> quoted");
        assert_eq!(html, "<blockquote>quoted</blockquote>");
    }

    #[test]
    fn test_render_paragraphs() {
        let html = render_markdown("one\ntwo\n\nthree");
        assert_eq!(html, "<p>one<br>two</p><p>three</p>");
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render_markdown(""), "");
    }

    #[test]
    fn test_header_followed_by_text() {
        let html = render_markdown("# Title\n\nBody text.");
        assert_eq!(html, "<h1>Title</h1><p>Body text.</p>");
    }

    #[test]
    fn test_crlf_line_endings() {
        assert_eq!(
            render_markdown("# Title\r\nbody"),
            "<h1>Title</h1>\r<br>body</p>"
        );
        assert_eq!(
            render_markdown("- a\r\n- b"),
            "<ul><li>a</li>\r<br><li>b</li></ul>"
        );
        assert_eq!(
            render_markdown("> quoted\r\n"),
            "<blockquote>quoted</blockquote>\r<br></p>"
        );
    }

    #[test]
    fn test_html_is_not_escaped() {
        let html = render_markdown("<span>raw</span>");
        assert_eq!(html, "<p><span>raw</span></p>");
    }
}

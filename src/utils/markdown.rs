//! Markdown rendering utilities.
//!
//! Provides safe markdown-to-HTML conversion with XSS protection, class-based
//! syntax highlighting for fenced code blocks, and heading anchors for the
//! table of contents.

use std::collections::HashMap;
use std::sync::LazyLock;

use pulldown_cmark::{
    CodeBlockKind, CowStr, Event, HeadingLevel, Options, Parser, Tag, TagEnd, html,
};
use syntect::highlighting::ThemeSet;
use syntect::html::{ClassStyle, ClassedHTMLGenerator, css_for_theme_with_class_style};
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;

use crate::config::highlight;
use crate::models::{Theme, TocEntry};

static SYNTAX_SET: LazyLock<SyntaxSet> = LazyLock::new(SyntaxSet::load_defaults_newlines);
static THEME_SET: LazyLock<ThemeSet> = LazyLock::new(ThemeSet::load_defaults);

const CLASS_STYLE: ClassStyle = ClassStyle::SpacedPrefixed {
    prefix: highlight::CLASS_PREFIX,
};

/// Output of [`render_markdown`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RenderedMarkdown {
    /// Sanitized HTML
    pub html: String,
    /// Every heading in document order
    pub toc: Vec<TocEntry>,
}

/// Convert markdown content to sanitized HTML and collect its headings.
///
/// Supports extended markdown syntax including:
/// - Strikethrough (`~~text~~`)
/// - Tables
/// - Footnotes
/// - Task lists
/// - Smart punctuation
/// - Soft line breaks rendered as `<br>`
///
/// Fenced code blocks are highlighted by their language tag. Unknown languages
/// and highlighter failures fall back to the escaped source. The output is
/// sanitized using `ammonia`.
pub fn render_markdown(markdown: &str) -> RenderedMarkdown {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_FOOTNOTES);
    options.insert(Options::ENABLE_TASKLISTS);
    options.insert(Options::ENABLE_SMART_PUNCTUATION);
    options.insert(Options::ENABLE_HEADING_ATTRIBUTES);

    let mut state = RenderState::default();
    for event in Parser::new_ext(markdown, options) {
        state.handle(event);
    }

    let mut html_output = String::new();
    html::push_html(&mut html_output, state.events.into_iter());

    RenderedMarkdown {
        html: sanitize(&html_output),
        toc: state.toc,
    }
}

/// Highlight `code` as `lang`, returning classed `<span>` markup.
///
/// Returns `None` when the language is unknown or highlighting fails.
pub fn highlight_code(code: &str, lang: &str) -> Option<String> {
    let syntax = SYNTAX_SET.find_syntax_by_token(lang)?;
    let mut generator = ClassedHTMLGenerator::new_with_class_style(syntax, &SYNTAX_SET, CLASS_STYLE);
    for line in LinesWithEndings::from(code) {
        generator
            .parse_html_for_line_which_includes_newline(line)
            .ok()?;
    }
    Some(generator.finalize())
}

/// Stylesheet coloring highlighted code for the given page theme.
pub fn highlight_css(theme: Theme) -> Option<String> {
    let name = match theme {
        Theme::Light => highlight::LIGHT_THEME,
        Theme::Dark => highlight::DARK_THEME,
    };
    let syntect_theme = THEME_SET.themes.get(name)?;
    css_for_theme_with_class_style(syntect_theme, CLASS_STYLE).ok()
}

fn sanitize(html: &str) -> String {
    ammonia::Builder::default()
        .add_generic_attributes(&["id", "class"])
        .add_tags(&["input"])
        .add_tag_attributes("input", &["type", "checked", "disabled"])
        .clean(html)
        .to_string()
}

// =============================================================================
// Event Rewriting
// =============================================================================

struct CodeBuffer {
    lang: Option<String>,
    body: String,
}

impl CodeBuffer {
    fn to_html(&self) -> String {
        let body = self
            .lang
            .as_deref()
            .and_then(|lang| highlight_code(&self.body, lang))
            .unwrap_or_else(|| escape_html(&self.body));

        match &self.lang {
            Some(lang) => format!(
                "<pre><code class=\"language-{}\">{}</code></pre>\n",
                escape_html(lang),
                body
            ),
            None => format!("<pre><code>{}</code></pre>\n", body),
        }
    }
}

struct HeadingBuffer<'a> {
    level: HeadingLevel,
    id: Option<CowStr<'a>>,
    classes: Vec<CowStr<'a>>,
    attrs: Vec<(CowStr<'a>, Option<CowStr<'a>>)>,
    text: String,
    events: Vec<Event<'a>>,
}

#[derive(Default)]
struct RenderState<'a> {
    events: Vec<Event<'a>>,
    code: Option<CodeBuffer>,
    heading: Option<HeadingBuffer<'a>>,
    id_counts: HashMap<String, usize>,
    toc: Vec<TocEntry>,
}

impl<'a> RenderState<'a> {
    fn handle(&mut self, event: Event<'a>) {
        match event {
            Event::Start(Tag::CodeBlock(kind)) => {
                self.code = Some(CodeBuffer {
                    lang: fence_lang(&kind),
                    body: String::new(),
                });
            }
            Event::End(TagEnd::CodeBlock) => {
                if let Some(block) = self.code.take() {
                    self.emit(Event::Html(block.to_html().into()));
                }
            }
            Event::Text(text) if self.code.is_some() => {
                if let Some(block) = self.code.as_mut() {
                    block.body.push_str(&text);
                }
            }
            Event::Start(Tag::Heading {
                level,
                id,
                classes,
                attrs,
            }) => {
                self.heading = Some(HeadingBuffer {
                    level,
                    id,
                    classes,
                    attrs,
                    text: String::new(),
                    events: Vec::new(),
                });
            }
            Event::End(TagEnd::Heading(level)) => {
                if let Some(heading) = self.heading.take() {
                    self.finish_heading(heading, level);
                }
            }
            Event::SoftBreak => self.emit(Event::HardBreak),
            other => self.emit(other),
        }
    }

    fn emit(&mut self, event: Event<'a>) {
        match self.heading.as_mut() {
            Some(heading) => {
                if let Event::Text(text) | Event::Code(text) = &event {
                    heading.text.push_str(text);
                }
                heading.events.push(event);
            }
            None => self.events.push(event),
        }
    }

    fn finish_heading(&mut self, heading: HeadingBuffer<'a>, level: HeadingLevel) {
        let id = match heading.id {
            Some(id) => {
                let id = id.to_string();
                self.id_counts.entry(id.clone()).or_insert(1);
                id
            }
            None => self.generate_id(&heading.text),
        };

        self.toc.push(TocEntry {
            level: heading_level_to_num(heading.level),
            id: id.clone(),
            text: heading.text.trim().to_string(),
        });

        self.events.push(Event::Start(Tag::Heading {
            level: heading.level,
            id: Some(CowStr::from(id)),
            classes: heading.classes,
            attrs: heading.attrs,
        }));
        self.events.extend(heading.events);
        self.events.push(Event::End(TagEnd::Heading(level)));
    }

    /// Slug id, suffixed with `-N` for repeated headings.
    fn generate_id(&mut self, text: &str) -> String {
        let base_id = match slugify(text) {
            slug if slug.is_empty() => "section".to_string(),
            slug => slug,
        };
        let mut n = self.id_counts.get(&base_id).copied().unwrap_or(0);
        let id = loop {
            let candidate = match n {
                0 => base_id.clone(),
                n => format!("{base_id}-{n}"),
            };
            n += 1;
            // Suffixed ids can clash with explicit `{#id}` anchors
            if n == 1 || !self.id_counts.contains_key(&candidate) {
                break candidate;
            }
        };
        self.id_counts.insert(base_id, n);
        self.id_counts.entry(id.clone()).or_insert(1);
        id
    }
}

/// First word of a fence info string (` ```rust,ignore ` → `rust`).
fn fence_lang(kind: &CodeBlockKind<'_>) -> Option<String> {
    match kind {
        CodeBlockKind::Fenced(info) => info
            .split(|c: char| c.is_whitespace() || c == ',')
            .next()
            .filter(|lang| !lang.is_empty())
            .map(str::to_string),
        CodeBlockKind::Indented => None,
    }
}

fn heading_level_to_num(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}

/// Convert text to URL-safe slug.
///
/// Lowercases ASCII alphanumerics, collapses whitespace/dashes/underscores
/// into single dashes and drops everything else.
pub fn slugify(text: &str) -> String {
    let mut result = String::new();
    let mut last_was_dash = true;

    for c in text.trim().chars() {
        if c.is_ascii_alphanumeric() {
            result.push(c.to_ascii_lowercase());
            last_was_dash = false;
        } else if !last_was_dash && (c.is_whitespace() || c == '-' || c == '_') {
            result.push('-');
            last_was_dash = true;
        }
    }

    if result.ends_with('-') {
        result.pop();
    }

    result
}

/// Escape HTML special characters.
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn markdown_to_html(markdown: &str) -> String {
        render_markdown(markdown).html
    }

    #[test]
    fn test_basic_markdown() {
        let html = markdown_to_html("# Title\n\nSome *emphasis* and ~~gone~~.");
        assert!(html.contains("<h1 id=\"title\">Title</h1>"));
        assert!(html.contains("<em>emphasis</em>"));
        assert!(html.contains("<del>gone</del>"));
    }

    #[test]
    fn test_soft_breaks_become_line_breaks() {
        let html = markdown_to_html("first line\nsecond line");
        assert!(html.contains("first line<br"));
    }

    #[test]
    fn test_known_language_is_highlighted() {
        let html = markdown_to_html("```rust\nfn main() {}\n```\n");
        assert!(html.contains("class=\"language-rust\""));
        assert!(html.contains("hl-"));
        assert!(html.contains("main"));
    }

    #[test]
    fn test_unknown_language_falls_back_to_plain_text() {
        let html = markdown_to_html("```no-such-language\nlet x = <y>;\n```\n");
        assert!(html.contains("class=\"language-no-such-language\""));
        assert!(html.contains("let x = &lt;y&gt;;"));
        assert!(!html.contains("hl-"));
        assert_eq!(highlight_code("x", "no-such-language"), None);
    }

    #[test]
    fn test_untagged_code_block_is_escaped() {
        let html = markdown_to_html("    <b>indented</b>\n");
        assert!(html.contains("<pre><code>&lt;b&gt;indented&lt;/b&gt;"));
    }

    #[test]
    fn test_heading_ids_and_toc() {
        let rendered = render_markdown("# Guide\n## Setup\n### The `run` step\n## Setup\n");
        let ids: Vec<&str> = rendered.toc.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["guide", "setup", "the-run-step", "setup-1"]);
        assert_eq!(rendered.toc[2].text, "The run step");
        assert_eq!(rendered.toc[2].level, 3);
        assert!(rendered.html.contains("<h2 id=\"setup-1\">"));
    }

    #[test]
    fn test_explicit_heading_id() {
        let rendered = render_markdown("## Install {#install-now}\n");
        assert_eq!(rendered.toc[0].id, "install-now");
        assert!(rendered.html.contains("id=\"install-now\""));
    }

    #[test]
    fn test_generated_ids_avoid_explicit_ids() {
        let rendered = render_markdown("## Setup {#setup}\n## Setup\n");
        let ids: Vec<&str> = rendered.toc.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["setup", "setup-1"]);

        let rendered = render_markdown("## Intro {#setup-1}\n## Setup\n## Setup\n");
        let ids: Vec<&str> = rendered.toc.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["setup-1", "setup", "setup-2"]);
    }

    #[test]
    fn test_sanitizes_scripts() {
        let html = markdown_to_html("hello <script>alert(1)</script> <a href=\"javascript:x\">l</a>");
        assert!(!html.contains("<script"));
        assert!(!html.contains("javascript:"));
    }

    #[test]
    fn test_malformed_markdown_renders_literally() {
        let html = markdown_to_html("**unclosed and [broken](");
        assert!(html.contains("**unclosed"));
    }

    #[test]
    fn test_task_list_and_table() {
        let html = markdown_to_html("- [x] done\n\n| a | b |\n|---|---|\n| 1 | 2 |\n");
        assert!(html.contains("type=\"checkbox\""));
        assert!(html.contains("<table>"));
    }

    #[test]
    fn test_highlight_css_for_both_themes() {
        let light = highlight_css(Theme::Light).unwrap();
        let dark = highlight_css(Theme::Dark).unwrap();
        assert!(light.contains(".hl-"));
        assert_ne!(light, dark);
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Hello World"), "hello-world");
        assert_eq!(slugify("What's New?"), "whats-new");
        assert_eq!(slugify("snake_case"), "snake-case");
        assert_eq!(slugify("  "), "");
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("<a href=\"x\">'&'</a>"), "&lt;a href=&quot;x&quot;&gt;&#x27;&amp;&#x27;&lt;/a&gt;");
    }
}

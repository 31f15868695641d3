//! Code block highlighting
//!
//! Wraps syntect: a declared fence language is resolved by token, anything
//! else goes through first-line autodetection. Highlighting is best-effort;
//! any syntect error degrades to escaped, unhighlighted code so a bad code
//! block can never abort a conversion.

use once_cell::sync::Lazy;
use syntect::easy::HighlightLines;
use syntect::highlighting::ThemeSet;
use syntect::html::{IncludeBackground, styled_line_to_highlighted_html};
use syntect::parsing::{SyntaxReference, SyntaxSet};
use syntect::util::LinesWithEndings;

use crate::render::escape_html;

static SYNTAX_SET: Lazy<SyntaxSet> = Lazy::new(SyntaxSet::load_defaults_newlines);
static THEME_SET: Lazy<ThemeSet> = Lazy::new(ThemeSet::load_defaults);

/// Dark syntect theme matching the themes' dark code backgrounds.
const HIGHLIGHT_THEME: &str = "base16-ocean.dark";

/// Render a fenced code block. The result is always wrapped in
/// `<pre><code class="hljs">`, with or without highlighting spans.
pub fn highlight_block(code: &str, language: Option<&str>) -> String {
    let body = try_highlight(code, language).unwrap_or_else(|| escape_html(code));
    format!(r#"<pre><code class="hljs">{body}</code></pre>"#)
}

/// Highlight into inline-styled spans. Span colors are self-contained, so
/// the output needs no stylesheet. Returns None on any engine failure.
fn try_highlight(code: &str, language: Option<&str>) -> Option<String> {
    let syntax = resolve_syntax(code, language);
    let theme = THEME_SET.themes.get(HIGHLIGHT_THEME)?;
    let mut highlighter = HighlightLines::new(syntax, theme);

    let mut out = String::with_capacity(code.len() * 2);
    for line in LinesWithEndings::from(code) {
        let regions = highlighter.highlight_line(line, &SYNTAX_SET).ok()?;
        let html = styled_line_to_highlighted_html(&regions, IncludeBackground::No).ok()?;
        out.push_str(&html);
    }
    Some(out)
}

/// Declared language first, then first-line detection, then plain text.
fn resolve_syntax(code: &str, language: Option<&str>) -> &'static SyntaxReference {
    language
        .and_then(|lang| SYNTAX_SET.find_syntax_by_token(lang))
        .or_else(|| SYNTAX_SET.find_syntax_by_first_line(code.lines().next().unwrap_or("")))
        .unwrap_or_else(|| SYNTAX_SET.find_syntax_plain_text())
}

//! Assembly and inlining pass
//!
//! Wraps the rendered body and footnote block in the themed container,
//! inlines the theme's CSS onto every matching element, then strips
//! inter-tag whitespace. The WeChat editor renders whitespace between tags
//! as visible blank lines and discards `<style>` blocks, so the output must
//! carry every style inline and no stray whitespace.

use crate::error::ConvertResult;
use crate::theme::Theme;

/// Produce the final self-contained HTML string.
///
/// CSS inlining resolves each theme rule against the markup and copies the
/// declarations onto matched elements' `style` attributes (source order wins
/// at equal specificity); no `<style>` element survives. Inlining failure is
/// fatal for the conversion.
pub fn assemble(body: &str, footnotes: &str, theme: &Theme) -> ConvertResult<String> {
    let html = format!(r#"<section class="wx-container">{body}{footnotes}</section>"#);
    let inlined = css_inline::inline_fragment(&html, theme.css)?;
    Ok(strip_intertag_whitespace(&inlined))
}

/// Remove every whitespace run that sits strictly between a closing `>` and
/// the next `<`. Whitespace inside text content is untouched.
fn strip_intertag_whitespace(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut chars = html.chars().peekable();

    while let Some(ch) = chars.next() {
        out.push(ch);
        if ch != '>' {
            continue;
        }
        let mut run = String::new();
        while let Some(&next) = chars.peek() {
            if next.is_whitespace() {
                run.push(next);
                chars.next();
            } else {
                break;
            }
        }
        if chars.peek() != Some(&'<') {
            out.push_str(&run);
        }
    }

    out
}

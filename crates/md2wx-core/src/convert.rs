//! Conversion pipeline
//!
//! Markdown text → rendered body (links collected) → list reconstruction →
//! footnote block → themed assembly with inlined CSS. Synchronous, no I/O;
//! the whole pipeline runs to completion inside one `convert` call.

use crate::assemble::assemble;
use crate::error::ConvertResult;
use crate::links::LinkCollector;
use crate::lists::rebuild_list_items;
use crate::render::render_markdown;
use crate::theme::Theme;

/// Markdown to WeChat-HTML converter for one fixed theme.
///
/// Holds no per-run state: the link collector is created inside [`convert`]
/// and discarded with it, so one converter can serve parallel conversions.
#[derive(Debug)]
pub struct Converter {
    theme: &'static Theme,
}

impl Converter {
    /// Create a converter for the named theme. Unknown names silently fall
    /// back to the default theme.
    pub fn new(theme_name: &str) -> Self {
        Self {
            theme: Theme::lookup(theme_name),
        }
    }

    /// The theme this converter applies.
    pub fn theme(&self) -> &'static Theme {
        self.theme
    }

    /// Convert one Markdown document to a self-contained HTML fragment.
    pub fn convert(&self, markdown: &str) -> ConvertResult<String> {
        let mut links = LinkCollector::new();

        let body = render_markdown(markdown, &mut links);
        let body = rebuild_list_items(&body);
        let footnotes = links.emit_footnotes();

        assemble(&body, &footnotes, self.theme)
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::new(crate::theme::DEFAULT_THEME)
    }
}

/// One-shot conversion with a fresh converter.
pub fn convert(markdown: &str, theme_name: &str) -> ConvertResult<String> {
    Converter::new(theme_name).convert(markdown)
}

//! Link collection and footnote emission
//!
//! WeChat strips `<a>` tags on paste, so links are rewritten inline as
//! `text[n]` superscript markers and the URLs are gathered into a trailing
//! references block. The collector is created fresh for every conversion and
//! threaded through rendering, so numbering never leaks between documents.

/// One collected link, in encounter order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkEntry {
    /// 1-based footnote number, matching the inline marker.
    pub index: usize,
    pub text: String,
    pub url: String,
}

/// Per-conversion accumulator for rewritten links.
#[derive(Debug, Default)]
pub struct LinkCollector {
    entries: Vec<LinkEntry>,
}

impl LinkCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a link and return its inline replacement: the display text
    /// followed by a superscript footnote marker.
    pub fn record(&mut self, text: &str, url: &str) -> String {
        let index = self.entries.len() + 1;
        self.entries.push(LinkEntry {
            index,
            text: text.to_string(),
            url: url.to_string(),
        });
        format!(r#"{text}<sup class="footnote-ref">[{index}]</sup>"#)
    }

    pub fn entries(&self) -> &[LinkEntry] {
        &self.entries
    }

    /// Build the trailing references block, or an empty string when the
    /// document contained no links. Entries keep encounter order; repeated
    /// URLs are not deduplicated.
    pub fn emit_footnotes(&self) -> String {
        if self.entries.is_empty() {
            return String::new();
        }

        let mut out =
            String::from(r#"<section class="footnotes"><p><strong>📚 References</strong></p>"#);
        for entry in &self.entries {
            out.push_str(&format!(
                "<p>[{}] {}: {}</p>",
                entry.index, entry.text, entry.url
            ));
        }
        out.push_str("</section>");
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_returns_marker() {
        let mut collector = LinkCollector::new();
        let inline = collector.record("Rust", "https://rust-lang.org");
        assert_eq!(
            inline,
            r#"Rust<sup class="footnote-ref">[1]</sup>"#
        );
    }

    #[test]
    fn test_indices_are_sequential_from_one() {
        let mut collector = LinkCollector::new();
        collector.record("a", "http://a");
        collector.record("b", "http://b");
        collector.record("c", "http://c");

        let indices: Vec<_> = collector.entries().iter().map(|e| e.index).collect();
        assert_eq!(indices, [1, 2, 3]);
    }

    #[test]
    fn test_no_links_emits_empty_block() {
        assert_eq!(LinkCollector::new().emit_footnotes(), "");
    }

    #[test]
    fn test_footnotes_preserve_order_and_duplicates() {
        let mut collector = LinkCollector::new();
        collector.record("b", "http://same");
        collector.record("a", "http://same");

        insta::assert_snapshot!(
            collector.emit_footnotes(),
            @r#"<section class="footnotes"><p><strong>📚 References</strong></p><p>[1] b: http://same</p><p>[2] a: http://same</p></section>"#
        );
    }
}

//! Rendering rule set
//!
//! Walks the pulldown-cmark event stream and emits HTML fragments using only
//! tags the WeChat editor renders reliably. The quirks live here:
//!
//! - list items become inert sentinel pairs instead of `<li>` (rewritten by
//!   the list reconstruction pass; items render before their list context)
//! - links never become `<a>`; they are handed to the [`LinkCollector`] and
//!   replaced by numbered superscript markers
//! - fenced code goes through the highlighting wrapper
//!
//! Composition is plain string concatenation. Inline containers that need
//! their rendered text up front (links, images) push a capture buffer that
//! is resolved when the closing event arrives.

use pulldown_cmark::{Alignment, CodeBlockKind, Event, Options, Parser, Tag, TagEnd};

use crate::highlight::highlight_block;
use crate::links::LinkCollector;
use crate::lists::{ITEM_END, ITEM_START};

/// Parser options matching GFM input: tables, strikethrough, task lists.
pub fn parser_options() -> Options {
    Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TASKLISTS
}

/// Render a Markdown document to raw body HTML, recording every link into
/// `links`. List items come back sentinel-wrapped.
pub fn render_markdown(markdown: &str, links: &mut LinkCollector) -> String {
    let parser = Parser::new_ext(markdown, parser_options());
    let mut renderer = HtmlRenderer::new(links);
    for event in parser {
        renderer.event(event);
    }
    renderer.finish()
}

/// Inline container whose rendered content is buffered until its end tag.
enum Capture {
    Link { url: String, buf: String },
    Image { url: String, title: String, buf: String },
}

impl Capture {
    fn buf(&mut self) -> &mut String {
        match self {
            Capture::Link { buf, .. } | Capture::Image { buf, .. } => buf,
        }
    }
}

/// Fenced or indented code block being collected.
struct CodeBlock {
    language: Option<String>,
    code: String,
}

#[derive(Default)]
struct TableState {
    alignments: Vec<Alignment>,
    in_head: bool,
    cell_index: usize,
}

struct HtmlRenderer<'c> {
    links: &'c mut LinkCollector,
    out: String,
    captures: Vec<Capture>,
    code_block: Option<CodeBlock>,
    table: TableState,
}

impl<'c> HtmlRenderer<'c> {
    fn new(links: &'c mut LinkCollector) -> Self {
        Self {
            links,
            out: String::new(),
            captures: Vec::new(),
            code_block: None,
            table: TableState::default(),
        }
    }

    fn finish(self) -> String {
        self.out
    }

    /// Current output target: the innermost capture buffer, if any.
    fn sink(&mut self) -> &mut String {
        match self.captures.last_mut() {
            Some(capture) => capture.buf(),
            None => &mut self.out,
        }
    }

    fn push(&mut self, s: &str) {
        self.sink().push_str(s);
    }

    fn event(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => self.start_tag(tag),
            Event::End(tag) => self.end_tag(tag),
            Event::Text(text) => {
                if let Some(block) = self.code_block.as_mut() {
                    block.code.push_str(&text);
                } else {
                    let escaped = escape_html(&text);
                    self.push(&escaped);
                }
            }
            Event::Code(code) => {
                let escaped = escape_html(&code);
                self.push(&format!("<code>{escaped}</code>"));
            }
            Event::SoftBreak => self.push("\n"),
            Event::HardBreak => self.push("<br />"),
            Event::Rule => self.push("<hr />"),
            // Raw HTML passes through unvalidated.
            Event::Html(html) | Event::InlineHtml(html) => self.push(&html),
            Event::TaskListMarker(_) => {}
            _ => {}
        }
    }

    fn start_tag(&mut self, tag: Tag<'_>) {
        match tag {
            Tag::Paragraph => self.push("<p>"),
            Tag::Heading { level, .. } => self.push(&format!("<h{}>", level as usize)),
            Tag::BlockQuote(_) => self.push("<blockquote>"),
            Tag::CodeBlock(kind) => {
                let language = match kind {
                    CodeBlockKind::Fenced(info) if !info.is_empty() => Some(info.to_string()),
                    _ => None,
                };
                self.code_block = Some(CodeBlock {
                    language,
                    code: String::new(),
                });
            }
            // No list container tag: items are concatenated and rebuilt later.
            Tag::List(_) => {}
            Tag::Item => self.push(ITEM_START),
            Tag::Emphasis => self.push("<em>"),
            Tag::Strong => self.push("<strong>"),
            Tag::Strikethrough => self.push("<del>"),
            Tag::Link { dest_url, .. } => self.captures.push(Capture::Link {
                url: escape_html(&dest_url),
                buf: String::new(),
            }),
            Tag::Image {
                dest_url, title, ..
            } => self.captures.push(Capture::Image {
                url: escape_html(&dest_url),
                title: escape_html(&title),
                buf: String::new(),
            }),
            Tag::Table(alignments) => {
                self.table.alignments = alignments;
                self.push("<table>");
            }
            Tag::TableHead => {
                self.table.in_head = true;
                self.table.cell_index = 0;
                self.push("<thead><tr>");
            }
            Tag::TableRow => {
                self.table.cell_index = 0;
                self.push("<tr>");
            }
            Tag::TableCell => {
                let tag = if self.table.in_head { "th" } else { "td" };
                let style = match self.table.alignments.get(self.table.cell_index) {
                    Some(Alignment::Left) => r#" style="text-align: left""#,
                    Some(Alignment::Center) => r#" style="text-align: center""#,
                    Some(Alignment::Right) => r#" style="text-align: right""#,
                    _ => "",
                };
                self.push(&format!("<{tag}{style}>"));
            }
            _ => {}
        }
    }

    fn end_tag(&mut self, tag: TagEnd) {
        match tag {
            TagEnd::Paragraph => self.push("</p>"),
            TagEnd::Heading(level) => self.push(&format!("</h{}>", level as usize)),
            TagEnd::BlockQuote(_) => self.push("</blockquote>"),
            TagEnd::CodeBlock => {
                if let Some(block) = self.code_block.take() {
                    let html = highlight_block(&block.code, block.language.as_deref());
                    self.push(&html);
                }
            }
            TagEnd::List(_) => {}
            TagEnd::Item => self.push(ITEM_END),
            TagEnd::Emphasis => self.push("</em>"),
            TagEnd::Strong => self.push("</strong>"),
            TagEnd::Strikethrough => self.push("</del>"),
            TagEnd::Link => {
                if let Some(Capture::Link { url, buf }) = self.captures.pop() {
                    let inline = self.links.record(&buf, &url);
                    self.push(&inline);
                }
            }
            TagEnd::Image => {
                if let Some(Capture::Image { url, title, buf }) = self.captures.pop() {
                    let alt = if !buf.is_empty() { buf } else { title };
                    self.push(&format!(r#"<img src="{url}" alt="{alt}" />"#));
                }
            }
            TagEnd::Table => {
                self.push("</tbody></table>");
                self.table = TableState::default();
            }
            TagEnd::TableHead => {
                self.table.in_head = false;
                self.push("</tr></thead><tbody>");
            }
            TagEnd::TableRow => self.push("</tr>"),
            TagEnd::TableCell => {
                let close = if self.table.in_head { "</th>" } else { "</td>" };
                self.push(close);
                self.table.cell_index += 1;
            }
            _ => {}
        }
    }
}

/// Escape text for use in HTML content and attribute values.
pub(crate) fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

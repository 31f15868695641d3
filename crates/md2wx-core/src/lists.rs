//! List reconstruction pass
//!
//! WeChat renders `<ul>`/`<ol>`/`<li>` unreliably and inserts blank lines
//! between items, so the renderer emits each item between inert sentinel
//! comments instead of real tags (items render before their containing list,
//! so the item rule cannot know its context). This pass rewrites every
//! sentinel pair into a self-contained flat block.
//!
//! Ordered lists get the same bullet glyph as unordered lists and nesting is
//! not tracked; every item becomes one flat block.

/// Sentinel opening a rendered list item.
pub const ITEM_START: &str = "<!--LISTITEM-->";
/// Sentinel closing a rendered list item.
pub const ITEM_END: &str = "<!--/LISTITEM-->";

/// Replace every sentinel pair with a `section.list-item` block. Purely
/// textual: each start sentinel pairs with the nearest end sentinel.
pub fn rebuild_list_items(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut rest = html;

    while let Some(start) = rest.find(ITEM_START) {
        out.push_str(&rest[..start]);
        let after = &rest[start + ITEM_START.len()..];

        match after.find(ITEM_END) {
            Some(end) => {
                let inner = after[..end].trim();
                out.push_str(r#"<section class="list-item"><span class="list-bullet">•</span>"#);
                out.push_str(inner);
                out.push_str("</section>");
                rest = &after[end + ITEM_END.len()..];
            }
            None => {
                // Unmatched start sentinel: keep it verbatim.
                out.push_str(ITEM_START);
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}

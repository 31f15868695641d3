//! md2wx-core: Core library for converting Markdown to WeChat article HTML
//!
//! The WeChat article editor discards `<style>` blocks, renders list
//! containers inconsistently, and strips external stylesheets. This crate
//! produces a single self-contained HTML fragment that survives pasting:
//!
//! - Markdown rendering via pulldown-cmark with platform-safe tags
//! - list items rewritten as flat `section` blocks (no `<ul>`/`<ol>`/`<li>`)
//! - links rewritten to numbered footnote references
//! - code blocks highlighted with syntect
//! - theme CSS inlined onto every matching element (css-inline)
//! - inter-tag whitespace stripped so no blank lines appear

pub mod assemble;
pub mod convert;
pub mod error;
pub mod highlight;
pub mod links;
pub mod lists;
pub mod render;
pub mod theme;

pub use convert::{Converter, convert};
pub use error::ConvertError;
pub use links::{LinkCollector, LinkEntry};
pub use theme::{DEFAULT_THEME, Theme};
